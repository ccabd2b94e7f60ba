// models.rs
use serde::{Deserialize, Serialize};

/// One notification per device operation, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeviceEvent {
    PoweredOn { device_id: String },
    PoweredOff { device_id: String },
    ChannelChanged { device_id: String },
    VolumeAdjusted { device_id: String },
    BrightnessSet { device_id: String, level: u8 },
    ColorChanged { device_id: String, color: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_tag() {
        let event = DeviceEvent::ColorChanged {
            device_id: "light_001".into(),
            color: "red".into(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"type":"color_changed","device_id":"light_001","color":"red"}"#
        );
    }
}
