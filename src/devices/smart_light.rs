// smart_light.rs
use crate::{events::EventSink, models::DeviceEvent};
use std::sync::Arc;
use tracing::warn;

pub struct SmartLight {
    device_id: String,
    sink: Arc<dyn EventSink>,
}

impl SmartLight {
    pub fn new(device_id: impl Into<String>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            device_id: device_id.into(),
            sink,
        }
    }

    /// Levels above 100 are clamped; the contract has no failure path.
    pub fn adjust_brightness(&self, level: u8) {
        let level = if level > 100 {
            warn!(%level, device_id = %self.device_id, "Brightness out of range, clamping to 100");
            100
        } else {
            level
        };
        self.sink.emit(DeviceEvent::BrightnessSet {
            device_id: self.device_id.clone(),
            level,
        });
    }

    pub fn adjust_color(&self, color: &str) {
        self.sink.emit(DeviceEvent::ColorChanged {
            device_id: self.device_id.clone(),
            color: color.to_string(),
        });
    }
}

impl super::Device for SmartLight {
    fn turn_on(&self) {
        self.sink.emit(DeviceEvent::PoweredOn {
            device_id: self.device_id.clone(),
        });
    }

    fn turn_off(&self) {
        self.sink.emit(DeviceEvent::PoweredOff {
            device_id: self.device_id.clone(),
        });
    }
}
