// stereo.rs
use crate::{events::EventSink, models::DeviceEvent};
use std::sync::Arc;

pub struct Stereo {
    device_id: String,
    sink: Arc<dyn EventSink>,
}

impl Stereo {
    pub fn new(device_id: impl Into<String>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            device_id: device_id.into(),
            sink,
        }
    }

    pub fn adjust_volume(&self) {
        self.sink.emit(DeviceEvent::VolumeAdjusted {
            device_id: self.device_id.clone(),
        });
    }
}

impl super::Device for Stereo {
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
