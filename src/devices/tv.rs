// tv.rs
use crate::{events::EventSink, models::DeviceEvent};
use std::sync::Arc;

pub struct Tv {
    device_id: String,
    sink: Arc<dyn EventSink>,
}

impl Tv {
    pub fn new(device_id: impl Into<String>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            device_id: device_id.into(),
            sink,
        }
    }

    pub fn change_channel(&self) {
        self.sink.emit(DeviceEvent::ChannelChanged {
            device_id: self.device_id.clone(),
        });
    }
}

impl super::Device for Tv {
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
