// events/mod.rs
use crate::models::DeviceEvent;
use tracing::{error, info};

/// Sink for the observable side effects of device operations.
///
/// Devices emit exactly one event per operation. Injecting the sink keeps
/// the receivers free of hardwired console output and lets tests capture
/// effects instead of scraping stdout.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: DeviceEvent);
}

/// Logs each event as a JSON line, for the demo binary.
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&self, event: DeviceEvent) {
        match serde_json::to_string(&event) {
            Ok(json) => info!(event = %json, "device event"),
            Err(e) => error!("Failed to serialize event: {}", e),
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Captures events in emission order for assertions.
    #[derive(Default)]
    pub struct RecordingSink {
        events: Mutex<Vec<DeviceEvent>>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<DeviceEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl EventSink for RecordingSink {
        fn emit(&self, event: DeviceEvent) {
            self.events.lock().unwrap().push(event);
        }
    }
}
