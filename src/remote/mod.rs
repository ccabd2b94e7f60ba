// remote/mod.rs
use crate::commands::Command;
use crate::error::RemoteError;
use std::sync::Arc;
use tracing::debug;

/// Universal remote with a single programmable button. It never learns what
/// a command does or which device it targets; it only executes whatever is
/// currently assigned.
#[derive(Default)]
pub struct RemoteControl {
    command: Option<Arc<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Programs the button, replacing any previously assigned command.
    pub fn set_command(&mut self, command: Arc<dyn Command>) {
        debug!("Command assigned to button");
        self.command = Some(command);
    }

    /// Executes the assigned command, or reports that nothing is assigned.
    pub fn press_button(&self) -> Result<(), RemoteError> {
        match &self.command {
            Some(command) => {
                command.execute();
                Ok(())
            }
            None => Err(RemoteError::NoCommandAssigned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{SetColorCommand, TurnOnCommand};
    use crate::devices::{SmartLight, Tv};
    use crate::events::testing::RecordingSink;
    use crate::models::DeviceEvent;

    #[test]
    fn pressing_with_no_command_reports_and_does_nothing() {
        let remote = RemoteControl::new();
        assert_eq!(remote.press_button(), Err(RemoteError::NoCommandAssigned));
    }

    #[test]
    fn assigning_replaces_the_previous_command() {
        let sink = Arc::new(RecordingSink::new());
        let light = Arc::new(SmartLight::new("light_001", sink.clone()));

        let mut remote = RemoteControl::new();
        remote.set_command(Arc::new(SetColorCommand::new(light.clone(), "red")));
        remote.press_button().unwrap();

        remote.set_command(Arc::new(SetColorCommand::new(light, "blue")));
        remote.press_button().unwrap();

        // The second press runs only the newly assigned command.
        assert_eq!(
            sink.events(),
            vec![
                DeviceEvent::ColorChanged {
                    device_id: "light_001".into(),
                    color: "red".into(),
                },
                DeviceEvent::ColorChanged {
                    device_id: "light_001".into(),
                    color: "blue".into(),
                },
            ]
        );
    }

    #[test]
    fn repeated_presses_repeat_the_effect() {
        let sink = Arc::new(RecordingSink::new());
        let tv = Arc::new(Tv::new("tv_001", sink.clone()));

        let mut remote = RemoteControl::new();
        remote.set_command(Arc::new(TurnOnCommand::new(tv)));
        remote.press_button().unwrap();
        remote.press_button().unwrap();

        let expected = DeviceEvent::PoweredOn {
            device_id: "tv_001".into(),
        };
        assert_eq!(sink.events(), vec![expected.clone(), expected]);
    }
}
