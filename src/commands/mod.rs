// commands/mod.rs
use crate::devices::{Device, SmartLight, Stereo, Tv};
use std::sync::Arc;

/// The contract every remote button action follows. A command binds its
/// target device (and any parameters) at construction and never rebinds;
/// re-parameterizing means constructing a new command.
pub trait Command: Send + Sync {
    fn execute(&self);
}

/// Turns on any device. Works through the `Device` capability, so the same
/// command type serves the TV, the stereo and the smart light.
pub struct TurnOnCommand {
    device: Arc<dyn Device>,
}

impl TurnOnCommand {
    pub fn new(device: Arc<dyn Device>) -> Self {
        Self { device }
    }
}

impl Command for TurnOnCommand {
    fn execute(&self) {
        self.device.turn_on();
    }
}

/// Counterpart of [`TurnOnCommand`].
pub struct TurnOffCommand {
    device: Arc<dyn Device>,
}

impl TurnOffCommand {
    pub fn new(device: Arc<dyn Device>) -> Self {
        Self { device }
    }
}

impl Command for TurnOffCommand {
    fn execute(&self) {
        self.device.turn_off();
    }
}

/// TV-specific command for an operation outside the shared capability.
pub struct ChangeChannelCommand {
    tv: Arc<Tv>,
}

impl ChangeChannelCommand {
    pub fn new(tv: Arc<Tv>) -> Self {
        Self { tv }
    }
}

impl Command for ChangeChannelCommand {
    fn execute(&self) {
        self.tv.change_channel();
    }
}

pub struct AdjustVolumeCommand {
    stereo: Arc<Stereo>,
}

impl AdjustVolumeCommand {
    pub fn new(stereo: Arc<Stereo>) -> Self {
        Self { stereo }
    }
}

impl Command for AdjustVolumeCommand {
    fn execute(&self) {
        self.stereo.adjust_volume();
    }
}

/// Parameterized command: the brightness level is captured at construction.
pub struct SetBrightnessCommand {
    light: Arc<SmartLight>,
    level: u8,
}

impl SetBrightnessCommand {
    pub fn new(light: Arc<SmartLight>, level: u8) -> Self {
        Self { light, level }
    }
}

impl Command for SetBrightnessCommand {
    fn execute(&self) {
        self.light.adjust_brightness(self.level);
    }
}

pub struct SetColorCommand {
    light: Arc<SmartLight>,
    color: String,
}

impl SetColorCommand {
    pub fn new(light: Arc<SmartLight>, color: impl Into<String>) -> Self {
        Self {
            light,
            color: color.into(),
        }
    }
}

impl Command for SetColorCommand {
    fn execute(&self) {
        self.light.adjust_color(&self.color);
    }
}
