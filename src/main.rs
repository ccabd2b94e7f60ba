// main.rs
mod commands;
mod config;
mod devices;
mod error;
mod events;
mod models;
mod remote;

use commands::{
    AdjustVolumeCommand, ChangeChannelCommand, SetBrightnessCommand, SetColorCommand,
    TurnOffCommand, TurnOnCommand,
};
use devices::{SmartLight, Stereo, Tv};
use events::{ConsoleSink, EventSink};
use remote::RemoteControl;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let settings = config::Settings::new()
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&settings.log.filter)
                .map_err(|e| anyhow::anyhow!("Invalid log filter: {}", e))?,
        )
        .init();

    // Receivers. The sink is the only place device effects surface.
    let sink: Arc<dyn EventSink> = Arc::new(ConsoleSink);
    let tv = Arc::new(Tv::new("tv_001", sink.clone()));
    let stereo = Arc::new(Stereo::new("stereo_001", sink.clone()));
    let light = Arc::new(SmartLight::new("light_001", sink));

    let mut remote = RemoteControl::new();

    // Pressing before programming anything is reported, not fatal.
    if let Err(e) = remote.press_button() {
        warn!("{}", e);
    }

    remote.set_command(Arc::new(TurnOnCommand::new(tv.clone())));
    press(&remote);

    remote.set_command(Arc::new(AdjustVolumeCommand::new(stereo)));
    press(&remote);

    remote.set_command(Arc::new(ChangeChannelCommand::new(tv.clone())));
    press(&remote);

    remote.set_command(Arc::new(TurnOffCommand::new(tv)));
    press(&remote);

    remote.set_command(Arc::new(TurnOnCommand::new(light.clone())));
    press(&remote);

    remote.set_command(Arc::new(SetColorCommand::new(light.clone(), "red")));
    press(&remote);

    remote.set_command(Arc::new(SetBrightnessCommand::new(light, 75)));
    press(&remote);

    info!("Demo sequence finished");
    Ok(())
}

fn press(remote: &RemoteControl) {
    if let Err(e) = remote.press_button() {
        warn!("{}", e);
    }
}
