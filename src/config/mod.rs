// config/mod.rs
use config::Config;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Deserialize)]
pub struct LogSettings {
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, config::ConfigError> {
        // The config file is optional; the demo runs fine on defaults.
        let settings = Config::builder()
            .add_source(config::File::with_name("config/config").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("_"))
            .build()?;

        settings.try_deserialize()
    }
}
