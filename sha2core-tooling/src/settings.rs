use config::{Config, ConfigError, Environment, File};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    pub static ref SETTINGS: Settings = Settings::new().expect("invalid configuration");
}

const SETTINGS_PATH: &str = "./sha2core.config.toml";
const PREFIX: &str = "SHA2CORE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Largest input, in bytes, that is loaded into memory for hashing.
    pub max_input_size: u64,
    /// Render digests with upper case hex digits.
    pub uppercase: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_input_size: 1 << 30,
            uppercase: false,
        }
    }
}

impl Settings {
    fn new() -> Result<Settings, ConfigError> {
        Config::builder()
            .add_source(File::with_name(SETTINGS_PATH).required(false))
            .add_source(Environment::with_prefix(PREFIX))
            .build()?
            .try_deserialize()
    }
}
