use std::path::{Path, PathBuf};

use serde::Deserialize;
use yson_time::{FractionStyle, TimeCodec};

use crate::error::ToolError;

/// Contents of `config.toml`.
///
/// ```toml
/// log_level = "debug"
///
/// [codec]
/// fraction = "micros"
/// ```
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub codec: TimeCodec,
    pub log_level: Option<String>,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("yson-time").join("config.toml"))
}

/// Loads the config file.
///
/// An explicit path must exist. The default location is optional and a
/// missing file yields the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ToolError> {
    let content = match explicit {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let Some(path) = config_path() else {
                return Ok(Config::default());
            };
            match std::fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    return Ok(Config::default());
                }
                Err(e) => return Err(e.into()),
            }
        }
    };

    Ok(toml::from_str(&content)?)
}

/// Command-line flags win over the config file.
pub fn resolve_codec(cli_fraction: Option<FractionStyle>, config: &Config) -> TimeCodec {
    match cli_fraction {
        Some(fraction) => TimeCodec::new(fraction),
        None => config.codec,
    }
}

pub fn resolve_log_level(cli_level: Option<String>, config: &Config) -> String {
    cli_level
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| "warn".to_string())
}
