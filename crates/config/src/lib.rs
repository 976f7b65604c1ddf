pub mod schema;
pub mod watcher;

pub use schema::{PowerAiConfig, SimulatorConfig, ThemeConfig, WindowConfig, MIN_FONT_SIZE};
pub use watcher::ConfigWatcher;

use powerai_core::{PowerAiError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `PowerAiConfig::default()`
/// if the file doesn't exist so the dashboard always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<PowerAiConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(PowerAiConfig::default());
    }

    let raw = std::fs::read_to_string(path)?;

    let config: PowerAiConfig =
        toml::from_str(&raw).map_err(|e| PowerAiError::Config(format!("TOML parse error: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("powerai").join("powerai.toml")
}
