use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const APP_DIR: &str = "timeledger";
const DEFAULT_LEDGER_FILE: &str = "apontamentos.json";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TimeledgerConfig {
    #[serde(default)]
    pub ledger: LedgerSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LedgerSection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    /// tracing filter level (error, warn, info, debug, trace)
    pub level: Option<String>,
}

impl TimeledgerConfig {
    pub fn new(ledger_path: PathBuf) -> Self {
        Self {
            ledger: LedgerSection {
                path: Some(ledger_path.to_string_lossy().to_string()),
            },
            logging: LoggingSection::default(),
        }
    }
}

pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("TIMELEDGER_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_ledger_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(DEFAULT_LEDGER_FILE))
}

/// Read the config file, treating a missing file as all defaults.
pub fn load_config(path: &Path) -> anyhow::Result<TimeledgerConfig> {
    if !path.exists() {
        return Ok(TimeledgerConfig::default());
    }
    read_config(path)
}

pub fn read_config(path: &Path) -> anyhow::Result<TimeledgerConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &TimeledgerConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join(APP_DIR));
        }
    }
    Ok(home_dir()?.join(".config").join(APP_DIR))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join(APP_DIR));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join(APP_DIR))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: TimeledgerConfig = toml::from_str(
            "[ledger]\npath = \"/tmp/apontamentos.json\"\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();
        assert_eq!(config.ledger.path.as_deref(), Some("/tmp/apontamentos.json"));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config: TimeledgerConfig = toml::from_str("").unwrap();
        assert!(config.ledger.path.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = TimeledgerConfig::new(PathBuf::from("/data/apontamentos.json"));
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: TimeledgerConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.ledger.path, config.ledger.path);
    }
}
