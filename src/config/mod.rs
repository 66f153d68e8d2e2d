use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    currency::{LocaleConfig, MAX_MINOR_UNITS},
    errors::ConfigError,
};

const DEFAULT_DIR_NAME: &str = ".split_ledger";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// User preferences that shape amount display and share rounding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub currency_symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub minor_units: u8,
    /// Member name that identifies the device owner inside group expenses.
    pub self_name: String,
}

impl Default for Config {
    fn default() -> Self {
        let locale = LocaleConfig::default();
        Self {
            currency_symbol: locale.currency_symbol,
            decimal_separator: locale.decimal_separator,
            grouping_separator: locale.grouping_separator,
            minor_units: locale.minor_units,
            self_name: "Me".into(),
        }
    }
}

impl Config {
    pub fn locale(&self) -> LocaleConfig {
        LocaleConfig {
            currency_symbol: self.currency_symbol.clone(),
            decimal_separator: self.decimal_separator,
            grouping_separator: self.grouping_separator,
            minor_units: self.minor_units.min(MAX_MINOR_UNITS),
        }
    }
}

/// Returns the application data directory, defaulting to `~/.split_ledger`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("SPLIT_LEDGER_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Loads and stores [`Config`] as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl AsRef<Path>) -> Self {
        Self {
            path: base.as_ref().join(CONFIG_FILE),
        }
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            tracing::debug!(path = %self.path.display(), "loaded configuration");
            Ok(config)
        } else {
            tracing::debug!(path = %self.path.display(), "no configuration file, using defaults");
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "saved configuration");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_appends_suffix() {
        let tmp = tmp_path(Path::new("/data/config.json"));
        assert_eq!(tmp, PathBuf::from("/data/config.json.tmp"));
    }

    #[test]
    fn default_locale_matches_config_fields() {
        let config = Config::default();
        let locale = config.locale();
        assert_eq!(locale.currency_symbol, config.currency_symbol);
        assert_eq!(locale.minor_units, 2);
        assert_eq!(config.self_name, "Me");
    }

    #[test]
    fn locale_clamps_excessive_precision() {
        let config = Config {
            minor_units: 19,
            ..Config::default()
        };
        assert_eq!(config.locale().minor_units, MAX_MINOR_UNITS);
    }
}
