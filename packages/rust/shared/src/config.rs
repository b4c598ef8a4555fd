//! Application configuration for skillmeta.
//!
//! User config lives at `~/.skillmeta/skillmeta.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillMetaError};
use crate::types::Field;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "skillmeta.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".skillmeta";

// ---------------------------------------------------------------------------
// Config structs (matching skillmeta.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Extraction tuning.
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Maximum number of READMEs summarized at once in batch mode.
    #[serde(default = "default_concurrency")]
    pub concurrency: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}

fn default_concurrency() -> u32 {
    4
}

/// `[extraction]` section: everything the summarizer can be tuned with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Minimum similarity per canonical field.
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Invocation phrases stripped from the front of example utterances,
    /// tried in order.
    #[serde(default = "default_wake_words")]
    pub wake_words: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            wake_words: default_wake_words(),
        }
    }
}

fn default_wake_words() -> Vec<String> {
    vec!["hey mycroft".into(), "mycroft".into(), "hey-mycroft".into()]
}

/// `[extraction.thresholds]` section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Fallback threshold for fields without their own entry.
    #[serde(default = "default_threshold")]
    pub default: f64,

    /// First heading vs. skill name.
    #[serde(default = "default_title_threshold")]
    pub title: f64,

    /// `require` heading.
    #[serde(default = "default_strict_threshold")]
    pub require: f64,

    /// `exclude` heading.
    #[serde(default = "default_strict_threshold")]
    pub exclude: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            default: default_threshold(),
            title: default_title_threshold(),
            require: default_strict_threshold(),
            exclude: default_strict_threshold(),
        }
    }
}

impl Thresholds {
    /// Minimum similarity a heading needs to be accepted for `field`.
    pub fn for_field(&self, field: Field) -> f64 {
        match field {
            Field::Title => self.title,
            Field::Require => self.require,
            Field::Exclude => self.exclude,
            Field::Author | Field::Description | Field::Examples | Field::Usage => self.default,
        }
    }

    fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("default", self.default),
            ("title", self.title),
            ("require", self.require),
            ("exclude", self.exclude),
        ]
        .into_iter()
    }
}

fn default_threshold() -> f64 {
    0.5
}
fn default_title_threshold() -> f64 {
    0.3
}
fn default_strict_threshold() -> f64 {
    0.9
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.skillmeta/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| SkillMetaError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.skillmeta/skillmeta.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load and validate the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| SkillMetaError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        SkillMetaError::config(format!("failed to parse {}: {e}", path.display()))
    })?;

    validate_config(&config)?;
    Ok(config)
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| SkillMetaError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| SkillMetaError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| SkillMetaError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Reject thresholds outside `0.0..=1.0` and a zero concurrency limit.
pub fn validate_config(config: &AppConfig) -> Result<()> {
    if config.defaults.concurrency == 0 {
        return Err(SkillMetaError::config("defaults.concurrency must be at least 1"));
    }

    for (name, value) in config.extraction.thresholds.iter() {
        if !(0.0..=1.0).contains(&value) {
            return Err(SkillMetaError::config(format!(
                "extraction.thresholds.{name} must be between 0.0 and 1.0, got {value}"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("concurrency"));
        assert!(toml_str.contains("hey mycroft"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.defaults.concurrency, 4);
        assert_eq!(parsed.extraction, ExtractionConfig::default());
    }

    #[test]
    fn partial_thresholds_fill_defaults() {
        let toml_str = r#"
[extraction.thresholds]
require = 0.75
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        let t = config.extraction.thresholds;
        assert_eq!(t.require, 0.75);
        assert_eq!(t.exclude, 0.9);
        assert_eq!(t.default, 0.5);
        assert_eq!(config.extraction.wake_words.len(), 3);
    }

    #[test]
    fn thresholds_per_field() {
        let t = Thresholds::default();
        assert_eq!(t.for_field(Field::Title), 0.3);
        assert_eq!(t.for_field(Field::Examples), 0.5);
        assert_eq!(t.for_field(Field::Author), 0.5);
        assert_eq!(t.for_field(Field::Require), 0.9);
        assert_eq!(t.for_field(Field::Exclude), 0.9);
    }

    #[test]
    fn validation_rejects_out_of_range_threshold() {
        let mut config = AppConfig::default();
        config.extraction.thresholds.title = 1.5;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("thresholds.title"));

        let mut config = AppConfig::default();
        config.defaults.concurrency = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn load_config_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[defaults]\nconcurrency = 8\n").expect("write");

        let config = load_config_from(&path).expect("load");
        assert_eq!(config.defaults.concurrency, 8);
    }
}
