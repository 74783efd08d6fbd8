use anyhow::{bail, Context, Result};
use ::config::{Config, Environment, File};
use serde::Deserialize;
use tracing::info;

/// Prefix for environment overrides, e.g. `NER_TAGGER_CLASSIFICATION_NAME`
pub const ENV_PREFIX: &str = "NER_TAGGER";

/// Default classification the sensitivity tags live under
pub const DEFAULT_CLASSIFICATION: &str = "PII";

/// Configuration for tagging detected entities
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaggerConfig {
    /// Classification name used as the tag FQN prefix
    pub classification_name: String,

    /// Directory for log files (logs go to stderr if None)
    #[serde(default)]
    pub log_dir: Option<String>,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            classification_name: DEFAULT_CLASSIFICATION.to_string(),
            log_dir: None,
        }
    }
}

impl TaggerConfig {
    /// Loads defaults, then the optional file, then `NER_TAGGER_*` environment variables
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("classification_name", DEFAULT_CLASSIFICATION)
            .context("Failed to set configuration defaults")?;

        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path).required(false));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to build configuration")?;

        let config: TaggerConfig = settings
            .try_deserialize()
            .context("Failed to deserialize tagger configuration")?;
        config.validate()?;

        info!(
            "Loaded tagger configuration: classification={}",
            config.classification_name
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.classification_name.trim().is_empty() {
            bail!("classification_name cannot be empty");
        }
        if self.classification_name.contains('.') {
            bail!(
                "classification_name must not contain '.': {}",
                self.classification_name
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TaggerConfig::default();
        assert_eq!(config.classification_name, "PII");
        assert!(config.log_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_names() {
        let empty = TaggerConfig {
            classification_name: "  ".to_string(),
            log_dir: None,
        };
        assert!(empty.validate().is_err());

        let dotted = TaggerConfig {
            classification_name: "PII.Extra".to_string(),
            log_dir: None,
        };
        assert!(dotted.validate().is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = TaggerConfig::load(Some("does/not/exist/tagger.toml")).unwrap();
        assert!(!config.classification_name.is_empty());
    }
}
