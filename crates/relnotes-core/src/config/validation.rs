//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_labels(config)?;
    validate_output(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_labels(config: &Config) -> Result<()> {
    for (key, label) in &config.labels {
        if key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "labels".to_string(),
                message: "label identifier cannot be empty".to_string(),
            }
            .into());
        }

        if label.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("labels.{}", key),
                message: "label cannot be empty".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_output(config: &Config) -> Result<()> {
    let Some(extension) = &config.output.extension else {
        return Ok(());
    };

    if extension.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "output.extension".to_string(),
            message: "extension cannot be empty".to_string(),
        }
        .into());
    }

    if extension.contains(['.', '/', '\\']) {
        return Err(ConfigError::InvalidValue {
            field: "output.extension".to_string(),
            message: "must not contain '.', '/' or '\\'".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_empty_label() {
        let mut config = Config::default();
        config.labels.insert("grpc".to_string(), "  ".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_extension_with_dot() {
        let mut config = Config::default();
        config.output.extension = Some(".md".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_extension() {
        let mut config = Config::default();
        config.output.extension = Some(String::new());
        assert!(validate_config(&config).is_err());
    }
}
