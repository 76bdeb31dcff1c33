//! Configuration loading

use std::path::Path;

use tracing::{debug, info};

use crate::error::{ConfigError, Result};

use super::types::Config;
use super::validation::validate_config;

/// Load configuration from an explicitly given file.
///
/// TOML is selected by a `.toml` extension, YAML otherwise. An empty YAML
/// file yields the defaults.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()).into());
    }

    let format = if path.extension().is_some_and(|e| e == "toml") {
        "TOML"
    } else {
        "YAML"
    };
    info!(path = %path.display(), format, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config: Config = if format == "TOML" {
        toml::from_str(&content).map_err(ConfigError::TomlError)?
    } else if content.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?
    };

    validate_config(&config)?;
    debug!(path = %path.display(), labels = config.labels.len(), "config loaded and validated");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelnotesError;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("relnotes.toml");
        std::fs::write(&config_path, "[labels]\ngrpc = \"gRPC\"\n").unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.labels["grpc"], "gRPC");
    }

    #[test]
    fn test_load_empty_yaml_is_default() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("relnotes.yaml");
        std::fs::write(&config_path, "\n").unwrap();

        assert_eq!(load_config(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_config_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load_config(&temp.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(
            err,
            RelnotesError::Config(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("relnotes.yaml");
        std::fs::write(&config_path, "output:\n  extension: .md\n").unwrap();

        let err = load_config(&config_path).unwrap_err();
        assert!(matches!(
            err,
            RelnotesError::Config(ConfigError::InvalidValue { .. })
        ));
    }
}
