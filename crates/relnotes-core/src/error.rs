//! Error types for relnotes

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RelnotesError
pub type Result<T> = std::result::Result<T, RelnotesError>;

/// Main error type for relnotes operations
#[derive(Debug, Error)]
pub enum RelnotesError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Release note input errors
    #[error(transparent)]
    Note(#[from] NoteError),

    /// IO errors on a specific file
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RelnotesError {
    /// Create an IO error bound to a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors in a release notes record
#[derive(Debug, Error)]
pub enum NoteError {
    /// The structured input could not be parsed
    #[error("Malformed release notes in {origin}: {source}")]
    MalformedInput {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A required field is absent
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// The date text matches none of the supported formats
    #[error("Unsupported date format: '{0}' (expected e.g. 'Jan 5, 2023' or 'January 5, 2023')")]
    UnsupportedDateFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_date_message_includes_text() {
        let err: RelnotesError = NoteError::UnsupportedDateFormat("2023/01/05".to_string()).into();
        assert!(err.to_string().contains("'2023/01/05'"));
    }

    #[test]
    fn test_io_error_names_path() {
        let err = RelnotesError::io(
            "out/v1.0.0.md",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        );
        assert!(err.to_string().contains("out/v1.0.0.md"));
    }
}
