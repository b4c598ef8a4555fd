//! Error types for skillmeta.
//!
//! Library crates use [`SkillMetaError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all skillmeta operations.
#[derive(Debug, thiserror::Error)]
pub enum SkillMetaError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Document or repository URL could not be interpreted.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Skill manifest could not be read or is malformed.
    #[error("manifest error: {message}")]
    Manifest { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Caller-supplied input is unusable (blank skill name, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SkillMetaError>;

impl SkillMetaError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a manifest error from any displayable message.
    pub fn manifest(msg: impl Into<String>) -> Self {
        Self::Manifest {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = SkillMetaError::config("bad threshold");
        assert_eq!(err.to_string(), "config error: bad threshold");

        let err = SkillMetaError::validation("skill name is empty");
        assert!(err.to_string().contains("skill name is empty"));
    }

    #[test]
    fn io_error_keeps_path() {
        let err = SkillMetaError::io(
            "/tmp/missing/README.md",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let msg = err.to_string();
        assert!(msg.contains("README.md"));
        assert!(msg.contains("gone"));
    }
}
