//! Core error types for diagram generation
//!
//! This module defines the error taxonomy used throughout the signature pipeline.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, DiagramError>;

/// Core error types for diagram generation
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Discovery error in '{}': {message}", path.display())]
    Discovery { path: PathBuf, message: String },

    #[error("No class or interface signature found in '{}'", path.display())]
    MissingClassSignature { path: PathBuf },

    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed signature '{line}': {message}")]
    MalformedSignature { line: String, message: String },

    #[error("Config error: {message}")]
    Config { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl DiagramError {
    /// Create a new discovery error
    pub fn discovery(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Discovery {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a missing class signature error for a source that has no path yet
    pub fn missing_class_signature() -> Self {
        Self::MissingClassSignature {
            path: PathBuf::new(),
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a new malformed signature error
    pub fn malformed(line: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedSignature {
            line: line.into(),
            message: message.into(),
        }
    }

    /// Create a new config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Attach a file path to an error raised while the path was unknown
    pub fn at_path(self, path: &Path) -> Self {
        match self {
            Self::MissingClassSignature { .. } => Self::MissingClassSignature {
                path: path.to_path_buf(),
            },
            other => other,
        }
    }

    /// Whether this error aborts the whole run rather than a single group
    pub fn is_fatal_for_run(&self) -> bool {
        matches!(self, Self::Discovery { .. } | Self::Config { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_error() {
        let error = DiagramError::discovery("/src/Models", "permission denied");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Discovery error"));
        assert!(error_msg.contains("/src/Models"));
        assert!(error_msg.contains("permission denied"));
        assert!(error.is_fatal_for_run());
    }

    #[test]
    fn test_missing_class_signature_at_path() {
        let error = DiagramError::missing_class_signature().at_path(Path::new("Models/Shape.cs"));
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("No class or interface signature"));
        assert!(error_msg.contains("Shape.cs"));
        assert!(!error.is_fatal_for_run());
    }

    #[test]
    fn test_at_path_keeps_other_errors() {
        let error = DiagramError::config("bad json").at_path(Path::new("ignored.cs"));
        assert!(matches!(error, DiagramError::Config { .. }));
    }

    #[test]
    fn test_malformed_error() {
        let error = DiagramError::malformed("public int", "missing member name");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Malformed signature"));
        assert!(error_msg.contains("public int"));
        assert!(error_msg.contains("missing member name"));
    }

    #[test]
    fn test_read_error() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = DiagramError::read("Models/Gone.cs", io_err);
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Failed to read"));
        assert!(error_msg.contains("Gone.cs"));
        assert!(error_msg.contains("File not found"));
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: DiagramError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("File not found"));
    }
}
