//! Error types surfaced at the collaborator boundary

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all engine operations
///
/// Generation itself never fails; every variant originates from a catalog,
/// publisher, or configuration boundary.
#[derive(Debug)]
pub enum EngineError {
    /// Catalog or publish target could not be reached
    Connectivity {
        /// Location that was being contacted
        endpoint: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Publish request was rejected before reaching the target
    Validation {
        /// Description of what is wrong with the request
        reason: String,
    },

    /// Catalog or palette document could not be parsed
    CatalogFormat {
        /// Path of the malformed document
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Value could not be rendered as JSON
    Serialization {
        /// Destination the rendered JSON was meant for
        target: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connectivity { endpoint, source } => {
                write!(f, "Could not reach '{endpoint}': {source}")
            }
            Self::Validation { reason } => write!(f, "Invalid request: {reason}"),
            Self::CatalogFormat { path, source } => {
                write!(f, "Malformed document '{}': {source}", path.display())
            }
            Self::Serialization { target, source } => {
                write!(f, "Could not serialize for '{}': {source}", target.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Connectivity { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::CatalogFormat { source, .. } | Self::Serialization { source, .. } => Some(source),
            Self::Validation { .. } | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, EngineError>;

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Attaches the path and operation to raw I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`EngineError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;

    /// Convert an I/O error into [`EngineError::Connectivity`]
    ///
    /// # Errors
    ///
    /// Propagates the original error tagged with the unreachable endpoint
    fn with_endpoint(self, path: &Path) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| EngineError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }

    fn with_endpoint(self, path: &Path) -> Result<T> {
        self.map_err(|source| EngineError::Connectivity {
            endpoint: path.display().to_string(),
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EngineError {
    EngineError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a request validation error
pub fn validation_error(reason: &impl ToString) -> EngineError {
    EngineError::Validation {
        reason: reason.to_string(),
    }
}
