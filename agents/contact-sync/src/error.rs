//! Error types for the Contact Sync Agent
//!
//! `SyncError` names the stage a run stopped in, so the CLI can report it and
//! pick an exit code.

use contact_sync_core::MalformedRecordError;
use thiserror::Error;

use crate::cli::ExitCode;
use crate::client::{CreateError, FetchError};

/// Main error type for sync operations
#[derive(Error, Debug)]
pub enum SyncError {
    /// People could not be fetched
    #[error("fetch stage failed: {0}")]
    Fetch(#[from] FetchError),

    /// A person record could not be transformed
    #[error("transform stage failed: {0}")]
    Transform(#[from] MalformedRecordError),

    /// A contact could not be created; earlier contacts were
    #[error("create stage failed after {created} contact(s) were created: {source}")]
    Create {
        created: usize,
        #[source]
        source: CreateError,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// File access or I/O error
    #[error("File error: {0}")]
    File(String),

    /// Parsing or serialization error
    #[error("Parse error: {0}")]
    Parse(String),
}

impl SyncError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        SyncError::Config(msg.into())
    }

    /// Create a file error
    pub fn file(msg: impl Into<String>) -> Self {
        SyncError::File(msg.into())
    }

    /// Pipeline stage the error belongs to
    pub fn stage(&self) -> &'static str {
        match self {
            SyncError::Fetch(_) => "fetch",
            SyncError::Transform(_) => "transform",
            SyncError::Create { .. } => "create",
            SyncError::Config(_) | SyncError::File(_) | SyncError::Parse(_) => "setup",
        }
    }

    /// Exit code for the CLI
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SyncError::Fetch(_) => ExitCode::FetchFailed,
            SyncError::Transform(_) => ExitCode::TransformFailed,
            SyncError::Create { .. } => ExitCode::CreateFailed,
            SyncError::Config(_) | SyncError::File(_) | SyncError::Parse(_) => {
                ExitCode::InvalidInput
            }
        }
    }
}

impl From<std::io::Error> for SyncError {
    fn from(err: std::io::Error) -> Self {
        SyncError::File(err.to_string())
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Parse(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for SyncError {
    fn from(err: serde_yaml::Error) -> Self {
        SyncError::Parse(format!("YAML error: {}", err))
    }
}

impl From<toml::de::Error> for SyncError {
    fn from(err: toml::de::Error) -> Self {
        SyncError::Parse(format!("TOML error: {}", err))
    }
}

/// Result type alias for sync operations
pub type Result<T> = std::result::Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_stage() {
        let err = SyncError::from(FetchError::Server {
            status: 400,
            message: String::new(),
        });
        assert_eq!(
            err.to_string(),
            "fetch stage failed: Failed to get people data: server returned 400: "
        );
        assert_eq!(err.stage(), "fetch");

        let err = SyncError::Create {
            created: 1,
            source: CreateError::Server {
                airtable_id: "rec2".to_string(),
                status: 400,
                message: "bad".to_string(),
            },
        };
        assert!(err.to_string().starts_with("create stage failed after 1 contact(s)"));
        assert_eq!(err.stage(), "create");
    }

    #[test]
    fn test_exit_codes() {
        let err = SyncError::from(MalformedRecordError::MissingField {
            record_id: "rec1".to_string(),
            field: "email",
        });
        assert_eq!(err.exit_code(), ExitCode::TransformFailed);
        assert_eq!(SyncError::config("x").exit_code(), ExitCode::InvalidInput);
        assert_eq!(
            SyncError::from(FetchError::Network("down".to_string())).exit_code(),
            ExitCode::FetchFailed
        );
    }

    #[test]
    fn test_conversions() {
        let err: SyncError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, SyncError::Parse(_)));

        let err: SyncError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, SyncError::File(_)));
    }
}
