//! Clients for the upstream people and contacts endpoints
//!
//! The pipeline talks to both endpoints through the [`PeopleSource`] and
//! [`ContactSink`] traits; the HTTP implementations live in the submodules.
//! Neither client retries.

mod contacts;
mod people;

pub use contacts::HttpContactSink;
pub use people::HttpPeopleSource;

use contact_sync_core::contracts::{NormalizedContact, SourceRecord};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

/// Read-only source of person records
pub trait PeopleSource: Send + Sync {
    /// Fetch the full people list in one call
    fn fetch_all(&self) -> BoxFuture<'_, Result<Vec<SourceRecord>, FetchError>>;
}

/// Write-only destination for contacts
pub trait ContactSink: Send + Sync {
    /// Create one contact
    fn create<'a>(
        &'a self,
        contact: &'a NormalizedContact,
    ) -> BoxFuture<'a, Result<Acknowledgement, CreateError>>;
}

/// Successful contact creation
///
/// The body is kept for logging only; nothing downstream inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub status: u16,
    #[serde(default)]
    pub body: serde_json::Value,
}

/// People fetch errors
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to get people data: network error: {0}")]
    Network(String),

    #[error("Failed to get people data: server returned {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Failed to get people data: invalid response body: {0}")]
    Parse(String),
}

impl FetchError {
    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Contact creation errors
#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    #[error("Failed to create contact '{airtable_id}': network error: {message}")]
    Network {
        airtable_id: String,
        message: String,
    },

    #[error("Failed to create contact '{airtable_id}': server returned {status}: {message}")]
    Server {
        airtable_id: String,
        status: u16,
        message: String,
    },
}

impl CreateError {
    /// Source record id of the contact that failed
    pub fn airtable_id(&self) -> &str {
        match self {
            CreateError::Network { airtable_id, .. } | CreateError::Server { airtable_id, .. } => {
                airtable_id
            }
        }
    }

    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            CreateError::Server { status, .. } => Some(*status),
            CreateError::Network { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Server {
            status: 400,
            message: "bad".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to get people data: server returned 400: bad"
        );
        assert_eq!(err.status(), Some(400));
        assert_eq!(FetchError::Parse("eof".to_string()).status(), None);
    }

    #[test]
    fn test_create_error_accessors() {
        let err = CreateError::Server {
            airtable_id: "rec1".to_string(),
            status: 422,
            message: String::new(),
        };
        assert_eq!(err.airtable_id(), "rec1");
        assert_eq!(err.status(), Some(422));
        assert!(err.to_string().starts_with("Failed to create contact 'rec1'"));

        let err = CreateError::Network {
            airtable_id: "rec2".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(err.airtable_id(), "rec2");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_acknowledgement_body_defaults_to_null() {
        let ack: Acknowledgement = serde_json::from_str(r#"{"status": 200}"#).unwrap();
        assert_eq!(ack.status, 200);
        assert!(ack.body.is_null());
    }
}
