//! Error types for record transformation
//!
//! Every variant carries the id of the record that failed so the caller can
//! report which person could not be converted.

use thiserror::Error;

/// A person record that cannot be turned into a contact
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedRecordError {
    /// A required field is absent
    #[error("record '{record_id}': missing required field '{field}'")]
    MissingField {
        record_id: String,
        field: &'static str,
    },

    /// A required field is present but not a string
    #[error("record '{record_id}': field '{field}' is not a string")]
    NotAString {
        record_id: String,
        field: &'static str,
    },

    /// Date of birth is not a MM-DD-YYYY triplet
    #[error(
        "record '{record_id}': dateOfBirth '{value}' is not in MM-DD-YYYY form \
         (two-digit month and day, four-digit year)"
    )]
    InvalidDate { record_id: String, value: String },

    /// Lifetime value does not start with the currency sigil
    #[error("record '{record_id}': lifetimeValue '{value}' does not start with '{sigil}'")]
    MissingSigil {
        record_id: String,
        value: String,
        sigil: char,
    },

    /// Lifetime value after the sigil is not a plain decimal number
    #[error("record '{record_id}': lifetimeValue '{value}' is not a decimal amount")]
    InvalidAmount { record_id: String, value: String },
}

impl MalformedRecordError {
    /// Id of the offending record
    pub fn record_id(&self) -> &str {
        match self {
            MalformedRecordError::MissingField { record_id, .. }
            | MalformedRecordError::NotAString { record_id, .. }
            | MalformedRecordError::InvalidDate { record_id, .. }
            | MalformedRecordError::MissingSigil { record_id, .. }
            | MalformedRecordError::InvalidAmount { record_id, .. } => record_id,
        }
    }

    /// Short machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            MalformedRecordError::MissingField { .. } => "MISSING_FIELD",
            MalformedRecordError::NotAString { .. } => "FIELD_NOT_STRING",
            MalformedRecordError::InvalidDate { .. } => "INVALID_DATE",
            MalformedRecordError::MissingSigil { .. } => "MISSING_SIGIL",
            MalformedRecordError::InvalidAmount { .. } => "INVALID_AMOUNT",
        }
    }
}

/// Result type alias for transform operations
pub type Result<T> = std::result::Result<T, MalformedRecordError>;
