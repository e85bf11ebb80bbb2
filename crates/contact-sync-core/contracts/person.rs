//! People records as returned by the upstream people endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Field keys expected in a person record
pub mod field_keys {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const DATE_OF_BIRTH: &str = "dateOfBirth";
    pub const EMAIL: &str = "email";
    pub const LIFETIME_VALUE: &str = "lifetimeValue";

    /// All keys a record must carry to be transformable
    pub const REQUIRED: [&str; 5] = [FIRST_NAME, LAST_NAME, DATE_OF_BIRTH, EMAIL, LIFETIME_VALUE];
}

/// Raw person record
///
/// `fields` stays a loose JSON map so that extra or oddly typed upstream
/// columns do not reject the whole response at deserialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Upstream record identifier
    pub id: String,

    /// Flat field map
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}

impl SourceRecord {
    /// Create a record with no fields
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), Value::String(value.into()));
        self
    }

    /// Build a record carrying all five person fields
    pub fn person(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: impl Into<String>,
        email: impl Into<String>,
        lifetime_value: impl Into<String>,
    ) -> Self {
        Self::new(id)
            .with_field(field_keys::FIRST_NAME, first_name)
            .with_field(field_keys::LAST_NAME, last_name)
            .with_field(field_keys::DATE_OF_BIRTH, date_of_birth)
            .with_field(field_keys::EMAIL, email)
            .with_field(field_keys::LIFETIME_VALUE, lifetime_value)
    }

    /// Look up a raw field value
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}
