//! Normalized contacts as accepted by the upstream contacts endpoint.

use serde::{Deserialize, Serialize};

/// Contact shaped for the contacts endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedContact {
    /// Trimmed first name
    pub first_name: String,

    /// Trimmed last name
    pub last_name: String,

    /// ISO ordered birthdate (YYYY-MM-DD)
    pub birthdate: String,

    /// Email, verbatim
    pub email: String,

    /// Properties carried alongside the contact
    pub custom_properties: CustomProperties,
}

/// Custom contact properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomProperties {
    /// Identifier of the source person record
    pub airtable_id: String,

    /// Lifetime value with the currency sigil stripped
    pub lifetime_value: f64,
}

impl NormalizedContact {
    /// Identifier of the person record this contact came from
    pub fn source_id(&self) -> &str {
        &self.custom_properties.airtable_id
    }
}
