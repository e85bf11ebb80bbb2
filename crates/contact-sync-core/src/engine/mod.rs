//! Record transformation engine
//!
//! Deterministic conversion of person records into contacts.

mod fields;

pub use fields::{CURRENCY_SIGIL, DATE_SEPARATOR};

use crate::contracts::*;
use crate::error::{MalformedRecordError, Result};
use fields::AmountError;
use sha2::{Digest, Sha256};

/// Person-to-contact transformer
///
/// Stateless: every call depends only on its input, so batches may be split
/// across callers freely as long as output order is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordTransformer;

impl RecordTransformer {
    /// Create new transformer
    pub fn new() -> Self {
        Self
    }

    /// Transform a single record
    ///
    /// All five fields are read and converted before anything is built, so a
    /// malformed record never yields a partial contact.
    pub fn transform(&self, record: &SourceRecord) -> Result<NormalizedContact> {
        let first_name = fields::required_str(record, field_keys::FIRST_NAME)?;
        let last_name = fields::required_str(record, field_keys::LAST_NAME)?;
        let date_of_birth = fields::required_str(record, field_keys::DATE_OF_BIRTH)?;
        let email = fields::required_str(record, field_keys::EMAIL)?;
        let raw_value = fields::required_str(record, field_keys::LIFETIME_VALUE)?;

        let birthdate = fields::reorder_date(date_of_birth).ok_or_else(|| {
            MalformedRecordError::InvalidDate {
                record_id: record.id.clone(),
                value: date_of_birth.to_string(),
            }
        })?;

        let lifetime_value = fields::parse_lifetime_value(raw_value).map_err(|e| match e {
            AmountError::MissingSigil => MalformedRecordError::MissingSigil {
                record_id: record.id.clone(),
                value: raw_value.to_string(),
                sigil: CURRENCY_SIGIL,
            },
            AmountError::NotDecimal => MalformedRecordError::InvalidAmount {
                record_id: record.id.clone(),
                value: raw_value.to_string(),
            },
        })?;

        Ok(NormalizedContact {
            first_name: fields::trim_name(first_name),
            last_name: fields::trim_name(last_name),
            birthdate,
            email: email.to_string(),
            custom_properties: CustomProperties {
                airtable_id: record.id.clone(),
                lifetime_value,
            },
        })
    }

    /// Transform records in order, failing the whole batch on the first
    /// malformed record
    pub fn transform_batch(&self, records: &[SourceRecord]) -> Result<Vec<NormalizedContact>> {
        let contacts = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                self.transform(record).map_err(|e| {
                    tracing::warn!(
                        index = index,
                        record_id = %record.id,
                        code = e.code(),
                        "Rejecting batch on malformed record"
                    );
                    e
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(count = contacts.len(), "Transformed record batch");
        Ok(contacts)
    }

    /// Compute deterministic hash of record ids, in order
    ///
    /// Each id is length-prefixed, so no two distinct id lists share an input.
    pub fn inputs_hash(records: &[SourceRecord]) -> String {
        let mut hasher = Sha256::new();
        for record in records {
            hasher.update((record.id.len() as u64).to_be_bytes());
            hasher.update(record.id.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}
