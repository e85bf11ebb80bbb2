//! Contact Sync Core
//!
//! Deterministic conversion of upstream "people" records into normalized
//! contacts.
//!
//! # Design Principles
//! - Deterministic: Same record always produces the same contact
//! - Atomic: A malformed record yields an error, never a partial contact
//! - Pure: No I/O; fetching and posting live in the `contact-sync` agent

pub mod engine;
pub mod error;

// Re-export contracts
#[path = "../contracts/mod.rs"]
pub mod contracts;

pub use contracts::*;
pub use engine::RecordTransformer;
pub use error::MalformedRecordError;
