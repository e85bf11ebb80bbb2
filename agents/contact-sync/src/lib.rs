//! Contact Sync Agent
//!
//! Fetches people from the upstream people endpoint, normalizes each one
//! with [`contact_sync_core::RecordTransformer`] and creates the resulting
//! contacts on the upstream contacts endpoint.
//!
//! # Design Principles
//! - Sequential: one fetch, then one POST at a time, in input order
//! - Fail-fast: a fetch error, malformed record or failed POST stops the run
//! - No retries: every error is terminal and reported with its stage
//!
//! ## CLI Usage
//!
//! ```bash
//! # Full run against the default endpoints
//! contact-sync run
//!
//! # Fetch and transform only
//! contact-sync run --dry-run --format json
//!
//! # Transform a local file
//! contact-sync transform --file people.json
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod telemetry;

pub use client::{
    Acknowledgement, ContactSink, CreateError, FetchError, HttpContactSink, HttpPeopleSource,
    PeopleSource,
};
pub use config::SyncConfig;
pub use error::SyncError;
pub use pipeline::{RunReport, SyncPipeline};
