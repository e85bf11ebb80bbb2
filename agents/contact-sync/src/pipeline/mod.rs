//! Sync pipeline
//!
//! PeopleSource → RecordTransformer → ContactSink, once per run.
//!
//! Failure policy: every stage is all-or-nothing up to the point of failure.
//! A malformed record aborts the run before any contact is posted, and the
//! first failed contact stops the run without attempting the rest.

use chrono::{DateTime, Utc};
use contact_sync_core::contracts::{NormalizedContact, SourceRecord};
use contact_sync_core::engine::RecordTransformer;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::client::{ContactSink, PeopleSource};
use crate::error::{Result, SyncError};

/// Summary of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique run identifier
    pub run_id: Uuid,

    /// Run start
    pub started_at: DateTime<Utc>,

    /// Run completion
    pub completed_at: DateTime<Utc>,

    /// Total duration in milliseconds
    pub duration_ms: u64,

    /// Records returned by the people endpoint
    pub people_fetched: usize,

    /// Contacts produced by the transformer
    pub contacts_transformed: usize,

    /// Contacts acknowledged by the contacts endpoint
    pub contacts_created: usize,

    /// Whether posting was skipped
    pub dry_run: bool,

    /// SHA-256 over fetched record ids
    pub inputs_hash: String,

    /// Transformed contacts, kept on dry runs only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<Vec<NormalizedContact>>,
}

/// Fetch, transform and create contacts
pub struct SyncPipeline<S, K> {
    source: S,
    sink: K,
    transformer: RecordTransformer,
    dry_run: bool,
}

impl<S: PeopleSource, K: ContactSink> SyncPipeline<S, K> {
    /// Create new pipeline
    pub fn new(source: S, sink: K) -> Self {
        Self {
            source,
            sink,
            transformer: RecordTransformer::new(),
            dry_run: false,
        }
    }

    /// Skip contact creation
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Execute one run
    pub async fn run(&self) -> Result<RunReport> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let start = Instant::now();

        tracing::info!(run_id = %run_id, dry_run = self.dry_run, "Starting contact sync run");

        let records = self.source.fetch_all().await.map_err(|e| {
            tracing::warn!(run_id = %run_id, status = ?e.status(), error = %e, "People fetch failed");
            SyncError::from(e)
        })?;
        tracing::info!(run_id = %run_id, count = records.len(), "Fetched people");

        let inputs_hash = RecordTransformer::inputs_hash(&records);
        let contacts = self.transformer.transform_batch(&records)?;
        tracing::info!(run_id = %run_id, count = contacts.len(), "Transformed people into contacts");

        let mut created = 0;
        if self.dry_run {
            tracing::info!(run_id = %run_id, "Dry run, skipping contact creation");
        } else {
            for contact in &contacts {
                let ack = self.sink.create(contact).await.map_err(|source| {
                    tracing::warn!(
                        run_id = %run_id,
                        airtable_id = %source.airtable_id(),
                        status = ?source.status(),
                        created = created,
                        error = %source,
                        "Contact creation failed, stopping run"
                    );
                    SyncError::Create { created, source }
                })?;

                created += 1;
                tracing::debug!(
                    run_id = %run_id,
                    airtable_id = %contact.source_id(),
                    status = ack.status,
                    "Created contact"
                );
            }
        }

        let report = RunReport {
            run_id,
            started_at,
            completed_at: Utc::now(),
            duration_ms: duration_ms(start.elapsed()),
            people_fetched: records.len(),
            contacts_transformed: contacts.len(),
            contacts_created: created,
            dry_run: self.dry_run,
            inputs_hash,
            preview: self.dry_run.then_some(contacts),
        };

        tracing::info!(
            run_id = %run_id,
            created = report.contacts_created,
            duration_ms = report.duration_ms,
            "Contact sync run completed"
        );

        Ok(report)
    }
}

/// Whole milliseconds, saturating at `u64::MAX`
fn duration_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Transform a people list without touching the network
pub fn transform_only(records: &[SourceRecord]) -> Result<Vec<NormalizedContact>> {
    let contacts = RecordTransformer::new().transform_batch(records)?;
    tracing::info!(count = contacts.len(), "Transformed people into contacts");
    Ok(contacts)
}
