//! Immutable record store
//!
//! Owns the viewership batch for the lifetime of the process. The batch is
//! loaded once at startup and never mutated, so the store is safe to share
//! read-only across sessions without locking.

use chrono::Utc;
use viewboard_common::{Timestamp, ViewRecord};

/// Write-once, read-many holder for the viewership batch
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<ViewRecord>,
    loaded_at: Timestamp,
}

impl RecordStore {
    /// Create a store over a freshly fetched batch
    pub fn new(records: Vec<ViewRecord>) -> Self {
        Self {
            records,
            loaded_at: Utc::now(),
        }
    }

    /// The full record batch
    pub fn records(&self) -> &[ViewRecord] {
        &self.records
    }

    /// Number of records in the batch
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the batch is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// When the batch was loaded
    pub fn loaded_at(&self) -> Timestamp {
        self.loaded_at
    }
}
