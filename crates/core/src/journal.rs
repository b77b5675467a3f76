//! Append-only operation journal.
//!
//! The journal is loaded once at startup and mutated only by [`Journal::append`].
//! Every append rewrites the durable copy wholesale; a persist failure is
//! logged and absorbed, leaving the record visible in memory for the rest of
//! the process lifetime.

use crate::models::OperationRecord;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug)]
pub struct Journal {
    path: PathBuf,
    records: Vec<OperationRecord>,
}

impl Journal {
    /// Loads the journal from `path`. Never fails: an absent or unreadable
    /// file yields an empty journal, with the read error surfaced only as a
    /// log event.
    pub fn load(path: PathBuf) -> Self {
        let records = if path.exists() {
            match storage::read_json(&path) {
                Ok(records) => records,
                Err(e) => {
                    warn!("failed to load journal {:?}: {e:#}", path);
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };
        Self { path, records }
    }

    /// Appends a record and persists the whole sequence. The in-memory append
    /// always succeeds; a persist failure is logged, never propagated.
    pub fn append(&mut self, record: OperationRecord) {
        self.records.push(record);
        if let Err(e) = storage::write_json(&self.path, &self.records) {
            warn!("failed to persist journal {:?}: {e:#}", self.path);
        }
    }

    /// Most-recent-first view, truncated to `limit` newest entries when given.
    pub fn query(&self, limit: Option<usize>) -> Vec<OperationRecord> {
        let mut out: Vec<OperationRecord> = self.records.iter().rev().cloned().collect();
        if let Some(limit) = limit {
            out.truncate(limit);
        }
        out
    }

    /// Completion timestamp for the next record: now, clamped so timestamps
    /// never decrease across appends even if the clock steps backwards.
    pub fn next_timestamp(&self) -> DateTime<Utc> {
        let now = Utc::now();
        match self.records.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        }
    }

    pub fn records(&self) -> &[OperationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("organization_summary.json")
    }
}
