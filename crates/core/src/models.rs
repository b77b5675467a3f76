use crate::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One completed organize operation, as persisted in the journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    pub timestamp: DateTime<Utc>,
    pub action: String,
    pub original_name: String,
    pub new_name: String,
    pub original_path: String,
    pub new_path: String,
    pub category: Category,
    pub ai_description: String,
}

/// An eligible but not yet organized file under the watched root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingFile {
    pub name: String,
    pub size: u64,
    pub category: Category,
    pub modified: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizeStats {
    pub category_counts: BTreeMap<String, usize>,
    pub total_organized: usize,
    pub unorganized: usize,
    pub total_operations: usize,
}

/// Aggregate result of a whole-directory run. Per-file failures land in
/// `errors` as `"{filename}: {message}"`; the batch itself never aborts.
#[derive(Debug, Default, Serialize)]
pub struct BatchOutcome {
    pub organized: Vec<OperationRecord>,
    pub errors: Vec<String>,
}
