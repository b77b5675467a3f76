//! Organization engine: ties resolver, normalizer, placer and journal
//! together per file and across the whole watched root.

use crate::category::Category;
use crate::config::AppConfig;
use crate::journal::Journal;
use crate::models::{BatchOutcome, OperationRecord, OrganizeStats, PendingFile};
use crate::{naming, placer, walk};
use globset::GlobSet;
use providers::noop::NoopProvider;
use providers::openai::{OpenAiConfig, OpenAiProvider};
use providers::{fallback_description, DescribeRequest, DescriptionProvider};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

const ACTION_ORGANIZE: &str = "organize";
const ACTION_DESCRIPTION: &str = "organized and renamed";

/// File-scoped failures surfaced to the caller. Everything else the engine
/// hits (journal persistence, annotation) degrades gracefully instead.
#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("file not found")]
    NotFound,
    #[error("move failed: {0}")]
    MoveFailed(String),
}

pub struct Organizer {
    root: PathBuf,
    journal: Journal,
    excludes: GlobSet,
    describer: Option<Arc<dyn DescriptionProvider>>,
}

impl Organizer {
    pub fn new(
        cfg: &AppConfig,
        describer: Option<Arc<dyn DescriptionProvider>>,
    ) -> anyhow::Result<Self> {
        let root = PathBuf::from(&cfg.watch.root);
        let excludes = walk::build_globset(&cfg.watch.exclude)?;
        let journal = Journal::load(root.join(&cfg.journal.file));
        Ok(Self {
            root,
            journal,
            excludes,
            describer,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Whether a path would be picked up by the batch walker.
    pub fn is_eligible(&self, path: &Path) -> bool {
        walk::is_eligible(&self.root, path, self.journal.file_name(), &self.excludes)
    }

    /// Organizes a single file: classify, normalize, place, move, annotate,
    /// journal. Only `NotFound` and `MoveFailed` surface; annotation and
    /// journal-persist failures degrade into the record itself.
    pub async fn organize_one(&mut self, path: &Path) -> Result<OperationRecord, OrganizeError> {
        if !path.is_file() {
            return Err(OrganizeError::NotFound);
        }

        let original_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or(OrganizeError::NotFound)?
            .to_string();
        let size = fs::metadata(path).map(|m| m.len()).unwrap_or_default();

        let category = Category::resolve(path);
        let base = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&original_name);
        let extension = path.extension().and_then(|e| e.to_str());
        let clean_base = naming::normalize(base);

        let category_dir = self.root.join(category.as_str());
        fs::create_dir_all(&category_dir)
            .map_err(|e| OrganizeError::MoveFailed(e.to_string()))?;

        let dest = placer::place(&category_dir, category, &clean_base, extension);
        move_file(path, &dest)?;
        if !dest.is_file() {
            return Err(OrganizeError::MoveFailed(format!(
                "destination {} missing after move",
                dest.display()
            )));
        }

        let new_name = dest
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&original_name)
            .to_string();

        let ai_description = self
            .describe(&dest, size, extension, &original_name, &new_name)
            .await;

        let record = OperationRecord {
            timestamp: self.journal.next_timestamp(),
            action: ACTION_ORGANIZE.to_string(),
            original_name,
            new_name,
            original_path: path.to_string_lossy().into_owned(),
            new_path: dest.to_string_lossy().into_owned(),
            category,
            ai_description,
        };
        self.journal.append(record.clone());
        Ok(record)
    }

    /// Organizes every eligible file under the root. Single-file failures are
    /// collected; the batch never aborts early.
    pub async fn organize_all(&mut self) -> anyhow::Result<BatchOutcome> {
        let files = walk::scan(&self.root, &self.excludes, self.journal.file_name()).await?;
        info!("organizing {} file(s) under {:?}", files.len(), self.root);

        let mut outcome = BatchOutcome::default();
        for file in files {
            let name = file
                .path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("?")
                .to_string();
            match self.organize_one(&file.path).await {
                Ok(record) => outcome.organized.push(record),
                Err(e) => outcome.errors.push(format!("{}: {}", name, e)),
            }
        }
        info!(
            "batch complete: organized={}, errors={}",
            outcome.organized.len(),
            outcome.errors.len()
        );
        Ok(outcome)
    }

    /// Eligible files with their would-be category, size and mtime.
    pub async fn list_pending(&self) -> anyhow::Result<Vec<PendingFile>> {
        let files = walk::scan(&self.root, &self.excludes, self.journal.file_name()).await?;
        Ok(files
            .into_iter()
            .map(|f| PendingFile {
                name: f
                    .path
                    .strip_prefix(&self.root)
                    .unwrap_or(&f.path)
                    .to_string_lossy()
                    .into_owned(),
                size: f.size,
                category: Category::resolve(&f.path),
                modified: f.mtime,
            })
            .collect())
    }

    /// Newest-first journal view.
    pub fn summary(&self, limit: Option<usize>) -> Vec<OperationRecord> {
        self.journal.query(limit)
    }

    /// Counts organized files per category folder on disk, plus the
    /// still-unorganized eligible files and the journal length.
    pub async fn stats(&self) -> anyhow::Result<OrganizeStats> {
        let mut category_counts = BTreeMap::new();
        let mut total_organized = 0usize;
        for category in Category::ALL {
            let dir = self.root.join(category.as_str());
            if !dir.is_dir() {
                continue;
            }
            let count = fs::read_dir(&dir)?
                .filter_map(|e| e.ok())
                .filter(|e| e.path().is_file())
                .count();
            total_organized += count;
            category_counts.insert(category.as_str().to_string(), count);
        }

        let unorganized = walk::scan(&self.root, &self.excludes, self.journal.file_name())
            .await?
            .len();

        Ok(OrganizeStats {
            category_counts,
            total_organized,
            unorganized,
            total_operations: self.journal.len(),
        })
    }

    async fn describe(
        &self,
        dest: &Path,
        size: u64,
        extension: Option<&str>,
        original_name: &str,
        new_name: &str,
    ) -> String {
        let fallback = || fallback_description(ACTION_DESCRIPTION, new_name);
        let Some(provider) = &self.describer else {
            return fallback();
        };

        let request = DescribeRequest {
            path: dest.to_string_lossy().into_owned(),
            extension: extension.map(|e| e.to_string()),
            size,
            action: ACTION_DESCRIPTION.to_string(),
            old_name: Some(original_name.to_string()),
            new_name: Some(new_name.to_string()),
        };
        match provider.describe(&request).await {
            Ok(text) => text,
            Err(e) => {
                warn!("annotation failed for {}: {}", new_name, e);
                fallback()
            }
        }
    }
}

/// Rename, falling back to copy+delete for cross-device moves. A copy that
/// lands but cannot unlink the source still counts as moved.
fn move_file(from: &Path, to: &Path) -> Result<(), OrganizeError> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }
    fs::copy(from, to).map_err(|e| OrganizeError::MoveFailed(e.to_string()))?;
    if let Err(e) = fs::remove_file(from) {
        warn!("moved {:?} but could not remove source: {}", from, e);
    }
    Ok(())
}

/// Wires the optional annotation capability from config and environment.
/// A missing credential disables annotation, never organization.
pub fn build_describer(cfg: &AppConfig) -> Option<Arc<dyn DescriptionProvider>> {
    match cfg.annotation.provider.as_str() {
        "openai" => {
            let Ok(api_key) = std::env::var("OPENAI_API_KEY") else {
                warn!("OPENAI_API_KEY not set; annotation disabled");
                return None;
            };
            let base_url = std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string());
            Some(Arc::new(OpenAiProvider::new(OpenAiConfig {
                api_key,
                base_url,
                chat_model: cfg.annotation.model.clone(),
            })))
        }
        "noop" => Some(Arc::new(NoopProvider)),
        _ => None,
    }
}
