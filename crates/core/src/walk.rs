//! Walks the watched root for eligible files.
//!
//! Eligibility is a pure predicate over the path and the fixed category set,
//! kept apart from the move logic: regular file, not the journal file, not
//! inside a category folder this system created, not glob-excluded. Category
//! folders count only as direct children of the root; a category-named folder
//! nested deeper is ordinary unorganized content.

use crate::category::Category;
use anyhow::Context;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::task;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub size: u64,
    pub mtime: i64,
}

/// True iff `path` is a direct child of `root` named after a category.
pub fn is_category_dir(root: &Path, path: &Path) -> bool {
    if path.parent() != Some(root) {
        return false;
    }
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(Category::from_folder_name)
        .is_some()
}

/// True iff `path` carries the journal's filename, at any depth.
pub fn is_journal_file(path: &Path, journal_name: &str) -> bool {
    path.file_name().and_then(|n| n.to_str()) == Some(journal_name)
}

/// Eligibility of a single path for organization.
pub fn is_eligible(root: &Path, path: &Path, journal_name: &str, excludes: &GlobSet) -> bool {
    if !path.is_file() || is_journal_file(path, journal_name) || excludes.is_match(path) {
        return false;
    }
    // Inside an organized subtree? Category dirs only live directly under
    // the root, so checking the first ancestor level is enough.
    let mut ancestor = path.parent();
    while let Some(dir) = ancestor {
        if is_category_dir(root, dir) {
            return false;
        }
        if dir == root {
            break;
        }
        ancestor = dir.parent();
    }
    true
}

pub fn build_globset(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        let glob = Glob::new(pat)?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

/// Collects every eligible file under `root`, recursively. Runs the directory
/// walk on a blocking task and streams results over a channel.
pub async fn scan(
    root: &Path,
    excludes: &GlobSet,
    journal_name: &str,
) -> anyhow::Result<Vec<ScannedFile>> {
    let (tx, mut rx) = mpsc::channel(100);
    let root = root.to_path_buf();
    let excludes = excludes.clone();
    let journal_name = journal_name.to_string();

    let walker_handle = task::spawn_blocking(move || {
        for entry in WalkDir::new(&root)
            .into_iter()
            .filter_entry(|e| !is_category_dir(&root, e.path()))
        {
            let entry = match entry {
                Ok(e) => e,
                Err(_) => continue,
            };

            let path = entry.path();
            if !is_eligible(&root, path, &journal_name, &excludes) {
                continue;
            }

            let meta = match fs::metadata(path) {
                Ok(m) => m,
                Err(_) => continue,
            };

            let mtime = meta
                .modified()
                .ok()
                .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
                .map(|d| d.as_secs() as i64)
                .unwrap_or_default();

            let item = ScannedFile {
                path: path.to_path_buf(),
                size: meta.len(),
                mtime,
            };

            if tx.blocking_send(item).is_err() {
                // Receiver dropped, stop walking.
                break;
            }
        }
    });

    let mut files = Vec::new();
    while let Some(item) = rx.recv().await {
        files.push(item);
    }
    walker_handle.await.context("walker task panicked")?;
    Ok(files)
}
