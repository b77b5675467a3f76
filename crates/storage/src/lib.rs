//! Storage layer: durable JSON state helpers.
//!
//! The journal is a single JSON file rewritten wholesale on every append.
//! Writes go through a sibling temp file followed by a rename, so an
//! interrupted rewrite leaves the previous contents intact.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let content = serde_json::to_vec_pretty(value)?;
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    debug!("wrote {:?}", path);
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "state".into());
    name.push(".tmp");
    path.with_file_name(name)
}
