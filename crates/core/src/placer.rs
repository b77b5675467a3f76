//! Destination placement inside a category folder.
//!
//! Filenames must be unique per category folder; uniqueness is enforced here
//! by a sequential suffix search, not by the filesystem. The existence check
//! races against external writers to the same folder (accepted TOCTOU; the
//! process is assumed to own the watched directory).

use crate::category::Category;
use std::path::{Path, PathBuf};

/// Computes a unique destination path for a normalized base name.
///
/// Candidate name is `{category}_{clean_base}{.ext}`, sanitized to
/// `[A-Za-z0-9._-]`. On collision, `_1`, `_2`, ... are inserted before the
/// extension; the first free slot wins. The caller must have created
/// `category_dir` already.
pub fn place(
    category_dir: &Path,
    category: Category,
    clean_base: &str,
    extension: Option<&str>,
) -> PathBuf {
    let stem = sanitize(&format!("{}_{}", category.as_str(), clean_base));
    let candidate = category_dir.join(with_extension(&stem, extension));
    if !candidate.exists() {
        return candidate;
    }

    let mut counter = 1u64;
    loop {
        let name = with_extension(&format!("{}_{}", stem, counter), extension);
        let candidate = category_dir.join(name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

fn with_extension(stem: &str, extension: Option<&str>) -> String {
    match extension {
        Some(ext) if !ext.is_empty() => format!("{}.{}", stem, ext),
        _ => stem.to_string(),
    }
}

fn sanitize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}
