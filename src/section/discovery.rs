//! Section file discovery.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::FileSelector;

/// Path of a named section inside the raw directory
pub fn section_path(raw_dir: &Path, name: &str) -> PathBuf {
    raw_dir.join(format!("{name}.json"))
}

/// Resolve a selector to the files that should be checked.
///
/// `All` lists every regular file in `raw_dir`, sorted by file name so the
/// report is stable. A named selector is not checked for existence here.
pub fn enumerate_files(selector: &FileSelector, raw_dir: &Path) -> Result<Vec<PathBuf>> {
    match selector {
        FileSelector::Named(name) => Ok(vec![section_path(raw_dir, name)]),
        FileSelector::All => list_section_files(raw_dir),
    }
}

fn list_section_files(raw_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(raw_dir).with_context(|| {
        format!(
            "Failed to list raw narrative directory {}",
            raw_dir.display()
        )
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read an entry of {}", raw_dir.display()))?;
        let path = entry.path();

        if path.is_dir() {
            log::debug!("Skipping directory {}", path.display());
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
