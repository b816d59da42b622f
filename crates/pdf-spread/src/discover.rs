//! Source document discovery

use crate::types::*;
use std::path::{Path, PathBuf};

/// Extension of source documents (compared case-insensitively)
pub const SOURCE_EXTENSION: &str = "pdf";

/// List PDF files under `root`, sorted by path.
///
/// With `recursive`, subdirectories are searched too.
pub fn find_documents(root: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    collect(root, recursive, &mut found)?;
    found.sort();
    Ok(found)
}

fn collect(dir: &Path, recursive: bool, found: &mut Vec<PathBuf>) -> Result<()> {
    let discovery = |source| SpreadError::Discovery {
        path: dir.to_path_buf(),
        source,
    };

    for entry in std::fs::read_dir(dir).map_err(discovery)? {
        let entry = entry.map_err(discovery)?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(discovery)?;

        if file_type.is_dir() {
            if recursive {
                collect(&path, recursive, found)?;
            }
        } else if is_source_document(&path) {
            found.push(path);
        }
    }
    Ok(())
}

/// True for paths ending in `.pdf`, any case
pub fn is_source_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION))
}
