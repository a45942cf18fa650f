//! Directory scan and per-file loading.

use crate::error::CompileError;
use crate::model::InterfaceFile;
use crate::parser::bridgesupport;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Lazily load every description file in `dir`.
///
/// Hidden entries and non-files are skipped. Files are visited in file-name
/// order; unreadable or malformed ones are logged and dropped.
pub fn load_dir(dir: &Path) -> Result<impl Iterator<Item = InterfaceFile>, CompileError> {
    let paths = list_files(dir)?;
    Ok(paths.into_iter().filter_map(|path| match load_file(&path) {
        Ok(Some(file)) => Some(file),
        Ok(None) => {
            debug!(path = %path.display(), "no elements, skipping");
            None
        }
        Err(e) => {
            warn!("skipping {}: {:#}", path.display(), e);
            None
        }
    }))
}

/// Sorted candidate paths in `dir`.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, CompileError> {
    if !dir.is_dir() {
        return Err(CompileError::MissingDirectory(dir.to_path_buf()));
    }
    let entries = fs::read_dir(dir).map_err(|source| CompileError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if is_hidden(&path) {
            continue;
        }
        if !path.is_file() {
            debug!(path = %path.display(), "not a file, skipping");
            continue;
        }
        files.push(path);
    }
    // read_dir order is platform-dependent
    files.sort();
    Ok(files)
}

/// Read and parse a single file. `Ok(None)` for documents without elements.
pub fn load_file(path: &Path) -> Result<Option<InterfaceFile>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parsed = bridgesupport::parse_document(path, &text)?;
    if parsed.is_some() {
        info!("compiling {}", file_name(path));
    }
    Ok(parsed)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
