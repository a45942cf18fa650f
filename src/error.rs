//! Errors that end a compile run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop the whole run. Per-file problems are logged and
/// skipped instead.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("input directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
