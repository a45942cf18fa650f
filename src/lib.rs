//! bscomp — compile BridgeSupport metadata into an editor completion list.
//!
//! The pipeline runs in one direction:
//!
//! 1. **Load** — read every visible file in a directory ([`loader`])
//! 2. **Parse** — turn classes, functions, constants and enums into
//!    completion records ([`parser`], [`snippet`])
//! 3. **Aggregate** — sort by display name and drop duplicates ([`aggregate`])
//! 4. **Render** — serialize as a property list ([`plist`])

pub mod aggregate;
pub mod error;
pub mod loader;
pub mod model;
pub mod parser;
pub mod plist;
pub mod snippet;

pub use error::CompileError;
pub use model::CompletionRecord;

use std::path::Path;

/// Compile every description file in `dir` into a completion plist.
pub fn compile(dir: &Path) -> Result<String, CompileError> {
    let records = collect_records(dir)?;
    Ok(plist::render(&records))
}

/// Sorted, de-duplicated records for every description file in `dir`.
pub fn collect_records(dir: &Path) -> Result<Vec<CompletionRecord>, CompileError> {
    let records = loader::load_dir(dir)?.flat_map(parser::records).collect();
    Ok(aggregate::finalize(records))
}
