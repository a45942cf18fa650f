//! bscomp — generate an editor completion plist from BridgeSupport files.
//!
//! `bscomp [DIR] [-o completions.plist]`; without `-o` the plist is written
//! to stdout and diagnostics go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// RubyMotion's bundled BridgeSupport directory.
const DEFAULT_INPUT: &str = "/Library/RubyMotion/data/6.1/BridgeSupport/";

#[derive(Parser)]
#[command(
    name = "bscomp",
    about = "Compile BridgeSupport metadata into an editor completion plist"
)]
struct Cli {
    /// Directory containing the description files
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output file. If omitted, writes to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Log skipped entries and other debug detail
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let plist = bscomp::compile(&cli.input)?;

    match cli.output {
        Some(ref path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create output directory: {}", parent.display())
                })?;
            }
            fs::write(path, &plist)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => write_stdout(io::stdout().lock(), &plist)?,
    }

    Ok(())
}

/// Write the plist to stdout, reporting a closed pipe instead of panicking.
fn write_stdout(mut out: impl Write, plist: &str) -> Result<()> {
    out.write_all(plist.as_bytes())
        .and_then(|()| out.flush())
        .context("failed to write to stdout")
}

/// Stderr logging; `RUST_LOG` overrides the level picked by `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
