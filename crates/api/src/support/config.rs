#![forbid(unsafe_code)]

use clap::Parser;
use std::path::PathBuf;

/// Franchise catalog served as newline-delimited JSON over stdio.
#[derive(Debug, Parser)]
#[command(name = "fc_api", version)]
pub(crate) struct Config {
    /// Directory holding the catalog database.
    #[arg(long, env = "FC_STORAGE_DIR", default_value = ".franchise_catalog")]
    pub(crate) storage_dir: PathBuf,

    /// Keep everything in memory; nothing is written to disk.
    #[arg(long)]
    pub(crate) in_memory: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}
