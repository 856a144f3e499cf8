#![forbid(unsafe_code)]

mod entry;
mod handlers;
mod server;
mod support;

pub(crate) use server::ApiServer;
pub(crate) use support::*;

use clap::Parser;
use fc_storage::SqliteStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    init_logger(config.verbose);

    let store = if config.in_memory {
        SqliteStore::open_in_memory()?
    } else {
        SqliteStore::open(&config.storage_dir)?
    };
    match store.storage_dir() {
        Some(dir) => tracing::info!(storage_dir = %dir.display(), "catalog api ready on stdio"),
        None => tracing::info!(in_memory = true, "catalog api ready on stdio"),
    }

    let mut server = ApiServer::new(store);
    entry::run_stdio(&mut server)?;

    tracing::info!("stdin closed, shutting down");
    Ok(())
}
