//! Implementation of the `rsetup init` command.
//!
//! Creates the store directory, an empty preset document and a default
//! `rsetup.yaml`. Existing files are never overwritten, so running it twice
//! is harmless.

use rsetup::config::Config;
use rsetup::fs::atomic_write_file;
use rsetup::{PresetStore, Report, Result};

pub fn cmd_init(store: &PresetStore) -> Result<Report> {
    let ctx = store.context();

    let config_path = ctx.config_path();
    let config_created = if config_path.exists() {
        false
    } else {
        atomic_write_file(&config_path, &Config::default().to_yaml()?)?;
        true
    };

    let document_created = store.init()?;

    let message = if config_created || document_created {
        format!("Initialized setup store in {}.", ctx.root.display())
    } else {
        format!("Setup store already initialized in {}.", ctx.root.display())
    };
    Ok(Report::info(message))
}
