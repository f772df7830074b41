//! Command implementations for rsetup.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command resolves the store directory, performs one
//! store operation and describes the outcome as a [`Report`].

mod init;
mod lock;
mod presets;
mod transfer;

#[cfg(test)]
mod tests;

use crate::cli::{Command, LockAction, LockCommand};
use rsetup::{PresetStore, Report, Result, StoreContext};
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(dir: Option<&Path>, command: Command) -> Result<Report> {
    let store = open_store(dir)?;

    match command {
        Command::Init => init::cmd_init(&store),
        Command::List => presets::cmd_list(&store),
        Command::Show(args) => presets::cmd_show(&store, args),
        Command::New(args) => presets::cmd_new(&store, args),
        Command::Rm(args) => presets::cmd_rm(&store, args),
        Command::Apply(args) => presets::cmd_apply(&store, args),
        Command::Export(args) => transfer::cmd_export(&store, args),
        Command::Import(args) => transfer::cmd_import(&store, args),
        Command::Lock(lock_cmd) => dispatch_lock(&store, lock_cmd),
    }
}

/// Dispatch lock subcommands.
fn dispatch_lock(store: &PresetStore, lock_cmd: LockCommand) -> Result<Report> {
    match lock_cmd.action {
        LockAction::Status => lock::cmd_lock_status(store),
        LockAction::Clear(args) => lock::cmd_lock_clear(store, args),
    }
}

fn open_store(dir: Option<&Path>) -> Result<PresetStore> {
    let ctx = StoreContext::resolve(dir)?;
    log::debug!("using store directory '{}'", ctx.root.display());
    Ok(PresetStore::open(ctx))
}
