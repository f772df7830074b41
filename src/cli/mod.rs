//! CLI argument parsing for rsetup.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use rsetup::FieldGroup;
use std::path::PathBuf;

/// rsetup: load and save named render setups.
///
/// Setups are stored in `rsetup.json` inside the store directory and shared
/// by every process using that directory. Scene settings are read from and
/// written to JSON files.
#[derive(Parser, Debug)]
#[command(name = "rsetup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Store directory (default: $RSETUP_DIR, then the current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for rsetup.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the store: an empty setup document and a default rsetup.yaml.
    Init,

    /// List setup names in stored order.
    #[command(alias = "ls")]
    List,

    /// Print the attributes stored in one setup.
    Show(ShowArgs),

    /// Capture scene settings into a new setup.
    New(NewArgs),

    /// Permanently delete a setup.
    #[command(alias = "remove")]
    Rm(RmArgs),

    /// Apply a setup to a scene file, overwriting its current settings.
    Apply(ApplyArgs),

    /// Export every setup to a JSON file.
    Export(ExportArgs),

    /// Import setups from a JSON file, keeping existing setups untouched.
    Import(ImportArgs),

    /// Inspect or clear the store lock.
    Lock(LockCommand),
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Setup name.
    pub name: String,
}

/// Arguments for the `new` command.
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Name of the new setup.
    pub name: String,

    /// JSON file holding the scene settings to capture.
    #[arg(long, value_name = "FILE")]
    pub scene: PathBuf,

    /// Field groups to include (render, cycles, eevee, output). Default: all.
    #[arg(long, value_delimiter = ',')]
    pub groups: Vec<FieldGroup>,

    /// Type name of the scene root, used in error messages.
    #[arg(long, default_value = "Scene")]
    pub scene_type: String,
}

/// Arguments for the `rm` command.
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Setup name.
    pub name: String,
}

/// Arguments for the `apply` command.
#[derive(Parser, Debug)]
pub struct ApplyArgs {
    /// Setup name.
    pub name: String,

    /// JSON scene file to update in place.
    #[arg(long, value_name = "FILE")]
    pub scene: PathBuf,

    /// Type name of the scene root, used in error messages.
    #[arg(long, default_value = "Scene")]
    pub scene_type: String,
}

/// Arguments for the `export` command.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Output .json file path.
    pub path: PathBuf,

    /// File indentation (default: `export_indent` from rsetup.yaml).
    #[arg(long)]
    pub indent: Option<usize>,
}

/// Arguments for the `import` command.
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Input .json file path.
    pub path: PathBuf,
}

/// Lock subcommands.
#[derive(Parser, Debug)]
pub struct LockCommand {
    #[command(subcommand)]
    pub action: LockAction,
}

/// Available lock actions.
#[derive(Subcommand, Debug)]
pub enum LockAction {
    /// Show the sentinel state and its age.
    Status,

    /// Reset the sentinel to released.
    ///
    /// Requires --force flag to prevent accidental clearing.
    Clear(LockClearArgs),
}

/// Arguments for the `lock clear` command.
#[derive(Parser, Debug)]
pub struct LockClearArgs {
    /// Force clearing the lock (required for safety).
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
