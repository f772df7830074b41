//! Implementations of `rsetup export` and `rsetup import`.

use crate::cli::{ExportArgs, ImportArgs};
use rsetup::{PresetStore, Report, Result};

pub fn cmd_export(store: &PresetStore, args: ExportArgs) -> Result<Report> {
    let indent = args
        .indent
        .unwrap_or(store.context().config.export_indent);
    let count = store.export_to(&args.path, indent)?;
    Ok(Report::exported(count, &args.path))
}

pub fn cmd_import(store: &PresetStore, args: ImportArgs) -> Result<Report> {
    let summary = store.import_from(&args.path)?;
    Ok(Report::imported(&summary))
}
