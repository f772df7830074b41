//! Implementations of the preset commands: `list`, `show`, `new`, `rm` and
//! `apply`.
//!
//! Scenes are JSON files loaded into a [`JsonTree`]. `apply` writes the scene
//! back in its own layout, and only when every stored attribute was
//! assigned, so a failed apply leaves the scene file as it was.

use crate::cli::{ApplyArgs, NewArgs, RmArgs, ShowArgs};
use rsetup::fields::FieldGroup;
use rsetup::store::render_json;
use rsetup::{JsonTree, PresetStore, Report, Result, RsetupError};

pub fn cmd_list(store: &PresetStore) -> Result<Report> {
    let names = store.list_names()?;
    if names.is_empty() {
        return Ok(Report::info("No setups."));
    }
    Ok(Report::info(names.join("\n")))
}

pub fn cmd_show(store: &PresetStore, args: ShowArgs) -> Result<Report> {
    let preset = store.get(&args.name)?;
    let json = render_json(&preset, store.context().config.document_indent).map_err(|e| {
        RsetupError::io("failed to serialize", store.document_path(), e.into())
    })?;
    Ok(Report::info(json))
}

pub fn cmd_new(store: &PresetStore, args: NewArgs) -> Result<Report> {
    let scene = JsonTree::load(&args.scene, args.scene_type)?;

    let groups: &[FieldGroup] = if args.groups.is_empty() {
        &FieldGroup::ALL
    } else {
        &args.groups
    };

    store.create_from_groups(&args.name, groups, &scene)?;
    Ok(Report::added(&args.name))
}

pub fn cmd_rm(store: &PresetStore, args: RmArgs) -> Result<Report> {
    store.remove(&args.name)?;
    Ok(Report::deleted(&args.name))
}

pub fn cmd_apply(store: &PresetStore, args: ApplyArgs) -> Result<Report> {
    let mut scene = JsonTree::load(&args.scene, args.scene_type)?;
    store.apply(&args.name, &mut scene)?;
    scene.save(&args.scene)?;
    Ok(Report::applied(&args.name))
}
