//! Tests for command dispatch.

use super::*;
use crate::cli::{ApplyArgs, ExportArgs, ImportArgs, LockClearArgs, NewArgs, RmArgs, ShowArgs};
use rsetup::fields::FieldGroup;
use rsetup::{RsetupError, exit_codes};
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_scene(dir: &Path, file_name: &str, resolution_x: u32) -> PathBuf {
    let scene = json!({
        "render": {
            "engine": "CYCLES",
            "resolution_x": resolution_x,
            "resolution_y": 1080,
            "resolution_percentage": 100,
            "fps": 24,
            "filepath": "/tmp/render/",
            "image_settings": { "file_format": "PNG" },
            "ffmpeg": {
                "format": "MPEG4",
                "codec": "H264",
                "constant_rate_factor": "MEDIUM",
                "audio_codec": "NONE"
            }
        }
    });
    let path = dir.join(file_name);
    fs::write(&path, serde_json::to_string_pretty(&scene).unwrap()).unwrap();
    path
}

fn new_args(name: &str, scene: &Path, groups: Vec<FieldGroup>) -> Command {
    Command::New(NewArgs {
        name: name.to_string(),
        scene: scene.to_path_buf(),
        groups,
        scene_type: "Scene".to_string(),
    })
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn init_creates_document_and_config() {
    let temp_dir = TempDir::new().unwrap();
    let store_dir = temp_dir.path().join("store");

    let report = dispatch(Some(&store_dir), Command::Init).unwrap();
    assert!(report.message.starts_with("Initialized setup store"));
    assert_eq!(read_json(&store_dir.join("rsetup.json")), json!({}));
    assert!(store_dir.join("rsetup.yaml").exists());

    let report = dispatch(Some(&store_dir), Command::Init).unwrap();
    assert!(report.message.starts_with("Setup store already initialized"));
}

#[test]
fn list_reports_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    let report = dispatch(Some(temp_dir.path()), Command::List).unwrap();
    assert_eq!(report.message, "No setups.");
}

#[test]
fn new_show_list_rm_cycle() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    let scene = write_scene(dir, "scene.json", 1920);

    let report =
        dispatch(Some(dir), new_args("studio", &scene, vec![FieldGroup::Output])).unwrap();
    assert_eq!(report.message, "Setup \"studio\" successfully added.");

    let report = dispatch(Some(dir), Command::List).unwrap();
    assert_eq!(report.message, "studio");

    let report = dispatch(
        Some(dir),
        Command::Show(ShowArgs {
            name: "studio".to_string(),
        }),
    )
    .unwrap();
    let shown: Value = serde_json::from_str(&report.message).unwrap();
    assert_eq!(shown["render.resolution_x"], json!(1920));
    assert_eq!(shown["render.ffmpeg.codec"], json!("H264"));
    assert!(shown.get("render.engine").is_none());

    let report = dispatch(
        Some(dir),
        Command::Rm(RmArgs {
            name: "studio".to_string(),
        }),
    )
    .unwrap();
    assert_eq!(report.message, "Setup \"studio\" successfully deleted.");
    assert_eq!(read_json(&dir.join("rsetup.json")), json!({}));
}

#[test]
fn new_with_all_groups_fails_on_partial_scene() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    let scene = write_scene(dir, "scene.json", 1920);

    // The sample scene has no cycles or eevee settings.
    let err = dispatch(Some(dir), new_args("full", &scene, Vec::new())).unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::PATH_FAILURE);
    assert_eq!(read_json(&dir.join("rsetup.json")), json!({}));
}

#[test]
fn new_rejects_duplicate_name() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    let scene = write_scene(dir, "scene.json", 1920);

    dispatch(Some(dir), new_args("studio", &scene, vec![FieldGroup::Output])).unwrap();
    let err =
        dispatch(Some(dir), new_args("studio", &scene, vec![FieldGroup::Output])).unwrap_err();
    assert!(matches!(err, RsetupError::DuplicateName(_)));
}

#[test]
fn apply_updates_scene_file() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let capture = write_scene(dir, "scene.json", 1920);
    dispatch(Some(dir), new_args("studio", &capture, vec![FieldGroup::Output])).unwrap();

    let mut target = read_json(&capture);
    target["render"]["resolution_x"] = json!(640);
    let target_path = dir.join("target.json");
    fs::write(&target_path, target.to_string()).unwrap();

    let report = dispatch(
        Some(dir),
        Command::Apply(ApplyArgs {
            name: "studio".to_string(),
            scene: target_path.clone(),
            scene_type: "Scene".to_string(),
        }),
    )
    .unwrap();
    assert_eq!(report.message, "Setup \"studio\" successfully applied.");
    assert_eq!(read_json(&target_path)["render"]["resolution_x"], json!(1920));
}

#[test]
fn apply_keeps_scene_file_layout() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    // The store writes its own document with four spaces.
    fs::write(dir.join("rsetup.yaml"), "document_indent: 4\n").unwrap();

    let capture = write_scene(dir, "scene.json", 1920);
    dispatch(Some(dir), new_args("studio", &capture, vec![FieldGroup::Output])).unwrap();

    let mut target = read_json(&capture);
    target["render"]["resolution_x"] = json!(640);
    let target_path = dir.join("target.json");
    fs::write(&target_path, serde_json::to_string_pretty(&target).unwrap() + "\n").unwrap();

    dispatch(
        Some(dir),
        Command::Apply(ApplyArgs {
            name: "studio".to_string(),
            scene: target_path.clone(),
            scene_type: "Scene".to_string(),
        }),
    )
    .unwrap();

    target["render"]["resolution_x"] = json!(1920);
    assert_eq!(
        fs::read_to_string(&target_path).unwrap(),
        serde_json::to_string_pretty(&target).unwrap() + "\n"
    );
}

#[test]
fn apply_failure_leaves_scene_file_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let capture = write_scene(dir, "scene.json", 1920);
    dispatch(Some(dir), new_args("studio", &capture, vec![FieldGroup::Output])).unwrap();

    let target_path = dir.join("target.json");
    let before = r#"{"render": {"resolution_x": 640}}"#;
    fs::write(&target_path, before).unwrap();

    let err = dispatch(
        Some(dir),
        Command::Apply(ApplyArgs {
            name: "studio".to_string(),
            scene: target_path.clone(),
            scene_type: "Scene".to_string(),
        }),
    )
    .unwrap_err();
    assert!(matches!(err, RsetupError::PathResolution { .. }));
    assert_eq!(fs::read_to_string(&target_path).unwrap(), before);
}

#[test]
fn export_uses_configured_indent_and_import_merges() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let dest = temp_dir.path().join("dest");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("rsetup.yaml"), "export_indent: 2\n").unwrap();

    let scene = write_scene(temp_dir.path(), "scene.json", 1920);
    dispatch(Some(&source), new_args("studio", &scene, vec![FieldGroup::Output])).unwrap();

    let export_path = temp_dir.path().join("all.json");
    let report = dispatch(
        Some(&source),
        Command::Export(ExportArgs {
            path: export_path.clone(),
            indent: None,
        }),
    )
    .unwrap();
    assert!(report.message.starts_with("Exported 1 setups to "));
    let exported = fs::read_to_string(&export_path).unwrap();
    assert!(exported.contains("\n  \"studio\""));

    let local = write_scene(temp_dir.path(), "local.json", 640);
    dispatch(Some(&dest), new_args("studio", &local, vec![FieldGroup::Output])).unwrap();

    let report = dispatch(
        Some(&dest),
        Command::Import(ImportArgs {
            path: export_path.clone(),
        }),
    )
    .unwrap();
    assert_eq!(report.message, "Imported 0 setups. Kept existing: studio.");

    let stored = read_json(&dest.join("rsetup.json"));
    assert_eq!(stored["studio"]["render.resolution_x"], json!(640));
}

#[test]
fn import_missing_file_is_document_failure() {
    let temp_dir = TempDir::new().unwrap();
    let err = dispatch(
        Some(temp_dir.path()),
        Command::Import(ImportArgs {
            path: temp_dir.path().join("missing.json"),
        }),
    )
    .unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::DOCUMENT_FAILURE);
}

#[test]
fn lock_status_reports_sentinel_state() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let report = dispatch_lock_status(dir);
    assert!(report.contains("free (no sentinel file)"));

    fs::write(dir.join("rsetup.mutex"), "0").unwrap();
    let report = dispatch_lock_status(dir);
    assert!(report.contains("free (released)"));
}

#[test]
fn lock_clear_requires_force() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("rsetup.mutex"), "12345.5").unwrap();

    let err = dispatch(
        Some(dir),
        Command::Lock(LockCommand {
            action: LockAction::Clear(LockClearArgs { force: false }),
        }),
    )
    .unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    assert_eq!(fs::read_to_string(dir.join("rsetup.mutex")).unwrap(), "12345.5");

    let report = dispatch(
        Some(dir),
        Command::Lock(LockCommand {
            action: LockAction::Clear(LockClearArgs { force: true }),
        }),
    )
    .unwrap();
    assert!(report.message.starts_with("Cleared lock:"));
    assert_eq!(fs::read_to_string(dir.join("rsetup.mutex")).unwrap(), "0");
}

fn dispatch_lock_status(dir: &Path) -> String {
    dispatch(
        Some(dir),
        Command::Lock(LockCommand {
            action: LockAction::Status,
        }),
    )
    .unwrap()
    .message
}
