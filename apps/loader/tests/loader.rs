use dfh_loader::{LoadSummary, Loader};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

fn write_json(path: &Path, value: &serde_json::Value) {
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, serde_json::to_vec_pretty(value).expect("serialize")).expect("write");
}

/// A server layout with one headset, one rifle and a mod folder.
fn server() -> TempDir {
    let root = tempdir().expect("tempdir");
    write_json(
        &root.path().join("database/items.json"),
        &json!({
            "headset": {
                "_id": "headset",
                "_props": {
                    "AmbientVolume": 10,
                    "HeadphonesMixerVolume": 2,
                    "CompressorGain": 4,
                    "CompressorThreshold": -30,
                    "DryVolume": -5,
                    "NpcCompressorSendLevel": 0
                }
            },
            "rifle": { "_id": "rifle", "_props": { "Weight": 3.1 } },
            "broken": null
        }),
    );
    write_json(&root.path().join("mods/dfh/config/config.json"), &json!({ "AmbientVolume": 2.0 }));
    root
}

fn read(path: &Path) -> serde_json::Value {
    serde_json::from_slice(&fs::read(path).expect("read")).expect("parse")
}

#[test]
fn run_patches_catalog_in_place() -> anyhow::Result<()> {
    let root = server();
    let items = root.path().join("database/items.json");

    let summary =
        Loader::builder().items(&items).mod_dir(root.path().join("mods/dfh")).build()?.run()?;

    assert_eq!(summary, LoadSummary { scanned: 3, modified: 1, written: Some(items.clone()) });
    let catalog = read(&items);
    assert_eq!(catalog["headset"]["_props"]["AmbientVolume"], json!(20.0));
    assert_eq!(catalog["headset"]["_props"]["NpcCompressorSendLevel"], json!(12.0));
    assert_eq!(catalog["rifle"], json!({ "_id": "rifle", "_props": { "Weight": 3.1 } }));
    assert!(catalog["broken"].is_null());
    Ok(())
}

#[test]
fn output_path_leaves_source_untouched() -> anyhow::Result<()> {
    let root = server();
    let items = root.path().join("database/items.json");
    let output = root.path().join("database/items.patched.json");
    let original = fs::read(&items)?;

    let summary = Loader::builder()
        .items(&items)
        .output(&output)
        .mod_dir(root.path().join("mods/dfh"))
        .build()?
        .run()?;

    assert_eq!(summary.written.as_deref(), Some(output.as_path()));
    assert_eq!(fs::read(&items)?, original);
    assert_eq!(read(&output)["headset"]["_props"]["AmbientVolume"], json!(20.0));
    Ok(())
}

#[test]
fn dry_run_writes_nothing() -> anyhow::Result<()> {
    let root = server();
    let items = root.path().join("database/items.json");
    let original = fs::read(&items)?;

    let summary = Loader::builder()
        .items(&items)
        .mod_dir(root.path().join("mods/dfh"))
        .dry_run(true)
        .build()?
        .run()?;

    assert_eq!(summary.modified, 1);
    assert!(summary.written.is_none());
    assert_eq!(fs::read(&items)?, original);
    Ok(())
}

#[test]
fn missing_mod_config_fails_before_touching_catalog() {
    let root = server();
    let items = root.path().join("database/items.json");
    let original = fs::read(&items).expect("read");

    let err = Loader::builder()
        .items(&items)
        .mod_dir(root.path().join("mods/missing"))
        .build()
        .expect_err("build must fail");

    assert!(format!("{err:#}").contains("Failed to load mod config"));
    assert_eq!(fs::read(&items).expect("read"), original);
}

#[test]
fn merged_config_is_exposed() -> anyhow::Result<()> {
    let root = server();

    let loader = Loader::builder().mod_dir(root.path().join("mods/dfh")).build()?;

    assert_eq!(loader.headset_config().ambient_volume, 2.0);
    assert_eq!(loader.headset_config().eq_band_gain, 1.75);
    Ok(())
}
