use dfh_kernel::config::{ConfigError, ConfigLoader, load_config};
use dfh_kernel::domain::config::LoaderConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn no_env() -> config::Map<String, String> {
    config::Map::new()
}

#[test]
fn defaults_apply_without_settings_file() {
    let cfg: LoaderConfig = ConfigLoader::new().env_source(no_env()).load().expect("defaults load");

    assert_eq!(cfg.database.items, PathBuf::from("database/templates/items.json"));
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn settings_file_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("loader.toml");
    fs::write(
        &path,
        r#"
[database]
items = "/srv/spt/items.json"

[mod]
dir = "/srv/spt/mods/dfh"

[logging]
level = "debug"
json = true
"#,
    )?;

    let cfg: LoaderConfig = ConfigLoader::new().path(&path).env_source(no_env()).load()?;

    assert_eq!(cfg.database.items, PathBuf::from("/srv/spt/items.json"));
    assert!(cfg.database.output.is_none());
    assert_eq!(cfg.modding.config_path(), PathBuf::from("/srv/spt/mods/dfh/config/config.json"));
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
    Ok(())
}

#[test]
fn environment_overrides_settings_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("loader.toml");
    fs::write(&path, "[database]\nitems = \"from-file.json\"\n")?;

    let mut env = no_env();
    env.insert("DFH__DATABASE__ITEMS".to_owned(), "from-env.json".to_owned());
    env.insert("DFH__LOGGING__LEVEL".to_owned(), "warn".to_owned());

    let cfg: LoaderConfig = ConfigLoader::new().path(&path).env_source(env).load()?;

    assert_eq!(cfg.database.items, PathBuf::from("from-env.json"));
    assert_eq!(cfg.logging.level, "warn");
    Ok(())
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("nope.toml");

    let err = load_config::<LoaderConfig>(Some(&missing)).expect_err("missing file must fail");

    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    assert!(err.to_string().contains("Failed to build settings"));
}
