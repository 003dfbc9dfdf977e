//! Config and catalog files.
//!
//! - mod config (`config/config.json`) with merge-on-load defaults (`load_config`)
//! - item catalog JSON read/write (`read_catalog`, `write_catalog`)

use crate::error::{HeadsetError, HeadsetErrorExt};
use dfh_domain::config::HeadsetConfig;
use dfh_domain::item::ItemCatalog;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Loads the mod config. Keys missing from the file keep their defaults.
///
/// # Errors
/// Returns [`HeadsetError::Io`] if the file is missing or unreadable and
/// [`HeadsetError::Parse`] if it is not a valid config object.
pub fn load_config(path: impl AsRef<Path>) -> Result<HeadsetConfig, HeadsetError> {
    let path = path.as_ref();
    info!("Loading headset config from {}", path.display());
    read_json(path)
}

/// Reads an item catalog (`items.json`).
///
/// # Errors
/// Returns [`HeadsetError::Io`] or [`HeadsetError::Parse`] with the path as context.
pub fn read_catalog(path: impl AsRef<Path>) -> Result<ItemCatalog, HeadsetError> {
    let path = path.as_ref();
    let catalog: ItemCatalog = read_json(path)?;
    debug!(items = catalog.len(), "Read item catalog from {}", path.display());
    Ok(catalog)
}

/// Writes an item catalog as pretty JSON, replacing any existing file.
///
/// # Errors
/// Returns [`HeadsetError::Io`] or [`HeadsetError::Parse`] with the path as context.
pub fn write_catalog(path: impl AsRef<Path>, catalog: &ItemCatalog) -> Result<(), HeadsetError> {
    let path = path.as_ref();
    write_json(path, catalog)?;
    debug!(items = catalog.len(), "Wrote item catalog to {}", path.display());
    Ok(())
}

fn read_json<T>(path: &Path) -> Result<T, HeadsetError>
where
    T: serde::de::DeserializeOwned,
{
    let file = File::open(path).context(format!("Failed to open '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .context(format!("Failed to parse '{}'", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), HeadsetError> {
    let file = File::create(path).context(format!("Failed to create '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .context(format!("Failed to serialize '{}'", path.display()))?;
    writer.flush().context(format!("Failed to flush '{}'", path.display()))
}
