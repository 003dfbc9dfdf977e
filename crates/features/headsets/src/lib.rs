//! # Deep Fried Headsets
//!
//! A single pass over the item catalog that retunes every headset's audio properties.
//!
//! ## Pipeline
//!
//! 1.  **Detection ([`signature`]):** an item is a headset when its `_props` carry the five
//!     signature properties (ambient, headphone mixer and dry volume, compressor gain and
//!     threshold).
//! 2.  **Rules ([`rules`]):** a fixed table of per-field multiply/offset/assign operations,
//!     each clamped to the range the game engine accepts. Fields missing on an item are
//!     left missing.
//! 3.  **Files ([`io`]):** the mod config and the item catalog are plain JSON.
//!
//! ## Example
//!
//! ```rust
//! use dfh_domain::config::HeadsetConfig;
//! use dfh_domain::item::{AudioField, ItemCatalog, ItemProperties, ItemRecord};
//!
//! let props = ItemProperties::default()
//!     .with(AudioField::AmbientVolume, 100.0)
//!     .with(AudioField::HeadphonesMixerVolume, 1.0)
//!     .with(AudioField::CompressorGain, 10.0)
//!     .with(AudioField::CompressorThreshold, -20.0)
//!     .with(AudioField::DryVolume, -10.0);
//! let mut catalog: ItemCatalog = [ItemRecord::new("headset").with_properties(props)]
//!     .into_iter()
//!     .collect();
//!
//! let modified = dfh_headsets::apply(&mut catalog, &HeadsetConfig::default());
//!
//! assert_eq!(modified, 1);
//! let patched = catalog.record("headset").and_then(|r| r.properties.as_ref()).unwrap();
//! assert_eq!(patched.get(AudioField::AmbientVolume), Some(50.0));
//! ```

mod error;
pub mod io;
pub mod rules;
pub mod signature;

pub use crate::error::{HeadsetError, HeadsetErrorExt};
pub use crate::io::{load_config, read_catalog, write_catalog};
pub use crate::signature::is_headset;

use dfh_domain::config::HeadsetConfig;
use dfh_domain::item::ItemCatalog;
use tracing::debug;

/// Retunes every headset in `catalog` in place and returns how many were modified.
///
/// Records that are `null`, have no `_props`, or miss part of the headset signature are
/// left untouched. Each qualifying item counts once, however many of its optional fields
/// were present. The pass is not idempotent: running it twice scales values twice.
pub fn apply(catalog: &mut ItemCatalog, config: &HeadsetConfig) -> usize {
    let mut modified = 0;

    for (id, record) in catalog.iter_mut() {
        let Some(props) = record.as_mut().and_then(|r| r.properties.as_mut()) else {
            continue;
        };
        if !is_headset(props) {
            continue;
        }

        rules::patch(props, config);
        debug!(item = %id, "Patched headset");
        modified += 1;
    }

    modified
}
