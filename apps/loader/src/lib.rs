//! # Deep Fried Headsets Loader
//!
//! Stands in for the game server's mod loader: it reads the item catalog, loads the
//! mod config from the mod folder, runs the headset pass exactly once and writes the
//! catalog back.
//!
//! ## Example
//! ```no_run
//! use dfh_loader::Loader;
//!
//! # fn main() -> anyhow::Result<()> {
//! let summary = Loader::builder()
//!     .items("SPT_Data/database/templates/items.json")
//!     .mod_dir("user/mods/DeepFriedHeadsets")
//!     .build()?
//!     .run()?;
//! println!("{} headsets", summary.modified);
//! # Ok(())
//! # }
//! ```

pub mod cli;

use anyhow::{Context, Result};
use dfh_domain::config::{HeadsetConfig, LoaderConfig};
use dfh_domain::metadata::METADATA;
use std::path::{Path, PathBuf};
use tracing::info;

/// A fluent builder for configuring the [`Loader`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct LoaderBuilder {
    cfg: LoaderConfig,
    dry_run: bool,
}

impl LoaderBuilder {
    /// Set up the loader's settings.
    pub fn config(mut self, cfg: LoaderConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn items(mut self, path: impl Into<PathBuf>) -> Self {
        self.cfg.database.items = path.into();
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.cfg.database.output = Some(path.into());
        self
    }

    pub fn mod_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cfg.modding.dir = dir.into();
        self
    }

    pub const fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Loads the mod config and prepares the loader.
    ///
    /// # Errors
    /// Returns an error if the mod config is missing or malformed. Nothing is applied in
    /// that case.
    pub fn build(self) -> Result<Loader> {
        let config_path = self.cfg.modding.config_path();
        let headset = dfh_headsets::load_config(&config_path)
            .with_context(|| format!("Failed to load mod config {}", config_path.display()))?;

        info!(mod_name = METADATA.name, version = METADATA.version, "Initializing mod");

        Ok(Loader { cfg: self.cfg, headset, dry_run: self.dry_run })
    }
}

/// Outcome of one load step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// Records in the catalog, including `null` ones.
    pub scanned: usize,
    pub modified: usize,
    /// Where the catalog was written; `None` for a dry run.
    pub written: Option<PathBuf>,
}

/// A configured load step, ready to run.
#[derive(Debug)]
pub struct Loader {
    cfg: LoaderConfig,
    headset: HeadsetConfig,
    dry_run: bool,
}

impl Loader {
    pub fn builder() -> LoaderBuilder {
        LoaderBuilder::default()
    }

    /// The mod config after merging the file over defaults.
    #[must_use]
    pub const fn headset_config(&self) -> &HeadsetConfig {
        &self.headset
    }

    fn output_path(&self) -> &Path {
        self.cfg.database.output.as_deref().unwrap_or(self.cfg.database.items.as_path())
    }

    /// Reads the catalog, runs the headset pass once and writes the result.
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be read, parsed or written.
    pub fn run(&self) -> Result<LoadSummary> {
        let items = &self.cfg.database.items;
        let mut catalog = dfh_headsets::read_catalog(items)
            .with_context(|| format!("Failed to read item catalog {}", items.display()))?;

        let modified = dfh_headsets::apply(&mut catalog, &self.headset);
        info!(modified, "{}: Modified {modified} headset items!", METADATA.name);

        let written = if self.dry_run {
            info!("Dry run, catalog left untouched");
            None
        } else {
            let output = self.output_path();
            dfh_headsets::write_catalog(output, &catalog)
                .with_context(|| format!("Failed to write item catalog {}", output.display()))?;
            Some(output.to_path_buf())
        };

        Ok(LoadSummary { scanned: catalog.len(), modified, written })
    }
}
