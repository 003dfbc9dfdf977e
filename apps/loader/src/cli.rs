//! # CLI Argument Definitions
//!
//! Subcommands of the `dfh` binary. Flags given on the command line win over the
//! settings file and `DFH__*` environment variables.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use dfh_domain::config::LoaderConfig;
use dfh_kernel::config::load_config;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "dfh")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Retunes headset audio properties in an item catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Patch every headset in the item catalog
    Apply(ApplyArgs),
    /// Print the effective headset config (file merged over defaults)
    Config(SettingsArgs),
    /// Print the mod metadata
    Info,
}

/// Where to find the loader settings and the mod folder.
#[derive(Debug, Clone, Args)]
pub struct SettingsArgs {
    /// Loader settings file (defaults to an optional `loader.toml` in the working directory)
    #[arg(short, long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Mod folder containing `config/config.json`
    #[arg(short, long, value_name = "DIR")]
    pub mod_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Item catalog to patch
    #[arg(short, long, value_name = "PATH")]
    pub items: Option<PathBuf>,

    /// Write the patched catalog here instead of overwriting `--items`
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Run the pass and report, but do not write the catalog
    #[arg(long)]
    pub dry_run: bool,
}

impl SettingsArgs {
    /// Loads the layered settings and applies the command-line overrides.
    ///
    /// # Errors
    /// Returns an error if an explicit settings file is missing or malformed.
    pub fn load(&self) -> anyhow::Result<LoaderConfig> {
        let mut cfg: LoaderConfig = load_config(self.settings.as_ref())
            .context("Critical: Loader settings are malformed")?;
        if let Some(dir) = &self.mod_dir {
            cfg.modding.dir.clone_from(dir);
        }
        Ok(cfg)
    }
}

impl ApplyArgs {
    /// Loads the settings with every `apply` override applied.
    ///
    /// # Errors
    /// Returns an error if an explicit settings file is missing or malformed.
    pub fn load(&self) -> anyhow::Result<LoaderConfig> {
        let mut cfg = self.settings.load()?;
        if let Some(items) = &self.items {
            cfg.database.items.clone_from(items);
        }
        if let Some(output) = &self.output {
            cfg.database.output = Some(output.clone());
        }
        Ok(cfg)
    }
}
