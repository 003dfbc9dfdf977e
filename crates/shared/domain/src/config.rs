use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tuning parameters applied to every headset in the item catalog.
///
/// Values are multipliers unless the key ends in `Add` (additive offset) or `Set`
/// (direct assignment). Any key missing from `config.json` keeps its default below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct HeadsetConfig {
    // Volume
    /// Multiplier for `AmbientVolume`.
    pub ambient_volume: f64,
    /// Multiplier for `HeadphonesMixerVolume`.
    pub headphones_mixer_volume: f64,
    /// Multiplier for `DryVolume`.
    pub dry_volume: f64,
    /// Replaces `EffectsReturnsGroupVolume`.
    pub effects_returns_group_volume_set: f64,

    // Compressor
    /// Multiplier for `CompressorGain`.
    pub compressor_gain: f64,
    /// Multiplier for `CompressorThreshold`.
    pub compressor_threshold: f64,
    /// Multiplier for `CompressorAttack`.
    pub compressor_attack: f64,
    /// Multiplier for `CompressorRelease`.
    pub compressor_release: f64,

    // Compressor send levels
    /// Added to `AmbientCompressorSendLevel`.
    pub ambient_compressor_send_level_add: f64,
    /// Replaces `ClientPlayerCompressorSendLevel`.
    pub client_player_compressor_send_level_set: f64,
    /// Seeds a zero NPC/observed-player send level, otherwise added to it.
    pub player_compressor_send_level: f64,
    /// Added to `GunsCompressorSendLevel`.
    pub guns_compressor_send_level_add: f64,
    /// Replaces `EffectsReturnsCompressorSendLevel`.
    pub effects_returns_compressor_send_level_set: f64,

    // EQ
    /// Multiplier for all three `EQBand*Gain` values.
    #[serde(rename = "EQBandGain")]
    pub eq_band_gain: f64,
    /// Multiplier for all three `EQBand*Frequency` values.
    #[serde(rename = "EQBandFrequency")]
    pub eq_band_frequency: f64,
    /// Multiplier for all three `EQBand*Q` values.
    #[serde(rename = "EQBandQ")]
    pub eq_band_q: f64,

    // Filters
    pub highpass_freq: f64,
    pub highpass_resonance: f64,
    pub lowpass_freq: f64,

    /// Multiplier for `Distortion`, result capped at `1.0`.
    pub distortion_multiplier: f64,

    /// Floor for the spatial rolloff, not a multiplier despite the name.
    pub rolloff_multiplier: f64,
}

/// Host-side settings for the loader harness.
///
/// Loaded from `loader.toml` (optional) and `DFH__*` environment overrides.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// `[database]`: item catalog paths.
    pub database: DatabaseConfig,
    /// `[mod]`: mod folder and config file.
    #[serde(rename = "mod")]
    pub modding: ModConfig,
    /// `[logging]`: subscriber settings.
    pub logging: LoggingConfig,
}

/// Location of the item catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// The `items.json` catalog to patch.
    pub items: PathBuf,
    /// Where the patched catalog goes; `None` overwrites `items`.
    pub output: Option<PathBuf>,
}

/// Location of the mod folder and its config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModConfig {
    /// Mod folder.
    pub dir: PathBuf,
    /// Relative to `dir`.
    pub config: PathBuf,
}

/// Logging output for the loader.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level (`trace` .. `error`).
    pub level: String,
    /// Rolling log file directory; console only when unset.
    pub directory: Option<PathBuf>,
    /// Write log files as JSON lines.
    pub json: bool,
    /// Extra `EnvFilter` directives, e.g. `dfh_headsets=debug`.
    pub filter: Option<String>,
}

impl ModConfig {
    /// Absolute-or-relative path of the mod's `config.json`.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.dir.join(&self.config)
    }
}

// --- Default ---

impl Default for HeadsetConfig {
    fn default() -> Self {
        Self {
            ambient_volume: 1.5,
            headphones_mixer_volume: 2.0,
            dry_volume: 1.0,
            effects_returns_group_volume_set: 0.0,

            compressor_gain: 1.5,
            compressor_threshold: 1.2,
            compressor_attack: 1.0,
            compressor_release: 1.0,

            ambient_compressor_send_level_add: -5.0,
            client_player_compressor_send_level_set: 6.0,
            player_compressor_send_level: 12.0,
            guns_compressor_send_level_add: 12.0,
            effects_returns_compressor_send_level_set: 0.0,

            eq_band_gain: 1.75,
            eq_band_frequency: 1.0,
            eq_band_q: 1.0,

            highpass_freq: 1.0,
            highpass_resonance: 1.0,
            lowpass_freq: 1.0,

            distortion_multiplier: 0.75,
            rolloff_multiplier: 1.00015,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { items: PathBuf::from("database/templates/items.json"), output: None }
    }
}

impl Default for ModConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("."), config: PathBuf::from("config/config.json") }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false, filter: None }
    }
}
