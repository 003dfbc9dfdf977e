//! # Per-field rules
//!
//! The headset pass is a fixed table of `(field, operation)` rows. Each row reads one
//! tuning value from [`HeadsetConfig`] and rewrites one audio property in place, but only
//! when that property is present on the item.

use dfh_domain::config::HeadsetConfig;
use dfh_domain::item::{AudioField, ItemProperties};

/// Reads one tuning value out of the config.
pub type Setting = fn(&HeadsetConfig) -> f64;

/// What a rule does to the current value of its field.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// `clamp(current * setting, min, max)`.
    Scale { by: Setting, min: f64, max: f64 },
    /// `current + setting`, unbounded.
    Offset(Setting),
    /// Replaces the current value.
    Assign(Setting),
    /// Zero is treated as unset: assign the setting, otherwise add it.
    SeedOrOffset(Setting),
    /// `min(current * setting, max)`, no lower bound.
    ScaleCapped { by: Setting, max: f64 },
    /// `min(max(setting, current), max)`: the setting is a floor, `max` a fixed ceiling.
    Floor { floor: Setting, max: f64 },
}

impl Operation {
    /// Computes the new value for a present field.
    #[must_use]
    pub fn eval(self, current: f64, config: &HeadsetConfig) -> f64 {
        match self {
            Self::Scale { by, min, max } => (current * by(config)).clamp(min, max),
            Self::Offset(by) => current + by(config),
            Self::Assign(value) => value(config),
            Self::SeedOrOffset(by) => {
                if current == 0.0 {
                    by(config)
                } else {
                    current + by(config)
                }
            },
            Self::ScaleCapped { by, max } => (current * by(config)).min(max),
            Self::Floor { floor, max } => floor(config).max(current).min(max),
        }
    }

    /// Inclusive output range, when the operation guarantees one.
    #[must_use]
    pub const fn bounds(self) -> Option<(f64, f64)> {
        match self {
            Self::Scale { min, max, .. } => Some((min, max)),
            _ => None,
        }
    }
}

/// One row of the headset table.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// The audio property this row rewrites.
    pub field: AudioField,
    /// How the new value is computed.
    pub op: Operation,
}

const fn scale(field: AudioField, by: Setting, min: f64, max: f64) -> FieldRule {
    FieldRule { field, op: Operation::Scale { by, min, max } }
}

const fn rule(field: AudioField, op: Operation) -> FieldRule {
    FieldRule { field, op }
}

/// The full headset table, applied top to bottom.
pub const RULES: [FieldRule; 28] = [
    // Volume
    scale(AudioField::AmbientVolume, |c| c.ambient_volume, -50.0, 50.0),
    scale(AudioField::HeadphonesMixerVolume, |c| c.headphones_mixer_volume, -20.0, 10.0),
    scale(AudioField::DryVolume, |c| c.dry_volume, -60.0, 0.0),
    rule(
        AudioField::EffectsReturnsGroupVolume,
        Operation::Assign(|c| c.effects_returns_group_volume_set),
    ),
    // Compressor
    scale(AudioField::CompressorGain, |c| c.compressor_gain, 0.0, 30.0),
    scale(AudioField::CompressorThreshold, |c| c.compressor_threshold, -80.0, -5.0),
    scale(AudioField::CompressorAttack, |c| c.compressor_attack, 1.0, 200.0),
    scale(AudioField::CompressorRelease, |c| c.compressor_release, 10.0, 1000.0),
    // Compressor send levels
    rule(
        AudioField::ClientPlayerCompressorSendLevel,
        Operation::Assign(|c| c.client_player_compressor_send_level_set),
    ),
    rule(
        AudioField::AmbientCompressorSendLevel,
        Operation::Offset(|c| c.ambient_compressor_send_level_add),
    ),
    rule(AudioField::GunsCompressorSendLevel, Operation::Offset(|c| c.guns_compressor_send_level_add)),
    rule(
        AudioField::EffectsReturnsCompressorSendLevel,
        Operation::Assign(|c| c.effects_returns_compressor_send_level_set),
    ),
    rule(AudioField::NpcCompressorSendLevel, Operation::SeedOrOffset(|c| c.player_compressor_send_level)),
    rule(
        AudioField::ObservedPlayerCompressorSendLevel,
        Operation::SeedOrOffset(|c| c.player_compressor_send_level),
    ),
    // EQ
    scale(AudioField::EqBand1Gain, |c| c.eq_band_gain, -10.0, 10.0),
    scale(AudioField::EqBand2Gain, |c| c.eq_band_gain, -10.0, 10.0),
    scale(AudioField::EqBand3Gain, |c| c.eq_band_gain, -10.0, 10.0),
    scale(AudioField::EqBand1Frequency, |c| c.eq_band_frequency, 20.0, 500.0),
    scale(AudioField::EqBand2Frequency, |c| c.eq_band_frequency, 200.0, 5000.0),
    scale(AudioField::EqBand3Frequency, |c| c.eq_band_frequency, 2000.0, 20000.0),
    scale(AudioField::EqBand1Q, |c| c.eq_band_q, 0.1, 10.0),
    scale(AudioField::EqBand2Q, |c| c.eq_band_q, 0.1, 10.0),
    scale(AudioField::EqBand3Q, |c| c.eq_band_q, 0.1, 10.0),
    // Filters
    scale(AudioField::HighpassFreq, |c| c.highpass_freq, 20.0, 2000.0),
    scale(AudioField::HighpassResonance, |c| c.highpass_resonance, 0.5, 10.0),
    scale(AudioField::LowpassFreq, |c| c.lowpass_freq, 1000.0, 22000.0),
    // Distortion
    rule(AudioField::Distortion, Operation::ScaleCapped { by: |c| c.distortion_multiplier, max: 1.0 }),
    // Spatial
    rule(AudioField::RolloffMultiplier, Operation::Floor { floor: |c| c.rolloff_multiplier, max: 1.35 }),
];

/// Returns the rule for `field`.
#[must_use]
pub fn rule_for(field: AudioField) -> Option<&'static FieldRule> {
    RULES.iter().find(|r| r.field == field)
}

/// Applies every rule whose field is present. Absent fields stay absent.
pub fn patch(props: &mut ItemProperties, config: &HeadsetConfig) {
    for rule in &RULES {
        if let Some(current) = props.get(rule.field) {
            props.set(rule.field, rule.op.eval(current, config));
        }
    }
}
