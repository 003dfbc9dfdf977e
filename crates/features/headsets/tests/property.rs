use dfh_domain::config::HeadsetConfig;
use dfh_domain::item::{AudioField, ItemCatalog, ItemProperties, ItemRecord};
use dfh_headsets::rules::RULES;
use dfh_headsets::signature::HEADSET_SIGNATURE;
use dfh_headsets::{apply, is_headset};
use proptest::prelude::*;

fn config_with(multiplier: f64) -> HeadsetConfig {
    HeadsetConfig {
        ambient_volume: multiplier,
        headphones_mixer_volume: multiplier,
        dry_volume: multiplier,
        compressor_gain: multiplier,
        compressor_threshold: multiplier,
        compressor_attack: multiplier,
        compressor_release: multiplier,
        eq_band_gain: multiplier,
        eq_band_frequency: multiplier,
        eq_band_q: multiplier,
        highpass_freq: multiplier,
        highpass_resonance: multiplier,
        lowpass_freq: multiplier,
        ..HeadsetConfig::default()
    }
}

fn every_field(value: f64) -> ItemProperties {
    RULES.iter().fold(ItemProperties::default(), |p, r| p.with(r.field, value))
}

proptest! {
    #[test]
    fn clamped_fields_stay_in_range(value in -1.0e6f64..1.0e6, multiplier in -100.0f64..100.0) {
        let cfg = config_with(multiplier);
        let mut catalog: ItemCatalog =
            [ItemRecord::new("h").with_properties(every_field(value))].into_iter().collect();

        prop_assert_eq!(apply(&mut catalog, &cfg), 1);

        let props = catalog.record("h").and_then(|r| r.properties.as_ref()).unwrap();
        for rule in &RULES {
            if let Some((min, max)) = rule.op.bounds() {
                let out = props.get(rule.field).unwrap();
                prop_assert!(out >= min && out <= max, "{} = {} outside [{}, {}]", rule.field.key(), out, min, max);
            }
        }
    }

    #[test]
    fn distortion_and_rolloff_respect_their_ceilings(value in -10.0f64..10.0, multiplier in 0.0f64..10.0) {
        let cfg = HeadsetConfig { distortion_multiplier: multiplier, ..HeadsetConfig::default() };
        let mut catalog: ItemCatalog =
            [ItemRecord::new("h").with_properties(every_field(value))].into_iter().collect();

        apply(&mut catalog, &cfg);

        let props = catalog.record("h").and_then(|r| r.properties.as_ref()).unwrap();
        prop_assert!(props.get(AudioField::Distortion).unwrap() <= 1.0);
        let rolloff = props.get(AudioField::RolloffMultiplier).unwrap();
        prop_assert!(rolloff <= 1.35);
        prop_assert!(rolloff >= cfg.rolloff_multiplier.min(1.35));
    }

    #[test]
    fn items_missing_a_signature_field_are_untouched(value in -100.0f64..100.0, missing in 0usize..5) {
        let mut props = every_field(value);
        props.unset(HEADSET_SIGNATURE[missing]);
        prop_assert!(!is_headset(&props));

        let mut catalog: ItemCatalog =
            [ItemRecord::new("x").with_properties(props)].into_iter().collect();
        let before = catalog.clone();

        prop_assert_eq!(apply(&mut catalog, &config_with(3.0)), 0);
        prop_assert_eq!(catalog, before);
    }
}
