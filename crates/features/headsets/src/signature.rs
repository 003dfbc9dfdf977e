use dfh_domain::item::{AudioField, ItemProperties};

/// Properties that together identify a headset.
///
/// There is no explicit type tag; any item carrying all five is treated as a headset.
pub const HEADSET_SIGNATURE: [AudioField; 5] = [
    AudioField::AmbientVolume,
    AudioField::HeadphonesMixerVolume,
    AudioField::CompressorGain,
    AudioField::CompressorThreshold,
    AudioField::DryVolume,
];

/// Returns `true` when every signature property is present.
#[must_use]
pub fn is_headset(props: &ItemProperties) -> bool {
    HEADSET_SIGNATURE.iter().all(|&field| props.get(field).is_some())
}
