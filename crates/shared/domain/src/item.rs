//! Item catalog records as served by the game database.
//!
//! Only what the headset pass needs is typed. Everything else in a record, and the whole
//! `_props` block, is kept as raw JSON so that a catalog survives a read/patch/write cycle
//! with its values and key order intact.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::{Map, Number, Value};
use std::ops::{Deref, DerefMut};

/// Item records keyed by id, in the order they were read.
///
/// A `null` record in the source JSON is kept as `None`.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ItemCatalog(Vec<(String, Option<ItemRecord>)>);

impl ItemCatalog {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the record for `id` if it exists and is not `null`.
    #[must_use]
    pub fn record(&self, id: &str) -> Option<&ItemRecord> {
        self.0.iter().find(|(key, _)| key == id).and_then(|(_, record)| record.as_ref())
    }
}

impl Deref for ItemCatalog {
    type Target = Vec<(String, Option<ItemRecord>)>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ItemCatalog {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Serialize for ItemCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(id, record)| (id, record)))
    }
}

impl<'de> Deserialize<'de> for ItemCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Goes through an ordered map so duplicate ids collapse the way JSON objects do.
        Map::<String, Value>::deserialize(deserializer)?
            .into_iter()
            .map(|(id, value)| {
                serde_json::from_value::<Option<ItemRecord>>(value).map(|record| (id, record))
            })
            .collect::<Result<Self, _>>()
            .map_err(de::Error::custom)
    }
}

impl FromIterator<(String, Option<ItemRecord>)> for ItemCatalog {
    fn from_iter<I: IntoIterator<Item = (String, Option<ItemRecord>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<ItemRecord> for ItemCatalog {
    fn from_iter<I: IntoIterator<Item = ItemRecord>>(iter: I) -> Self {
        Self(iter.into_iter().map(|r| (r.id.clone(), Some(r))).collect())
    }
}

/// A single item template.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Item id, also the record's key in the catalog.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "_parent", default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(rename = "_type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The `_props` block; `None` when missing or `null`.
    #[serde(rename = "_props", default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<ItemProperties>,
    /// Every other record key (`_proto`, ...), untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ItemRecord {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_properties(mut self, properties: ItemProperties) -> Self {
        self.properties = Some(properties);
        self
    }
}

/// The `_props` block of an item, kept as the raw JSON object it was read from.
///
/// Audio properties are read and written through [`AudioField`]. A property that is
/// missing, `null` or not a number reads as absent and is never touched, so values the
/// headset pass does not rewrite keep their original JSON form (integers stay integers).
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemProperties(Map<String, Value>);

/// Typed handle on one audio property of [`ItemProperties`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioField {
    AmbientVolume,
    HeadphonesMixerVolume,
    DryVolume,
    EffectsReturnsGroupVolume,
    CompressorGain,
    CompressorThreshold,
    CompressorAttack,
    CompressorRelease,
    ClientPlayerCompressorSendLevel,
    AmbientCompressorSendLevel,
    GunsCompressorSendLevel,
    EffectsReturnsCompressorSendLevel,
    NpcCompressorSendLevel,
    ObservedPlayerCompressorSendLevel,
    EqBand1Gain,
    EqBand2Gain,
    EqBand3Gain,
    EqBand1Frequency,
    EqBand2Frequency,
    EqBand3Frequency,
    EqBand1Q,
    EqBand2Q,
    EqBand3Q,
    HighpassFreq,
    HighpassResonance,
    LowpassFreq,
    Distortion,
    RolloffMultiplier,
}

impl AudioField {
    /// The property key used in item JSON.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::AmbientVolume => "AmbientVolume",
            Self::HeadphonesMixerVolume => "HeadphonesMixerVolume",
            Self::DryVolume => "DryVolume",
            Self::EffectsReturnsGroupVolume => "EffectsReturnsGroupVolume",
            Self::CompressorGain => "CompressorGain",
            Self::CompressorThreshold => "CompressorThreshold",
            Self::CompressorAttack => "CompressorAttack",
            Self::CompressorRelease => "CompressorRelease",
            Self::ClientPlayerCompressorSendLevel => "ClientPlayerCompressorSendLevel",
            Self::AmbientCompressorSendLevel => "AmbientCompressorSendLevel",
            Self::GunsCompressorSendLevel => "GunsCompressorSendLevel",
            Self::EffectsReturnsCompressorSendLevel => "EffectsReturnsCompressorSendLevel",
            Self::NpcCompressorSendLevel => "NpcCompressorSendLevel",
            Self::ObservedPlayerCompressorSendLevel => "ObservedPlayerCompressorSendLevel",
            Self::EqBand1Gain => "EQBand1Gain",
            Self::EqBand2Gain => "EQBand2Gain",
            Self::EqBand3Gain => "EQBand3Gain",
            Self::EqBand1Frequency => "EQBand1Frequency",
            Self::EqBand2Frequency => "EQBand2Frequency",
            Self::EqBand3Frequency => "EQBand3Frequency",
            Self::EqBand1Q => "EQBand1Q",
            Self::EqBand2Q => "EQBand2Q",
            Self::EqBand3Q => "EQBand3Q",
            Self::HighpassFreq => "HighpassFreq",
            Self::HighpassResonance => "HighpassResonance",
            Self::LowpassFreq => "LowpassFreq",
            Self::Distortion => "Distortion",
            Self::RolloffMultiplier => "RolloffMultiplier",
        }
    }
}

impl ItemProperties {
    /// Returns the numeric value of `field`, if present.
    #[must_use]
    pub fn get(&self, field: AudioField) -> Option<f64> {
        self.0.get(field.key()).and_then(Value::as_f64)
    }

    /// Writes `value` into `field`, keeping the property's position in the block.
    ///
    /// Non-finite values have no JSON representation and are stored as `null`.
    pub fn set(&mut self, field: AudioField, value: f64) {
        let value = Number::from_f64(value).map_or(Value::Null, Value::Number);
        self.0.insert(field.key().to_owned(), value);
    }

    /// Removes `field` from the block, returning its raw value.
    pub fn unset(&mut self, field: AudioField) -> Option<Value> {
        self.0.remove(field.key())
    }

    /// Sets `field` to `value`, builder style.
    #[must_use]
    pub fn with(mut self, field: AudioField, value: f64) -> Self {
        self.set(field, value);
        self
    }
}

impl From<Map<String, Value>> for ItemProperties {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl Deref for ItemProperties {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ItemProperties {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
