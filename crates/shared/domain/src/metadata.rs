use serde::Serialize;

/// Position in the host's mod-loading sequence.
///
/// The headset pass needs a fully populated item database, so it runs one step after
/// the stage that finishes loading database mods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum LoadOrder {
    PreDatabase,
    Database,
    PostDatabase,
    /// Offset after [`LoadOrder::PostDatabase`].
    AfterPostDatabase(u8),
}

/// Identity of the mod as reported to the host.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModMetadata {
    /// Reverse-domain identifier, unique across mods.
    pub guid: &'static str,
    /// Display name, also used as the log prefix.
    pub name: &'static str,
    pub author: &'static str,
    /// Mod version (semver).
    pub version: &'static str,
    /// Semver range of compatible host versions.
    pub host_version: &'static str,
    pub license: &'static str,
    /// When the host runs the mod.
    pub load_order: LoadOrder,
}

/// This mod's metadata.
pub const METADATA: ModMetadata = ModMetadata {
    guid: "com.shwng.deepfriedheadsets",
    name: "Deep Fried Headsets",
    author: "shwng",
    version: "4.0.0",
    host_version: "~4.0.0",
    license: "MIT",
    load_order: LoadOrder::AfterPostDatabase(1),
};
