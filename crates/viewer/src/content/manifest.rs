use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{load_json, ContentError};

/// The gallery the viewer walks: display metadata plus the ordered artwork
/// list the room layout is generated from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GalleryManifest {
    pub room: RoomInfo,
    #[serde(default)]
    pub artworks: Vec<ArtworkEntry>,
}

/// Display-only room metadata; the simulation never reads it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomInfo {
    pub name: String,
    #[serde(default)]
    pub curator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtworkEntry {
    pub id: String,
    /// Image path, resolved relative to the manifest file.
    pub image: PathBuf,
    #[serde(default)]
    pub title: Option<String>,
    /// Hanging order along the corridor.
    pub order: u32,
}

/// Loads a manifest and returns its artworks sorted by hanging order.
pub fn load_manifest(path: &Path) -> Result<GalleryManifest, ContentError> {
    let mut manifest: GalleryManifest = load_json(path)?;
    manifest.artworks.sort_by_key(|entry| entry.order);
    Ok(manifest)
}
