mod images;
mod manifest;

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

pub use images::{verify_artwork_images, VerifiedArtwork};
pub use manifest::{load_manifest, ArtworkEntry, GalleryManifest, RoomInfo};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path} at `{pointer}`: {source}")]
    Parse {
        path: PathBuf,
        pointer: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads and deserializes a JSON file, reporting parse failures with the
/// path of the offending field.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut deserializer = serde_json::Deserializer::from_str(&raw);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|error| {
        let pointer = error.path().to_string();
        ContentError::Parse {
            path: path.to_path_buf(),
            pointer,
            source: error.into_inner(),
        }
    })
}
