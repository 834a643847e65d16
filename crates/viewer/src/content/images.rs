//! Artwork image verification.
//!
//! Every referenced image is probed before the scene opens. A file that is
//! missing or does not decode is downgraded to a placeholder with a warning
//! rather than failing the launch; an upload problem should never keep a
//! visitor out of the gallery.

use std::path::{Path, PathBuf};

use image::ImageReader;
use thiserror::Error;
use tracing::{debug, warn};

use super::manifest::ArtworkEntry;

#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedArtwork {
    pub entry: ArtworkEntry,
    /// Pixel dimensions when the image decoded cleanly.
    pub dimensions: Option<(u32, u32)>,
    /// True when the image could not be read and a placeholder should hang
    /// in its slot.
    pub placeholder: bool,
}

#[derive(Debug, Error)]
enum ImageProbeError {
    #[error("unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("undecodable: {0}")]
    Decode(#[from] image::ImageError),
}

/// Probes each artwork image relative to the manifest directory.
pub fn verify_artwork_images(base_dir: &Path, artworks: &[ArtworkEntry]) -> Vec<VerifiedArtwork> {
    artworks
        .iter()
        .map(|entry| {
            let path = resolve_image_path(base_dir, &entry.image);
            match probe_dimensions(&path) {
                Ok((width, height)) => {
                    debug!(artwork = %entry.id, width, height, "artwork_image_ok");
                    VerifiedArtwork {
                        entry: entry.clone(),
                        dimensions: Some((width, height)),
                        placeholder: false,
                    }
                }
                Err(error) => {
                    warn!(
                        artwork = %entry.id,
                        path = %path.display(),
                        error = %error,
                        "artwork_image_unreadable"
                    );
                    VerifiedArtwork {
                        entry: entry.clone(),
                        dimensions: None,
                        placeholder: true,
                    }
                }
            }
        })
        .collect()
}

fn resolve_image_path(base_dir: &Path, image: &Path) -> PathBuf {
    if image.is_absolute() {
        image.to_path_buf()
    } else {
        base_dir.join(image)
    }
}

fn probe_dimensions(path: &Path) -> Result<(u32, u32), ImageProbeError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    Ok(reader.into_dimensions()?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn entry(id: &str, image: &str) -> ArtworkEntry {
        ArtworkEntry {
            id: id.to_string(),
            image: PathBuf::from(image),
            title: None,
            order: 1,
        }
    }

    #[test]
    fn a_decodable_image_passes_with_its_dimensions() {
        let dir = tempfile::tempdir().expect("tempdir");
        image::RgbaImage::new(8, 6)
            .save(dir.path().join("ok.png"))
            .expect("write png");

        let verified = verify_artwork_images(dir.path(), &[entry("a1", "ok.png")]);
        assert_eq!(verified.len(), 1);
        assert!(!verified[0].placeholder);
        assert_eq!(verified[0].dimensions, Some((8, 6)));
    }

    #[test]
    fn a_missing_image_becomes_a_placeholder() {
        let dir = tempfile::tempdir().expect("tempdir");
        let verified = verify_artwork_images(dir.path(), &[entry("a1", "absent.png")]);
        assert!(verified[0].placeholder);
        assert_eq!(verified[0].dimensions, None);
    }

    #[test]
    fn an_undecodable_file_becomes_a_placeholder() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("junk.png"), b"not an image").expect("write junk");

        let verified = verify_artwork_images(dir.path(), &[entry("a1", "junk.png")]);
        assert!(verified[0].placeholder);
    }

    #[test]
    fn one_bad_image_does_not_poison_the_rest() {
        let dir = tempfile::tempdir().expect("tempdir");
        image::RgbaImage::new(4, 4)
            .save(dir.path().join("good.png"))
            .expect("write png");

        let verified = verify_artwork_images(
            dir.path(),
            &[entry("bad", "absent.png"), entry("good", "good.png")],
        );
        assert!(verified[0].placeholder);
        assert!(!verified[1].placeholder);
    }

    #[test]
    fn absolute_image_paths_skip_the_base_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let absolute = dir.path().join("abs.png");
        image::RgbaImage::new(2, 2).save(&absolute).expect("write png");

        let unrelated_base = tempfile::tempdir().expect("tempdir");
        let verified = verify_artwork_images(
            unrelated_base.path(),
            &[entry("abs", absolute.to_str().expect("utf8 path"))],
        );
        assert!(!verified[0].placeholder);
    }
}
