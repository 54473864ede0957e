//! Album cover resolution.
//!
//! Covers are decoded once while the catalog loads and kept as small RGBA
//! thumbnails; the UI samples them into terminal cells every frame.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::warn;

/// Largest edge, in pixels, a decoded cover is kept at.
const THUMBNAIL_EDGE: u32 = 256;

/// A decoded album cover.
#[derive(Debug, Clone)]
pub struct Cover {
    pub path: PathBuf,
    pub pixels: RgbaImage,
}

/// Resolved cover reference: a decoded image or an explicit missing marker.
#[derive(Debug, Clone)]
pub enum ArtWork {
    Image(Cover),
    Missing { path: PathBuf },
}

impl ArtWork {
    /// Resolve `path` into a decoded cover.
    ///
    /// A file that does not exist, or that exists but cannot be decoded,
    /// resolves to [`ArtWork::Missing`]; this never fails the catalog load.
    pub fn resolve(path: &Path) -> Self {
        if !path.exists() {
            warn!("missing artwork: {}", path.display());
            return Self::Missing {
                path: path.to_path_buf(),
            };
        }

        match image::open(path) {
            Ok(img) => {
                let img = if img.width().max(img.height()) > THUMBNAIL_EDGE {
                    img.thumbnail(THUMBNAIL_EDGE, THUMBNAIL_EDGE)
                } else {
                    img
                };
                Self::Image(Cover {
                    path: path.to_path_buf(),
                    pixels: img.to_rgba8(),
                })
            }
            Err(e) => {
                warn!("undecodable artwork {}: {e}", path.display());
                Self::Missing {
                    path: path.to_path_buf(),
                }
            }
        }
    }

    pub fn cover(&self) -> Option<&Cover> {
        match self {
            Self::Image(c) => Some(c),
            Self::Missing { .. } => None,
        }
    }

    /// Path the catalog named for this cover.
    pub fn path(&self) -> &Path {
        match self {
            Self::Image(c) => &c.path,
            Self::Missing { path } => path,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }
}
