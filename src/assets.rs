// assets.rs - Image lookup with placeholder fallback, and rating stars

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::catalog::MAX_RATING;

pub const IMAGE_ABSENT_LABEL: &str = "Image not available";
pub const LOGO_MISSING_LABEL: &str = "Logo image not found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    Found(PathBuf),
    /// The record names a file that is not on disk.
    Missing { label: String },
    /// The record names no file at all.
    Absent { label: String },
}

impl ImageSlot {
    pub fn label(&self) -> Option<&str> {
        match self {
            ImageSlot::Found(_) => None,
            ImageSlot::Missing { label } | ImageSlot::Absent { label } => Some(label),
        }
    }
}

pub fn resolve_image(base_dir: &Path, picture: Option<&str>) -> ImageSlot {
    let picture = match picture.map(str::trim) {
        Some(p) if !p.is_empty() => p,
        _ => {
            return ImageSlot::Absent {
                label: IMAGE_ABSENT_LABEL.to_string(),
            };
        }
    };

    let path = base_dir.join(picture);
    if path.is_file() {
        debug!(path = %path.display(), "image file found");
        ImageSlot::Found(path)
    } else {
        warn!(path = %path.display(), "image file missing, using placeholder");
        ImageSlot::Missing {
            label: format!("Image file '{}' not found", picture),
        }
    }
}

pub fn resolve_logo(base_dir: &Path, logo: &str) -> ImageSlot {
    match resolve_image(base_dir, Some(logo)) {
        ImageSlot::Found(path) => ImageSlot::Found(path),
        _ => ImageSlot::Missing {
            label: LOGO_MISSING_LABEL.to_string(),
        },
    }
}

/// Star `i` is filled iff `i < rating`.
pub fn stars(rating: u8) -> [bool; MAX_RATING as usize] {
    std::array::from_fn(|i| i < rating as usize)
}
