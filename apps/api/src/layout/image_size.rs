//! Maps a placed Icon/Vis rectangle to the image size requested from the icon generator.

use std::fmt;

use serde::Serialize;

use crate::layout::geometry::Rect;

/// Generation sizes keyed by width/height ratio. Order matters for ties.
#[rustfmt::skip]
static CANONICAL_SIZES: [(f64, u32, u32); 15] = [
    (1.0,   1024, 1024),
    (1.333, 1365, 1024),
    (0.75,  1024, 1365),
    (1.5,   1536, 1024),
    (0.667, 1024, 1536),
    (1.777, 1820, 1024),
    (0.563, 1024, 1820),
    (2.0,   2048, 1024),
    (0.5,   1024, 2048),
    (1.4,   1434, 1024),
    (0.714, 1024, 1434),
    (0.8,   1024, 1280),
    (1.25,  1280, 1024),
    (0.6,   1024, 1707),
    (1.667, 1707, 1024),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
    /// Canonical ratio the size was picked for.
    pub aspect_ratio: f64,
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Nearest canonical generation size for `rect`'s aspect ratio, rounded to 3 decimals.
///
/// `None` for degenerate rectangles.
pub fn canonical_image_size(rect: &Rect) -> Option<ImageSize> {
    if !rect.is_valid() {
        return None;
    }
    let ratio = (rect.width() / rect.height() * 1000.0).round() / 1000.0;

    let mut best = CANONICAL_SIZES[0];
    for entry in CANONICAL_SIZES {
        if entry.0 == ratio {
            best = entry;
            break;
        }
        if (entry.0 - ratio).abs() < (best.0 - ratio).abs() {
            best = entry;
        }
    }

    let (aspect_ratio, width, height) = best;
    Some(ImageSize {
        width,
        height,
        aspect_ratio,
    })
}
