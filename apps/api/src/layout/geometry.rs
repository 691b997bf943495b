//! Axis-aligned rectangles in canvas coordinates (y grows downwards).
//!
//! On the wire a rectangle is its four corners
//! `[[x1, y1], [x2, y1], [x1, y2], [x2, y2]]`; absent rectangles are `null`.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle. Intermediate rectangles may be degenerate; only rectangles
/// passing [`Rect::is_valid`] are ever emitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[[f64; 2]; 4]", try_from = "Vec<[f64; 2]>")]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn from_origin(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Zero for degenerate rectangles.
    pub fn area(&self) -> f64 {
        if self.is_valid() {
            self.width() * self.height()
        } else {
            0.0
        }
    }

    /// Strictly positive, finite width and height.
    pub fn is_valid(&self) -> bool {
        self.x1.is_finite()
            && self.y1.is_finite()
            && self.x2.is_finite()
            && self.y2.is_finite()
            && self.x1 < self.x2
            && self.y1 < self.y2
    }

    /// `Some(self)` if valid.
    pub fn valid(self) -> Option<Self> {
        self.is_valid().then_some(self)
    }

    /// Area shared with `other`; touching edges share nothing.
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let w = self.x2.min(other.x2) - self.x1.max(other.x1);
        let h = self.y2.min(other.y2) - self.y1.max(other.y1);
        if w > 0.0 && h > 0.0 {
            w * h
        } else {
            0.0
        }
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.intersection_area(other) > 0.0
    }

    /// Area of `self` lying outside `bounds`.
    pub fn area_outside(&self, bounds: &Rect) -> f64 {
        (self.area() - self.intersection_area(bounds)).max(0.0)
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.x1 >= self.x1 && other.x2 <= self.x2 && other.y1 >= self.y1 && other.y2 <= self.y2
    }

    /// Clamps every edge into `bounds`. The result may be degenerate.
    pub fn clip_to(&self, bounds: &Rect) -> Rect {
        let clamp_x = |v: f64| v.min(bounds.x2).max(bounds.x1);
        let clamp_y = |v: f64| v.min(bounds.y2).max(bounds.y1);
        Rect::new(
            clamp_x(self.x1),
            clamp_y(self.y1),
            clamp_x(self.x2),
            clamp_y(self.y2),
        )
    }

    /// Moves every edge inwards by `amount`. The result may be degenerate.
    pub fn inset(&self, amount: f64) -> Rect {
        Rect::new(
            self.x1 + amount,
            self.y1 + amount,
            self.x2 - amount,
            self.y2 - amount,
        )
    }

    /// Scales the rectangle about `(ref_x, ref_y)`; factors must be positive.
    pub fn scale_about(&self, ref_x: f64, ref_y: f64, sx: f64, sy: f64) -> Rect {
        Rect::new(
            (self.x1 - ref_x) * sx + ref_x,
            (self.y1 - ref_y) * sy + ref_y,
            (self.x2 - ref_x) * sx + ref_x,
            (self.y2 - ref_y) * sy + ref_y,
        )
    }

    pub fn corners(&self) -> [[f64; 2]; 4] {
        [
            [self.x1, self.y1],
            [self.x2, self.y1],
            [self.x1, self.y2],
            [self.x2, self.y2],
        ]
    }
}

impl From<Rect> for [[f64; 2]; 4] {
    fn from(rect: Rect) -> Self {
        rect.corners()
    }
}

impl TryFrom<Vec<[f64; 2]>> for Rect {
    type Error = String;

    /// Accepts any corner list and takes its bounding box.
    fn try_from(points: Vec<[f64; 2]>) -> Result<Self, Self::Error> {
        if points.len() < 2 {
            return Err(format!(
                "a rectangle needs at least 2 corner points, got {}",
                points.len()
            ));
        }
        let mut rect = Rect::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        );
        for [x, y] in points {
            rect.x1 = rect.x1.min(x);
            rect.y1 = rect.y1.min(y);
            rect.x2 = rect.x2.max(x);
            rect.y2 = rect.y2.max(y);
        }
        Ok(rect)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
