//! Canvas dimensions and per-request layout options.

use serde::{Deserialize, Serialize};

use crate::layout::error::LayoutError;

/// Default inset applied to every emitted rectangle.
pub const DEFAULT_PADDING: f64 = 5.0;

/// Poster canvas in layout units. Origin top-left, y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(LayoutError::InvalidCanvas {
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Horizontal inset of items inside a group holding more than one item.
    pub margin: f64,
    /// Gap after the subtitle band and between consecutive items of a multi-item group.
    pub vertical_margin: f64,
    /// Final inset applied to every rectangle.
    pub padding: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            margin: 0.0,
            vertical_margin: 0.0,
            padding: DEFAULT_PADDING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_validation() {
        assert!(Canvas::new(1000.0, 800.0).validate().is_ok());
        assert!(Canvas::new(0.0, 800.0).validate().is_err());
        assert!(Canvas::new(1000.0, -1.0).validate().is_err());
        assert!(matches!(
            Canvas::new(f64::NAN, 800.0).validate(),
            Err(LayoutError::InvalidCanvas { .. })
        ));
    }

    #[test]
    fn test_default_options() {
        let opts = LayoutOptions::default();
        assert_eq!(opts.margin, 0.0);
        assert_eq!(opts.vertical_margin, 0.0);
        assert_eq!(opts.padding, DEFAULT_PADDING);
    }
}
