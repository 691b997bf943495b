//! Fatal errors for a single layout request.
//!
//! Geometric dead-ends inside placement and carving are not errors; they surface as
//! `None` rectangles in the result.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The font-scale quadratic has no positive root: the content cannot fill the canvas.
    #[error("content cannot fit the canvas at any positive font scale (discriminant {discriminant}, x = {font_scale})")]
    InfeasibleLayout { discriminant: f64, font_scale: f64 },

    #[error("{arrangement} arrangement does not support {count} groups (expected 1 to 10)")]
    UnsupportedGroupCount {
        arrangement: &'static str,
        count: usize,
    },

    #[error("unknown arrangement type '{0}'")]
    InvalidArrangementType(String),

    #[error("canvas must have positive finite dimensions, got {width} x {height}")]
    InvalidCanvas { width: f64, height: f64 },
}
