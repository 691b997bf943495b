//! Macro arrangement: assigns every group a rectangle on the canvas.
//!
//! Each policy contributes two things: the font-scale equation describing its space
//! budget, and the group frames for a solved `x`. Everything below the group level
//! (column stacking, image placement, text carving) is shared.
//!
//! Policies are stateless and dispatched through [`Arrangement::arranger`].

pub mod grid;
pub mod landscape;
pub mod portrait;
pub mod rows;
pub mod spiral;
pub mod star;

use std::fmt;
use std::str::FromStr;

use crate::layout::column::SUBTITLE_SCALE;
use crate::layout::error::LayoutError;
use crate::layout::font_scale::FontScaleEquation;
use crate::layout::geometry::Rect;
use crate::layout::options::{Canvas, LayoutOptions};
use crate::layout::result::LayoutResult;
use crate::models::Document;

/// Title band height as a multiple of `x`.
pub const TITLE_SCALE: f64 = 3.0;

/// Largest group count the fixed-table policies (Spiral, Star) know how to arrange.
pub const MAX_TABLE_GROUPS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arrangement {
    Landscape,
    Portrait,
    Spiral,
    Star,
    Grid,
    PortraitGrid,
}

impl Arrangement {
    pub const ALL: [Arrangement; 6] = [
        Arrangement::Landscape,
        Arrangement::Portrait,
        Arrangement::Spiral,
        Arrangement::Star,
        Arrangement::Grid,
        Arrangement::PortraitGrid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Arrangement::Landscape => "landscape",
            Arrangement::Portrait => "portrait",
            Arrangement::Spiral => "spiral",
            Arrangement::Star => "star",
            Arrangement::Grid => "grid",
            Arrangement::PortraitGrid => "grid_portrait",
        }
    }

    pub fn arranger(self) -> &'static dyn MacroArranger {
        match self {
            Arrangement::Landscape => &landscape::Landscape,
            Arrangement::Portrait => &portrait::Portrait,
            Arrangement::Spiral => &spiral::Spiral,
            Arrangement::Star => &star::Star,
            Arrangement::Grid => &grid::Grid::LANDSCAPE,
            Arrangement::PortraitGrid => &grid::Grid::PORTRAIT,
        }
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Arrangement {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "landscape" => Ok(Arrangement::Landscape),
            "portrait" => Ok(Arrangement::Portrait),
            "spiral" => Ok(Arrangement::Spiral),
            "star" => Ok(Arrangement::Star),
            "grid" => Ok(Arrangement::Grid),
            "grid_portrait" | "portraitgrid" | "portrait_grid" | "grid_protrait" => {
                Ok(Arrangement::PortraitGrid)
            }
            _ => Err(LayoutError::InvalidArrangementType(s.to_string())),
        }
    }
}

/// Group frames produced by a policy, indexed like `Document::groups`.
#[derive(Debug, Clone, PartialEq)]
pub struct MacroLayout {
    pub frames: Vec<Rect>,
    /// Content-free placeholder cell (Star only).
    pub virtual_cell: Option<Rect>,
}

impl MacroLayout {
    pub fn new(frames: Vec<Rect>) -> Self {
        Self {
            frames,
            virtual_cell: None,
        }
    }
}

pub trait MacroArranger: Sync {
    fn name(&self) -> &'static str;

    /// Coefficients of the policy's space budget in `x`.
    fn font_scale_equation(
        &self,
        doc: &Document,
        canvas: Canvas,
        opts: &LayoutOptions,
    ) -> Result<FontScaleEquation, LayoutError>;

    fn arrange(
        &self,
        doc: &Document,
        canvas: Canvas,
        x: f64,
        opts: &LayoutOptions,
    ) -> Result<MacroLayout, LayoutError>;

    /// Post-processing on the assembled (unpadded) result.
    fn finish(&self, _result: &mut LayoutResult, _canvas: Canvas) {}
}

// ────────────────────────────────────────────────────────────────────────────
// Shared helpers
// ────────────────────────────────────────────────────────────────────────────

/// Rejects group counts outside the fixed tables.
pub(crate) fn check_table_count(arrangement: &'static str, count: usize) -> Result<(), LayoutError> {
    if (1..=MAX_TABLE_GROUPS).contains(&count) {
        Ok(())
    } else {
        Err(LayoutError::UnsupportedGroupCount { arrangement, count })
    }
}

/// Area budget for full-width bands: title plus `subtitle_bands` subtitle rows spanning
/// the canvas width, `b·x²` of item area and `margins` of vertical gaps.
pub(crate) fn area_equation(
    canvas: Canvas,
    subtitle_bands: usize,
    b: f64,
    margins: f64,
) -> FontScaleEquation {
    let a = (TITLE_SCALE + SUBTITLE_SCALE * subtitle_bands as f64) * canvas.width;
    let c = -canvas.area() + margins * canvas.width;
    FontScaleEquation::new(a, b, c)
}

/// Splits `total` proportionally to `shares`, evenly when every share is zero.
pub(crate) fn share_widths(shares: &[f64], total: f64) -> Vec<f64> {
    let sum: f64 = shares.iter().sum();
    if sum > 0.0 {
        shares.iter().map(|s| total * (s / sum)).collect()
    } else if shares.is_empty() {
        Vec::new()
    } else {
        vec![total / shares.len() as f64; shares.len()]
    }
}

/// Scales `heights` down uniformly when they add up to more than `room`.
pub(crate) fn fit_heights(heights: &mut [f64], room: f64) {
    let total: f64 = heights.iter().sum();
    if total > room && total > 0.0 {
        let factor = room.max(0.0) / total;
        for h in heights.iter_mut() {
            *h *= factor;
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policy_names_case_insensitive() {
        assert_eq!("Landscape".parse::<Arrangement>().unwrap(), Arrangement::Landscape);
        assert_eq!("PORTRAIT".parse::<Arrangement>().unwrap(), Arrangement::Portrait);
        assert_eq!("spiral".parse::<Arrangement>().unwrap(), Arrangement::Spiral);
        assert_eq!("Star".parse::<Arrangement>().unwrap(), Arrangement::Star);
        assert_eq!("grid".parse::<Arrangement>().unwrap(), Arrangement::Grid);
        for alias in ["grid_portrait", "PortraitGrid", "portrait_grid", "grid_protrait"] {
            assert_eq!(alias.parse::<Arrangement>().unwrap(), Arrangement::PortraitGrid);
        }
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        assert_eq!(
            "diagonal".parse::<Arrangement>(),
            Err(LayoutError::InvalidArrangementType("diagonal".to_string()))
        );
    }

    #[test]
    fn test_names_round_trip_and_match_arrangers() {
        for arrangement in Arrangement::ALL {
            assert_eq!(arrangement.name().parse::<Arrangement>().unwrap(), arrangement);
            assert_eq!(arrangement.arranger().name(), arrangement.name());
        }
    }

    #[test]
    fn test_share_widths() {
        assert_eq!(share_widths(&[1.0, 3.0], 100.0), vec![25.0, 75.0]);
        assert_eq!(share_widths(&[0.0, 0.0], 100.0), vec![50.0, 50.0]);
        assert!(share_widths(&[], 100.0).is_empty());
    }

    #[test]
    fn test_fit_heights_only_shrinks() {
        let mut roomy = [10.0, 20.0];
        fit_heights(&mut roomy, 100.0);
        assert_eq!(roomy, [10.0, 20.0]);

        let mut tight = [30.0, 90.0];
        fit_heights(&mut tight, 60.0);
        assert_eq!(tight, [15.0, 45.0]);
    }

    #[test]
    fn test_table_count_bounds() {
        assert!(check_table_count("spiral", 1).is_ok());
        assert!(check_table_count("spiral", 10).is_ok());
        assert!(matches!(
            check_table_count("star", 11),
            Err(LayoutError::UnsupportedGroupCount { count: 11, .. })
        ));
        assert!(check_table_count("star", 0).is_err());
    }
}
