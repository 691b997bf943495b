//! Grid and PortraitGrid: groups in document order, tiled into near-square rows.
//!
//! Grid fixes the column count at `⌈√n⌉`; PortraitGrid fixes the row count instead,
//! which gives more, narrower rows on tall canvases. Neither has a group limit.

use crate::layout::arrangement::rows::{row_equation, tile_rows};
use crate::layout::arrangement::{MacroArranger, MacroLayout};
use crate::layout::error::LayoutError;
use crate::layout::font_scale::FontScaleEquation;
use crate::layout::options::{Canvas, LayoutOptions};
use crate::models::{Document, Group};

pub struct Grid {
    name: &'static str,
    portrait: bool,
}

impl Grid {
    pub const LANDSCAPE: Grid = Grid {
        name: "grid",
        portrait: false,
    };
    pub const PORTRAIT: Grid = Grid {
        name: "grid_portrait",
        portrait: true,
    };

    /// Groups per row for `n` groups.
    fn columns(&self, n: usize) -> usize {
        let side = (n as f64).sqrt().ceil() as usize;
        if self.portrait {
            let rows = side.max(1);
            n.div_ceil(rows).max(1)
        } else {
            side.max(1)
        }
    }

    fn rows(&self, n: usize) -> Vec<Vec<usize>> {
        let indices: Vec<usize> = (0..n).collect();
        indices
            .chunks(self.columns(n))
            .map(|chunk| chunk.to_vec())
            .collect()
    }
}

impl MacroArranger for Grid {
    fn name(&self) -> &'static str {
        self.name
    }

    fn font_scale_equation(
        &self,
        doc: &Document,
        canvas: Canvas,
        opts: &LayoutOptions,
    ) -> Result<FontScaleEquation, LayoutError> {
        let groups: Vec<&Group> = doc.groups.iter().collect();
        let rows = self.rows(groups.len()).len();
        Ok(row_equation(&groups, rows, canvas, opts))
    }

    fn arrange(
        &self,
        doc: &Document,
        canvas: Canvas,
        x: f64,
        opts: &LayoutOptions,
    ) -> Result<MacroLayout, LayoutError> {
        let groups: Vec<&Group> = doc.groups.iter().collect();
        let rows = self.rows(groups.len());
        Ok(MacroLayout::new(tile_rows(&groups, &rows, canvas, x, opts)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn doc(n: usize) -> Document {
        Document {
            title: "Grid".to_string(),
            groups: (0..n)
                .map(|i| Group {
                    subtitle: format!("Group {}", i + 1),
                    items: vec![Item {
                        content: "n".repeat(8 + 2 * i),
                        highlight: format!("{}%", 5 * i),
                        ..Item::default()
                    }],
                })
                .collect(),
        }
    }

    fn row_lengths(grid: &Grid, n: usize) -> Vec<usize> {
        grid.rows(n).iter().map(Vec::len).collect()
    }

    #[test]
    fn test_landscape_grid_rows() {
        assert_eq!(row_lengths(&Grid::LANDSCAPE, 1), vec![1]);
        assert_eq!(row_lengths(&Grid::LANDSCAPE, 4), vec![2, 2]);
        assert_eq!(row_lengths(&Grid::LANDSCAPE, 5), vec![3, 2]);
        assert_eq!(row_lengths(&Grid::LANDSCAPE, 10), vec![4, 4, 2]);
    }

    #[test]
    fn test_portrait_grid_rows() {
        assert_eq!(row_lengths(&Grid::PORTRAIT, 5), vec![2, 2, 1]);
        assert_eq!(row_lengths(&Grid::PORTRAIT, 7), vec![3, 3, 1]);
        assert_eq!(row_lengths(&Grid::PORTRAIT, 12), vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_empty_document_has_no_rows() {
        assert!(Grid::LANDSCAPE.rows(0).is_empty());
        assert!(Grid::PORTRAIT.rows(0).is_empty());
    }

    #[test]
    fn test_groups_keep_document_order() {
        let d = doc(5);
        let canvas = Canvas::new(1200.0, 900.0);
        let opts = LayoutOptions::default();
        let x = Grid::LANDSCAPE
            .font_scale_equation(&d, canvas, &opts)
            .unwrap()
            .solve()
            .unwrap();
        let frames = Grid::LANDSCAPE.arrange(&d, canvas, x, &opts).unwrap().frames;

        assert_eq!(frames[0].x1, 0.0);
        assert!((frames[0].x2 - frames[1].x1).abs() < 1e-9);
        assert!((frames[2].x2 - 1200.0).abs() < 1e-9);
        assert_eq!(frames[3].x1, 0.0);
        assert_eq!(frames[3].y1, frames[0].y2);
        assert!(frames.iter().all(|f| f.y2 <= 900.0 + 1e-9));
    }
}
