//! Landscape: groups as full-height columns, left to right.
//!
//! Column width is each group's item area over the height left for items
//! (`H − title − subtitle − gaps`), rescaled so the columns span the canvas exactly.

use crate::layout::arrangement::{
    area_equation, share_widths, MacroArranger, MacroLayout, TITLE_SCALE,
};
use crate::layout::column::{group_coefficient, group_margin_height, SUBTITLE_SCALE};
use crate::layout::error::LayoutError;
use crate::layout::font_scale::FontScaleEquation;
use crate::layout::geometry::Rect;
use crate::layout::options::{Canvas, LayoutOptions};
use crate::models::Document;

pub struct Landscape;

impl MacroArranger for Landscape {
    fn name(&self) -> &'static str {
        "landscape"
    }

    fn font_scale_equation(
        &self,
        doc: &Document,
        canvas: Canvas,
        _opts: &LayoutOptions,
    ) -> Result<FontScaleEquation, LayoutError> {
        let b = doc.groups.iter().map(group_coefficient).sum();
        // All columns share one subtitle row.
        Ok(area_equation(canvas, 1, b, 0.0))
    }

    fn arrange(
        &self,
        doc: &Document,
        canvas: Canvas,
        x: f64,
        opts: &LayoutOptions,
    ) -> Result<MacroLayout, LayoutError> {
        let top = TITLE_SCALE * x;
        let ideal: Vec<f64> = doc
            .groups
            .iter()
            .map(|group| {
                let free = canvas.height
                    - top
                    - SUBTITLE_SCALE * x
                    - group_margin_height(group.items.len(), opts);
                if free > 0.0 {
                    group_coefficient(group) * x * x / free
                } else {
                    0.0
                }
            })
            .collect();

        let mut x0 = 0.0;
        let frames = share_widths(&ideal, canvas.width)
            .into_iter()
            .map(|w| {
                let frame = Rect::new(x0, top, x0 + w, canvas.height);
                x0 += w;
                frame
            })
            .collect();
        Ok(MacroLayout::new(frames))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Group, Item};

    fn doc(weights: &[usize]) -> Document {
        Document {
            title: "Poster".to_string(),
            groups: weights
                .iter()
                .map(|&n| Group {
                    subtitle: "Group".to_string(),
                    items: vec![Item {
                        content: "a".repeat(n),
                        highlight: "1".to_string(),
                        ..Item::default()
                    }],
                })
                .collect(),
        }
    }

    #[test]
    fn test_columns_span_canvas_width() {
        let d = doc(&[10, 30, 20]);
        let canvas = Canvas::new(1200.0, 800.0);
        let opts = LayoutOptions::default();
        let x = Landscape.font_scale_equation(&d, canvas, &opts).unwrap().solve().unwrap();
        let layout = Landscape.arrange(&d, canvas, x, &opts).unwrap();

        assert_eq!(layout.frames.len(), 3);
        assert_eq!(layout.frames[0].x1, 0.0);
        assert!((layout.frames[2].x2 - 1200.0).abs() < 1e-9);
        for pair in layout.frames.windows(2) {
            assert!((pair[0].x2 - pair[1].x1).abs() < 1e-9);
        }
        for frame in &layout.frames {
            assert!((frame.y1 - 3.0 * x).abs() < 1e-9);
            assert_eq!(frame.y2, 800.0);
        }
        // More content, wider column.
        assert!(layout.frames[1].width() > layout.frames[2].width());
        assert!(layout.frames[2].width() > layout.frames[0].width());
    }

    #[test]
    fn test_content_exactly_fills_columns_without_margins() {
        let d = doc(&[12, 7]);
        let canvas = Canvas::new(1000.0, 1000.0);
        let opts = LayoutOptions::default();
        let x = Landscape.font_scale_equation(&d, canvas, &opts).unwrap().solve().unwrap();
        let layout = Landscape.arrange(&d, canvas, x, &opts).unwrap();
        for (group, frame) in d.groups.iter().zip(&layout.frames) {
            let items = group_coefficient(group) * x * x / frame.width();
            let used = 1.5 * x + items;
            assert!((frame.height() - used).abs() < 1e-6);
        }
    }
}
