//! Portrait: groups stacked as full-width bands, top to bottom.
//!
//! The budget is in height rather than area: `3x + Σ (1.5x + gaps + Σ Aᵢ / w) = H`,
//! where `w` is the band's item width.

use crate::layout::arrangement::{MacroArranger, MacroLayout, TITLE_SCALE};
use crate::layout::column::{
    content_height, group_coefficient, group_margin_height, item_width, SUBTITLE_SCALE,
};
use crate::layout::error::LayoutError;
use crate::layout::font_scale::FontScaleEquation;
use crate::layout::geometry::Rect;
use crate::layout::options::{Canvas, LayoutOptions};
use crate::models::Document;

pub struct Portrait;

impl MacroArranger for Portrait {
    fn name(&self) -> &'static str {
        "portrait"
    }

    fn font_scale_equation(
        &self,
        doc: &Document,
        canvas: Canvas,
        opts: &LayoutOptions,
    ) -> Result<FontScaleEquation, LayoutError> {
        let mut b = 0.0;
        let mut margins = 0.0;
        for group in &doc.groups {
            let n = group.items.len();
            let width = item_width(canvas.width, n, opts);
            if width > 0.0 {
                b += group_coefficient(group) / width;
            }
            margins += group_margin_height(n, opts);
        }
        let a = TITLE_SCALE + SUBTITLE_SCALE * doc.groups.len() as f64;
        Ok(FontScaleEquation::new(a, b, margins - canvas.height))
    }

    fn arrange(
        &self,
        doc: &Document,
        canvas: Canvas,
        x: f64,
        opts: &LayoutOptions,
    ) -> Result<MacroLayout, LayoutError> {
        let mut y = TITLE_SCALE * x;
        let frames = doc
            .groups
            .iter()
            .map(|group| {
                let height = content_height(group, x, canvas.width, opts);
                let frame = Rect::new(0.0, y, canvas.width, y + height);
                y += height;
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

    fn doc() -> Document {
        let item = |content: &str, highlight: &str| Item {
            content: content.to_string(),
            highlight: highlight.to_string(),
            ..Item::default()
        };
        Document {
            title: "Poster".to_string(),
            groups: vec![
                Group {
                    subtitle: "One".to_string(),
                    items: vec![item("Deaths: 189", "189")],
                },
                Group {
                    subtitle: "Two".to_string(),
                    items: vec![
                        item("Wounded: 2,400 across the front", "2,400"),
                        item("Missing: 75", "75"),
                    ],
                },
            ],
        }
    }

    #[test]
    fn test_bands_stack_to_canvas_height() {
        let d = doc();
        let canvas = Canvas::new(600.0, 900.0);
        let opts = LayoutOptions {
            margin: 8.0,
            vertical_margin: 6.0,
            ..LayoutOptions::default()
        };
        let eq = Portrait.font_scale_equation(&d, canvas, &opts).unwrap();
        let x = eq.solve().unwrap();
        let layout = Portrait.arrange(&d, canvas, x, &opts).unwrap();

        assert!((layout.frames[0].y1 - 3.0 * x).abs() < 1e-9);
        assert!((layout.frames[0].y2 - layout.frames[1].y1).abs() < 1e-9);
        assert!((layout.frames[1].y2 - 900.0).abs() < 1e-6);
        for frame in &layout.frames {
            assert_eq!(frame.x1, 0.0);
            assert_eq!(frame.x2, 600.0);
        }
    }
}
