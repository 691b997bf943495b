//! Row tiling shared by the Spiral and Grid policies.
//!
//! Groups are packed into rows. Inside a row each group's width is its share of the row's
//! item area; the row is as tall as its tallest group at that width.

use crate::layout::arrangement::{area_equation, fit_heights, share_widths, TITLE_SCALE};
use crate::layout::column::{content_height, group_coefficient, group_margin_height};
use crate::layout::font_scale::FontScaleEquation;
use crate::layout::geometry::Rect;
use crate::layout::options::{Canvas, LayoutOptions};
use crate::models::Group;

/// Area budget for `row_count` rows, each carrying one subtitle band.
pub fn row_equation(
    groups: &[&Group],
    row_count: usize,
    canvas: Canvas,
    opts: &LayoutOptions,
) -> FontScaleEquation {
    let b = groups.iter().map(|g| group_coefficient(g)).sum();
    let margins = groups
        .iter()
        .map(|g| group_margin_height(g.items.len(), opts))
        .sum();
    area_equation(canvas, row_count, b, margins)
}

/// Frames for `groups` packed into `rows` (positions into `groups`), below the title band.
/// Returned frames are indexed like `groups`.
///
/// Rows that would run past the bottom of the canvas are shortened uniformly.
pub fn tile_rows(
    groups: &[&Group],
    rows: &[Vec<usize>],
    canvas: Canvas,
    x: f64,
    opts: &LayoutOptions,
) -> Vec<Rect> {
    let coefficients: Vec<f64> = groups.iter().map(|g| group_coefficient(g)).collect();
    let widths: Vec<Vec<f64>> = rows
        .iter()
        .map(|row| {
            let shares: Vec<f64> = row.iter().map(|&p| coefficients[p]).collect();
            share_widths(&shares, canvas.width)
        })
        .collect();
    let mut heights: Vec<f64> = rows
        .iter()
        .zip(&widths)
        .map(|(row, row_widths)| {
            row.iter()
                .zip(row_widths)
                .map(|(&p, &w)| content_height(groups[p], x, w, opts))
                .fold(0.0, f64::max)
        })
        .collect();

    let top = TITLE_SCALE * x;
    fit_heights(&mut heights, canvas.height - top);

    let mut frames = vec![Rect::new(0.0, 0.0, 0.0, 0.0); groups.len()];
    let mut y = top;
    for ((row, row_widths), height) in rows.iter().zip(&widths).zip(heights) {
        let mut x0 = 0.0;
        for (&p, &w) in row.iter().zip(row_widths) {
            frames[p] = Rect::new(x0, y, x0 + w, y + height);
            x0 += w;
        }
        y += height;
    }
    frames
}
