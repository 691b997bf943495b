//! Column layout: stacks a group's items top to bottom inside the group's rectangle.
//!
//! ```text
//! ┌──────────── group ────────────┐
//! │ subtitle (1.5x)               │
//! │ vertical_margin               │  only when the group has > 1 item
//! │ ┌ item 1 (A₁ / w) ──────────┐ │  items inset by `margin` on both sides
//! │ │ Highlight (2x)            │ │  when the group has > 1 item
//! │ └───────────────────────────┘ │
//! │ vertical_margin               │
//! │ ┌ item 2 ───────────────────┐ │
//! ```
//!
//! Item heights follow from area / column width, so the group's natural height is a
//! function of the width it is given. Arrangements use [`content_height`] to size rows.

use crate::layout::font_metrics::{text_width, ItemAreas, ItemDemand, HIGHLIGHT_SCALE};
use crate::layout::geometry::Rect;
use crate::layout::options::LayoutOptions;
use crate::models::Group;

/// Subtitle band height as a multiple of `x`.
pub const SUBTITLE_SCALE: f64 = 1.5;

/// One item's outer cell and its Highlight block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemFrame {
    pub cell: Rect,
    pub highlight: Rect,
    pub areas: ItemAreas,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    pub subtitle: Rect,
    pub items: Vec<ItemFrame>,
}

/// Sum of the group's item coefficients: the group's area is this times `x²`.
pub fn group_coefficient(group: &Group) -> f64 {
    group
        .items
        .iter()
        .map(|item| ItemDemand::of(item).quadratic_coefficient())
        .sum()
}

/// Total vertical margin inside a group: one gap after the subtitle and one between
/// each pair of items. Single-item groups carry none.
pub fn group_margin_height(item_count: usize, opts: &LayoutOptions) -> f64 {
    if item_count > 1 {
        item_count as f64 * opts.vertical_margin
    } else {
        0.0
    }
}

/// Width available to items in a group of `group_width`.
pub fn item_width(group_width: f64, item_count: usize, opts: &LayoutOptions) -> f64 {
    if item_count > 1 {
        group_width - 2.0 * opts.margin
    } else {
        group_width
    }
}

/// Natural height of `group` laid out at `width`.
pub fn content_height(group: &Group, x: f64, width: f64, opts: &LayoutOptions) -> f64 {
    let n = group.items.len();
    let kg_width = item_width(width, n, opts);
    let items: f64 = if kg_width > 0.0 {
        group_coefficient(group) * x * x / kg_width
    } else {
        0.0
    };
    SUBTITLE_SCALE * x + group_margin_height(n, opts) + items
}

/// Lays out `group` inside `frame`, starting at the frame's top edge.
///
/// Items keep their natural heights unless the stack would run past the frame's bottom
/// edge; then every item is shortened by the same factor.
pub fn layout_column(group: &Group, frame: &Rect, x: f64, opts: &LayoutOptions) -> ColumnLayout {
    let n = group.items.len();
    let subtitle_bottom = (frame.y1 + SUBTITLE_SCALE * x).min(frame.y2);
    let subtitle = Rect::new(frame.x1, frame.y1, frame.x2, subtitle_bottom);

    let (kg_x, kg_width) = if n > 1 {
        (frame.x1 + opts.margin, item_width(frame.width(), n, opts))
    } else {
        (frame.x1, frame.width())
    };

    let areas: Vec<ItemAreas> = group
        .items
        .iter()
        .map(|item| ItemDemand::of(item).areas(x))
        .collect();
    let heights: Vec<f64> = areas
        .iter()
        .map(|a| if kg_width > 0.0 { a.total() / kg_width } else { 0.0 })
        .collect();

    let room = (frame.y2 - subtitle_bottom - group_margin_height(n, opts)).max(0.0);
    let natural: f64 = heights.iter().sum();
    let fit = if natural > room { room / natural } else { 1.0 };

    let mut y = subtitle_bottom;
    if n > 1 {
        y += opts.vertical_margin;
    }

    let highlight_height = HIGHLIGHT_SCALE * x;
    let mut items = Vec::with_capacity(n);
    for (j, (item, areas)) in group.items.iter().zip(areas).enumerate() {
        let height = heights[j] * fit;
        let cell = Rect::from_origin(kg_x, y, kg_width, height).clip_to(frame);

        let highlight_width = text_width(&item.highlight, highlight_height).min(kg_width);
        let highlight = Rect::from_origin(kg_x, y, highlight_width, highlight_height).clip_to(&cell);

        items.push(ItemFrame {
            cell,
            highlight,
            areas,
        });

        y += height;
        if j + 1 < n {
            y += opts.vertical_margin;
        }
    }

    ColumnLayout { subtitle, items }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
