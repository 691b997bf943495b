//! Layout pipeline: font scale → macro arrangement → columns → images → text → padding.
//!
//! Pure and synchronous. Handlers run it inside `spawn_blocking`.

use tracing::{debug, warn};

use crate::layout::arrangement::{Arrangement, TITLE_SCALE};
use crate::layout::carve::carve_text;
use crate::layout::column::{layout_column, ItemFrame};
use crate::layout::error::LayoutError;
use crate::layout::geometry::Rect;
use crate::layout::options::{Canvas, LayoutOptions};
use crate::layout::padding::apply_padding;
use crate::layout::placement::{place_images, Placement};
use crate::layout::result::{GroupNode, ItemNode, LayoutResult};
use crate::models::{Document, Group};

/// Lays out `doc` on `canvas` under `arrangement`.
pub fn layout_poster(
    doc: &Document,
    canvas: Canvas,
    arrangement: Arrangement,
    opts: &LayoutOptions,
) -> Result<LayoutResult, LayoutError> {
    canvas.validate()?;
    let arranger = arrangement.arranger();

    let equation = arranger.font_scale_equation(doc, canvas, opts)?;
    let x = equation.solve()?;
    debug!(
        arrangement = arranger.name(),
        groups = doc.groups.len(),
        a = equation.a,
        b = equation.b,
        c = equation.c,
        x,
        "font scale solved"
    );

    let macro_layout = arranger.arrange(doc, canvas, x, opts)?;

    let mut groups: Vec<GroupNode> = doc
        .groups
        .iter()
        .zip(&macro_layout.frames)
        .enumerate()
        .map(|(i, (group, frame))| layout_group(i, group, frame, x, opts))
        .collect();
    if let Some(cell) = macro_layout.virtual_cell {
        groups.push(GroupNode::virtual_cell(cell));
    }

    let mut result = LayoutResult {
        title: Some(Rect::new(0.0, 0.0, canvas.width, TITLE_SCALE * x)),
        font_scale: x,
        groups,
    };
    arranger.finish(&mut result, canvas);

    let collapsed = apply_padding(&mut result, opts.padding);
    if collapsed > 0 {
        debug!(collapsed, padding = opts.padding, "rectangles dropped by padding");
    }
    Ok(result)
}

fn layout_group(index: usize, group: &Group, frame: &Rect, x: f64, opts: &LayoutOptions) -> GroupNode {
    let column = layout_column(group, frame, x, opts);
    let items = column
        .items
        .iter()
        .enumerate()
        .map(|(j, item)| layout_item(index, j, item))
        .collect();

    GroupNode {
        subtitle: column.subtitle.valid(),
        coords: frame.valid(),
        items,
        is_virtual: false,
    }
}

fn layout_item(group: usize, index: usize, frame: &ItemFrame) -> ItemNode {
    let cell = frame.cell;
    if !cell.is_valid() {
        warn!(group = group + 1, item = index + 1, "item cell is degenerate");
        return ItemNode {
            highlight: frame.highlight.valid(),
            ..ItemNode::default()
        };
    }

    let placement = place_images(&cell, &frame.highlight, frame.areas.icon, frame.areas.vis);
    if placement.clamped {
        warn!(
            group = group + 1,
            item = index + 1,
            placement = ?placement.placement_type,
            "no image placement fits; clamped"
        );
    }

    let text = carve_text(&cell, &frame.highlight, &placement);
    if text.is_none() {
        warn!(group = group + 1, item = index + 1, "no room left for body text");
    }
    debug!(
        group = group + 1,
        item = index + 1,
        placement = ?placement.placement_type,
        "item laid out"
    );

    let Placement {
        placement_type,
        icon,
        vis,
        ..
    } = placement;
    ItemNode {
        coords: Some(cell),
        highlight: frame.highlight.valid(),
        icon,
        vis,
        text,
        placement_type,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
