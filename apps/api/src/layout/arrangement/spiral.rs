//! Spiral: groups reordered by a fixed permutation and packed into rows, with a few
//! cells shrunk afterwards to open "notches" that break up the grid.
//!
//! All three tables are keyed on the group count (1 to 10). Frames come back in
//! document order; the permutation only decides which slot a group lands in.

use tracing::warn;

use crate::layout::arrangement::rows::{row_equation, tile_rows};
use crate::layout::arrangement::{check_table_count, MacroArranger, MacroLayout};
use crate::layout::error::LayoutError;
use crate::layout::font_scale::FontScaleEquation;
use crate::layout::options::{Canvas, LayoutOptions};
use crate::layout::result::LayoutResult;
use crate::models::{Document, Group};

/// Horizontal notch depth as a fraction of `min(W, H)`.
const NOTCH_X: f64 = 0.04;
/// Vertical notch depth as a fraction of `min(W, H)`.
const NOTCH_Y: f64 = 0.08;

// ────────────────────────────────────────────────────────────────────────────
// Tables
// ────────────────────────────────────────────────────────────────────────────

/// Slot `i` is filled by group `permutation(n)[i]`.
pub fn permutation(n: usize) -> Option<&'static [usize]> {
    let order: &'static [usize] = match n {
        1 => &[0],
        2 => &[0, 1],
        3 => &[0, 1, 2],
        4 => &[0, 1, 2, 3],
        5 => &[0, 1, 3, 2, 4],
        6 => &[0, 1, 3, 2, 4, 5],
        7 => &[0, 1, 3, 2, 4, 5, 6],
        8 => &[0, 1, 3, 2, 4, 6, 5, 7],
        9 => &[0, 1, 3, 2, 4, 6, 5, 7, 8],
        10 => &[0, 1, 3, 2, 4, 6, 5, 7, 8, 9],
        _ => return None,
    };
    Some(order)
}

/// `inverse[g]` is the slot group `g` was moved to.
pub fn inverse_permutation(order: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; order.len()];
    for (slot, &group) in order.iter().enumerate() {
        inverse[group] = slot;
    }
    inverse
}

/// Row composition as slot indices.
fn row_table(n: usize) -> &'static [&'static [usize]] {
    match n {
        1 => &[&[0]],
        2 => &[&[0], &[1]],
        3 => &[&[0, 1], &[2]],
        4 => &[&[0, 1], &[2], &[3]],
        5 => &[&[0, 1], &[2, 3], &[4]],
        6 => &[&[0, 1], &[2, 3], &[4], &[5]],
        7 => &[&[0, 1], &[2, 3], &[4], &[5, 6]],
        8 => &[&[0, 1], &[2, 3], &[4], &[5, 6], &[7]],
        9 => &[&[0, 1], &[2, 3], &[4], &[5, 6], &[7, 8]],
        10 => &[&[0, 1], &[2, 3], &[4], &[5, 6], &[7, 8, 9]],
        _ => &[],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pivot {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Notch {
    /// Group index in document order.
    group: usize,
    pivot: Pivot,
    vertical: bool,
}

const fn notch(group: usize, pivot: Pivot, vertical: bool) -> Notch {
    Notch {
        group,
        pivot,
        vertical,
    }
}

fn notch_table(n: usize) -> &'static [Notch] {
    const FOUR: &[Notch] = &[notch(2, Pivot::Left, true)];
    const FIVE: &[Notch] = &[notch(3, Pivot::Left, true)];
    const SIX_SEVEN: &[Notch] = &[notch(3, Pivot::Left, true), notch(4, Pivot::Right, false)];
    const EIGHT_UP: &[Notch] = &[
        notch(3, Pivot::Left, true),
        notch(4, Pivot::Right, false),
        notch(6, Pivot::Left, true),
    ];
    match n {
        4 => FOUR,
        5 => FIVE,
        6 | 7 => SIX_SEVEN,
        8..=10 => EIGHT_UP,
        _ => &[],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Policy
// ────────────────────────────────────────────────────────────────────────────

pub struct Spiral;

impl Spiral {
    fn slots(doc: &Document) -> Result<(Vec<&Group>, &'static [usize]), LayoutError> {
        let n = doc.groups.len();
        check_table_count("spiral", n)?;
        let order = permutation(n).ok_or(LayoutError::UnsupportedGroupCount {
            arrangement: "spiral",
            count: n,
        })?;
        Ok((order.iter().map(|&g| &doc.groups[g]).collect(), order))
    }
}

impl MacroArranger for Spiral {
    fn name(&self) -> &'static str {
        "spiral"
    }

    fn font_scale_equation(
        &self,
        doc: &Document,
        canvas: Canvas,
        opts: &LayoutOptions,
    ) -> Result<FontScaleEquation, LayoutError> {
        let (slotted, _) = Self::slots(doc)?;
        let rows = row_table(slotted.len()).len();
        Ok(row_equation(&slotted, rows, canvas, opts))
    }

    fn arrange(
        &self,
        doc: &Document,
        canvas: Canvas,
        x: f64,
        opts: &LayoutOptions,
    ) -> Result<MacroLayout, LayoutError> {
        let (slotted, order) = Self::slots(doc)?;
        let rows: Vec<Vec<usize>> = row_table(slotted.len())
            .iter()
            .map(|row| row.to_vec())
            .collect();
        let by_slot = tile_rows(&slotted, &rows, canvas, x, opts);

        let frames = inverse_permutation(order)
            .into_iter()
            .map(|slot| by_slot[slot])
            .collect();
        Ok(MacroLayout::new(frames))
    }

    /// Shrinks the notched groups about their pivot edge at mid height.
    fn finish(&self, result: &mut LayoutResult, canvas: Canvas) {
        let depth = canvas.min_side();
        for notch in notch_table(result.groups.len()) {
            let Some(group) = result.groups.get_mut(notch.group) else {
                continue;
            };
            let Some(coords) = group.coords else {
                continue;
            };

            let sx = 1.0 - NOTCH_X * depth / coords.width();
            let sy = if notch.vertical {
                1.0 - NOTCH_Y * depth / coords.height()
            } else {
                1.0
            };
            if !(sx > 0.0 && sy > 0.0) {
                warn!(group = notch.group + 1, sx, sy, "notch larger than group; skipped");
                continue;
            }

            let ref_x = match notch.pivot {
                Pivot::Left => coords.x1,
                Pivot::Right => coords.x2,
            };
            let ref_y = (coords.y1 + coords.y2) / 2.0;
            for slot in group.rects_mut() {
                *slot = slot.map(|rect| rect.scale_about(ref_x, ref_y, sx, sy));
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::geometry::Rect;
    use crate::layout::result::{GroupNode, ItemNode};
    use crate::models::Item;

    fn doc(n: usize) -> Document {
        Document {
            title: "Spiral".to_string(),
            groups: (0..n)
                .map(|i| Group {
                    subtitle: format!("Group {}", i + 1),
                    items: vec![Item {
                        content: "x".repeat(10 + 3 * i),
                        highlight: format!("{i}"),
                        ..Item::default()
                    }],
                })
                .collect(),
        }
    }

    #[test]
    fn test_permutation_then_inverse_is_identity() {
        for n in 1..=10 {
            let order = permutation(n).unwrap();
            let inverse = inverse_permutation(order);
            for g in 0..n {
                assert_eq!(order[inverse[g]], g, "n = {n}");
            }
        }
    }

    #[test]
    fn test_row_tables_cover_every_slot_once() {
        for n in 1..=10 {
            let mut seen: Vec<usize> = row_table(n).iter().flat_map(|r| r.iter().copied()).collect();
            seen.sort_unstable();
            assert_eq!(seen, (0..n).collect::<Vec<_>>(), "n = {n}");
        }
    }

    #[test]
    fn test_unsupported_counts() {
        let canvas = Canvas::new(1000.0, 1000.0);
        let opts = LayoutOptions::default();
        for n in [0, 11] {
            assert!(matches!(
                Spiral.font_scale_equation(&doc(n), canvas, &opts),
                Err(LayoutError::UnsupportedGroupCount { count, .. }) if count == n
            ));
        }
    }

    #[test]
    fn test_swapped_groups_land_in_swapped_slots() {
        // With five groups, groups 3 and 4 trade places: group 4 is first in row two.
        let d = doc(5);
        let canvas = Canvas::new(1000.0, 1000.0);
        let opts = LayoutOptions::default();
        let x = Spiral.font_scale_equation(&d, canvas, &opts).unwrap().solve().unwrap();
        let layout = Spiral.arrange(&d, canvas, x, &opts).unwrap();
        let frames = &layout.frames;
        assert_eq!(frames[3].x1, 0.0);
        assert!((frames[2].x2 - 1000.0).abs() < 1e-9);
        assert_eq!(frames[2].y1, frames[3].y1);
        assert!(frames[4].y1 > frames[2].y1);
    }

    #[test]
    fn test_notch_shrinks_group_about_left_edge() {
        let mut result = LayoutResult {
            title: None,
            font_scale: 1.0,
            groups: (0..4)
                .map(|i| GroupNode {
                    coords: Some(Rect::new(0.0, 100.0 * i as f64, 500.0, 100.0 * (i + 1) as f64)),
                    items: vec![ItemNode {
                        coords: Some(Rect::new(0.0, 100.0 * i as f64, 500.0, 100.0 * (i + 1) as f64)),
                        ..ItemNode::default()
                    }],
                    ..GroupNode::default()
                })
                .collect(),
        };
        Spiral.finish(&mut result, Canvas::new(500.0, 400.0));

        // Four groups: the third is notched. Depth = min(W, H) = 400.
        let notched = result.groups[2].coords.unwrap();
        assert_eq!(notched.x1, 0.0);
        assert!((notched.width() - (500.0 - 16.0)).abs() < 1e-9);
        assert!((notched.height() - (100.0 - 32.0)).abs() < 1e-9);
        assert!(((notched.y1 + notched.y2) / 2.0 - 250.0).abs() < 1e-9);
        assert_eq!(result.groups[2].items[0].coords, Some(notched));
        assert_eq!(result.groups[0].coords, Some(Rect::new(0.0, 0.0, 500.0, 100.0)));
    }

    #[test]
    fn test_oversized_notch_is_skipped() {
        let frame = Rect::new(0.0, 0.0, 500.0, 10.0);
        let mut result = LayoutResult {
            title: None,
            font_scale: 1.0,
            groups: vec![
                GroupNode {
                    coords: Some(frame),
                    ..GroupNode::default()
                };
                4
            ],
        };
        Spiral.finish(&mut result, Canvas::new(1000.0, 1000.0));
        assert_eq!(result.groups[2].coords, Some(frame));
    }
}
