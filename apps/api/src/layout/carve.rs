//! Text carving: picks the largest free rectangle in an item cell for the body text.
//!
//! Every placement type has a short menu of candidate rectangles built from the cell,
//! Highlight and image edges; which menu applies depends on how the blocks ended up ordered.
//! Candidates are clipped to the cell, anything degenerate or overlapping a placed block
//! is dropped, and the largest survivor wins.
//!
//! When a menu yields nothing (or a clamped placement lost a block) a generic search over
//! every combination of cell and block edges takes over.

use crate::layout::geometry::Rect;
use crate::layout::placement::{Placement, PlacementType};

/// Named coordinate a candidate edge is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    CellX1,
    CellY1,
    CellX2,
    CellY2,
    HlX2,
    HlY2,
    /// First image block: the icon, or the only image for `a` / `b`.
    AX1,
    AY1,
    AX2,
    AY2,
    /// Second image block: the visualization in a combination.
    BX1,
    BY1,
    BX2,
    BY2,
}

use Edge::*;

/// `[x1, y1, x2, y2]`
type Candidate = [Edge; 4];

/// Cell, Highlight and image blocks of one item, as placed.
struct Blocks {
    cell: Rect,
    hl: Rect,
    a: Rect,
    b: Rect,
}

impl Blocks {
    fn edge(&self, edge: Edge) -> f64 {
        match edge {
            CellX1 => self.cell.x1,
            CellY1 => self.cell.y1,
            CellX2 => self.cell.x2,
            CellY2 => self.cell.y2,
            HlX2 => self.hl.x2,
            HlY2 => self.hl.y2,
            AX1 => self.a.x1,
            AY1 => self.a.y1,
            AX2 => self.a.x2,
            AY2 => self.a.y2,
            BX1 => self.b.x1,
            BY1 => self.b.y1,
            BX2 => self.b.x2,
            BY2 => self.b.y2,
        }
    }

    fn resolve(&self, candidate: &Candidate) -> Rect {
        let [x1, y1, x2, y2] = candidate.map(|edge| self.edge(edge));
        Rect::new(x1, y1, x2, y2)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Candidate menus
// ────────────────────────────────────────────────────────────────────────────

const BELOW_HIGHLIGHT: &[Candidate] = &[[CellX1, HlY2, CellX2, CellY2]];

fn single_a_menu(blocks: &Blocks) -> &'static [Candidate] {
    if blocks.hl.y2 < blocks.a.y2 {
        &[
            [CellX1, AY2, CellX2, CellY2],
            [CellX1, HlY2, AX1, CellY2],
            [HlX2, CellY1, AX1, CellY2],
        ]
    } else {
        &[
            [CellX1, HlY2, CellX2, CellY2],
            [HlX2, AY2, CellX2, CellY2],
            [HlX2, CellY1, AX1, CellY2],
        ]
    }
}

fn single_b_menu(blocks: &Blocks) -> &'static [Candidate] {
    if blocks.hl.x2 < blocks.a.x2 {
        &[
            [HlX2, CellY1, CellX2, HlY2],
            [AX2, CellY1, CellX2, CellY2],
            [CellX1, AY2, CellX2, CellY2],
        ]
    } else {
        &[
            [HlX2, CellY1, CellX2, CellY2],
            [AX2, HlY2, CellX2, CellY2],
            [CellX1, AY2, CellX2, CellY2],
        ]
    }
}

/// Icon top-right with the visualization to its left: cases on the order of bottom edges.
fn comb1_menu(blocks: &Blocks) -> &'static [Candidate] {
    let (h, a, b) = (blocks.hl.y2, blocks.a.y2, blocks.b.y2);
    if h <= a && a <= b {
        &[
            [CellX1, HlY2, AX1, CellY2],
            [HlX2, CellY1, AX1, CellY2],
            [CellX1, AY2, BX1, CellY2],
            [CellX1, BY2, CellX2, CellY2],
        ]
    } else if h <= b && b <= a {
        &[
            [CellX1, HlY2, AX1, CellY2],
            [HlX2, CellY1, AX1, CellY2],
            [CellX1, AY2, CellX2, CellY2],
            [AX2, BY2, CellX2, CellY2],
        ]
    } else if a <= h && h <= b {
        &[
            [CellX1, HlY2, BX1, CellY2],
            [CellX1, BY2, CellX2, CellY2],
            [HlX2, CellY1, AX1, CellY2],
            [HlX2, AY2, BX1, CellY2],
        ]
    } else if a <= b && b <= h {
        &[
            [CellX1, HlY2, CellX2, CellY2],
            [HlX2, CellY1, AX1, CellY2],
            [HlX2, AY2, BX1, CellY2],
            [HlX2, BY2, CellX2, CellY2],
        ]
    } else if b <= h && h <= a {
        &[
            [CellX1, HlY2, AX2, CellY2],
            [CellX1, AY2, CellX2, CellY2],
            [HlX2, CellY1, AX1, CellY2],
            [BX1, BY2, CellX2, CellY2],
        ]
    } else if b <= a && a <= h {
        &[
            [CellX1, HlY2, CellX2, CellY2],
            [HlX2, CellY1, AX1, CellY2],
            [HlX2, AY2, CellX2, CellY2],
            [BX1, BY2, CellX2, CellY2],
        ]
    } else {
        &[]
    }
}

/// Icon top-right with the visualization below the Highlight.
fn comb2_menu(blocks: &Blocks) -> &'static [Candidate] {
    let (hx, hy) = (blocks.hl.x2, blocks.hl.y2);
    let (ay, bx, by) = (blocks.a.y2, blocks.b.x2, blocks.b.y2);
    if hx > bx {
        if ay <= hy {
            &[
                [CellX1, BY2, CellX2, CellY2],
                [BX2, HlY2, CellX2, CellY2],
                [HlX2, CellY1, AX1, CellY2],
                [HlX2, AY2, CellX2, CellY2],
            ]
        } else if ay <= by {
            &[
                [CellX1, BY2, CellX2, CellY2],
                [BX2, HlY2, AX1, CellY2],
                [BX2, AY2, CellX2, CellY2],
                [HlX2, CellY1, AX1, CellY2],
            ]
        } else {
            &[
                [CellX1, BY2, AX1, CellY2],
                [CellX1, AY2, CellX2, CellY2],
                [BX2, HlY2, AX1, CellY2],
                [HlX2, CellY1, AX1, CellY2],
            ]
        }
    } else if ay <= hy {
        &[
            [CellX1, BY2, CellX2, CellY2],
            [HlX2, CellY1, AX1, BY1],
            [BX2, CellY1, AX1, CellY2],
            [BX2, AY2, CellX2, CellY2],
        ]
    } else if ay <= by {
        &[
            [CellX1, BY2, CellX2, CellY2],
            [HlX2, CellY1, AX1, BY1],
            [BX2, CellY1, AX1, CellY2],
            [BX2, AY2, CellX2, CellY2],
        ]
    } else {
        &[
            [CellX1, AY2, CellX2, CellY2],
            [CellX1, BY2, AX1, CellY2],
            [HlX2, CellY1, AX1, BY1],
            [BX2, CellY1, AX1, CellY2],
        ]
    }
}

/// Icon top-right with the visualization stacked beneath it.
fn comb3_menu(blocks: &Blocks) -> &'static [Candidate] {
    let (hx, hy) = (blocks.hl.x2, blocks.hl.y2);
    let (ax, ay) = (blocks.a.x1, blocks.a.y2);
    let (bx, by) = (blocks.b.x1, blocks.b.y2);
    if hy > ay {
        match (by < hy, ax > bx) {
            (true, true) => &[
                [CellX1, HlY2, CellX2, CellY2],
                [HlX2, CellY1, AX1, AY2],
                [HlX2, CellY1, BX1, CellY2],
                [HlX2, BY2, CellX2, CellY2],
            ],
            (false, true) => &[
                [CellX1, HlY2, CellX2, CellY2],
                [HlX2, CellY1, AX1, AY2],
                [HlX2, CellY1, BX1, CellY2],
                [CellX1, BY2, CellX2, CellY2],
            ],
            (true, false) => &[
                [CellX1, HlY2, CellX2, CellY2],
                [HlX2, CellY1, AX1, CellY2],
                [HlX2, AY2, BX1, CellY2],
                [HlX2, BY2, CellX2, CellY2],
            ],
            (false, false) => &[
                [CellX1, HlY2, BX1, CellY2],
                [CellX1, BY2, CellX2, CellY2],
                [HlX2, CellY1, AX1, CellY2],
                [HlX2, AY2, BX1, CellY2],
            ],
        }
    } else if bx >= ax {
        &[
            [CellX1, HlY2, AX1, CellY2],
            [CellX1, AY2, BX1, CellY2],
            [CellX1, BY2, CellX2, CellY2],
            [HlX2, CellY1, AX2, CellY2],
        ]
    } else if bx <= hx {
        &[
            [CellX1, HlY2, AX1, AY2],
            [CellX1, HlY2, BX1, CellY2],
            [CellX1, BY2, CellX2, CellY2],
            [HlX2, CellY1, AX1, AY2],
        ]
    } else {
        &[
            [CellX1, HlY2, AX1, AY2],
            [CellX1, HlY2, BX1, CellY2],
            [CellX1, BY2, CellX2, CellY2],
            [HlX2, CellY1, AX1, AY2],
            [HlX2, CellY1, BX1, CellY2],
        ]
    }
}

/// Icon below the Highlight with the visualization in the bottom-right corner.
fn comb4_menu(blocks: &Blocks) -> &'static [Candidate] {
    let (hx, hy) = (blocks.hl.x2, blocks.hl.y2);
    let (a2x, a2y) = (blocks.a.x2, blocks.a.y2);
    let (b1x, b1y) = (blocks.b.x1, blocks.b.y1);
    if a2x < hx {
        if b1y <= hy {
            &[
                [CellX1, AY2, BX1, CellY2],
                [AX2, AY1, BX1, CellY2],
                [HlX2, CellY1, CellX2, BY1],
                [HlX2, CellY1, BX1, CellY2],
            ]
        } else if b1y <= a2y {
            if b1x > hx {
                &[
                    [CellX1, AY2, BX1, CellY2],
                    [AX2, AY1, BX1, CellY2],
                    [HlX2, CellY1, CellX2, BY1],
                    [HlX2, CellY1, BX1, CellY2],
                    [AX2, AY1, CellX2, BY1],
                ]
            } else {
                &[
                    [CellX1, AY2, BX1, CellY2],
                    [AX2, AY1, BX1, CellY2],
                    [AX2, AY1, CellX2, BY1],
                    [HlX2, CellY1, CellX2, BY1],
                ]
            }
        } else if b1x >= hx {
            &[
                [CellX1, AY2, BX1, CellY2],
                [AX2, AY1, BX1, CellY2],
                [HlX2, CellY1, CellX2, BY1],
                [HlX2, CellY1, BX1, CellY2],
                [AX2, AY1, CellX2, BY1],
                [CellX1, AY2, CellX2, BY1],
            ]
        } else if b1x >= a2x {
            &[
                [CellX1, AY2, BX1, CellY2],
                [AX2, AY1, BX1, CellY2],
                [HlX2, CellY1, CellX2, BY1],
                [AX2, AY1, CellX2, BY1],
                [CellX1, AY2, CellX2, BY1],
            ]
        } else {
            &[
                [CellX1, AY2, BX1, CellY2],
                [HlX2, CellY1, CellX2, BY1],
                [AX2, AY1, CellX2, BY1],
                [CellX1, AY2, CellX2, BY1],
            ]
        }
    } else if b1y <= hy {
        &[
            [CellX1, AY2, BX1, CellY2],
            [HlX2, CellY1, CellX2, BY1],
            [HlX2, CellY1, BX1, AY1],
            [AX2, CellY1, BX1, CellY2],
        ]
    } else if b1y <= a2y {
        &[
            [CellX1, AY2, BX1, CellY2],
            [HlX2, CellY1, CellX2, AY2],
            [AX2, CellY1, BX1, CellY2],
            [AX2, CellY1, CellX2, BY1],
        ]
    } else if b1x > a2x {
        &[
            [CellX1, AY2, BX1, CellY2],
            [CellX1, AY2, CellX2, BY1],
            [HlX2, CellY1, CellX2, AY2],
            [AX2, CellY1, BX1, CellY2],
            [AX2, CellY1, CellX2, BY1],
        ]
    } else {
        &[
            [CellX1, AY2, BX1, CellY2],
            [CellX1, AY2, CellX2, BY1],
            [HlX2, CellY1, CellX2, AY2],
            [AX2, CellY1, CellX2, BY1],
        ]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Selection
// ────────────────────────────────────────────────────────────────────────────

/// Overlap below this fraction of the cell area is treated as touching.
const OVERLAP_TOLERANCE: f64 = 1e-9;

fn is_free(candidate: &Rect, obstacles: &[Rect], tolerance: f64) -> bool {
    obstacles
        .iter()
        .all(|obstacle| candidate.intersection_area(obstacle) <= tolerance)
}

fn largest_free(
    cell: &Rect,
    candidates: impl IntoIterator<Item = Rect>,
    obstacles: &[Rect],
) -> Option<Rect> {
    let tolerance = OVERLAP_TOLERANCE * cell.area().max(1.0);
    let mut best: Option<Rect> = None;
    for candidate in candidates {
        let Some(rect) = candidate.clip_to(cell).valid() else {
            continue;
        };
        if !is_free(&rect, obstacles, tolerance) {
            continue;
        }
        if best.map_or(true, |b| rect.area() > b.area()) {
            best = Some(rect);
        }
    }
    best
}

/// Every rectangle spanned by the cell edges and the far edges of the placed blocks.
fn edge_grid(cell: &Rect, obstacles: &[Rect]) -> Vec<Rect> {
    let xs1: Vec<f64> = std::iter::once(cell.x1).chain(obstacles.iter().map(|o| o.x2)).collect();
    let xs2: Vec<f64> = std::iter::once(cell.x2).chain(obstacles.iter().map(|o| o.x1)).collect();
    let ys1: Vec<f64> = std::iter::once(cell.y1).chain(obstacles.iter().map(|o| o.y2)).collect();
    let ys2: Vec<f64> = std::iter::once(cell.y2).chain(obstacles.iter().map(|o| o.y1)).collect();

    let mut grid = Vec::with_capacity(xs1.len() * xs2.len() * ys1.len() * ys2.len());
    for &x1 in &xs1 {
        for &x2 in &xs2 {
            for &y1 in &ys1 {
                for &y2 in &ys2 {
                    grid.push(Rect::new(x1, y1, x2, y2));
                }
            }
        }
    }
    grid
}

/// Largest text rectangle inside `cell` that avoids the Highlight and placed images.
///
/// `None` when the blocks leave no usable space.
pub fn carve_text(cell: &Rect, highlight: &Rect, placement: &Placement) -> Option<Rect> {
    let obstacles: Vec<Rect> = std::iter::once(*highlight)
        .chain(placement.icon)
        .chain(placement.vis)
        .filter(Rect::is_valid)
        .collect();

    let menu = menu_for(cell, highlight, placement);
    let carved = menu.and_then(|(blocks, candidates)| {
        largest_free(
            cell,
            candidates.iter().map(|candidate| blocks.resolve(candidate)),
            &obstacles,
        )
    });

    carved.or_else(|| largest_free(cell, edge_grid(cell, &obstacles), &obstacles))
}

/// The placement's candidate menu, or `None` when the blocks it expects are missing.
fn menu_for(
    cell: &Rect,
    highlight: &Rect,
    placement: &Placement,
) -> Option<(Blocks, &'static [Candidate])> {
    let make = |a: Rect, b: Rect| Blocks {
        cell: *cell,
        hl: *highlight,
        a,
        b,
    };
    match placement.placement_type {
        PlacementType::None => Some((make(*highlight, *highlight), BELOW_HIGHLIGHT)),
        PlacementType::A | PlacementType::B => {
            let image = placement.icon.or(placement.vis)?;
            let blocks = make(image, image);
            let menu = if placement.placement_type == PlacementType::A {
                single_a_menu(&blocks)
            } else {
                single_b_menu(&blocks)
            };
            Some((blocks, menu))
        }
        combination => {
            let blocks = make(placement.icon?, placement.vis?);
            let menu = match combination {
                PlacementType::Comb1 => comb1_menu(&blocks),
                PlacementType::Comb2 => comb2_menu(&blocks),
                PlacementType::Comb3 => comb3_menu(&blocks),
                _ => comb4_menu(&blocks),
            };
            Some((blocks, menu))
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::placement::place_images;

    fn placement(kind: PlacementType, icon: Option<Rect>, vis: Option<Rect>) -> Placement {
        Placement {
            placement_type: kind,
            icon,
            vis,
            clamped: false,
        }
    }

    fn assert_clear(text: &Rect, cell: &Rect, blocks: &[Option<Rect>]) {
        assert!(cell.contains(text), "{text:?} escapes {cell:?}");
        for block in blocks.iter().flatten() {
            assert!(
                text.intersection_area(block) < 1e-4,
                "{text:?} overlaps {block:?}"
            );
        }
    }

    #[test]
    fn test_no_images_takes_band_below_highlight() {
        let cell = Rect::new(0.0, 0.0, 100.0, 80.0);
        let highlight = Rect::new(0.0, 0.0, 40.0, 20.0);
        let text = carve_text(&cell, &highlight, &Placement::default()).unwrap();
        assert_eq!(text, Rect::new(0.0, 20.0, 100.0, 80.0));
    }

    #[test]
    fn test_placement_a_tall_image_picks_largest_candidate() {
        let cell = Rect::new(0.0, 0.0, 100.0, 100.0);
        let highlight = Rect::new(0.0, 0.0, 40.0, 20.0);
        let icon = Rect::new(60.0, 0.0, 100.0, 40.0);
        let p = placement(PlacementType::A, Some(icon), None);
        let text = carve_text(&cell, &highlight, &p).unwrap();
        // Full width under the icon (100 x 60) beats the strip left of it (60 x 80).
        assert_eq!(text, Rect::new(0.0, 40.0, 100.0, 100.0));
        assert_clear(&text, &cell, &[Some(highlight), Some(icon)]);
    }

    #[test]
    fn test_placement_a_short_image_uses_highlight_band() {
        let cell = Rect::new(0.0, 0.0, 100.0, 100.0);
        let highlight = Rect::new(0.0, 0.0, 40.0, 30.0);
        let icon = Rect::new(80.0, 0.0, 100.0, 20.0);
        let p = placement(PlacementType::A, Some(icon), None);
        let text = carve_text(&cell, &highlight, &p).unwrap();
        assert_eq!(text, Rect::new(0.0, 30.0, 100.0, 100.0));
    }

    #[test]
    fn test_placement_b_uses_vis_when_no_icon() {
        let cell = Rect::new(0.0, 0.0, 100.0, 100.0);
        let highlight = Rect::new(0.0, 0.0, 40.0, 20.0);
        let vis = Rect::new(0.0, 20.0, 50.0, 70.0);
        let p = placement(PlacementType::B, None, Some(vis));
        let text = carve_text(&cell, &highlight, &p).unwrap();
        // The full-height strip right of the chart beats the band beside the highlight.
        assert_eq!(text, Rect::new(50.0, 0.0, 100.0, 100.0));
        assert_clear(&text, &cell, &[Some(highlight), Some(vis)]);
    }

    #[test]
    fn test_comb1_result_avoids_all_blocks() {
        let cell = Rect::new(0.0, 0.0, 400.0, 200.0);
        let highlight = Rect::new(0.0, 0.0, 60.0, 20.0);
        let p = place_images(&cell, &highlight, 2500.0, 2500.0);
        assert_eq!(p.placement_type, PlacementType::Comb1);
        let text = carve_text(&cell, &highlight, &p).unwrap();
        assert_clear(&text, &cell, &[Some(highlight), p.icon, p.vis]);
        // Everything below the two 50-tall blocks is free.
        assert_eq!(text, Rect::new(0.0, 50.0, 400.0, 200.0));
    }

    /// Carves `cell` around hand-placed blocks and checks the winner is clear of them.
    fn carve_pair(kind: PlacementType, cell: Rect, highlight: Rect, icon: Rect, vis: Rect) -> Rect {
        let p = placement(kind, Some(icon), Some(vis));
        let text = carve_text(&cell, &highlight, &p).unwrap();
        assert_clear(&text, &cell, &[Some(highlight), Some(icon), Some(vis)]);
        text
    }

    #[test]
    fn test_comb1_chart_above_highlight_bottom() {
        let cell = Rect::new(0.0, 0.0, 100.0, 100.0);
        let text = carve_pair(
            PlacementType::Comb1,
            cell,
            Rect::new(0.0, 0.0, 40.0, 30.0),
            Rect::new(70.0, 0.0, 100.0, 50.0),
            Rect::new(45.0, 0.0, 70.0, 20.0),
        );
        // Only the band under the icon avoids every block.
        assert_eq!(text, Rect::new(0.0, 50.0, 100.0, 100.0));
    }

    #[test]
    fn test_comb2_short_icon_beside_narrow_chart() {
        let cell = Rect::new(0.0, 0.0, 100.0, 100.0);
        let text = carve_pair(
            PlacementType::Comb2,
            cell,
            Rect::new(0.0, 0.0, 60.0, 20.0),
            Rect::new(80.0, 0.0, 100.0, 15.0),
            Rect::new(0.0, 20.0, 50.0, 70.0),
        );
        assert_eq!(text, Rect::new(50.0, 20.0, 100.0, 100.0));
    }

    #[test]
    fn test_comb2_tall_icon_beside_narrow_chart() {
        let cell = Rect::new(0.0, 0.0, 100.0, 100.0);
        let text = carve_pair(
            PlacementType::Comb2,
            cell,
            Rect::new(0.0, 0.0, 60.0, 20.0),
            Rect::new(70.0, 0.0, 100.0, 70.0),
            Rect::new(0.0, 20.0, 40.0, 50.0),
        );
        assert_eq!(text, Rect::new(0.0, 50.0, 70.0, 100.0));
    }

    #[test]
    fn test_comb2_chart_wider_than_highlight() {
        let cell = Rect::new(0.0, 0.0, 100.0, 100.0);
        let text = carve_pair(
            PlacementType::Comb2,
            cell,
            Rect::new(0.0, 0.0, 30.0, 20.0),
            Rect::new(80.0, 0.0, 100.0, 30.0),
            Rect::new(0.0, 20.0, 60.0, 50.0),
        );
        assert_eq!(text, Rect::new(0.0, 50.0, 100.0, 100.0));
    }

    #[test]
    fn test_comb3_chart_narrower_than_icon() {
        let cell = Rect::new(0.0, 0.0, 100.0, 100.0);
        let text = carve_pair(
            PlacementType::Comb3,
            cell,
            Rect::new(0.0, 0.0, 40.0, 20.0),
            Rect::new(60.0, 0.0, 100.0, 40.0),
            Rect::new(70.0, 40.0, 100.0, 70.0),
        );
        assert_eq!(text, Rect::new(0.0, 20.0, 60.0, 100.0));
    }

    #[test]
    fn test_comb3_chart_wider_than_icon() {
        let cell = Rect::new(0.0, 0.0, 100.0, 100.0);
        let text = carve_pair(
            PlacementType::Comb3,
            cell,
            Rect::new(0.0, 0.0, 40.0, 20.0),
            Rect::new(70.0, 0.0, 100.0, 30.0),
            Rect::new(50.0, 30.0, 100.0, 80.0),
        );
        assert_eq!(text, Rect::new(0.0, 20.0, 50.0, 100.0));
    }

    #[test]
    fn test_comb3_highlight_taller_than_icon() {
        let cell = Rect::new(0.0, 0.0, 100.0, 100.0);
        let text = carve_pair(
            PlacementType::Comb3,
            cell,
            Rect::new(0.0, 0.0, 50.0, 40.0),
            Rect::new(80.0, 0.0, 100.0, 20.0),
            Rect::new(80.0, 20.0, 100.0, 60.0),
        );
        assert_eq!(text, Rect::new(0.0, 40.0, 80.0, 100.0));
    }

    #[test]
    fn test_comb4_narrow_icon_chart_clear_of_highlight() {
        let cell = Rect::new(0.0, 0.0, 100.0, 100.0);
        let text = carve_pair(
            PlacementType::Comb4,
            cell,
            Rect::new(0.0, 0.0, 50.0, 20.0),
            Rect::new(0.0, 20.0, 30.0, 40.0),
            Rect::new(60.0, 70.0, 100.0, 100.0),
        );
        assert_eq!(text, Rect::new(0.0, 40.0, 60.0, 100.0));
    }

    #[test]
    fn test_comb4_wide_icon_chart_right_of_it() {
        let cell = Rect::new(0.0, 0.0, 100.0, 100.0);
        let text = carve_pair(
            PlacementType::Comb4,
            cell,
            Rect::new(0.0, 0.0, 30.0, 20.0),
            Rect::new(0.0, 20.0, 50.0, 50.0),
            Rect::new(70.0, 60.0, 100.0, 100.0),
        );
        assert_eq!(text, Rect::new(0.0, 50.0, 70.0, 100.0));
    }

    #[test]
    fn test_lost_block_falls_back_to_edge_grid() {
        let cell = Rect::new(0.0, 0.0, 100.0, 100.0);
        let highlight = Rect::new(0.0, 0.0, 40.0, 20.0);
        let icon = Rect::new(70.0, 0.0, 100.0, 30.0);
        let p = placement(PlacementType::Comb3, Some(icon), None);
        let text = carve_text(&cell, &highlight, &p).unwrap();
        assert_clear(&text, &cell, &[Some(highlight), Some(icon)]);
        assert_eq!(text, Rect::new(0.0, 30.0, 100.0, 100.0));
    }

    #[test]
    fn test_full_highlight_leaves_nothing() {
        let cell = Rect::new(0.0, 0.0, 100.0, 20.0);
        let highlight = Rect::new(0.0, 0.0, 100.0, 20.0);
        assert!(carve_text(&cell, &highlight, &Placement::default()).is_none());
    }
}
