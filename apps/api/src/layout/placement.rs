//! Auxiliary image placement: puts an item's icon and/or visualization inside its cell.
//!
//! # Search
//! Each block has a fixed anchor corner and grows away from it. For every candidate
//! placement the block is sized at each canonical aspect ratio (area preserved) and scored
//! by its *overflow*: area outside the cell plus area over the Highlight, summed over the
//! blocks. The icon and visualization are not scored against each other during the search.
//!
//! The search is satisficing: the first zero-overflow candidate in search order wins.
//! - One image: placement `a` then `b`, ratios in list order.
//! - Two images: `comb1..comb4`, then icon ratio, then visualization ratio (225 trials each).
//!
//! # Fallback
//! When nothing fits, candidates are taken in increasing overflow (search order breaks ties)
//! and clamped: each block is shrunk about its anchor, aspect ratio preserved, until it stays
//! inside the cell and clear of the Highlight; a clamped visualization also keeps clear of
//! the already-clamped icon. The first
//! candidate whose blocks all survive clamping is used.

use serde::{Deserialize, Serialize};

use crate::layout::geometry::Rect;

/// Canonical width/height ratios tried for every block, in search order.
pub const ASPECT_RATIOS: [f64; 15] = [
    1.0, 1.333, 0.75, 1.5, 0.667, 1.777, 0.562, 0.5, 2.0, 1.4, 0.714, 0.8, 1.25, 0.6, 1.667,
];

/// Overflow at or below this counts as a clean fit.
const FIT_TOLERANCE: f64 = 1e-9;

// ────────────────────────────────────────────────────────────────────────────
// Public types
// ────────────────────────────────────────────────────────────────────────────

/// Which placement (or combination) produced the item's image blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementType {
    /// No auxiliary image.
    #[default]
    None,
    /// Single image at the top-right corner, growing left and down.
    A,
    /// Single image directly below the Highlight, growing right and down.
    B,
    /// Icon top-right, visualization immediately to its left.
    Comb1,
    /// Icon top-right, visualization below the Highlight.
    Comb2,
    /// Icon top-right, visualization stacked beneath the icon.
    Comb3,
    /// Icon below the Highlight, visualization in the bottom-right corner.
    Comb4,
}

/// Outcome of placing an item's auxiliary images.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Placement {
    pub placement_type: PlacementType,
    pub icon: Option<Rect>,
    pub vis: Option<Rect>,
    /// True when no candidate fitted and the blocks were shrunk to fit.
    pub clamped: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Anchors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Growth {
    LeftDown,
    RightDown,
    LeftUp,
}

/// Fixed corner of a block plus the direction it grows in.
#[derive(Debug, Clone, Copy)]
struct Anchor {
    x: f64,
    y: f64,
    growth: Growth,
}

impl Anchor {
    fn new(x: f64, y: f64, growth: Growth) -> Self {
        Self { x, y, growth }
    }

    fn grows_right(&self) -> bool {
        self.growth == Growth::RightDown
    }

    fn grows_down(&self) -> bool {
        self.growth != Growth::LeftUp
    }

    fn rect(&self, width: f64, height: f64) -> Rect {
        let (x1, x2) = if self.grows_right() {
            (self.x, self.x + width)
        } else {
            (self.x - width, self.x)
        };
        let (y1, y2) = if self.grows_down() {
            (self.y, self.y + height)
        } else {
            (self.y - height, self.y)
        };
        Rect::new(x1, y1, x2, y2)
    }

    /// Space between the anchor and the cell edges it grows towards.
    fn room(&self, cell: &Rect) -> (f64, f64) {
        let room_x = if self.grows_right() {
            cell.x2 - self.x
        } else {
            self.x - cell.x1
        };
        let room_y = if self.grows_down() {
            cell.y2 - self.y
        } else {
            self.y - cell.y1
        };
        (room_x, room_y)
    }

    /// Largest scale factor at which a `width × height` block stays clear of `obstacle`.
    fn max_scale_clear_of(&self, obstacle: &Rect, width: f64, height: f64) -> f64 {
        if !obstacle.is_valid() {
            return f64::INFINITY;
        }
        let tx = axis_threshold(self.x, width, obstacle.x1, obstacle.x2, self.grows_right());
        let ty = axis_threshold(self.y, height, obstacle.y1, obstacle.y2, self.grows_down());
        // The block overlaps only once it has crossed the obstacle on both axes.
        tx.max(ty)
    }

    /// Shrinks a `width × height` block about the anchor until it fits the cell and clears
    /// every obstacle. Aspect ratio is preserved.
    fn clamp(&self, width: f64, height: f64, cell: &Rect, obstacles: &[Rect]) -> Option<Rect> {
        let (room_x, room_y) = self.room(cell);
        let mut scale = (room_x / width).min(room_y / height).min(1.0);
        for obstacle in obstacles {
            scale = scale.min(self.max_scale_clear_of(obstacle, width, height));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return None;
        }
        self.rect(width * scale, height * scale).clip_to(cell).valid()
    }
}

/// Scale at which a block growing from `anchor` along one axis starts to overlap the
/// open interval `(lo, hi)`. Infinite if it never does, zero if it already does.
fn axis_threshold(anchor: f64, extent: f64, lo: f64, hi: f64, forward: bool) -> f64 {
    if forward {
        if anchor >= hi {
            f64::INFINITY
        } else if lo <= anchor {
            0.0
        } else {
            (lo - anchor) / extent
        }
    } else if anchor <= lo {
        f64::INFINITY
    } else if hi >= anchor {
        0.0
    } else {
        (anchor - hi) / extent
    }
}

/// Width and height of a block of `area` at width/height `ratio`.
fn block_size(area: f64, ratio: f64) -> (f64, f64) {
    ((area * ratio).sqrt(), (area / ratio).sqrt())
}

fn overflow(block: &Rect, cell: &Rect, obstacles: &[Rect]) -> f64 {
    block.area_outside(cell)
        + obstacles
            .iter()
            .map(|obstacle| block.intersection_area(obstacle))
            .sum::<f64>()
}

// ────────────────────────────────────────────────────────────────────────────
// Candidate placements
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    A,
    B,
}

impl Slot {
    const ALL: [Slot; 2] = [Slot::A, Slot::B];

    fn anchor(self, cell: &Rect, highlight: &Rect) -> Anchor {
        match self {
            Slot::A => Anchor::new(cell.x2, cell.y1, Growth::LeftDown),
            Slot::B => Anchor::new(cell.x1, highlight.y2, Growth::RightDown),
        }
    }

    fn placement_type(self) -> PlacementType {
        match self {
            Slot::A => PlacementType::A,
            Slot::B => PlacementType::B,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combination {
    Comb1,
    Comb2,
    Comb3,
    Comb4,
}

impl Combination {
    const ALL: [Combination; 4] = [
        Combination::Comb1,
        Combination::Comb2,
        Combination::Comb3,
        Combination::Comb4,
    ];

    fn icon_anchor(self, cell: &Rect, highlight: &Rect) -> Anchor {
        match self {
            Combination::Comb4 => Anchor::new(cell.x1, highlight.y2, Growth::RightDown),
            _ => Anchor::new(cell.x2, cell.y1, Growth::LeftDown),
        }
    }

    /// The visualization is positioned relative to the icon as actually placed.
    fn vis_anchor(self, cell: &Rect, highlight: &Rect, icon: &Rect) -> Anchor {
        match self {
            Combination::Comb1 => Anchor::new(icon.x1, cell.y1, Growth::LeftDown),
            Combination::Comb2 => Anchor::new(cell.x1, highlight.y2, Growth::RightDown),
            Combination::Comb3 => Anchor::new(cell.x2, icon.y2, Growth::LeftDown),
            Combination::Comb4 => Anchor::new(cell.x2, cell.y2, Growth::LeftUp),
        }
    }

    fn placement_type(self) -> PlacementType {
        match self {
            Combination::Comb1 => PlacementType::Comb1,
            Combination::Comb2 => PlacementType::Comb2,
            Combination::Comb3 => PlacementType::Comb3,
            Combination::Comb4 => PlacementType::Comb4,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct SingleTrial {
    slot: Slot,
    ratio: f64,
    overflow: f64,
}

#[derive(Debug, Clone, Copy)]
struct PairTrial {
    combination: Combination,
    icon_ratio: f64,
    vis_ratio: f64,
    overflow: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Places up to two image blocks inside `cell` around the item's `highlight`.
///
/// `icon_area` / `vis_area` are zero when the item has no icon / visualization.
pub fn place_images(cell: &Rect, highlight: &Rect, icon_area: f64, vis_area: f64) -> Placement {
    match (icon_area > 0.0, vis_area > 0.0) {
        (true, true) => place_pair(cell, highlight, icon_area, vis_area),
        (true, false) => {
            let (placement_type, icon, clamped) = place_single(cell, highlight, icon_area);
            Placement {
                placement_type,
                icon,
                vis: None,
                clamped,
            }
        }
        (false, true) => {
            let (placement_type, vis, clamped) = place_single(cell, highlight, vis_area);
            Placement {
                placement_type,
                icon: None,
                vis,
                clamped,
            }
        }
        (false, false) => Placement::default(),
    }
}

fn place_single(cell: &Rect, highlight: &Rect, area: f64) -> (PlacementType, Option<Rect>, bool) {
    let obstacles = [*highlight];
    let mut trials = Vec::with_capacity(Slot::ALL.len() * ASPECT_RATIOS.len());

    for slot in Slot::ALL {
        let anchor = slot.anchor(cell, highlight);
        for &ratio in &ASPECT_RATIOS {
            let (w, h) = block_size(area, ratio);
            let block = anchor.rect(w, h);
            let overflow = overflow(&block, cell, &obstacles);
            if overflow <= FIT_TOLERANCE {
                return (slot.placement_type(), block.valid(), false);
            }
            trials.push(SingleTrial {
                slot,
                ratio,
                overflow,
            });
        }
    }

    trials.sort_by(|l, r| l.overflow.total_cmp(&r.overflow));
    let Some(best) = trials.first().copied() else {
        return (PlacementType::None, None, false);
    };
    for trial in &trials {
        let (w, h) = block_size(area, trial.ratio);
        let anchor = trial.slot.anchor(cell, highlight);
        if let Some(block) = anchor.clamp(w, h, cell, &obstacles) {
            return (trial.slot.placement_type(), Some(block), true);
        }
    }
    (best.slot.placement_type(), None, true)
}

fn place_pair(cell: &Rect, highlight: &Rect, icon_area: f64, vis_area: f64) -> Placement {
    let trial_count = Combination::ALL.len() * ASPECT_RATIOS.len() * ASPECT_RATIOS.len();
    let mut trials = Vec::with_capacity(trial_count);

    for combination in Combination::ALL {
        let icon_anchor = combination.icon_anchor(cell, highlight);
        for &icon_ratio in &ASPECT_RATIOS {
            let (wa, ha) = block_size(icon_area, icon_ratio);
            let icon = icon_anchor.rect(wa, ha);
            let icon_overflow = overflow(&icon, cell, &[*highlight]);
            let vis_anchor = combination.vis_anchor(cell, highlight, &icon);
            for &vis_ratio in &ASPECT_RATIOS {
                let (wb, hb) = block_size(vis_area, vis_ratio);
                let vis = vis_anchor.rect(wb, hb);
                let overflow = icon_overflow + overflow(&vis, cell, &[*highlight]);
                if overflow <= FIT_TOLERANCE {
                    return Placement {
                        placement_type: combination.placement_type(),
                        icon: icon.valid(),
                        vis: vis.valid(),
                        clamped: false,
                    };
                }
                trials.push(PairTrial {
                    combination,
                    icon_ratio,
                    vis_ratio,
                    overflow,
                });
            }
        }
    }

    trials.sort_by(|l, r| l.overflow.total_cmp(&r.overflow));
    let mut first_attempt = None;
    for trial in &trials {
        let placement = clamp_pair(trial, cell, highlight, icon_area, vis_area);
        if placement.icon.is_some() && placement.vis.is_some() {
            return placement;
        }
        first_attempt.get_or_insert(placement);
    }
    first_attempt.unwrap_or_default()
}

fn clamp_pair(
    trial: &PairTrial,
    cell: &Rect,
    highlight: &Rect,
    icon_area: f64,
    vis_area: f64,
) -> Placement {
    let combination = trial.combination;
    let (wa, ha) = block_size(icon_area, trial.icon_ratio);
    let (wb, hb) = block_size(vis_area, trial.vis_ratio);

    let icon = combination
        .icon_anchor(cell, highlight)
        .clamp(wa, ha, cell, &[*highlight]);
    let vis = icon.and_then(|icon| {
        combination
            .vis_anchor(cell, highlight, &icon)
            .clamp(wb, hb, cell, &[*highlight, icon])
    });

    Placement {
        placement_type: combination.placement_type(),
        icon,
        vis,
        clamped: true,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
