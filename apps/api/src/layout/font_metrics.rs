//! Static glyph-width table and the per-item area demand derived from it.
//!
//! Widths are width-to-height ratios: a glyph drawn at font height `h` is `ratio * h`
//! wide. This is a deliberate approximation with no font shaping; every layout policy
//! sizes text through the same table so the relative proportions stay consistent.
//! The table covers ASCII 0x20..=0x7E. Index = (char as usize) - 32.

use crate::models::Item;

/// Ratio used for every character the table does not single out.
pub const FALLBACK_RATIO: f64 = 0.7;

/// Height of a Highlight line relative to body text.
pub const HIGHLIGHT_SCALE: f64 = 2.0;

// ────────────────────────────────────────────────────────────────────────────
// Glyph table
// ────────────────────────────────────────────────────────────────────────────

/// Width ratio per printable ASCII character.
///
/// Slot layout:
/// ```text
/// [0]=sp  [1..15]=punctuation  [16..25]=0-9  [26..32]=:;<=>?@
/// [33..58]=A-Z  [59..64]=[\]^_`  [65..90]=a-z  [91..94]={|}~
/// ```
#[rustfmt::skip]
static GLYPH_RATIOS: [f64; 95] = [
    // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
    0.4,  0.7,  0.7,  0.7,  0.7,  0.7,  0.7,  0.7,  0.7,  0.7,  0.7,  0.7,  0.7,  0.7,  0.7,  0.7,
    // 0     1     2     3     4     5     6     7     8     9
    0.7,  0.7,  0.7,  0.7,  0.7,  0.7,  0.7,  0.7,  0.7,  0.7,
    // :     ;     <     =     >     ?     @
    0.7,  0.7,  0.7,  0.7,  0.7,  0.7,  0.7,
    // A       B     C     D       E     F     G     H       I     J     K       L     M
    0.8889, 0.5,  1.0,  0.8889, 0.5,  0.5,  1.0,  0.8889, 0.7,  0.5,  0.8889, 0.5,  1.1111,
    // N       O     P     Q     R       S     T       U       V       W       X       Y       Z
    0.8889, 1.0,  0.5,  1.0,  0.8889, 0.5,  0.8889, 0.8889, 0.8889, 1.1111, 0.8889, 0.8889, 0.8889,
    // [     \     ]     ^     _     `
    0.7,  0.7,  0.7,  0.7,  0.7,  0.7,
    // a     b     c     d     e     f     g     h     i     j     k     l     m
    0.7,  0.5,  1.0,  0.5,  1.0,  0.5,  0.7,  0.5,  0.7,  0.7,  0.5,  0.5,  0.7,
    // n     o     p     q     r     s     t     u     v     w     x     y     z
    0.7,  1.0,  0.7,  0.7,  0.7,  1.0,  0.5,  0.7,  0.7,  0.7,  0.7,  0.7,  0.7,
    // {     |     }     ~
    0.7,  0.7,  0.7,  0.7,
];

/// Width-to-height ratio of a single character.
pub fn char_ratio(c: char) -> f64 {
    let code = c as usize;
    if (32..=126).contains(&code) {
        GLYPH_RATIOS[code - 32]
    } else {
        FALLBACK_RATIO
    }
}

/// Estimated single-line width of `text` drawn at `font_height`.
pub fn text_width(text: &str, font_height: f64) -> f64 {
    text.chars().map(char_ratio).sum::<f64>() * font_height
}

// ────────────────────────────────────────────────────────────────────────────
// Item demand
// ────────────────────────────────────────────────────────────────────────────

/// Areas an item needs at a given font scale `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemAreas {
    pub text: f64,
    pub highlight: f64,
    pub icon: f64,
    pub vis: f64,
}

impl ItemAreas {
    pub fn total(&self) -> f64 {
        self.text + self.highlight + self.icon + self.vis
    }
}

/// Unit-scale measurements of an item, from which every area is a multiple of `x²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemDemand {
    /// Width of the body text at font height 1.
    pub text_units: f64,
    /// Width of the Highlight at font height 1.
    pub highlight_units: f64,
    pub has_icon: bool,
    pub has_vis: bool,
}

impl ItemDemand {
    pub fn of(item: &Item) -> Self {
        Self {
            text_units: text_width(&item.content, 1.0),
            highlight_units: text_width(&item.highlight, 1.0),
            has_icon: item.has_icon(),
            has_vis: item.has_visualization(),
        }
    }

    /// Coefficient `k` such that the item's total area is `k · x²`.
    ///
    /// Body text contributes `x · w(text, x)`, the Highlight `2x · w(highlight, 2x)` and each
    /// auxiliary image the same area as the body text.
    pub fn quadratic_coefficient(&self) -> f64 {
        let images = f64::from(u8::from(self.has_icon) + u8::from(self.has_vis));
        self.text_units * (1.0 + images) + HIGHLIGHT_SCALE * HIGHLIGHT_SCALE * self.highlight_units
    }

    pub fn areas(&self, x: f64) -> ItemAreas {
        let text = x * self.text_units * x;
        let highlight = HIGHLIGHT_SCALE * x * self.highlight_units * HIGHLIGHT_SCALE * x;
        ItemAreas {
            text,
            highlight,
            icon: if self.has_icon { text } else { 0.0 },
            vis: if self.has_vis { text } else { 0.0 },
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
