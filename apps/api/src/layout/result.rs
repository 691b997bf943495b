//! Layout result tree and its wire shape.
//!
//! ```json
//! {
//!   "Title": [[x1,y1],[x2,y1],[x1,y2],[x2,y2]],
//!   "VG1": {
//!     "Subtitle": [...],
//!     "coords": [...],
//!     "KG1": { "coords", "Highlight", "Icon", "Vis", "Text", "placement_type" }
//!   }
//! }
//! ```
//! Keys are 1-based and follow document order. Absent rectangles serialize as `null`.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::layout::geometry::Rect;
use crate::layout::placement::PlacementType;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub title: Option<Rect>,
    /// Solved font scale. Not part of the wire shape.
    pub font_scale: f64,
    pub groups: Vec<GroupNode>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupNode {
    pub subtitle: Option<Rect>,
    pub coords: Option<Rect>,
    pub items: Vec<ItemNode>,
    /// Structural placeholder with no content (the Star arrangement's centre).
    pub is_virtual: bool,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ItemNode {
    pub coords: Option<Rect>,
    #[serde(rename = "Highlight")]
    pub highlight: Option<Rect>,
    #[serde(rename = "Icon")]
    pub icon: Option<Rect>,
    #[serde(rename = "Vis")]
    pub vis: Option<Rect>,
    #[serde(rename = "Text")]
    pub text: Option<Rect>,
    pub placement_type: PlacementType,
}

impl GroupNode {
    pub fn virtual_cell(coords: Rect) -> Self {
        Self {
            coords: Some(coords),
            is_virtual: true,
            ..Self::default()
        }
    }

    /// Every rectangle slot in the group, including its items' slots.
    pub fn rects_mut(&mut self) -> impl Iterator<Item = &mut Option<Rect>> {
        let own = [&mut self.subtitle, &mut self.coords];
        own.into_iter().chain(self.items.iter_mut().flat_map(ItemNode::rects_mut))
    }
}

impl ItemNode {
    pub fn rects_mut(&mut self) -> impl Iterator<Item = &mut Option<Rect>> {
        [
            &mut self.coords,
            &mut self.highlight,
            &mut self.icon,
            &mut self.vis,
            &mut self.text,
        ]
        .into_iter()
    }
}

impl LayoutResult {
    /// Every rectangle slot in the result.
    pub fn rects_mut(&mut self) -> impl Iterator<Item = &mut Option<Rect>> {
        std::iter::once(&mut self.title).chain(self.groups.iter_mut().flat_map(GroupNode::rects_mut))
    }

    /// Every non-null rectangle in the result.
    pub fn rects(&self) -> Vec<Rect> {
        let mut out: Vec<Rect> = self.title.into_iter().collect();
        for group in &self.groups {
            out.extend(group.subtitle);
            out.extend(group.coords);
            for item in &group.items {
                out.extend(
                    [item.coords, item.highlight, item.icon, item.vis, item.text]
                        .into_iter()
                        .flatten(),
                );
            }
        }
        out
    }
}

impl Serialize for LayoutResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.groups.len()))?;
        map.serialize_entry("Title", &self.title)?;
        for (i, group) in self.groups.iter().enumerate() {
            map.serialize_entry(&format!("VG{}", i + 1), group)?;
        }
        map.end()
    }
}

impl Serialize for GroupNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = usize::from(self.is_virtual);
        let mut map = serializer.serialize_map(Some(2 + extra + self.items.len()))?;
        map.serialize_entry("Subtitle", &self.subtitle)?;
        map.serialize_entry("coords", &self.coords)?;
        if self.is_virtual {
            map.serialize_entry("is_virtual", &true)?;
        }
        for (j, item) in self.items.iter().enumerate() {
            map.serialize_entry(&format!("KG{}", j + 1), item)?;
        }
        map.end()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
