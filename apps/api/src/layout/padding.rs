//! Final inset pass over every emitted rectangle.

use crate::layout::result::LayoutResult;

/// Insets every rectangle by `padding` on all four sides. Rectangles that collapse
/// become `None`. Returns how many collapsed.
pub fn apply_padding(result: &mut LayoutResult, padding: f64) -> usize {
    let mut collapsed = 0;
    for slot in result.rects_mut() {
        if let Some(rect) = *slot {
            *slot = rect.inset(padding).valid();
            if slot.is_none() {
                collapsed += 1;
            }
        }
    }
    collapsed
}
