//! Viewport intersection math
//!
//! Only the vertical axis matters for a single scrolling column. All values
//! are logical pixels in page coordinates (0 = top of the page).

/// Vertical extent of an element or viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Distance from the top of the page
    pub top: f32,
    /// Height of the extent
    pub height: f32,
}

impl Rect {
    /// Create a new extent
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Shrink by `inset` on both edges (negative grows); never below zero height
    #[must_use]
    pub fn inset(&self, inset: f32) -> Self {
        let height = (self.height - 2.0 * inset).max(0.0);
        let top = if height > 0.0 {
            self.top + inset
        } else {
            self.top + self.height / 2.0
        };
        Self { top, height }
    }

    /// Overlapping height with `other`
    pub fn overlap(&self, other: &Rect) -> f32 {
        (self.bottom().min(other.bottom()) - self.top.max(other.top)).max(0.0)
    }
}

/// Fraction of `element` inside `viewport` after shrinking the viewport by `margin`
///
/// Zero-height elements count as fully visible when their position lies
/// inside the shrunk viewport.
pub fn intersection_ratio(element: &Rect, viewport: &Rect, margin: f32) -> f32 {
    let root = viewport.inset(margin);
    if root.height <= 0.0 {
        return 0.0;
    }

    if element.height <= 0.0 {
        let inside = element.top >= root.top && element.top <= root.bottom();
        return if inside { 1.0 } else { 0.0 };
    }

    (element.overlap(&root) / element.height).clamp(0.0, 1.0)
}
