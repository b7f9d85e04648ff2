//! Floating point geometry used by the placement and query engines.
//!
//! # Key Types
//!
//! - [`Rect`] - An axis-aligned rectangle given by its top-left corner and
//!   dimensions
//! - [`Size`] - A 2D size (width, height)
//! - [`EdgeInsets`] - Per-edge distances used to shrink a rectangle
//!
//! # Coordinate System
//!
//! The coordinate system uses:
//! - Origin (0, 0) at the top-left corner of the scrollable content
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! # Example
//!
//! ```
//! use pinboard::geometry::{Rect, Size};
//!
//! let slot = Rect::new(0.0, 0.0, 150.0, 112.0);
//! let cell = slot.inset(6.0, 6.0);
//! assert_eq!(cell, Rect::new(6.0, 6.0, 138.0, 100.0));
//!
//! let bounds = Rect::from_size(Size::new(300.0, 50.0)).union(&slot);
//! assert_eq!(bounds.size(), Size::new(300.0, 112.0));
//! ```

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width
    pub width: f32,
    /// The height
    pub height: f32,
}

impl Size {
    /// A constant representing zero size (0×0).
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new size from width and height.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Distances by which each edge of a rectangle is moved inward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    /// No insets on any edge.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same inset on all four edges.
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

/// An axis-aligned rectangle.
///
/// Width and height are expected to be non-negative; operations that could
/// produce a negative extent (such as [`Rect::inset`]) clamp it to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The x-coordinate of the top-left corner
    pub x: f32,
    /// The y-coordinate of the top-left corner
    pub y: f32,
    /// The width of the rectangle
    pub width: f32,
    /// The height of the rectangle
    pub height: f32,
}

impl Rect {
    /// A constant representing a zero rectangle (0×0 at position (0, 0)).
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle from position and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle of the given size anchored at the origin.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns `true` if the rectangle has no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Checks whether this rectangle overlaps another with positive area.
    ///
    /// Rectangles that only share an edge do not intersect, and an empty
    /// rectangle intersects nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinboard::geometry::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    /// assert!(a.intersects(&Rect::new(50.0, 50.0, 100.0, 100.0)));
    /// assert!(!a.intersects(&Rect::new(100.0, 0.0, 100.0, 100.0)));
    /// ```
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }

    /// Checks whether the vertical extents of two rectangles overlap with
    /// positive length, ignoring the horizontal axis.
    pub fn overlaps_vertically(&self, other: &Self) -> bool {
        self.y < other.max_y() && other.y < self.max_y()
    }

    /// The smallest rectangle containing both rectangles.
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let width = self.max_x().max(other.max_x()) - x;
        let height = self.max_y().max(other.max_y()) - y;

        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrinks the rectangle by `dx` on the left and right and `dy` on the top
    /// and bottom. An extent that would become negative collapses to zero at
    /// the center of the original rectangle.
    pub fn inset(&self, dx: f32, dy: f32) -> Self {
        let (x, width) = inset_axis(self.x, self.width, dx);
        let (y, height) = inset_axis(self.y, self.height, dy);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrinks the rectangle by a per-edge amount.
    pub fn inset_by(&self, insets: EdgeInsets) -> Self {
        let width = (self.width - insets.left - insets.right).max(0.0);
        let height = (self.height - insets.top - insets.bottom).max(0.0);
        Self::new(self.x + insets.left, self.y + insets.top, width, height)
    }
}

// The start edge moves by exactly `delta` whenever the extent allows it, so
// slots sharing a top edge keep sharing it after insetting.
fn inset_axis(start: f32, extent: f32, delta: f32) -> (f32, f32) {
    if extent >= 2.0 * delta {
        (start + delta, extent - 2.0 * delta)
    } else {
        (start + extent / 2.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.min_x(), 10.0);
        assert_eq!(rect.max_x(), 40.0);
        assert_eq!(rect.min_y(), 20.0);
        assert_eq!(rect.max_y(), 60.0);
        assert_eq!(rect.size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_rect_union() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 150.0, 100.0, 10.0);
        assert_eq!(a.union(&b), Rect::new(0.0, 0.0, 150.0, 160.0));
        assert_eq!(b.union(&a), a.union(&b));
    }

    #[test]
    fn test_rect_intersects_is_strict() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(a.intersects(&Rect::new(99.0, 99.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 100.0, 100.0, 10.0)));
        assert!(!a.intersects(&Rect::new(-10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(10.0, 10.0, 0.0, 10.0)));
    }

    #[test]
    fn test_rect_contains_other_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_rect_inset() {
        let slot = Rect::new(150.0, 62.0, 150.0, 92.0);
        assert_eq!(slot.inset(6.0, 6.0), Rect::new(156.0, 68.0, 138.0, 80.0));
    }

    #[test]
    fn test_rect_inset_collapses_to_zero() {
        let slot = Rect::new(0.0, 0.0, 10.0, 4.0);
        let inset = slot.inset(6.0, 6.0);
        assert_eq!(inset.width, 0.0);
        assert_eq!(inset.height, 0.0);
        assert_eq!(inset.x, 5.0);
        assert_eq!(inset.y, 2.0);
    }

    #[test]
    fn test_rect_inset_by_edges() {
        let bounds = Rect::new(0.0, 0.0, 375.0, 812.0);
        let content = bounds.inset_by(EdgeInsets::new(115.0, 6.0, 0.0, 6.0));
        assert_eq!(content, Rect::new(6.0, 115.0, 363.0, 697.0));
    }

    #[test]
    fn test_overlaps_vertically_ignores_x() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(500.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps_vertically(&b));
        assert!(!a.intersects(&b));
    }
}
