//! Positioned records produced by a placement pass.

use std::fmt;

use crate::geometry::Rect;

/// The closed set of element kinds a waterfall layout emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    /// A regular tile placed into the shortest column.
    Item,
    /// A full-width row inserted after every `banner_cadence` items.
    Banner,
}

impl ElementKind {
    /// All kinds, in the order query results report them.
    pub const ALL: [Self; 2] = [Self::Item, Self::Banner];
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item => f.write_str("item"),
            Self::Banner => f.write_str("banner"),
        }
    }
}

/// A laid out element.
///
/// Identity is `(kind, index)`. For banners `index` is the banner slot
/// counter, which advances independently of item indices. The frame is the
/// visible rectangle, already inset by the cell padding.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutAttribute {
    pub index: usize,
    pub kind: ElementKind,
    pub frame: Rect,
}

impl LayoutAttribute {
    pub const fn new(kind: ElementKind, index: usize, frame: Rect) -> Self {
        Self { index, kind, frame }
    }

    /// Shorthand for an [`ElementKind::Item`] attribute.
    pub const fn item(index: usize, frame: Rect) -> Self {
        Self::new(ElementKind::Item, index, frame)
    }

    /// Shorthand for an [`ElementKind::Banner`] attribute.
    pub const fn banner(index: usize, frame: Rect) -> Self {
        Self::new(ElementKind::Banner, index, frame)
    }
}
