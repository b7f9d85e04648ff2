//! pinboard positions variable-height tiles into a multi-column waterfall
//! ("masonry") arrangement, interleaves full-width banner rows at a fixed
//! cadence, and answers "what is visible in this rectangle" without scanning
//! every element.
//!
//! # Overview
//!
//! - [`placement::place`] runs one placement pass and returns a
//!   [`LayoutSnapshot`]: an [`AttributeStore`] with one frame per item and
//!   banner, plus the overall content size.
//! - [`query::elements_in`] (also [`LayoutSnapshot::elements_in`]) finds the
//!   elements intersecting a rectangle in `O(log n + k)`.
//! - [`WaterfallLayout`] keeps configuration and viewport, tracks when the
//!   published snapshot went stale, and re-runs placement on demand.
//!
//! The crate never measures content. Heights come from a [`HeightProvider`]
//! that the UI layer implements (image aspect ratios, text measurement, ...).
//!
//! # Example
//!
//! ```
//! use pinboard::{
//!     ElementKind, HeightFns, Rect, Size, Viewport, WaterfallConfig, WaterfallLayout,
//! };
//!
//! let heights = [100.0, 50.0, 80.0, 120.0];
//! let mut layout = WaterfallLayout::new(
//!     WaterfallConfig::default().column_count(2).padding(6.0).banner_cadence(2),
//!     Viewport::new(Size::new(300.0, 200.0)),
//! );
//! layout
//!     .prepare(heights.len(), &HeightFns::new(|i: usize| heights[i], |_: usize| 60.0))
//!     .unwrap();
//!
//! let visible = layout.elements_in(Rect::new(0.0, 0.0, 300.0, 200.0));
//! assert!(visible.iter().any(|a| a.kind == ElementKind::Banner));
//! ```

pub mod attribute;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod placement;
pub mod provider;
pub mod query;
pub mod store;

pub use attribute::{ElementKind, LayoutAttribute};
pub use config::{Viewport, WaterfallConfig};
pub use error::{ConfigIssue, LayoutError};
pub use geometry::{EdgeInsets, Rect, Size};
pub use layout::WaterfallLayout;
pub use placement::{LayoutSnapshot, place};
pub use provider::{AspectFitHeights, FixedHeights, HeightFns, HeightProvider};
pub use store::AttributeStore;
