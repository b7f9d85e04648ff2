//! Invalidation-aware owner of a waterfall layout.
//!
//! ## Usage
//!
//! Keep one [`WaterfallLayout`] per scroll view. Feed it configuration and
//! viewport changes, call [`WaterfallLayout::prepare`] whenever
//! [`WaterfallLayout::is_invalidated`] reports stale output (or the item data
//! changed), and answer visible-rect queries from the published snapshot in
//! between.
//!
//! ```
//! use pinboard::{
//!     config::{Viewport, WaterfallConfig},
//!     geometry::{Rect, Size},
//!     layout::WaterfallLayout,
//!     provider::FixedHeights,
//! };
//!
//! let mut layout = WaterfallLayout::new(
//!     WaterfallConfig::default().banner_cadence(10),
//!     Viewport::new(Size::new(375.0, 812.0)),
//! );
//! layout.prepare(100, &FixedHeights::default()).unwrap();
//!
//! let visible = layout.elements_in(Rect::new(0.0, 0.0, 375.0, 812.0));
//! assert!(!visible.is_empty());
//! assert!(!layout.is_invalidated());
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::{
    attribute::{ElementKind, LayoutAttribute},
    config::{Viewport, WaterfallConfig},
    error::LayoutError,
    geometry::{Rect, Size},
    placement::{LayoutSnapshot, place},
    provider::HeightProvider,
};

/// Configuration, viewport and the most recently published layout.
///
/// Only [`WaterfallLayout::prepare`] writes the snapshot. Readers that need
/// the result beyond a borrow can hold the `Arc` from
/// [`WaterfallLayout::snapshot`]; a later pass publishes a new snapshot
/// instead of mutating the shared one.
#[derive(Debug, Clone)]
pub struct WaterfallLayout {
    config: WaterfallConfig,
    viewport: Viewport,
    snapshot: Arc<LayoutSnapshot>,
    invalidated: bool,
}

impl WaterfallLayout {
    /// Creates a layout that has not been prepared yet.
    pub fn new(config: WaterfallConfig, viewport: Viewport) -> Self {
        Self {
            config,
            viewport,
            snapshot: Arc::new(LayoutSnapshot::default()),
            invalidated: true,
        }
    }

    pub fn config(&self) -> &WaterfallConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// `true` when the published snapshot no longer matches the
    /// configuration or viewport.
    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    /// Marks the published snapshot as stale, e.g. after the item data
    /// changed.
    pub fn invalidate(&mut self) {
        if !self.invalidated {
            debug!("Waterfall layout invalidated");
        }
        self.invalidated = true;
    }

    pub fn set_column_count(&mut self, column_count: usize) {
        if self.config.column_count != column_count {
            self.config.column_count = column_count;
            self.invalidate();
        }
    }

    pub fn set_padding(&mut self, padding: f32) {
        if self.config.padding != padding {
            self.config.padding = padding;
            self.invalidate();
        }
    }

    pub fn set_banner_cadence(&mut self, banner_cadence: i64) {
        if self.config.banner_cadence != banner_cadence {
            self.config.banner_cadence = banner_cadence;
            self.invalidate();
        }
    }

    /// Replaces the whole configuration, invalidating only on change.
    pub fn set_config(&mut self, config: WaterfallConfig) {
        if self.config != config {
            self.config = config;
            self.invalidate();
        }
    }

    /// Whether moving the scroll view to `new_bounds` requires a new pass.
    ///
    /// Only a change of size matters; scrolling moves the bounds origin and
    /// never invalidates.
    pub fn should_invalidate_for_bounds_change(&self, new_bounds: Rect) -> bool {
        new_bounds.size() != self.viewport.bounds
    }

    /// Replaces the viewport, invalidating when its size or insets changed.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.invalidate();
        }
    }

    /// Width of the visible cell in each column for the current viewport.
    pub fn cell_width(&self) -> f32 {
        self.config.cell_width(self.viewport.content_width())
    }

    /// Runs a placement pass and publishes its result.
    ///
    /// On error nothing is published: the previous snapshot stays readable
    /// and the layout stays invalidated.
    pub fn prepare<P>(&mut self, item_count: usize, provider: &P) -> Result<(), LayoutError>
    where
        P: HeightProvider + ?Sized,
    {
        let snapshot = place(&self.config, &self.viewport, item_count, provider)?;
        debug!(
            attributes = snapshot.store().total_len(),
            "Publishing waterfall layout"
        );
        self.snapshot = Arc::new(snapshot);
        self.invalidated = false;
        Ok(())
    }

    /// The last published snapshot.
    pub fn snapshot(&self) -> Arc<LayoutSnapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn content_size(&self) -> Size {
        self.snapshot.content_size()
    }

    pub fn attribute(
        &self,
        kind: ElementKind,
        index: usize,
    ) -> Result<&LayoutAttribute, LayoutError> {
        self.snapshot.attribute(kind, index)
    }

    pub fn item(&self, index: usize) -> Result<&LayoutAttribute, LayoutError> {
        self.snapshot.item(index)
    }

    pub fn banner(&self, banner_index: usize) -> Result<&LayoutAttribute, LayoutError> {
        self.snapshot.banner(banner_index)
    }

    /// Every element whose frame intersects `rect`.
    pub fn elements_in(&self, rect: Rect) -> Vec<LayoutAttribute> {
        self.snapshot.elements_in(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ConfigIssue, geometry::EdgeInsets, provider::FixedHeights};

    fn phone() -> Viewport {
        Viewport::new(Size::new(375.0, 812.0))
    }

    #[test]
    fn test_new_layout_starts_invalidated_and_empty() {
        let layout = WaterfallLayout::new(WaterfallConfig::default(), phone());
        assert!(layout.is_invalidated());
        assert!(layout.snapshot().store().is_empty());
        assert_eq!(layout.content_size(), Size::ZERO);
    }

    #[test]
    fn test_prepare_publishes_and_clears_invalidation() {
        let mut layout = WaterfallLayout::new(WaterfallConfig::default(), phone());
        layout.prepare(20, &FixedHeights::default()).unwrap();
        assert!(!layout.is_invalidated());
        assert_eq!(layout.snapshot().store().len(ElementKind::Item), 20);
        assert!(layout.item(19).is_ok());
        assert_eq!(
            layout.item(20),
            Err(LayoutError::NotFound {
                kind: ElementKind::Item,
                index: 20
            })
        );
    }

    #[test]
    fn test_setters_invalidate_only_on_change() {
        let mut layout = WaterfallLayout::new(WaterfallConfig::default(), phone());
        layout.prepare(4, &FixedHeights::default()).unwrap();

        layout.set_column_count(2);
        layout.set_padding(6.0);
        layout.set_banner_cadence(0);
        layout.set_viewport(phone());
        assert!(!layout.is_invalidated());

        layout.set_padding(8.0);
        assert!(layout.is_invalidated());
        layout.prepare(4, &FixedHeights::default()).unwrap();

        layout.set_column_count(3);
        assert!(layout.is_invalidated());
    }

    #[test]
    fn test_viewport_inset_change_invalidates() {
        let mut layout = WaterfallLayout::new(WaterfallConfig::default(), phone());
        layout.prepare(1, &FixedHeights::default()).unwrap();
        layout.set_viewport(phone().insets(EdgeInsets::new(115.0, 6.0, 0.0, 6.0)));
        assert!(layout.is_invalidated());
    }

    #[test]
    fn test_bounds_change_only_invalidates_on_resize() {
        let layout = WaterfallLayout::new(WaterfallConfig::default(), phone());
        assert!(!layout.should_invalidate_for_bounds_change(Rect::new(0.0, 900.0, 375.0, 812.0)));
        assert!(layout.should_invalidate_for_bounds_change(Rect::new(0.0, 0.0, 812.0, 375.0)));
    }

    #[test]
    fn test_failed_pass_keeps_previous_snapshot() {
        let mut layout = WaterfallLayout::new(WaterfallConfig::default(), phone());
        layout.prepare(10, &FixedHeights::default()).unwrap();
        let published = layout.snapshot();

        layout.set_column_count(0);
        let result = layout.prepare(50, &FixedHeights::default());
        assert_eq!(
            result,
            Err(LayoutError::InvalidConfiguration(ConfigIssue::NoColumns))
        );
        assert!(layout.is_invalidated());
        assert!(Arc::ptr_eq(&published, &layout.snapshot()));
        assert_eq!(layout.snapshot().store().len(ElementKind::Item), 10);
    }

    #[test]
    fn test_held_snapshot_survives_new_pass() {
        let mut layout = WaterfallLayout::new(WaterfallConfig::default(), phone());
        layout.prepare(3, &FixedHeights::default()).unwrap();
        let old = layout.snapshot();

        layout.invalidate();
        layout.prepare(30, &FixedHeights::default()).unwrap();
        assert_eq!(old.store().len(ElementKind::Item), 3);
        assert_eq!(layout.snapshot().store().len(ElementKind::Item), 30);
    }

    #[test]
    fn test_cell_width_follows_insets() {
        let layout = WaterfallLayout::new(
            WaterfallConfig::default(),
            phone().insets(EdgeInsets::new(115.0, 6.0, 0.0, 6.0)),
        );
        assert_eq!(layout.cell_width(), 363.0 / 2.0 - 12.0);
    }

    #[test]
    fn test_banner_lookup() {
        let mut layout =
            WaterfallLayout::new(WaterfallConfig::default().banner_cadence(10), phone());
        layout.prepare(25, &FixedHeights::default()).unwrap();
        assert!(layout.banner(1).is_ok());
        assert!(layout.banner(2).is_err());
        assert_eq!(
            layout.attribute(ElementKind::Banner, 0).map(|b| b.frame.width),
            Ok(375.0 - 12.0)
        );
    }
}
