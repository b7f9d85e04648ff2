//! Layout configuration.
//!
//! ## Usage
//!
//! Describe the column grid, cell gutters and banner cadence once, then hand
//! the configuration to [`crate::placement::place`] or keep it inside a
//! [`crate::layout::WaterfallLayout`].

use derive_setters::Setters;

use crate::{
    error::{ConfigIssue, LayoutError},
    geometry::{EdgeInsets, Rect, Size},
};

/// Parameters of a waterfall placement pass.
///
/// ```
/// use pinboard::config::WaterfallConfig;
///
/// let config = WaterfallConfig::default().column_count(3).banner_cadence(10);
/// assert_eq!(config.column_count, 3);
/// assert_eq!(config.padding, 6.0);
/// assert!(config.banner_period().is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaterfallConfig {
    /// Number of columns. Must be between 1 and
    /// [`WaterfallConfig::MAX_COLUMNS`].
    pub column_count: usize,
    /// Gutter applied on every side of each cell and banner.
    pub padding: f32,
    /// Number of items between two banners. Zero or negative disables
    /// banners.
    pub banner_cadence: i64,
}

impl Default for WaterfallConfig {
    fn default() -> Self {
        Self {
            column_count: 2,
            padding: 6.0,
            banner_cadence: 0,
        }
    }
}

impl WaterfallConfig {
    /// Upper bound on `column_count`.
    pub const MAX_COLUMNS: usize = 1024;

    /// Rejects configurations a placement pass cannot run with.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.column_count == 0 {
            return Err(ConfigIssue::NoColumns.into());
        }
        if self.column_count > Self::MAX_COLUMNS {
            return Err(ConfigIssue::TooManyColumns(self.column_count).into());
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ConfigIssue::Padding(self.padding).into());
        }
        Ok(())
    }

    /// The banner period, or `None` when banners are disabled.
    pub fn banner_period(&self) -> Option<u64> {
        u64::try_from(self.banner_cadence)
            .ok()
            .filter(|period| *period > 0)
    }

    /// Width of the visible cell inside a column slot of a `content_width`
    /// wide layout. Never negative.
    pub fn cell_width(&self, content_width: f32) -> f32 {
        let columns = self.column_count.max(1) as f32;
        (content_width / columns - 2.0 * self.padding).max(0.0)
    }
}

/// The scroll view a layout is computed for.
///
/// `bounds` is the full size of the view, `insets` the content insets the
/// view applies around its scrollable content.
#[derive(Debug, Clone, Copy, PartialEq, Default, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub bounds: Size,
    pub insets: EdgeInsets,
}

impl Viewport {
    pub fn new(bounds: Size) -> Self {
        Self {
            bounds,
            insets: EdgeInsets::ZERO,
        }
    }

    /// The initial content rectangle: the bounds shrunk by the insets, with
    /// the origin at zero.
    pub fn content_rect(&self) -> Rect {
        let inset = Rect::from_size(self.bounds).inset_by(self.insets);
        Rect::from_size(inset.size())
    }

    /// The width columns are distributed over.
    pub fn content_width(&self) -> f32 {
        self.content_rect().width
    }

    /// Rejects a negative or non-finite view width and horizontal insets
    /// that are not finite. Insets wider than the view collapse the content
    /// width to zero instead.
    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        let width = self.bounds.width;
        if !width.is_finite() || width < 0.0 {
            return Err(ConfigIssue::Width(width).into());
        }
        // Checked before `inset_by` clamps, which would turn NaN into zero.
        let content = width - self.insets.left - self.insets.right;
        if !content.is_finite() {
            return Err(ConfigIssue::Width(content).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_two_columns() {
        let config = WaterfallConfig::default();
        assert_eq!(config.column_count, 2);
        assert_eq!(config.padding, 6.0);
        assert_eq!(config.banner_period(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_positive_cadence_disables_banners() {
        for cadence in [0, -1, i64::MIN] {
            let config = WaterfallConfig::default().banner_cadence(cadence);
            assert_eq!(config.banner_period(), None);
        }
        let config = WaterfallConfig::default().banner_cadence(10);
        assert_eq!(config.banner_period(), Some(10));
    }

    #[test]
    fn test_validate_rejects_zero_columns() {
        let config = WaterfallConfig::default().column_count(0);
        assert_eq!(
            config.validate(),
            Err(LayoutError::InvalidConfiguration(ConfigIssue::NoColumns))
        );
    }

    #[test]
    fn test_validate_caps_column_count() {
        let config = WaterfallConfig::default().column_count(WaterfallConfig::MAX_COLUMNS);
        assert!(config.validate().is_ok());
        let config = WaterfallConfig::default().column_count(usize::MAX);
        assert_eq!(
            config.validate(),
            Err(LayoutError::InvalidConfiguration(
                ConfigIssue::TooManyColumns(usize::MAX)
            ))
        );
    }

    #[test]
    fn test_validate_rejects_bad_padding() {
        let config = WaterfallConfig::default().padding(-1.0);
        assert_eq!(
            config.validate(),
            Err(LayoutError::InvalidConfiguration(ConfigIssue::Padding(-1.0)))
        );
        let config = WaterfallConfig::default().padding(f32::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cell_width() {
        let config = WaterfallConfig::default();
        assert_eq!(config.cell_width(300.0), 138.0);
        assert_eq!(config.cell_width(10.0), 0.0);
    }

    #[test]
    fn test_viewport_content_rect() {
        let viewport = Viewport::new(Size::new(375.0, 812.0))
            .insets(EdgeInsets::new(115.0, 6.0, 0.0, 6.0));
        assert_eq!(viewport.content_rect(), Rect::new(0.0, 0.0, 363.0, 697.0));
        assert_eq!(viewport.content_width(), 363.0);
    }

    #[test]
    fn test_viewport_validate_checks_raw_width() {
        let nan_inset = Viewport::new(Size::new(375.0, 812.0))
            .insets(EdgeInsets::new(0.0, f32::NAN, 0.0, 0.0));
        assert!(matches!(
            nan_inset.validate(),
            Err(LayoutError::InvalidConfiguration(ConfigIssue::Width(w))) if w.is_nan()
        ));
        assert_eq!(
            Viewport::new(Size::new(-1.0, 10.0)).validate(),
            Err(LayoutError::InvalidConfiguration(ConfigIssue::Width(-1.0)))
        );

        // Oversized insets still collapse to an empty content width.
        let squeezed = Viewport::new(Size::new(10.0, 10.0))
            .insets(EdgeInsets::new(0.0, 8.0, 0.0, 8.0));
        assert!(squeezed.validate().is_ok());
        assert_eq!(squeezed.content_width(), 0.0);
    }
}
