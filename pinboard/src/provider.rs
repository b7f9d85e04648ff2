//! Height hints supplied by the measuring collaborator.
//!
//! The placement engine never measures content itself. It asks a
//! [`HeightProvider`] for the content height of each item and banner and
//! adds the cell padding on its own.

use crate::geometry::Size;

/// Supplies content heights for a placement pass.
///
/// Answers must be a pure function of the index for the duration of a pass.
/// Negative or non-finite answers are treated as zero.
pub trait HeightProvider {
    /// Content height of the item at `index`.
    fn item_height(&self, index: usize) -> f32;

    /// Content height of the banner in slot `banner_index`.
    fn banner_height(&self, banner_index: usize) -> f32 {
        let _ = banner_index;
        0.0
    }
}

impl<P: HeightProvider + ?Sized> HeightProvider for &P {
    fn item_height(&self, index: usize) -> f32 {
        (**self).item_height(index)
    }

    fn banner_height(&self, banner_index: usize) -> f32 {
        (**self).banner_height(banner_index)
    }
}

/// The same height for every item and every banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedHeights {
    pub item: f32,
    pub banner: f32,
}

impl Default for FixedHeights {
    fn default() -> Self {
        Self {
            item: 180.0,
            banner: 200.0,
        }
    }
}

impl HeightProvider for FixedHeights {
    fn item_height(&self, _index: usize) -> f32 {
        self.item
    }

    fn banner_height(&self, _banner_index: usize) -> f32 {
        self.banner
    }
}

/// Adapts a pair of closures into a [`HeightProvider`].
///
/// ```
/// use pinboard::provider::{HeightFns, HeightProvider};
///
/// let heights = [100.0, 50.0, 80.0];
/// let provider = HeightFns::new(|i: usize| heights[i], |_: usize| 300.0);
/// assert_eq!(provider.item_height(1), 50.0);
/// assert_eq!(provider.banner_height(7), 300.0);
/// ```
#[derive(Clone, Copy)]
pub struct HeightFns<I, B> {
    item: I,
    banner: B,
}

impl<I, B> HeightFns<I, B>
where
    I: Fn(usize) -> f32,
    B: Fn(usize) -> f32,
{
    pub fn new(item: I, banner: B) -> Self {
        Self { item, banner }
    }
}

impl<I> HeightFns<I, fn(usize) -> f32>
where
    I: Fn(usize) -> f32,
{
    /// Item heights only; banners get zero content height.
    pub fn items(item: I) -> Self {
        Self {
            item,
            banner: |_| 0.0,
        }
    }
}

impl<I, B> HeightProvider for HeightFns<I, B>
where
    I: Fn(usize) -> f32,
    B: Fn(usize) -> f32,
{
    fn item_height(&self, index: usize) -> f32 {
        (self.item)(index)
    }

    fn banner_height(&self, banner_index: usize) -> f32 {
        (self.banner)(banner_index)
    }
}

/// Heights for media tiles: a picture scaled to the cell width plus a caption
/// block of known height.
///
/// Caption heights come from the collaborator's text measurement; this type
/// only does the aspect-ratio arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectFitHeights {
    cell_width: f32,
    media: Vec<Size>,
    captions: Vec<f32>,
    caption_spacing: f32,
    banner: f32,
}

impl AspectFitHeights {
    /// `cell_width` is usually [`crate::config::WaterfallConfig::cell_width`]
    /// for the current viewport.
    pub fn new(cell_width: f32, media: Vec<Size>, captions: Vec<f32>) -> Self {
        Self {
            cell_width,
            media,
            captions,
            caption_spacing: 0.0,
            banner: 0.0,
        }
    }

    /// Vertical gap between the picture and its caption.
    pub fn with_caption_spacing(mut self, spacing: f32) -> Self {
        self.caption_spacing = spacing;
        self
    }

    /// Content height reported for every banner.
    pub fn with_banner_height(mut self, height: f32) -> Self {
        self.banner = height;
        self
    }

    fn scaled_media_height(&self, index: usize) -> f32 {
        match self.media.get(index) {
            Some(size) if size.width > 0.0 => size.height * self.cell_width / size.width,
            _ => 0.0,
        }
    }
}

impl HeightProvider for AspectFitHeights {
    fn item_height(&self, index: usize) -> f32 {
        let caption = self.captions.get(index).copied().unwrap_or(0.0);
        self.scaled_media_height(index) + self.caption_spacing + caption
    }

    fn banner_height(&self, _banner_index: usize) -> f32 {
        self.banner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_heights_defaults() {
        let provider = FixedHeights::default();
        assert_eq!(provider.item_height(42), 180.0);
        assert_eq!(provider.banner_height(3), 200.0);
    }

    #[test]
    fn test_items_only_provider_has_zero_banners() {
        let provider = HeightFns::items(|i: usize| i as f32);
        assert_eq!(provider.item_height(5), 5.0);
        assert_eq!(provider.banner_height(0), 0.0);
    }

    #[test]
    fn test_aspect_fit_scales_to_cell_width() {
        let provider = AspectFitHeights::new(
            150.0,
            vec![Size::new(300.0, 200.0), Size::new(100.0, 300.0)],
            vec![20.0, 40.0],
        )
        .with_caption_spacing(5.0);
        assert_eq!(provider.item_height(0), 100.0 + 5.0 + 20.0);
        assert_eq!(provider.item_height(1), 450.0 + 5.0 + 40.0);
    }

    #[test]
    fn test_aspect_fit_zero_width_media_keeps_caption() {
        let provider = AspectFitHeights::new(150.0, vec![Size::new(0.0, 200.0)], vec![30.0]);
        assert_eq!(provider.item_height(0), 30.0);
        assert_eq!(provider.item_height(9), 0.0);
    }

    #[test]
    fn test_reference_forwards() {
        let provider = FixedHeights::default();
        let by_ref = &provider;
        assert_eq!(HeightProvider::item_height(&by_ref, 0), 180.0);
    }
}
