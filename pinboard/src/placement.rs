//! The waterfall placement engine.
//!
//! A pass walks the items in order and drops each one into the currently
//! shortest column. After every `banner_cadence` items a full-width banner is
//! inserted below the tallest column, and every column is re-leveled to the
//! banner's bottom edge so later items never slide under it on one side.
//!
//! ## Usage
//!
//! ```
//! use pinboard::{
//!     config::{Viewport, WaterfallConfig},
//!     geometry::{Rect, Size},
//!     placement::place,
//!     provider::HeightFns,
//! };
//!
//! let heights = [100.0, 50.0, 80.0];
//! let snapshot = place(
//!     &WaterfallConfig::default(),
//!     &Viewport::new(Size::new(300.0, 100.0)),
//!     heights.len(),
//!     &HeightFns::items(|i: usize| heights[i]),
//! )
//! .unwrap();
//!
//! assert_eq!(snapshot.content_size(), Size::new(300.0, 154.0));
//! assert_eq!(
//!     snapshot.item(2).unwrap().frame,
//!     Rect::new(156.0, 68.0, 138.0, 80.0)
//! );
//! ```

use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::{
    attribute::{ElementKind, LayoutAttribute},
    config::{Viewport, WaterfallConfig},
    error::LayoutError,
    geometry::{Rect, Size},
    provider::HeightProvider,
    store::AttributeStore,
};

/// Per-column bookkeeping for a single pass.
#[derive(Debug, Clone)]
pub(crate) struct ColumnState {
    x_offsets: SmallVec<[f32; 4]>,
    y_offsets: SmallVec<[f32; 4]>,
}

impl ColumnState {
    pub(crate) fn new(column_count: usize, total_width: f32) -> Self {
        let count = column_count as f32;
        Self {
            x_offsets: (0..column_count)
                .map(|column| column as f32 * total_width / count)
                .collect(),
            y_offsets: SmallVec::from_elem(0.0, column_count),
        }
    }

    /// The column with the lowest bottom edge; ties go to the lowest index.
    pub(crate) fn shortest(&self) -> usize {
        let mut index = 0;
        let mut best = self.y_offsets.first().copied().unwrap_or(0.0);
        for (i, offset) in self.y_offsets.iter().enumerate().skip(1) {
            if *offset < best {
                best = *offset;
                index = i;
            }
        }
        index
    }

    pub(crate) fn tallest(&self) -> f32 {
        self.y_offsets.iter().copied().fold(0.0, f32::max)
    }

    pub(crate) fn x(&self, column: usize) -> f32 {
        self.x_offsets[column]
    }

    pub(crate) fn y(&self, column: usize) -> f32 {
        self.y_offsets[column]
    }

    pub(crate) fn advance(&mut self, column: usize, bottom: f32) {
        self.y_offsets[column] = bottom;
    }

    /// Moves every column's bottom edge to `bottom`.
    pub(crate) fn level(&mut self, bottom: f32) {
        self.y_offsets.iter_mut().for_each(|offset| *offset = bottom);
    }

    pub(crate) fn bottoms(&self) -> &[f32] {
        &self.y_offsets
    }
}

/// The published result of a placement pass.
///
/// Immutable once built; a new pass produces a new snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutSnapshot {
    store: AttributeStore,
    content_size: Size,
    column_bottoms: Vec<f32>,
}

impl LayoutSnapshot {
    pub fn store(&self) -> &AttributeStore {
        &self.store
    }

    /// Size of the union of every emitted slot and the initial content
    /// rectangle.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Bottom edge of every column at the end of the pass, padding included.
    pub fn column_bottoms(&self) -> &[f32] {
        &self.column_bottoms
    }

    pub fn attribute(
        &self,
        kind: ElementKind,
        index: usize,
    ) -> Result<&LayoutAttribute, LayoutError> {
        self.store.get(kind, index)
    }

    pub fn item(&self, index: usize) -> Result<&LayoutAttribute, LayoutError> {
        self.store.get(ElementKind::Item, index)
    }

    pub fn banner(&self, banner_index: usize) -> Result<&LayoutAttribute, LayoutError> {
        self.store.get(ElementKind::Banner, banner_index)
    }

    /// Every attribute whose frame intersects `rect`.
    pub fn elements_in(&self, rect: Rect) -> Vec<LayoutAttribute> {
        crate::query::elements_in(&self.store, rect)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LayoutSnapshot {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let attributes: Vec<&LayoutAttribute> = self.store.iter().collect();
        let mut state = serializer.serialize_struct("LayoutSnapshot", 2)?;
        state.serialize_field("content_size", &self.content_size)?;
        state.serialize_field("attributes", &attributes)?;
        state.end()
    }
}

/// Runs one placement pass over `item_count` items.
///
/// The viewport's content width is split into `config.column_count` equal
/// slots. Each item occupies a slot of height `2 * padding + item_height`;
/// the emitted frame is that slot inset by `padding` on every side.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidConfiguration`] before doing any work when
/// the configuration or viewport is unusable.
#[tracing::instrument(level = "debug", skip(provider))]
pub fn place<P>(
    config: &WaterfallConfig,
    viewport: &Viewport,
    item_count: usize,
    provider: &P,
) -> Result<LayoutSnapshot, LayoutError>
where
    P: HeightProvider + ?Sized,
{
    if let Err(err) = config.validate().and_then(|()| viewport.validate()) {
        warn!("Rejecting placement pass: {err}");
        return Err(err);
    }

    let content_rect = viewport.content_rect();
    let total_width = content_rect.width;
    let column_width = total_width / config.column_count as f32;
    let padding = config.padding;
    let banner_period = config.banner_period();

    let mut columns = ColumnState::new(config.column_count, total_width);
    let mut bounds = content_rect;
    let mut store = AttributeStore::new();
    let mut banner_index = 0;

    for item_index in 0..item_count {
        let height = sanitize_height(
            provider.item_height(item_index),
            ElementKind::Item,
            item_index,
        );
        let column = columns.shortest();
        let top = columns.y(column);
        let slot = Rect::new(
            columns.x(column),
            top,
            column_width,
            slot_extent(top, padding, height),
        );
        store.append(
            ElementKind::Item,
            LayoutAttribute::item(item_index, slot.inset(padding, padding)),
        );
        columns.advance(column, slot.max_y());
        bounds = bounds.union(&slot);

        if let Some(period) = banner_period
            && (item_index as u64 + 1) % period == 0
        {
            let height = sanitize_height(
                provider.banner_height(banner_index),
                ElementKind::Banner,
                banner_index,
            );
            let top = columns.tallest();
            let slot = Rect::new(0.0, top, total_width, slot_extent(top, padding, height));
            trace!(banner_index, after_item = item_index, y = slot.y, "Inserting banner");
            store.append(
                ElementKind::Banner,
                LayoutAttribute::banner(banner_index, slot.inset(padding, padding)),
            );
            bounds = bounds.union(&slot);
            columns.level(slot.max_y());
            banner_index += 1;
        }
    }

    let content_size = bounds.size();
    debug!(
        items = item_count,
        banners = banner_index,
        width = content_size.width,
        height = content_size.height,
        "Placement pass finished"
    );

    Ok(LayoutSnapshot {
        store,
        content_size,
        column_bottoms: columns.bottoms().to_vec(),
    })
}

fn sanitize_height(height: f32, kind: ElementKind, index: usize) -> f32 {
    if height.is_finite() && height >= 0.0 {
        height
    } else {
        trace!(%kind, index, height, "Clamping unusable height to zero");
        0.0
    }
}

// Outer slot height, shortened so the slot's bottom edge stays finite.
fn slot_extent(top: f32, padding: f32, height: f32) -> f32 {
    (2.0 * padding + height).min(f32::MAX - top)
}
