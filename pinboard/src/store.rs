//! Per-kind ordered storage of laid out attributes.
//!
//! The placement engine appends attributes of each kind in non-decreasing
//! order of their top edge. The store relies on that order and does not
//! re-check it; the spatial query in [`crate::query`] depends on it.
//!
//! Alongside each attribute the store records the *reach* of its prefix: the
//! largest bottom edge among that attribute and everything appended before
//! it. Reach is non-decreasing by construction, which lets queries bound the
//! backward walk even when a tall element sits far behind shorter ones.

use crate::{
    attribute::{ElementKind, LayoutAttribute},
    error::LayoutError,
};

/// Attributes of a single kind, in emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct KindTrack {
    pub(crate) attributes: Vec<LayoutAttribute>,
    pub(crate) reach: Vec<f32>,
}

impl KindTrack {
    fn push(&mut self, attribute: LayoutAttribute) {
        let bottom = attribute.frame.max_y();
        let reach = match self.reach.last() {
            Some(previous) => previous.max(bottom),
            None => bottom,
        };
        self.attributes.push(attribute);
        self.reach.push(reach);
    }

    fn clear(&mut self) {
        self.attributes.clear();
        self.reach.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.attributes.len()
    }
}

/// The result of a placement pass, one ordered sequence per kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeStore {
    items: KindTrack,
    banners: KindTrack,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every attribute of every kind.
    pub fn clear(&mut self) {
        self.items.clear();
        self.banners.clear();
    }

    /// Appends an attribute to the sequence of `kind`.
    ///
    /// Callers must append in non-decreasing order of `frame.min_y()` per
    /// kind. The attribute's own `kind` field is overwritten with `kind`.
    pub fn append(&mut self, kind: ElementKind, mut attribute: LayoutAttribute) {
        attribute.kind = kind;
        self.track_mut(kind).push(attribute);
    }

    /// Looks up the attribute at position `index` of the `kind` sequence.
    pub fn get(&self, kind: ElementKind, index: usize) -> Result<&LayoutAttribute, LayoutError> {
        self.track(kind)
            .attributes
            .get(index)
            .ok_or(LayoutError::NotFound { kind, index })
    }

    /// All attributes of `kind`, in emission order.
    pub fn all(&self, kind: ElementKind) -> &[LayoutAttribute] {
        &self.track(kind).attributes
    }

    /// Every attribute, items first, then banners.
    pub fn iter(&self) -> impl Iterator<Item = &LayoutAttribute> {
        ElementKind::ALL
            .into_iter()
            .flat_map(move |kind| self.all(kind).iter())
    }

    pub fn len(&self, kind: ElementKind) -> usize {
        self.track(kind).len()
    }

    pub fn total_len(&self) -> usize {
        self.items.len() + self.banners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    pub(crate) fn track(&self, kind: ElementKind) -> &KindTrack {
        match kind {
            ElementKind::Item => &self.items,
            ElementKind::Banner => &self.banners,
        }
    }

    fn track_mut(&mut self, kind: ElementKind) -> &mut KindTrack {
        match kind {
            ElementKind::Item => &mut self.items,
            ElementKind::Banner => &mut self.banners,
        }
    }
}
