//! Visible-rectangle queries over an [`AttributeStore`].
//!
//! Each kind's sequence is sorted by top edge, and the store records the
//! running maximum of bottom edges ("reach") next to it. Both are monotone, so
//! the elements whose vertical extent can overlap a query rectangle form one
//! contiguous window of the sequence:
//!
//! - everything before the window has `reach <= rect.min_y()` and ends at or
//!   above the rectangle,
//! - everything after it has `min_y >= rect.max_y()` and starts at or below
//!   it.
//!
//! A binary search finds any one element of the window (the pivot), the window
//! is expanded backward and forward from there, and only elements whose
//! frames actually intersect the rectangle are returned. Cost is
//! `O(log n + w)` where `w` is the window size, which for viewport-sized
//! queries is close to the number of matches.

use std::ops::Range;

use crate::{
    attribute::{ElementKind, LayoutAttribute},
    geometry::Rect,
    store::{AttributeStore, KindTrack},
};

/// Every attribute in `store` whose frame intersects `rect`.
///
/// Items come first, then banners, each in ascending index order.
pub fn elements_in(store: &AttributeStore, rect: Rect) -> Vec<LayoutAttribute> {
    let mut result = Vec::new();
    if rect.is_empty() {
        return result;
    }
    for kind in ElementKind::ALL {
        let track = store.track(kind);
        let window = candidate_window(track, &rect);
        result.extend(
            track.attributes[window]
                .iter()
                .filter(|attribute| attribute.frame.intersects(&rect))
                .copied(),
        );
    }
    result
}

/// The pivot search: any index inside the candidate window, or `None` when
/// the window is empty.
fn find_pivot(track: &KindTrack, rect: &Rect) -> Option<usize> {
    let mut start = 0;
    let mut end = track.len();
    while start < end {
        let mid = start + (end - start) / 2;
        if track.reach[mid] <= rect.min_y() {
            start = mid + 1;
        } else if track.attributes[mid].frame.min_y() >= rect.max_y() {
            end = mid;
        } else {
            return Some(mid);
        }
    }
    None
}

fn candidate_window(track: &KindTrack, rect: &Rect) -> Range<usize> {
    let Some(pivot) = find_pivot(track, rect) else {
        return 0..0;
    };

    let mut first = pivot;
    while first > 0 && track.reach[first - 1] > rect.min_y() {
        first -= 1;
    }

    let mut last = pivot + 1;
    while last < track.len() && track.attributes[last].frame.min_y() < rect.max_y() {
        last += 1;
    }

    first..last
}
