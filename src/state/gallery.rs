//! Gallery state: a read-only projection of the live photo query.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::net::types::PhotoRecord;

/// The most recent snapshot delivered by the live query, most-recent-first.
///
/// Invariant: `photos` always equals the last delivered snapshot exactly —
/// no client-side sorting, filtering, or caching beyond it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    /// Records in backend-delivered order.
    pub photos: Vec<PhotoRecord>,
}

impl GalleryState {
    /// Replace the projection wholesale with a delivered snapshot.
    pub fn apply_snapshot(&mut self, records: Vec<PhotoRecord>) {
        self.photos = records;
    }
}
