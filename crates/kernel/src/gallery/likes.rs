//! Session-only likes.
//!
//! Liking an image adds its id to the set; the stored like count on the
//! image stays as it was. Likes are not persisted past the session.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::GalleryImage;

/// Ids the visitor has liked this session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LikedSet {
    ids: BTreeSet<u32>,
}

impl LikedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the like on `id`. Returns whether the image is now liked.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Stored count plus this session's like.
    pub fn display_likes(&self, image: &GalleryImage) -> u32 {
        image.likes + u32::from(self.contains(image.id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::content::ContentStore;

    #[test]
    fn toggle_flips_membership() {
        let mut liked = LikedSet::new();

        assert!(liked.toggle(3));
        assert!(liked.contains(3));
        assert!(!liked.toggle(3));
        assert!(liked.is_empty());
    }

    #[test]
    fn display_likes_overlays_stored_count() {
        let images = ContentStore::load().unwrap().gallery.initial;
        let first = &images[0];
        let mut liked = LikedSet::new();

        assert_eq!(liked.display_likes(first), 245);
        liked.toggle(first.id);
        assert_eq!(liked.display_likes(first), 246);
        assert_eq!(first.likes, 245);
    }

    #[test]
    fn serializes_as_id_list() {
        let mut liked = LikedSet::new();
        liked.toggle(7);
        liked.toggle(2);

        assert_eq!(serde_json::to_string(&liked).unwrap(), "[2,7]");
    }
}
