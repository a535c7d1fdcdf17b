//! Hit testing: point → slot lookup.
//!
//! Scans slots in index order, so when items overlap the earliest-placed
//! one wins even though later slots paint on top of it.

use dd_core::{PlacedItem, Slots};

/// Whether `(px, py)` lies strictly inside the item's unrotated box.
/// An empty slot is never under the pointer.
pub fn is_under_pointer(item: Option<&PlacedItem>, px: f32, py: f32) -> bool {
    item.is_some_and(|item| item.bounds().contains(px, py))
}

/// Index of the first occupied slot whose item contains `(px, py)`.
pub fn hit_test(slots: &Slots, px: f32, py: f32) -> Option<usize> {
    slots.position(|item| is_under_pointer(Some(item), px, py))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dd_core::Sprite;

    #[test]
    fn empty_slot_is_never_hit() {
        assert!(!is_under_pointer(None, 0.0, 0.0));
    }

    #[test]
    fn lowest_slot_wins_on_overlap() {
        let mut slots = Slots::new();
        slots.insert(PlacedItem::new(Sprite::Rug, 100.0, 100.0, 200.0, 200.0));
        slots.insert(PlacedItem::new(Sprite::Chair, 100.0, 100.0, 20.0, 20.0));
        assert_eq!(hit_test(&slots, 100.0, 100.0), Some(0));

        slots.remove(0);
        assert_eq!(hit_test(&slots, 100.0, 100.0), Some(1));
        assert_eq!(hit_test(&slots, 150.0, 150.0), None);
    }

    #[test]
    fn edge_is_a_miss() {
        let mut slots = Slots::new();
        slots.insert(PlacedItem::new(Sprite::Desk, 50.0, 50.0, 20.0, 10.0));
        assert_eq!(hit_test(&slots, 60.0, 50.0), None);
        assert_eq!(hit_test(&slots, 50.0, 45.0), None);
        assert_eq!(hit_test(&slots, 59.0, 54.0), Some(0));
    }
}
