//! Fixed-capacity slot arena for placed items.
//!
//! Slots are never compacted: removing an item leaves a hole, and new items
//! fill the lowest-index hole. Slot order is also paint order and hit-test
//! priority (lowest index wins).

use crate::model::PlacedItem;

/// Maximum number of items on a canvas.
pub const CAPACITY: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct Slots {
    slots: [Option<PlacedItem>; CAPACITY],
}

impl Default for Slots {
    fn default() -> Self {
        Self::new()
    }
}

impl Slots {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn free_count(&self) -> usize {
        CAPACITY - self.occupied()
    }

    pub fn is_full(&self) -> bool {
        self.free_count() == 0
    }

    pub fn get(&self, index: usize) -> Option<&PlacedItem> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut PlacedItem> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Put `item` into the first empty slot and return its index.
    /// Returns `None` (dropping the item) when every slot is taken.
    pub fn insert(&mut self, item: PlacedItem) -> Option<usize> {
        let index = self.slots.iter().position(Option::is_none)?;
        self.slots[index] = Some(item);
        Some(index)
    }

    /// Empty the slot at `index`, returning its previous occupant.
    pub fn remove(&mut self, index: usize) -> Option<PlacedItem> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Index of the first occupied slot whose item matches `pred`.
    pub fn position(&self, mut pred: impl FnMut(&PlacedItem) -> bool) -> Option<usize> {
        self.iter().find(|&(_, item)| pred(item)).map(|(i, _)| i)
    }

    /// Occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &PlacedItem)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|item| (i, item)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut PlacedItem)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, s)| s.as_mut().map(|item| (i, item)))
    }

    /// Raw view including holes.
    pub fn as_slice(&self) -> &[Option<PlacedItem>] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sprite;
    use pretty_assertions::assert_eq;

    fn item(x: f32) -> PlacedItem {
        PlacedItem::new(Sprite::Plant, x, 0.0, 10.0, 10.0)
    }

    #[test]
    fn insert_fills_lowest_hole() {
        let mut slots = Slots::new();
        assert_eq!(slots.insert(item(0.0)), Some(0));
        assert_eq!(slots.insert(item(1.0)), Some(1));
        assert_eq!(slots.insert(item(2.0)), Some(2));

        slots.remove(1);
        assert_eq!(slots.insert(item(9.0)), Some(1));
        assert_eq!(slots.get(1).map(|i| i.center().0), Some(9.0));
    }

    #[test]
    fn insert_into_full_arena_is_rejected() {
        let mut slots = Slots::new();
        for i in 0..CAPACITY {
            assert_eq!(slots.insert(item(i as f32)), Some(i));
        }
        assert!(slots.is_full());

        let before = slots.clone();
        assert_eq!(slots.insert(item(99.0)), None);
        assert_eq!(slots, before);
    }

    #[test]
    fn remove_leaves_hole_without_shifting() {
        let mut slots = Slots::new();
        for i in 0..3 {
            slots.insert(item(i as f32));
        }
        assert!(slots.remove(0).is_some());
        assert!(slots.remove(0).is_none());

        assert_eq!(slots.occupied(), 2);
        assert_eq!(slots.free_count(), CAPACITY - 2);
        assert!(slots.as_slice()[0].is_none());
        assert_eq!(slots.get(2).map(|i| i.center().0), Some(2.0));
        assert_eq!(slots.as_slice().len(), CAPACITY);
    }

    #[test]
    fn position_skips_holes_and_prefers_low_index() {
        let mut slots = Slots::new();
        slots.insert(item(5.0));
        slots.insert(item(5.0));
        slots.remove(0);
        assert_eq!(slots.position(|i| i.center().0 == 5.0), Some(1));
        assert_eq!(slots.position(|i| i.center().0 == 6.0), None);
    }

    #[test]
    fn out_of_range_index_is_none() {
        let mut slots = Slots::new();
        assert!(slots.get(CAPACITY).is_none());
        assert!(slots.remove(CAPACITY + 3).is_none());
    }
}
