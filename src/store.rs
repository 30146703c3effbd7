use std::sync::Arc;

use crate::models::Item;

/// Read-only, process-lifetime item collection, seeded once at startup and
/// shared with handlers through an `Extension` layer.
#[derive(Clone)]
pub struct ItemStore {
    items: Arc<Vec<Item>>,
}

impl ItemStore {
    /// The fixed sample collection served by this API.
    pub fn seed() -> Self {
        Self::from_items(vec![Item::new("Foo"), Item::new("Bar"), Item::new("Baz")])
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        ItemStore {
            items: Arc::new(items),
        }
    }

    /// Slice of the collection starting at `skip` with at most `limit`
    /// elements. Out-of-range offsets clamp to the collection bounds and
    /// never error.
    pub fn list(&self, skip: usize, limit: usize) -> &[Item] {
        let start = skip.min(self.items.len());
        let end = skip.saturating_add(limit).min(self.items.len());
        &self.items[start..end]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|item| item.item_name.as_str()).collect()
    }

    #[test]
    fn list_defaults_cover_whole_collection() {
        let store = ItemStore::seed();
        assert_eq!(names(store.list(0, 10)), vec!["Foo", "Bar", "Baz"]);
    }

    #[test]
    fn list_applies_skip_and_limit() {
        let store = ItemStore::seed();
        assert_eq!(names(store.list(1, 2)), vec!["Bar", "Baz"]);
        assert_eq!(names(store.list(0, 1)), vec!["Foo"]);
    }

    #[test]
    fn list_clamps_out_of_range_offsets() {
        let store = ItemStore::seed();
        assert!(store.list(3, 10).is_empty());
        assert!(store.list(100, 5).is_empty());
        assert_eq!(names(store.list(2, 100)), vec!["Baz"]);
    }

    #[test]
    fn list_survives_overflowing_bounds() {
        let store = ItemStore::seed();
        assert_eq!(names(store.list(1, usize::MAX)), vec!["Bar", "Baz"]);
    }

    #[test]
    fn list_on_empty_store() {
        let store = ItemStore::from_items(vec![]);
        assert!(store.is_empty());
        assert!(store.list(0, 10).is_empty());
    }
}
