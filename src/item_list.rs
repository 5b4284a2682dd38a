//! Item List Utilities
//!
//! Ordering helpers for the locally cached item list.

use crate::models::Item;

/// Sort a freshly loaded list newest first (id descending)
pub fn newest_first(mut items: Vec<Item>) -> Vec<Item> {
    items.sort_by(|a, b| b.id.cmp(&a.id));
    items
}

/// Put a just-created item on top, keeping the rest in their current order
pub fn prepend(items: &mut Vec<Item>, created: Item) {
    items.insert(0, created);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: i64) -> Item {
        Item {
            id,
            name: format!("Item {}", id),
            description: None,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn ids(items: &[Item]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_newest_first() {
        let items = vec![make_item(1), make_item(3), make_item(2)];
        assert_eq!(ids(&newest_first(items)), vec![3, 2, 1]);
    }

    #[test]
    fn test_newest_first_is_non_increasing() {
        let items = vec![make_item(7), make_item(7), make_item(12), make_item(0), make_item(5)];
        let sorted = newest_first(items);
        assert!(sorted.windows(2).all(|w| w[0].id >= w[1].id));
        assert_eq!(sorted.len(), 5);
    }

    #[test]
    fn test_prepend_keeps_prior_order() {
        let mut items = newest_first(vec![make_item(1), make_item(3), make_item(2)]);
        prepend(&mut items, make_item(10));
        assert_eq!(ids(&items), vec![10, 3, 2, 1]);

        // Position 0 regardless of id
        prepend(&mut items, make_item(4));
        assert_eq!(ids(&items), vec![4, 10, 3, 2, 1]);
    }

    #[test]
    fn test_empty_list() {
        assert!(newest_first(Vec::new()).is_empty());
        let mut items = Vec::new();
        prepend(&mut items, make_item(1));
        assert_eq!(ids(&items), vec![1]);
    }
}
