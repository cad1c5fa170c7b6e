//! The user's favorite restaurants for this session.

use data_loader::{Restaurant, RestaurantId};
use std::sync::Arc;

/// Favorites keyed by restaurant id, iterated in insertion order.
///
/// Not persisted; a new session starts empty.
#[derive(Debug, Clone, Default)]
pub struct FavoriteSet {
    entries: Vec<Arc<Restaurant>>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `restaurant` if it is a favorite, add it otherwise.
    ///
    /// Returns whether it is a favorite afterwards.
    pub fn toggle(&mut self, restaurant: Arc<Restaurant>) -> bool {
        if self.remove(restaurant.id) {
            return false;
        }
        self.entries.push(restaurant);
        true
    }

    /// Remove by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: RestaurantId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|restaurant| restaurant.id != id);
        self.entries.len() != before
    }

    pub fn is_favorite(&self, id: RestaurantId) -> bool {
        self.entries.iter().any(|restaurant| restaurant.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Restaurant>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(id: u32) -> Arc<Restaurant> {
        Arc::new(Restaurant::new(id, format!("Restaurant {id}")))
    }

    #[test]
    fn test_toggle_twice_restores_absence() {
        let mut favorites = FavoriteSet::new();
        assert!(!favorites.is_favorite(7));

        assert!(favorites.toggle(restaurant(7)));
        assert!(favorites.is_favorite(7));

        assert!(!favorites.toggle(restaurant(7)));
        assert!(!favorites.is_favorite(7));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_remove_is_unconditional() {
        let mut favorites = FavoriteSet::new();
        assert!(!favorites.remove(3));

        favorites.toggle(restaurant(3));
        favorites.toggle(restaurant(4));
        assert!(favorites.remove(3));
        assert!(!favorites.remove(3));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_insertion_order() {
        let mut favorites = FavoriteSet::new();
        for id in [5, 2, 9] {
            favorites.toggle(restaurant(id));
        }
        favorites.toggle(restaurant(2));
        favorites.toggle(restaurant(2));

        let ids: Vec<_> = favorites.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 9, 2]);
    }
}
