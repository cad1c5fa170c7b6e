//! Side-by-side comparison of two restaurants.

use data_loader::Restaurant;
use std::sync::Arc;

/// Maximum number of restaurants held for comparison
pub const COMPARE_CAPACITY: usize = 2;

/// Restaurants picked for comparison, in the order they were added.
///
/// The cap is strict: once two restaurants are held, further adds are
/// refused until `reset`. Adding the same restaurant twice is allowed.
#[derive(Debug, Clone, Default)]
pub struct CompareSet {
    entries: Vec<Arc<Restaurant>>,
}

impl CompareSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `restaurant` if there is room. Returns whether it was added.
    pub fn add(&mut self, restaurant: Arc<Restaurant>) -> bool {
        if self.entries.len() >= COMPARE_CAPACITY {
            return false;
        }
        self.entries.push(restaurant);
        true
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Held restaurants, oldest first
    pub fn entries(&self) -> &[Arc<Restaurant>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The two restaurants to show, or `None` for "nothing to compare"
    pub fn pair(&self) -> Option<(&Restaurant, &Restaurant)> {
        match self.entries.as_slice() {
            [left, right, ..] => Some((&**left, &**right)),
            _ => None,
        }
    }

    /// Rows of the comparison table, or `None` with fewer than two entries
    pub fn comparison(&self) -> Option<Vec<ComparisonRow>> {
        let (left, right) = self.pair()?;

        let text = |value: Option<&str>| value.unwrap_or("-").to_string();
        let rating = |value: Option<f32>| value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"));

        let row = |label, left: String, right: String| ComparisonRow { label, left, right };

        Some(vec![
            row("Name", text(left.name.as_deref()), text(right.name.as_deref())),
            row("Address", text(left.address.as_deref()), text(right.address.as_deref())),
            row(
                "Primary Cuisine",
                text(left.primary_cuisine.as_deref()),
                text(right.primary_cuisine.as_deref()),
            ),
            row("Price Range", text(left.price.as_deref()), text(right.price.as_deref())),
            row("Overall Rating", rating(left.overall_rating), rating(right.overall_rating)),
            row("Ambience Rating", rating(left.ambience_rating), rating(right.ambience_rating)),
            row("Food Rating", rating(left.food_rating), rating(right.food_rating)),
            row("Service Rating", rating(left.service_rating), rating(right.service_rating)),
            row("Value Rating", rating(left.value_rating), rating(right.value_rating)),
            row(
                "Noise Level",
                text(left.noise_level.as_deref()),
                text(right.noise_level.as_deref()),
            ),
        ])
    }
}

/// One line of the comparison table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub left: String,
    pub right: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(id: u32) -> Arc<Restaurant> {
        Arc::new(Restaurant::new(id, format!("Restaurant {id}")))
    }

    #[test]
    fn test_third_add_is_refused() {
        let mut compare = CompareSet::new();
        assert!(compare.add(restaurant(1)));
        assert!(compare.add(restaurant(2)));
        assert!(!compare.add(restaurant(3)));

        assert_eq!(compare.len(), 2);
        let ids: Vec<_> = compare.entries().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
        let (left, right) = compare.pair().unwrap();
        assert_eq!((left.id, right.id), (1, 2));
    }

    #[test]
    fn test_fewer_than_two_is_nothing_to_compare() {
        let mut compare = CompareSet::new();
        assert!(compare.pair().is_none());
        compare.add(restaurant(1));
        assert_eq!(compare.entries().len(), 1);
        assert!(compare.pair().is_none());
        assert!(compare.comparison().is_none());
    }

    #[test]
    fn test_reset() {
        let mut compare = CompareSet::new();
        compare.add(restaurant(1));
        compare.add(restaurant(2));
        compare.reset();
        assert!(compare.is_empty());
        assert!(compare.add(restaurant(3)));
    }

    #[test]
    fn test_comparison_rows() {
        let mut left = Restaurant::new(1, "Ana's Cafe");
        left.overall_rating = Some(4.5);
        left.price = Some("$$".to_string());
        let mut right = Restaurant::new(2, "Zed Diner");
        right.noise_level = Some("Moderate".to_string());

        let mut compare = CompareSet::new();
        compare.add(Arc::new(left));
        compare.add(Arc::new(right));

        let rows = compare.comparison().unwrap();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].left, "Ana's Cafe");
        assert_eq!(rows[0].right, "Zed Diner");
        assert_eq!(rows[3].left, "$$");
        assert_eq!(rows[4].left, "4.5");
        assert_eq!(rows[4].right, "-");
        assert_eq!(rows[9].label, "Noise Level");
        assert_eq!(rows[9].right, "Moderate");
    }
}
