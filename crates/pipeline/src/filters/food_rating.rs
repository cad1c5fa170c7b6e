//! Filter on the exact food rating.

use crate::traits::Filter;
use data_loader::Restaurant;

/// Keeps restaurants whose food rating equals the selected value.
///
/// Values come from the facet list, so they compare with plain `==`.
pub struct FoodRatingFilter {
    rating: f32,
}

impl FoodRatingFilter {
    pub fn new(rating: f32) -> Self {
        Self { rating }
    }
}

impl Filter for FoodRatingFilter {
    fn name(&self) -> &str {
        "FoodRatingFilter"
    }

    fn matches(&self, restaurant: &Restaurant) -> bool {
        restaurant.food_rating == Some(self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_food_rating_filter() {
        let restaurants: Vec<_> = [Some(4.5), Some(4.0), None, Some(4.5)]
            .into_iter()
            .enumerate()
            .map(|(idx, rating)| {
                let mut r = Restaurant::new(idx as u32 + 1, "r");
                r.food_rating = rating;
                Arc::new(r)
            })
            .collect();

        let filtered = FoodRatingFilter::new(4.5).apply(restaurants);

        let ids: Vec<_> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }
}
