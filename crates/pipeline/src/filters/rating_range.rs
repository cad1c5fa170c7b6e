//! Filter on the overall rating band.

use crate::selection::RatingRange;
use crate::traits::Filter;
use data_loader::Restaurant;

/// Keeps restaurants whose overall rating falls in the band.
///
/// ## Algorithm
/// `range.min < overall_rating <= range.max`; unrated restaurants are
/// dropped.
pub struct RatingRangeFilter {
    range: RatingRange,
}

impl RatingRangeFilter {
    pub fn new(range: RatingRange) -> Self {
        Self { range }
    }
}

impl Filter for RatingRangeFilter {
    fn name(&self) -> &str {
        "RatingRangeFilter"
    }

    fn matches(&self, restaurant: &Restaurant) -> bool {
        restaurant
            .overall_rating
            .is_some_and(|rating| self.range.contains(rating))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn rated(id: u32, rating: Option<f32>) -> Arc<Restaurant> {
        let mut r = Restaurant::new(id, format!("Restaurant {id}"));
        r.overall_rating = rating;
        Arc::new(r)
    }

    #[test]
    fn test_integer_boundary_goes_to_lower_band() {
        let restaurants = vec![rated(1, Some(2.0))];

        let low = RatingRangeFilter::new("1-2".parse().unwrap());
        let high = RatingRangeFilter::new("2-3".parse().unwrap());

        assert_eq!(low.apply(restaurants.clone()).len(), 1);
        assert!(high.apply(restaurants).is_empty());
    }

    #[test]
    fn test_zero_and_unrated_match_no_band() {
        let restaurants = vec![rated(1, Some(0.0)), rated(2, None)];

        for band in RatingRange::PRESETS {
            let filtered = RatingRangeFilter::new(band).apply(restaurants.clone());
            assert!(filtered.is_empty(), "band {band}");
        }
    }

    #[test]
    fn test_rating_range_filter() {
        let restaurants = vec![
            rated(1, Some(4.5)),
            rated(2, Some(3.9)),
            rated(3, Some(5.0)),
            rated(4, Some(4.0)),
        ];

        let filtered = RatingRangeFilter::new(RatingRange::new(4.0, 5.0)).apply(restaurants);

        let ids: Vec<_> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
