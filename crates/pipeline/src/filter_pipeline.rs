//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern, and the mapping
//! from a FilterSelection to the filters it implies.

use crate::filters::{AspectFilter, CategoryFilter, FoodRatingFilter, RatingRangeFilter};
use crate::selection::FilterSelection;
use crate::traits::Filter;
use data_loader::Restaurant;
use std::sync::Arc;
use tracing::debug;

/// Chains multiple filters together into a conjunction.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CategoryFilter::cuisine("Thai"))
///     .add_filter(RatingRangeFilter::new("3-4".parse()?));
///
/// let visible = pipeline.apply(store.restaurants().to_vec());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for a selection.
    ///
    /// One filter per non-empty dimension; the sort key is not a filter and
    /// is ignored here.
    pub fn from_selection(selection: &FilterSelection) -> Self {
        let mut pipeline = Self::new();

        if let Some(cuisine) = &selection.cuisine {
            pipeline = pipeline.add_filter(CategoryFilter::cuisine(cuisine.as_str()));
        }
        if let Some(price) = &selection.price {
            pipeline = pipeline.add_filter(CategoryFilter::price(price.as_str()));
        }
        if let Some(zone) = &selection.zone {
            pipeline = pipeline.add_filter(CategoryFilter::zone(zone.as_str()));
        }
        if let Some(range) = selection.rating_range {
            pipeline = pipeline.add_filter(RatingRangeFilter::new(range));
        }
        if let Some(rating) = selection.food_rating {
            pipeline = pipeline.add_filter(FoodRatingFilter::new(rating));
        }
        if !selection.aspects.is_empty() {
            pipeline = pipeline.add_filter(AspectFilter::new(selection.aspects.iter().cloned()));
        }

        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// True if `restaurant` passes every filter
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        self.filters.iter().all(|filter| filter.matches(restaurant))
    }

    /// Apply all filters in sequence to the restaurants.
    ///
    /// ## Algorithm
    /// 1. Start with the input list
    /// 2. For each filter in order, log the input count, apply, log the
    ///    output count
    /// 3. Return what is left, in input order
    pub fn apply(&self, restaurants: Vec<Arc<Restaurant>>) -> Vec<Arc<Restaurant>> {
        let mut current = restaurants;
        for filter in &self.filters {
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::RatingRange;
    use crate::sort::SortKey;

    fn restaurants() -> Vec<Arc<Restaurant>> {
        [(1, "Thai", 4.5), (2, "Italian", 3.5), (3, "Thai", 2.0)]
            .into_iter()
            .map(|(id, cuisine, rating)| {
                let mut r = Restaurant::new(id, format!("Restaurant {id}"));
                r.primary_cuisine = Some(cuisine.to_string());
                r.overall_rating = Some(rating);
                Arc::new(r)
            })
            .collect()
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let filtered = pipeline.apply(restaurants());
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(CategoryFilter::cuisine("Italian"));

        let filtered = pipeline.apply(restaurants());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn test_from_selection_one_filter_per_dimension() {
        let mut selection = FilterSelection::new();
        selection.sort = Some(SortKey::Rating);
        assert!(FilterPipeline::from_selection(&selection).is_empty());

        selection.cuisine = Some("Thai".to_string());
        selection.rating_range = Some(RatingRange::new(4.0, 5.0));
        selection.set_aspects(["Cozy"]);
        assert_eq!(FilterPipeline::from_selection(&selection).len(), 3);
    }

    #[test]
    fn test_conjunction() {
        let mut selection = FilterSelection::new();
        selection.cuisine = Some("Thai".to_string());
        selection.rating_range = Some(RatingRange::new(4.0, 5.0));

        let pipeline = FilterPipeline::from_selection(&selection);
        let filtered = pipeline.apply(restaurants());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
        assert!(pipeline.matches(&filtered[0]));
    }
}
