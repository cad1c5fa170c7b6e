//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to the restaurant list.

use data_loader::Restaurant;
use std::sync::Arc;

/// A single inclusion predicate over restaurants.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a built pipeline to be shared across threads
/// - `matches` must be pure: same restaurant, same answer
/// - `apply` takes ownership of the list and keeps the relative order of
///   the survivors
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Decide whether `restaurant` stays in the list
    fn matches(&self, restaurant: &Restaurant) -> bool;

    /// Apply this filter to a list of restaurants.
    fn apply(&self, restaurants: Vec<Arc<Restaurant>>) -> Vec<Arc<Restaurant>> {
        restaurants
            .into_iter()
            .filter(|restaurant| self.matches(restaurant))
            .collect()
    }
}
