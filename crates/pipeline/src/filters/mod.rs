//! Filter implementations for the restaurant pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod aspects;
pub mod category;
pub mod food_rating;
pub mod rating_range;

// Re-export for convenience
pub use aspects::AspectFilter;
pub use category::{Category, CategoryFilter};
pub use food_rating::FoodRatingFilter;
pub use rating_range::RatingRangeFilter;
