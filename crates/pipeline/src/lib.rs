//! Pipeline for filtering and sorting restaurants.
//!
//! This crate provides:
//! - Filter trait and implementations for the selection dimensions
//! - FilterPipeline for composing filters
//! - SortKey comparators
//! - `orchestrate`, the store + selection -> visible list function
//!
//! ## Architecture
//! The visible list is computed in two stages:
//! 1. Filters drop restaurants that fail any selected constraint
//! 2. The selected sort key (if any) reorders the survivors, stably
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{orchestrate, FilterSelection, SortKey};
//!
//! let mut selection = FilterSelection::new();
//! selection.cuisine = Some("Thai".to_string());
//! selection.rating_range = Some("3-4".parse()?);
//! selection.sort = Some(SortKey::Rating);
//!
//! let visible = orchestrate(&store, &selection);
//! ```

pub mod error;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod selection;
pub mod sort;
pub mod orchestrate;

// Re-export main types
pub use error::SelectionError;
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use selection::{FilterSelection, RatingRange};
pub use sort::{sort_restaurants, SortKey};
pub use orchestrate::{map_markers, orchestrate, MapMarker};
