//! # Data Loader Crate
//!
//! This crate loads restaurant snapshots for the Nibbler dashboard.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Restaurant, Aspect, ZonePrediction, RestaurantStore)
//! - **parser**: Decode JSON snapshots into Rust structs
//! - **index**: Build the store, derive facet options, load snapshot directories
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Snapshot;
//! use std::path::Path;
//!
//! let snapshot = Snapshot::load_from_dir(Path::new("data"))?;
//! let restaurant = snapshot.store.get(7).unwrap();
//! println!("{} is in {:?}", restaurant.display_name(), restaurant.zone);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::{FacetOptions, Snapshot, PREDICTIONS_FILE, RESTAURANTS_FILE};
pub use types::{
    // Type aliases
    RestaurantId,
    // Core types
    Restaurant,
    Aspect,
    RestaurantStore,
    ZonePrediction,
    PredictionBatch,
    // Enums
    RatingType,
};
