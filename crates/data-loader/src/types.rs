//! Core domain types for restaurant snapshots.
//!
//! Field names on the wire follow the backend serializer
//! (`restaurant_name`, `primary_cuisine`, ...). Every field except `id` is
//! optional: the backend stores blanks as nulls and older snapshots omit
//! whole columns.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a restaurant (database primary key)
pub type RestaurantId = u32;

// =============================================================================
// Restaurant-related Types
// =============================================================================

/// A restaurant as delivered by the data source.
///
/// Read-only once loaded; the store hands out `Arc<Restaurant>` so the
/// visible list, the compare set and the favorites share one allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    #[serde(rename = "restaurant_name", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub primary_cuisine: Option<String>,
    /// Price label such as `"$$"` or `"$31 to $50"`; never parsed to a number
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default)]
    pub overall_rating: Option<f32>,
    #[serde(default)]
    pub food_rating: Option<f32>,
    #[serde(default)]
    pub ambience_rating: Option<f32>,
    #[serde(default)]
    pub service_rating: Option<f32>,
    #[serde(default)]
    pub value_rating: Option<f32>,
    #[serde(default)]
    pub noise_level: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Review aspects in source order. Missing or null means no aspects.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub aspects: Vec<Aspect>,
}

impl Restaurant {
    /// Create a restaurant with only an id and a name set.
    ///
    /// Mostly useful for tests and fixtures; real data comes from
    /// [`crate::parser::parse_restaurants`].
    pub fn new(id: RestaurantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            address: None,
            primary_cuisine: None,
            price: None,
            zone: None,
            overall_rating: None,
            food_rating: None,
            ambience_rating: None,
            service_rating: None,
            value_rating: None,
            noise_level: None,
            latitude: None,
            longitude: None,
            aspects: Vec::new(),
        }
    }

    /// Display name, empty when the source had none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// True if any of this restaurant's aspects carries `label`,
    /// regardless of polarity.
    pub fn has_aspect(&self, label: &str) -> bool {
        self.aspects.iter().any(|a| a.aspect == label)
    }

    /// Map coordinates, when both are known
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

/// A qualitative tag mined from reviews, e.g. "Cozy" or "Slow Service"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aspect {
    pub aspect: String,
    pub rating_type: RatingType,
    /// Number of reviews mentioning this aspect
    #[serde(default)]
    pub count: u32,
}

impl Aspect {
    pub fn positive(label: impl Into<String>) -> Self {
        Self {
            aspect: label.into(),
            rating_type: RatingType::Positive,
            count: 0,
        }
    }

    pub fn negative(label: impl Into<String>) -> Self {
        Self {
            aspect: label.into(),
            rating_type: RatingType::Negative,
            count: 0,
        }
    }
}

/// Polarity of an aspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingType {
    Positive,
    Negative,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Aspect>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Aspect>>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Busyness Types
// =============================================================================

/// Externally computed crowding score for one zone at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZonePrediction {
    pub zone: String,
    pub predicted_value: f32,
}

/// Wire envelope of the zone prediction endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionBatch {
    #[serde(default)]
    pub predictions: Vec<ZonePrediction>,
}

// =============================================================================
// RestaurantStore - the unfiltered source list
// =============================================================================

/// Holds the full restaurant list of one fetch, in source order.
///
/// The store never changes after construction; a refresh builds a new one.
/// Lookups by id go through a side index into `restaurants`.
#[derive(Debug, Clone, Default)]
pub struct RestaurantStore {
    pub(crate) restaurants: Vec<Arc<Restaurant>>,
    pub(crate) by_id: HashMap<RestaurantId, usize>,
}

impl RestaurantStore {
    /// Creates a new, empty store (the state before the first fetch resolves)
    pub fn new() -> Self {
        Self::default()
    }

    /// All restaurants in source order
    pub fn restaurants(&self) -> &[Arc<Restaurant>] {
        &self.restaurants
    }

    /// Get a restaurant by id
    pub fn get(&self, id: RestaurantId) -> Option<&Arc<Restaurant>> {
        self.by_id.get(&id).map(|&idx| &self.restaurants[idx])
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}
