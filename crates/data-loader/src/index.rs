//! RestaurantStore building and facet extraction.
//!
//! This module builds the store from parsed data:
//! - Validate id uniqueness and build the id index
//! - Load a snapshot directory (restaurants + optional zone predictions)
//! - Derive the distinct option lists shown by the filter pickers

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// File name of the restaurant list inside a snapshot directory
pub const RESTAURANTS_FILE: &str = "restaurants.json";

/// File name of the zone predictions inside a snapshot directory
pub const PREDICTIONS_FILE: &str = "zone_predictions.json";

impl RestaurantStore {
    /// Build a store from restaurants in source order.
    ///
    /// Fails with `DuplicateId` if two restaurants share an id; the order of
    /// the input is kept as is.
    pub fn from_restaurants(restaurants: Vec<Restaurant>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(restaurants.len());
        let mut stored = Vec::with_capacity(restaurants.len());

        for (idx, restaurant) in restaurants.into_iter().enumerate() {
            if by_id.insert(restaurant.id, idx).is_some() {
                return Err(DataLoadError::DuplicateId { id: restaurant.id });
            }
            stored.push(Arc::new(restaurant));
        }

        Ok(Self {
            restaurants: stored,
            by_id,
        })
    }

    /// Distinct values present in the store, for the filter pickers.
    ///
    /// Every list is sorted ascending and skips missing or blank values.
    pub fn facets(&self) -> FacetOptions {
        let mut cuisines = BTreeSet::new();
        let mut prices = BTreeSet::new();
        let mut zones = BTreeSet::new();
        let mut aspects = BTreeSet::new();
        let mut food_ratings: Vec<f32> = Vec::new();

        for restaurant in &self.restaurants {
            insert_label(&mut cuisines, restaurant.primary_cuisine.as_deref());
            insert_label(&mut prices, restaurant.price.as_deref());
            insert_label(&mut zones, restaurant.zone.as_deref());
            for aspect in &restaurant.aspects {
                insert_label(&mut aspects, Some(&aspect.aspect));
            }
            if let Some(rating) = restaurant.food_rating {
                food_ratings.push(rating);
            }
        }

        food_ratings.sort_by(|a, b| a.total_cmp(b));
        food_ratings.dedup();

        debug!(
            "Facets: {} cuisines, {} prices, {} zones, {} aspects",
            cuisines.len(),
            prices.len(),
            zones.len(),
            aspects.len()
        );

        FacetOptions {
            cuisines: cuisines.into_iter().collect(),
            prices: prices.into_iter().collect(),
            zones: zones.into_iter().collect(),
            food_ratings,
            aspects: aspects.into_iter().collect(),
        }
    }
}

fn insert_label(set: &mut BTreeSet<String>, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        set.insert(value.to_string());
    }
}

/// Option lists for the filter pickers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetOptions {
    pub cuisines: Vec<String>,
    pub prices: Vec<String>,
    pub zones: Vec<String>,
    pub food_ratings: Vec<f32>,
    pub aspects: Vec<String>,
}

/// Everything read from one snapshot directory
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub store: RestaurantStore,
    pub predictions: Vec<ZonePrediction>,
}

impl Snapshot {
    /// Load a snapshot directory.
    ///
    /// Steps:
    /// 1. Parse `restaurants.json` and `zone_predictions.json` in parallel
    /// 2. Build the store (fails on duplicate ids)
    /// 3. Treat a missing predictions file as "no predictions"
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading restaurant snapshot from {:?}", data_dir);

        let restaurants_path = data_dir.join(RESTAURANTS_FILE);
        let predictions_path = data_dir.join(PREDICTIONS_FILE);

        let (restaurants, predictions) = rayon::join(
            || parser::parse_restaurants(&restaurants_path),
            || parser::parse_predictions(&predictions_path),
        );

        let store = RestaurantStore::from_restaurants(restaurants?)?;
        let predictions = match predictions {
            Ok(predictions) => predictions,
            Err(DataLoadError::FileNotFound { path }) => {
                info!("No zone predictions at {}, busyness disabled", path);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        info!(
            "Loaded {} restaurants, {} zone predictions",
            store.len(),
            predictions.len()
        );

        Ok(Self { store, predictions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(id: RestaurantId, cuisine: &str, zone: &str) -> Restaurant {
        let mut r = Restaurant::new(id, format!("Restaurant {id}"));
        r.primary_cuisine = Some(cuisine.to_string());
        r.zone = Some(zone.to_string());
        r
    }

    #[test]
    fn test_store_keeps_source_order() {
        let store = RestaurantStore::from_restaurants(vec![
            restaurant(3, "Thai", "Midtown"),
            restaurant(1, "Italian", "Harlem"),
            restaurant(2, "Thai", "Chelsea"),
        ])
        .unwrap();

        let ids: Vec<_> = store.restaurants().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(store.get(1).unwrap().primary_cuisine.as_deref(), Some("Italian"));
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = RestaurantStore::from_restaurants(vec![
            restaurant(1, "Thai", "Midtown"),
            restaurant(1, "Italian", "Harlem"),
        ])
        .unwrap_err();
        assert!(matches!(err, DataLoadError::DuplicateId { id: 1 }));
    }

    #[test]
    fn test_facets_sorted_and_distinct() {
        let mut blank = restaurant(4, "  ", "Midtown");
        blank.food_rating = Some(4.0);

        let mut first = restaurant(1, "Thai", "Midtown");
        first.food_rating = Some(4.5);
        first.aspects = vec![Aspect::positive("Cozy"), Aspect::negative("Loud")];

        let mut second = restaurant(2, "Italian", "Chelsea");
        second.food_rating = Some(4.0);
        second.aspects = vec![Aspect::positive("Cozy")];

        let store = RestaurantStore::from_restaurants(vec![first, second, blank]).unwrap();
        let facets = store.facets();

        assert_eq!(facets.cuisines, vec!["Italian", "Thai"]);
        assert_eq!(facets.zones, vec!["Chelsea", "Midtown"]);
        assert_eq!(facets.food_ratings, vec![4.0, 4.5]);
        assert_eq!(facets.aspects, vec!["Cozy", "Loud"]);
        assert!(facets.prices.is_empty());
    }

    #[test]
    fn test_empty_store_facets() {
        let facets = RestaurantStore::new().facets();
        assert_eq!(facets, FacetOptions::default());
    }

    const RESTAURANTS: &str = r#"[
        {"id": 1, "restaurant_name": "Noodle Bar", "zone": "Harlem"},
        {"id": 2, "restaurant_name": "Ana's Cafe", "zone": "Midtown"}
    ]"#;

    fn snapshot_dir(predictions: Option<&str>) -> tempfile::TempDir {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join(RESTAURANTS_FILE), RESTAURANTS).unwrap();
        if let Some(predictions) = predictions {
            std::fs::write(dir.path().join(PREDICTIONS_FILE), predictions).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_dir_without_predictions() {
        let dir = snapshot_dir(None);
        let snapshot = Snapshot::load_from_dir(dir.path()).unwrap();

        assert_eq!(snapshot.store.len(), 2);
        assert!(snapshot.predictions.is_empty());
    }

    #[test]
    fn test_load_dir_with_predictions() {
        let dir = snapshot_dir(Some(
            r#"{"predictions": [{"zone": "Midtown", "predicted_value": 1.8}]}"#,
        ));
        let snapshot = Snapshot::load_from_dir(dir.path()).unwrap();

        let ids: Vec<_> = snapshot.store.restaurants().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(snapshot.predictions.len(), 1);
        assert_eq!(snapshot.predictions[0].zone, "Midtown");
        assert_eq!(snapshot.predictions[0].predicted_value, 1.8);
    }

    #[test]
    fn test_load_dir_corrupt_predictions() {
        let dir = snapshot_dir(Some(r#"{"predictions": [{"zone": "Midtown""#));
        let err = Snapshot::load_from_dir(dir.path()).unwrap_err();

        assert!(matches!(err, DataLoadError::ParseError { ref file, .. } if file.contains(PREDICTIONS_FILE)));
    }
}
