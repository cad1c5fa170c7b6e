//! Store + selection -> visible list.
//!
//! This is the single place the visible list is computed. It is a pure
//! function: the dashboard calls it again after every store load or
//! selection change instead of patching the previous result.

use crate::filter_pipeline::FilterPipeline;
use crate::selection::FilterSelection;
use crate::sort::sort_restaurants;
use data_loader::{Restaurant, RestaurantId, RestaurantStore};
use std::sync::Arc;
use tracing::debug;

/// Compute the visible list.
///
/// ## Algorithm
/// 1. Filter the whole store through the selection's filters (conjunction)
/// 2. If a sort key is set, stable-sort the survivors with its comparator
/// 3. Otherwise keep store order
pub fn orchestrate(store: &RestaurantStore, selection: &FilterSelection) -> Vec<Arc<Restaurant>> {
    let pipeline = FilterPipeline::from_selection(selection);
    let mut visible = pipeline.apply(store.restaurants().to_vec());

    if let Some(key) = selection.sort {
        sort_restaurants(&mut visible, key);
    }

    debug!(
        "Visible list: {} of {} restaurants ({} filters, sort: {:?})",
        visible.len(),
        store.len(),
        pipeline.len(),
        selection.sort
    );
    visible
}

/// A point for the map view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapMarker {
    pub id: RestaurantId,
    pub latitude: f64,
    pub longitude: f64,
}

/// Markers for the restaurants that have coordinates, in visible order
pub fn map_markers(visible: &[Arc<Restaurant>]) -> Vec<MapMarker> {
    visible
        .iter()
        .filter_map(|restaurant| {
            let (latitude, longitude) = restaurant.coordinates()?;
            Some(MapMarker {
                id: restaurant.id,
                latitude,
                longitude,
            })
        })
        .collect()
}
