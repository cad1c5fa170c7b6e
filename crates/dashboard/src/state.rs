//! # Dashboard state
//!
//! All state the dashboard renders lives in one value, `DashboardState`,
//! and changes only through `DashboardState::apply(event)`. Both user
//! interaction and data arrival are events; there is no other way in.
//!
//! After every event that touches the store or the selection, the visible
//! list is recomputed from scratch with `pipeline::orchestrate`.

use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use data_loader::{Restaurant, RestaurantId, RestaurantStore, Snapshot};
use pipeline::{orchestrate, FilterSelection, RatingRange, SortKey};

use crate::busyness::ZoneBusyness;
use crate::compare::CompareSet;
use crate::favorites::FavoriteSet;

/// Where the one-shot snapshot fetch stands
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    /// No fetch requested yet
    #[default]
    Idle,
    Pending,
    Loaded,
    /// The fetch failed; the message is for display only
    Failed(String),
}

/// An action the user can take on the dashboard.
///
/// Decoded from JSON as `{"action": "set_cuisine", "cuisine": "Thai"}`; a
/// missing or null value clears that filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    SetCuisine { cuisine: Option<String> },
    SetPrice { price: Option<String> },
    SetZone { zone: Option<String> },
    SetRatingRange { rating_range: Option<RatingRange> },
    SetFoodRating { food_rating: Option<f32> },
    SetAspects {
        #[serde(default)]
        aspects: Vec<String>,
    },
    SetSort { sort: Option<SortKey> },
    ResetFilters,
    AddToCompare { id: RestaurantId },
    ResetCompare,
    ToggleFavorite { id: RestaurantId },
    RemoveFavorite { id: RestaurantId },
}

/// Everything that can change dashboard state
#[derive(Debug)]
pub enum DashboardEvent {
    FetchStarted,
    SnapshotFetched(Result<Snapshot>),
    User(UserAction),
}

impl From<UserAction> for DashboardEvent {
    fn from(action: UserAction) -> Self {
        DashboardEvent::User(action)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    store: Arc<RestaurantStore>,
    fetch: FetchState,
    selection: FilterSelection,
    visible: Vec<Arc<Restaurant>>,
    compare: CompareSet,
    favorites: FavoriteSet,
    busyness: ZoneBusyness,
}

impl DashboardState {
    /// Empty state: no store, no selection, nothing visible
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event and return the next state.
    pub fn apply(mut self, event: impl Into<DashboardEvent>) -> Self {
        match event.into() {
            DashboardEvent::FetchStarted => {
                self.fetch = FetchState::Pending;
            }
            DashboardEvent::SnapshotFetched(Ok(snapshot)) => {
                info!(
                    "Snapshot loaded: {} restaurants, {} zone predictions",
                    snapshot.store.len(),
                    snapshot.predictions.len()
                );
                self.store = Arc::new(snapshot.store);
                self.busyness = ZoneBusyness::from_predictions(snapshot.predictions);
                self.fetch = FetchState::Loaded;
                self.refresh_visible();
            }
            DashboardEvent::SnapshotFetched(Err(e)) => {
                // Keep serving whatever store we already have
                warn!("Snapshot fetch failed: {:#}", e);
                self.fetch = FetchState::Failed(format!("{e:#}"));
            }
            DashboardEvent::User(action) => self.apply_action(action),
        }
        self
    }

    /// Apply a sequence of user actions in order
    pub fn apply_all(self, actions: impl IntoIterator<Item = UserAction>) -> Self {
        actions.into_iter().fold(self, |state, action| state.apply(action))
    }

    fn apply_action(&mut self, action: UserAction) {
        match action {
            UserAction::SetCuisine { cuisine } => self.update_selection(|s| s.cuisine = cuisine),
            UserAction::SetPrice { price } => self.update_selection(|s| s.price = price),
            UserAction::SetZone { zone } => self.update_selection(|s| s.zone = zone),
            UserAction::SetRatingRange { rating_range } => {
                self.update_selection(|s| s.rating_range = rating_range)
            }
            UserAction::SetFoodRating { food_rating } => {
                self.update_selection(|s| s.food_rating = food_rating)
            }
            UserAction::SetAspects { aspects } => self.update_selection(|s| s.set_aspects(aspects)),
            UserAction::SetSort { sort } => self.update_selection(|s| s.sort = sort),
            UserAction::ResetFilters => self.update_selection(FilterSelection::reset),
            UserAction::AddToCompare { id } => match self.store.get(id) {
                Some(restaurant) => {
                    if !self.compare.add(restaurant.clone()) {
                        info!("Compare set full, ignoring restaurant {}", id);
                    }
                }
                None => warn!("Cannot compare unknown restaurant {}", id),
            },
            UserAction::ResetCompare => self.compare.reset(),
            UserAction::ToggleFavorite { id } => match self.store.get(id) {
                Some(restaurant) => {
                    let now_favorite = self.favorites.toggle(restaurant.clone());
                    info!("Restaurant {} favorite: {}", id, now_favorite);
                }
                None => warn!("Cannot favorite unknown restaurant {}", id),
            },
            UserAction::RemoveFavorite { id } => {
                if !self.favorites.remove(id) {
                    debug!("Restaurant {} was not a favorite", id);
                }
            }
        }
    }

    fn update_selection(&mut self, update: impl FnOnce(&mut FilterSelection)) {
        update(&mut self.selection);
        self.refresh_visible();
    }

    fn refresh_visible(&mut self) {
        self.visible = orchestrate(&self.store, &self.selection);
    }

    pub fn store(&self) -> &RestaurantStore {
        &self.store
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// The filtered, sorted list for list and map display
    pub fn visible(&self) -> &[Arc<Restaurant>] {
        &self.visible
    }

    pub fn compare(&self) -> &CompareSet {
        &self.compare
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn busyness(&self) -> &ZoneBusyness {
        &self.busyness
    }
}
