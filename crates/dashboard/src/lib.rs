//! Dashboard crate for the Nibbler restaurant explorer.
//!
//! This crate holds the dashboard's state and the event reducer that
//! updates it, the compare and favorites selections, zone busyness, and
//! the orchestrator that loads snapshots asynchronously.

pub mod busyness;
pub mod compare;
pub mod favorites;
pub mod orchestrator;
pub mod state;

pub use busyness::{BusynessLevel, ZoneBusyness};
pub use compare::{CompareSet, ComparisonRow, COMPARE_CAPACITY};
pub use favorites::FavoriteSet;
pub use orchestrator::{DashboardOrchestrator, RestaurantSource, SnapshotDirSource};
pub use state::{DashboardEvent, DashboardState, FetchState, UserAction};
