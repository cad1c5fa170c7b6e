//! # Dashboard Orchestrator
//!
//! This module drives the one asynchronous step of the dashboard: fetching
//! the restaurant snapshot from its source. The fetch:
//! 1. Marks the state as pending
//! 2. Runs the (blocking) source read on the blocking thread pool
//! 3. Feeds the result, success or failure, back through
//!    `DashboardState::apply`
//!
//! The orchestrator never retries or cancels; a refresh is just another
//! call to `load`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use data_loader::Snapshot;

use crate::state::{DashboardEvent, DashboardState};

/// Where snapshots come from.
///
/// `fetch` may block; the orchestrator calls it off the async runtime.
pub trait RestaurantSource: Send + Sync {
    /// Returns the name of this source (for logging)
    fn name(&self) -> &str;

    fn fetch(&self) -> data_loader::Result<Snapshot>;
}

/// Reads `restaurants.json` and `zone_predictions.json` from a directory
#[derive(Debug, Clone)]
pub struct SnapshotDirSource {
    data_dir: PathBuf,
}

impl SnapshotDirSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl RestaurantSource for SnapshotDirSource {
    fn name(&self) -> &str {
        "SnapshotDirSource"
    }

    fn fetch(&self) -> data_loader::Result<Snapshot> {
        Snapshot::load_from_dir(&self.data_dir)
    }
}

/// Loads snapshots into dashboard state
#[derive(Clone)]
pub struct DashboardOrchestrator {
    source: Arc<dyn RestaurantSource>,
}

impl DashboardOrchestrator {
    pub fn new(source: impl RestaurantSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Fetch a snapshot without touching any state
    pub async fn fetch_snapshot(&self) -> Result<Snapshot> {
        let start = Instant::now();
        let source = self.source.clone();

        let snapshot = tokio::task::spawn_blocking(move || source.fetch())
            .await
            .context("Snapshot fetch task panicked")?
            .with_context(|| format!("Failed to fetch snapshot from {}", self.source.name()))?;

        info!(
            "Fetched {} restaurants from {} in {:.2?}",
            snapshot.store.len(),
            self.source.name(),
            start.elapsed()
        );
        Ok(snapshot)
    }

    /// Run one fetch and fold its outcome into `state`
    pub async fn load(&self, state: DashboardState) -> DashboardState {
        let state = state.apply(DashboardEvent::FetchStarted);
        let result = self.fetch_snapshot().await;
        state.apply(DashboardEvent::SnapshotFetched(result))
    }
}
