//! Parser for restaurant and prediction snapshots.
//!
//! Two JSON documents are understood:
//! - restaurants: a top-level array of restaurant objects, as served by
//!   the all-restaurants endpoint
//! - zone predictions: `{ "predictions": [{ "zone": ..., "predicted_value": ... }] }`
//!
//! Parsing is strict about shape (a restaurant without `id` is an error) and
//! lenient about content (missing optional fields become `None`).

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a whole snapshot file into memory.
///
/// A missing file is reported as `FileNotFound` rather than a raw I/O error
/// so the caller can decide whether the file was optional.
fn read_snapshot(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

fn decode<T: DeserializeOwned>(file: &str, content: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line: e.line(),
        column: e.column(),
        reason: e.to_string(),
    })
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse a restaurants snapshot file
pub fn parse_restaurants(path: &Path) -> Result<Vec<Restaurant>> {
    let content = read_snapshot(path)?;
    parse_restaurants_str(&file_label(path), &content)
}

/// Parse a restaurants snapshot already held in memory.
///
/// `file` is only used to label errors.
pub fn parse_restaurants_str(file: &str, content: &str) -> Result<Vec<Restaurant>> {
    decode(file, content)
}

/// Parse a zone predictions file
pub fn parse_predictions(path: &Path) -> Result<Vec<ZonePrediction>> {
    let content = read_snapshot(path)?;
    parse_predictions_str(&file_label(path), &content)
}

/// Parse a zone predictions document already held in memory
pub fn parse_predictions_str(file: &str, content: &str) -> Result<Vec<ZonePrediction>> {
    let batch: PredictionBatch = decode(file, content)?;
    Ok(batch.predictions)
}
