//! The user's current filter and sort choices.
//!
//! Every dimension is independently optional; an empty dimension imposes no
//! constraint. The selection is plain data, the pipeline reads it and the
//! dashboard replaces fields on user events.

use crate::error::SelectionError;
use crate::sort::SortKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// An overall-rating band, `min` exclusive and `max` inclusive.
///
/// Adjacent bands (`0-1`, `1-2`, ...) therefore partition `(0, 5]` without
/// overlap at integer boundaries; a rating of exactly 0 falls in no band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RatingRange {
    pub min: f32,
    pub max: f32,
}

impl RatingRange {
    /// Bands offered by the rating picker
    pub const PRESETS: [RatingRange; 5] = [
        RatingRange::new(0.0, 1.0),
        RatingRange::new(1.0, 2.0),
        RatingRange::new(2.0, 3.0),
        RatingRange::new(3.0, 4.0),
        RatingRange::new(4.0, 5.0),
    ];

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// `min < rating <= max`
    pub fn contains(&self, rating: f32) -> bool {
        rating > self.min && rating <= self.max
    }
}

impl FromStr for RatingRange {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SelectionError::InvalidRatingRange(s.to_string());

        let (min, max) = s.trim().split_once('-').ok_or_else(invalid)?;
        let min: f32 = min.trim().parse().map_err(|_| invalid())?;
        let max: f32 = max.trim().parse().map_err(|_| invalid())?;

        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(invalid());
        }
        Ok(Self { min, max })
    }
}

impl TryFrom<String> for RatingRange {
    type Error = SelectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RatingRange> for String {
    fn from(range: RatingRange) -> Self {
        range.to_string()
    }
}

impl fmt::Display for RatingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Filter and sort choices, each dimension optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub sort: Option<SortKey>,
    pub cuisine: Option<String>,
    pub price: Option<String>,
    pub zone: Option<String>,
    pub rating_range: Option<RatingRange>,
    pub food_rating: Option<f32>,
    /// Labels that must all be present on a restaurant
    pub aspects: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no dimension constrains or reorders the store
    pub fn is_empty(&self) -> bool {
        self.sort.is_none()
            && self.cuisine.is_none()
            && self.price.is_none()
            && self.zone.is_none()
            && self.rating_range.is_none()
            && self.food_rating.is_none()
            && self.aspects.is_empty()
    }

    /// Clear every dimension at once
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replace the required aspects with `labels`
    pub fn set_aspects<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aspects = labels.into_iter().map(Into::into).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rating_range() {
        let range: RatingRange = "1-2".parse().unwrap();
        assert_eq!(range, RatingRange::new(1.0, 2.0));
        assert_eq!(range.to_string(), "1-2");

        let range: RatingRange = " 3.5 - 4.5 ".parse().unwrap();
        assert_eq!(range, RatingRange::new(3.5, 4.5));
    }

    #[test]
    fn test_invalid_rating_range() {
        for label in ["", "3", "a-b", "4-3", "2-2"] {
            assert_eq!(
                label.parse::<RatingRange>(),
                Err(SelectionError::InvalidRatingRange(label.to_string())),
                "label {label:?}"
            );
        }
    }

    #[test]
    fn test_band_edges() {
        let band = RatingRange::new(1.0, 2.0);
        assert!(!band.contains(1.0));
        assert!(band.contains(1.5));
        assert!(band.contains(2.0));
        assert!(!band.contains(2.01));
    }

    #[test]
    fn test_presets_partition() {
        for rating in [0.5_f32, 1.0, 2.0, 2.5, 3.0, 4.99, 5.0] {
            let hits = RatingRange::PRESETS.iter().filter(|b| b.contains(rating)).count();
            assert_eq!(hits, 1, "rating {rating}");
        }
        assert!(RatingRange::PRESETS.iter().all(|b| !b.contains(0.0)));
    }

    #[test]
    fn test_selection_reset() {
        let mut selection = FilterSelection::new();
        assert!(selection.is_empty());

        selection.cuisine = Some("Thai".to_string());
        selection.sort = Some(SortKey::Rating);
        selection.set_aspects(["Cozy", "Good Value"]);
        assert!(!selection.is_empty());
        assert_eq!(selection.aspects.len(), 2);

        selection.reset();
        assert!(selection.is_empty());
    }
}
