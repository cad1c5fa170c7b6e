//! Crowd-busyness levels per zone.
//!
//! Predictions are computed elsewhere; this module only indexes them by
//! zone and buckets the raw score into the five levels of the map legend.

use data_loader::ZonePrediction;
use std::collections::HashMap;
use std::fmt;

/// Legend buckets, quietest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BusynessLevel {
    NotBusy,
    LessBusy,
    ModeratelyBusy,
    Busy,
    VeryBusy,
}

impl BusynessLevel {
    /// Bucket a predicted score.
    ///
    /// Lower bounds are inclusive: 2.5 very busy, 1.5 busy, 0.5 moderately
    /// busy, 0.2 less busy, anything lower (or NaN) not busy.
    pub fn from_value(value: f32) -> Self {
        if value >= 2.5 {
            BusynessLevel::VeryBusy
        } else if value >= 1.5 {
            BusynessLevel::Busy
        } else if value >= 0.5 {
            BusynessLevel::ModeratelyBusy
        } else if value >= 0.2 {
            BusynessLevel::LessBusy
        } else {
            BusynessLevel::NotBusy
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BusynessLevel::NotBusy => "Not Busy",
            BusynessLevel::LessBusy => "Less Busy",
            BusynessLevel::ModeratelyBusy => "Moderately Busy",
            BusynessLevel::Busy => "Busy",
            BusynessLevel::VeryBusy => "Very Busy",
        }
    }
}

impl fmt::Display for BusynessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Latest predicted score per zone
#[derive(Debug, Clone, Default)]
pub struct ZoneBusyness {
    values: HashMap<String, f32>,
}

impl ZoneBusyness {
    /// Index predictions by zone; a later prediction for the same zone wins
    pub fn from_predictions(predictions: impl IntoIterator<Item = ZonePrediction>) -> Self {
        let values = predictions
            .into_iter()
            .map(|prediction| (prediction.zone, prediction.predicted_value))
            .collect();
        Self { values }
    }

    /// Predicted score, 0 for zones without a prediction
    pub fn value_for(&self, zone: &str) -> f32 {
        self.values.get(zone).copied().unwrap_or(0.0)
    }

    pub fn level_for(&self, zone: &str) -> BusynessLevel {
        BusynessLevel::from_value(self.value_for(zone))
    }

    /// All predicted zones with their level, sorted by zone name
    pub fn levels(&self) -> Vec<(&str, f32, BusynessLevel)> {
        let mut levels: Vec<_> = self
            .values
            .iter()
            .map(|(zone, &value)| (zone.as_str(), value, BusynessLevel::from_value(value)))
            .collect();
        levels.sort_by(|a, b| a.0.cmp(b.0));
        levels
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
