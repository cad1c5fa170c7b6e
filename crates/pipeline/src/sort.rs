//! Sort keys and their comparators.
//!
//! Every comparator is used with a stable sort, so restaurants that compare
//! equal keep their filtered order.

use crate::error::SelectionError;
use data_loader::Restaurant;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// How the visible list is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Name A-Z, case-insensitive, missing names first
    Alphabetical,
    /// Overall rating, highest first, missing counts as 0
    Rating,
    Cuisine,
    Zone,
    /// Raw price label, compared as text
    Price,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Alphabetical,
        SortKey::Rating,
        SortKey::Cuisine,
        SortKey::Zone,
        SortKey::Price,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Alphabetical => "alphabetical",
            SortKey::Rating => "rating",
            SortKey::Cuisine => "cuisine",
            SortKey::Zone => "zone",
            SortKey::Price => "price",
        }
    }

    /// Compare two restaurants under this key
    pub fn compare(&self, a: &Restaurant, b: &Restaurant) -> Ordering {
        match self {
            SortKey::Alphabetical => caseless(a.name.as_deref(), b.name.as_deref()),
            SortKey::Rating => {
                let a = a.overall_rating.unwrap_or(0.0);
                let b = b.overall_rating.unwrap_or(0.0);
                b.total_cmp(&a)
            }
            SortKey::Cuisine => {
                caseless(a.primary_cuisine.as_deref(), b.primary_cuisine.as_deref())
            }
            SortKey::Zone => caseless(a.zone.as_deref(), b.zone.as_deref()),
            SortKey::Price => a
                .price
                .as_deref()
                .unwrap_or("")
                .cmp(b.price.as_deref().unwrap_or("")),
        }
    }
}

/// Lexical compare ignoring case; a missing value reads as the empty string
/// and so sorts first.
///
/// Plain per-char lowercasing, no locale collation: names equal up to case
/// tie, and the stable sort keeps their store order.
fn caseless(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.unwrap_or("").chars().flat_map(char::to_lowercase);
    let b = b.unwrap_or("").chars().flat_map(char::to_lowercase);
    a.cmp(b)
}

/// Stable in-place sort of restaurants by `key`
pub fn sort_restaurants(restaurants: &mut [Arc<Restaurant>], key: SortKey) {
    restaurants.sort_by(|a, b| key.compare(a, b));
}

impl FromStr for SortKey {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SelectionError::UnknownSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
