//! Filter requiring a set of review aspects.
//!
//! A restaurant passes only if every selected aspect label shows up in its
//! own aspect list. Polarity is ignored: selecting "Service" keeps both a
//! positive and a negative "Service" mention.

use crate::traits::Filter;
use data_loader::Restaurant;
use std::collections::BTreeSet;

/// Keeps restaurants carrying all of the required aspect labels.
///
/// ## Algorithm
/// For each required label, scan the restaurant's aspects for a match
/// (existential); AND the results together.
pub struct AspectFilter {
    required: BTreeSet<String>,
}

impl AspectFilter {
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for AspectFilter {
    fn name(&self) -> &str {
        "AspectFilter"
    }

    fn matches(&self, restaurant: &Restaurant) -> bool {
        self.required
            .iter()
            .all(|label| restaurant.has_aspect(label))
    }
}
