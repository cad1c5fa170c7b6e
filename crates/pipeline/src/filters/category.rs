//! Exact-match filters on the categorical labels of a restaurant.
//!
//! Cuisine, price and zone all behave the same way: the restaurant's label
//! must equal the selected one, byte for byte. A restaurant without the
//! label never matches.

use crate::traits::Filter;
use data_loader::Restaurant;

/// Which label a CategoryFilter looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Cuisine,
    Price,
    Zone,
}

impl Category {
    fn label(self, restaurant: &Restaurant) -> Option<&str> {
        match self {
            Category::Cuisine => restaurant.primary_cuisine.as_deref(),
            Category::Price => restaurant.price.as_deref(),
            Category::Zone => restaurant.zone.as_deref(),
        }
    }
}

/// Keeps restaurants whose label for `category` equals `value`.
pub struct CategoryFilter {
    category: Category,
    value: String,
}

impl CategoryFilter {
    pub fn new(category: Category, value: impl Into<String>) -> Self {
        Self {
            category,
            value: value.into(),
        }
    }

    pub fn cuisine(value: impl Into<String>) -> Self {
        Self::new(Category::Cuisine, value)
    }

    pub fn price(value: impl Into<String>) -> Self {
        Self::new(Category::Price, value)
    }

    pub fn zone(value: impl Into<String>) -> Self {
        Self::new(Category::Zone, value)
    }
}

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        match self.category {
            Category::Cuisine => "CuisineFilter",
            Category::Price => "PriceFilter",
            Category::Zone => "ZoneFilter",
        }
    }

    fn matches(&self, restaurant: &Restaurant) -> bool {
        self.category.label(restaurant) == Some(self.value.as_str())
    }
}
