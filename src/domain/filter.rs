use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use crate::domain::product::Product;

/// Lower bound of the price slider.
pub const DEFAULT_MIN_PRICE: f64 = 0.0;
/// Upper bound of the price slider.
pub const DEFAULT_MAX_PRICE: f64 = 1000.0;

/// Errors raised while building a filter selection.
#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("invalid price range {min}..={max}")]
    InvalidPriceRange { min: f64, max: f64 },
}

/// Inclusive price bounds. Always satisfies `0 <= min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    /// Build a range, rejecting negative, non-finite or inverted bounds.
    pub fn new(min: f64, max: f64) -> Result<Self, FilterError> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(FilterError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether `price` falls inside the bounds, both ends included.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    /// Move the upper bound, pulling the lower bound down when it would cross.
    pub fn with_max(self, max: f64) -> Result<Self, FilterError> {
        if max.is_finite() && max >= 0.0 {
            Ok(Self {
                min: self.min.min(max),
                max,
            })
        } else {
            Err(FilterError::InvalidPriceRange { min: self.min, max })
        }
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_PRICE,
            max: DEFAULT_MAX_PRICE,
        }
    }
}

/// Current combination of attribute constraints applied to a product list.
///
/// Empty sets and a zero rating impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterSpec {
    pub colors: BTreeSet<String>,
    pub price_range: PriceRange,
    pub types: BTreeSet<String>,
    pub rating: u8,
    pub sellers: BTreeSet<String>,
}

impl FilterSpec {
    /// Construct the open filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict results to the given colors.
    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict results to the given product types.
    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict results to the given sellers.
    pub fn sellers<I, S>(mut self, sellers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sellers = sellers.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict results to prices inside `range`.
    pub fn price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    /// Require at least `rating` stars.
    pub fn min_rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }

    /// Whether `product` passes every active predicate.
    pub fn matches(&self, product: &Product) -> bool {
        member_or_open(&self.colors, &product.color)
            && self.price_range.contains(product.price)
            && member_or_open(&self.types, &product.product_type)
            && product.rating >= self.rating
            && member_or_open(&self.sellers, &product.seller)
    }
}

fn member_or_open(set: &BTreeSet<String>, value: &str) -> bool {
    set.is_empty() || set.contains(value)
}
