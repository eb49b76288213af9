use serde::Deserialize;
use thiserror::Error;

use crate::domain::filter::{
    DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, FilterError, FilterSpec, PriceRange,
};
use crate::domain::product::MAX_RATING;

pub type BrowseQueryResult<T> = Result<T, BrowseQueryError>;

/// Errors raised while parsing a browse query string.
#[derive(Debug, Error)]
pub enum BrowseQueryError {
    #[error("malformed query string: {0}")]
    Query(#[from] serde_qs::Error),
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error("rating {0} is above the maximum of 5")]
    InvalidRating(u8),
}

/// Filter selection and page encoded as a query string, for example
/// `colors[0]=Red&types[0]=Jeans&price_max=500&rating=3&page=2`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BrowseQuery {
    pub colors: Vec<String>,
    pub types: Vec<String>,
    pub sellers: Vec<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub rating: Option<u8>,
    pub page: Option<usize>,
}

impl BrowseQuery {
    pub fn parse(query: &str) -> BrowseQueryResult<Self> {
        Ok(serde_qs::from_str(query.trim_start_matches('?'))?)
    }

    /// Validate the selection and split it into a filter and a requested page.
    pub fn into_filter(self) -> BrowseQueryResult<(FilterSpec, usize)> {
        let rating = self.rating.unwrap_or(0);
        if rating > MAX_RATING {
            return Err(BrowseQueryError::InvalidRating(rating));
        }

        let range = PriceRange::new(
            self.price_min.unwrap_or(DEFAULT_MIN_PRICE),
            self.price_max.unwrap_or(DEFAULT_MAX_PRICE),
        )?;

        let filter = FilterSpec::new()
            .colors(self.colors)
            .types(self.types)
            .sellers(self.sellers)
            .price_range(range)
            .min_rating(rating);

        Ok((filter, self.page.unwrap_or(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_the_open_filter() {
        let (filter, page) = BrowseQuery::parse("")
            .expect("parse")
            .into_filter()
            .expect("valid");

        assert_eq!(filter, FilterSpec::new());
        assert_eq!(page, 1);
    }

    #[test]
    fn parses_multi_select_fields() {
        let query = BrowseQuery::parse(
            "?colors[0]=Red&colors[1]=Blue&types[0]=Jeans&sellers[0]=Seller%20A&price_max=500&rating=3&page=2",
        )
        .expect("parse");

        let (filter, page) = query.into_filter().expect("valid");

        assert_eq!(page, 2);
        assert_eq!(filter.rating, 3);
        assert_eq!(filter.price_range.max(), 500.0);
        assert!(filter.colors.contains("Red") && filter.colors.contains("Blue"));
        assert!(filter.types.contains("Jeans"));
        assert!(filter.sellers.contains("Seller A"));
    }

    #[test]
    fn rejects_inverted_price_range() {
        let query = BrowseQuery::parse("price_min=50&price_max=10").expect("parse");

        assert!(matches!(
            query.into_filter(),
            Err(BrowseQueryError::Filter(FilterError::InvalidPriceRange { .. }))
        ));
    }

    #[test]
    fn rejects_rating_above_five() {
        let query = BrowseQuery::parse("rating=6").expect("parse");

        assert!(matches!(
            query.into_filter(),
            Err(BrowseQueryError::InvalidRating(6))
        ));
    }
}
