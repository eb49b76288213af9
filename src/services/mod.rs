use thiserror::Error;

use crate::repository::{CatalogError, NavigationError, StorageError};

pub mod catalog;
pub mod session;
pub mod wishlist;

/// Errors surfaced by storefront services.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("{0}")]
    Form(String),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("product {0} not found")]
    ProductNotFound(i32),
    #[error("navigation error: {0}")]
    Navigation(#[from] NavigationError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
