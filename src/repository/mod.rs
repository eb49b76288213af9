use thiserror::Error;

use crate::domain::product::Product;

pub mod auth;
pub mod catalog;
pub mod file;
pub mod memory;
pub mod navigation;

#[cfg(test)]
pub mod mock;

pub use auth::StaticCredentials;
pub use catalog::{CsvCatalog, SyntheticCatalog};
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use navigation::LogNavigator;

/// Storage key holding the serialized wishlist.
pub const WISHLIST_KEY: &str = "wishlist";
/// Storage key holding the login flag.
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

/// Errors raised by durable storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage contents could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("storage lock poisoned")]
    Poisoned,
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised while loading a product catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog row {row} is invalid: {reason}")]
    InvalidRow { row: usize, reason: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised by a navigation backend.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NavigationError {
    #[error("navigation to `{path}` failed: {reason}")]
    Failed { path: String, reason: String },
}

/// Key-value string store surviving reloads, with last-write-wins semantics.
pub trait DurableStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Source of the full product list shown on a browsing page.
pub trait CatalogSource {
    fn load_products(&self) -> CatalogResult<Vec<Product>>;
}

/// Redirects the user between application pages.
pub trait Navigator {
    fn navigate(&self, path: &str) -> Result<(), NavigationError>;
}

/// Checks a credential pair.
pub trait Authenticator {
    fn authenticate(&self, email: &str, password: &str) -> bool;
}
