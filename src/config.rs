use std::env;
use std::path::PathBuf;

use crate::domain::department::Department;
use crate::repository::{CatalogResult, CatalogSource, CsvCatalog, SyntheticCatalog};

const DEFAULT_STORAGE_PATH: &str = "storefront.json";
const DEFAULT_CATALOG_SIZE: i32 = 100;
const DEFAULT_CATALOG_SEED: u64 = 42;

/// Runtime settings read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// File backing the durable storage.
    pub storage_path: PathBuf,
    /// CSV catalog to load instead of the generated one.
    pub catalog_csv: Option<PathBuf>,
    /// Number of generated products.
    pub catalog_size: i32,
    /// Seed of the generated catalog.
    pub catalog_seed: u64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            catalog_csv: None,
            catalog_size: DEFAULT_CATALOG_SIZE,
            catalog_seed: DEFAULT_CATALOG_SEED,
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    /// Missing or unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let storage_path = lookup("STOREFRONT_STORAGE_PATH")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.storage_path);
        let catalog_csv = lookup("STOREFRONT_CATALOG_CSV")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        let catalog_size = lookup("STOREFRONT_CATALOG_SIZE")
            .and_then(|value| value.parse::<i32>().ok())
            .filter(|size| *size >= 0)
            .unwrap_or(defaults.catalog_size);
        let catalog_seed = lookup("STOREFRONT_CATALOG_SEED")
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(defaults.catalog_seed);

        Self {
            storage_path,
            catalog_csv,
            catalog_size,
            catalog_seed,
        }
    }

    /// Catalog served on `department`'s page. A configured CSV replaces the
    /// generated catalogs of every department.
    pub fn catalog(&self, department: Department) -> CatalogResult<Box<dyn CatalogSource>> {
        match &self.catalog_csv {
            Some(path) => Ok(Box::new(CsvCatalog::from_path(path)?)),
            None => Ok(Box::new(SyntheticCatalog::for_department(
                department,
                self.catalog_size,
                self.catalog_seed,
            ))),
        }
    }
}
