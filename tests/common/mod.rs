//! Helpers for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;

use f2h_storefront::config::StorefrontConfig;
use f2h_storefront::repository::FileStorage;

/// Temporary storage file removed together with its directory on drop.
pub struct TestStorage {
    dir: TempDir,
}

impl TestStorage {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory.");
        TestStorage { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("storefront.json")
    }

    /// A fresh handle, as a reloaded page would open it.
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.path())
    }

    #[allow(dead_code)]
    pub fn config(&self) -> StorefrontConfig {
        StorefrontConfig {
            storage_path: self.path(),
            ..StorefrontConfig::default()
        }
    }
}
