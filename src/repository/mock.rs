use mockall::mock;

use super::{
    Authenticator, CatalogResult, CatalogSource, DurableStorage, NavigationError, Navigator,
    StorageResult,
};
use crate::domain::product::Product;

mock! {
    pub DurableStorage {}

    impl DurableStorage for DurableStorage {
        fn get(&self, key: &str) -> StorageResult<Option<String>>;
        fn set(&self, key: &str, value: &str) -> StorageResult<()>;
        fn remove(&self, key: &str) -> StorageResult<()>;
    }
}

mock! {
    pub CatalogSource {}

    impl CatalogSource for CatalogSource {
        fn load_products(&self) -> CatalogResult<Vec<Product>>;
    }
}

mock! {
    pub Navigator {}

    impl Navigator for Navigator {
        fn navigate(&self, path: &str) -> Result<(), NavigationError>;
    }
}

mock! {
    pub Authenticator {}

    impl Authenticator for Authenticator {
        fn authenticate(&self, email: &str, password: &str) -> bool;
    }
}
