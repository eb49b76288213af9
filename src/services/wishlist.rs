use std::collections::HashSet;

use crate::domain::product::Product;
use crate::repository::{DurableStorage, WISHLIST_KEY};
use crate::services::ServiceResult;

/// Session-wide set of wishlisted products, written through to durable storage.
///
/// Entries keep insertion order and never share an `id`. Every mutation is
/// persisted before it returns; when the write fails the in-memory change is
/// rolled back so memory and storage never diverge.
#[derive(Debug)]
pub struct WishlistStore<S: DurableStorage> {
    storage: S,
    items: Vec<Product>,
}

impl<S: DurableStorage> WishlistStore<S> {
    /// Rehydrate the wishlist from `storage`.
    ///
    /// Unreadable or corrupt contents are logged and replaced by an empty
    /// wishlist; this never fails.
    pub fn initialize(storage: S) -> Self {
        let items = match storage.get(WISHLIST_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Product>>(&raw) {
                Ok(items) => dedup_by_id(items),
                Err(err) => {
                    log::error!("Error loading wishlist: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                log::error!("Error reading wishlist from storage: {err}");
                Vec::new()
            }
        };

        Self { storage, items }
    }

    /// Add `product` unless an entry with the same id exists.
    ///
    /// Returns whether the wishlist changed.
    pub fn add(&mut self, product: Product) -> ServiceResult<bool> {
        if self.contains(product.id) {
            return Ok(false);
        }

        let id = product.id;
        self.items.push(product);
        if let Err(err) = self.persist() {
            log::error!("Failed to persist wishlist after adding product {id}: {err}");
            self.items.pop();
            return Err(err);
        }

        Ok(true)
    }

    /// Remove the entry with `product_id` if present.
    ///
    /// Returns whether the wishlist changed.
    pub fn remove(&mut self, product_id: i32) -> ServiceResult<bool> {
        let Some(position) = self.items.iter().position(|item| item.id == product_id) else {
            return Ok(false);
        };

        let removed = self.items.remove(position);
        if let Err(err) = self.persist() {
            log::error!("Failed to persist wishlist after removing product {product_id}: {err}");
            self.items.insert(position, removed);
            return Err(err);
        }

        Ok(true)
    }

    /// Add `product` when absent, remove it otherwise.
    ///
    /// Returns whether the product is wishlisted afterwards.
    pub fn toggle(&mut self, product: Product) -> ServiceResult<bool> {
        if self.contains(product.id) {
            self.remove(product.id)?;
            Ok(false)
        } else {
            self.add(product)?;
            Ok(true)
        }
    }

    pub fn contains(&self, product_id: i32) -> bool {
        self.items.iter().any(|item| item.id == product_id)
    }

    /// Snapshot of the entries in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every entry and the persisted copy. Used on logout.
    pub fn teardown(&mut self) -> ServiceResult<()> {
        self.storage.remove(WISHLIST_KEY)?;
        self.items.clear();
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&self) -> ServiceResult<()> {
        let raw = serde_json::to_string(&self.items)?;
        self.storage.set(WISHLIST_KEY, &raw)?;
        log::debug!("Persisted wishlist with {} entries", self.items.len());
        Ok(())
    }
}

fn dedup_by_id(items: Vec<Product>) -> Vec<Product> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::NewProduct;
    use crate::repository::mock::MockDurableStorage;
    use crate::repository::{MemoryStorage, StorageError};
    use crate::services::ServiceError;

    fn product(id: i32) -> Product {
        NewProduct::new(id, format!("Product {id}"), 20.0)
            .with_categories("Red", "Jeans", "Seller A")
            .build()
    }

    fn ids(store: &WishlistStore<MemoryStorage>) -> Vec<i32> {
        store.list().iter().map(|item| item.id).collect()
    }

    #[test]
    fn starts_empty_without_stored_value() {
        let store = WishlistStore::initialize(MemoryStorage::new());

        assert!(store.is_empty());
    }

    #[test]
    fn add_then_remove_round_trip() {
        let mut store = WishlistStore::initialize(MemoryStorage::new());

        assert!(store.add(product(5)).expect("add"));
        assert!(store.contains(5));

        assert!(store.remove(5).expect("remove"));
        assert!(!store.contains(5));
    }

    #[test]
    fn add_and_remove_are_idempotent() {
        let mut store = WishlistStore::initialize(MemoryStorage::new());

        assert!(store.add(product(1)).expect("add"));
        assert!(!store.add(product(1)).expect("second add"));
        assert_eq!(ids(&store), vec![1]);

        assert!(store.remove(1).expect("remove"));
        assert!(!store.remove(1).expect("second remove"));
        assert!(store.is_empty());
    }

    #[test]
    fn list_is_a_snapshot_in_insertion_order() {
        let mut store = WishlistStore::initialize(MemoryStorage::new());
        store.add(product(3)).expect("add");
        store.add(product(1)).expect("add");

        let snapshot = store.list();
        store.add(product(2)).expect("add");

        assert_eq!(snapshot.len(), 2);
        assert_eq!(ids(&store), vec![3, 1, 2]);
    }

    #[test]
    fn mutations_write_through_to_storage() {
        let storage = MemoryStorage::new();
        let mut store = WishlistStore::initialize(storage.clone());

        store.add(product(8)).expect("add");
        store.add(product(9)).expect("add");
        store.remove(8).expect("remove");

        let raw = storage
            .get(WISHLIST_KEY)
            .expect("get")
            .expect("wishlist should be stored");
        let stored: Vec<Product> = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(stored, vec![product(9)]);
    }

    #[test]
    fn corrupt_storage_yields_empty_wishlist() {
        let storage = MemoryStorage::new().with_value(WISHLIST_KEY, "[{\"id\": oops");

        let store = WishlistStore::initialize(storage);

        assert!(store.is_empty());
    }

    #[test]
    fn storage_read_failure_yields_empty_wishlist() {
        let mut storage = MockDurableStorage::new();
        storage
            .expect_get()
            .returning(|_| Err(StorageError::Poisoned));

        let store = WishlistStore::initialize(storage);

        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_ids_in_storage_are_collapsed() {
        let raw = serde_json::to_string(&vec![product(1), product(2), product(1)]).expect("json");
        let storage = MemoryStorage::new().with_value(WISHLIST_KEY, raw);

        let store = WishlistStore::initialize(storage);

        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn failed_write_rolls_back_add() {
        let mut storage = MockDurableStorage::new();
        storage.expect_get().returning(|_| Ok(None));
        storage
            .expect_set()
            .times(1)
            .withf(|key, _| key == WISHLIST_KEY)
            .returning(|_, _| Err(StorageError::Poisoned));

        let mut store = WishlistStore::initialize(storage);
        let result = store.add(product(4));

        assert!(matches!(result, Err(ServiceError::Storage(_))));
        assert!(!store.contains(4));
    }

    #[test]
    fn failed_write_rolls_back_remove_in_place() {
        let raw = serde_json::to_string(&vec![product(1), product(2), product(3)]).expect("json");
        let mut storage = MockDurableStorage::new();
        storage
            .expect_get()
            .returning(move |_| Ok(Some(raw.clone())));
        storage
            .expect_set()
            .returning(|_, _| Err(StorageError::Poisoned));

        let mut store = WishlistStore::initialize(storage);
        assert!(store.remove(2).is_err());

        let order: Vec<i32> = store.list().iter().map(|item| item.id).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn noop_mutations_do_not_write() {
        let mut storage = MockDurableStorage::new();
        storage.expect_get().returning(|_| Ok(None));
        storage.expect_set().times(1).returning(|_, _| Ok(()));

        let mut store = WishlistStore::initialize(storage);
        store.add(product(1)).expect("add");
        store.add(product(1)).expect("repeat add");
        store.remove(42).expect("remove missing");
    }

    #[test]
    fn toggle_flips_membership() {
        let mut store = WishlistStore::initialize(MemoryStorage::new());

        assert!(store.toggle(product(7)).expect("toggle on"));
        assert!(store.contains(7));
        assert!(!store.toggle(product(7)).expect("toggle off"));
        assert!(!store.contains(7));
    }

    #[test]
    fn teardown_clears_memory_and_storage() {
        let storage = MemoryStorage::new();
        let mut store = WishlistStore::initialize(storage.clone());
        store.add(product(1)).expect("add");

        store.teardown().expect("teardown");

        assert!(store.is_empty());
        assert_eq!(storage.get(WISHLIST_KEY).expect("get"), None);
    }
}
