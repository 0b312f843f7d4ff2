use mockall::automock;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

/// Raw slot access to the backing dataset.
///
/// This is deliberately dumb: read a slot, overwrite a slot, enumerate
/// keys. All command semantics (lazy creation, type checks, list
/// slicing) live in the `cmd` module, which runs against this trait so
/// the store can be mocked out in unit tests.
///
/// Cannot have `mockall` as a dev-dependency and also import the Mocked
/// attr in the tests/ dir: the library itself is not compiled in test
/// mode for integration tests, so a cfg_attr would disable automock.
///
/// Refer to:
/// https://stackoverflow.com/q/76831451
/// https://github.com/rust-lang/cargo/issues/2911
///
#[automock]
pub trait SharedStoreBase: Send + Sync {
    /// Read the value at `key`, cloning it out. `None` if absent.
    fn get(&self, key: String) -> Option<DataType>;

    /// Overwrite the slot at `key`, regardless of the prior variant.
    fn set(&self, key: String, value: DataType);

    /// Every key currently present, in store iteration order
    /// (unordered with respect to insertion).
    fn key_names(&self) -> Vec<String>;
}

/// Shared Data Store across all the connections minted by a pool.
///
/// Cloning `SharedStore` only increments an atomic reference count,
/// It does not copy it deeply, but rather shallowly.
///
#[derive(Debug, Clone)]
pub struct SharedStore {
    /// An Arc to provide shared ownership across every handle
    ///
    /// Invoking `Clone` on Arc produces a new pointer to the
    /// `GuardedDataStore` value in the heap.
    ///
    shared: Arc<GuardedDataStore>,
}

#[derive(Debug)]
struct GuardedDataStore {
    /// The dataset is guarded by a `Mutex` to prevent concurrent access.
    ///
    /// The documented execution model is single-threaded and
    /// cooperative, so the lock is never contended in practice; it is
    /// what keeps the shared handle sound if a test runs the mock on a
    /// multi-threaded runtime anyway. The critical section is small and
    /// contains no await points, so `std::sync::Mutex` is the right
    /// guard.
    ///
    data: Mutex<HashMap<String, DataType>>,
}

/// The supported data types which can be stored against a key.
///
/// A key maps to at most one variant at a time; commands that expect a
/// different variant than the stored one fail without mutating the
/// store.
#[derive(Debug, Clone, PartialEq)]
pub enum DataType {
    String(String),
    Hash(HashMap<String, String>),
    List(Vec<String>),
}

impl SharedStore {
    /// Create an empty store.
    pub fn new() -> SharedStore {
        SharedStore::seeded(HashMap::new())
    }

    /// Create a store pre-populated with an existing dataset.
    pub fn seeded(data: HashMap<String, DataType>) -> SharedStore {
        let shared = Arc::new(GuardedDataStore {
            data: Mutex::new(data),
        });
        SharedStore { shared }
    }
}

impl Default for SharedStore {
    fn default() -> SharedStore {
        SharedStore::new()
    }
}

impl SharedStoreBase for SharedStore {
    fn get(&self, key: String) -> Option<DataType> {
        let mutex = self.shared.data.lock().unwrap();
        mutex.get(&key).cloned()
    }

    fn set(&self, key: String, value: DataType) {
        let mut mutex = self.shared.data.lock().unwrap();
        mutex.insert(key, value);
    }

    fn key_names(&self) -> Vec<String> {
        let mutex = self.shared.data.lock().unwrap();
        mutex.keys().cloned().collect()
    }
}
