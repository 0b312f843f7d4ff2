use crate::{DataType, SharedStoreBase};

/// The HGET operation
#[derive(Debug)]
pub struct Hget {
    // The key that holds the hash
    key: String,

    // The field to look up within the hash
    field: String,
}

impl Hget {
    /// Create a new `Hget` command
    pub fn new(key: String, field: String) -> Hget {
        Hget { key, field }
    }

    /// Execute the `Hget` command
    ///
    /// Returns the value stored at `field`, or `None` if the key is
    /// absent, the field is missing, or the key holds something other
    /// than a hash. The non-hash case is deliberately "no value" rather
    /// than a type error; `Get` is stricter. Keep it that way.
    pub fn execute(self, shared_store: &dyn SharedStoreBase) -> Option<String> {
        match shared_store.get(self.key) {
            Some(DataType::Hash(hash)) => hash.get(&self.field).cloned(),
            _ => None,
        }
    }
}
