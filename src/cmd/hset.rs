use crate::cmd::CommandError;
use crate::{DataType, SharedStoreBase};
use std::collections::HashMap;

/// The HSET operation
#[derive(Debug)]
pub struct Hset {
    // The key that holds (or will hold) the hash
    key: String,

    // The field to set within the hash
    field: String,

    // The value to assign to the field
    value: String,
}

impl Hset {
    /// Create a new `Hset` command
    pub fn new(key: String, field: String, value: String) -> Hset {
        Hset { key, field, value }
    }

    /// Execute the `Hset` command
    ///
    /// Lazily creates an empty hash when the key is absent, then sets
    /// `field` within it, leaving any other fields untouched. If the key
    /// holds a non-hash variant the store is left exactly as it was.
    pub fn execute(self, shared_store: &dyn SharedStoreBase) -> Result<(), CommandError> {
        let mut hash = match shared_store.get(self.key.clone()) {
            None => HashMap::new(),
            Some(DataType::Hash(hash)) => hash,
            Some(_) => {
                return Err(CommandError::TypeMismatch("key is not a hash".to_string()));
            }
        };

        hash.insert(self.field, self.value);
        shared_store.set(self.key, DataType::Hash(hash));

        Ok(())
    }
}
