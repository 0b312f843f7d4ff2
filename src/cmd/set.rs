use crate::{DataType, SharedStoreBase};

/// The classic SET operation
#[derive(Debug)]
pub struct Set {
    // The key to assign the value to
    key: String,

    // The value to assign
    value: String,
}

impl Set {
    /// Create a new `Set` command
    pub fn new(key: String, value: String) -> Set {
        Set { key, value }
    }

    /// Execute the `Set` command
    ///
    /// Unconditionally overwrites the key with a string value,
    /// regardless of the variant stored there before. No expiry, no
    /// NX/XX conditions, and no way to fail.
    pub fn execute(self, shared_store: &dyn SharedStoreBase) {
        shared_store.set(self.key, DataType::String(self.value));
    }
}
