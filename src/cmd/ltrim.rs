use crate::cmd::{list_window, CommandError};
use crate::{DataType, SharedStoreBase};

/// The LTRIM operation
#[derive(Debug)]
pub struct Ltrim {
    // The key to trim, which represents a list
    key: String,

    // The min index (inclusive)
    min: i64,

    // The max index (exclusive)
    max: i64,
}

impl Ltrim {
    /// Create a new `Ltrim` command
    pub fn new(key: String, min: i64, max: i64) -> Ltrim {
        Ltrim { key, min, max }
    }

    /// Execute the `Ltrim` command
    ///
    /// Replaces the stored list with the half-open window `[min, max)`
    /// of its current contents. Two quirks of the emulated client are
    /// preserved on purpose:
    ///
    /// - `max` gets none of the end normalization `Lrange` applies, so
    ///   `ltrim(key, 0, -1)` drops the last element;
    /// - the trimmed result is written back even when the key was
    ///   absent, so trimming a missing key leaves an empty list there.
    pub fn execute(self, shared_store: &dyn SharedStoreBase) -> Result<(), CommandError> {
        let list = match shared_store.get(self.key.clone()) {
            None => Vec::new(),
            Some(DataType::List(list)) => list,
            Some(_) => {
                return Err(CommandError::TypeMismatch("key is not a list".to_string()));
            }
        };

        let (from, to) = list_window(list.len(), self.min, Some(self.max));
        shared_store.set(self.key, DataType::List(list[from..to].to_vec()));

        Ok(())
    }
}
