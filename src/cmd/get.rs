use crate::cmd::CommandError;
use crate::{DataType, SharedStoreBase};

/// The classic GET operation
#[derive(Debug)]
pub struct Get {
    // The key to search for
    key: String,
}

impl Get {
    /// Create a new `Get` command
    pub fn new(key: String) -> Get {
        Get { key }
    }

    /// Execute the `Get` command
    ///
    /// Get the value of key. If the key does not exist then `None` is
    /// returned. A key holding a hash or a list is a hard error here,
    /// unlike `Hget` which swallows the mismatch.
    pub fn execute(self, shared_store: &dyn SharedStoreBase) -> Result<Option<String>, CommandError> {
        match shared_store.get(self.key) {
            None => Ok(None),
            Some(DataType::String(s)) => Ok(Some(s)),
            Some(_) => Err(CommandError::TypeMismatch(
                "key is not a string".to_string(),
            )),
        }
    }
}
