use crate::cmd::CommandError;
use crate::{DataType, SharedStoreBase};

/// The RPUSH operation
#[derive(Debug)]
pub struct Rpush {
    // The key to push at
    key: String,

    // The elements to push
    elements: Vec<String>,
}

impl Rpush {
    /// Create a new `Rpush` command
    pub fn new(key: String, elements: Vec<String>) -> Rpush {
        Rpush { key, elements }
    }

    /// Execute the `Rpush` command
    ///
    /// The mirror image of `Lpush`: lazily creates an empty list when
    /// the key is absent, then appends the elements, in the order they
    /// were passed, after everything already in the list.
    pub fn execute(self, shared_store: &dyn SharedStoreBase) -> Result<(), CommandError> {
        let mut list = match shared_store.get(self.key.clone()) {
            None => Vec::new(),
            Some(DataType::List(list)) => list,
            Some(_) => {
                return Err(CommandError::TypeMismatch("key is not a list".to_string()));
            }
        };

        list.extend(self.elements);
        shared_store.set(self.key, DataType::List(list));

        Ok(())
    }
}
