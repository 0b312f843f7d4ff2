use crate::cmd::CommandError;
use crate::{DataType, SharedStoreBase};

/// The LPUSH operation
#[derive(Debug)]
pub struct Lpush {
    // The key to push at
    key: String,

    // The elements to push
    elements: Vec<String>,
}

impl Lpush {
    /// Create a new `Lpush` command
    pub fn new(key: String, elements: Vec<String>) -> Lpush {
        Lpush { key, elements }
    }

    /// Execute the `Lpush` command
    ///
    /// Lazily creates an empty list when the key is absent, then
    /// prepends the elements as one block, in the order they were
    /// passed, ahead of everything already in the list. The real
    /// protocol reverses multi-value pushes element by element; the
    /// client being emulated does not, and that deviation is preserved
    /// here. An empty element list is accepted and still materializes
    /// the list at the key.
    pub fn execute(self, shared_store: &dyn SharedStoreBase) -> Result<(), CommandError> {
        let existing = match shared_store.get(self.key.clone()) {
            None => Vec::new(),
            Some(DataType::List(list)) => list,
            Some(_) => {
                return Err(CommandError::TypeMismatch("key is not a list".to_string()));
            }
        };

        let mut list = self.elements;
        list.extend(existing);
        shared_store.set(self.key, DataType::List(list));

        Ok(())
    }
}
