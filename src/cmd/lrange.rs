use crate::cmd::{list_window, CommandError};
use crate::{DataType, SharedStoreBase};

/// The LRANGE operation
#[derive(Debug)]
pub struct Lrange {
    // The key to query, which represents a list
    key: String,

    // The start index
    start: i64,

    // The stop index (exclusive)
    stop: i64,
}

impl Lrange {
    /// Create a new `Lrange` command
    pub fn new(key: String, start: i64, stop: i64) -> Lrange {
        Lrange { key, start, stop }
    }

    /// Execute the `Lrange` command
    ///
    /// Returns the elements in the half-open window `[start, stop)`. An
    /// absent key reads as an empty list and nothing is written back.
    ///
    /// A `stop` of `-1`, or one past the end of the list, is normalized
    /// to "through the end". Note the exclusive upper bound: this
    /// matches the client being emulated, not the inclusive convention
    /// of the real protocol.
    pub fn execute(self, shared_store: &dyn SharedStoreBase) -> Result<Vec<String>, CommandError> {
        let list = match shared_store.get(self.key) {
            None => Vec::new(),
            Some(DataType::List(list)) => list,
            Some(_) => {
                return Err(CommandError::TypeMismatch("key is not a list".to_string()));
            }
        };

        let stop = if self.stop == -1 || self.stop >= list.len() as i64 {
            None
        } else {
            Some(self.stop)
        };

        let (from, to) = list_window(list.len(), self.start, stop);
        Ok(list[from..to].to_vec())
    }
}
