use crate::SharedStoreBase;
use glob::Pattern;

/// The KEYS operation
#[derive(Debug)]
pub struct Keys {
    // The glob pattern to match key names against
    pattern: String,
}

impl Keys {
    /// Create a new `Keys` command
    pub fn new(pattern: String) -> Keys {
        Keys { pattern }
    }

    /// Execute the `Keys` command
    ///
    /// Returns every key whose name matches the glob pattern, in store
    /// iteration order. Matching is on the key name only; the stored
    /// variant is irrelevant. This command never errors.
    ///
    /// # Panics
    ///
    /// An unparseable glob is a caller-contract violation, so it panics
    /// at the call site rather than surfacing through the completion.
    pub fn execute(self, shared_store: &dyn SharedStoreBase) -> Vec<String> {
        let pattern = Pattern::new(&self.pattern).expect("pattern must be a valid glob");

        shared_store
            .key_names()
            .into_iter()
            .filter(|key| pattern.matches(key))
            .collect()
    }
}
