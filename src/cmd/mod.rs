mod keys;
pub use keys::Keys;

mod get;
pub use get::Get;

mod set;
pub use set::Set;

mod hget;
pub use hget::Hget;

mod hset;
pub use hset::Hset;

mod lrange;
pub use lrange::Lrange;

mod lpush;
pub use lpush::Lpush;

mod rpush;
pub use rpush::Rpush;

mod ltrim;
pub use ltrim::Ltrim;

use std::fmt;

/// Data-shape conflict: the key exists with a variant that is
/// incompatible with the requested command. The store is left unchanged
/// whenever this is returned.
///
/// Caller-contract violations (for example an invalid glob pattern) are
/// not represented here; those panic synchronously at the call site
/// instead of travelling through a completion.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    TypeMismatch(String),
}

impl std::error::Error for CommandError {}

impl fmt::Display for CommandError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CommandError::TypeMismatch(msg) => msg.fmt(fmt),
        }
    }
}

/// Resolve `[from, to)` bounds against a list of `len` elements the way
/// the emulated client resolves them: a negative index counts back from
/// the end (clamped to zero), a positive index clamps to `len`, and a
/// `to` of `None` means "through the end". An inverted range yields an
/// empty window.
pub(crate) fn list_window(len: usize, from: i64, to: Option<i64>) -> (usize, usize) {
    let resolve = |index: i64| -> usize {
        if index < 0 {
            (len as i64 + index).max(0) as usize
        } else {
            (index as usize).min(len)
        }
    };

    let start = resolve(from);
    let stop = match to {
        Some(index) => resolve(index),
        None => len,
    };

    (start, stop.max(start))
}
