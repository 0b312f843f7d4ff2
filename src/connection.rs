use crate::cmd::{CommandError, Get, Hget, Hset, Keys, Lpush, Lrange, Ltrim, Rpush, Set};
use crate::{Completion, SharedStore};
use log::debug;
use std::sync::Arc;
use tokio::sync::watch;

/// Lifecycle of a single connection handle.
///
/// Strictly monotonic: `Connecting → Connected → Ended`, no reverse
/// transitions, `Ended` terminal. The `Ord` derive follows declaration
/// order, which is what lets transitions be expressed as "upgrade
/// only".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConnectionState {
    Connecting,
    Connected,
    Ended,
}

/// A mock connection to a Redis-like backend.
///
/// The purpose of `MockRedis` is to stand in for a real pooled client
/// connection in tests: it carries no socket and owns no data, it only
/// forwards commands to the shared `SharedStore` and exposes the
/// lifecycle controls a pooling framework expects.
///
/// Every command method applies its store transition synchronously
/// (each command is one atomic transition, or a no-op on error) and
/// hands back a [`Completion`] that delivers the result on a later
/// scheduler turn, never within the issuing call.
///
/// Multiple connections minted from the same pool share a single store:
/// one backend dataset, many handles.
#[derive(Debug, Clone)]
pub struct MockRedis {
    // The dataset shared with every other handle from the same pool
    store: SharedStore,

    // Lifecycle channel; the sender is shared so clones and the
    // deferred connect task all observe one state machine
    state: Arc<watch::Sender<ConnectionState>>,
}

impl MockRedis {
    /// Create a handle over an existing store, in the `Connecting`
    /// state, without driving the lifecycle. Useful for exercising
    /// command behavior directly against a fresh or pre-seeded store.
    pub fn new(store: SharedStore) -> MockRedis {
        let (state, _) = watch::channel(ConnectionState::Connecting);
        MockRedis {
            store,
            state: Arc::new(state),
        }
    }

    /// Create a handle and schedule its `Connecting → Connected`
    /// transition on a later scheduler turn.
    ///
    /// The transition must never happen synchronously within this call:
    /// pooling frameworks attach their listeners immediately after
    /// construction and would otherwise miss it. A handle destroyed
    /// before the spawned task runs stays `Ended`; the task only
    /// upgrades from `Connecting`.
    ///
    /// Requires a Tokio runtime context.
    pub fn open(store: SharedStore) -> MockRedis {
        let conn = MockRedis::new(store);

        let state = conn.state.clone();
        tokio::spawn(async move {
            let promoted = state.send_if_modified(|s| {
                if *s == ConnectionState::Connecting {
                    *s = ConnectionState::Connected;
                    true
                } else {
                    false
                }
            });
            if promoted {
                debug!("connection promoted to Connected");
            }
        });

        conn
    }

    /// The current lifecycle state.
    pub fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    /// Subscribe to lifecycle transitions.
    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.state.subscribe()
    }

    /// Wait until the connection has reached `target` or moved past
    /// it (states only move forward, so a wait for `Connected` also
    /// returns on `Ended`). Returns the state observed.
    pub async fn wait_for_state(&self, target: ConnectionState) -> ConnectionState {
        let mut rx = self.state.subscribe();
        // The sender lives in `self`, so the channel cannot close while
        // this borrow is held. Copy the state out so the watch guard is
        // released before `rx` goes away.
        let state = *rx
            .wait_for(|s| *s >= target)
            .await
            .expect("state channel held open by the connection");
        state
    }

    /// Synchronously signal the `Ended` transition. Terminal; further
    /// calls are no-ops, and a pending `Connected` promotion is
    /// abandoned.
    pub fn destroy(&self) {
        let ended = self.state.send_if_modified(|s| {
            if *s != ConnectionState::Ended {
                *s = ConnectionState::Ended;
                true
            } else {
                false
            }
        });
        if ended {
            debug!("connection destroyed");
        }
    }

    /// No-op: the mock holds no OS resource to pin the event loop with.
    pub fn r#ref(&self) {}

    /// No-op counterpart of `ref`.
    pub fn unref(&self) {}

    /// `KEYS pattern`: every key matching the glob, in store iteration
    /// order. Never errors; an invalid glob panics at this call site.
    pub fn keys(&self, pattern: &str) -> Completion<Vec<String>> {
        Completion::new(Keys::new(pattern.to_string()).execute(&self.store))
    }

    /// `GET key`: `None` when absent, `TypeMismatch` when the key holds
    /// a non-string variant.
    pub fn get(&self, key: &str) -> Completion<Result<Option<String>, CommandError>> {
        Completion::new(Get::new(key.to_string()).execute(&self.store))
    }

    /// `SET key value`: unconditional overwrite. Never errors.
    pub fn set(&self, key: &str, value: &str) -> Completion<()> {
        Completion::new(Set::new(key.to_string(), value.to_string()).execute(&self.store))
    }

    /// `HGET key field`: `None` for absent key, missing field, or a
    /// non-hash variant. Never errors; see [`crate::cmd::Hget`].
    pub fn hget(&self, key: &str, field: &str) -> Completion<Option<String>> {
        Completion::new(Hget::new(key.to_string(), field.to_string()).execute(&self.store))
    }

    /// `HSET key field value`: lazily creates the hash, `TypeMismatch`
    /// on a non-hash variant.
    pub fn hset(&self, key: &str, field: &str, value: &str) -> Completion<Result<(), CommandError>> {
        Completion::new(
            Hset::new(key.to_string(), field.to_string(), value.to_string()).execute(&self.store),
        )
    }

    /// `LRANGE key start stop`: the half-open window `[start, stop)`,
    /// with `stop == -1` and past-the-end normalized to "through the
    /// end".
    pub fn lrange(
        &self,
        key: &str,
        start: i64,
        stop: i64,
    ) -> Completion<Result<Vec<String>, CommandError>> {
        Completion::new(Lrange::new(key.to_string(), start, stop).execute(&self.store))
    }

    /// `LPUSH key value [value ...]`: prepends the values as one block,
    /// in the order given.
    pub fn lpush(&self, key: &str, values: &[&str]) -> Completion<Result<(), CommandError>> {
        let elements = values.iter().map(|v| v.to_string()).collect();
        Completion::new(Lpush::new(key.to_string(), elements).execute(&self.store))
    }

    /// `RPUSH key value [value ...]`: appends the values in the order
    /// given.
    pub fn rpush(&self, key: &str, values: &[&str]) -> Completion<Result<(), CommandError>> {
        let elements = values.iter().map(|v| v.to_string()).collect();
        Completion::new(Rpush::new(key.to_string(), elements).execute(&self.store))
    }

    /// `LTRIM key min max`: replaces the list with its `[min, max)`
    /// window. `max` is not end-normalized the way `lrange`'s stop is.
    pub fn ltrim(&self, key: &str, min: i64, max: i64) -> Completion<Result<(), CommandError>> {
        Completion::new(Ltrim::new(key.to_string(), min, max).execute(&self.store))
    }
}

impl Default for MockRedis {
    /// A standalone mock over its own fresh, empty store.
    fn default() -> MockRedis {
        MockRedis::new(SharedStore::new())
    }
}
