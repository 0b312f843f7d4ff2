use crate::{MockRedis, SharedStore, DEFAULT_HOST, DEFAULT_PORT};
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Where the resolver should look for backends: a fixed `host:port`
/// pair, or a service-discovery name to be looked up by domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverTarget {
    Static(String),
    Discovery(String),
}

/// Backoff policy for reconnecting to a failed backend.
///
/// The mock never fails and never reconnects, so these values are
/// retained verbatim and acted on by nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryPolicy {
    pub timeout: Duration,
    pub retries: u32,
    pub delay: Duration,
}

/// Pool construction parameters, in the shape the pooling/resolver
/// framework hands them over. None of the values are validated: the
/// mock exercises neither resolution nor backoff, so the whole struct
/// is structural pass-through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Domain the backends are resolved under, e.g. "localhost".
    pub domain: String,
    /// What the resolver is pointed at.
    pub target: ResolverTarget,
    /// SRV-style service name, e.g. "_redis._tcp".
    pub service: String,
    /// Port used when the resolver target does not carry one.
    pub default_port: u16,
    /// Idle connections the pool keeps warm.
    pub spares: u32,
    /// Upper bound on simultaneously open connections.
    pub maximum: u32,
    /// Inert reconnect policy.
    pub recovery: RecoveryPolicy,
}

impl Default for PoolConfig {
    /// The parameters the emulated client has always used for its
    /// in-test pools.
    fn default() -> PoolConfig {
        PoolConfig {
            domain: "localhost".to_string(),
            target: ResolverTarget::Static(format!("{}:{}", DEFAULT_HOST, DEFAULT_PORT)),
            service: "_redis._tcp".to_string(),
            default_port: DEFAULT_PORT,
            spares: 4,
            maximum: 100,
            recovery: RecoveryPolicy {
                timeout: Duration::from_millis(100),
                retries: 1,
                delay: Duration::ZERO,
            },
        }
    }
}

/// Stand-in for the external resolver collaborator.
///
/// The real framework owns the resolution algorithm; all the pool
/// adapter owes it is a synchronous "start" signal during pool
/// construction. The flag makes that contract observable in tests.
#[derive(Debug)]
pub struct Resolver {
    target: ResolverTarget,
    started: AtomicBool,
}

impl Resolver {
    pub fn new(target: ResolverTarget) -> Resolver {
        Resolver {
            target,
            started: AtomicBool::new(false),
        }
    }

    /// Begin resolution. Idempotent.
    pub fn start(&self) {
        self.started.store(true, Ordering::SeqCst);
        debug!("resolver started for {:?}", self.target);
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    pub fn target(&self) -> &ResolverTarget {
        &self.target
    }
}

/// Manufactures mock connections for a pooling framework.
///
/// One `SharedStore` is created with the pool and handed to every
/// connection it ever mints, so all handles observe a single backend
/// dataset. The resolver is signalled to start synchronously inside
/// `new`, before the constructor returns, matching the framework's
/// construction contract.
#[derive(Debug)]
pub struct MockRedisPool {
    config: PoolConfig,
    resolver: Arc<Resolver>,
    store: SharedStore,
}

impl MockRedisPool {
    /// Build a pool around a fresh, empty store.
    pub fn new(config: PoolConfig) -> MockRedisPool {
        MockRedisPool::with_store(config, SharedStore::new())
    }

    /// Build a pool around an existing (possibly pre-seeded) store.
    pub fn with_store(config: PoolConfig, store: SharedStore) -> MockRedisPool {
        let resolver = Arc::new(Resolver::new(config.target.clone()));

        debug!(
            "pool created: domain={} service={} spares={} maximum={}",
            config.domain, config.service, config.spares, config.maximum
        );
        resolver.start();

        MockRedisPool {
            config,
            resolver,
            store,
        }
    }

    /// The per-connection constructor the framework calls.
    ///
    /// The handle returned is still `Connecting`; the promotion to
    /// `Connected` lands on a later scheduler turn, after this call has
    /// returned and any listeners are attached.
    ///
    /// Requires a Tokio runtime context.
    pub fn connect(&self) -> MockRedis {
        debug!("minting connection against shared store");
        MockRedis::open(self.store.clone())
    }

    /// The configuration this pool was constructed with, untouched.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// The dataset shared by every connection, for seeding and for
    /// asserting on end state in tests.
    pub fn store(&self) -> &SharedStore {
        &self.store
    }
}

impl Default for MockRedisPool {
    fn default() -> MockRedisPool {
        MockRedisPool::new(PoolConfig::default())
    }
}
