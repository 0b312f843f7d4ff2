pub mod cmd;
pub mod completion;
pub mod connection;
pub mod data_store;
pub mod pool;
pub use cmd::CommandError;
pub use completion::Completion;
pub use connection::ConnectionState;
pub use connection::MockRedis;
pub use data_store::DataType;
pub use data_store::MockSharedStoreBase;
pub use data_store::SharedStore;
pub use data_store::SharedStoreBase;
pub use pool::MockRedisPool;
pub use pool::PoolConfig;
pub use pool::RecoveryPolicy;
pub use pool::Resolver;
pub use pool::ResolverTarget;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 6379;
