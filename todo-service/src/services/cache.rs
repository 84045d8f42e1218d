//! Redis cache client handle.
//!
//! The handle is held in application state for the lifetime of the process
//! but no handler issues commands against it; the redis driver connects on
//! first use, so startup does not depend on the cache being reachable.
//! Caching semantics are an external collaborator concern and are not
//! defined here.

use crate::config::RedisConfig;
use redis::Client;
use service_core::error::AppError;

/// Declared-but-unused cache handle: held in `AppState` for the lifetime
/// of the process, never exercised by any handler.
#[derive(Clone)]
pub struct CacheClient {
    _client: Client,
}

impl CacheClient {
    pub fn new(config: &RedisConfig) -> Result<Self, AppError> {
        tracing::info!(url = %config.url, "Creating Redis cache client");
        let client = Client::open(config.url.clone())?;

        Ok(Self { _client: client })
    }
}
