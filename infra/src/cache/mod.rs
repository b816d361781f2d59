//! Redis-backed session store
//!
//! [`RedisClient`] owns the connection and retry behavior; the
//! [`sg_core::store::KeyValueStore`] implementation on it adapts the client
//! to the capability the session store consumes.

pub mod redis_client;
mod session_store;

pub use redis_client::RedisClient;
