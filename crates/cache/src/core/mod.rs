//! Sharded in-memory cache facade
//!
//! [`StrategicCache`] routes every key to one of a fixed set of shards and
//! runs the operation under that shard's lock alone. There is no global lock:
//! statistics are gathered shard by shard and the expiry sweeper visits one
//! shard at a time.

mod builder;
mod operations;
mod types;

pub use types::StrategicCache;

#[cfg(test)]
mod tests;
