//! Eviction policies for bounded shards
//!
//! Implements plain LRU and Windowed TinyLFU over the arena-backed segment
//! lists each shard owns.

mod factory;
mod policies;
mod traits;

pub(crate) use factory::create_eviction_policy;
pub(crate) use traits::EvictionPolicy;
