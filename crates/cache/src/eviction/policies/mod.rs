//! Eviction policy implementations

mod lru;
mod tinylfu;

pub(crate) use lru::LruPolicy;
pub(crate) use tinylfu::WindowedTinyLfuPolicy;
