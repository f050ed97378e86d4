//! Core eviction policy trait definition

use crate::policy_kind::EvictionPolicyKind;
use crate::shard::arena::{Arena, NodeId};
use crate::sketch::FrequencySketch;

/// Recency bookkeeping for the entries of one shard
///
/// A policy never owns entries. It links arena nodes into its own segment
/// lists and decides which node leaves when the shard is over capacity. The
/// shard drives every call while holding its lock, so implementations take
/// `&mut self` and need no interior synchronization.
pub(crate) trait EvictionPolicy<T>: Send + std::fmt::Debug {
    /// Policy variant
    fn kind(&self) -> EvictionPolicyKind;

    /// Link a freshly stored node
    ///
    /// Returns a node that must be evicted to stay within capacity. The
    /// returned node is already unlinked but still stored in the arena.
    fn on_insert(
        &mut self,
        arena: &mut Arena<T>,
        id: NodeId,
        sketch: &FrequencySketch,
    ) -> Option<NodeId>;

    /// Record a hit or an in-place update
    fn on_access(&mut self, arena: &mut Arena<T>, id: NodeId);

    /// Unlink a node the shard is about to drop. Detached nodes are ignored.
    fn on_remove(&mut self, arena: &mut Arena<T>, id: NodeId);

    /// Node that would be evicted next
    fn victim(&self) -> Option<NodeId>;

    /// Number of linked nodes
    fn len(&self) -> usize;

    /// Forget every link
    fn clear(&mut self);
}
