//! LRU (Least Recently Used) eviction policy implementation

use crate::eviction::traits::EvictionPolicy;
use crate::policy_kind::EvictionPolicyKind;
use crate::shard::arena::{Arena, NodeId, Segment, SegmentList};
use crate::sketch::FrequencySketch;

/// LRU (Least Recently Used) eviction policy
///
/// Head of the list is the most recently used entry; the tail is the victim.
#[derive(Debug)]
pub(crate) struct LruPolicy {
    order: SegmentList,
    capacity: usize,
}

impl LruPolicy {
    pub fn new(capacity: usize) -> Self {
        Self {
            order: SegmentList::new(Segment::Lru),
            capacity: capacity.max(1),
        }
    }
}

impl<T> EvictionPolicy<T> for LruPolicy {
    fn kind(&self) -> EvictionPolicyKind {
        EvictionPolicyKind::Lru
    }

    fn on_insert(
        &mut self,
        arena: &mut Arena<T>,
        id: NodeId,
        _sketch: &FrequencySketch,
    ) -> Option<NodeId> {
        self.order.push_front(arena, id);
        if self.order.len() > self.capacity {
            return self.order.pop_back(arena);
        }
        None
    }

    fn on_access(&mut self, arena: &mut Arena<T>, id: NodeId) {
        self.order.move_to_front(arena, id);
    }

    fn on_remove(&mut self, arena: &mut Arena<T>, id: NodeId) {
        self.order.unlink(arena, id);
    }

    fn victim(&self) -> Option<NodeId> {
        self.order.back()
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn clear(&mut self) {
        self.order.clear();
    }
}
