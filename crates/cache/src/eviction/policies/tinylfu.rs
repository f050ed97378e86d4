//! Windowed TinyLFU eviction policy implementation
//!
//! New entries land in a small LRU window. When the window overflows, its
//! least recently used entry becomes a candidate for the main region, a
//! segmented LRU split into probation and protected lists:
//!
//! ```text
//!            insert                    overflow                      hit
//!   ─────────► [ window ] ──candidate──► [ probation ] ──────────► [ protected ]
//!                                            ▲                          │
//!                                            └──────── demote ──────────┘
//! ```
//!
//! The candidate takes the probation tail's place only if the frequency
//! sketch estimates it as strictly more popular. A tie keeps the resident,
//! so a flood of one-hit keys cannot push out entries that keep being read.

use crate::eviction::traits::EvictionPolicy;
use crate::policy_kind::EvictionPolicyKind;
use crate::shard::arena::{Arena, NodeId, Segment, SegmentList};
use crate::sketch::FrequencySketch;

const WINDOW_PERCENT: usize = 1;
const PROTECTED_PERCENT: usize = 80;

/// Window plus segmented-LRU main region, admission by frequency
#[derive(Debug)]
pub(crate) struct WindowedTinyLfuPolicy {
    window: SegmentList,
    probation: SegmentList,
    protected: SegmentList,
    window_capacity: usize,
    main_capacity: usize,
    protected_capacity: usize,
}

impl WindowedTinyLfuPolicy {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let window_capacity = (capacity * WINDOW_PERCENT / 100).max(1);
        let main_capacity = capacity - window_capacity;
        let protected_capacity = main_capacity * PROTECTED_PERCENT / 100;

        Self {
            window: SegmentList::new(Segment::Window),
            probation: SegmentList::new(Segment::Probation),
            protected: SegmentList::new(Segment::Protected),
            window_capacity,
            main_capacity,
            protected_capacity,
        }
    }

    /// Linked entries per segment as `(window, probation, protected)`
    #[cfg(test)]
    pub fn segment_lens(&self) -> (usize, usize, usize) {
        (self.window.len(), self.probation.len(), self.protected.len())
    }

    /// Capacities per segment as `(window, main, protected)`
    #[cfg(test)]
    pub fn capacities(&self) -> (usize, usize, usize) {
        (self.window_capacity, self.main_capacity, self.protected_capacity)
    }

    fn main_len(&self) -> usize {
        self.probation.len() + self.protected.len()
    }

    fn list_for(&mut self, segment: Segment) -> Option<&mut SegmentList> {
        match segment {
            Segment::Window => Some(&mut self.window),
            Segment::Probation => Some(&mut self.probation),
            Segment::Protected => Some(&mut self.protected),
            Segment::Lru | Segment::Detached => None,
        }
    }

    fn unlink<T>(&mut self, arena: &mut Arena<T>, id: NodeId) {
        let Some(segment) = arena.segment(id) else {
            return;
        };
        if let Some(list) = self.list_for(segment) {
            list.unlink(arena, id);
        }
    }

    /// Push protected overflow back to the head of probation
    fn demote_protected_overflow<T>(&mut self, arena: &mut Arena<T>) {
        while self.protected.len() > self.protected_capacity {
            let Some(demoted) = self.protected.pop_back(arena) else {
                break;
            };
            self.probation.push_front(arena, demoted);
        }
    }

    /// Settle a window overflow candidate against the main region
    fn admit_candidate<T>(
        &mut self,
        arena: &mut Arena<T>,
        candidate: NodeId,
        sketch: &FrequencySketch,
    ) -> Option<NodeId> {
        if self.main_len() < self.main_capacity {
            self.probation.push_front(arena, candidate);
            return None;
        }

        let Some(resident) = self.probation.back().or_else(|| self.protected.back()) else {
            // No main region at all (capacity of one)
            return Some(candidate);
        };

        let estimate = |id: NodeId| arena.fingerprint(id).map_or(0, |hash| sketch.estimate(hash));
        let candidate_frequency = estimate(candidate);
        let resident_frequency = estimate(resident);

        if candidate_frequency > resident_frequency {
            tracing::trace!(
                candidate_frequency,
                resident_frequency,
                "window candidate displaced main resident"
            );
            self.unlink(arena, resident);
            self.probation.push_front(arena, candidate);
            Some(resident)
        } else {
            Some(candidate)
        }
    }
}

impl<T> EvictionPolicy<T> for WindowedTinyLfuPolicy {
    fn kind(&self) -> EvictionPolicyKind {
        EvictionPolicyKind::WindowedTinyLfu
    }

    fn on_insert(
        &mut self,
        arena: &mut Arena<T>,
        id: NodeId,
        sketch: &FrequencySketch,
    ) -> Option<NodeId> {
        self.window.push_front(arena, id);
        if self.window.len() <= self.window_capacity {
            return None;
        }

        let candidate = self.window.pop_back(arena)?;
        self.admit_candidate(arena, candidate, sketch)
    }

    fn on_access(&mut self, arena: &mut Arena<T>, id: NodeId) {
        match arena.segment(id) {
            Some(Segment::Window) => self.window.move_to_front(arena, id),
            Some(Segment::Probation) => {
                self.probation.unlink(arena, id);
                self.protected.push_front(arena, id);
                self.demote_protected_overflow(arena);
            }
            Some(Segment::Protected) => self.protected.move_to_front(arena, id),
            Some(Segment::Lru | Segment::Detached) | None => {}
        }
    }

    fn on_remove(&mut self, arena: &mut Arena<T>, id: NodeId) {
        self.unlink(arena, id);
    }

    fn victim(&self) -> Option<NodeId> {
        self.probation
            .back()
            .or_else(|| self.protected.back())
            .or_else(|| self.window.back())
    }

    fn len(&self) -> usize {
        self.window.len() + self.main_len()
    }

    fn clear(&mut self) {
        self.window.clear();
        self.probation.clear();
        self.protected.clear();
    }
}
