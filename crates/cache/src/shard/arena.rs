//! Arena-backed doubly linked segments
//!
//! A shard stores its entries in an [`Arena`]: a `Vec` of slots addressed by
//! integer [`NodeId`]s, with a free list for reuse. Eviction lists are
//! [`SegmentList`]s threaded through the same arena by `prev`/`next` indices,
//! so moving an entry between segments never allocates and no node is owned by
//! more than one list.
//!
//! ```text
//!   slots: [ Some(a) | None | Some(b) | Some(c) ]      free: [1]
//!
//!   window    head ─► [2:b]                     ◄─ tail
//!   probation head ─► [3:c] ◄──► [0:a]          ◄─ tail
//! ```
//!
//! Every list keeps the most recently used node at its head and the least
//! recently used node at its tail. Each node records which segment currently
//! links it; a detached node is linked by no list.

/// Index of a node inside an [`Arena`]
pub(crate) type NodeId = usize;

/// Which eviction list currently links a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment {
    Detached,
    Lru,
    Window,
    Probation,
    Protected,
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    fingerprint: u64,
    segment: Segment,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Slot storage with stable integer handles
#[derive(Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
    len: usize,
}

impl<T> Arena<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Store a detached node and return its handle
    pub fn insert(&mut self, value: T, fingerprint: u64) -> NodeId {
        let node = Node {
            value,
            fingerprint,
            segment: Segment::Detached,
            prev: None,
            next: None,
        };
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Free a slot. The node must already be unlinked from every list.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        let node = self.slots.get_mut(id)?.take()?;
        debug_assert_eq!(node.segment, Segment::Detached, "removed a linked node");
        self.free.push(id);
        self.len -= 1;
        Some(node.value)
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.node_mut(id).map(|node| &mut node.value)
    }

    pub fn fingerprint(&self, id: NodeId) -> Option<u64> {
        self.node(id).map(|node| node.fingerprint)
    }

    pub fn segment(&self, id: NodeId) -> Option<Segment> {
        self.node(id).map(|node| node.segment)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }

    /// Iterate over occupied slots in slot order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|node| (id, &node.value)))
    }

    fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id).and_then(Option::as_mut)
    }
}

/// One LRU-ordered list threaded through an [`Arena`]
#[derive(Debug, Clone)]
pub(crate) struct SegmentList {
    segment: Segment,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl SegmentList {
    pub fn new(segment: Segment) -> Self {
        Self {
            segment,
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Least recently used node
    pub fn back(&self) -> Option<NodeId> {
        self.tail
    }

    /// Link a detached node at the head
    pub fn push_front<T>(&mut self, arena: &mut Arena<T>, id: NodeId) {
        let old_head = self.head;
        match arena.node_mut(id) {
            Some(node) if node.segment == Segment::Detached => {
                node.segment = self.segment;
                node.prev = None;
                node.next = old_head;
            }
            _ => return,
        }

        match old_head.and_then(|head| arena.node_mut(head)) {
            Some(head) => head.prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
    }

    /// Detach a node linked by this list. Returns false if it is not a member.
    pub fn unlink<T>(&mut self, arena: &mut Arena<T>, id: NodeId) -> bool {
        let (prev, next) = match arena.node_mut(id) {
            Some(node) if node.segment == self.segment => {
                let links = (node.prev, node.next);
                node.segment = Segment::Detached;
                node.prev = None;
                node.next = None;
                links
            }
            _ => return false,
        };

        match prev.and_then(|p| arena.node_mut(p)) {
            Some(node) => node.next = next,
            None => self.head = next,
        }
        match next.and_then(|n| arena.node_mut(n)) {
            Some(node) => node.prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
        true
    }

    pub fn move_to_front<T>(&mut self, arena: &mut Arena<T>, id: NodeId) {
        if self.head == Some(id) {
            return;
        }
        if self.unlink(arena, id) {
            self.push_front(arena, id);
        }
    }

    /// Detach and return the least recently used node
    pub fn pop_back<T>(&mut self, arena: &mut Arena<T>) -> Option<NodeId> {
        let tail = self.tail?;
        self.unlink(arena, tail);
        Some(tail)
    }

    /// Forget every link. Only valid together with clearing the arena.
    pub fn clear(&mut self) {
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Node ids from most to least recently used
    #[cfg(test)]
    pub fn ids<'a, T>(&self, arena: &'a Arena<T>) -> impl Iterator<Item = NodeId> + 'a {
        std::iter::successors(self.head, move |&id| arena.node(id).and_then(|node| node.next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena_with(values: &[&'static str]) -> (Arena<&'static str>, Vec<NodeId>) {
        let mut arena = Arena::with_capacity(values.len());
        let ids = values
            .iter()
            .enumerate()
            .map(|(i, v)| arena.insert(*v, i as u64))
            .collect();
        (arena, ids)
    }

    fn values(list: &SegmentList, arena: &Arena<&'static str>) -> Vec<&'static str> {
        list.ids(arena).map(|id| *arena.get(id).unwrap()).collect()
    }

    #[test]
    fn test_push_front_orders_mru_first() {
        let (mut arena, ids) = arena_with(&["a", "b", "c"]);
        let mut list = SegmentList::new(Segment::Lru);
        for id in &ids {
            list.push_front(&mut arena, *id);
        }
        assert_eq!(values(&list, &arena), vec!["c", "b", "a"]);
        assert_eq!(list.back(), Some(ids[0]));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_move_to_front_and_pop_back() {
        let (mut arena, ids) = arena_with(&["a", "b", "c"]);
        let mut list = SegmentList::new(Segment::Lru);
        for id in &ids {
            list.push_front(&mut arena, *id);
        }
        list.move_to_front(&mut arena, ids[0]);
        assert_eq!(values(&list, &arena), vec!["a", "c", "b"]);

        assert_eq!(list.pop_back(&mut arena), Some(ids[1]));
        assert_eq!(arena.segment(ids[1]), Some(Segment::Detached));
        assert_eq!(values(&list, &arena), vec!["a", "c"]);
    }

    #[test]
    fn test_unlink_rejects_foreign_nodes() {
        let (mut arena, ids) = arena_with(&["a", "b"]);
        let mut window = SegmentList::new(Segment::Window);
        let mut probation = SegmentList::new(Segment::Probation);
        window.push_front(&mut arena, ids[0]);
        probation.push_front(&mut arena, ids[1]);

        assert!(!window.unlink(&mut arena, ids[1]));
        assert!(probation.unlink(&mut arena, ids[1]));
        assert!(probation.is_empty());
        assert_eq!(probation.back(), None);
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn test_push_front_ignores_linked_nodes() {
        let (mut arena, ids) = arena_with(&["a"]);
        let mut first = SegmentList::new(Segment::Window);
        let mut second = SegmentList::new(Segment::Probation);
        first.push_front(&mut arena, ids[0]);
        second.push_front(&mut arena, ids[0]);
        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn test_arena_reuses_freed_slots() {
        let (mut arena, ids) = arena_with(&["a", "b"]);
        assert_eq!(arena.remove(ids[0]), Some("a"));
        assert_eq!(arena.len(), 1);
        let reused = arena.insert("c", 9);
        assert_eq!(reused, ids[0]);
        assert_eq!(arena.fingerprint(reused), Some(9));
        assert_eq!(arena.iter().count(), 2);
        assert!(arena.remove(99).is_none());
    }
}
