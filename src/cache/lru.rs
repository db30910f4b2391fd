//! Recency Index Module
//!
//! Tracks access order of resident keys for LRU eviction.

// == Slot ==
/// Stable handle to a key's position in the [`RecencyIndex`].
pub(crate) type Slot = usize;

#[derive(Debug)]
struct Node<K> {
    key: K,
    prev: Option<Slot>,
    next: Option<Slot>,
}

// == Recency Index ==
/// Doubly linked list of keys stored in a slab.
///
/// - Front (head) = most recently used
/// - Back (tail) = least recently used
///
/// Every operation that takes a [`Slot`] runs in O(1). Freed slots are
/// recycled, so a slot is only meaningful while its key is resident.
#[derive(Debug)]
pub(crate) struct RecencyIndex<K> {
    nodes: Vec<Option<Node<K>>>,
    free: Vec<Slot>,
    head: Option<Slot>,
    tail: Option<Slot>,
    len: usize,
}

impl<K> RecencyIndex<K> {
    // == Constructor ==
    /// Creates an empty index with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts `key` as most recently used and returns its slot.
    pub fn push_front(&mut self, key: K) -> Slot {
        let node = Node {
            key,
            prev: None,
            next: None,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                slot
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };
        self.link_front(slot);
        self.len += 1;
        slot
    }

    // == Promote ==
    /// Marks the key at `slot` as most recently used.
    pub fn promote(&mut self, slot: Slot) {
        if self.head == Some(slot) {
            return;
        }
        if self.unlink(slot) {
            self.link_front(slot);
        }
    }

    // == Remove ==
    /// Removes the key at `slot`, returning it.
    pub fn remove(&mut self, slot: Slot) -> Option<K> {
        if !self.unlink(slot) {
            return None;
        }
        let node = self.nodes.get_mut(slot).and_then(Option::take)?;
        self.free.push(slot);
        self.len -= 1;
        Some(node.key)
    }

    // == Pop Back ==
    /// Removes and returns the least recently used key.
    ///
    /// Returns None if the index is empty.
    pub fn pop_back(&mut self) -> Option<K> {
        let tail = self.tail?;
        self.remove(tail)
    }

    /// Key currently held at `slot`.
    #[cfg(test)]
    pub fn key_at(&self, slot: Slot) -> Option<&K> {
        self.node(slot).map(|node| &node.key)
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Iter ==
    /// Iterates keys from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        std::iter::successors(self.head, move |&slot| self.node(slot).and_then(|n| n.next))
            .filter_map(move |slot| self.node(slot).map(|n| &n.key))
    }

    fn node(&self, slot: Slot) -> Option<&Node<K>> {
        self.nodes.get(slot).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, slot: Slot) -> Option<&mut Node<K>> {
        self.nodes.get_mut(slot).and_then(Option::as_mut)
    }

    /// Detaches `slot` from its neighbours. Returns false for a vacant slot.
    fn unlink(&mut self, slot: Slot) -> bool {
        let (prev, next) = match self.node(slot) {
            Some(node) => (node.prev, node.next),
            None => return false,
        };

        match prev {
            Some(p) => {
                if let Some(node) = self.node_mut(p) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(node) = self.node_mut(n) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(slot) {
            node.prev = None;
            node.next = None;
        }
        true
    }

    fn link_front(&mut self, slot: Slot) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(slot) {
            node.prev = None;
            node.next = old_head;
        }
        if let Some(h) = old_head {
            if let Some(node) = self.node_mut(h) {
                node.prev = Some(slot);
            }
        }
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn order<K: Clone>(index: &RecencyIndex<K>) -> Vec<K> {
        index.iter().cloned().collect()
    }

    fn oldest<K: Clone>(index: &RecencyIndex<K>) -> Option<K> {
        index.iter().last().cloned()
    }

    #[test]
    fn test_index_empty() {
        let index: RecencyIndex<u64> = RecencyIndex::with_capacity(4);
        assert_eq!(index.len(), 0);
        assert_eq!(order(&index), Vec::<u64>::new());
        assert_eq!(oldest(&index), None);
    }

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut index = RecencyIndex::with_capacity(0);

        index.push_front(1);
        index.push_front(2);
        index.push_front(3);

        assert_eq!(index.len(), 3);
        assert_eq!(order(&index), vec![3, 2, 1]);
        // 1 is oldest (added first)
        assert_eq!(oldest(&index), Some(1));
    }

    #[test]
    fn test_promote_moves_to_front() {
        let mut index = RecencyIndex::with_capacity(0);

        let a = index.push_front('a');
        index.push_front('b');
        index.push_front('c');

        index.promote(a);

        assert_eq!(index.len(), 3);
        assert_eq!(order(&index), vec!['a', 'c', 'b']);
        assert_eq!(oldest(&index), Some('b'));
    }

    #[test]
    fn test_promote_head_and_tail() {
        let mut index = RecencyIndex::with_capacity(0);

        let a = index.push_front('a');
        let b = index.push_front('b');

        // Already at the front
        index.promote(b);
        assert_eq!(order(&index), vec!['b', 'a']);

        index.promote(a);
        assert_eq!(order(&index), vec!['a', 'b']);
        assert_eq!(oldest(&index), Some('b'));
    }

    #[test]
    fn test_pop_back_in_lru_order() {
        let mut index = RecencyIndex::with_capacity(0);

        index.push_front(1);
        index.push_front(2);
        index.push_front(3);

        assert_eq!(index.pop_back(), Some(1));
        assert_eq!(index.len(), 2);
        assert_eq!(index.pop_back(), Some(2));
        assert_eq!(index.pop_back(), Some(3));
        assert_eq!(index.pop_back(), None);
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_remove_middle() {
        let mut index = RecencyIndex::with_capacity(0);

        index.push_front(1);
        let two = index.push_front(2);
        index.push_front(3);

        assert_eq!(index.remove(two), Some(2));
        assert_eq!(index.len(), 2);
        assert_eq!(order(&index), vec![3, 1]);

        // Vacant slot
        assert_eq!(index.remove(two), None);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_slots_are_recycled() {
        let mut index = RecencyIndex::with_capacity(0);

        let first = index.push_front(10);
        index.pop_back();
        let second = index.push_front(20);

        assert_eq!(first, second);
        assert_eq!(index.key_at(second), Some(&20));
        assert_eq!(order(&index), vec![20]);
    }

    #[test]
    fn test_order_after_multiple_promotions() {
        let mut index = RecencyIndex::with_capacity(0);

        let a = index.push_front("a");
        let b = index.push_front("b");
        let c = index.push_front("c");

        // [c, b, a] -> [a, c, b] -> [c, a, b] -> [b, c, a]
        index.promote(a);
        index.promote(c);
        index.promote(b);

        assert_eq!(index.pop_back(), Some("a"));
        assert_eq!(index.pop_back(), Some("c"));
        assert_eq!(index.pop_back(), Some("b"));
    }
}
