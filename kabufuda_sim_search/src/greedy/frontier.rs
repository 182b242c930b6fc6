use std::{cmp::Reverse, collections::BinaryHeap};

use crate::Game;

struct Entry<G: Game> {
    eval: G::Eval,
    seq: Reverse<u64>,
    node: G,
}

impl<G: Game> PartialEq for Entry<G> {
    fn eq(&self, other: &Self) -> bool {
        self.eval == other.eval && self.seq == other.seq
    }
}

impl<G: Game> Eq for Entry<G> {}

impl<G: Game> PartialOrd for Entry<G> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<G: Game> Ord for Entry<G> {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.eval, self.seq).cmp(&(other.eval, other.seq))
    }
}

/// Pending states, best evaluation first. States with equal evaluations leave in the
/// order they arrived, which is what a stable descending re-sort of a queue after every
/// append would produce.
pub struct Frontier<G: Game> {
    heap: BinaryHeap<Entry<G>>,
    next_seq: u64,
}

impl<G: Game> Default for Frontier<G> {
    fn default() -> Self {
        Self {
            heap: Default::default(),
            next_seq: 0,
        }
    }
}

impl<G: Game> std::fmt::Debug for Frontier<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frontier")
            .field("len", &self.heap.len())
            .field("next_seq", &self.next_seq)
            .finish()
    }
}

impl<G: Game> Frontier<G> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, node: G) {
        let seq = Reverse(self.next_seq);
        self.next_seq += 1;
        self.heap.push(Entry {
            eval: node.eval(),
            seq,
            node,
        });
    }

    #[inline]
    pub fn pop(&mut self) -> Option<G> {
        self.heap.pop().map(|e| e.node)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<G: Game> Extend<G> for Frontier<G> {
    fn extend<T: IntoIterator<Item = G>>(&mut self, iter: T) {
        for node in iter {
            self.push(node);
        }
    }
}
