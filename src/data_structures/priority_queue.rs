use std::fmt::Debug;

use super::precedes;

/// Membership of the not-yet-finalized vertices, independent of key type
pub trait VertexSet {
    /// Returns the number of vertices still queued
    fn len(&self) -> usize;

    /// Returns true if every vertex has been extracted
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the vertex has not been extracted yet
    fn contains(&self, vertex: usize) -> bool;
}

/// The set of not-yet-finalized vertices, ordered by tentative distance.
///
/// Queues hold vertex ids only. The distances live with the engine and are
/// passed in on every call, so a queue never holds a stale copy of a key.
pub trait VertexQueue<W>: VertexSet + Debug
where
    W: Ord + Copy,
{
    /// Builds a queue holding every vertex `0..keys.len()`
    fn from_keys(keys: &[Option<W>]) -> Self
    where
        Self: Sized;

    /// Removes and returns the queued vertex with the smallest key
    fn extract_min(&mut self, keys: &[Option<W>]) -> Option<usize>;

    /// Notifies the queue that `keys[vertex]` has just decreased
    fn key_decreased(&mut self, vertex: usize, keys: &[Option<W>]);
}

/// A binary min-heap over vertex ids with a position index for decrease-key
#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    /// Heap-ordered vertex ids
    heap: Vec<usize>,

    /// Slot of each vertex in `heap`, `None` once extracted
    positions: Vec<Option<usize>>,
}

impl IndexedMinHeap {
    /// Restore heap order upward from slot `idx`
    fn sift_up<W: Ord + Copy>(&mut self, mut idx: usize, keys: &[Option<W>]) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if precedes(keys, self.heap[idx], self.heap[parent]) {
                self.swap_slots(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    /// Restore heap order downward from slot `idx`
    fn sift_down<W: Ord + Copy>(&mut self, mut idx: usize, keys: &[Option<W>]) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;

            if left < len && precedes(keys, self.heap[left], self.heap[smallest]) {
                smallest = left;
            }
            if right < len && precedes(keys, self.heap[right], self.heap[smallest]) {
                smallest = right;
            }

            if smallest == idx {
                break;
            }
            self.swap_slots(idx, smallest);
            idx = smallest;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a]] = Some(a);
        self.positions[self.heap[b]] = Some(b);
    }
}

impl VertexSet for IndexedMinHeap {
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn contains(&self, vertex: usize) -> bool {
        matches!(self.positions.get(vertex), Some(Some(_)))
    }
}

impl<W> VertexQueue<W> for IndexedMinHeap
where
    W: Ord + Copy,
{
    fn from_keys(keys: &[Option<W>]) -> Self {
        let mut queue = IndexedMinHeap {
            heap: (0..keys.len()).collect(),
            positions: (0..keys.len()).map(Some).collect(),
        };
        for idx in (0..keys.len() / 2).rev() {
            queue.sift_down(idx, keys);
        }
        queue
    }

    fn extract_min(&mut self, keys: &[Option<W>]) -> Option<usize> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap_slots(0, last);
        let vertex = self.heap.pop()?;
        self.positions[vertex] = None;

        if !self.heap.is_empty() {
            self.sift_down(0, keys);
        }

        Some(vertex)
    }

    fn key_decreased(&mut self, vertex: usize, keys: &[Option<W>]) {
        if let Some(Some(idx)) = self.positions.get(vertex).copied() {
            self.sift_up(idx, keys);
        }
    }
}
