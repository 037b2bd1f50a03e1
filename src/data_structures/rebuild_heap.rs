use super::precedes;
use super::priority_queue::{VertexQueue, VertexSet};

/// A binary min-heap over vertex ids without a position index.
///
/// It cannot locate a vertex whose key changed, so every decrease re-heapifies
/// all unfinalized vertices: O(V) per relaxation, O(V·E) per run.
#[derive(Debug, Clone)]
pub struct RebuildHeap {
    heap: Vec<usize>,
    queued: Vec<bool>,
}

impl RebuildHeap {
    fn rebuild<W: Ord + Copy>(&mut self, keys: &[Option<W>]) {
        for idx in (0..self.heap.len() / 2).rev() {
            self.sift_down(idx, keys);
        }
    }

    fn sift_down<W: Ord + Copy>(&mut self, mut idx: usize, keys: &[Option<W>]) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < len && precedes(keys, self.heap[left], self.heap[smallest]) {
                smallest = left;
            }
            if right < len && precedes(keys, self.heap[right], self.heap[smallest]) {
                smallest = right;
            }

            if smallest == idx {
                return;
            }
            self.heap.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl VertexSet for RebuildHeap {
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn contains(&self, vertex: usize) -> bool {
        self.queued.get(vertex).copied().unwrap_or(false)
    }
}

impl<W> VertexQueue<W> for RebuildHeap
where
    W: Ord + Copy,
{
    fn from_keys(keys: &[Option<W>]) -> Self {
        let mut queue = RebuildHeap {
            heap: (0..keys.len()).collect(),
            queued: vec![true; keys.len()],
        };
        queue.rebuild(keys);
        queue
    }

    fn extract_min(&mut self, keys: &[Option<W>]) -> Option<usize> {
        if self.heap.is_empty() {
            return None;
        }

        let vertex = self.heap.swap_remove(0);
        self.queued[vertex] = false;
        if !self.heap.is_empty() {
            self.sift_down(0, keys);
        }

        Some(vertex)
    }

    fn key_decreased(&mut self, vertex: usize, keys: &[Option<W>]) {
        if self.contains(vertex) {
            self.rebuild(keys);
        }
    }
}
