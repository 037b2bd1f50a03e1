pub mod priority_queue;
pub mod rebuild_heap;

pub use priority_queue::{IndexedMinHeap, VertexQueue, VertexSet};
pub use rebuild_heap::RebuildHeap;

/// Heap order over vertex ids keyed by tentative distance.
///
/// Unreached vertices (`None`) sort after every reached one; equal keys fall
/// back to the lower vertex id.
pub(crate) fn precedes<W: Ord + Copy>(keys: &[Option<W>], a: usize, b: usize) -> bool {
    match (keys[a], keys[b]) {
        (Some(key_a), Some(key_b)) => (key_a, a) < (key_b, b),
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (None, None) => a < b,
    }
}
