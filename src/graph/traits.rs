use std::fmt::Debug;
use num_traits::{PrimInt, Unsigned};

/// Trait representing a weighted directed graph with non-negative integer weights
pub trait Graph<W>: Debug
where
    W: PrimInt + Unsigned + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Gets the smallest weight of any edge between the two vertices
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}
