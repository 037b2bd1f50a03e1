use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::{PrimInt, Unsigned};
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists
///
/// Edges are only added while a case is being loaded; once handed to an
/// algorithm the graph is borrowed immutably.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,
}

impl<W> DirectedGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Creates a new directed graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: vec![Vec::new(); vertices],
        }
    }

    /// Adds a directed edge between vertices with the given weight.
    ///
    /// Parallel edges are kept; the relaxation loop only ever uses the cheapest.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(to) {
            return Err(Error::InvalidVertex(to));
        }
        match self.outgoing_edges.get_mut(from) {
            Some(edges) => {
                edges.push((to, weight));
                Ok(())
            }
            None => Err(Error::InvalidVertex(from)),
        }
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.outgoing_edges.len()
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }
}
