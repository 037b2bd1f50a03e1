use std::fmt::Debug;
use std::marker::PhantomData;

use log::{debug, trace};
use num_traits::{PrimInt, Unsigned};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{IndexedMinHeap, RebuildHeap, VertexQueue};
use crate::graph::Graph;
use crate::{Error, Result};

/// Lifecycle of a single engine run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unstarted,
    Running,
    Done,
}

/// Mutable state of one Dijkstra run over one graph.
///
/// Each run owns its distances, predecessors and queue; nothing is shared
/// between runs, so independent graphs can be solved side by side.
#[derive(Debug)]
pub struct EngineState<'g, W, G, Q>
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
    Q: VertexQueue<W>,
{
    graph: &'g G,
    source: usize,
    distances: Vec<Option<W>>,
    predecessors: Vec<Option<usize>>,
    queue: Q,
    finalized: usize,
    phase: Phase,
}

impl<'g, W, G, Q> EngineState<'g, W, G, Q>
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
    Q: VertexQueue<W>,
{
    /// Prepares a run from `source`: distance zero there, unreached elsewhere,
    /// every vertex queued.
    pub fn new(graph: &'g G, source: usize) -> Result<Self> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        distances[source] = Some(W::zero());
        let queue = Q::from_keys(&distances);

        Ok(EngineState {
            graph,
            source,
            distances,
            predecessors: vec![None; n],
            queue,
            finalized: 0,
            phase: Phase::Unstarted,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn distances(&self) -> &[Option<W>] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    /// Finalizes the closest queued vertex and relaxes its outgoing edges.
    ///
    /// Returns `false` once the run is done and nothing was finalized.
    pub fn step(&mut self) -> Result<bool> {
        if self.phase == Phase::Done {
            return Ok(false);
        }
        self.phase = Phase::Running;

        let u = match self.queue.extract_min(&self.distances) {
            Some(u) => u,
            None => {
                self.phase = Phase::Done;
                return Ok(false);
            }
        };
        self.finalized += 1;

        // An unreached vertex cannot improve anything
        if let Some(dist_u) = self.distances[u] {
            let graph = self.graph;
            for (v, weight) in graph.outgoing_edges(u) {
                let new_dist = dist_u.checked_add(&weight).ok_or(Error::DistanceOverflow(v))?;

                let should_update = match self.distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    trace!("relax {} -> {}: {:?}", u, v, new_dist);
                    self.distances[v] = Some(new_dist);
                    self.predecessors[v] = Some(u);
                    self.queue.key_decreased(v, &self.distances);
                }
            }
        }

        if self.finalized == self.distances.len() {
            self.phase = Phase::Done;
        }

        Ok(true)
    }

    /// Steps until done and hands back the read-only result
    pub fn run(mut self) -> Result<ShortestPathResult<W>> {
        while self.step()? {}
        Ok(self.into_result())
    }

    pub fn into_result(self) -> ShortestPathResult<W> {
        ShortestPathResult {
            distances: self.distances,
            predecessors: self.predecessors,
            source: self.source,
        }
    }
}

/// Classic Dijkstra's algorithm, parameterized by its priority structure
#[derive(Debug)]
pub struct Dijkstra<Q = IndexedMinHeap> {
    _queue: PhantomData<Q>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance backed by the decrease-key heap
    pub fn new() -> Self {
        Dijkstra::with_queue()
    }
}

impl Dijkstra<RebuildHeap> {
    /// Creates a Dijkstra instance that re-heapifies after every relaxation
    pub fn rebuilding() -> Self {
        Dijkstra::with_queue()
    }
}

impl<Q> Dijkstra<Q> {
    /// Creates a Dijkstra instance over any vertex queue
    pub fn with_queue() -> Self {
        Dijkstra { _queue: PhantomData }
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, G, Q> ShortestPathAlgorithm<W, G> for Dijkstra<Q>
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
    Q: VertexQueue<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let result = EngineState::<W, G, Q>::new(graph, source)?.run()?;

        debug!(
            "{} from {}: reached {} of {} vertices",
            <Self as ShortestPathAlgorithm<W, G>>::name(self),
            source,
            result.distances.iter().filter(|d| d.is_some()).count(),
            graph.vertex_count()
        );

        Ok(result)
    }
}
