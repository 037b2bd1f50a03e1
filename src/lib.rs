//! Lettered SSSP - Dijkstra shortest paths over small lettered graphs
//!
//! Graphs are read from fixed-column case files whose vertices are named by the
//! letters A..Z. Each case is loaded into its own graph, solved from vertex A
//! with Dijkstra's algorithm, and reported as the distance and path to one
//! destination vertex.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod naming;
pub mod report;
pub mod runner;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use naming::VertexNamer;
pub use report::PathReport;
pub use runner::RunConfig;

use std::path::PathBuf;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Input not found: {}: {}", .path.display(), .source)]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin}:{line}: {reason}")]
    GraphFormatError {
        origin: String,
        line: usize,
        reason: String,
    },

    #[error("Unknown vertex name: {0:?}")]
    UnknownVertexName(String),

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Distance overflow while relaxing edge into vertex {0}")]
    DistanceOverflow(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn format(origin: &str, line: usize, reason: impl Into<String>) -> Self {
        Error::GraphFormatError {
            origin: origin.to_string(),
            line,
            reason: reason.into(),
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
