pub mod traits;
pub mod dijkstra;

pub use dijkstra::{Dijkstra, EngineState, Phase};
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
