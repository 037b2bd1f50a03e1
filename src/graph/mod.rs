pub mod traits;
pub mod directed;
pub mod loader;

pub use traits::Graph;
pub use directed::DirectedGraph;
pub use loader::{load_graph, parse_graph};
