//! Single-source shortest paths over weighted, undirected graphs.
//!
//! Build a [`Graph`], hand it to a [`ShortestPathEngine`] and query the
//! resulting [`ShortestPaths`]:
//!
//! ```
//! use undirected_sssp::{Graph, ShortestPathEngine};
//!
//! let graph = Graph::from_edges([("a", "b", 7.0), ("a", "c", 9.0), ("b", "c", 1.0)]);
//! let engine = ShortestPathEngine::new(&graph);
//! let paths = engine.run(&"a").unwrap();
//!
//! assert_eq!(paths.distance(&"c"), Ok(8.0));
//! assert_eq!(paths.path_to(&"c").unwrap(), vec![&"a", &"b", &"c"]);
//! ```
pub mod engine;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod loader;
#[cfg(feature = "petgraph")]
pub mod petgraph_utils;

pub use engine::{NodeState, ShortestPathEngine, ShortestPaths, run};
pub use error::{GraphError, LoadError};
pub use frontier::INFINITY;
pub use graph::{Edge, Graph, Node, NodeId, NodeKey};
pub use loader::{parse_edge_list, read_edge_list};
