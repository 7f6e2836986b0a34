use crate::engine::ShortestPathEngine;
use crate::error::GraphError;
use crate::graph::{Graph, NodeKey};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences, IntoNodeIdentifiers};
use std::collections::HashMap;

impl<K: NodeKey> Graph<K> {
    /// Copies the graph into a [`petgraph::graph::UnGraph`] with keys as node weights.
    pub fn to_petgraph(&self) -> UnGraph<K, f64> {
        let mut pg_graph = UnGraph::with_capacity(self.len(), self.edge_count());
        let nodes: Vec<NodeIndex> = self
            .nodes()
            .map(|node| pg_graph.add_node(node.key().clone()))
            .collect();

        for (from, &from_node) in nodes.iter().enumerate() {
            for edge in self.adjacency(from).iter().filter(|edge| edge.to >= from) {
                pg_graph.add_edge(from_node, nodes[edge.to], edge.weight);
            }
        }
        pg_graph
    }
}

/// Runs [`ShortestPathEngine`] on any petgraph graph, treating every edge as
/// undirected. Parallel edges, and edges in both directions between the same
/// pair, collapse into one edge with the smallest weight.
///
/// Returns the distance to each reachable node, or only to `goal` when one is
/// given and reachable. Fails with [`GraphError::UnknownNode`] when `start` or
/// `goal` is not a node of `graph`.
pub fn dijkstra<G>(
    graph: G,
    start: G::NodeId,
    goal: Option<G::NodeId>,
) -> Result<HashMap<G::NodeId, f64>, GraphError>
where
    G: IntoEdgeReferences + IntoNodeIdentifiers,
    G::NodeId: NodeKey,
    G::EdgeWeight: Into<f64> + Copy,
{
    let mut our_graph = Graph::new();
    for node in graph.node_identifiers() {
        our_graph.add_node(node);
    }
    for edge in graph.edge_references() {
        let (from, to) = (edge.source(), edge.target());
        let weight: f64 = (*edge.weight()).into();
        match our_graph.weight(&from, &to) {
            Ok(existing) if existing <= weight => {}
            _ => our_graph.add_edge(from, to, weight),
        }
    }

    let engine = ShortestPathEngine::new(&our_graph);
    let paths = engine.run(&start)?;

    let distances = match goal {
        Some(goal) => {
            let dist = paths.distance(&goal)?;
            if dist.is_finite() {
                HashMap::from([(goal, dist)])
            } else {
                HashMap::new()
            }
        }
        None => paths
            .distances()
            .filter(|(_, dist)| dist.is_finite())
            .map(|(node, dist)| (*node, dist))
            .collect(),
    };
    Ok(distances)
}
