use crate::error::GraphError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Dense index of a node, assigned in insertion order.
pub type NodeId = usize;

/// Requirements on the key that identifies a node.
///
/// `Ord` is only used to break ties between equally distant nodes, so that
/// repeated runs settle nodes in the same order.
pub trait NodeKey: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> NodeKey for T {}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    pub to: NodeId,
    pub weight: f64,
}

/// Weighted, undirected graph stored as an adjacency list.
///
/// Every undirected edge is held twice, once in each endpoint's adjacency.
/// Self-loops are held once.
#[derive(Debug, Clone)]
pub struct Graph<K> {
    keys: Vec<K>,
    index: HashMap<K, NodeId>,
    edges: Vec<Vec<Edge>>,
}

impl<K: NodeKey> Default for Graph<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: NodeKey> PartialEq for Graph<K> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.edges == other.edges
    }
}

impl<K: NodeKey> Graph<K> {
    pub fn new() -> Self {
        Graph {
            keys: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Graph {
            keys: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            edges: Vec::with_capacity(nodes),
        }
    }

    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (K, K, f64)>,
    {
        let mut graph = Graph::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Inserts `key` if absent and returns its id. Repeated calls return the
    /// id assigned the first time.
    pub fn add_node(&mut self, key: K) -> NodeId {
        if let Some(&id) = self.index.get(&key) {
            return id;
        }

        let id = self.keys.len();
        self.index.insert(key.clone(), id);
        self.keys.push(key);
        self.edges.push(Vec::new());
        id
    }

    /// Connects `from` and `to`, creating either endpoint if missing.
    ///
    /// Adding an edge that already exists replaces its weight instead of
    /// creating a parallel edge. Weights must be finite and non-negative.
    pub fn add_edge(&mut self, from: K, to: K, weight: f64) {
        debug_assert!(
            weight.is_finite() && weight >= 0.0,
            "edge weight must be finite and non-negative, got {weight}"
        );

        let from = self.add_node(from);
        let to = self.add_node(to);

        self.set_adjacent(from, to, weight);
        if from != to {
            self.set_adjacent(to, from, weight);
        }
    }

    fn set_adjacent(&mut self, from: NodeId, to: NodeId, weight: f64) {
        let adjacency = &mut self.edges[from];
        match adjacency.iter_mut().find(|edge| edge.to == to) {
            Some(edge) => edge.weight = weight,
            None => adjacency.push(Edge { to, weight }),
        }
    }

    pub fn id_of(&self, key: &K) -> Result<NodeId, GraphError> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| GraphError::unknown(key))
    }

    pub fn get_node(&self, key: &K) -> Result<Node<'_, K>, GraphError> {
        let id = self.id_of(key)?;
        Ok(Node { graph: self, id })
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = Node<'_, K>> {
        (0..self.keys.len()).map(move |id| Node { graph: self, id })
    }

    pub fn neighbors(&self, key: &K) -> Result<impl Iterator<Item = (&K, f64)>, GraphError> {
        let id = self.id_of(key)?;
        Ok(self.edges[id]
            .iter()
            .map(move |edge| (&self.keys[edge.to], edge.weight)))
    }

    /// Weight of the edge between `from` and `to`. Symmetric in its arguments.
    pub fn weight(&self, from: &K, to: &K) -> Result<f64, GraphError> {
        let from_id = self.id_of(from)?;
        let to_id = self.id_of(to)?;

        self.edges[from_id]
            .iter()
            .find(|edge| edge.to == to_id)
            .map(|edge| edge.weight)
            .ok_or_else(|| GraphError::NotAdjacent {
                from: format!("{from:?}"),
                to: format!("{to:?}"),
            })
    }

    pub fn degree(&self, key: &K) -> Result<usize, GraphError> {
        let id = self.id_of(key)?;
        Ok(self.edges[id].len())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of undirected edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Every undirected edge once, as `(from, to, weight)` with `from` inserted
    /// no later than `to`.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K, f64)> {
        self.edges.iter().enumerate().flat_map(move |(from, adjacency)| {
            adjacency
                .iter()
                .filter(move |edge| edge.to >= from)
                .map(move |edge| (&self.keys[from], &self.keys[edge.to], edge.weight))
        })
    }

    pub(crate) fn key_at(&self, id: NodeId) -> &K {
        &self.keys[id]
    }

    pub(crate) fn adjacency(&self, id: NodeId) -> &[Edge] {
        &self.edges[id]
    }
}

impl<K: NodeKey + fmt::Display> fmt::Display for Graph<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (from, adjacency) in self.edges.iter().enumerate() {
            for edge in adjacency {
                writeln!(
                    f,
                    "({}, {}, {})",
                    self.keys[from], self.keys[edge.to], edge.weight
                )?;
            }
        }
        Ok(())
    }
}

/// Borrowed handle to a node of a [`Graph`].
///
/// Two handles are equal when their keys are equal.
pub struct Node<'g, K> {
    graph: &'g Graph<K>,
    id: NodeId,
}

impl<K> Clone for Node<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Node<'_, K> {}

impl<'g, K: NodeKey> Node<'g, K> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn key(&self) -> &'g K {
        self.graph.key_at(self.id)
    }

    pub fn degree(&self) -> usize {
        self.graph.adjacency(self.id).len()
    }

    pub fn neighbors(&self) -> impl Iterator<Item = (Node<'g, K>, f64)> + 'g {
        let graph = self.graph;
        graph.adjacency(self.id).iter().map(move |edge| {
            (
                Node {
                    graph,
                    id: edge.to,
                },
                edge.weight,
            )
        })
    }

    pub fn weight_to(&self, neighbor: &K) -> Result<f64, GraphError> {
        self.graph.weight(self.key(), neighbor)
    }
}

impl<K: NodeKey> PartialEq for Node<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<K: NodeKey> Eq for Node<'_, K> {}

impl<K: NodeKey> fmt::Debug for Node<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("key", self.key())
            .field("degree", &self.degree())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_graph() -> Graph<&'static str> {
        Graph::from_edges([
            ("a", "b", 7.0),
            ("a", "c", 9.0),
            ("a", "f", 14.0),
            ("b", "c", 10.0),
            ("b", "d", 15.0),
            ("c", "d", 11.0),
            ("c", "f", 2.0),
            ("d", "e", 6.0),
            ("e", "f", 9.0),
        ])
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = Graph::new();
        let first = graph.add_node("a");
        let second = graph.add_node("a");

        assert_eq!(first, second);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_add_edge_creates_missing_endpoints() {
        let mut graph = Graph::new();
        graph.add_edge("x", "y", 3.5);

        assert!(graph.contains(&"x"));
        assert!(graph.contains(&"y"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_weight_is_symmetric() {
        let graph = reference_graph();

        for (from, to, weight) in graph.edges() {
            assert_eq!(graph.weight(from, to), Ok(weight));
            assert_eq!(graph.weight(to, from), Ok(weight));
        }
    }

    #[test]
    fn test_repeated_edge_overwrites_weight() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", 4.0);
        graph.add_edge("b", "a", 1.5);

        assert_eq!(graph.weight(&"a", &"b"), Ok(1.5));
        assert_eq!(graph.degree(&"a"), Ok(1));
        assert_eq!(graph.degree(&"b"), Ok(1));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_identical_edge_twice_leaves_graph_unchanged() {
        let mut once = Graph::new();
        once.add_edge("a", "b", 2.0);

        let mut twice = once.clone();
        twice.add_edge("a", "b", 2.0);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_self_loop_is_stored_once() {
        let mut graph = Graph::new();
        graph.add_edge("a", "a", 1.0);

        assert_eq!(graph.degree(&"a"), Ok(1));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_unknown_node() {
        let graph = reference_graph();

        assert_eq!(
            graph.get_node(&"z").unwrap_err(),
            GraphError::UnknownNode("\"z\"".to_string())
        );
        assert!(graph.neighbors(&"z").is_err());
        assert!(graph.weight(&"a", &"z").is_err());
    }

    #[test]
    fn test_weight_between_non_adjacent_nodes() {
        let graph = reference_graph();

        assert!(matches!(
            graph.weight(&"a", &"e"),
            Err(GraphError::NotAdjacent { .. })
        ));
    }

    #[test]
    fn test_nodes_in_insertion_order() {
        let graph = reference_graph();
        let keys: Vec<_> = graph.nodes().map(|node| *node.key()).collect();

        assert_eq!(keys, vec!["a", "b", "c", "f", "d", "e"]);
    }

    #[test]
    fn test_node_handle() {
        let graph = reference_graph();
        let c = graph.get_node(&"c").unwrap();

        assert_eq!(c.degree(), 4);
        assert_eq!(c.weight_to(&"f"), Ok(2.0));

        let mut neighbors: Vec<_> = c.neighbors().map(|(n, w)| (*n.key(), w)).collect();
        neighbors.sort_by(|a, b| a.0.cmp(b.0));
        assert_eq!(
            neighbors,
            vec![("a", 9.0), ("b", 10.0), ("d", 11.0), ("f", 2.0)]
        );
        assert_eq!(c, graph.get_node(&"c").unwrap());
    }

    #[test]
    fn test_display_lists_adjacency_entries() {
        let graph: Graph<String> = Graph::from_edges([("a".to_string(), "b".to_string(), 7.0)]);

        assert_eq!(graph.to_string(), "(a, b, 7)\n(b, a, 7)\n");
    }
}
