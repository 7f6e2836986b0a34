use crate::error::GraphError;
use crate::frontier::{Frontier, FrontierEntry, INFINITY};
use crate::graph::{Graph, NodeId, NodeKey};
use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-node bookkeeping of a single run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeState {
    pub distance: f64,
    pub visited: bool,
    pub predecessor: Option<NodeId>,
}

impl NodeState {
    pub const UNREACHED: NodeState = NodeState {
        distance: INFINITY,
        visited: false,
        predecessor: None,
    };
}

impl Default for NodeState {
    fn default() -> Self {
        NodeState::UNREACHED
    }
}

/// Dijkstra's algorithm over a borrowed [`Graph`].
///
/// The engine never mutates the graph. Each call to [`run`](Self::run)
/// allocates its own state table, so one engine (or several engines over the
/// same graph) can answer any number of queries.
#[derive(Debug, Clone)]
pub struct ShortestPathEngine<'g, K> {
    graph: &'g Graph<K>,
    ranks: Vec<usize>,
}

impl<'g, K: NodeKey> ShortestPathEngine<'g, K> {
    pub fn new(graph: &'g Graph<K>) -> Self {
        // Equal distances are settled in key order.
        let mut order: Vec<NodeId> = (0..graph.len()).collect();
        order.sort_by(|&a, &b| graph.key_at(a).cmp(graph.key_at(b)));

        let mut ranks = vec![0; graph.len()];
        for (rank, id) in order.into_iter().enumerate() {
            ranks[id] = rank;
        }

        ShortestPathEngine { graph, ranks }
    }

    pub fn graph(&self) -> &'g Graph<K> {
        self.graph
    }

    /// Computes distances and predecessors from `source` to every node.
    pub fn run(&self, source: &K) -> Result<ShortestPaths<'g, K>, GraphError> {
        let source_id = self.graph.id_of(source)?;
        let n = self.graph.len();

        let mut states = vec![NodeState::UNREACHED; n];
        let mut settled = Vec::with_capacity(n);
        let mut frontier = Frontier::with_capacity(n);

        states[source_id].distance = 0.0;
        frontier.push(FrontierEntry::new(source_id, self.ranks[source_id], 0.0));

        debug!("Dijkstra from {source:?} over {n} nodes");

        while let Some(FrontierEntry { node, distance, .. }) = frontier.pop() {
            if states[node].visited || distance > states[node].distance {
                continue;
            }

            states[node].visited = true;
            settled.push(node);
            trace!(
                "[current] {:?} at distance {distance}",
                self.graph.key_at(node)
            );

            for edge in self.graph.adjacency(node) {
                let neighbor = &mut states[edge.to];
                if neighbor.visited {
                    trace!("  {:?} is already visited", self.graph.key_at(edge.to));
                    continue;
                }

                let candidate = distance + edge.weight;
                if candidate < neighbor.distance {
                    trace!(
                        "  {:?} updated from {} to {candidate}",
                        self.graph.key_at(edge.to),
                        neighbor.distance
                    );
                    neighbor.distance = candidate;
                    neighbor.predecessor = Some(node);
                    frontier.push(FrontierEntry::new(edge.to, self.ranks[edge.to], candidate));
                } else {
                    trace!(
                        "  {:?} not updated (still {})",
                        self.graph.key_at(edge.to),
                        neighbor.distance
                    );
                }
            }
        }

        debug!(
            "Dijkstra from {source:?} settled {} of {n} nodes",
            settled.len()
        );

        Ok(ShortestPaths {
            graph: self.graph,
            source: source_id,
            states,
            settled,
        })
    }

    /// Cost and node sequence of a shortest path from `source` to `destination`.
    pub fn shortest_path(
        &self,
        source: &K,
        destination: &K,
    ) -> Result<(f64, Vec<&'g K>), GraphError> {
        let paths = self.run(source)?;
        let path = paths.path_to(destination)?;
        Ok((paths.distance(destination)?, path))
    }
}

/// Shorthand for a single query with a throwaway engine.
pub fn run<'g, K: NodeKey>(
    graph: &'g Graph<K>,
    source: &K,
) -> Result<ShortestPaths<'g, K>, GraphError> {
    ShortestPathEngine::new(graph).run(source)
}

/// Outcome of one run: the final state of every node.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g, K> {
    graph: &'g Graph<K>,
    source: NodeId,
    states: Vec<NodeState>,
    settled: Vec<NodeId>,
}

impl<'g, K: NodeKey> ShortestPaths<'g, K> {
    pub fn source(&self) -> &'g K {
        self.graph.key_at(self.source)
    }

    pub fn state(&self, key: &K) -> Result<NodeState, GraphError> {
        let id = self.graph.id_of(key)?;
        Ok(self.states[id])
    }

    /// Cost of the cheapest path from the source, `INFINITY` if there is none.
    pub fn distance(&self, key: &K) -> Result<f64, GraphError> {
        Ok(self.state(key)?.distance)
    }

    pub fn predecessor(&self, key: &K) -> Result<Option<&'g K>, GraphError> {
        Ok(self
            .state(key)?
            .predecessor
            .map(|id| self.graph.key_at(id)))
    }

    pub fn is_visited(&self, key: &K) -> Result<bool, GraphError> {
        Ok(self.state(key)?.visited)
    }

    pub fn is_reachable(&self, key: &K) -> Result<bool, GraphError> {
        Ok(self.distance(key)? != INFINITY)
    }

    /// Nodes from the source to `destination`, both included.
    pub fn path_to(&self, destination: &K) -> Result<Vec<&'g K>, GraphError> {
        let target = self.graph.id_of(destination)?;
        if self.states[target].distance == INFINITY {
            return Err(GraphError::unreachable(destination));
        }

        let mut path = vec![self.graph.key_at(target)];
        let mut current = target;
        while let Some(previous) = self.states[current].predecessor {
            path.push(self.graph.key_at(previous));
            current = previous;
        }

        path.reverse();
        Ok(path)
    }

    /// `(key, distance)` for every node, in insertion order.
    pub fn distances(&self) -> impl Iterator<Item = (&'g K, f64)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(|(id, state)| (self.graph.key_at(id), state.distance))
    }

    pub fn reachable_count(&self) -> usize {
        self.settled.len()
    }

    /// Keys in the order the run finalized them.
    pub fn settled_order(&self) -> impl Iterator<Item = &'g K> + '_ {
        self.settled.iter().map(|&id| self.graph.key_at(id))
    }
}

/// `(key,distance)` for visited nodes, `[key,distance]` for the rest.
impl<K: NodeKey + fmt::Display> fmt::Display for ShortestPaths<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (id, state) in self.states.iter().enumerate() {
            if id > 0 {
                write!(f, ", ")?;
            }
            let key = self.graph.key_at(id);
            if state.visited {
                write!(f, "({key},{})", state.distance)?;
            } else {
                write!(f, "[{key},{}]", state.distance)?;
            }
        }
        write!(f, "]")
    }
}
