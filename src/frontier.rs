use crate::graph::NodeId;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

pub const INFINITY: f64 = f64::INFINITY;

/// A node waiting in the frontier together with the distance it was
/// queued at.
///
/// A node is queued again every time its distance drops, so older entries
/// go stale. Callers skip stale entries when they pop them.
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    pub node: NodeId,
    pub rank: usize,
    pub distance: f64,
}

impl FrontierEntry {
    pub fn new(node: NodeId, rank: usize, distance: f64) -> Self {
        FrontierEntry {
            node,
            rank,
            distance,
        }
    }
}

/// Orders entries by distance, then by tie-break rank.
///
/// Node identity plays no part in the ordering.
pub fn by_priority(a: &FrontierEntry, b: &FrontierEntry) -> Ordering {
    a.distance
        .total_cmp(&b.distance)
        .then_with(|| a.rank.cmp(&b.rank))
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        by_priority(self, other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        by_priority(self, other)
    }
}

/// Min-priority queue of nodes keyed by tentative distance.
#[derive(Debug, Default)]
pub struct Frontier {
    data: BinaryHeap<Reverse<FrontierEntry>>,
}

impl Frontier {
    pub fn new() -> Self {
        Frontier {
            data: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            data: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Queues `entry`. Entries at an infinite distance can never be
    /// extracted usefully and are dropped.
    pub fn push(&mut self, entry: FrontierEntry) {
        if entry.distance != INFINITY {
            self.data.push(Reverse(entry));
        }
    }

    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.data.pop().map(|Reverse(entry)| entry)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
