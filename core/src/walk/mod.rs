pub mod source;

pub use source::{RandSource, SequenceSource, UniformSource};

use crate::graph::{AdjacencyMap, NodeId};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct WalkResult {
    /// Every key of the walked map with its visit count, highest first.
    /// Equal counts keep key order.
    pub ranking: Vec<(NodeId, u32)>,
    pub restarts: usize,
    pub stalls: usize,
}

/// Visit counts aligned with the keys of the walked map.
struct ScoreTable<'a> {
    graph: &'a AdjacencyMap,
    counts: Vec<u32>,
}

impl<'a> ScoreTable<'a> {
    fn new(graph: &'a AdjacencyMap) -> Self {
        Self {
            graph,
            counts: vec![0; graph.len()],
        }
    }

    fn record_visit(&mut self, node: NodeId) {
        if let Some(slot) = self.graph.slot(node) {
            self.counts[slot] += 1;
        }
    }

    fn into_ranking(self) -> Vec<(NodeId, u32)> {
        let mut ranking: Vec<(NodeId, u32)> = self
            .graph
            .keys()
            .iter()
            .copied()
            .zip(self.counts)
            .collect();
        ranking.sort_by(|a, b| b.1.cmp(&a.1));
        ranking
    }
}

enum Step {
    Moved(NodeId),
    Restart,
    Stall,
}

fn take_step<S>(graph: &AdjacencyMap, current: NodeId, source: &mut S) -> Step
where
    S: UniformSource + ?Sized,
{
    let neighbors = match graph.neighbors(current) {
        Some(neighbors) if !neighbors.is_empty() => neighbors,
        _ => return Step::Restart,
    };

    let total_weight: f64 = neighbors.iter().map(|(_, weight)| weight).sum();
    if total_weight == 0.0 {
        return Step::Stall;
    }

    let sample = source.next_unit();
    let mut cumulative = 0.0;
    for &(neighbor, weight) in neighbors {
        cumulative += weight / total_weight;
        if sample <= cumulative {
            return Step::Moved(neighbor);
        }
    }

    // Rounding left the sample above the last cumulative bound
    Step::Moved(current)
}

/// Runs a fixed-length weighted random walk from `start` and ranks every key
/// of `graph` by how often the walk landed on it.
pub fn random_walk<S>(graph: &AdjacencyMap, start: NodeId, steps: usize, source: &mut S) -> WalkResult
where
    S: UniformSource + ?Sized,
{
    let mut scores = ScoreTable::new(graph);
    let mut current = start;
    let mut restarts = 0;
    let mut stalls = 0;

    for _ in 0..steps {
        match take_step(graph, current, source) {
            Step::Restart => {
                current = start;
                restarts += 1;
            }
            Step::Stall => stalls += 1,
            Step::Moved(next) => {
                current = next;
                scores.record_visit(current);
            }
        }
    }

    debug!(start, steps, restarts, stalls, "random walk finished");

    WalkResult {
        ranking: scores.into_ranking(),
        restarts,
        stalls,
    }
}
