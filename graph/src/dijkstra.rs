use crate::error::GraphError;
use crate::model::GraphModel;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Frontier entry ordered by (distance, insertion sequence).
///
/// Comparison is reversed so `BinaryHeap` behaves as a min-heap; the
/// sequence number makes extraction FIFO among equal distances, so
/// repeated runs on identical input finalize nodes in the same order.
#[derive(Debug, Clone)]
struct FrontierEntry {
    node: String,
    distance: f64,
    seq: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.seq == other.seq
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
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ReachedNode {
    distance: f64,
    predecessor: Option<String>,
}

/// Finalized state of one single-source search. Every entry is proven
/// optimal; a node absent from the result was unreachable from the
/// source. No intermediate search state is exposed.
#[derive(Debug, Clone)]
pub struct SearchResult {
    source: String,
    reached: HashMap<String, ReachedNode>,
}

impl SearchResult {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn distance_to(&self, node: &str) -> Option<f64> {
        self.reached.get(node).map(|reached| reached.distance)
    }

    /// Immediate prior node on the shortest path to `node`. `None` for
    /// the source itself and for unreached nodes.
    pub fn predecessor(&self, node: &str) -> Option<&str> {
        self.reached
            .get(node)
            .and_then(|reached| reached.predecessor.as_deref())
    }

    pub fn is_reached(&self, node: &str) -> bool {
        self.reached.contains_key(node)
    }

    pub fn reached_count(&self) -> usize {
        self.reached.len()
    }
}

/// Single-source Dijkstra over non-negative edge weights.
pub struct ShortestPathEngine;

impl ShortestPathEngine {
    /// Run the search to frontier exhaustion, covering every node
    /// reachable from `source`.
    pub fn run(graph: &GraphModel, source: &str) -> Result<SearchResult, GraphError> {
        if !graph.has_node(source) {
            return Err(GraphError::NodeNotFound(source.to_string()));
        }

        // Best known (distance, predecessor) per touched node; entries
        // move into `reached` when finalized and never change after.
        let mut best: HashMap<String, (f64, Option<String>)> = HashMap::new();
        let mut reached: HashMap<String, ReachedNode> = HashMap::new();
        let mut frontier = BinaryHeap::new();
        let mut seq = 0u64;

        best.insert(source.to_string(), (0.0, None));
        frontier.push(FrontierEntry {
            node: source.to_string(),
            distance: 0.0,
            seq,
        });

        while let Some(FrontierEntry { node, distance, .. }) = frontier.pop() {
            if reached.contains_key(&node) {
                continue; // stale entry for an already finalized node
            }

            let predecessor = best
                .get(&node)
                .and_then(|(_, predecessor)| predecessor.clone());
            reached.insert(
                node.clone(),
                ReachedNode {
                    distance,
                    predecessor,
                },
            );

            for (neighbor, weight) in graph.neighbors(&node)? {
                if reached.contains_key(neighbor) {
                    continue;
                }

                let candidate = distance + weight;
                let improves = match best.get(neighbor) {
                    Some((current, _)) => candidate < *current,
                    None => true,
                };
                if improves {
                    best.insert(neighbor.clone(), (candidate, Some(node.clone())));
                    seq += 1;
                    frontier.push(FrontierEntry {
                        node: neighbor.clone(),
                        distance: candidate,
                        seq,
                    });
                }
            }
        }

        Ok(SearchResult {
            source: source.to_string(),
            reached,
        })
    }
}
