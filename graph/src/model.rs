use crate::error::GraphError;
use rotaplan_core::model::EdgeRecord;
use std::collections::HashMap;

/// Weighted undirected adjacency index over named map points.
///
/// Symmetry is enforced at insertion: adding (a, b, w) makes b reachable
/// from a and a from b with the same weight. Re-inserting an unordered
/// pair, in either direction, replaces the previous weight (last write
/// wins). Once built from its edge list the model is treated as
/// immutable; the search and reporting layers take `&GraphModel` only.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    adjacency: HashMap<String, Vec<(String, f64)>>,
    order: Vec<String>, // node ids in first-seen order
}

impl GraphModel {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Build a model from already-structured edge records, in record
    /// order. Fails on the first record with a negative or NaN distance.
    pub fn from_records(records: &[EdgeRecord]) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for record in records {
            graph.add_edge(&record.origin, &record.destination, record.distance)?;
        }
        Ok(graph)
    }

    /// Register a node with no edges. A no-op for known nodes.
    pub fn add_node(&mut self, node: &str) {
        self.ensure_node(node);
    }

    /// Insert an undirected edge. Both endpoints become known nodes.
    /// Negative and NaN weights are rejected, never clamped.
    pub fn add_edge(
        &mut self,
        origin: &str,
        destination: &str,
        weight: f64,
    ) -> Result<(), GraphError> {
        if weight < 0.0 || weight.is_nan() {
            return Err(GraphError::InvalidEdge {
                origin: origin.to_string(),
                destination: destination.to_string(),
                weight,
            });
        }

        self.ensure_node(origin);
        self.ensure_node(destination);

        if let Some(edges) = self.adjacency.get_mut(origin) {
            upsert_neighbor(edges, destination, weight);
        }
        // Self-loops are stored once, not mirrored.
        if origin != destination {
            if let Some(edges) = self.adjacency.get_mut(destination) {
                upsert_neighbor(edges, origin, weight);
            }
        }
        Ok(())
    }

    /// Read-only adjacency view for `node`, in insertion order. An
    /// isolated node yields an empty slice; an unknown node fails.
    pub fn neighbors(&self, node: &str) -> Result<&[(String, f64)], GraphError> {
        self.adjacency
            .get(node)
            .map(|edges| edges.as_slice())
            .ok_or_else(|| GraphError::NodeNotFound(node.to_string()))
    }

    pub fn has_node(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Weight of the unordered pair (a, b), if such an edge exists.
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        self.adjacency
            .get(a)?
            .iter()
            .find(|(neighbor, _)| neighbor == b)
            .map(|(_, weight)| *weight)
    }

    /// Node identifiers in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Every unordered pair reported once, ordered by when its endpoints
    /// first entered the model.
    pub fn edges(&self) -> Vec<(&str, &str, f64)> {
        let position: HashMap<&str, usize> = self
            .order
            .iter()
            .enumerate()
            .map(|(idx, node)| (node.as_str(), idx))
            .collect();

        let mut out = Vec::new();
        for node in &self.order {
            if let Some(edges) = self.adjacency.get(node) {
                for (neighbor, weight) in edges {
                    if position[neighbor.as_str()] >= position[node.as_str()] {
                        out.push((node.as_str(), neighbor.as_str(), *weight));
                    }
                }
            }
        }
        out
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    fn ensure_node(&mut self, node: &str) {
        if !self.adjacency.contains_key(node) {
            self.adjacency.insert(node.to_string(), Vec::new());
            self.order.push(node.to_string());
        }
    }
}

fn upsert_neighbor(edges: &mut Vec<(String, f64)>, neighbor: &str, weight: f64) {
    match edges.iter_mut().find(|(node, _)| node == neighbor) {
        Some(entry) => entry.1 = weight,
        None => edges.push((neighbor.to_string(), weight)),
    }
}
