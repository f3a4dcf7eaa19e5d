use crate::dijkstra::SearchResult;
use crate::error::GraphError;
use crate::model::GraphModel;
use serde::{Deserialize, Serialize};

/// Absolute tolerance when comparing a route's summed edge weights
/// against the distance reported by the search.
pub const DISTANCE_TOLERANCE: f64 = 1e-9;

/// An ordered stop sequence from source to target with its total
/// distance. Invariant: the consecutive-pair edge weights along `stops`
/// sum to `distance` within [`DISTANCE_TOLERANCE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub stops: Vec<String>,
    pub distance: f64,
}

impl Route {
    pub fn hops(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// Check the distance invariant against fresh edge lookups.
    pub fn verify(&self, graph: &GraphModel) -> bool {
        route_distance(graph, &self.stops)
            .is_some_and(|total| (total - self.distance).abs() <= DISTANCE_TOLERANCE)
    }
}

/// Sum of consecutive-pair edge weights along `stops`, looked up fresh
/// from the model. `None` when some consecutive pair has no edge.
pub fn route_distance(graph: &GraphModel, stops: &[String]) -> Option<f64> {
    let mut total = 0.0;
    for pair in stops.windows(2) {
        total += graph.edge_weight(&pair[0], &pair[1])?;
    }
    Some(total)
}

/// Turns predecessor links from a finished search back into an ordered
/// source-to-target route.
pub struct PathReporter;

impl PathReporter {
    pub fn reconstruct(
        graph: &GraphModel,
        result: &SearchResult,
        target: &str,
    ) -> Result<Route, GraphError> {
        if !graph.has_node(target) {
            return Err(GraphError::NodeNotFound(target.to_string()));
        }
        let Some(distance) = result.distance_to(target) else {
            return Err(GraphError::NoPathExists {
                origin: result.source().to_string(),
                destination: target.to_string(),
            });
        };

        // Walk backward until the source, whose predecessor is none.
        let mut stops = vec![target.to_string()];
        let mut current = target.to_string();
        while let Some(previous) = result.predecessor(&current) {
            current = previous.to_string();
            stops.push(current.clone());
        }
        stops.reverse();

        Ok(Route { stops, distance })
    }
}
