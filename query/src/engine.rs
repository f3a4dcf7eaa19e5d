use crate::dsl::{RouteRequest, RouteValidationError};
use graph::{GraphError, GraphModel, PathReporter, Route, SearchResult, ShortestPathEngine};
use rotaplan_core::error::{ErrorCode, RotaplanError};
use rotaplan_core::metrics::{MetricsCollector, MetricsSnapshot};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, warn};

const METRICS_HISTORY: usize = 1_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRoute {
    pub target: String,
    pub route: Route,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    pub origin: String,
    pub destination: String,
    pub route: Route,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternates: Vec<TargetRoute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unreachable: Vec<String>,
    pub latency_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapEdge {
    pub origin: String,
    pub destination: String,
    pub distance: f64,
}

/// Read-only view of the whole map for visualization collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOverview {
    pub nodes: Vec<String>,
    pub edges: Vec<MapEdge>,
    pub node_count: usize,
    pub edge_count: usize,
}

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("invalid request: {0}")]
    Validation(#[from] RouteValidationError),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("route to '{target}' does not sum to the reported distance {expected}")]
    DistanceMismatch { target: String, expected: f64 },
}

impl RotaplanError for RouteError {
    fn error_code(&self) -> ErrorCode {
        match self {
            RouteError::InvalidRequest(_) | RouteError::Validation(_) => {
                ErrorCode::InvalidArgument
            }
            RouteError::Graph(err) => err.error_code(),
            RouteError::DistanceMismatch { .. } => ErrorCode::Internal,
        }
    }
}

/// Answers route queries against one immutable map.
///
/// The engine owns the `GraphModel` after construction; queries never
/// mutate it, so a single engine serves any number of requests.
pub struct RouteEngine {
    graph: GraphModel,
    metrics: MetricsCollector,
}

impl RouteEngine {
    pub fn new(graph: GraphModel) -> Self {
        Self {
            graph,
            metrics: MetricsCollector::new(METRICS_HISTORY),
        }
    }

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    pub fn execute_json(&self, raw: &str) -> Result<RouteResponse, RouteError> {
        let request = RouteRequest::parse_json(raw)
            .map_err(|err| RouteError::InvalidRequest(err.to_string()))?;
        self.execute(request)
    }

    pub fn execute(&self, request: RouteRequest) -> Result<RouteResponse, RouteError> {
        let start = Instant::now();
        let result = self.execute_internal(&request);
        let latency_us = start.elapsed().as_micros() as u64;

        let no_route = matches!(
            &result,
            Err(RouteError::Graph(GraphError::NoPathExists { .. }))
        );
        self.metrics.record_route(latency_us, no_route);

        let mut response = result?;
        response.latency_ms = latency_us / 1_000;
        Ok(response)
    }

    pub fn overview(&self) -> MapOverview {
        let nodes: Vec<String> = self.graph.nodes().map(str::to_string).collect();
        let edges: Vec<MapEdge> = self
            .graph
            .edges()
            .into_iter()
            .map(|(origin, destination, distance)| MapEdge {
                origin: origin.to_string(),
                destination: destination.to_string(),
                distance,
            })
            .collect();

        MapOverview {
            node_count: nodes.len(),
            edge_count: edges.len(),
            nodes,
            edges,
        }
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    pub fn metrics_collector(&self) -> &MetricsCollector {
        &self.metrics
    }

    fn execute_internal(&self, request: &RouteRequest) -> Result<RouteResponse, RouteError> {
        request.validate()?;
        debug!(
            origin = %request.origin,
            destination = %request.destination,
            targets = request.targets.len(),
            "route query"
        );

        // One search serves the destination and every fan-out target.
        let search = ShortestPathEngine::run(&self.graph, &request.origin)?;
        let route = self.reconstruct_verified(&search, &request.destination)?;

        let mut alternates = Vec::new();
        let mut unreachable = Vec::new();
        for target in &request.targets {
            if target == &request.destination {
                continue;
            }
            match self.reconstruct_verified(&search, target) {
                Ok(route) => alternates.push(TargetRoute {
                    target: target.clone(),
                    route,
                }),
                Err(RouteError::Graph(GraphError::NoPathExists { .. })) => {
                    unreachable.push(target.clone());
                }
                Err(err) => return Err(err),
            }
        }

        Ok(RouteResponse {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            route,
            alternates,
            unreachable,
            latency_ms: 0,
        })
    }

    fn reconstruct_verified(
        &self,
        search: &SearchResult,
        target: &str,
    ) -> Result<Route, RouteError> {
        let route = PathReporter::reconstruct(&self.graph, search, target)?;
        if !route.verify(&self.graph) {
            warn!(node = target, "reconstructed route failed distance verification");
            return Err(RouteError::DistanceMismatch {
                target: target.to_string(),
                expected: route.distance,
            });
        }
        Ok(route)
    }
}
