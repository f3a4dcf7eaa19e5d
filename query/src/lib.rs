pub mod dsl;
pub mod engine;

pub use dsl::{RouteRequest, RouteValidationError};
pub use engine::{MapEdge, MapOverview, RouteEngine, RouteError, RouteResponse, TargetRoute};
