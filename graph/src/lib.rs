pub mod dijkstra;
pub mod error;
pub mod model;
pub mod path;

pub use dijkstra::{SearchResult, ShortestPathEngine};
pub use error::GraphError;
pub use model::GraphModel;
pub use path::{route_distance, PathReporter, Route, DISTANCE_TOLERANCE};
