use rotaplan_core::error::{ErrorCode, RotaplanError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("invalid edge {origin} - {destination}: weight {weight} must be non-negative")]
    InvalidEdge {
        origin: String,
        destination: String,
        weight: f64,
    },
    #[error("node '{0}' not found in map")]
    NodeNotFound(String),
    #[error("no path exists between '{origin}' and '{destination}'")]
    NoPathExists {
        origin: String,
        destination: String,
    },
}

impl RotaplanError for GraphError {
    fn error_code(&self) -> ErrorCode {
        match self {
            GraphError::InvalidEdge { .. } => ErrorCode::InvalidArgument,
            GraphError::NodeNotFound(_) => ErrorCode::NotFound,
            GraphError::NoPathExists { .. } => ErrorCode::FailedPrecondition,
        }
    }
}
