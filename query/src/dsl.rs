use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    /// Additional targets answered from the same single-source search.
    #[serde(default)]
    pub targets: Vec<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteValidationError {
    #[error("origin must not be empty")]
    EmptyOrigin,
    #[error("destination must not be empty")]
    EmptyDestination,
    #[error("targets must not contain empty values")]
    EmptyTarget,
}

impl RouteRequest {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            targets: Vec::new(),
        }
    }

    pub fn with_targets(mut self, targets: Vec<String>) -> Self {
        self.targets = targets;
        self
    }

    pub fn parse_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn validate(&self) -> Result<(), RouteValidationError> {
        if self.origin.trim().is_empty() {
            return Err(RouteValidationError::EmptyOrigin);
        }
        if self.destination.trim().is_empty() {
            return Err(RouteValidationError::EmptyDestination);
        }
        if self.targets.iter().any(|target| target.trim().is_empty()) {
            return Err(RouteValidationError::EmptyTarget);
        }
        Ok(())
    }
}
