use serde::{Deserialize, Serialize};

/// One row of the map edge list: an undirected street segment between two
/// named points, with its physical distance as the weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub origin: String,
    pub destination: String,
    pub distance: f64,
}

impl EdgeRecord {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        distance: f64,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            distance,
        }
    }
}
