pub mod loader;

pub use loader::{load_edge_records, parse_edge_records, IngestError};
