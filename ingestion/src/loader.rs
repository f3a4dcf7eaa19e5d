use rotaplan_core::error::{ErrorCode, RotaplanError};
use rotaplan_core::model::EdgeRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read edge list: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed edge record at row {row}: {source}")]
    Malformed { row: usize, source: csv::Error },
    #[error("empty origin or destination at row {row}")]
    EmptyEndpoint { row: usize },
}

impl RotaplanError for IngestError {
    fn error_code(&self) -> ErrorCode {
        match self {
            IngestError::Io(_) => ErrorCode::Internal,
            IngestError::Malformed { .. } | IngestError::EmptyEndpoint { .. } => {
                ErrorCode::InvalidArgument
            }
        }
    }
}

/// Load edge records from a headered CSV file
/// (`origin,destination,distance`), in file order.
pub fn load_edge_records(path: impl AsRef<Path>) -> Result<Vec<EdgeRecord>, IngestError> {
    let file = File::open(path.as_ref())?;
    let records = parse_edge_records(file)?;
    info!(
        "loaded {} edge records from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

/// Parse edge records from any reader. Row numbers in errors are
/// 1-based data-row positions, excluding the header.
///
/// Distance signs are not checked here; a negative distance is the
/// graph's `InvalidEdge` contract, not the parser's.
pub fn parse_edge_records(reader: impl Read) -> Result<Vec<EdgeRecord>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<EdgeRecord>().enumerate() {
        let row_number = index + 1;
        let record = row.map_err(|source| IngestError::Malformed {
            row: row_number,
            source,
        })?;
        if record.origin.is_empty() || record.destination.is_empty() {
            return Err(IngestError::EmptyEndpoint { row: row_number });
        }
        records.push(record);
    }
    Ok(records)
}
