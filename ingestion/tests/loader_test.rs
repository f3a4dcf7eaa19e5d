use graph::{GraphModel, PathReporter, ShortestPathEngine};
use ingestion::{load_edge_records, parse_edge_records, IngestError};
use std::fs;

const MAP_CSV: &str = "\
origin,destination,distance
Depot,A,2.0
A,B,1.0
B,H,3.5
";

#[test]
fn test_parse_well_formed_csv_in_file_order() {
    let records = parse_edge_records(MAP_CSV.as_bytes()).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].origin, "Depot");
    assert_eq!(records[0].destination, "A");
    assert_eq!(records[0].distance, 2.0);
    assert_eq!(records[2].destination, "H");
}

#[test]
fn test_parse_trims_whitespace() {
    let csv = "origin,destination,distance\n Depot , A , 2.0\n";
    let records = parse_edge_records(csv.as_bytes()).unwrap();
    assert_eq!(records[0].origin, "Depot");
    assert_eq!(records[0].destination, "A");
}

#[test]
fn test_malformed_distance_reports_row() {
    let csv = "origin,destination,distance\nDepot,A,2.0\nA,B,not-a-number\n";
    let err = parse_edge_records(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, IngestError::Malformed { row: 2, .. }));
}

#[test]
fn test_empty_endpoint_reports_row() {
    let csv = "origin,destination,distance\nDepot,A,2.0\n,B,1.0\n";
    let err = parse_edge_records(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, IngestError::EmptyEndpoint { row: 2 }));
}

#[test]
fn test_load_from_file_and_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map_edges.csv");
    fs::write(&path, MAP_CSV).unwrap();

    let records = load_edge_records(&path).unwrap();
    assert_eq!(records.len(), 3);

    let missing = dir.path().join("nope.csv");
    assert!(matches!(
        load_edge_records(&missing).unwrap_err(),
        IngestError::Io(_)
    ));
}

#[test]
fn test_loaded_records_route_end_to_end() {
    let records = parse_edge_records(MAP_CSV.as_bytes()).unwrap();
    let graph = GraphModel::from_records(&records).unwrap();

    let result = ShortestPathEngine::run(&graph, "Depot").unwrap();
    let route = PathReporter::reconstruct(&graph, &result, "H").unwrap();

    assert_eq!(route.stops, vec!["Depot", "A", "B", "H"]);
    assert_eq!(route.distance, 6.5);
}

#[test]
fn test_negative_distance_passes_parser_fails_graph() {
    let csv = "origin,destination,distance\nDepot,A,-2.0\n";
    let records = parse_edge_records(csv.as_bytes()).unwrap();
    assert_eq!(records[0].distance, -2.0);

    assert!(GraphModel::from_records(&records).is_err());
}
