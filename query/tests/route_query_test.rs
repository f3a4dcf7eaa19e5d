use graph::GraphModel;
use query::{RouteEngine, RouteRequest};
use rotaplan_core::model::EdgeRecord;

fn seeded_engine() -> RouteEngine {
    let mut graph = GraphModel::from_records(&[
        EdgeRecord::new("Depot", "A", 2.0),
        EdgeRecord::new("Depot", "B", 4.5),
        EdgeRecord::new("A", "B", 1.0),
        EdgeRecord::new("A", "C", 7.0),
        EdgeRecord::new("B", "C", 3.0),
        EdgeRecord::new("C", "H", 1.5),
        EdgeRecord::new("B", "H", 6.0),
    ])
    .unwrap();
    graph.add_node("Island");
    RouteEngine::new(graph)
}

#[test]
fn test_json_request_defaults_and_validation() {
    let request =
        RouteRequest::parse_json(r#"{"origin": "Depot", "destination": "H"}"#).unwrap();
    assert_eq!(request.origin, "Depot");
    assert_eq!(request.destination, "H");
    assert!(request.targets.is_empty());
    assert!(request.validate().is_ok());

    let blank = RouteRequest::parse_json(r#"{"origin": " ", "destination": "H"}"#).unwrap();
    assert!(blank.validate().is_err());

    let missing_field = RouteRequest::parse_json(r#"{"origin": "Depot"}"#);
    assert!(missing_field.is_err());
}

#[test]
fn test_execute_returns_shortest_route() {
    let engine = seeded_engine();
    let response = engine
        .execute(RouteRequest::new("Depot", "H"))
        .unwrap();

    assert_eq!(response.route.stops, vec!["Depot", "A", "B", "C", "H"]);
    assert_eq!(response.route.distance, 7.5);
    assert_eq!(response.route.hops(), 4);
    assert!(response.alternates.is_empty());
    assert!(response.unreachable.is_empty());
    assert!(response.route.verify(engine.graph()));
}

#[test]
fn test_execute_json_end_to_end() {
    let engine = seeded_engine();
    let response = engine
        .execute_json(r#"{"origin": "Depot", "destination": "C"}"#)
        .unwrap();

    assert_eq!(response.route.stops, vec!["Depot", "A", "B", "C"]);
    assert_eq!(response.route.distance, 6.0);

    let serialized = serde_json::to_value(&response).unwrap();
    assert_eq!(serialized["destination"], "C");
    // Empty fan-out collections stay off the wire.
    assert!(serialized.get("alternates").is_none());
    assert!(serialized.get("unreachable").is_none());
}

#[test]
fn test_fanout_targets_share_one_search() {
    let engine = seeded_engine();
    let request = RouteRequest::new("Depot", "H")
        .with_targets(vec!["C".to_string(), "B".to_string(), "H".to_string()]);

    let response = engine.execute(request).unwrap();

    // The primary destination is never duplicated into alternates.
    assert_eq!(response.alternates.len(), 2);
    assert_eq!(response.alternates[0].target, "C");
    assert_eq!(response.alternates[1].target, "B");

    for alternate in &response.alternates {
        let individual = engine
            .execute(RouteRequest::new("Depot", alternate.target.clone()))
            .unwrap();
        assert_eq!(individual.route, alternate.route);
    }
}

#[test]
fn test_unreachable_fanout_target_reported_not_fatal() {
    let engine = seeded_engine();
    let request =
        RouteRequest::new("Depot", "H").with_targets(vec!["Island".to_string()]);

    let response = engine.execute(request).unwrap();
    assert_eq!(response.route.distance, 7.5);
    assert!(response.alternates.is_empty());
    assert_eq!(response.unreachable, vec!["Island"]);
}

#[test]
fn test_origin_equals_destination() {
    let engine = seeded_engine();
    let response = engine
        .execute(RouteRequest::new("Depot", "Depot"))
        .unwrap();

    assert_eq!(response.route.stops, vec!["Depot"]);
    assert_eq!(response.route.distance, 0.0);
}

#[test]
fn test_repeated_queries_return_identical_routes() {
    let engine = seeded_engine();
    let first = engine.execute(RouteRequest::new("Depot", "H")).unwrap();
    for _ in 0..10 {
        let again = engine.execute(RouteRequest::new("Depot", "H")).unwrap();
        assert_eq!(again.route, first.route);
    }
}

#[test]
fn test_overview_exposes_whole_map() {
    let engine = seeded_engine();
    let overview = engine.overview();

    assert_eq!(overview.node_count, 6);
    assert_eq!(overview.edge_count, 7);
    assert_eq!(overview.nodes[0], "Depot");
    assert!(overview.nodes.contains(&"Island".to_string()));

    let depot_a = &overview.edges[0];
    assert_eq!((depot_a.origin.as_str(), depot_a.destination.as_str()), ("Depot", "A"));
    assert_eq!(depot_a.distance, 2.0);
}

#[test]
fn test_csv_loaded_map_routes_through_engine() {
    let csv = "\
origin,destination,distance
Depot,A,2.0
A,B,1.0
B,H,3.5
";
    let records = ingestion::parse_edge_records(csv.as_bytes()).unwrap();
    let engine = RouteEngine::new(GraphModel::from_records(&records).unwrap());

    let response = engine.execute(RouteRequest::new("Depot", "H")).unwrap();
    assert_eq!(response.route.stops, vec!["Depot", "A", "B", "H"]);
    assert_eq!(response.route.distance, 6.5);
}
