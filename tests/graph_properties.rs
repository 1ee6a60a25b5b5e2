use response_graph::application::{build_graph, find_nearest};
use response_graph::domain::{haversine_km, DensityClass, GeoPoint};

/// Four corners of a ~1.11 km square on the equator. Sides are under
/// 1.2 km, diagonals about 1.57 km.
fn square() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new("A", 0.0, 0.0),
        GeoPoint::new("B", 0.0, 0.01),
        GeoPoint::new("C", 0.01, 0.0),
        GeoPoint::new("D", 0.01, 0.01),
    ]
}

#[test]
fn square_with_threshold_between_side_and_diagonal_has_four_edges() {
    let graph = build_graph(square(), 1.2).unwrap();
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 4);

    let edges = graph.edges();
    let pairs: Vec<(&str, &str)> = edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect();
    assert_eq!(pairs, vec![("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
    for edge in &edges {
        assert!(edge.distance_km < 1.2);
        assert!(edge.distance_km > 1.0);
    }
}

#[test]
fn edge_count_matches_brute_force() {
    let nodes = vec![
        GeoPoint::new("plaza", -12.0464, -77.0428),
        GeoPoint::new("callao", -12.0566, -77.1181),
        GeoPoint::new("miraflores", -12.1211, -77.0297),
        GeoPoint::new("surco", -12.1358, -76.9894),
        GeoPoint::new("ancon", -11.7761, -77.1760),
    ];
    let threshold = 12.0;

    let mut expected = 0;
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let d = haversine_km(nodes[i].lat, nodes[i].lng, nodes[j].lat, nodes[j].lng);
            if d < threshold {
                expected += 1;
            }
        }
    }

    let graph = build_graph(nodes, threshold).unwrap();
    assert_eq!(graph.edge_count(), expected);
    let density = graph.density();
    assert!((0.0..=1.0).contains(&density));
    let n = graph.node_count();
    assert!(graph.edge_count() <= n * (n - 1) / 2);
}

#[test]
fn identical_input_yields_identical_edge_order() {
    let first = build_graph(square(), 1.2).unwrap();
    let second = build_graph(square(), 1.2).unwrap();
    assert_eq!(first.edges(), second.edges());
}

#[test]
fn zero_threshold_retains_no_edges() {
    // Even coincident nodes are excluded under a strict < 0 comparison.
    let nodes = vec![GeoPoint::new("A", 0.0, 0.0), GeoPoint::new("B", 0.0, 0.0)];
    let graph = build_graph(nodes, 0.0).unwrap();
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn end_to_end_scenario() {
    let nodes = vec![
        GeoPoint::new("A", 0.0, 0.0),
        GeoPoint::new("B", 0.0, 0.05),
        GeoPoint::new("C", 0.0, 5.0),
    ];
    let graph = build_graph(nodes, 10.0).unwrap();

    let edges = graph.edges();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].from, "A");
    assert_eq!(edges[0].to, "B");
    assert!((edges[0].distance_km - 5.56).abs() < 0.05, "got {}", edges[0].distance_km);
    assert_eq!(edges[0].endpoints, [(0.0, 0.0), (0.0, 0.05)]);

    let summary = graph.summary();
    assert_eq!(summary.node_count, 3);
    assert_eq!(summary.edge_count, 1);
    assert!((summary.density - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(summary.classification, DensityClass::Dense);
}

#[test]
fn complete_graph_is_classified_complete() {
    // Tight cluster, everything within range of everything.
    let nodes = vec![
        GeoPoint::new("A", 0.0, 0.0),
        GeoPoint::new("B", 0.0, 0.001),
        GeoPoint::new("C", 0.001, 0.0),
    ];
    let graph = build_graph(nodes, 1.0).unwrap();
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.density(), 1.0);
    assert_eq!(graph.density_class(), DensityClass::Complete);
}

#[test]
fn nearest_search_over_built_node_set() {
    let candidates = vec![
        GeoPoint::with_category("fire-1", -12.0500, -77.0400, "response"),
        GeoPoint::with_category("fire-2", -12.0600, -77.0500, "response"),
        GeoPoint::with_category("flood-1", -12.0465, -77.0429, "risk"),
    ];
    let reference = GeoPoint::new("query", -12.0464, -77.0428);

    // Unfiltered, the nearly-coincident risk node wins.
    let any = find_nearest(&reference, &candidates, None).unwrap();
    assert_eq!(any.node.id, "flood-1");
    assert!(any.distance_km < 0.1);

    // Filtered to response, the closer response node wins instead.
    let response = find_nearest(&reference, &candidates, Some("response")).unwrap();
    assert_eq!(response.node.id, "fire-1");
    assert!(response.distance_km > any.distance_km);
}
