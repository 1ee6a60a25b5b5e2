use anyhow::Result;
use hashbrown::HashMap;
use petgraph::algo::astar;
use petgraph::stable_graph::StableUnGraph;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::domain::{
    haversine, EdgeData, GeoError, GeoPoint, NearestMatch, ProximityGraph, Route,
};

/// Build a proximity graph: connect every unordered node pair whose
/// great-circle distance is under `threshold_km`.
///
/// Pairs are enumerated with sequential i < j indices so identical input
/// always yields edges in identical order. Exhaustive O(n²) enumeration
/// is intentional; node sets are tens, not millions.
pub fn build_graph(
    nodes: Vec<GeoPoint>,
    threshold_km: f64,
) -> std::result::Result<ProximityGraph, GeoError> {
    if threshold_km < 0.0 {
        return Err(GeoError::InvalidArgument(format!(
            "threshold_km must be non-negative, got {threshold_km}"
        )));
    }

    let mut graph = StableUnGraph::<GeoPoint, EdgeData>::default();
    let mut node_map = HashMap::new();
    let mut indices = Vec::with_capacity(nodes.len());
    for point in nodes {
        let id = point.id.clone();
        let idx = graph.add_node(point);
        node_map.insert(id, idx);
        indices.push(idx);
    }

    for i in 0..indices.len() {
        for j in (i + 1)..indices.len() {
            let distance_km = haversine(&graph[indices[i]], &graph[indices[j]]);
            if distance_km < threshold_km {
                graph.add_edge(indices[i], indices[j], EdgeData { distance_km });
            }
        }
    }

    Ok(ProximityGraph {
        graph,
        node_map,
        threshold_km,
    })
}

/// Find the candidate closest to `reference`, optionally restricted to a
/// category. Ties go to the first-encountered candidate. Returns `None`
/// when nothing matches; that is a normal outcome, not an error.
pub fn find_nearest<'a>(
    reference: &GeoPoint,
    candidates: &'a [GeoPoint],
    category: Option<&str>,
) -> Option<NearestMatch<'a>> {
    let mut best: Option<NearestMatch<'a>> = None;
    for node in candidates {
        if let Some(wanted) = category {
            if node.category.as_deref() != Some(wanted) {
                continue;
            }
        }
        let distance_km = haversine(reference, node);
        match &best {
            Some(current) if distance_km >= current.distance_km => {}
            _ => best = Some(NearestMatch { node, distance_km }),
        }
    }
    best
}

/// Distance-weighted shortest path between two nodes of the proximity
/// graph, A* with the great-circle distance to the target as heuristic
/// (admissible since every edge weight is itself a great-circle
/// distance). Unknown ids are caller errors; an unreachable target is
/// `Ok(None)`.
pub fn shortest_route(
    graph: &ProximityGraph,
    from: &str,
    to: &str,
) -> std::result::Result<Option<Route>, GeoError> {
    let start = *graph
        .node_map
        .get(from)
        .ok_or_else(|| GeoError::InvalidArgument(format!("unknown node id: {from}")))?;
    let goal = *graph
        .node_map
        .get(to)
        .ok_or_else(|| GeoError::InvalidArgument(format!("unknown node id: {to}")))?;
    let goal_point = graph.graph[goal].clone();

    let found = astar(
        &graph.graph,
        start,
        |n| n == goal,
        |e| e.weight().distance_km,
        |n| haversine(&graph.graph[n], &goal_point),
    );

    Ok(found.map(|(total_km, path)| Route {
        node_ids: path.iter().map(|&idx| graph.graph[idx].id.clone()).collect(),
        total_km,
    }))
}

/// Read a node set from a JSONL file, one GeoPoint object per line.
/// Blank lines are skipped.
pub fn load_nodes_from_jsonl(path: &Path) -> Result<Vec<GeoPoint>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut nodes = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        nodes.push(serde_json::from_str(&line)?);
    }
    Ok(nodes)
}
