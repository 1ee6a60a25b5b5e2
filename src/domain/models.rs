use hashbrown::HashMap;
use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use serde::{Deserialize, Serialize};

/// A geolocated node. Identifiers are expected to be unique within a
/// node set; duplicates are the caller's responsibility.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub attributes: Option<HashMap<String, serde_json::Value>>,
}

impl GeoPoint {
    pub fn new(id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lng,
            category: None,
            attributes: None,
        }
    }

    pub fn with_category(
        id: impl Into<String>,
        lat: f64,
        lng: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            lat,
            lng,
            category: Some(category.into()),
            attributes: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EdgeData {
    pub distance_km: f64,
}

/// Serializable edge view with both endpoint coordinates preserved for
/// rendering, as the response layer ships them to map clients.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub endpoints: [(f64, f64); 2],
}

/// Density classification exposed alongside the raw density so callers
/// can verify the rule rather than trust the label.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DensityClass {
    Complete,
    Dense,
}

impl DensityClass {
    pub fn from_density(density: f64) -> Self {
        if density > 0.8 {
            DensityClass::Complete
        } else {
            DensityClass::Dense
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DensityClass::Complete => "complete",
            DensityClass::Dense => "dense",
        }
    }
}

/// Statistics block for response payloads.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub density: f64,
    pub classification: DensityClass,
}

/// Proximity graph over a node set: every unordered pair closer than the
/// threshold is connected. Built fresh per call, never mutated after.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ProximityGraph {
    pub graph: StableUnGraph<GeoPoint, EdgeData>,
    pub node_map: HashMap<String, NodeIndex>,
    pub threshold_km: f64,
}

impl ProximityGraph {
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// 2m / (n(n-1)) for n > 1, by convention 0.0 otherwise.
    pub fn density(&self) -> f64 {
        let n = self.node_count();
        if n > 1 {
            2.0 * self.edge_count() as f64 / (n as f64 * (n as f64 - 1.0))
        } else {
            0.0
        }
    }

    pub fn density_class(&self) -> DensityClass {
        DensityClass::from_density(self.density())
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GeoPoint> {
        self.graph.node_weights()
    }

    /// Edges in insertion order, which is the deterministic i < j pair
    /// enumeration order of the build.
    pub fn edges(&self) -> Vec<Edge> {
        self.graph
            .edge_references()
            .map(|e| {
                let a = &self.graph[e.source()];
                let b = &self.graph[e.target()];
                Edge {
                    from: a.id.clone(),
                    to: b.id.clone(),
                    distance_km: e.weight().distance_km,
                    endpoints: [(a.lat, a.lng), (b.lat, b.lng)],
                }
            })
            .collect()
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            density: self.density(),
            classification: self.density_class(),
        }
    }
}

/// A found nearest-neighbor result. Absence is expressed as `None` at
/// the query site, never as a sentinel distance.
#[derive(Serialize, Clone, Debug)]
pub struct NearestMatch<'a> {
    pub node: &'a GeoPoint,
    pub distance_km: f64,
}

/// Shortest path over the proximity graph, edge-weighted by distance.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Route {
    pub node_ids: Vec<String>,
    pub total_km: f64,
}
