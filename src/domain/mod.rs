mod distance;
mod error;
mod models;

pub use distance::{haversine, haversine_km, EARTH_RADIUS_KM};
pub use error::GeoError;
pub use models::{
    DensityClass, Edge, EdgeData, GeoPoint, GraphSummary, NearestMatch, ProximityGraph, Route,
};
