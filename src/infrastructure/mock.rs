use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::GeoPoint;

/// Plaza Mayor de Lima, the demo's reference center.
pub const LIMA_CENTER: (f64, f64) = (-12.0464, -77.0428);

const KM_PER_DEG_LAT: f64 = 110.574;
const KM_PER_DEG_LNG_EQUATOR: f64 = 111.320;

/// Generate a synthetic node set scattered uniformly within
/// `spread_km` of the Lima center, tagged with `category`.
///
/// Mock data only. This never feeds the graph or distance logic
/// directly; it exists so the demo binaries have something to chew on,
/// and a seed makes runs reproducible.
pub fn generate_nodes(count: usize, category: &str, spread_km: f64, seed: Option<u64>) -> Vec<GeoPoint> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let (center_lat, center_lng) = LIMA_CENTER;
    let km_per_deg_lng = KM_PER_DEG_LNG_EQUATOR * center_lat.to_radians().cos();

    (0..count)
        .map(|i| {
            let north_km: f64 = rng.random_range(-spread_km..=spread_km);
            let east_km: f64 = rng.random_range(-spread_km..=spread_km);
            GeoPoint::with_category(
                format!("{category}-{}", i + 1),
                center_lat + north_km / KM_PER_DEG_LAT,
                center_lng + east_km / km_per_deg_lng,
                category,
            )
        })
        .collect()
}
