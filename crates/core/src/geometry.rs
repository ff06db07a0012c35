//! Plot geometry: polygon area on a flat local projection.
//!
//! A plot boundary is drawn as a ring of `(longitude, latitude)` vertices in
//! degrees. The area is the planar shoelace area of the raw degree
//! coordinates, scaled to square meters with per-degree factors taken at the
//! polygon's mean latitude.
//!
//! The single-latitude projection distorts area as a polygon's latitude span
//! and distance from the equator grow. It is accurate enough for field-sized
//! polygons and stored plot areas are calibrated against it, so it must not
//! be swapped for a geodesic formula.
//!
//! Hectare conversion and rounding live here too, so every path that
//! persists or displays an area (create, update, preview) agrees on them.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Mean Earth radius in meters used for the degree-to-meter scale.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Square meters in one hectare.
pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Decimal places kept when a hectare value is persisted.
pub const HECTARE_DECIMALS: i32 = 4;

/// Minimum vertex count for a non-degenerate polygon.
pub const MIN_POLYGON_VERTICES: usize = 3;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A polygon vertex in degrees.
///
/// Serialized as a `[lng, lat]` pair, the order the map drawing surface emits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl From<[f64; 2]> for LngLat {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(p: LngLat) -> Self {
        [p.lng, p.lat]
    }
}

/// An ordered ring of vertices. The closing edge back to the first vertex is
/// implicit; the first vertex is not repeated at the end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon(pub Vec<LngLat>);

impl Polygon {
    pub fn vertices(&self) -> &[LngLat] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fewer than three vertices enclose no area.
    pub fn is_degenerate(&self) -> bool {
        self.0.len() < MIN_POLYGON_VERTICES
    }

    /// Area in square meters, see [`compute_area`].
    pub fn area_m2(&self) -> f64 {
        compute_area(&self.0)
    }
}

impl From<Vec<LngLat>> for Polygon {
    fn from(vertices: Vec<LngLat>) -> Self {
        Self(vertices)
    }
}

/// Area and vertex count derived from a polygon, in the units stored on a plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotMeasurement {
    /// Unrounded area in square meters.
    pub area_m2: f64,
    /// Area in hectares rounded to [`HECTARE_DECIMALS`] places.
    pub area_ha: f64,
    pub point_count: i32,
}

// ---------------------------------------------------------------------------
// Area computation
// ---------------------------------------------------------------------------

/// Meters spanned by one degree of latitude.
pub fn meters_per_degree_lat() -> f64 {
    EARTH_RADIUS_M * std::f64::consts::PI / 180.0
}

/// Meters spanned by one degree of longitude at `lat_deg`.
pub fn meters_per_degree_lng(lat_deg: f64) -> f64 {
    meters_per_degree_lat() * lat_deg.to_radians().cos()
}

/// Planar shoelace area of the raw degree coordinates (square degrees).
///
/// Returns `0.0` for fewer than three vertices. Winding order does not matter.
pub fn shoelace_area(vertices: &[LngLat]) -> f64 {
    let n = vertices.len();
    if n < MIN_POLYGON_VERTICES {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += vertices[i].lng * vertices[j].lat;
        sum -= vertices[j].lng * vertices[i].lat;
    }
    sum.abs() / 2.0
}

/// Arithmetic mean of the vertex latitudes, `0.0` for an empty ring.
pub fn mean_latitude(vertices: &[LngLat]) -> f64 {
    if vertices.is_empty() {
        return 0.0;
    }
    vertices.iter().map(|v| v.lat).sum::<f64>() / vertices.len() as f64
}

/// Polygon area in square meters.
///
/// Degenerate rings (fewer than three vertices) yield `0.0`. Non-finite
/// coordinates propagate into the result; callers that accept untrusted
/// input validate it first (see [`crate::validation::validate_polygon`]).
pub fn compute_area(vertices: &[LngLat]) -> f64 {
    if vertices.len() < MIN_POLYGON_VERTICES {
        return 0.0;
    }

    let raw = shoelace_area(vertices);
    let lat_avg = mean_latitude(vertices);
    raw * meters_per_degree_lat() * meters_per_degree_lng(lat_avg)
}

// ---------------------------------------------------------------------------
// Unit policy
// ---------------------------------------------------------------------------

/// Convert square meters to hectares without rounding.
pub fn square_meters_to_hectares(area_m2: f64) -> f64 {
    area_m2 / SQUARE_METERS_PER_HECTARE
}

/// Round a hectare value to [`HECTARE_DECIMALS`] places (half away from zero).
pub fn round_hectares(area_ha: f64) -> f64 {
    round_to(area_ha, HECTARE_DECIMALS)
}

/// Round `value` to `decimals` places (half away from zero).
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Derive the stored area and vertex count for a plot boundary.
pub fn measure(polygon: &Polygon) -> PlotMeasurement {
    let area_m2 = polygon.area_m2();
    PlotMeasurement {
        area_m2,
        area_ha: round_hectares(square_meters_to_hectares(area_m2)),
        point_count: i32::try_from(polygon.len()).unwrap_or(i32::MAX),
    }
}
