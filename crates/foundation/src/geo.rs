/// Geographic position in degrees, longitude first (GeoJSON axis order).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn is_finite(&self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }
}

/// One linear ring of a polygon. Whether a closing duplicate vertex is
/// present depends on the source file; nothing here requires one.
pub type Ring = Vec<LngLat>;

/// Rings of one polygon part: outer ring first, holes after.
pub type PolygonRings = Vec<Ring>;
