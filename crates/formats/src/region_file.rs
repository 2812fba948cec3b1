use foundation::geo::{LngLat, PolygonRings, Ring};
use serde_json::Value;

/// One named polygon from the static neighborhood asset.
///
/// A GeoJSON `Polygon` normalizes to one entry in `polygons`; a
/// `MultiPolygon` to one entry per part. Immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRegionFeature {
    /// Join key into the relational neighborhood table (`NAME` property).
    pub name: String,
    pub polygons: Vec<PolygonRings>,
}

impl RawRegionFeature {
    /// Total ring count across every part.
    pub fn ring_count(&self) -> usize {
        self.polygons.iter().map(|p| p.len()).sum()
    }
}

/// Parsed neighborhood asset.
///
/// Rows the parser cannot use (no name, no geometry, non-polygonal
/// geometry) are skipped, not fatal; `skipped` counts them so the host can
/// report a stale or off-contract asset.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RegionFile {
    pub features: Vec<RawRegionFeature>,
    pub skipped: usize,
}

#[derive(Debug)]
pub enum RegionFileError {
    /// The host's fetch/read failed before parsing could start.
    Io(String),
    Parse(serde_json::Error),
    NotAFeatureCollection,
    InvalidFeature { index: usize, reason: String },
}

impl std::fmt::Display for RegionFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionFileError::Io(msg) => write!(f, "asset read error: {msg}"),
            RegionFileError::Parse(e) => write!(f, "JSON parse error: {e}"),
            RegionFileError::NotAFeatureCollection => {
                write!(f, "expected GeoJSON FeatureCollection")
            }
            RegionFileError::InvalidFeature { index, reason } => {
                write!(f, "invalid feature at index {index}: {reason}")
            }
        }
    }
}

impl std::error::Error for RegionFileError {}

impl RegionFile {
    pub fn from_geojson_str(payload: &str) -> Result<Self, RegionFileError> {
        let value: Value = serde_json::from_str(payload).map_err(RegionFileError::Parse)?;
        Self::from_geojson_value(&value)
    }

    pub fn from_geojson_value(value: &Value) -> Result<Self, RegionFileError> {
        let obj = value
            .as_object()
            .ok_or(RegionFileError::NotAFeatureCollection)?;
        let ty = obj
            .get("type")
            .and_then(|v| v.as_str())
            .ok_or(RegionFileError::NotAFeatureCollection)?;
        if ty != "FeatureCollection" {
            return Err(RegionFileError::NotAFeatureCollection);
        }
        let features_val = obj
            .get("features")
            .and_then(|v| v.as_array())
            .ok_or(RegionFileError::NotAFeatureCollection)?;

        let mut out = RegionFile::default();
        for (index, feat_val) in features_val.iter().enumerate() {
            let feat_obj = feat_val
                .as_object()
                .ok_or(RegionFileError::InvalidFeature {
                    index,
                    reason: "feature must be an object".to_string(),
                })?;

            let Some(name) = feature_name(feat_obj) else {
                out.skipped += 1;
                continue;
            };
            let Some(geometry) = feat_obj.get("geometry").and_then(|v| v.as_object()) else {
                out.skipped += 1;
                continue;
            };
            let Some(polygons) = parse_polygons(geometry) else {
                out.skipped += 1;
                continue;
            };

            out.features.push(RawRegionFeature { name, polygons });
        }
        Ok(out)
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

// The asset contract says `NAME`; tolerate the lowercase spelling some
// exports use.
fn feature_name(feat_obj: &serde_json::Map<String, Value>) -> Option<String> {
    let props = feat_obj.get("properties")?.as_object()?;
    let name = props
        .get("NAME")
        .or_else(|| props.get("name"))?
        .as_str()?
        .trim();
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

fn parse_polygons(geometry: &serde_json::Map<String, Value>) -> Option<Vec<PolygonRings>> {
    let ty = geometry.get("type")?.as_str()?;
    let coords = geometry.get("coordinates")?;
    match ty {
        "Polygon" => Some(vec![parse_rings(coords)?]),
        "MultiPolygon" => {
            let parts = coords.as_array()?;
            let mut out = Vec::with_capacity(parts.len());
            for part in parts {
                out.push(parse_rings(part)?);
            }
            Some(out)
        }
        _ => None,
    }
}

fn parse_rings(coords: &Value) -> Option<PolygonRings> {
    let rings = coords.as_array()?;
    let mut out = Vec::with_capacity(rings.len());
    for ring in rings {
        let positions = ring.as_array()?;
        let mut r: Ring = Vec::with_capacity(positions.len());
        for pos in positions {
            let pair = pos.as_array()?;
            let lng = pair.first()?.as_f64()?;
            let lat = pair.get(1)?.as_f64()?;
            r.push(LngLat::new(lng, lat));
        }
        out.push(r);
    }
    Some(out)
}
