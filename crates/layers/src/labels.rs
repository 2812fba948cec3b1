use catalog::RegionIndex;
use foundation::geo::LngLat;

use crate::regions::{RegionLayerSnapshot, RenderFeature, ViewMode};
use crate::{Layer, LayerId};

/// One text anchor for one rendered region.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelFeature {
    pub position: LngLat,
    pub label: String,
}

/// Places one label per rendered region.
///
/// Areas mode prefers the area's editorially stored center and emits no
/// label for a region without an area record (the unmatched bucket).
/// The neighborhood modes use the vertex-average centroid of the feature's
/// outer ring. Emits at most one label per feature, never more.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LabelLayer {
    id: LayerId,
}

impl LabelLayer {
    pub fn new(id: u64) -> Self {
        Self { id: LayerId(id) }
    }

    pub fn extract(
        &self,
        snapshot: &RegionLayerSnapshot,
        mode: &ViewMode,
        index: &RegionIndex,
    ) -> Vec<LabelFeature> {
        let mut out = Vec::with_capacity(snapshot.features.len());
        for feature in &snapshot.features {
            let position = match mode {
                ViewMode::Areas => index
                    .area_by_slug(&feature.region_key)
                    .map(|a| LngLat::new(a.label_lng, a.label_lat)),
                _ => vertex_average(feature),
            };
            let Some(position) = position else { continue };
            out.push(LabelFeature {
                position,
                label: feature.display_label.clone(),
            });
        }
        out
    }
}

impl Layer for LabelLayer {
    fn id(&self) -> LayerId {
        self.id
    }
}

/// Vertex-average of the first ring of the first part.
///
/// A cheap approximation, not an area-weighted centroid: it drifts toward
/// vertex-dense edges of irregular shapes, which display has so far
/// tolerated.
pub fn vertex_average(feature: &RenderFeature) -> Option<LngLat> {
    let outer = feature.polygons.first()?.first()?;
    let mut sum_lng = 0.0;
    let mut sum_lat = 0.0;
    let mut count = 0.0_f64;
    for p in outer {
        if p.is_finite() {
            sum_lng += p.lng;
            sum_lat += p.lat;
            count += 1.0;
        }
    }
    if count <= 0.0 {
        return None;
    }
    Some(LngLat::new(sum_lng / count, sum_lat / count))
}

#[cfg(test)]
mod tests {
    use catalog::{Area, Neighborhood, RegionIndex};
    use foundation::geo::LngLat;
    use pretty_assertions::assert_eq;

    use super::{LabelLayer, vertex_average};
    use crate::regions::{RegionLayerSnapshot, RenderFeature, UNMATCHED_KEY, ViewMode};

    fn feature(key: &str, label: &str, outer: Vec<LngLat>) -> RenderFeature {
        RenderFeature {
            region_key: key.to_string(),
            display_label: label.to_string(),
            color_hint: 0,
            polygons: vec![vec![outer]],
        }
    }

    fn index() -> RegionIndex {
        let areas = vec![Area {
            id: 1,
            name: "Central".to_string(),
            slug: "central".to_string(),
            label_lng: -84.39,
            label_lat: 33.77,
        }];
        let hoods = vec![Neighborhood {
            id: 10,
            name: "Midtown".to_string(),
            slug: "midtown".to_string(),
            area_id: 1,
            geometry_key: None,
            label_lng: 0.0,
            label_lat: 0.0,
        }];
        RegionIndex::build(&areas, &hoods)
    }

    #[test]
    fn areas_mode_uses_stored_center() {
        let snap = RegionLayerSnapshot {
            features: vec![feature(
                "central",
                "Central",
                vec![LngLat::new(0.0, 0.0), LngLat::new(10.0, 10.0)],
            )],
        };
        let labels = LabelLayer::new(2).extract(&snap, &ViewMode::Areas, &index());
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].position, LngLat::new(-84.39, 33.77));
        assert_eq!(labels[0].label, "Central");
    }

    #[test]
    fn unmatched_bucket_gets_no_label() {
        let snap = RegionLayerSnapshot {
            features: vec![
                feature("central", "Central", vec![LngLat::new(0.0, 0.0)]),
                feature(
                    UNMATCHED_KEY,
                    "Unassigned",
                    vec![LngLat::new(1.0, 1.0), LngLat::new(2.0, 2.0)],
                ),
            ],
        };
        let labels = LabelLayer::new(2).extract(&snap, &ViewMode::Areas, &index());
        // At most one label per feature; the count only drops below the
        // feature count for buckets with no stored center.
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].label, "Central");
    }

    #[test]
    fn neighborhood_modes_use_vertex_average() {
        let snap = RegionLayerSnapshot {
            features: vec![feature(
                "midtown",
                "Midtown",
                vec![
                    LngLat::new(0.0, 0.0),
                    LngLat::new(4.0, 0.0),
                    LngLat::new(2.0, 3.0),
                ],
            )],
        };
        let labels = LabelLayer::new(2).extract(
            &snap,
            &ViewMode::Neighborhoods {
                area_slug: "central".to_string(),
            },
            &index(),
        );
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].position, LngLat::new(2.0, 1.0));
    }

    #[test]
    fn vertex_average_ignores_holes_and_later_parts() {
        let mut f = feature(
            "midtown",
            "Midtown",
            vec![LngLat::new(0.0, 0.0), LngLat::new(2.0, 2.0)],
        );
        // A hole and a second part must not shift the anchor.
        f.polygons[0].push(vec![LngLat::new(100.0, 100.0)]);
        f.polygons.push(vec![vec![LngLat::new(-100.0, -100.0)]]);
        assert_eq!(vertex_average(&f), Some(LngLat::new(1.0, 1.0)));
    }

    #[test]
    fn degenerate_geometry_yields_no_anchor() {
        let f = feature("midtown", "Midtown", vec![]);
        assert_eq!(vertex_average(&f), None);

        let nan = feature("midtown", "Midtown", vec![LngLat::new(f64::NAN, 0.0)]);
        assert_eq!(vertex_average(&nan), None);
    }
}
