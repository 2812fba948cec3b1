use std::collections::BTreeMap;

use catalog::RegionIndex;
use formats::RawRegionFeature;
use foundation::geo::PolygonRings;

use crate::{Layer, LayerId};

/// Synthetic region key collecting raw features with no resolvable
/// relational counterpart. Used only in areas mode, which claims to cover
/// the whole base dataset.
pub const UNMATCHED_KEY: &str = "__unmatched__";

const UNMATCHED_LABEL: &str = "Unassigned";

/// What the map is showing. The filter slug each mode needs travels with
/// the mode, so a mismatched mode/filter pair cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// Every area as one aggregated shape, plus the unmatched bucket.
    Areas,
    /// The neighborhoods of one area.
    Neighborhoods { area_slug: String },
    /// A single neighborhood.
    Single { neighborhood_slug: String },
}

/// One display-ready region.
///
/// `polygons` is always multipolygon-shaped. In areas mode it is the
/// concatenated parts of every member neighborhood — shared edges stay
/// internally duplicated, no boolean union is attempted.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFeature {
    pub region_key: String,
    pub display_label: String,
    /// Stable per-snapshot ordinal, usable as a categorical fill hint.
    pub color_hint: usize,
    pub polygons: Vec<PolygonRings>,
}

impl RenderFeature {
    pub fn ring_count(&self) -> usize {
        self.polygons.iter().map(|p| p.len()).sum()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RegionLayerSnapshot {
    pub features: Vec<RenderFeature>,
}

impl RegionLayerSnapshot {
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn feature(&self, region_key: &str) -> Option<&RenderFeature> {
        self.features.iter().find(|f| f.region_key == region_key)
    }
}

/// Groups the raw polygon set into rendered regions for the active view
/// mode.
///
/// - Areas mode regroups every raw feature; unresolvable rows land in the
///   unmatched bucket so the whole input stays visible.
/// - The filtered modes drop unresolvable rows and rows outside the filter.
/// - Empty input (or an empty index in areas mode) yields an empty
///   snapshot, never an error.
///
/// Output order follows first appearance in the raw set; z-order is the
/// renderer's business.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RegionLayer {
    id: LayerId,
}

impl RegionLayer {
    pub fn new(id: u64) -> Self {
        Self { id: LayerId(id) }
    }

    pub fn extract(
        &self,
        raw: &[RawRegionFeature],
        index: &RegionIndex,
        mode: &ViewMode,
    ) -> RegionLayerSnapshot {
        let mut features: Vec<RenderFeature> = Vec::new();
        // region_key -> position in `features`, so grouping stays stable.
        let mut slots: BTreeMap<String, usize> = BTreeMap::new();

        for feature in raw {
            let neighborhood = index.resolve_join_key(&feature.name);
            let (key, label) = match mode {
                ViewMode::Areas => {
                    match neighborhood.and_then(|n| index.area_for(n)) {
                        Some(area) => (area.slug.clone(), area.name.clone()),
                        // Null neighborhood or orphaned area_id: bucket it.
                        None => (UNMATCHED_KEY.to_string(), UNMATCHED_LABEL.to_string()),
                    }
                }
                ViewMode::Neighborhoods { area_slug } => {
                    let Some(n) = neighborhood else { continue };
                    let parent = index.area_for(n);
                    if parent.map(|a| a.slug.as_str()) != Some(area_slug.as_str()) {
                        continue;
                    }
                    (n.slug.clone(), n.name.clone())
                }
                ViewMode::Single { neighborhood_slug } => {
                    let Some(n) = neighborhood else { continue };
                    if n.slug != *neighborhood_slug {
                        continue;
                    }
                    (n.slug.clone(), n.name.clone())
                }
            };

            let slot = *slots.entry(key.clone()).or_insert_with(|| {
                features.push(RenderFeature {
                    region_key: key,
                    display_label: label,
                    color_hint: features.len(),
                    polygons: Vec::new(),
                });
                features.len() - 1
            });
            features[slot]
                .polygons
                .extend(feature.polygons.iter().cloned());
        }

        RegionLayerSnapshot { features }
    }
}

impl Layer for RegionLayer {
    fn id(&self) -> LayerId {
        self.id
    }
}
