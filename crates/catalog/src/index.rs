use std::collections::BTreeMap;

use crate::records::{Area, Neighborhood};

/// O(1) lookup tables over the relational area/neighborhood lists.
///
/// Join-table contract:
/// - Every `geometry_key` entry wins over any `name` entry for the same
///   string, regardless of list order.
/// - A join key maps to at most one neighborhood; on a `name` collision the
///   first neighborhood in list order keeps the key.
///
/// Pure function of its inputs; unresolvable rows are not an error here,
/// they degrade into the unmatched bucket downstream.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RegionIndex {
    area_by_id: BTreeMap<u64, Area>,
    area_by_slug: BTreeMap<String, Area>,
    neighborhood_by_join_key: BTreeMap<String, Neighborhood>,
}

impl RegionIndex {
    pub fn build(areas: &[Area], neighborhoods: &[Neighborhood]) -> Self {
        let mut index = RegionIndex::default();
        for area in areas {
            index.area_by_id.insert(area.id, area.clone());
            index.area_by_slug.insert(area.slug.clone(), area.clone());
        }

        // Two explicit passes keep the geometry_key-beats-name precedence
        // visible: the first pass claims every authoritative key, the
        // second fills name fallbacks that are still free.
        for n in neighborhoods {
            if let Some(key) = n.geometry_join_key() {
                index
                    .neighborhood_by_join_key
                    .entry(key.to_string())
                    .or_insert_with(|| n.clone());
            }
        }
        for n in neighborhoods {
            index
                .neighborhood_by_join_key
                .entry(n.name.clone())
                .or_insert_with(|| n.clone());
        }

        index
    }

    /// Resolves a raw feature's join key to its relational neighborhood.
    pub fn resolve_join_key(&self, key: &str) -> Option<&Neighborhood> {
        self.neighborhood_by_join_key.get(key)
    }

    pub fn area_by_id(&self, id: u64) -> Option<&Area> {
        self.area_by_id.get(&id)
    }

    pub fn area_by_slug(&self, slug: &str) -> Option<&Area> {
        self.area_by_slug.get(slug)
    }

    /// Parent area of a resolved neighborhood, if the area row exists.
    pub fn area_for(&self, neighborhood: &Neighborhood) -> Option<&Area> {
        self.area_by_id(neighborhood.area_id)
    }

    pub fn is_empty(&self) -> bool {
        self.area_by_id.is_empty() && self.neighborhood_by_join_key.is_empty()
    }
}
