use std::collections::BTreeMap;

use serde::Deserialize;

/// Descriptive payload for one area's info panel, pre-fetched by the host
/// data layer and keyed by area slug.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AreaCard {
    pub title: String,
    #[serde(default)]
    pub blurb: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub neighborhood_count: Option<u32>,
}

/// Descriptive payload for one neighborhood's info panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NeighborhoodCard {
    pub title: String,
    #[serde(default)]
    pub blurb: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub area_slug: Option<String>,
}

/// Both card dictionaries. Card data may lag behind the authoritative
/// region lists; a missing entry is expected, not an error.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct CardSets {
    #[serde(default)]
    pub areas: BTreeMap<String, AreaCard>,
    #[serde(default)]
    pub neighborhoods: BTreeMap<String, NeighborhoodCard>,
}
