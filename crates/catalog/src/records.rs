use serde::Deserialize;

/// One area as the host application stores it. Read-only reference data
/// here; the host owns creation and editing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Area {
    pub id: u64,
    pub name: String,
    pub slug: String,
    /// Editorially placed label anchor for the aggregated area shape.
    pub label_lng: f64,
    pub label_lat: f64,
}

/// One neighborhood. Many-to-one with `Area`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Neighborhood {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub area_id: u64,
    /// Authoritative join key into the polygon asset's `NAME` property.
    /// When absent the neighborhood's own `name` is the fallback key.
    #[serde(default)]
    pub geometry_key: Option<String>,
    pub label_lng: f64,
    pub label_lat: f64,
}

impl Neighborhood {
    /// The authoritative join key, if one is set and non-blank.
    pub fn geometry_join_key(&self) -> Option<&str> {
        self.geometry_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Join-key candidates in resolution order: `geometry_key` first, then
    /// the display name. The index builder applies these as ordered passes,
    /// so the fallback is explicit rather than an insertion-order accident.
    pub fn join_keys(&self) -> impl Iterator<Item = &str> {
        self.geometry_join_key()
            .into_iter()
            .chain(std::iter::once(self.name.as_str()))
    }
}
