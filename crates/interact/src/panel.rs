use catalog::cards::{AreaCard, CardSets, NeighborhoodCard};

/// Resolved content for the slide-in info panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    Area { slug: String, card: AreaCard },
    Neighborhood { slug: String, card: NeighborhoodCard },
}

impl PanelContent {
    pub fn title(&self) -> &str {
        match self {
            PanelContent::Area { card, .. } => &card.title,
            PanelContent::Neighborhood { card, .. } => &card.title,
        }
    }
}

/// Presentation-time join of the selected key against the pre-fetched card
/// dictionaries. No I/O, no fallback fetch: a key absent from both
/// dictionaries yields `None` and the host renders no panel, even while the
/// panel flag is up. Area cards are consulted first; the two key spaces are
/// disjoint slugs in practice.
pub fn resolve_panel(selected: Option<&str>, cards: &CardSets) -> Option<PanelContent> {
    let slug = selected?;
    if let Some(card) = cards.areas.get(slug) {
        return Some(PanelContent::Area {
            slug: slug.to_string(),
            card: card.clone(),
        });
    }
    cards
        .neighborhoods
        .get(slug)
        .map(|card| PanelContent::Neighborhood {
            slug: slug.to_string(),
            card: card.clone(),
        })
}
