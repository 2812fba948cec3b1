use interact::{Highlight, InteractionState, highlight_for};

use crate::regions::RegionLayerSnapshot;

pub type Rgba = [f32; 4];

/// Fill colors for the three highlight tiers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FillPalette {
    pub base: Rgba,
    pub hovered: Rgba,
    pub selected: Rgba,
}

impl Default for FillPalette {
    fn default() -> Self {
        Self {
            base: [0.36, 0.42, 0.58, 0.45],
            hovered: [0.36, 0.42, 0.58, 0.70],
            selected: [0.93, 0.64, 0.20, 0.75],
        }
    }
}

impl FillPalette {
    pub fn color_for(&self, highlight: Highlight) -> Rgba {
        match highlight {
            Highlight::Selected => self.selected,
            Highlight::Hovered => self.hovered,
            Highlight::Default => self.base,
        }
    }
}

/// The per-region fill expression handed to the renderer: one color per
/// rendered region, derived from the interaction state. Recomputed on every
/// interaction change; the geometry snapshot is untouched.
pub fn paint_expression(
    snapshot: &RegionLayerSnapshot,
    state: &InteractionState,
    palette: &FillPalette,
) -> Vec<(String, Rgba)> {
    snapshot
        .features
        .iter()
        .map(|f| {
            let highlight = highlight_for(state, &f.region_key);
            (f.region_key.clone(), palette.color_for(highlight))
        })
        .collect()
}
