pub mod labels;
pub mod paint;
pub mod regions;
pub mod viewport;

pub use labels::{LabelFeature, LabelLayer};
pub use paint::{FillPalette, Rgba, paint_expression};
pub use regions::{RegionLayer, RegionLayerSnapshot, RenderFeature, UNMATCHED_KEY, ViewMode};
pub use viewport::{CameraOverride, FitCommand, FitOptions, compute_bounds};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LayerId(pub u64);

/// A derivation over the raw inputs that yields a display-ready
/// collection. Implementations recompute from scratch on input change;
/// nothing here patches incrementally.
pub trait Layer {
    fn id(&self) -> LayerId;
}
