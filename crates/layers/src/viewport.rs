use foundation::bounds::Bounds;
use foundation::geo::LngLat;

use crate::regions::RenderFeature;

/// Bounding box over every ring of every rendered feature, holes included.
///
/// `None` for zero features (or features with no finite vertex): the
/// caller must skip the fit command rather than frame a degenerate box.
pub fn compute_bounds(features: &[RenderFeature]) -> Option<Bounds> {
    Bounds::from_points(
        features
            .iter()
            .flat_map(|f| f.polygons.iter())
            .flat_map(|part| part.iter())
            .flat_map(|ring| ring.iter().copied()),
    )
}

/// Fixed framing parameters for the one-shot fit. Configuration, not
/// computed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FitOptions {
    pub padding_px: f32,
    pub duration_ms: u32,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            padding_px: 40.0,
            duration_ms: 800,
        }
    }
}

/// One-shot camera-fit command, issued once per rendered-set change unless
/// the host supplied an explicit camera.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FitCommand {
    pub bounds: Bounds,
    pub options: FitOptions,
}

/// Explicit camera supplied by the host. Its presence disables auto-fit;
/// explicit intent always overrides.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraOverride {
    pub center: LngLat,
    pub zoom: f64,
}
