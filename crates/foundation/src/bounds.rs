use crate::geo::LngLat;

/// Axis-aligned lng/lat bounding box.
///
/// Degenerate boxes (min == max) are valid; callers that cannot frame a
/// degenerate box decide that themselves.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub min: LngLat,
    pub max: LngLat,
}

impl Bounds {
    pub fn from_point(p: LngLat) -> Self {
        Bounds { min: p, max: p }
    }

    pub fn extend(&mut self, p: LngLat) {
        self.min.lng = self.min.lng.min(p.lng);
        self.min.lat = self.min.lat.min(p.lat);
        self.max.lng = self.max.lng.max(p.lng);
        self.max.lat = self.max.lat.max(p.lat);
    }

    pub fn union(mut self, other: Bounds) -> Bounds {
        self.extend(other.min);
        self.extend(other.max);
        self
    }

    /// Running min/max over a point stream. `None` when the stream is empty
    /// or contains no finite point.
    pub fn from_points<I: IntoIterator<Item = LngLat>>(points: I) -> Option<Bounds> {
        let mut out: Option<Bounds> = None;
        for p in points {
            if !p.is_finite() {
                continue;
            }
            match &mut out {
                Some(b) => b.extend(p),
                None => out = Some(Bounds::from_point(p)),
            }
        }
        out
    }

    pub fn center(&self) -> LngLat {
        LngLat::new(
            (self.min.lng + self.max.lng) * 0.5,
            (self.min.lat + self.max.lat) * 0.5,
        )
    }
}
