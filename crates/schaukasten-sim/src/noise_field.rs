use noise::{NoiseFn, Perlin};

/// Coherent angular perturbation field.
///
/// Sampled at (tip position × spatial scale, tick × temporal scale), so the
/// steering wander of a branch is smooth in both space and time instead of
/// independent per-tick jitter. The Perlin source is seeded, which keeps a
/// session reproducible for a fixed seed.
#[derive(Debug, Clone)]
pub struct DirectionField {
    perlin: Perlin,
    spatial_scale: f64,
    temporal_scale: f64,
}

impl DirectionField {
    /// Scales matching the original sketch: world coordinates × 0.0075
    /// (0.01 × the global 0.75 render scale), ticks × 0.05.
    pub fn new(seed: u32) -> Self {
        Self::with_scales(seed, 0.0075, 0.05)
    }

    pub fn with_scales(seed: u32, spatial_scale: f64, temporal_scale: f64) -> Self {
        Self {
            perlin: Perlin::new(seed),
            spatial_scale,
            temporal_scale,
        }
    }

    /// A rotation angle in `[-bound, bound]` radians for the given tip
    /// position and simulation tick.
    pub fn angle_at(&self, x: f64, y: f64, tick: u64, bound: f64) -> f64 {
        // Perlin output is in [-1, 1].
        let sample = self.perlin.get([
            x * self.spatial_scale,
            y * self.spatial_scale,
            tick as f64 * self.temporal_scale,
        ]);
        sample.clamp(-1.0, 1.0) * bound
    }
}
