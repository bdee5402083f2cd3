mod engine;

use crate::engine::{GrowthEngine, Seed, WorldConfig};
use crate::params::GrowthParams;

pub(crate) fn seed(incident: usize, text: &str) -> Seed {
    Seed {
        incident,
        text: text.to_string(),
    }
}

pub(crate) fn single_branch_params() -> GrowthParams {
    GrowthParams {
        fork_chance: 0.0,
        ..GrowthParams::default()
    }
}

pub(crate) fn engine_with(seeds: &[Seed], params: GrowthParams) -> GrowthEngine {
    GrowthEngine::new(seeds, params, WorldConfig::default(), 7)
}
