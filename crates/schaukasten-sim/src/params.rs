use indexmap::IndexMap;
use serde::Deserialize;

/// Named growth modes in presentation order.
pub type Presets = IndexMap<String, GrowthParams>;

/// One growth personality. Presets are data: alternate looks differ only in
/// these numbers, never in code branches.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GrowthParams {
    /// Added to the unit direction's y component each tick; positive values
    /// sink branches toward the bottom of the buffer so dense growth stays
    /// clear of the most recent items near the center.
    pub downward_bias: f64,
    /// Bound (radians) on the coherent-noise steering rotation.
    pub direction_randomness: f64,
    /// Chance of splitting off a child branch at a word boundary.
    pub fork_chance: f64,
    /// Base direction offset applied to a forked child (radians).
    pub fork_spread: f64,
    /// Hard cap on characters a single branch may place.
    pub max_nodes_per_branch: usize,
    /// Hard cap on branches a single incident may fork into.
    pub max_branches_per_incident: usize,
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self {
            downward_bias: 0.12,
            direction_randomness: 0.6,
            fork_chance: 0.08,
            fork_spread: 0.9,
            max_nodes_per_branch: 220,
            max_branches_per_incident: 4,
        }
    }
}

/// Built-in growth modes, in presentation order. `fungal` is the default and
/// the fallback for unknown mode names.
pub fn default_presets() -> IndexMap<String, GrowthParams> {
    let mut presets = IndexMap::new();
    presets.insert("fungal".to_string(), GrowthParams::default());
    presets.insert(
        "ivy".to_string(),
        GrowthParams {
            downward_bias: 0.3,
            direction_randomness: 0.35,
            fork_chance: 0.15,
            fork_spread: 0.6,
            ..GrowthParams::default()
        },
    );
    presets.insert(
        "root".to_string(),
        GrowthParams {
            downward_bias: 0.55,
            direction_randomness: 0.8,
            fork_chance: 0.04,
            fork_spread: 1.2,
            ..GrowthParams::default()
        },
    );
    presets
}

/// Resolves a mode name against `presets`, falling back to `fungal` and then
/// to the built-in default, mirroring `presets[mode] || presets.fungal`.
pub fn resolve_mode(presets: &IndexMap<String, GrowthParams>, mode: &str) -> GrowthParams {
    presets
        .get(mode)
        .or_else(|| presets.get("fungal"))
        .cloned()
        .unwrap_or_default()
}
