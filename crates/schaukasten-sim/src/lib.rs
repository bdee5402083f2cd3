#![forbid(unsafe_code)]

//! Branch-growth simulation + viewport (headless).
//!
//! Incidents enter as seeds; every simulation tick each live branch places
//! one character of its text, steered by a coherent noise field and pushed
//! around by local repulsion against everything already placed. The placed
//! geometry is immutable and bucket-indexed, so hover hit-testing and frame
//! rendering never race the growth loop — the whole pipeline is
//! single-threaded and frame-driven.

pub mod buckets;
pub mod color;
pub mod engine;
pub mod geom;
pub mod noise_field;
pub mod params;
pub mod svg;
pub mod viewport;

mod branch;

pub use branch::{BranchState, CharNode, NodeId};
pub use engine::{GrowthEngine, Seed, WorldConfig};
pub use noise_field::DirectionField;
pub use params::{GrowthParams, Presets, default_presets, resolve_mode};
pub use viewport::Viewport;

#[cfg(test)]
mod tests;
