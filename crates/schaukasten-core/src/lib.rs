#![forbid(unsafe_code)]

//! Incident model + facet filter engine (headless).
//!
//! Design goals:
//! - deterministic, testable derivations (same collection + filter state, same output)
//! - tolerant boundary: malformed records degrade to defaults instead of erroring
//! - no retained state: filters and facet availability are pure functions over
//!   a `(collection, FilterState)` pair supplied by the caller

pub mod cluster;
pub mod collate;
pub mod dates;
pub mod error;
pub mod filter;
pub mod incident;
pub mod keywords;
pub mod locale;
pub mod text;
pub mod window;

pub use cluster::{GenderCluster, TimeCluster};
pub use dates::DateParser;
pub use error::{Error, Result};
pub use filter::{Facet, FilterState, apply_filters, available_values};
pub use incident::{Incident, load_incidents};
pub use locale::{Lang, LangStore, MemoryLangStore};
pub use window::{DEFAULT_WINDOW_SIZE, windowed};

#[cfg(test)]
mod tests;
