//! Recommendation module.
//!
//! Maps a coarse category the buyer declares (project type, service
//! sub-type) to a bundle of default option ids that seed a builder.
//!
//! # Module Structure
//!
//! - `category` - CategoryKey value object
//! - `preset` - RecommendationPreset and the per-service PresetTable

mod category;
mod preset;

pub use category::CategoryKey;
pub use preset::{PresetTable, RecommendationPreset};
