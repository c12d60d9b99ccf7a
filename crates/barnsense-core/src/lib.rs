//! # barnsense-core
//!
//! **Simulated livestock-barn air quality, computed not rendered.**
//!
//! `barnsense-core` models ammonia concentration inside a barn as a fixed
//! 5×5×3 grid of sample zones. A single base reading (ppm) is spread over
//! the grid with height and depth weighting plus a bounded jitter factor,
//! then mapped to a green→yellow→orange→red color gradient.
//!
//! ## Quick Start
//!
//! ```
//! use barnsense_core::HeatMap;
//!
//! // Reproducible heat map for a 35 ppm base reading
//! let map = HeatMap::seeded(35.0, 42).unwrap();
//! assert_eq!(map.zones.len(), 75);
//!
//! let summary = map.summary();
//! println!("worst zone: {:.1} ppm", summary.max_ppm);
//! ```
//!
//! ## Architecture
//!
//! Base reading → Zone grid → Concentration estimate → Color map
//!
//! The pipeline is pure and one-shot: every call builds a complete
//! [`HeatMap`] and nothing is retained between calls. Randomness is
//! injected through [`rand::Rng`] so tests can pin the jitter; production
//! callers default to thread RNG or a `u64` seed.
//!
//! Rendering is deliberately not here. [`scene`] builds a renderer-agnostic
//! description of the barn (floor, walls, roof, cows, one pulsing sphere
//! per zone) that a display layer can consume however it likes.

pub mod analysis;
pub mod barn;
pub mod colormap;
pub mod concentration;
pub mod grid;
pub mod heatmap;
pub mod scene;

pub use analysis::HeatMapSummary;
pub use barn::{Barn, Sensor, SensorStatus, TrendPoint, VentStatus, sample_fleet, sample_trend};
pub use colormap::{BAND_CRITICAL, BAND_ELEVATED, Rgb, SafetyBand, heat_color};
pub use concentration::{
    JITTER_MAX, JITTER_MIN, ReadingError, depth_factor, estimate, estimate_with_jitter,
    height_factor,
};
pub use grid::{DEFAULT_SPACING, GridDims, GridPoint, Position, position_of};
pub use heatmap::{HeatMap, HeatZone};
pub use scene::{Scene, SceneNode, build_barn_scene};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
