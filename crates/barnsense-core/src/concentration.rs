//! Concentration estimator — synthetic per-zone ammonia from one reading.
//!
//! A barn has a single base reading (ppm). Each zone derives a local value
//! from it: heavier near the floor, heavier toward the back wall, with a
//! bounded multiplicative jitter so the field doesn't look machine-made.
//!
//! Jitter is drawn from a caller-supplied [`rand::Rng`]: production
//! callers pass a thread RNG or a seeded one, tests pin the factor to 1.0.

use std::fmt;

use rand::Rng;

use crate::grid::{GridDims, GridPoint};

/// Lower bound of the per-zone jitter factor.
pub const JITTER_MIN: f64 = 0.7;

/// Upper bound of the per-zone jitter factor.
pub const JITTER_MAX: f64 = 1.3;

/// Invalid base reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReadingError {
    /// The base reading was negative. Concentrations are non-negative.
    NegativeBase(f64),
    /// The base reading was NaN or infinite.
    NonFiniteBase,
}

impl fmt::Display for ReadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBase(v) => write!(f, "base reading must be non-negative, got {v}"),
            Self::NonFiniteBase => write!(f, "base reading must be finite"),
        }
    }
}

impl std::error::Error for ReadingError {}

/// Validate a base reading: finite and non-negative.
pub fn validate_base(base_ppm: f64) -> Result<f64, ReadingError> {
    if !base_ppm.is_finite() {
        return Err(ReadingError::NonFiniteBase);
    }
    if base_ppm < 0.0 {
        return Err(ReadingError::NegativeBase(base_ppm));
    }
    Ok(base_ppm)
}

/// Height weighting: 1.0 at the floor layer, falling toward the ceiling.
///
/// Ammonia is densest where the bedding is.
pub fn height_factor(y: usize, layers: usize) -> f64 {
    layers.saturating_sub(y) as f64 / layers as f64
}

/// Depth weighting: rises toward the back wall where ventilation is worst.
pub fn depth_factor(z: usize, rows: usize) -> f64 {
    (z + 2) as f64 / (rows + 2) as f64
}

/// Estimate one zone's concentration with an explicit jitter factor.
///
/// Pinning `jitter` to 1.0 gives the deterministic backbone of the model:
/// monotonically non-decreasing in `base_ppm` for a fixed position.
pub fn estimate_with_jitter(
    base_ppm: f64,
    point: GridPoint,
    dims: GridDims,
    jitter: f64,
) -> Result<f64, ReadingError> {
    let base = validate_base(base_ppm)?;
    Ok(base * height_factor(point.y, dims.y) * depth_factor(point.z, dims.z) * jitter)
}

/// Estimate one zone's concentration, drawing jitter from `rng`.
pub fn estimate<R: Rng + ?Sized>(
    base_ppm: f64,
    point: GridPoint,
    dims: GridDims,
    rng: &mut R,
) -> Result<f64, ReadingError> {
    let jitter = rng.random_range(JITTER_MIN..=JITTER_MAX);
    estimate_with_jitter(base_ppm, point, dims, jitter)
}
