//! Heat-map pipeline: grid → concentration → color, one zone at a time.
//!
//! A [`HeatMap`] is the full product of one render pass: 75 zones for the
//! default grid, each carrying its index, world position, estimated
//! concentration, color, and safety band. Generation is one-shot and the
//! result is immutable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::analysis::{HeatMapSummary, summarize};
use crate::colormap::{Rgb, SafetyBand, heat_color};
use crate::concentration::{ReadingError, estimate};
use crate::grid::{DEFAULT_SPACING, GridDims, GridPoint, Position, position_of};

/// One sampled zone: position, derived concentration, display color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatZone {
    pub point: GridPoint,
    pub position: Position,
    /// Local ammonia concentration, ppm.
    pub ppm: f64,
    pub color: Rgb,
    pub band: SafetyBand,
}

/// A complete heat map for one barn at one instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatMap {
    /// The barn-level reading every zone was derived from, ppm.
    pub base_ppm: f64,
    pub dims: GridDims,
    pub spacing: f32,
    pub zones: Vec<HeatZone>,
}

impl HeatMap {
    /// Generate with default dimensions and spacing, drawing jitter from `rng`.
    pub fn generate<R: Rng + ?Sized>(base_ppm: f64, rng: &mut R) -> Result<Self, ReadingError> {
        Self::generate_with(base_ppm, GridDims::default(), DEFAULT_SPACING, rng)
    }

    /// Generate a reproducible heat map from a seed.
    pub fn seeded(base_ppm: f64, seed: u64) -> Result<Self, ReadingError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(base_ppm, &mut rng)
    }

    /// Generate with explicit grid dimensions and spacing.
    pub fn generate_with<R: Rng + ?Sized>(
        base_ppm: f64,
        dims: GridDims,
        spacing: f32,
        rng: &mut R,
    ) -> Result<Self, ReadingError> {
        let mut zones = Vec::with_capacity(dims.count());
        for point in dims.points() {
            let ppm = estimate(base_ppm, point, dims, rng)?;
            zones.push(HeatZone {
                point,
                position: position_of(point, dims, spacing),
                ppm,
                color: heat_color(ppm),
                band: SafetyBand::from_ppm(ppm),
            });
        }
        log::debug!(
            "generated heat map: base={base_ppm} ppm, {} zones",
            zones.len()
        );
        Ok(Self {
            base_ppm,
            dims,
            spacing,
            zones,
        })
    }

    /// Zones of one vertical layer, floor layer first.
    pub fn layer(&self, y: usize) -> impl Iterator<Item = &HeatZone> {
        self.zones.iter().filter(move |z| z.point.y == y)
    }

    /// Zone at a grid point, if in bounds.
    pub fn zone_at(&self, point: GridPoint) -> Option<&HeatZone> {
        self.zones.iter().find(|z| z.point == point)
    }

    /// Aggregate statistics over all zones.
    pub fn summary(&self) -> HeatMapSummary {
        summarize(self)
    }
}
