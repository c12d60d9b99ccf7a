//! Aggregate statistics over a heat map, for dashboard display.

use serde::{Deserialize, Serialize};

use crate::colormap::SafetyBand;
use crate::heatmap::HeatMap;

/// Summary of one heat map: range, mean, and zone count per safety band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatMapSummary {
    pub zone_count: usize,
    pub min_ppm: f64,
    pub max_ppm: f64,
    pub mean_ppm: f64,
    pub healthy: usize,
    pub elevated: usize,
    pub critical: usize,
}

impl HeatMapSummary {
    /// The band of the worst zone.
    pub fn worst_band(&self) -> SafetyBand {
        SafetyBand::from_ppm(self.max_ppm)
    }
}

/// Compute the summary for a heat map.
pub fn summarize(map: &HeatMap) -> HeatMapSummary {
    let mut min_ppm = f64::MAX;
    let mut max_ppm = 0.0f64;
    let mut total = 0.0;
    let (mut healthy, mut elevated, mut critical) = (0, 0, 0);

    for zone in &map.zones {
        min_ppm = min_ppm.min(zone.ppm);
        max_ppm = max_ppm.max(zone.ppm);
        total += zone.ppm;
        match zone.band {
            SafetyBand::Healthy => healthy += 1,
            SafetyBand::Elevated => elevated += 1,
            SafetyBand::Critical => critical += 1,
        }
    }

    let zone_count = map.zones.len();
    HeatMapSummary {
        zone_count,
        min_ppm: if zone_count == 0 { 0.0 } else { min_ppm },
        max_ppm,
        mean_ppm: if zone_count == 0 {
            0.0
        } else {
            total / zone_count as f64
        },
        healthy,
        elevated,
        critical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_cover_every_zone() {
        let map = HeatMap::seeded(40.0, 8).unwrap();
        let s = map.summary();
        assert_eq!(s.zone_count, 75);
        assert_eq!(s.healthy + s.elevated + s.critical, 75);
    }

    #[test]
    fn range_brackets_mean() {
        let map = HeatMap::seeded(40.0, 8).unwrap();
        let s = map.summary();
        assert!(s.min_ppm <= s.mean_ppm && s.mean_ppm <= s.max_ppm);
        assert!(s.min_ppm >= 0.0);
    }

    #[test]
    fn zero_base_is_all_healthy() {
        let map = HeatMap::seeded(0.0, 1).unwrap();
        let s = map.summary();
        assert_eq!(s.healthy, 75);
        assert_eq!(s.max_ppm, 0.0);
        assert_eq!(s.worst_band(), SafetyBand::Healthy);
    }

    #[test]
    fn high_base_produces_critical_zones() {
        // 120 ppm at the floor/back corner clears 50 even at minimum jitter.
        let map = HeatMap::seeded(120.0, 4).unwrap();
        let s = map.summary();
        assert!(s.critical > 0, "expected critical zones at 120 ppm base");
        assert_eq!(s.worst_band(), SafetyBand::Critical);
    }
}
