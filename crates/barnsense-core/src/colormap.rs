//! Color mapper — concentration to display color, plus safety bands.
//!
//! Three piecewise-linear gradient bands, continuous at both boundaries:
//! green→yellow below 20 ppm, yellow→orange to 50 ppm, orange→red above.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Boundary between the healthy and elevated bands, in ppm.
pub const BAND_ELEVATED: f64 = 20.0;

/// Boundary between the elevated and critical bands, in ppm.
pub const BAND_CRITICAL: f64 = 50.0;

/// An RGB color with channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// 8-bit channel triple for terminal / bitmap output.
    pub fn to_u8(self) -> (u8, u8, u8) {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }
}

/// Map a concentration to its heat-map color.
///
/// Total over all finite input: negative values clamp to zero, values past
/// 100 ppm saturate at full red.
pub fn heat_color(ppm: f64) -> Rgb {
    let ppm = ppm.max(0.0);
    if ppm < BAND_ELEVATED {
        // Green to yellow
        let ratio = ppm / BAND_ELEVATED;
        Rgb::new(ratio, 1.0, 0.0)
    } else if ppm < BAND_CRITICAL {
        // Yellow to orange
        let ratio = (ppm - BAND_ELEVATED) / (BAND_CRITICAL - BAND_ELEVATED);
        Rgb::new(1.0, 1.0 - ratio * 0.5, 0.0)
    } else {
        // Orange to red
        let ratio = ((ppm - BAND_CRITICAL) / 50.0).min(1.0);
        Rgb::new(1.0, 0.5 - ratio * 0.5, 0.0)
    }
}

/// Coarse classification of an ammonia level, as shown on the barn cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyBand {
    /// Below 20 ppm.
    Healthy,
    /// 20–49 ppm.
    Elevated,
    /// 50 ppm and above.
    Critical,
}

impl SafetyBand {
    pub fn from_ppm(ppm: f64) -> Self {
        if ppm < BAND_ELEVATED {
            Self::Healthy
        } else if ppm < BAND_CRITICAL {
            Self::Elevated
        } else {
            Self::Critical
        }
    }

    /// Legend label matching the dashboard chart.
    pub fn label(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy (< 20ppm)",
            Self::Elevated => "Medium (20-50ppm)",
            Self::Critical => "Critical (> 50ppm)",
        }
    }
}

impl fmt::Display for SafetyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Elevated => write!(f, "elevated"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn healthy_band_formula() {
        for ppm in [0.0, 5.0, 10.0, 19.9] {
            let c = heat_color(ppm);
            assert!(close(c.r, ppm / 20.0), "red at {ppm}: {}", c.r);
            assert_eq!(c.g, 1.0);
            assert_eq!(c.b, 0.0);
        }
    }

    #[test]
    fn elevated_band_formula() {
        for ppm in [20.0, 30.0, 49.9] {
            let c = heat_color(ppm);
            assert_eq!(c.r, 1.0);
            assert!(close(c.g, 1.0 - 0.5 * (ppm - 20.0) / 30.0), "green at {ppm}");
            assert_eq!(c.b, 0.0);
        }
    }

    #[test]
    fn critical_band_formula() {
        for ppm in [50.0, 75.0, 100.0, 500.0] {
            let c = heat_color(ppm);
            assert_eq!(c.r, 1.0);
            let expect = (0.5 - 0.5 * ((ppm - 50.0) / 50.0).min(1.0)).max(0.0);
            assert!(close(c.g, expect), "green at {ppm}: {}", c.g);
            assert_eq!(c.b, 0.0);
        }
    }

    #[test]
    fn continuous_at_band_boundaries() {
        let below_20 = heat_color(20.0 - 1e-9);
        let at_20 = heat_color(20.0);
        assert!(close(below_20.r, at_20.r) && close(below_20.g, at_20.g));
        assert!(close(at_20.r, 1.0) && close(at_20.g, 1.0));

        let below_50 = heat_color(50.0 - 1e-9);
        let at_50 = heat_color(50.0);
        assert!(close(below_50.r, at_50.r) && close(below_50.g, at_50.g));
        assert!(close(at_50.r, 1.0) && close(at_50.g, 0.5));
    }

    #[test]
    fn saturates_at_full_red() {
        let c = heat_color(100.0);
        assert_eq!(c, Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(heat_color(1000.0), c);
    }

    #[test]
    fn negative_input_clamps_to_green() {
        assert_eq!(heat_color(-5.0), heat_color(0.0));
        assert_eq!(heat_color(0.0), Rgb::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn to_u8_quantizes() {
        assert_eq!(Rgb::new(1.0, 0.5, 0.0).to_u8(), (255, 128, 0));
        assert_eq!(Rgb::new(-0.2, 2.0, 0.0).to_u8(), (0, 255, 0));
    }

    #[test]
    fn safety_band_boundaries() {
        assert_eq!(SafetyBand::from_ppm(0.0), SafetyBand::Healthy);
        assert_eq!(SafetyBand::from_ppm(19.99), SafetyBand::Healthy);
        assert_eq!(SafetyBand::from_ppm(20.0), SafetyBand::Elevated);
        assert_eq!(SafetyBand::from_ppm(49.99), SafetyBand::Elevated);
        assert_eq!(SafetyBand::from_ppm(50.0), SafetyBand::Critical);
        assert_eq!(SafetyBand::from_ppm(65.0), SafetyBand::Critical);
    }

    #[test]
    fn safety_band_display() {
        assert_eq!(SafetyBand::Healthy.to_string(), "healthy");
        assert_eq!(SafetyBand::Elevated.to_string(), "elevated");
        assert_eq!(SafetyBand::Critical.to_string(), "critical");
    }

    #[test]
    fn labels_match_dashboard_legend() {
        assert!(SafetyBand::Healthy.label().contains("< 20ppm"));
        assert!(SafetyBand::Elevated.label().contains("20-50ppm"));
        assert!(SafetyBand::Critical.label().contains("> 50ppm"));
    }
}
