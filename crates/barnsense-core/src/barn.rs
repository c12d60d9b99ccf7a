//! Barn fleet model and the simulated sample data behind the dashboard.
//!
//! There is no real ingestion: readings are the fixed mock values the
//! dashboard ships with. Identity is a v4 UUID per barn and sensor.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::colormap::SafetyBand;

/// Ventilation state of a barn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VentStatus {
    On,
    Off,
}

impl fmt::Display for VentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "On"),
            Self::Off => write!(f, "Off"),
        }
    }
}

/// Power state of an individual sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensorStatus {
    On,
    Off,
}

impl fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "On"),
            Self::Off => write!(f, "Off"),
        }
    }
}

/// One ammonia sensor mounted in a barn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    pub id: Uuid,
    pub name: String,
    pub status: SensorStatus,
    pub ammonia_ppm: u32,
}

impl Sensor {
    pub fn new(name: &str, status: SensorStatus, ammonia_ppm: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            status,
            ammonia_ppm,
        }
    }
}

/// One barn and its current readings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Barn {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub current_temp: f64,
    pub target_temp: f64,
    /// Relative humidity, percent.
    pub humidity: u32,
    /// Barn-level base reading, ppm. Feeds the heat-map pipeline.
    pub ammonia_ppm: u32,
    pub vent: VentStatus,
    pub sensors: Vec<Sensor>,
}

impl Barn {
    /// Safety classification of the barn's base reading.
    pub fn band(&self) -> SafetyBand {
        SafetyBand::from_ppm(self.ammonia_ppm as f64)
    }

    /// Degrees above (positive) or below target.
    pub fn temp_delta(&self) -> f64 {
        self.current_temp - self.target_temp
    }
}

/// One point of the weekly safe/warning/critical trend series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Day label, `day/month`.
    pub date: String,
    pub safe: f64,
    pub warning: f64,
    pub critical: f64,
}

fn barn(
    name: &str,
    image: &str,
    current_temp: f64,
    target_temp: f64,
    humidity: u32,
    ammonia_ppm: u32,
    vent: VentStatus,
) -> Barn {
    Barn {
        id: Uuid::new_v4(),
        name: name.to_string(),
        image_url: image.to_string(),
        current_temp,
        target_temp,
        humidity,
        ammonia_ppm,
        vent,
        sensors: vec![
            Sensor::new("Sensor 1", SensorStatus::On, 16),
            Sensor::new("Sensor 2", SensorStatus::Off, 0),
        ],
    }
}

/// The five-barn sample fleet shipped with the dashboard.
pub fn sample_fleet() -> Vec<Barn> {
    vec![
        barn(
            "Barn 1",
            "https://images.unsplash.com/photo-1500595046743-cd271d694d30?w=400",
            22.0,
            25.0,
            55,
            12,
            VentStatus::On,
        ),
        barn(
            "Barn 2",
            "https://images.unsplash.com/photo-1560493676-04071c5f467b?w=400",
            28.0,
            25.0,
            62,
            35,
            VentStatus::On,
        ),
        barn(
            "Barn 3",
            "https://images.unsplash.com/photo-1574943320219-553eb213f72d?w=400",
            30.0,
            25.0,
            68,
            18,
            VentStatus::On,
        ),
        barn(
            "Barn 4",
            "https://images.unsplash.com/photo-1560493676-04071c5f467b?w=400",
            32.0,
            25.0,
            72,
            65,
            VentStatus::Off,
        ),
        barn(
            "Barn 5",
            "https://images.unsplash.com/photo-1516467508483-a7212febe31a?w=400",
            26.0,
            25.0,
            58,
            28,
            VentStatus::On,
        ),
    ]
}

/// The six-point weekly ammonia trend behind the dashboard chart.
pub fn sample_trend() -> Vec<TrendPoint> {
    let point = |date: &str, safe: f64, warning: f64, critical: f64| TrendPoint {
        date: date.to_string(),
        safe,
        warning,
        critical,
    };
    vec![
        point("1/8", 5.0, 3.0, 1.0),
        point("8/8", 7.0, 2.0, 1.5),
        point("15/8", 4.0, 4.0, 2.0),
        point("22/8", 6.0, 3.0, 1.0),
        point("29/8", 8.0, 2.0, 1.5),
        point("5/9", 5.0, 4.0, 2.0),
    ]
}
