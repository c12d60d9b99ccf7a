pub mod barns;
pub mod heatmap;
pub mod monitor;
pub mod serve;
pub mod show;
pub mod trend;

use barnsense_core::{Barn, SafetyBand};
use uuid::Uuid;

/// Resolve a barn by UUID, 1-based fleet index, or name.
/// Name matching is case-insensitive and accepts partial matches.
pub fn find_barn<'a>(fleet: &'a [Barn], key: &str) -> Option<&'a Barn> {
    if let Ok(id) = key.parse::<Uuid>() {
        return fleet.iter().find(|b| b.id == id);
    }
    if let Ok(index) = key.parse::<usize>() {
        if (1..=fleet.len()).contains(&index) {
            return Some(&fleet[index - 1]);
        }
        return None;
    }
    let needle = key.to_lowercase();
    fleet
        .iter()
        .find(|b| b.name.to_lowercase() == needle)
        .or_else(|| fleet.iter().find(|b| b.name.to_lowercase().contains(&needle)))
}

/// The barn with the highest base reading.
pub fn worst_barn(fleet: &[Barn]) -> Option<&Barn> {
    fleet.iter().max_by_key(|b| b.ammonia_ppm)
}

/// Status glyph per safety band for terminal output.
pub fn band_glyph(band: SafetyBand) -> &'static str {
    match band {
        SafetyBand::Healthy => "\u{1F7E2}",  // green circle
        SafetyBand::Elevated => "\u{1F7E0}", // orange circle
        SafetyBand::Critical => "\u{1F534}", // red circle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barnsense_core::sample_fleet;

    #[test]
    fn find_by_index() {
        let fleet = sample_fleet();
        assert_eq!(find_barn(&fleet, "1").unwrap().name, "Barn 1");
        assert_eq!(find_barn(&fleet, "4").unwrap().name, "Barn 4");
        assert!(find_barn(&fleet, "0").is_none());
        assert!(find_barn(&fleet, "6").is_none());
    }

    #[test]
    fn find_by_name_case_insensitive() {
        let fleet = sample_fleet();
        assert_eq!(find_barn(&fleet, "barn 2").unwrap().name, "Barn 2");
        assert_eq!(find_barn(&fleet, "BARN 5").unwrap().name, "Barn 5");
    }

    #[test]
    fn find_by_partial_name_prefers_exact() {
        let fleet = sample_fleet();
        // "barn 1" matches "Barn 1" exactly even though it is a prefix of nothing else
        assert_eq!(find_barn(&fleet, "barn 1").unwrap().name, "Barn 1");
        // A bare partial falls back to contains()
        assert!(find_barn(&fleet, "arn 3").is_some());
    }

    #[test]
    fn find_by_uuid() {
        let fleet = sample_fleet();
        let id = fleet[1].id.to_string();
        assert_eq!(find_barn(&fleet, &id).unwrap().name, "Barn 2");
    }

    #[test]
    fn find_unknown_is_none() {
        let fleet = sample_fleet();
        assert!(find_barn(&fleet, "stable 9").is_none());
    }

    #[test]
    fn worst_barn_is_barn_4() {
        let fleet = sample_fleet();
        assert_eq!(worst_barn(&fleet).unwrap().name, "Barn 4");
    }

    #[test]
    fn glyphs_are_distinct() {
        let g = [
            band_glyph(SafetyBand::Healthy),
            band_glyph(SafetyBand::Elevated),
            band_glyph(SafetyBand::Critical),
        ];
        assert_ne!(g[0], g[1]);
        assert_ne!(g[1], g[2]);
    }
}
