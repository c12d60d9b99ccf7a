use barnsense_core::{SafetyBand, sample_trend};

pub fn run() {
    let trend = sample_trend();

    println!("Weekly ammonia trend ({} readings):\n", trend.len());
    println!("  {:<6} {:>6} {:>8} {:>9}", "date", "safe", "warning", "critical");
    for p in &trend {
        println!(
            "  {:<6} {:>6.1} {:>8.1} {:>9.1}",
            p.date, p.safe, p.warning, p.critical
        );
    }

    println!();
    for band in [
        SafetyBand::Healthy,
        SafetyBand::Elevated,
        SafetyBand::Critical,
    ] {
        println!("  {} {}", super::band_glyph(band), band.label());
    }
}
