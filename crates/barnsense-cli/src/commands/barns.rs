use barnsense_core::sample_fleet;

pub fn run() {
    let fleet = sample_fleet();

    println!("Fleet: {} barn(s)\n", fleet.len());
    for barn in &fleet {
        println!(
            "  {} {:<8} {:>3} ppm  {:<8}  {:>4.1}\u{B0}C (target {:.0})  {:>3}% RH  vent {}",
            super::band_glyph(barn.band()),
            barn.name,
            barn.ammonia_ppm,
            barn.band().to_string(),
            barn.current_temp,
            barn.target_temp,
            barn.humidity,
            barn.vent,
        );
    }

    let critical = fleet
        .iter()
        .filter(|b| b.band() == barnsense_core::SafetyBand::Critical)
        .count();
    if critical > 0 {
        println!("\n{critical} barn(s) need attention — try `barnsense show <barn>`");
    }
}
