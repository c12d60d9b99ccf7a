use barnsense_core::{HeatMap, sample_fleet};

pub fn run(barn_key: &str, seed: Option<u64>) {
    let fleet = sample_fleet();
    let Some(barn) = super::find_barn(&fleet, barn_key) else {
        eprintln!("Unknown barn: {barn_key}. Try `barnsense barns` to list the fleet.");
        std::process::exit(2);
    };

    println!("{} {}", super::band_glyph(barn.band()), barn.name);
    println!("  Temperature: {:.2}\u{B0}C (target {:.0}\u{B0}C)", barn.current_temp, barn.target_temp);
    println!("  Ammonia:     {} ppm ({})", barn.ammonia_ppm, barn.band());
    println!("  Humidity:    {}%", barn.humidity);
    println!("  Vent:        {}", barn.vent);

    println!("\nSensors:");
    for sensor in &barn.sensors {
        match sensor.status {
            barnsense_core::SensorStatus::On => {
                println!("  {:<10} On   {} ppm", sensor.name, sensor.ammonia_ppm)
            }
            barnsense_core::SensorStatus::Off => println!("  {:<10} Off", sensor.name),
        }
    }

    let map = match seed {
        Some(seed) => HeatMap::seeded(barn.ammonia_ppm as f64, seed),
        None => HeatMap::generate(barn.ammonia_ppm as f64, &mut rand::rng()),
    };
    // Fleet readings are non-negative integers, so generation cannot fail.
    let map = map.expect("sample readings are valid");
    let s = map.summary();

    println!("\nHeat map ({} zones):", s.zone_count);
    println!(
        "  {:.1}..{:.1} ppm, mean {:.1}",
        s.min_ppm, s.max_ppm, s.mean_ppm
    );
    println!(
        "  {} healthy / {} elevated / {} critical  — worst zone {}",
        s.healthy,
        s.elevated,
        s.critical,
        s.worst_band()
    );
    println!("\nFull grid: `barnsense heatmap --barn {barn_key}`");
}
