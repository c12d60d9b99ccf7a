//! Basic heat-map example.
//!
//! Generates a heat map for the worst barn in the sample fleet and prints
//! the floor layer plus a summary.
//!
//! Run: `cargo run --example basic`

use barnsense_core::{HeatMap, sample_fleet};

fn main() {
    let fleet = sample_fleet();
    let barn = fleet
        .iter()
        .max_by_key(|b| b.ammonia_ppm)
        .expect("sample fleet is non-empty");

    println!("{}: base reading {} ppm", barn.name, barn.ammonia_ppm);

    let map = HeatMap::seeded(barn.ammonia_ppm as f64, 42).expect("valid base reading");

    println!("\nFloor layer (ppm):");
    for z in 0..map.dims.z {
        for x in 0..map.dims.x {
            let zone = map
                .zone_at(barnsense_core::GridPoint { x, y: 0, z })
                .expect("zone in bounds");
            print!("{:6.1}", zone.ppm);
        }
        println!();
    }

    let summary = map.summary();
    println!(
        "\n{} zones: {:.1}..{:.1} ppm (mean {:.1}) — {} healthy, {} elevated, {} critical",
        summary.zone_count,
        summary.min_ppm,
        summary.max_ppm,
        summary.mean_ppm,
        summary.healthy,
        summary.elevated,
        summary.critical,
    );
}
