use barnsense_core::{GridPoint, HeatMap, build_barn_scene, sample_fleet};

pub struct HeatmapCommandConfig<'a> {
    pub barn: Option<&'a str>,
    pub base: Option<f64>,
    pub seed: Option<u64>,
    pub layer: Option<usize>,
    pub output_path: Option<&'a str>,
    pub include_scene: bool,
}

pub fn run(config: HeatmapCommandConfig<'_>) {
    let fleet = sample_fleet();

    // Base reading: explicit --base wins, then the chosen barn, then the
    // worst barn in the fleet.
    let (label, base) = match (config.base, config.barn) {
        (Some(base), barn) => (barn.unwrap_or("custom reading").to_string(), base),
        (None, Some(key)) => match super::find_barn(&fleet, key) {
            Some(b) => (b.name.clone(), b.ammonia_ppm as f64),
            None => {
                eprintln!("Unknown barn: {key}. Try `barnsense barns` to list the fleet.");
                std::process::exit(2);
            }
        },
        (None, None) => {
            let worst = super::worst_barn(&fleet).expect("sample fleet is non-empty");
            (worst.name.clone(), worst.ammonia_ppm as f64)
        }
    };

    let map = match config.seed {
        Some(seed) => HeatMap::seeded(base, seed),
        None => HeatMap::generate(base, &mut rand::rng()),
    };
    let map = match map {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Cannot compute heat map: {e}");
            std::process::exit(2);
        }
    };

    println!("{label}: base reading {base} ppm");
    if let Some(seed) = config.seed {
        println!("seed: {seed}");
    }

    let layers: Vec<usize> = match config.layer {
        Some(y) if y < map.dims.y => vec![y],
        Some(y) => {
            eprintln!("Layer {y} out of range (grid has {} layers)", map.dims.y);
            std::process::exit(2);
        }
        None => (0..map.dims.y).collect(),
    };

    for y in layers {
        print_layer(&map, y);
    }

    let s = map.summary();
    println!(
        "\n{} zones: {:.1}..{:.1} ppm (mean {:.1}) — {} healthy, {} elevated, {} critical",
        s.zone_count, s.min_ppm, s.max_ppm, s.mean_ppm, s.healthy, s.elevated, s.critical
    );

    if let Some(path) = config.output_path {
        let json = if config.include_scene {
            serde_json::json!({
                "heatmap": map,
                "summary": s,
                "scene": build_barn_scene(&map),
            })
        } else {
            serde_json::json!({ "heatmap": map, "summary": s })
        };
        let contents = serde_json::to_string_pretty(&json).expect("heat map serializes");
        if let Err(e) = std::fs::write(path, contents) {
            eprintln!("Failed to write {path}: {e}");
            std::process::exit(1);
        }
        println!("Wrote {path}");
    }
}

/// Print one vertical layer as a 5×5 grid of glyph + ppm cells.
fn print_layer(map: &HeatMap, y: usize) {
    let height = y as f32 * map.spacing + 1.0;
    println!("\nLayer {y} (y = {height:.1} m)   front → back");
    for z in 0..map.dims.z {
        print!("  ");
        for x in 0..map.dims.x {
            if let Some(zone) = map.zone_at(GridPoint { x, y, z }) {
                print!("{} {:>5.1}  ", super::band_glyph(zone.band), zone.ppm);
            }
        }
        println!();
    }
}
