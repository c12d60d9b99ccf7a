//! CLI for barnsense — simulated barn ammonia monitoring.

mod commands;
mod tui;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "barnsense")]
#[command(about = "barnsense — simulated barn ammonia monitoring")]
#[command(version = barnsense_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sample fleet with readings and safety bands
    Barns,

    /// Show one barn in detail: readings, sensors, heat-map summary
    Show {
        /// Barn name, 1-based index, or UUID
        barn: String,

        /// Seed the heat-map jitter for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compute a 5x5x3 heat map and render it layer by layer
    Heatmap {
        /// Barn name, 1-based index, or UUID (default: worst barn)
        #[arg(long)]
        barn: Option<String>,

        /// Base reading in ppm, overriding the barn's reading
        #[arg(long)]
        base: Option<f64>,

        /// Seed the jitter for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Render a single vertical layer (0 = floor)
        #[arg(long)]
        layer: Option<usize>,

        /// Write the full heat map as JSON
        #[arg(long)]
        output: Option<String>,

        /// Include the renderable scene description in the JSON output
        #[arg(long)]
        scene: bool,
    },

    /// Print the weekly safe/warning/critical trend series
    Trend,

    /// Live interactive fleet dashboard (TUI)
    Monitor {
        /// Refresh rate in seconds
        #[arg(long, default_value = "1.0")]
        refresh: f64,
    },

    /// Start the HTTP dashboard API
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8043")]
        port: u16,

        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Barns => commands::barns::run(),
        Commands::Show { barn, seed } => commands::show::run(&barn, seed),
        Commands::Heatmap {
            barn,
            base,
            seed,
            layer,
            output,
            scene,
        } => commands::heatmap::run(commands::heatmap::HeatmapCommandConfig {
            barn: barn.as_deref(),
            base,
            seed,
            layer,
            output_path: output.as_deref(),
            include_scene: scene,
        }),
        Commands::Trend => commands::trend::run(),
        Commands::Monitor { refresh } => commands::monitor::run(refresh),
        Commands::Serve { port, host } => commands::serve::run(&host, port),
    }
}
