//! Living Pixel - entry point
//!
//! Simulates one pixel of a bio-electronic light-emitting matrix and
//! exports the sampled trajectory.
//!
//! CLI Usage:
//!   cargo run                          # default run, CSV + PNG under exports/
//!   cargo run -- -n 2000 --tf 300      # denser grid, longer span
//!   cargo run -- -p my_pixel.json --json

use std::path::PathBuf;

use anyhow::Result;
use living_pixel::{
    config::PixelConfig,
    export::{export_trajectory_csv, export_trajectory_json},
    render::render_trajectory_png,
    simulation::PixelSimulation,
    state::Trajectory,
};

/// Default location of the optional configuration file
const DEFAULT_CONFIG_PATH: &str = "data/pixel.json";

struct CliArgs {
    params_path: Option<PathBuf>,
    out_dir: PathBuf,
    sample_count: Option<usize>,
    tf_sec: Option<f64>,
    write_csv: bool,
    write_json: bool,
    write_png: bool,
}

/// Parse CLI arguments
fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        params_path: None,
        out_dir: PathBuf::from("exports"),
        sample_count: None,
        tf_sec: None,
        write_csv: true,
        write_json: false,
        write_png: true,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-p" | "--params" => {
                i += 1;
                if i < args.len() {
                    cli.params_path = Some(PathBuf::from(&args[i]));
                }
            }
            "-o" | "--out" => {
                i += 1;
                if i < args.len() {
                    cli.out_dir = PathBuf::from(&args[i]);
                }
            }
            "-n" | "--samples" => {
                i += 1;
                if i < args.len() {
                    cli.sample_count = args[i].parse().ok();
                }
            }
            "--tf" => {
                i += 1;
                if i < args.len() {
                    cli.tf_sec = args[i].parse().ok();
                }
            }
            "--json" => cli.write_json = true,
            "--no-csv" => cli.write_csv = false,
            "--no-plot" => cli.write_png = false,
            "--help" | "-h" => {
                println!("Living Pixel");
                println!();
                println!("Usage: living-pixel [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -p, --params FILE  Configuration JSON (default: {})", DEFAULT_CONFIG_PATH);
                println!("  -o, --out DIR      Output directory (default: exports)");
                println!("  -n, --samples N    Output samples (default: 1000)");
                println!("  --tf T             Final time in seconds (default: 150)");
                println!("  --json             Also export the trajectory as JSON");
                println!("  --no-csv           Skip the CSV export");
                println!("  --no-plot          Skip the PNG plot");
                println!("  --help, -h         Show this help");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    cli
}

/// Peak value and its time within a series
fn peak(time_sec: &[f64], values: &[f64]) -> (f64, f64) {
    let mut best = (0.0, f64::NEG_INFINITY);
    for (&t, &v) in time_sec.iter().zip(values) {
        if v > best.1 {
            best = (t, v);
        }
    }
    (best.1, best.0)
}

fn print_summary(trajectory: &Trajectory) {
    let (m_peak, m_t) = peak(&trajectory.time_sec, &trajectory.mediator);
    let (a_peak, a_t) = peak(&trajectory.time_sec, &trajectory.activation);
    let (l_peak, l_t) = peak(&trajectory.time_sec, &trajectory.light_au);

    println!("=== Living Pixel - Simulation Summary ===");
    println!("Samples: {}", trajectory.len());
    println!(
        "Time span: [{:.1}, {:.1}] s",
        trajectory.time_sec[0],
        trajectory.time_sec[trajectory.len() - 1]
    );
    println!("Peak mediator:   {:.4} at t = {:.1} s", m_peak, m_t);
    println!("Peak activation: {:.4} at t = {:.1} s", a_peak, a_t);
    println!("Peak light:      {:.4} at t = {:.1} s", l_peak, l_t);
    println!(
        "Final state: M = {:.4}, A = {:.4}, Light = {:.4}",
        trajectory.mediator[trajectory.len() - 1],
        trajectory.activation[trajectory.len() - 1],
        trajectory.light_au[trajectory.len() - 1]
    );
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = parse_args();

    let mut config = match &cli.params_path {
        Some(path) => PixelConfig::load_or_default(path),
        None => PixelConfig::load_or_default(DEFAULT_CONFIG_PATH),
    };
    if let Some(n) = cli.sample_count {
        config.run.sample_count = n;
    }
    if let Some(tf) = cli.tf_sec {
        config.run.tf_sec = tf;
    }

    log::info!("Living pixel simulation starting");

    let mut simulation = PixelSimulation::new(config)?;
    let trajectory = simulation.run()?;

    print_summary(&trajectory);

    if cli.write_csv {
        let path = export_trajectory_csv(&trajectory, &cli.out_dir)?;
        println!("CSV written: {}", path.display());
    }
    if cli.write_json {
        let path = export_trajectory_json(&trajectory, &config.rates, &cli.out_dir)?;
        println!("JSON written: {}", path.display());
    }
    if cli.write_png {
        let path = render_trajectory_png(
            &cli.out_dir,
            &trajectory.time_sec,
            &trajectory.mediator,
            &trajectory.activation,
            &trajectory.light_au,
        )
        .map_err(|e| anyhow::anyhow!("failed to render trajectory plot: {}", e))?;
        println!("Plot written: {}", path.display());
    }

    Ok(())
}
