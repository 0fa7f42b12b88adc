#![deny(unsafe_code)]
//! CLI binary for the flowfield simulation.
//!
//! Subcommands:
//! - `render` — step a simulation headless for N ticks, write a PNG of the
//!   chosen display mode
//! - `list` — print available display modes

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use flowfield_core::{config, DisplayMode, SimConfig, Simulator};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "flowfield", about = "Noise-driven flow-field particle simulation")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the simulation for N ticks and write a PNG snapshot.
    Render {
        /// Surface width in pixels.
        #[arg(short = 'W', long, default_value_t = config::DEFAULT_WIDTH)]
        width: usize,

        /// Surface height in pixels.
        #[arg(short = 'H', long, default_value_t = config::DEFAULT_HEIGHT)]
        height: usize,

        /// Grid divisor (cells per axis = floor(dim / divisor)).
        #[arg(short, long, default_value_t = config::DEFAULT_DIVISOR)]
        divisor: usize,

        /// Seed for the noise field and particle spawns.
        #[arg(long, default_value_t = config::DEFAULT_SEED)]
        seed: u64,

        /// Number of particles.
        #[arg(short, long, default_value_t = config::DEFAULT_PARTICLE_COUNT)]
        particles: usize,

        /// Number of simulation ticks.
        #[arg(short, long, default_value_t = 1000)]
        steps: usize,

        /// Display mode to render (background, field-lines, trails).
        #[arg(short, long, default_value = "trails")]
        mode: String,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Remaining tunables as a JSON string (frequency, speed_scale,
        /// accel_scale, max_speed, dt).
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List available display modes.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let modes = DisplayMode::list_names();
            if cli.json {
                let info = serde_json::json!({ "modes": modes });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Display modes:");
                for name in modes {
                    println!("  {name}");
                }
            }
        }
        Command::Render {
            width,
            height,
            divisor,
            seed,
            particles,
            steps,
            mode,
            output,
            params,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

            let mode = DisplayMode::from_name(&mode)?;

            let config = SimConfig {
                width,
                height,
                divisor,
                seed,
                particle_count: particles,
                ..SimConfig::from_json(&params)
            };

            let mut sim = Simulator::new(config)?;
            sim.run(steps);

            let buf = flowfield_render::render(&sim, mode);
            let (w, h) = flowfield_render::buffer_dimensions(&sim, mode);
            flowfield_render::snapshot::write_png(&buf, w, h, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "width": width,
                    "height": height,
                    "divisor": divisor,
                    "seed": seed,
                    "particles": particles,
                    "steps": steps,
                    "mode": mode.name(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} ({width}x{height}, {steps} steps, seed {seed}) -> {}",
                    mode.name(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
