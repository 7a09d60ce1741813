use clap::Parser;
use neo_impact_calculator::constants::ROCKY_ASTEROID_DENSITY_KG_M3;
use neo_impact_calculator::export::sweep;
use neo_impact_calculator::impact::{Impactor, compute_impact};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Sweep a diameter × velocity grid and export impact estimates as CSV"
)]
struct Cli {
    /// Smallest impactor diameter in metres
    #[arg(long)]
    diameter_min: f64,

    /// Largest impactor diameter in metres
    #[arg(long)]
    diameter_max: f64,

    /// Number of diameter samples (inclusive of both ends)
    #[arg(long, default_value_t = 10)]
    diameter_steps: usize,

    /// Smallest impact velocity in km/s
    #[arg(long)]
    velocity_min: f64,

    /// Largest impact velocity in km/s
    #[arg(long)]
    velocity_max: f64,

    /// Number of velocity samples (inclusive of both ends)
    #[arg(long, default_value_t = 10)]
    velocity_steps: usize,

    /// Bulk density in kg/m³ (defaults to a rocky asteroid)
    #[arg(long, default_value_t = ROCKY_ASTEROID_DENSITY_KG_M3)]
    density: f64,

    /// Output CSV path, `-` for stdout
    #[arg(long, default_value = "-")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    anyhow::ensure!(cli.diameter_steps >= 1, "diameter-steps must be at least 1");
    anyhow::ensure!(cli.velocity_steps >= 1, "velocity-steps must be at least 1");

    let mut writer = sweep::writer_for_path(&cli.out)?;
    sweep::write_header(writer.as_mut())?;

    for di in 0..cli.diameter_steps {
        let diameter = sample(cli.diameter_min, cli.diameter_max, di, cli.diameter_steps);
        for vi in 0..cli.velocity_steps {
            let velocity = sample(cli.velocity_min, cli.velocity_max, vi, cli.velocity_steps);
            let impactor = Impactor {
                diameter_m: diameter,
                velocity_km_s: velocity,
                density_kg_m3: cli.density,
            };
            let impact = compute_impact(&impactor)?;
            sweep::Record {
                diameter_m: impactor.diameter_m,
                velocity_km_s: impactor.velocity_km_s,
                density_kg_m3: impactor.density_kg_m3,
                kinetic_energy_j: impact.kinetic_energy_j,
                energy_megatons: impact.energy_megatons,
                crater_diameter_m: impact.crater_diameter_m,
                crater_depth_m: impact.crater_depth_m,
                severity: impact.severity.label(),
            }
            .write_to(writer.as_mut())?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Linear sample over an inclusive range; a single step collapses to the minimum.
fn sample(min: f64, max: f64, index: usize, steps: usize) -> f64 {
    if steps == 1 {
        return min;
    }
    min + (max - min) * (index as f64) / ((steps - 1) as f64)
}
