use clap::Parser;
use neo_impact_calculator::constants::ROCKY_ASTEROID_DENSITY_KG_M3;
use neo_impact_calculator::impact::{Impactor, compute_impact};
use neo_impact_calculator::mitigation::plan_mitigation;
use neo_impact_calculator::units::m_to_km;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Estimate asteroid impact energy, crater size, and mitigation options"
)]
struct Cli {
    /// Impactor diameter in metres
    #[arg(long)]
    diameter: f64,

    /// Impact velocity in km/s
    #[arg(long)]
    velocity: f64,

    /// Bulk density in kg/m³ (defaults to a rocky asteroid)
    #[arg(long, default_value_t = ROCKY_ASTEROID_DENSITY_KG_M3)]
    density: f64,

    /// Warning time before impact in years; enables the mitigation planner
    #[arg(long)]
    time_to_impact: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let impactor = Impactor {
        diameter_m: cli.diameter,
        velocity_km_s: cli.velocity,
        density_kg_m3: cli.density,
    };

    let impact = compute_impact(&impactor)?;

    println!(
        "Impactor: {:.1} m at {:.2} km/s, density {:.0} kg/m³",
        impactor.diameter_m, impactor.velocity_km_s, impactor.density_kg_m3
    );
    println!(
        "Kinetic energy: {:.4e} J ({:.2} MT TNT)",
        impact.kinetic_energy_j, impact.energy_megatons
    );
    println!(
        "Crater: {:.3} km wide, {:.3} km deep",
        m_to_km(impact.crater_diameter_m),
        m_to_km(impact.crater_depth_m)
    );
    println!("Assessment: {}", impact.description());

    if let Some(years) = cli.time_to_impact {
        let plan = plan_mitigation(&impactor, years)?;
        if plan.is_empty() {
            println!("No mitigation strategy applies with {years} years of warning.");
        } else {
            println!("Mitigation options ({years} years of warning):");
            for strategy in &plan.strategies {
                println!("  - {strategy}");
            }
        }
    }

    Ok(())
}
