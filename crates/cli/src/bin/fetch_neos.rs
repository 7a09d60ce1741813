use chrono::{NaiveDate, Utc};
use clap::Parser;
use neo_impact_calculator::catalog::{NearEarthObject, demo_catalog};
use neo_impact_calculator::config::{FeedConfig, load_feed_config};
use neo_impact_calculator::impact::{Impactor, compute_impact};
use neo_impact_calculator::importer::{FeedWindow, fetch_feed};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Fetch the NASA NeoWs feed and tabulate impact estimates per object"
)]
struct Cli {
    /// Feed configuration file (TOML or YAML); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// API key override (takes precedence over config and environment)
    #[arg(long)]
    api_key: Option<String>,

    /// Window start date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    start_date: Option<String>,

    /// Window span in days (capped by the feed's limit)
    #[arg(long)]
    days: Option<u32>,

    /// Skip the network entirely and use the built-in demo catalog
    #[arg(long, default_value_t = false)]
    offline: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_feed_config(path)?,
        None => FeedConfig::default(),
    }
    .with_env_overrides();
    if let Some(key) = cli.api_key {
        config.api_key = key;
    }

    let objects = if cli.offline {
        demo_catalog()
    } else {
        let start = match &cli.start_date {
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")?,
            None => Utc::now().date_naive(),
        };
        let days = cli.days.unwrap_or(config.max_window_days);
        let window = FeedWindow::new(
            start,
            start + chrono::Duration::days(i64::from(days)),
            config.max_window_days,
        )?;
        match fetch_feed(&config, &window) {
            Ok(objects) => objects,
            Err(err) => {
                eprintln!("Feed fetch failed ({err}); falling back to demo catalog");
                demo_catalog()
            }
        }
    };

    println!(
        "{:<28} {:>6} {:>12} {:>10} {:>14} {}",
        "name", "hazard", "diameter_m", "v_km_s", "energy_mt", "assessment"
    );
    for object in &objects {
        print_estimate(object);
    }

    Ok(())
}

fn print_estimate(object: &NearEarthObject) {
    let velocity = match object.approach_velocity_km_s() {
        Ok(v) => v,
        Err(err) => {
            eprintln!("Skipping {}: {err}", object.name);
            return;
        }
    };
    let impactor = Impactor::rocky(object.average_diameter_m(), velocity);
    match compute_impact(&impactor) {
        Ok(impact) => println!(
            "{:<28} {:>6} {:>12.1} {:>10.2} {:>14.3} {}",
            object.name,
            if object.is_potentially_hazardous_asteroid {
                "yes"
            } else {
                "no"
            },
            impactor.diameter_m,
            impactor.velocity_km_s,
            impact.energy_megatons,
            impact.description()
        ),
        Err(err) => eprintln!("Skipping {}: {err}", object.name),
    }
}
