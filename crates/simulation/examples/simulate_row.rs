//! Builds a simulation from one catalog row and prints a few frames.
//!
//! ```text
//! cargo run -p simulation --example simulate_row -- [row.json] [config.toml]
//! RUST_LOG=simulation=debug,orbit=debug cargo run -p simulation --example simulate_row
//! ```
//!
//! Without arguments a built-in Kepler-22 b row is used.

use std::error::Error;

use catalog::CatalogRecord;
use simulation::{Simulation, SimulationConfig};

const KEPLER_22B: &str = r#"{
    "pl_name": "Kepler-22 b",
    "hostname": "Kepler-22",
    "st_rad": 0.98,
    "st_teff": 5596,
    "st_lum": -0.1,
    "st_mass": 0.97,
    "pl_rade": 2.1,
    "pl_orbsmax": 0.849,
    "pl_orbper": 289.86,
    "pl_orbeccen": 0.72
}"#;

const FRAMES: usize = 1200;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let record = match args.next() {
        Some(path) => CatalogRecord::from_json_str(&std::fs::read_to_string(path)?)?,
        None => CatalogRecord::from_json_str(KEPLER_22B)?,
    };
    let config = match args.next() {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    let mut sim = Simulation::from_record_with_config(&record, &config);
    tracing::info!(label = %record.list_label(), "simulation ready");

    println!("{}", sim.state());
    println!();
    println!("{:>6} {:>10} {:>10} {:>10} {:>10}", "frame", "phase", "x (AU)", "z (AU)", "days");

    for frame in 0..=FRAMES {
        if frame % 100 == 0 {
            let p = sim.planet_position();
            println!(
                "{:>6} {:>10.4} {:>10.4} {:>10.4} {:>10.2}",
                frame,
                sim.phase(),
                p.x,
                p.z,
                sim.elapsed_days()
            );
        }
        sim.update(config.frame_step);
    }

    Ok(())
}
