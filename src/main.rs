// Building Management Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/building-management-simulator --input campus.txt --minutes 120
// ```
//
// Or generate a building instead of loading one:
//
// ```console
// $ ./target/release/building-management-simulator --generate 3 --seed 7 --output out.txt --verbose
// ```

use anyhow::{Context, Result};
use building_management_simulator::facility::{Building, BuildingGenerator};
use building_management_simulator::format::{read_buildings_file, write_buildings_file};
use building_management_simulator::simulation::{LoggingConfig, Simulation};
use building_management_simulator::types::config::CliArgs;
use building_management_simulator::types::SimulationConfig;
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Initialize logging based on CLI flags
    let level = if args.debug {
        tracing::Level::DEBUG
    } else if args.verbose {
        tracing::Level::INFO
    } else {
        // Default: minimal logging for normal users
        tracing::Level::WARN
    };
    let mut logging = LoggingConfig::new().with_level(level);
    if args.debug {
        logging = logging.with_span_events();
    }
    if let Some(directory) = &args.log_dir {
        logging = logging.with_file_logging(directory.clone());
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(args) {
        error!("Simulation failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    let print_config = args.print_config;
    let dry_run = args.dry_run;

    // Load configuration from CLI arguments and optional config file
    let config =
        SimulationConfig::from_cli_args(args).context("Failed to load configuration")?;

    if print_config {
        println!("{}", config.print_json()?);
        return Ok(());
    }

    config.validate().context("Configuration validation failed")?;
    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return Ok(());
    }

    print_configuration_summary(&config);

    let buildings = load_buildings(&config)?;
    info!(buildings = buildings.len(), "Buildings ready");

    let mut simulation = Simulation::with_buildings(config.effective_start_time(), buildings);
    info!(
        entities = simulation.clock().entities().len(),
        minutes = config.minutes,
        "Starting simulation"
    );
    simulation.run(config.minutes);

    if config.recommend {
        print_recommendations(&simulation);
    }

    if config.summary {
        simulation.statistics().print_json().context("Failed to serialize statistics")?;
    } else {
        eprintln!("{}", simulation.statistics());
    }

    if let Some(output) = &config.output {
        write_buildings_file(output, simulation.buildings())
            .with_context(|| format!("Failed to save buildings to {}", output))?;
        eprintln!("Buildings written to: {}", output);
    }

    info!("Building Management Simulator completed successfully");
    Ok(())
}

/// Load the configured save file or generate a building
fn load_buildings(config: &SimulationConfig) -> Result<Vec<Building>> {
    if let Some(floors) = config.generate_floors {
        let mut generator = match config.seed {
            Some(seed) => BuildingGenerator::with_seed(seed),
            None => BuildingGenerator::new(),
        };
        let building = generator
            .generate_building(config.building_name.clone(), floors, config.rooms_per_floor)
            .context("Failed to generate building")?;
        return Ok(vec![building]);
    }

    // validate() guarantees one of the two sources
    let input = config.input.as_deref().unwrap_or_default();
    read_buildings_file(input).with_context(|| format!("Failed to load buildings from {}", input))
}

/// Print the recommended study room of every building
fn print_recommendations(simulation: &Simulation) {
    for (index, building) in simulation.buildings().iter().enumerate() {
        match simulation.recommend_study_room(index) {
            Some(room) => println!("{}: {}", building.name(), room),
            None => println!("{}: no study room available", building.name()),
        }
    }
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    match (&config.input, config.generate_floors) {
        (Some(input), _) => eprintln!("  Input File: {}", input),
        (None, Some(floors)) => eprintln!(
            "  Generated Building: {:?} ({} floors, {} rooms per floor)",
            config.building_name, floors, config.rooms_per_floor
        ),
        (None, None) => eprintln!("  Input: none"),
    }
    eprintln!("  Minutes: {}", config.minutes);
    eprintln!("  Start Time: {}", config.effective_start_time().to_rfc3339());
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    if let Some(output) = &config.output {
        eprintln!("  Output File: {}", output);
    }
    eprintln!();
}
