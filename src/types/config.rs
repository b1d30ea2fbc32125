//! Configuration structures for the building management simulator
//!
//! This module contains the command line arguments, the optional JSON
//! configuration file and the merged simulation configuration with its
//! validation logic.

use crate::facility::{MAX_GENERATED_FLOORS, MAX_GENERATED_ROOMS};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "building-management-simulator",
    version,
    about = "Building Management Simulator - Runs sensor and maintenance simulations over saved buildings",
    long_about = "Loads buildings from the line-based save format (or generates them), advances sensors and floor maintenance schedules minute by minute, and optionally saves the result, prints a summary or recommends a study room.

EXAMPLES:
    # Simulate two hours of a saved building file
    building-management-simulator --input campus.txt --minutes 120

    # Generate a three floor building and save it
    building-management-simulator --generate 3 --seed 42 --output generated.txt

    # Print a JSON summary and a study room recommendation
    building-management-simulator --input campus.txt --summary --recommend

    # Generate configuration template
    building-management-simulator --print-config > my-config.json

    # Validate configuration without running
    building-management-simulator --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Save file to load buildings from
    #[arg(short, long, help = "Building save file to load")]
    pub input: Option<String>,

    /// Save file to write the buildings to after the run
    #[arg(short, long, help = "Write buildings to this file after the run")]
    pub output: Option<String>,

    /// Number of minutes to simulate
    #[arg(
        short,
        long,
        help = "Number of minutes to simulate",
        long_help = "Number of simulated minutes to advance sensors and maintenance schedules. Default: 60"
    )]
    pub minutes: Option<u64>,

    /// Simulated start time
    #[arg(
        long,
        help = "Simulated start time (RFC 3339)",
        long_help = "Simulated wall-clock time of minute zero, e.g. 2024-03-04T09:00:00Z. Default: now"
    )]
    pub start_time: Option<DateTime<Utc>>,

    /// Generate a building with this many floors instead of loading one
    #[arg(
        long,
        value_name = "FLOORS",
        help = "Generate a building with this many floors (1-9)",
        long_help = "Generate a random building with this many floors instead of loading a save file. Range: 1-9"
    )]
    pub generate: Option<u32>,

    /// Rooms per generated floor
    #[arg(long, help = "Rooms per generated floor (1-20)")]
    pub rooms_per_floor: Option<u32>,

    /// Name of the generated building
    #[arg(long, help = "Name of the generated building")]
    pub building_name: Option<String>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Recommend a study room in every building after the run
    #[arg(long, help = "Recommend the most comfortable open study room")]
    pub recommend: bool,

    /// Print run statistics as JSON after the run
    #[arg(long, help = "Print run statistics as JSON")]
    pub summary: bool,

    /// Directory for rolling JSON log files
    #[arg(long, help = "Also write JSON logs to daily files in this directory")]
    pub log_dir: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print configuration and exit
    #[arg(long, help = "Print the effective configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Save file to load buildings from
    pub input: Option<String>,

    /// Save file to write the buildings to after the run
    pub output: Option<String>,

    /// Number of minutes to simulate
    pub minutes: Option<u64>,

    /// Simulated start time
    pub start_time: Option<DateTime<Utc>>,

    /// Floors of a generated building
    pub generate_floors: Option<u32>,

    /// Rooms per generated floor
    pub rooms_per_floor: Option<u32>,

    /// Name of the generated building
    pub building_name: Option<String>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Recommend a study room after the run
    pub recommend: Option<bool>,

    /// Print run statistics after the run
    pub summary: Option<bool>,
}

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Save file to load buildings from
    pub input: Option<String>,

    /// Save file to write the buildings to after the run
    pub output: Option<String>,

    /// Number of minutes to simulate
    pub minutes: u64,

    /// Simulated start time; the current time when unset
    pub start_time: Option<DateTime<Utc>>,

    /// Floors of a generated building; loads `input` when unset
    pub generate_floors: Option<u32>,

    /// Rooms per generated floor
    pub rooms_per_floor: u32,

    /// Name of the generated building
    pub building_name: String,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Recommend a study room after the run
    pub recommend: bool,

    /// Print run statistics after the run
    pub summary: bool,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    /// Generated floor count is out of range
    #[error("Generated floor count must be between 1 and {max}, got {0}", max = MAX_GENERATED_FLOORS)]
    InvalidFloorCount(u32),

    /// Generated room count is out of range
    #[error("Rooms per floor must be between 1 and {max}, got {0}", max = MAX_GENERATED_ROOMS)]
    InvalidRoomCount(u32),

    /// Neither an input file nor a generator was configured
    #[error("No input file given and no building to generate")]
    MissingInput,

    /// Both an input file and a generator were configured
    #[error("Cannot both load {0} and generate a building")]
    ConflictingSources(String),

    /// Generated building name cannot be written to the save format
    #[error("Invalid building name: {0:?}")]
    InvalidBuildingName(String),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            minutes: 60,
            start_time: None,
            generate_floors: None,
            rooms_per_floor: 4,
            building_name: "Generated Building".to_string(),
            seed: None,
            recommend: false,
            summary: false,
        }
    }
}

impl SimulationConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(config_path) => Self::from_file(config_path)?,
            None => Self::default(),
        };

        // CLI takes precedence
        config.apply_cli_overrides(args);
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            input: config_file.input.or(defaults.input),
            output: config_file.output.or(defaults.output),
            minutes: config_file.minutes.unwrap_or(defaults.minutes),
            start_time: config_file.start_time.or(defaults.start_time),
            generate_floors: config_file.generate_floors.or(defaults.generate_floors),
            rooms_per_floor: config_file.rooms_per_floor.unwrap_or(defaults.rooms_per_floor),
            building_name: config_file.building_name.unwrap_or(defaults.building_name),
            seed: config_file.seed.or(defaults.seed),
            recommend: config_file.recommend.unwrap_or(defaults.recommend),
            summary: config_file.summary.unwrap_or(defaults.summary),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&mut self, args: CliArgs) {
        if let Some(value) = args.input {
            self.input = Some(value);
        }
        if let Some(value) = args.output {
            self.output = Some(value);
        }
        if let Some(value) = args.minutes {
            self.minutes = value;
        }
        if let Some(value) = args.start_time {
            self.start_time = Some(value);
        }
        if let Some(value) = args.generate {
            self.generate_floors = Some(value);
        }
        if let Some(value) = args.rooms_per_floor {
            self.rooms_per_floor = value;
        }
        if let Some(value) = args.building_name {
            self.building_name = value;
        }
        if let Some(value) = args.seed {
            self.seed = Some(value);
        }

        // Flags can only switch these on
        self.recommend |= args.recommend;
        self.summary |= args.summary;
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        match (&self.input, self.generate_floors) {
            (None, None) => return Err(ConfigValidationError::MissingInput),
            (Some(input), Some(_)) => {
                return Err(ConfigValidationError::ConflictingSources(input.clone()))
            }
            _ => {}
        }

        if let Some(floors) = self.generate_floors {
            if !(1..=MAX_GENERATED_FLOORS).contains(&floors) {
                return Err(ConfigValidationError::InvalidFloorCount(floors));
            }
            if !(1..=MAX_GENERATED_ROOMS).contains(&self.rooms_per_floor) {
                return Err(ConfigValidationError::InvalidRoomCount(self.rooms_per_floor));
            }
            // The name line must not read as a floor count or as a blank line
            let name = &self.building_name;
            if name.is_empty() || name.contains('\n') || name.parse::<i32>().is_ok() {
                return Err(ConfigValidationError::InvalidBuildingName(name.clone()));
            }
        }

        Ok(())
    }

    /// Simulated start time, falling back to the current time
    pub fn effective_start_time(&self) -> DateTime<Utc> {
        self.start_time.unwrap_or_else(Utc::now)
    }
}
