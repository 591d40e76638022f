/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! Flags given on the command line override values loaded from `--config`,
//! which in turn override the built-in defaults.

use crate::analysis::AnalysisConfig;
use crate::coordination::ConfigError;
use clap::Parser;
use std::path::PathBuf;

/// Classify the tetrahedral/octahedral coordination of atoms in a CIF file
#[derive(Debug, Parser)]
#[command(name = "coordination-rs", version, about)]
pub struct Cli {
    /// Crystallographic structure file (CIF)
    pub structure: PathBuf,

    /// JSON file with analysis settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Element whose coordination is analysed [default: Al]
    #[arg(short, long)]
    pub element: Option<String>,

    /// Supercell replication factor along each axis [default: 3]
    #[arg(short = 'n', long)]
    pub supercell: Option<usize>,

    /// Number of closest neighbors reported per atom [default: 8]
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Directory receiving the reports [default: .]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Only write the coordination summary
    #[arg(long)]
    pub no_details: bool,

    /// Classify atoms on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Tetrahedral bond length tolerance (ratio to the shortest bond)
    #[arg(long)]
    pub tet_distance_tol: Option<f64>,

    /// Ideal tetrahedral angle in degrees
    #[arg(long)]
    pub tet_angle: Option<f64>,

    /// Tetrahedral angle tolerance in degrees
    #[arg(long)]
    pub tet_angle_tol: Option<f64>,

    /// Octahedral bond length tolerance (ratio to the shortest bond)
    #[arg(long)]
    pub oct_distance_tol: Option<f64>,

    /// Ideal octahedral cis angle in degrees
    #[arg(long)]
    pub oct_cis_angle: Option<f64>,

    /// Octahedral cis angle tolerance in degrees
    #[arg(long)]
    pub oct_cis_angle_tol: Option<f64>,

    /// Ideal octahedral trans angle in degrees
    #[arg(long)]
    pub oct_trans_angle: Option<f64>,

    /// Octahedral trans angle tolerance in degrees
    #[arg(long)]
    pub oct_trans_angle_tol: Option<f64>,
}

impl Cli {
    /// Build the analysis configuration from the config file and flags
    pub fn analysis_config(&self) -> Result<AnalysisConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_json_file(path)?,
            None => AnalysisConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    /// Apply the flags that were given on top of `config`
    pub fn apply_overrides(&self, config: &mut AnalysisConfig) {
        if let Some(element) = &self.element {
            config.element = element.clone();
        }
        if let Some(n) = self.supercell {
            config.supercell = n;
        }
        if let Some(w) = self.window {
            config.window = w;
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if self.no_details {
            config.write_details = false;
        }
        if self.sequential {
            config.parallel = false;
        }

        let c = &mut config.classifier;
        let overrides = [
            (self.tet_distance_tol, &mut c.tetrahedral_distance_tolerance),
            (self.tet_angle, &mut c.tetrahedral_angle),
            (self.tet_angle_tol, &mut c.tetrahedral_angle_tolerance),
            (self.oct_distance_tol, &mut c.octahedral_distance_tolerance),
            (self.oct_cis_angle, &mut c.octahedral_cis_angle),
            (self.oct_cis_angle_tol, &mut c.octahedral_cis_angle_tolerance),
            (self.oct_trans_angle, &mut c.octahedral_trans_angle),
            (self.oct_trans_angle_tol, &mut c.octahedral_trans_angle_tolerance),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}
