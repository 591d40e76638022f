/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Configuration of a coordination analysis run

use crate::atoms::database;
use crate::coordination::{ClassifierConfig, ConfigError};
use crate::utils::constants::TETRAHEDRAL_NEIGHBORS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Parameters of an analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Element whose coordination is analysed
    pub element: String,
    /// Replication factor of the unit cell along each axis
    pub supercell: usize,
    /// Number of closest neighbors reported per atom
    pub window: usize,
    /// Classifier tolerances
    pub classifier: ClassifierConfig,
    /// Directory receiving the reports
    pub output_dir: PathBuf,
    /// Whether per-atom neighbor and angle tables are written
    pub write_details: bool,
    /// Whether atoms are classified on the rayon thread pool
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            element: "Al".to_string(),
            supercell: 3,
            window: 8,
            classifier: ClassifierConfig::default(),
            output_dir: PathBuf::from("."),
            write_details: true,
            parallel: true,
        }
    }
}

impl AnalysisConfig {
    /// Load a configuration from a JSON file; missing fields keep defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Check all parameters and normalise the element symbol
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.element = database::canonical_symbol(&self.element)
            .ok_or_else(|| ConfigError::InvalidParameter {
                name: "element",
                reason: format!("unknown element symbol '{}'", self.element),
            })?
            .to_string();

        if self.supercell == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "supercell",
                reason: "must be at least 1".to_string(),
            });
        }

        if self.window < TETRAHEDRAL_NEIGHBORS {
            return Err(ConfigError::InvalidParameter {
                name: "window",
                reason: format!(
                    "must be at least {}, got {}",
                    TETRAHEDRAL_NEIGHBORS, self.window
                ),
            });
        }

        self.classifier.validate()
    }
}
