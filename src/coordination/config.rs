/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Tunable tolerances of the coordination classifier

use super::errors::ConfigError;
use crate::utils::constants::*;
use serde::{Deserialize, Serialize};

/// Distance and angle windows used to recognise coordination polyhedra
///
/// Distance tolerances are ratios to the shortest bond; angle targets and
/// tolerances are in degrees and define open windows `target ± tolerance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Largest allowed ratio of any of the four bonds to the shortest one
    pub tetrahedral_distance_tolerance: f64,
    /// Ideal bond angle of a tetrahedron
    pub tetrahedral_angle: f64,
    /// Half-width of the tetrahedral angle window
    pub tetrahedral_angle_tolerance: f64,
    /// Largest allowed ratio of any of the six bonds to the shortest one
    pub octahedral_distance_tolerance: f64,
    /// Ideal angle between cis neighbors
    pub octahedral_cis_angle: f64,
    /// Half-width of the cis angle window
    pub octahedral_cis_angle_tolerance: f64,
    /// Ideal angle between trans neighbors
    pub octahedral_trans_angle: f64,
    /// Half-width of the trans angle window
    pub octahedral_trans_angle_tolerance: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            tetrahedral_distance_tolerance: TETRAHEDRAL_DISTANCE_TOLERANCE,
            tetrahedral_angle: TETRAHEDRAL_ANGLE,
            tetrahedral_angle_tolerance: TETRAHEDRAL_ANGLE_TOLERANCE,
            octahedral_distance_tolerance: OCTAHEDRAL_DISTANCE_TOLERANCE,
            octahedral_cis_angle: OCTAHEDRAL_CIS_ANGLE,
            octahedral_cis_angle_tolerance: OCTAHEDRAL_CIS_ANGLE_TOLERANCE,
            octahedral_trans_angle: OCTAHEDRAL_TRANS_ANGLE,
            octahedral_trans_angle_tolerance: OCTAHEDRAL_TRANS_ANGLE_TOLERANCE,
        }
    }
}

impl ClassifierConfig {
    /// Check that every parameter is finite and positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parameters = [
            ("tetrahedral_distance_tolerance", self.tetrahedral_distance_tolerance),
            ("tetrahedral_angle", self.tetrahedral_angle),
            ("tetrahedral_angle_tolerance", self.tetrahedral_angle_tolerance),
            ("octahedral_distance_tolerance", self.octahedral_distance_tolerance),
            ("octahedral_cis_angle", self.octahedral_cis_angle),
            ("octahedral_cis_angle_tolerance", self.octahedral_cis_angle_tolerance),
            ("octahedral_trans_angle", self.octahedral_trans_angle),
            ("octahedral_trans_angle_tolerance", self.octahedral_trans_angle_tolerance),
        ];

        for (name, value) in parameters {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidParameter {
                    name,
                    reason: format!("must be finite and positive, got {}", value),
                });
            }
        }

        Ok(())
    }
}
