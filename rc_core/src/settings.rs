//! # Design Settings
//!
//! Values shared by every calculation in a run: code edition, material
//! constants that are normally fixed by the code, and sweep resolution.
//!
//! Every field has a default, so a settings file only needs the values it
//! overrides:
//!
//! ```rust
//! use rc_core::settings::DesignSettings;
//!
//! let settings: DesignSettings = serde_json::from_str(r#"{"sweep_steps": 100}"#).unwrap();
//! assert_eq!(settings.sweep_steps, 100);
//! assert_eq!(settings.ultimate_strain, 0.003);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{ACI_ULTIMATE_STRAIN, STEEL_ES_PSI};

/// Default number of neutral axis depths in an interaction sweep
pub const DEFAULT_SWEEP_STEPS: usize = 50;

/// Global design settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Code edition label carried into reports (e.g., "ACI 318-19")
    pub code: String,

    /// Maximum usable concrete strain εcu (positive)
    pub ultimate_strain: f64,

    /// Reinforcement modulus of elasticity Es (psi)
    pub steel_modulus_psi: f64,

    /// Neutral axis depths per interaction sweep, before the pure
    /// compression point is appended
    pub sweep_steps: usize,

    /// Use the seismic shear φ (0.60) instead of 0.75
    pub seismic: bool,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            code: "ACI 318-19".to_string(),
            ultimate_strain: ACI_ULTIMATE_STRAIN,
            steel_modulus_psi: STEEL_ES_PSI,
            sweep_steps: DEFAULT_SWEEP_STEPS,
            seismic: false,
        }
    }
}

impl DesignSettings {
    /// Check settings that would otherwise surface as a confusing
    /// material or sweep error later.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.ultimate_strain > 0.0 && self.ultimate_strain.is_finite()) {
            return Err(CalcError::invalid_input(
                "ultimate_strain",
                self.ultimate_strain.to_string(),
                "Ultimate strain must be a positive magnitude",
            ));
        }
        if !(self.steel_modulus_psi > 0.0 && self.steel_modulus_psi.is_finite()) {
            return Err(CalcError::invalid_input(
                "steel_modulus_psi",
                self.steel_modulus_psi.to_string(),
                "Steel modulus must be positive",
            ));
        }
        if self.sweep_steps < 2 {
            return Err(CalcError::invalid_input(
                "sweep_steps",
                self.sweep_steps.to_string(),
                "Sweep needs at least 2 steps",
            ));
        }
        Ok(())
    }
}
