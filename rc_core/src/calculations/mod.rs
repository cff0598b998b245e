//! # Section Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON/TOML-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(&input, &settings) -> CalcResult<*Result>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`interaction`] - P-M interaction diagram by strain compatibility
//! - [`beam`] - Singly reinforced beam flexure and shear

pub mod beam;
pub mod interaction;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::settings::DesignSettings;

pub use beam::{RcBeamInput, RcBeamResult};
pub use interaction::{InteractionInput, InteractionPoint, InteractionResult, Reinforcement};

/// Enum wrapper for all calculation types, tagged by `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// P-M interaction diagram
    Interaction(InteractionInput),
    /// Beam flexure and shear check
    Beam(RcBeamInput),
}

/// Result of running a [`CalculationItem`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Interaction(InteractionResult),
    Beam(RcBeamResult),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Interaction(i) => &i.label,
            CalculationItem::Beam(b) => &b.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Interaction(_) => "Interaction",
            CalculationItem::Beam(_) => "Beam",
        }
    }

    /// Run the wrapped calculation
    pub fn run(&self, settings: &DesignSettings) -> CalcResult<CalculationOutput> {
        log::info!("running {} calculation '{}'", self.calc_type(), self.label());
        match self {
            CalculationItem::Interaction(input) => interaction::calculate(input, settings).map(CalculationOutput::Interaction),
            CalculationItem::Beam(input) => beam::calculate(input, settings).map(CalculationOutput::Beam),
        }
    }
}
