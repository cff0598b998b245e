//! Reinforcing steel properties (ACI 318-19 Section 20.2).
//!
//! Steel is modelled as elastic-perfectly-plastic: `fs = Es·εs` up to the
//! yield strain `ey = fy/Es`, then constant at `±fy`.

use serde::Serialize;

use crate::equations::flexure::yield_strain;
use crate::errors::{CalcError, CalcResult};

/// Modulus of elasticity of nonprestressed bars, ACI 20.2.2.2 (psi)
pub const STEEL_ES_PSI: f64 = 29_000_000.0;

/// Specified yield strength of ASTM A615 Grade 60 bars (psi)
pub const GRADE_60_FY_PSI: f64 = 60_000.0;

const MATERIAL_NAME: &str = "Rebar";

/// Reinforcing steel property bundle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RebarMaterial {
    fy_psi: f64,
    es_psi: f64,
}

impl RebarMaterial {
    /// Steel with yield strength `fy` and elastic modulus `es`, both in psi.
    pub fn new(fy: f64, es: f64) -> CalcResult<Self> {
        if !fy.is_finite() || fy <= 0.0 {
            return Err(CalcError::invalid_material(
                MATERIAL_NAME,
                "fy",
                fy.to_string(),
                "Yield strength must be positive",
            ));
        }
        if !es.is_finite() || es <= 0.0 {
            return Err(CalcError::invalid_material(
                MATERIAL_NAME,
                "Es",
                es.to_string(),
                "Elastic modulus must be positive",
            ));
        }
        Ok(RebarMaterial { fy_psi: fy, es_psi: es })
    }

    /// ASTM A615 Grade 60 with Es = 29,000 ksi
    pub fn grade_60() -> Self {
        RebarMaterial {
            fy_psi: GRADE_60_FY_PSI,
            es_psi: STEEL_ES_PSI,
        }
    }

    /// Yield strength fy (psi)
    pub fn fy(&self) -> f64 {
        self.fy_psi
    }

    /// Elastic modulus Es (psi)
    pub fn es(&self) -> f64 {
        self.es_psi
    }

    /// Yield strain ey = fy/Es
    pub fn ey(&self) -> f64 {
        yield_strain(self.fy_psi, self.es_psi)
    }

    /// Get display name for this material
    pub fn display_name(&self) -> String {
        format!("fy = {:.0} ksi", self.fy_psi / 1000.0)
    }
}

impl std::fmt::Display for RebarMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_60_yield_strain() {
        let steel = RebarMaterial::grade_60();
        assert_eq!(steel.fy(), 60_000.0);
        assert_eq!(steel.es(), 29_000_000.0);
        // 60,000 / 29,000,000 = 0.00207
        assert!((steel.ey() - 0.00207).abs() < 1e-5);
    }

    #[test]
    fn test_custom_grade() {
        let steel = RebarMaterial::new(80_000.0, STEEL_ES_PSI).unwrap();
        assert!(steel.ey() > RebarMaterial::grade_60().ey());
        assert_eq!(steel.display_name(), "fy = 80 ksi");
    }

    #[test]
    fn test_rejects_invalid_properties() {
        assert!(RebarMaterial::new(0.0, STEEL_ES_PSI).is_err());
        assert!(RebarMaterial::new(-60_000.0, STEEL_ES_PSI).is_err());
        let err = RebarMaterial::new(60_000.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("Es"));
    }
}
