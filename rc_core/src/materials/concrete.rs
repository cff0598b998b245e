//! Concrete material properties per ACI 318-19 Chapter 19 and Section 22.2.
//!
//! ## Sign Convention
//!
//! Compression is positive throughout rc_core. The ultimate usable strain
//! `ecu` is therefore stored as a positive magnitude (0.003 per ACI 22.2.2.1)
//! and a negative value is rejected rather than silently flipped.

use serde::Serialize;

use crate::equations::material::{beta1, concrete_elastic_modulus, modulus_of_rupture};
use crate::errors::{CalcError, CalcResult};
use crate::units::strength_psi;

/// Maximum usable strain at the extreme concrete compression fiber (ACI 22.2.2.1)
pub const ACI_ULTIMATE_STRAIN: f64 = 0.003;

const MATERIAL_NAME: &str = "Concrete";

/// Concrete property bundle.
///
/// Fields are private so the invariants checked in the constructors
/// (`fc > 0`, `0.65 <= b1 <= 0.85`, `0 < lam <= 1`, `ecu > 0`) always hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConcreteMaterial {
    fc_psi: f64,
    b1: f64,
    ecu: f64,
    lam: f64,
    wc_pcf: Option<f64>,
}

impl ConcreteMaterial {
    /// Normalweight concrete of strength `fc`.
    ///
    /// `fc` below 10 is read as ksi and converted to psi. β1 comes from
    /// ACI Table 22.2.2.4.3, `ecu` is 0.003 and λ is 1.0.
    pub fn new(fc: f64) -> CalcResult<Self> {
        if !fc.is_finite() || fc <= 0.0 {
            return Err(CalcError::invalid_material(
                MATERIAL_NAME,
                "fc",
                fc.to_string(),
                "Compressive strength must be positive",
            ));
        }
        let fc_psi = strength_psi(fc);
        Ok(ConcreteMaterial {
            fc_psi,
            b1: beta1(fc_psi),
            ecu: ACI_ULTIMATE_STRAIN,
            lam: 1.0,
            wc_pcf: None,
        })
    }

    /// Set the lightweight concrete modification factor λ (ACI Table 19.2.4.2).
    pub fn with_lambda(mut self, lam: f64) -> CalcResult<Self> {
        if !(lam > 0.0 && lam <= 1.0) {
            return Err(CalcError::invalid_material(
                MATERIAL_NAME,
                "lam",
                lam.to_string(),
                "Lightweight factor must be in (0, 1]",
            ));
        }
        self.lam = lam;
        Ok(self)
    }

    /// Set the unit weight `wc` in pcf, switching `Ec` to ACI Eq. 19.2.2.1.a.
    pub fn with_unit_weight(mut self, wc_pcf: f64) -> CalcResult<Self> {
        if !(90.0..=160.0).contains(&wc_pcf) {
            return Err(CalcError::invalid_material(
                MATERIAL_NAME,
                "wc",
                wc_pcf.to_string(),
                "Unit weight must be between 90 and 160 pcf",
            ));
        }
        self.wc_pcf = Some(wc_pcf);
        Ok(self)
    }

    /// Override the ultimate usable compressive strain.
    ///
    /// Must be a positive magnitude (compression-positive convention).
    pub fn with_ultimate_strain(mut self, ecu: f64) -> CalcResult<Self> {
        if !ecu.is_finite() || ecu <= 0.0 {
            return Err(CalcError::invalid_material(
                MATERIAL_NAME,
                "ecu",
                ecu.to_string(),
                "Ultimate strain is a positive magnitude (compression is positive)",
            ));
        }
        self.ecu = ecu;
        Ok(self)
    }

    /// 28-day compressive strength f'c (psi)
    pub fn fc(&self) -> f64 {
        self.fc_psi
    }

    /// Stress block depth factor β1
    pub fn b1(&self) -> f64 {
        self.b1
    }

    /// Ultimate usable compressive strain (positive)
    pub fn ecu(&self) -> f64 {
        self.ecu
    }

    /// Lightweight concrete factor λ
    pub fn lam(&self) -> f64 {
        self.lam
    }

    /// Unit weight (pcf), if specified
    pub fn wc(&self) -> Option<f64> {
        self.wc_pcf
    }

    /// Elastic modulus Ec (psi)
    pub fn ec(&self) -> f64 {
        concrete_elastic_modulus(self.fc_psi, self.wc_pcf)
    }

    /// Modulus of rupture fr (psi)
    pub fn modulus_of_rupture(&self) -> f64 {
        modulus_of_rupture(self.fc_psi, self.lam)
    }

    /// Equivalent stress block intensity 0.85·f'c (psi)
    pub fn block_stress(&self) -> f64 {
        0.85 * self.fc_psi
    }

    /// Get display name for this material
    pub fn display_name(&self) -> String {
        if self.lam < 1.0 {
            format!("f'c = {:.0} psi (λ = {:.2})", self.fc_psi, self.lam)
        } else {
            format!("f'c = {:.0} psi", self.fc_psi)
        }
    }
}

impl std::fmt::Display for ConcreteMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalweight_defaults() {
        let c = ConcreteMaterial::new(4000.0).unwrap();
        assert_eq!(c.fc(), 4000.0);
        assert_eq!(c.b1(), 0.85);
        assert_eq!(c.ecu(), 0.003);
        assert_eq!(c.lam(), 1.0);
        assert!(c.wc().is_none());
    }

    #[test]
    fn test_ksi_input_is_scaled() {
        let c = ConcreteMaterial::new(6.0).unwrap();
        assert_eq!(c.fc(), 6000.0);
        assert!((c.b1() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_strength() {
        assert!(ConcreteMaterial::new(0.0).is_err());
        assert!(ConcreteMaterial::new(-4000.0).is_err());
        assert!(ConcreteMaterial::new(f64::NAN).is_err());
    }

    #[test]
    fn test_lambda_bounds() {
        let c = ConcreteMaterial::new(4000.0).unwrap();
        assert!(c.with_lambda(0.75).is_ok());
        assert!(c.with_lambda(0.0).is_err());
        assert!(c.with_lambda(1.2).is_err());
    }

    #[test]
    fn test_negative_ultimate_strain_rejected() {
        let c = ConcreteMaterial::new(4000.0).unwrap();
        let err = c.with_ultimate_strain(-0.003).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_MATERIAL");
        assert_eq!(c.with_ultimate_strain(0.0035).unwrap().ecu(), 0.0035);
    }

    #[test]
    fn test_elastic_modulus_switches_with_unit_weight() {
        let c = ConcreteMaterial::new(4000.0).unwrap();
        // 57000·√4000 = 3,604,997 psi
        assert!((c.ec() - 3_604_997.0).abs() < 1.0);

        let light = c.with_unit_weight(110.0).unwrap();
        // 110^1.5·33·√4000 = 2,407,870 psi
        assert!((light.ec() - 2_407_870.0).abs() < 1.0);
        assert!(c.with_unit_weight(200.0).is_err());
    }

    #[test]
    fn test_modulus_of_rupture() {
        let c = ConcreteMaterial::new(4000.0).unwrap();
        // 7.5·√4000 = 474.3 psi
        assert!((c.modulus_of_rupture() - 474.34).abs() < 0.01);
    }

    #[test]
    fn test_display_name() {
        let c = ConcreteMaterial::new(5000.0).unwrap();
        assert_eq!(c.display_name(), "f'c = 5000 psi");
    }
}
