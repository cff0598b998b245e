//! # Reinforced Concrete Beam Check
//!
//! Flexural and one-way shear strength of a rectangular beam with a single
//! layer of tension steel, per ACI 318.
//!
//! ## Assumptions
//!
//! - Rectangular section, no compression steel
//! - Stress block depth from `As·fy = 0.85·f'c·bw·a` (tension steel yields)
//! - Tied member for the φ transition
//! - Vertical stirrups; the axial term in `Vc` uses `Ag = bw·h`
//!
//! ## Example
//!
//! ```rust
//! use rc_core::calculations::beam::{calculate, RcBeamInput};
//! use rc_core::settings::DesignSettings;
//!
//! let input = RcBeamInput {
//!     label: "B-1".to_string(),
//!     width_in: 12.0,
//!     height_in: 20.0,
//!     effective_depth_in: 17.5,
//!     tension_steel_in2: 2.37, // 3 #8
//!     fc_psi: 4000.0,
//!     fy_psi: 60000.0,
//!     lambda: 1.0,
//!     factored_shear_lb: 40_000.0,
//!     axial_load_lb: 0.0,
//!     significant_tension: false,
//! };
//!
//! let result = calculate(&input, &DesignSettings::default()).unwrap();
//! println!("phi*Mn = {:.1} k-ft", result.design_moment_kip_ft());
//! assert!(result.tension_controlled);
//! assert!(result.stirrups_required);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::flexure::{
    flexure_phi, neutral_axis_depth, nominal_moment, steel_stress, strain_at_depth, stress_block_depth,
};
use crate::equations::registry::{Equation, EquationTracker};
use crate::equations::shear::{
    concrete_shear_strength, concrete_shear_strength_with_axial, required_shear_reinforcement, shear_phi,
};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{ConcreteMaterial, RebarMaterial};
use crate::settings::DesignSettings;
use crate::units::{InLb, KipFt};

fn default_lambda() -> f64 {
    1.0
}

/// Input parameters for a singly reinforced rectangular beam.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "width_in": 12.0,
///   "height_in": 20.0,
///   "effective_depth_in": 17.5,
///   "tension_steel_in2": 2.37,
///   "fc_psi": 4000.0,
///   "fy_psi": 60000.0,
///   "factored_shear_lb": 40000.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RcBeamInput {
    /// User label for this beam (e.g., "B-1")
    pub label: String,

    /// Web width bw (in)
    pub width_in: f64,

    /// Overall height h (in)
    pub height_in: f64,

    /// Effective depth d to the tension steel centroid (in)
    pub effective_depth_in: f64,

    /// Tension steel area As (in²)
    pub tension_steel_in2: f64,

    /// Concrete strength f'c (psi, or ksi if below 10)
    pub fc_psi: f64,

    /// Steel yield strength fy (psi)
    pub fy_psi: f64,

    /// Lightweight concrete factor λ
    #[serde(default = "default_lambda")]
    pub lambda: f64,

    /// Factored shear Vu (lb)
    #[serde(default)]
    pub factored_shear_lb: f64,

    /// Factored axial force Nu (lb), compression positive
    #[serde(default)]
    pub axial_load_lb: f64,

    /// Treat axial tension as significant (ACI 22.5.7)
    #[serde(default)]
    pub significant_tension: bool,
}

impl RcBeamInput {
    /// Validate geometry and loads. Material values are checked when the
    /// materials are built.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.width_in > 0.0) {
            return Err(CalcError::invalid_input(
                "width_in",
                self.width_in.to_string(),
                "Width must be positive",
            ));
        }
        if !(self.height_in > 0.0) {
            return Err(CalcError::invalid_input(
                "height_in",
                self.height_in.to_string(),
                "Height must be positive",
            ));
        }
        if !(self.effective_depth_in > 0.0 && self.effective_depth_in < self.height_in) {
            return Err(CalcError::invalid_input(
                "effective_depth_in",
                self.effective_depth_in.to_string(),
                "Effective depth must be positive and less than the height",
            ));
        }
        if !(self.tension_steel_in2 > 0.0) {
            return Err(CalcError::invalid_input(
                "tension_steel_in2",
                self.tension_steel_in2.to_string(),
                "Tension steel area must be positive",
            ));
        }
        if self.tension_steel_in2 > self.gross_area_in2() {
            return Err(CalcError::invalid_input(
                "tension_steel_in2",
                self.tension_steel_in2.to_string(),
                "Steel area exceeds the gross section area",
            ));
        }
        if !(self.factored_shear_lb >= 0.0) {
            return Err(CalcError::invalid_input(
                "factored_shear_lb",
                self.factored_shear_lb.to_string(),
                "Factored shear cannot be negative",
            ));
        }
        if !self.axial_load_lb.is_finite() {
            return Err(CalcError::invalid_input(
                "axial_load_lb",
                self.axial_load_lb.to_string(),
                "Axial load must be finite",
            ));
        }
        Ok(())
    }

    /// Gross area Ag = bw·h (in²)
    pub fn gross_area_in2(&self) -> f64 {
        self.width_in * self.height_in
    }

    /// Tension reinforcement ratio ρ = As/(bw·d)
    pub fn steel_ratio(&self) -> f64 {
        self.tension_steel_in2 / (self.width_in * self.effective_depth_in)
    }
}

/// Results from the beam check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RcBeamResult {
    /// f'c used (psi), after ksi input is scaled
    pub fc_psi: f64,

    // === Flexure ===
    /// β1 used for the stress block
    pub beta1: f64,

    /// Equivalent stress block depth a (in)
    pub stress_block_depth_in: f64,

    /// Neutral axis depth c = a/β1 (in)
    pub neutral_axis_depth_in: f64,

    /// Strain in the tension steel, compression positive
    pub steel_strain: f64,

    /// Stress in the tension steel (psi), compression positive
    pub steel_stress_psi: f64,

    /// Whether the tension steel has reached fy
    pub steel_yields: bool,

    /// Net tensile strain εt (positive in tension)
    pub net_tensile_strain: f64,

    /// εt >= εy + 0.003
    pub tension_controlled: bool,

    /// Flexural strength reduction factor φ
    pub phi_flexure: f64,

    /// Nominal moment Mn (in-lb)
    pub nominal_moment_inlb: f64,

    /// Design moment φMn (in-lb)
    pub design_moment_inlb: f64,

    // === Shear ===
    /// Concrete shear strength Vc (lb)
    pub concrete_shear_lb: f64,

    /// Shear strength reduction factor φ
    pub phi_shear: f64,

    /// φVc (lb)
    pub design_concrete_shear_lb: f64,

    /// Required Av/s (in²/in); negative when concrete alone suffices
    pub required_av_over_s: f64,

    /// Vu > φVc
    pub stirrups_required: bool,

    /// Vu > φVc/2, the threshold for minimum stirrups (ACI 9.6.3.1)
    pub minimum_stirrups_required: bool,

    /// Equations applied, in first-use order
    pub equations_used: Vec<Equation>,
}

impl RcBeamResult {
    pub fn nominal_moment_kip_ft(&self) -> f64 {
        KipFt::from(InLb(self.nominal_moment_inlb)).value()
    }

    pub fn design_moment_kip_ft(&self) -> f64 {
        KipFt::from(InLb(self.design_moment_inlb)).value()
    }
}

/// Check a singly reinforced beam for flexure and shear.
///
/// # Errors
///
/// - `InvalidInput` / `InvalidMaterial` for bad geometry or materials
/// - `CalculationFailed` when the stress block reaches the steel
///   (`a >= d`), i.e. the section is over-reinforced
pub fn calculate(input: &RcBeamInput, settings: &DesignSettings) -> CalcResult<RcBeamResult> {
    input.validate()?;
    settings.validate()?;

    let concrete = ConcreteMaterial::new(input.fc_psi)?
        .with_lambda(input.lambda)?
        .with_ultimate_strain(settings.ultimate_strain)?;
    let rebar = RebarMaterial::new(input.fy_psi, settings.steel_modulus_psi)?;

    let mut tracker = EquationTracker::new();
    let label = input.label.as_str();
    let bw = input.width_in;
    let d = input.effective_depth_in;
    let as_t = input.tension_steel_in2;

    tracker.record_for_member(Equation::Beta1, "stress block factor", label);
    tracker.record_for_member(Equation::YieldStrain, "tension steel", label);

    // === Flexure ===
    let a = stress_block_depth(concrete.fc(), bw, as_t, rebar.fy());
    tracker.record_for_member(Equation::StressBlockDepth, "tension steel at fy", label);
    if a >= d {
        return Err(CalcError::calculation_failed(
            "RC beam",
            format!(
                "Stress block depth {:.3} in reaches the effective depth {:.3} in (over-reinforced)",
                a, d
            ),
        ));
    }

    let c = neutral_axis_depth(a, concrete.b1());
    tracker.record_for_member(Equation::NeutralAxisDepth, "c = a/b1", label);

    let steel_strain = strain_at_depth(d, c, concrete.ecu());
    tracker.record_for_member(Equation::StrainAtDepth, "tension steel", label);

    let fs = steel_stress(steel_strain, rebar.es(), rebar.fy());
    tracker.record_for_member(Equation::SteelStress, "tension steel", label);
    let steel_yields = fs.abs() >= rebar.fy();
    if !steel_yields {
        log::warn!(
            "{}: tension steel stress {:.0} psi is below fy; stress block assumes yield",
            label,
            fs
        );
    }

    let mn = nominal_moment(as_t, fs, d, a);
    tracker.record_for_member(Equation::NominalMoment, "Mn", label);

    let net_tensile_strain = -steel_strain;
    let phi_flexure = flexure_phi(net_tensile_strain, rebar.ey());
    tracker.record_for_member(Equation::FlexurePhi, "phi for flexure", label);
    let tension_controlled = net_tensile_strain >= rebar.ey() + 0.003;

    // === Shear ===
    let vc = if input.axial_load_lb != 0.0 {
        tracker.record_for_member(Equation::ConcreteShearStrengthAxial, "Vc with Nu", label);
        concrete_shear_strength_with_axial(
            concrete.fc(),
            bw,
            d,
            input.axial_load_lb,
            input.gross_area_in2(),
            concrete.lam(),
            input.significant_tension,
        )
    } else {
        tracker.record_for_member(Equation::ConcreteShearStrength, "Vc", label);
        concrete_shear_strength(concrete.fc(), bw, d, concrete.lam())
    };

    let phi_shear = shear_phi(settings.seismic);
    let design_vc = phi_shear * vc;
    let av_over_s = required_shear_reinforcement(input.factored_shear_lb, vc, rebar.fy(), d, settings.seismic);
    tracker.record_for_member(Equation::RequiredShearReinforcement, "Av/s", label);

    log::debug!(
        "{}: a = {:.3} in, c = {:.3} in, Mn = {:.0} in-lb, phi = {:.3}, Vc = {:.0} lb",
        label,
        a,
        c,
        mn,
        phi_flexure,
        vc
    );

    Ok(RcBeamResult {
        fc_psi: concrete.fc(),
        beta1: concrete.b1(),
        stress_block_depth_in: a,
        neutral_axis_depth_in: c,
        steel_strain,
        steel_stress_psi: fs,
        steel_yields,
        net_tensile_strain,
        tension_controlled,
        phi_flexure,
        nominal_moment_inlb: mn,
        design_moment_inlb: phi_flexure * mn,
        concrete_shear_lb: vc,
        phi_shear,
        design_concrete_shear_lb: design_vc,
        required_av_over_s: av_over_s,
        stirrups_required: input.factored_shear_lb > design_vc,
        minimum_stirrups_required: input.factored_shear_lb > 0.5 * design_vc,
        equations_used: tracker.unique_equations(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_beam() -> RcBeamInput {
        RcBeamInput {
            label: "B-1".to_string(),
            width_in: 12.0,
            height_in: 20.0,
            effective_depth_in: 17.5,
            tension_steel_in2: 2.37,
            fc_psi: 4000.0,
            fy_psi: 60000.0,
            lambda: 1.0,
            factored_shear_lb: 40_000.0,
            axial_load_lb: 0.0,
            significant_tension: false,
        }
    }

    #[test]
    fn test_flexure() {
        let result = calculate(&test_beam(), &DesignSettings::default()).unwrap();

        // a = 60,000·2.37/(0.85·4000·12) = 3.485 in
        assert!((result.stress_block_depth_in - 3.4853).abs() < 1e-4);
        assert!((result.neutral_axis_depth_in - 4.1003).abs() < 1e-4);
        assert!((result.steel_strain + 0.009804).abs() < 1e-6);
        assert_eq!(result.steel_stress_psi, -60000.0);
        assert!(result.steel_yields);

        // Mn = 2.37·60,000·(17.5 − 3.485/2) = 2,240,696 in-lb
        assert!((result.nominal_moment_inlb - 2_240_695.6).abs() < 0.5);
        assert!((result.nominal_moment_kip_ft() - 186.72).abs() < 0.01);
    }

    #[test]
    fn test_tension_controlled_phi() {
        let result = calculate(&test_beam(), &DesignSettings::default()).unwrap();
        assert!(result.tension_controlled);
        assert_eq!(result.phi_flexure, 0.90);
        assert!((result.design_moment_inlb - 0.9 * result.nominal_moment_inlb).abs() < 1e-6);
    }

    #[test]
    fn test_heavily_reinforced_transition_phi() {
        let mut beam = test_beam();
        beam.tension_steel_in2 = 6.0;
        let result = calculate(&beam, &DesignSettings::default()).unwrap();
        assert!(!result.tension_controlled);
        assert!(result.phi_flexure < 0.90 && result.phi_flexure >= 0.65);
    }

    #[test]
    fn test_shear() {
        let result = calculate(&test_beam(), &DesignSettings::default()).unwrap();

        // Vc = 2·√4000·12·17.5 = 26,563 lb
        assert!((result.concrete_shear_lb - 26_563.13).abs() < 0.01);
        assert_eq!(result.phi_shear, 0.75);
        // (40,000 − 19,922.3)/(0.75·60,000·17.5) = 0.02550 in²/in
        assert!((result.required_av_over_s - 0.025495).abs() < 1e-6);
        assert!(result.stirrups_required);
        assert!(result.minimum_stirrups_required);
    }

    #[test]
    fn test_shear_not_required() {
        let mut beam = test_beam();
        beam.factored_shear_lb = 5_000.0;
        let result = calculate(&beam, &DesignSettings::default()).unwrap();
        assert!(!result.stirrups_required);
        assert!(!result.minimum_stirrups_required);
        assert!(result.required_av_over_s < 0.0);
    }

    #[test]
    fn test_axial_compression_raises_vc() {
        let mut beam = test_beam();
        beam.axial_load_lb = 50_000.0;
        let result = calculate(&beam, &DesignSettings::default()).unwrap();
        // (1 + 50,000/(2000·240))·26,563 = 29,330 lb
        assert!((result.concrete_shear_lb - 29_330.13).abs() < 0.01);
        assert!(result.equations_used.contains(&Equation::ConcreteShearStrengthAxial));
        assert!(!result.equations_used.contains(&Equation::ConcreteShearStrength));
    }

    #[test]
    fn test_seismic_phi() {
        let settings = DesignSettings {
            seismic: true,
            ..Default::default()
        };
        let result = calculate(&test_beam(), &settings).unwrap();
        assert_eq!(result.phi_shear, 0.60);
    }

    #[test]
    fn test_over_reinforced_rejected() {
        let mut beam = test_beam();
        beam.tension_steel_in2 = 20.0;
        let err = calculate(&beam, &DesignSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_invalid_inputs() {
        let mut beam = test_beam();
        beam.effective_depth_in = 20.0;
        assert!(calculate(&beam, &DesignSettings::default()).is_err());

        let mut beam = test_beam();
        beam.fc_psi = -4000.0;
        assert_eq!(
            calculate(&beam, &DesignSettings::default()).unwrap_err().error_code(),
            "INVALID_MATERIAL"
        );

        let mut beam = test_beam();
        beam.lambda = 1.5;
        assert!(calculate(&beam, &DesignSettings::default()).is_err());

        let mut beam = test_beam();
        beam.factored_shear_lb = -1.0;
        assert!(calculate(&beam, &DesignSettings::default()).is_err());
    }

    #[test]
    fn test_ksi_input() {
        let mut beam = test_beam();
        beam.fc_psi = 4.0;
        let ksi = calculate(&beam, &DesignSettings::default()).unwrap();
        let psi = calculate(&test_beam(), &DesignSettings::default()).unwrap();
        assert!((ksi.nominal_moment_inlb - psi.nominal_moment_inlb).abs() < 1e-6);
        assert_eq!(ksi.fc_psi, 4000.0);
        assert_eq!(psi.fc_psi, 4000.0);
    }

    #[test]
    fn test_serialization_defaults() {
        let json = r#"{
            "label": "B-2",
            "width_in": 12.0,
            "height_in": 20.0,
            "effective_depth_in": 17.5,
            "tension_steel_in2": 2.37,
            "fc_psi": 4000.0,
            "fy_psi": 60000.0
        }"#;
        let input: RcBeamInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.lambda, 1.0);
        assert_eq!(input.factored_shear_lb, 0.0);
        assert!(!input.significant_tension);
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&test_beam(), &DesignSettings::default()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("nominal_moment_inlb"));
        assert!(json.contains("StressBlockDepth"));

        let roundtrip: RcBeamResult = serde_json::from_str(&json).unwrap();
        assert!((roundtrip.nominal_moment_inlb - result.nominal_moment_inlb).abs() < 1e-6);
    }
}
