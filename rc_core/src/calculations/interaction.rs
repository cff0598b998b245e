//! # P-M Interaction Diagram
//!
//! Traces the nominal axial-moment interaction curve of a rectangular
//! section by sweeping the neutral axis depth `c` and applying strain
//! compatibility at each step.
//!
//! ## Sweep
//!
//! ```text
//! c = h/n, ..., h/β1, ∞
//!     │         │      └─ Po
//!     │         └─ stress block covers the full depth
//!     └─ near pure tension
//! ```
//!
//! `n` comes from the input, falling back to [`DesignSettings::sweep_steps`].
//! The final `c = ∞` point is the uniform-strain state.
//!
//! ## Example
//!
//! ```rust
//! use rc_core::calculations::interaction::{calculate, InteractionInput, Reinforcement};
//! use rc_core::materials::BarSize;
//! use rc_core::settings::DesignSettings;
//!
//! let input = InteractionInput {
//!     label: "C-1".to_string(),
//!     width_in: 16.0,
//!     height_in: 16.0,
//!     fc_psi: 4000.0,
//!     fy_psi: 60000.0,
//!     reinforcement: Reinforcement::Uniform {
//!         layer_count: 3,
//!         bar: BarSize::No9,
//!         bars_per_layer: 3,
//!         clear_cover_in: 1.5,
//!     },
//!     steps: Some(20),
//! };
//!
//! let result = calculate(&input, &DesignSettings::default()).unwrap();
//! assert_eq!(result.points.len(), 21);
//! println!("Po = {:.0} kips", result.maximum_compression_lb / 1000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::flexure::flexure_phi;
use crate::equations::registry::{Equation, EquationTracker};
use crate::equations::strain_compat::{
    c_from_z, layer_states, layer_strain, neutral_axis_serde, pure_tension_capacity, z_from_c, LayerState,
};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{BarSize, ConcreteMaterial, RebarMaterial};
use crate::section::{RcSection, ReinforcementLayer};
use crate::settings::DesignSettings;
use crate::units::{InLb, KipFt, Kips, Pounds};

/// Ductility ratio at the balanced condition
pub const BALANCED_Z: f64 = -1.0;

/// How the reinforcement is described.
///
/// ## JSON Examples
///
/// ```json
/// { "layout": "uniform", "layer_count": 3, "bar": "#9", "bars_per_layer": 3, "clear_cover_in": 1.5 }
/// ```
///
/// ```json
/// { "layout": "explicit", "layers": [ { "distance_in": 2.5, "area_in2": 2.0 }, { "distance_in": 17.5, "area_in2": 2.0 } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum Reinforcement {
    /// Evenly spaced layers of identical bars
    Uniform {
        layer_count: usize,
        bar: BarSize,
        bars_per_layer: u32,
        clear_cover_in: f64,
    },
    /// Layers given directly, ordered from the compression face
    Explicit { layers: Vec<ReinforcementLayer> },
}

/// Input parameters for an interaction diagram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionInput {
    /// User label (e.g., "C-1")
    pub label: String,

    /// Section width bw (in)
    pub width_in: f64,

    /// Section height h (in), measured in the direction of bending
    pub height_in: f64,

    /// Concrete strength f'c (psi, or ksi if below 10)
    pub fc_psi: f64,

    /// Steel yield strength fy (psi)
    pub fy_psi: f64,

    pub reinforcement: Reinforcement,

    /// Number of finite `c` values in the sweep
    #[serde(default)]
    pub steps: Option<usize>,
}

impl InteractionInput {
    /// Build the validated section this input describes
    pub fn section(&self) -> CalcResult<RcSection> {
        match &self.reinforcement {
            Reinforcement::Uniform {
                layer_count,
                bar,
                bars_per_layer,
                clear_cover_in,
            } => RcSection::symmetric(
                self.width_in,
                self.height_in,
                *layer_count,
                *bar,
                *clear_cover_in,
                *bars_per_layer,
            ),
            Reinforcement::Explicit { layers } => RcSection::new(self.width_in, self.height_in, layers.clone()),
        }
    }

    /// Sweep resolution: the input's own value, else the settings default
    pub fn sweep_steps(&self, settings: &DesignSettings) -> usize {
        self.steps.unwrap_or(settings.sweep_steps)
    }
}

/// A point on the diagram with its strength reduction factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionPoint {
    /// Neutral axis depth (in); `null` in JSON for uniform compression
    #[serde(with = "neutral_axis_serde", default = "neutral_axis_serde::uniform_compression")]
    pub c_in: f64,

    /// Ductility ratio at the extreme tension layer
    pub z: f64,

    /// Nominal axial force Pn (lb), compression positive
    pub axial_lb: f64,

    /// Nominal moment Mn about mid-depth (in-lb)
    pub moment_inlb: f64,

    /// φ from the net tensile strain in the extreme tension layer
    pub phi: f64,
}

impl InteractionPoint {
    pub fn axial_kips(&self) -> Kips {
        Pounds(self.axial_lb).into()
    }

    pub fn moment_kip_ft(&self) -> KipFt {
        InLb(self.moment_inlb).into()
    }

    /// φPn (lb)
    pub fn design_axial_lb(&self) -> f64 {
        self.phi * self.axial_lb
    }

    /// φMn (in-lb)
    pub fn design_moment_inlb(&self) -> f64 {
        self.phi * self.moment_inlb
    }
}

/// Results of an interaction sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionResult {
    pub label: String,

    /// f'c used (psi), after ksi input is scaled
    pub fc_psi: f64,

    /// β1 used for the stress block
    pub beta1: f64,

    /// Gross area Ag (in²)
    pub gross_area_in2: f64,

    /// Total steel area ΣAs (in²)
    pub steel_area_in2: f64,

    /// Reinforcement layers used, ordered from the compression face
    pub layers: Vec<ReinforcementLayer>,

    /// Diagram points in sweep order, ending with the uniform compression point
    pub points: Vec<InteractionPoint>,

    /// Po = 0.85·f'c·(Ag − ΣAs) + fy·ΣAs (lb)
    pub maximum_compression_lb: f64,

    /// −fy·ΣAs (lb)
    pub pure_tension_lb: f64,

    /// Point where the extreme tension layer reaches −εy
    pub balanced: InteractionPoint,

    /// Layer breakdown at the balanced point
    pub balanced_layers: Vec<LayerState>,

    /// Equations applied, in first-use order
    pub equations_used: Vec<Equation>,
}

impl InteractionResult {
    /// Point with the largest nominal moment
    pub fn max_moment_point(&self) -> Option<&InteractionPoint> {
        self.points
            .iter()
            .max_by(|a, b| a.moment_inlb.total_cmp(&b.moment_inlb))
    }

    /// `(moment, axial)` pairs for plotting
    pub fn curve(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.moment_inlb, p.axial_lb)).collect()
    }
}

/// Linearly spaced neutral axis depths from `h/steps` to `h/β1`
pub fn sweep_depths(h: f64, b1: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![h / b1];
    }
    let start = h / steps as f64;
    let end = h / b1;
    let increment = (end - start) / (steps - 1) as f64;
    (0..steps)
        .map(|i| if i == steps - 1 { end } else { start + increment * i as f64 })
        .collect()
}

fn interaction_point(
    c: f64,
    section: &RcSection,
    concrete: &ConcreteMaterial,
    rebar: &RebarMaterial,
) -> InteractionPoint {
    let dt = section.extreme_tension_depth();
    let pm = section.pm_point(c, concrete, rebar);
    let net_tensile_strain = -layer_strain(dt, c, concrete);
    InteractionPoint {
        c_in: c,
        z: z_from_c(c, dt, concrete, rebar),
        axial_lb: pm.axial,
        moment_inlb: pm.moment,
        phi: flexure_phi(net_tensile_strain, rebar.ey()),
    }
}

/// Compute the P-M interaction diagram.
///
/// # Errors
///
/// - `InvalidInput` / `InvalidGeometry` for bad dimensions or layers
/// - `InvalidMaterial` for non-positive strengths
/// - `InvalidInput` if the sweep has fewer than 2 steps
pub fn calculate(input: &InteractionInput, settings: &DesignSettings) -> CalcResult<InteractionResult> {
    settings.validate()?;

    let steps = input.sweep_steps(settings);
    if steps < 2 {
        return Err(CalcError::invalid_input(
            "steps",
            steps.to_string(),
            "Sweep needs at least 2 steps",
        ));
    }

    let concrete = ConcreteMaterial::new(input.fc_psi)?.with_ultimate_strain(settings.ultimate_strain)?;
    let rebar = RebarMaterial::new(input.fy_psi, settings.steel_modulus_psi)?;
    let section = input.section()?;

    let label = input.label.as_str();
    let mut tracker = EquationTracker::new();
    tracker.record_for_member(Equation::Beta1, "stress block factor", label);
    tracker.record_for_member(Equation::YieldStrain, "reinforcement", label);
    if matches!(input.reinforcement, Reinforcement::Uniform { .. }) {
        tracker.record_for_member(Equation::LayerDistances, "layer placement", label);
    }

    log::debug!(
        "{}: {}x{} in, f'c = {} psi, fy = {} psi, {} layers, {} steps",
        label,
        section.width(),
        section.height(),
        concrete.fc(),
        rebar.fy(),
        section.layers().len(),
        steps
    );

    let mut points: Vec<InteractionPoint> = sweep_depths(section.height(), concrete.b1(), steps)
        .into_iter()
        .map(|c| interaction_point(c, &section, &concrete, &rebar))
        .collect();
    points.push(interaction_point(f64::INFINITY, &section, &concrete, &rebar));
    tracker.record_for_member(Equation::StrainAtDepth, "layer strains", label);
    tracker.record_for_member(Equation::SteelStress, "layer stresses", label);
    tracker.record_for_member(Equation::LayerForce, "layer forces", label);
    tracker.record_for_member(Equation::PmPoint, "sweep", label);
    tracker.record_for_member(Equation::DuctilityRatio, "extreme tension layer", label);
    tracker.record_for_member(Equation::FlexurePhi, "phi per point", label);

    let maximum_compression_lb = section.maximum_compression(&concrete, &rebar);
    tracker.record_for_member(Equation::MaximumCompression, "Po", label);
    let pure_tension_lb = pure_tension_capacity(section.layers(), &rebar);
    tracker.record_for_member(Equation::PureTension, "Pnt", label);

    let dt = section.extreme_tension_depth();
    let cb = c_from_z(BALANCED_Z, dt, &concrete, &rebar);
    let balanced = interaction_point(cb, &section, &concrete, &rebar);
    let balanced_layers = layer_states(section.layers(), section.height(), cb, &concrete, &rebar);

    log::debug!(
        "{}: Po = {:.0} lb, Pnt = {:.0} lb, balanced c = {:.3} in (P = {:.0} lb, M = {:.0} in-lb)",
        label,
        maximum_compression_lb,
        pure_tension_lb,
        cb,
        balanced.axial_lb,
        balanced.moment_inlb
    );

    Ok(InteractionResult {
        label: input.label.clone(),
        fc_psi: concrete.fc(),
        beta1: concrete.b1(),
        gross_area_in2: section.gross_area(),
        steel_area_in2: section.steel_area(),
        layers: section.layers().to_vec(),
        points,
        maximum_compression_lb,
        pure_tension_lb,
        balanced,
        balanced_layers,
        equations_used: tracker.unique_equations(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_column() -> InteractionInput {
        InteractionInput {
            label: "C-1".to_string(),
            width_in: 16.0,
            height_in: 16.0,
            fc_psi: 4000.0,
            fy_psi: 60000.0,
            reinforcement: Reinforcement::Uniform {
                layer_count: 3,
                bar: BarSize::No9,
                bars_per_layer: 3,
                clear_cover_in: 1.5,
            },
            steps: Some(30),
        }
    }

    #[test]
    fn test_sweep_depths() {
        let depths = sweep_depths(17.0, 0.85, 5);
        assert_eq!(depths.len(), 5);
        assert!((depths[0] - 3.4).abs() < 1e-12);
        assert!((depths[4] - 20.0).abs() < 1e-12);
        for pair in depths.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_point_count_and_terminal_point() {
        let result = calculate(&test_column(), &DesignSettings::default()).unwrap();
        assert_eq!(result.points.len(), 31);

        let last = result.points.last().unwrap();
        assert_eq!(last.c_in, f64::INFINITY);
        assert!((last.axial_lb - result.maximum_compression_lb).abs() < 1e-6);
        assert_eq!(last.phi, 0.65);
    }

    #[test]
    fn test_capacities() {
        let result = calculate(&test_column(), &DesignSettings::default()).unwrap();
        assert!((result.steel_area_in2 - 9.0).abs() < 1e-12);
        assert!((result.maximum_compression_lb - 1_379_800.0).abs() < 1e-6);
        assert!((result.pure_tension_lb + 540_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_axial_increases_with_c() {
        let result = calculate(&test_column(), &DesignSettings::default()).unwrap();
        for pair in result.points.windows(2) {
            assert!(pair[1].axial_lb > pair[0].axial_lb);
        }
    }

    #[test]
    fn test_balanced_point() {
        let result = calculate(&test_column(), &DesignSettings::default()).unwrap();
        assert!((result.balanced.z + 1.0).abs() < 1e-12);
        assert!((result.balanced.phi - 0.65).abs() < 1e-9);
        assert_eq!(result.balanced_layers.len(), 3);

        // Balanced moment is near the peak of the curve
        let peak = result.max_moment_point().unwrap();
        assert!(result.balanced.moment_inlb > 0.9 * peak.moment_inlb);
    }

    #[test]
    fn test_steps_fallback_to_settings() {
        let mut input = test_column();
        input.steps = None;
        let settings = DesignSettings {
            sweep_steps: 12,
            ..Default::default()
        };
        let result = calculate(&input, &settings).unwrap();
        assert_eq!(result.points.len(), 13);
    }

    #[test]
    fn test_too_few_steps() {
        let mut input = test_column();
        input.steps = Some(1);
        let err = calculate(&input, &DesignSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_explicit_layers() {
        let input = InteractionInput {
            label: "W-1".to_string(),
            width_in: 12.0,
            height_in: 20.0,
            fc_psi: 4.0,
            fy_psi: 60000.0,
            reinforcement: Reinforcement::Explicit {
                layers: vec![ReinforcementLayer::new(2.5, 2.0), ReinforcementLayer::new(17.5, 2.0)],
            },
            steps: Some(10),
        };
        let result = calculate(&input, &DesignSettings::default()).unwrap();
        assert_eq!(result.layers.len(), 2);
        assert_eq!(result.fc_psi, 4000.0);
        assert!((result.beta1 - 0.85).abs() < 1e-12);
        assert!(!result.equations_used.contains(&Equation::LayerDistances));
        assert!(result.equations_used.contains(&Equation::PmPoint));
    }

    #[test]
    fn test_invalid_section_rejected() {
        let mut input = test_column();
        input.reinforcement = Reinforcement::Explicit {
            layers: vec![ReinforcementLayer::new(10.0, 1.0), ReinforcementLayer::new(5.0, 1.0)],
        };
        let err = calculate(&input, &DesignSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_input_json() {
        let json = r##"{
            "label": "C-2",
            "width_in": 16.0,
            "height_in": 16.0,
            "fc_psi": 5000.0,
            "fy_psi": 60000.0,
            "reinforcement": {
                "layout": "uniform",
                "layer_count": 4,
                "bar": "#8",
                "bars_per_layer": 2,
                "clear_cover_in": 1.5
            }
        }"##;
        let input: InteractionInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.steps, None);
        assert!(matches!(input.reinforcement, Reinforcement::Uniform { layer_count: 4, .. }));
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&test_column(), &DesignSettings::default()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"c_in\":null"));

        let roundtrip: InteractionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.points.len(), result.points.len());
        assert_eq!(roundtrip.points.last().map(|p| p.c_in), Some(f64::INFINITY));
    }
}
