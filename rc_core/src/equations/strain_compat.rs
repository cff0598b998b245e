//! # Strain Compatibility
//!
//! P-M interaction points for a rectangular section with any number of
//! reinforcement layers, for a trial neutral axis depth `c`.
//!
//! ```text
//!          strain                     forces
//!    εcu ──┐                    ┌──── Cc = 0.85·f'c·bw·a
//!          │\                   │
//!   ● d₁   │ \ ε₁ > 0           │ ● F₁ = (fs₁ − 0.85·f'c)·A₁
//!          │  \                 │
//!   ───────┼───\─── c ──────────┤
//!          │    \               │
//!   ● d₂   │     \ ε₂ < 0       │ ● F₂ = fs₂·A₂
//! ```
//!
//! ## Sign Convention
//!
//! Compression is positive for strain, stress, force and axial load.
//! Moments are taken about mid-depth `h/2`; a compressive force above
//! mid-depth produces a positive moment.
//!
//! ## Degenerate `c`
//!
//! - `c == 0`: strains are 0 and no stress block forms.
//! - `c == ∞`: uniform strain `εcu` over the full depth (pure compression).
//!
//! ## References
//!
//! - ACI 318-19 Section 22.2 (design assumptions)
//! - ACI 318-19 Section 22.4.2 (maximum axial strength)

use serde::{Deserialize, Serialize};

use crate::equations::flexure::{steel_stress, strain_at_depth};
use crate::materials::{ConcreteMaterial, RebarMaterial};
use crate::section::ReinforcementLayer;
use crate::units::{InLb, KipFt, Kips, Pounds};

/// Ductility ratio reported for `c == 0`, strain far past rupture
pub const RUPTURE_Z: f64 = -1000.0;

/// Serde adapter for neutral axis depths: `∞` (uniform compression) is
/// written as `null`, since JSON has no infinity.
pub(crate) mod neutral_axis_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(c: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if c.is_finite() {
            serializer.serialize_some(c)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }

    pub fn uniform_compression() -> f64 {
        f64::INFINITY
    }
}

/// One point on the P-M interaction diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PmPoint {
    /// Neutral axis depth from the compression face (in); `null` in JSON
    /// for the uniform compression state
    #[serde(with = "neutral_axis_serde", default = "neutral_axis_serde::uniform_compression")]
    pub c: f64,
    /// Nominal moment about mid-depth (in-lb)
    pub moment: f64,
    /// Nominal axial force, compression positive (lb)
    pub axial: f64,
}

impl PmPoint {
    pub fn axial_kips(&self) -> Kips {
        Pounds(self.axial).into()
    }

    pub fn moment_kip_ft(&self) -> KipFt {
        InLb(self.moment).into()
    }
}

impl From<PmPoint> for (f64, f64) {
    /// `(moment, axial)`, the usual plotting order
    fn from(point: PmPoint) -> Self {
        (point.moment, point.axial)
    }
}

/// Strain, stress and force in one layer at a given `c`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerState {
    pub distance: f64,
    pub strain: f64,
    pub stress: f64,
    pub force: f64,
    pub moment: f64,
}

/// Strain at a layer: `ε = εcu·(c − d)/c`
#[inline]
pub fn layer_strain(distance: f64, c: f64, concrete: &ConcreteMaterial) -> f64 {
    strain_at_depth(distance, c, concrete.ecu())
}

/// Steel stress at a layer, elastic-perfectly-plastic
#[inline]
pub fn layer_stress(distance: f64, c: f64, concrete: &ConcreteMaterial, rebar: &RebarMaterial) -> f64 {
    steel_stress(layer_strain(distance, c, concrete), rebar.es(), rebar.fy())
}

/// Net force in a layer
///
/// # Formula
/// ```text
/// F = (fs − 0.85·f'c)·As    d <= β1·c   (bar displaces block concrete)
/// F = fs·As                 otherwise
/// ```
///
/// Since `β1·c <= c`, a layer at the neutral axis has `fs = 0` and lies
/// outside the block, so the force passes through zero continuously.
///
/// # Example
/// ```rust
/// use rc_core::equations::strain_compat::layer_force;
/// use rc_core::materials::{ConcreteMaterial, RebarMaterial};
///
/// let concrete = ConcreteMaterial::new(4000.0).unwrap();
/// let rebar = RebarMaterial::grade_60();
///
/// // Yielded in tension
/// let f = layer_force(2.0, 17.5, 8.0, &concrete, &rebar);
/// assert_eq!(f, -120_000.0);
///
/// // At the neutral axis
/// assert_eq!(layer_force(2.0, 8.0, 8.0, &concrete, &rebar), 0.0);
/// ```
pub fn layer_force(
    area: f64,
    distance: f64,
    c: f64,
    concrete: &ConcreteMaterial,
    rebar: &RebarMaterial,
) -> f64 {
    let fs = layer_stress(distance, c, concrete, rebar);
    if c > 0.0 && distance <= c * concrete.b1() {
        (fs - concrete.block_stress()) * area
    } else {
        fs * area
    }
}

/// Σ layer forces (lb), in layer order
pub fn sum_layer_forces(
    layers: &[ReinforcementLayer],
    c: f64,
    concrete: &ConcreteMaterial,
    rebar: &RebarMaterial,
) -> f64 {
    layers
        .iter()
        .map(|l| layer_force(l.area_in2, l.distance_in, c, concrete, rebar))
        .sum()
}

/// Σ layer moments about mid-depth (in-lb): `Σ F·(h/2 − d)`
pub fn sum_layer_moments(
    layers: &[ReinforcementLayer],
    h: f64,
    c: f64,
    concrete: &ConcreteMaterial,
    rebar: &RebarMaterial,
) -> f64 {
    layers
        .iter()
        .map(|l| layer_force(l.area_in2, l.distance_in, c, concrete, rebar) * (h / 2.0 - l.distance_in))
        .sum()
}

/// Nominal (P, M) for a trial neutral axis depth
///
/// ```text
/// a  = min(β1·c, h)
/// Cc = 0.85·f'c·bw·a
/// Mc = Cc·(h − a)/2
/// P  = Cc + ΣF
/// M  = Mc + ΣF·(h/2 − d)
/// ```
///
/// # Example
/// ```rust
/// use rc_core::equations::strain_compat::pm_point;
/// use rc_core::materials::{ConcreteMaterial, RebarMaterial};
/// use rc_core::section::ReinforcementLayer;
///
/// let concrete = ConcreteMaterial::new(4000.0).unwrap();
/// let rebar = RebarMaterial::grade_60();
/// let layers = [ReinforcementLayer::new(2.5, 2.0), ReinforcementLayer::new(17.5, 2.0)];
///
/// let point = pm_point(8.0, 12.0, 20.0, &layers, &concrete, &rebar);
/// assert!((point.axial - 270_265.0).abs() < 0.01);
/// ```
pub fn pm_point(
    c: f64,
    bw: f64,
    h: f64,
    layers: &[ReinforcementLayer],
    concrete: &ConcreteMaterial,
    rebar: &RebarMaterial,
) -> PmPoint {
    let a = if c > 0.0 { (c * concrete.b1()).min(h) } else { 0.0 };
    let cc = concrete.block_stress() * bw * a;
    let mc = cc * (h - a) / 2.0;

    let (steel_force, steel_moment) = layers.iter().fold((0.0, 0.0), |(p, m), l| {
        let f = layer_force(l.area_in2, l.distance_in, c, concrete, rebar);
        (p + f, m + f * (h / 2.0 - l.distance_in))
    });

    let point = PmPoint {
        c,
        moment: mc + steel_moment,
        axial: cc + steel_force,
    };
    log::trace!(
        "c = {:.4} in: a = {:.4} in, Cc = {:.1} lb, P = {:.1} lb, M = {:.1} in-lb",
        c,
        a,
        cc,
        point.axial,
        point.moment
    );
    point
}

/// Per-layer breakdown at `c`, in layer order
pub fn layer_states(
    layers: &[ReinforcementLayer],
    h: f64,
    c: f64,
    concrete: &ConcreteMaterial,
    rebar: &RebarMaterial,
) -> Vec<LayerState> {
    layers
        .iter()
        .map(|l| {
            let force = layer_force(l.area_in2, l.distance_in, c, concrete, rebar);
            LayerState {
                distance: l.distance_in,
                strain: layer_strain(l.distance_in, c, concrete),
                stress: layer_stress(l.distance_in, c, concrete, rebar),
                force,
                moment: force * (h / 2.0 - l.distance_in),
            }
        })
        .collect()
}

/// Ductility ratio Z: strain at depth `d` in multiples of `εy`
///
/// # Formula
/// `Z = εcu·(c − d)/(c·εy)`
///
/// Negative in tension; `Z = −1` is the balanced condition when `d` is the
/// extreme tension layer. Returns [`RUPTURE_Z`] for `c == 0`.
pub fn z_from_c(c: f64, d: f64, concrete: &ConcreteMaterial, rebar: &RebarMaterial) -> f64 {
    if c == 0.0 {
        return RUPTURE_Z;
    }
    layer_strain(d, c, concrete) / rebar.ey()
}

/// Neutral axis depth giving ductility ratio `z` at depth `d`
///
/// # Formula
/// `c = εcu·d/(εcu − Z·εy)`
///
/// Returns `f64::INFINITY` when `εcu − Z·εy <= 0`: no finite `c` produces a
/// strain at or beyond `εcu` below the compression face.
///
/// # Example
/// ```rust
/// use rc_core::equations::strain_compat::c_from_z;
/// use rc_core::materials::{ConcreteMaterial, RebarMaterial};
///
/// let concrete = ConcreteMaterial::new(4000.0).unwrap();
/// let rebar = RebarMaterial::grade_60();
///
/// // Balanced: 0.003·20/(0.003 + 0.00207) = 11.84 in
/// let cb = c_from_z(-1.0, 20.0, &concrete, &rebar);
/// assert!((cb - 11.837).abs() < 0.001);
/// ```
pub fn c_from_z(z: f64, d: f64, concrete: &ConcreteMaterial, rebar: &RebarMaterial) -> f64 {
    let ecu = concrete.ecu();
    let denom = ecu - z * rebar.ey();
    if denom <= 0.0 {
        return f64::INFINITY;
    }
    ecu * d / denom
}

/// Upper bound on axial capacity
///
/// # Formula (ACI 22.4.2.2)
/// `Po = 0.85·f'c·(Ag − ΣAs) + fy·ΣAs`
///
/// Equal to `pm_point(∞)` for a solid section when `εcu·Es >= fy`.
pub fn maximum_compression(
    ag: f64,
    layers: &[ReinforcementLayer],
    concrete: &ConcreteMaterial,
    rebar: &RebarMaterial,
) -> f64 {
    let ast: f64 = layers.iter().map(|l| l.area_in2).sum();
    concrete.block_stress() * (ag - ast) + rebar.fy() * ast
}

/// Axial capacity with every layer yielded in tension, `−fy·ΣAs` (ACI 22.4.3)
pub fn pure_tension_capacity(layers: &[ReinforcementLayer], rebar: &RebarMaterial) -> f64 {
    -rebar.fy() * layers.iter().map(|l| l.area_in2).sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn materials() -> (ConcreteMaterial, RebarMaterial) {
        (ConcreteMaterial::new(4000.0).unwrap(), RebarMaterial::grade_60())
    }

    fn column_layers() -> Vec<ReinforcementLayer> {
        // 16x16, 3 layers of 3 #9
        vec![
            ReinforcementLayer::new(2.064, 3.0),
            ReinforcementLayer::new(8.0, 3.0),
            ReinforcementLayer::new(13.936, 3.0),
        ]
    }

    #[test]
    fn test_layer_strain_endpoints() {
        let (concrete, _) = materials();
        assert_eq!(layer_strain(0.0, 6.0, &concrete), 0.003);
        assert_eq!(layer_strain(6.0, 6.0, &concrete), 0.0);
        assert_eq!(layer_strain(6.0, 0.0, &concrete), 0.0);
        assert_eq!(layer_strain(6.0, f64::INFINITY, &concrete), 0.003);
    }

    #[test]
    fn test_layer_stress_saturates() {
        let (concrete, rebar) = materials();
        // d = 14, c = 6 → ε = −0.004
        assert_eq!(layer_stress(14.0, 6.0, &concrete, &rebar), -60000.0);
        assert_eq!(layer_stress(1.0, 6.0, &concrete, &rebar), 60000.0);
        // d = 5, c = 6 → ε = 0.0005 → 14,500 psi
        assert!((layer_stress(5.0, 6.0, &concrete, &rebar) - 14_500.0).abs() < 1e-6);
    }

    #[test]
    fn test_layer_force_continuous_at_neutral_axis() {
        let (concrete, rebar) = materials();
        let c = 10.0;
        let eps = 1e-9;
        let above = layer_force(1.0, c - eps, c, &concrete, &rebar);
        let at = layer_force(1.0, c, c, &concrete, &rebar);
        let below = layer_force(1.0, c + eps, c, &concrete, &rebar);
        assert_eq!(at, 0.0);
        assert!(above.abs() < 1e-3);
        assert!(below.abs() < 1e-3);
    }

    #[test]
    fn test_layer_force_subtracts_displaced_concrete() {
        let (concrete, rebar) = materials();
        // d = 2 inside block (β1·c = 8.5), yielded in compression
        let f = layer_force(1.0, 2.0, 10.0, &concrete, &rebar);
        assert!((f - (60000.0 - 3400.0)).abs() < 1e-9);
    }

    #[test]
    fn test_pm_point_hand_check() {
        let (concrete, rebar) = materials();
        let layers = [ReinforcementLayer::new(2.5, 2.0), ReinforcementLayer::new(17.5, 2.0)];
        let p = pm_point(8.0, 12.0, 20.0, &layers, &concrete, &rebar);
        // Cc = 3400·12·6.8 = 277,440; Mc = 277,440·6.6 = 1,831,104
        // F1 = (59,812.5 − 3,400)·2 = 112,825; F2 = −120,000
        assert!((p.axial - 270_265.0).abs() < 0.01);
        assert!((p.moment - 3_577_291.5).abs() < 0.01);
        assert_eq!(p.c, 8.0);
    }

    #[test]
    fn test_sums_match_pm_point_steel_terms() {
        let (concrete, rebar) = materials();
        let layers = column_layers();
        let c = 7.0;
        let p = pm_point(c, 16.0, 16.0, &layers, &concrete, &rebar);
        let a = c * concrete.b1();
        let cc = 3400.0 * 16.0 * a;
        let forces = sum_layer_forces(&layers, c, &concrete, &rebar);
        let moments = sum_layer_moments(&layers, 16.0, c, &concrete, &rebar);
        assert!((p.axial - (cc + forces)).abs() < 1e-6);
        assert!((p.moment - (cc * (16.0 - a) / 2.0 + moments)).abs() < 1e-6);
    }

    #[test]
    fn test_pm_point_small_c_is_pure_tension() {
        let (concrete, rebar) = materials();
        let layers = column_layers();
        let p = pm_point(1e-9, 16.0, 16.0, &layers, &concrete, &rebar);
        assert!((p.axial - pure_tension_capacity(&layers, &rebar)).abs() < 1.0);
        assert!((p.axial + 540_000.0).abs() < 1.0);
        assert!(p.moment.abs() < 1.0);
    }

    #[test]
    fn test_pm_point_infinite_c_is_maximum_compression() {
        let (concrete, rebar) = materials();
        let layers = column_layers();
        let po = maximum_compression(256.0, &layers, &concrete, &rebar);
        // 3400·(256 − 9) + 60,000·9
        assert!((po - 1_379_800.0).abs() < 1e-6);

        let p = pm_point(f64::INFINITY, 16.0, 16.0, &layers, &concrete, &rebar);
        assert!((p.axial - po).abs() < 1e-6);
        assert!(p.moment.abs() < 1e-6);
    }

    #[test]
    fn test_pm_point_zero_c() {
        let (concrete, rebar) = materials();
        let layers = column_layers();
        let p = pm_point(0.0, 16.0, 16.0, &layers, &concrete, &rebar);
        assert_eq!(p.axial, 0.0);
        assert_eq!(p.moment, 0.0);
    }

    #[test]
    fn test_z_round_trip() {
        let (concrete, rebar) = materials();
        for &c in &[2.0, 5.5, 11.0, 20.0, 40.0] {
            let z = z_from_c(c, 13.936, &concrete, &rebar);
            let back = c_from_z(z, 13.936, &concrete, &rebar);
            assert!((back - c).abs() < 1e-9, "c = {c}, back = {back}");
        }
    }

    #[test]
    fn test_balanced_z() {
        let (concrete, rebar) = materials();
        let cb = c_from_z(-1.0, 20.0, &concrete, &rebar);
        let strain = layer_strain(20.0, cb, &concrete);
        assert!((strain + rebar.ey()).abs() < 1e-12);
        assert!((z_from_c(cb, 20.0, &concrete, &rebar) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_z_sentinels() {
        let (concrete, rebar) = materials();
        assert_eq!(z_from_c(0.0, 10.0, &concrete, &rebar), RUPTURE_Z);
        assert_eq!(c_from_z(2.0, 10.0, &concrete, &rebar), f64::INFINITY);
        assert!((c_from_z(0.0, 10.0, &concrete, &rebar) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_layer_states_report() {
        let (concrete, rebar) = materials();
        let layers = column_layers();
        let states = layer_states(&layers, 16.0, 7.0, &concrete, &rebar);
        assert_eq!(states.len(), 3);
        assert_eq!(states[0].distance, 2.064);
        assert!(states[0].strain > 0.0);
        assert!(states[2].strain < 0.0);
        let total: f64 = states.iter().map(|s| s.force).sum();
        assert!((total - sum_layer_forces(&layers, 7.0, &concrete, &rebar)).abs() < 1e-9);
    }

    #[test]
    fn test_pm_point_units() {
        let point = PmPoint {
            c: 5.0,
            moment: 1_200_000.0,
            axial: 250_000.0,
        };
        assert_eq!(point.axial_kips().0, 250.0);
        assert_eq!(point.moment_kip_ft().0, 100.0);
        let (m, p): (f64, f64) = point.into();
        assert_eq!((m, p), (1_200_000.0, 250_000.0));
    }

    #[test]
    fn test_infinite_depth_serializes_as_null() {
        let (concrete, rebar) = materials();
        let point = pm_point(f64::INFINITY, 16.0, 16.0, &column_layers(), &concrete, &rebar);
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"c\":null"));

        let back: PmPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back.c, f64::INFINITY);
        assert_eq!(back.axial, point.axial);

        let finite: PmPoint = serde_json::from_str(r#"{"c": 4.5, "moment": 1.0, "axial": 2.0}"#).unwrap();
        assert_eq!(finite.c, 4.5);
    }
}
