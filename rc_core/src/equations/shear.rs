//! # One-Way Shear Formulas
//!
//! Concrete shear strength and required transverse reinforcement for
//! nonprestressed members.
//!
//! ## Notation
//!
//! - `Vc` = nominal shear strength provided by concrete (lb)
//! - `Vu` = factored shear force (lb)
//! - `Nu` = factored axial force (lb), compression positive, tension negative
//! - `Ag` = gross area (in²)
//! - `Av/s` = transverse reinforcement area per unit spacing (in²/in)
//!
//! ## References
//!
//! - ACI 318-14 Eq. 22.5.5.1 (Vc without axial load)
//! - ACI 318-14 Eq. 22.5.6.1 / 22.5.7.1 (Vc with axial compression / tension)
//! - ACI 318-19 Table 21.2.1 (φ for shear)

use crate::units::strength_psi;

/// Strength reduction factor for shear
pub const PHI_SHEAR: f64 = 0.75;

/// Strength reduction factor for shear in members designed for seismic
/// effects where the nominal shear strength is less than the shear
/// corresponding to development of nominal flexural strength (ACI 21.2.4)
pub const PHI_SHEAR_SEISMIC: f64 = 0.60;

/// `Nu/Ag` divisor for axial compression or light tension
const AXIAL_DIVISOR: f64 = 2000.0;

/// `Nu/Ag` divisor when axial tension is significant
const SIGNIFICANT_TENSION_DIVISOR: f64 = 500.0;

/// Concrete shear strength without axial force
///
/// # Formula (ACI 318-14 Eq. 22.5.5.1)
/// `Vc = 2·λ·√f'c·bw·d`
///
/// `f'c` below 10 is read as ksi. Returns `0.0` for non-positive `f'c`.
///
/// # Example
/// ```rust
/// use rc_core::equations::shear::concrete_shear_strength;
///
/// let vc = concrete_shear_strength(4000.0, 12.0, 20.0, 1.0);
/// assert!((vc - 30_358.0).abs() < 1.0);
/// ```
#[inline]
pub fn concrete_shear_strength(fc: f64, bw: f64, d: f64, lam: f64) -> f64 {
    if fc <= 0.0 {
        return 0.0;
    }
    2.0 * lam * strength_psi(fc).sqrt() * bw * d
}

/// Concrete shear strength with axial force
///
/// # Formula
/// ```text
/// Vc = max(0, (1 + Nu/(k·Ag))·2·λ·√f'c·bw·d)
/// k  = 500    significant axial tension (ACI 22.5.7.1)
/// k  = 2000   otherwise (ACI 22.5.6.1)
/// ```
///
/// Whether tension is "significant" is an engineering judgement, so it is
/// supplied by the caller. The `max(0, ·)` floor applies because shear
/// strength cannot go negative under large net tension. With `Ag == 0` the
/// axial term is dropped.
pub fn concrete_shear_strength_with_axial(
    fc: f64,
    bw: f64,
    d: f64,
    nu: f64,
    ag: f64,
    lam: f64,
    significant_tension: bool,
) -> f64 {
    let vc = concrete_shear_strength(fc, bw, d, lam);
    if ag == 0.0 {
        return vc;
    }
    let divisor = if significant_tension {
        SIGNIFICANT_TENSION_DIVISOR
    } else {
        AXIAL_DIVISOR
    };
    ((1.0 + nu / (divisor * ag)) * vc).max(0.0)
}

/// Strength reduction factor for shear
#[inline]
pub fn shear_phi(seismic: bool) -> f64 {
    if seismic {
        PHI_SHEAR_SEISMIC
    } else {
        PHI_SHEAR
    }
}

/// Required transverse reinforcement per unit spacing
///
/// # Formula
/// `Av/s = (Vu − φ·Vc) / (φ·fy·d)` (in²/in)
///
/// A negative result means `φVc` alone carries `Vu`. Returns `0.0` when
/// `φ·fy·d == 0`.
pub fn required_shear_reinforcement(vu: f64, vc: f64, fy: f64, d: f64, seismic: bool) -> f64 {
    let phi = shear_phi(seismic);
    let denom = phi * fy * d;
    if denom == 0.0 {
        return 0.0;
    }
    (vu - phi * vc) / denom
}
