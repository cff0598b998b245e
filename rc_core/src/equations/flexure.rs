//! # Single-Layer Flexure Formulas
//!
//! Closed-form equations for a rectangular beam with one layer of tension
//! steel and no axial load, using the ACI equivalent rectangular stress block.
//!
//! ```text
//!    ┌──────────────┐ ─┬─ ─┬─   εcu (compression face)
//!    │▓▓▓▓▓▓▓▓▓▓▓▓▓▓│  a   │
//!    │- - - - - - - │ ─┴─  c
//!    │══════════════│ ─────┴─   neutral axis
//!    │              │
//!    │   ●  ●  ●    │ ← As at depth d
//!    └──────────────┘
//!          bw
//! ```
//!
//! ## Sign Convention
//!
//! Compression is positive. `ecu` is passed as a positive magnitude, so a
//! bar below the neutral axis has a negative (tensile) strain.
//!
//! ## Degenerate Inputs
//!
//! A zero denominator (zero width, zero β1, zero `c`) returns `0.0`. The
//! guard runs before the division, so no `inf`/`NaN` leaks into a sweep.
//!
//! ## References
//!
//! - ACI 318-19 Section 22.2.2 (stress block, `a = β1·c`)
//! - ACI 318-19 Section 20.2.2.1 and R20.2.2.1 (steel stress-strain)

use crate::units::strength_psi;

/// Depth of the equivalent stress block from horizontal equilibrium
///
/// # Formula
/// `a = fy·As / (0.85·f'c·bw)`
///
/// `f'c` below 10 is read as ksi. Returns `0.0` when `f'c·bw == 0`.
///
/// # Example
/// ```rust
/// use rc_core::equations::flexure::stress_block_depth;
///
/// // 3 #8 bars (2.37 in²), Grade 60, 4000 psi, 12" wide
/// let a = stress_block_depth(4000.0, 12.0, 2.37, 60000.0);
/// assert!((a - 3.485).abs() < 0.001);
/// ```
#[inline]
pub fn stress_block_depth(fc: f64, bw: f64, as_tension: f64, fy: f64) -> f64 {
    let denom = 0.85 * strength_psi(fc) * bw;
    if denom == 0.0 {
        return 0.0;
    }
    fy * as_tension / denom
}

/// Neutral axis depth `c = a / β1` (ACI 22.2.2.4.1). Returns `0.0` when `β1 == 0`.
#[inline]
pub fn neutral_axis_depth(a: f64, b1: f64) -> f64 {
    if b1 == 0.0 {
        return 0.0;
    }
    a / b1
}

/// Strain at depth `d` from similar triangles
///
/// # Formula
/// `ε(d) = εcu·(1 − d/c)`
///
/// Equals `εcu` at the compression face, zero at the neutral axis and is
/// negative (tension) below it. Returns `0.0` when `c == 0`; an infinite `c`
/// gives the uniform strain `εcu`.
#[inline]
pub fn strain_at_depth(d: f64, c: f64, ecu: f64) -> f64 {
    if c == 0.0 {
        return 0.0;
    }
    ecu * (1.0 - d / c)
}

/// Yield strain `εy = fy/Es`. Returns `0.0` when `Es == 0`.
#[inline]
pub fn yield_strain(fy: f64, es: f64) -> f64 {
    if es == 0.0 {
        return 0.0;
    }
    fy / es
}

/// Steel stress from strain, elastic-perfectly-plastic (ACI R20.2.2.1)
///
/// # Formula
/// - `fs = Es·εs`        for `|εs| < εy`
/// - `fs = ±fy`          otherwise, with the sign of `εs`
///
/// # Example
/// ```rust
/// use rc_core::equations::flexure::steel_stress;
///
/// assert_eq!(steel_stress(0.0025, 29e6, 60000.0), 60000.0);
/// assert_eq!(steel_stress(-0.0025, 29e6, 60000.0), -60000.0);
/// assert!((steel_stress(0.001, 29e6, 60000.0) - 29000.0).abs() < 1e-9);
/// ```
#[inline]
pub fn steel_stress(strain: f64, es: f64, fy: f64) -> f64 {
    let elastic = strain * es;
    if elastic.abs() >= fy {
        fy.copysign(strain)
    } else {
        elastic
    }
}

/// Nominal flexural strength of a singly reinforced section
///
/// # Formula
/// `Mn = As·fs·(d − a/2)` (in-lb)
///
/// `fs` is the magnitude of the tension steel stress.
#[inline]
pub fn nominal_moment(as_tension: f64, fs: f64, d: f64, a: f64) -> f64 {
    as_tension * fs.abs() * (d - a / 2.0)
}

/// Strength reduction factor φ for moment and axial force (ACI Table 21.2.2)
///
/// Interpolates on the net tensile strain `εt` (positive in tension) between
/// compression-controlled (`εt <= εty`, φ = 0.65, tied) and
/// tension-controlled (`εt >= εty + 0.003`, φ = 0.90).
pub fn flexure_phi(net_tensile_strain: f64, ey: f64) -> f64 {
    const PHI_COMPRESSION: f64 = 0.65;
    const PHI_TENSION: f64 = 0.90;
    if net_tensile_strain <= ey {
        PHI_COMPRESSION
    } else if net_tensile_strain >= ey + 0.003 {
        PHI_TENSION
    } else {
        PHI_COMPRESSION + 0.25 * (net_tensile_strain - ey) / 0.003
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stress_block_zero_guard() {
        assert_eq!(stress_block_depth(4000.0, 0.0, 2.0, 60000.0), 0.0);
        assert_eq!(stress_block_depth(0.0, 12.0, 2.0, 60000.0), 0.0);
    }

    #[test]
    fn test_stress_block_reads_ksi() {
        let ksi = stress_block_depth(4.0, 12.0, 2.37, 60000.0);
        let psi = stress_block_depth(4000.0, 12.0, 2.37, 60000.0);
        assert!((ksi - psi).abs() < 1e-12);
        assert!((ksi - 3.485).abs() < 0.001);
    }

    #[test]
    fn test_neutral_axis_from_block() {
        assert!((neutral_axis_depth(3.4, 0.85) - 4.0).abs() < 1e-12);
        assert_eq!(neutral_axis_depth(3.4, 0.0), 0.0);
    }

    #[test]
    fn test_strain_profile() {
        let ecu = 0.003;
        assert_eq!(strain_at_depth(0.0, 5.0, ecu), ecu);
        assert_eq!(strain_at_depth(5.0, 5.0, ecu), 0.0);
        // d = 20, c = 5 → 0.003·(1 − 4) = −0.009
        assert!((strain_at_depth(20.0, 5.0, ecu) + 0.009).abs() < 1e-12);
        assert_eq!(strain_at_depth(20.0, 0.0, ecu), 0.0);
        assert_eq!(strain_at_depth(20.0, f64::INFINITY, ecu), ecu);
    }

    #[test]
    fn test_yield_strain() {
        assert!((yield_strain(60000.0, 29e6) - 0.00207).abs() < 1e-5);
        assert_eq!(yield_strain(60000.0, 0.0), 0.0);
    }

    #[test]
    fn test_steel_stress_elastic_and_saturated() {
        let (es, fy) = (29e6, 60000.0);
        assert_eq!(steel_stress(0.0025, es, fy), 60000.0);
        assert!((steel_stress(0.001, es, fy) - 29000.0).abs() < 1e-9);
        assert!((steel_stress(-0.001, es, fy) + 29000.0).abs() < 1e-9);
        assert_eq!(steel_stress(-0.01, es, fy), -60000.0);
        assert_eq!(steel_stress(0.0, es, fy), 0.0);
    }

    #[test]
    fn test_nominal_moment() {
        // 2.37 in² · 60 ksi · (17.5 − 3.485/2) = 2,240,717 in-lb
        let mn = nominal_moment(2.37, 60000.0, 17.5, 3.485);
        assert!((mn - 2_240_716.5).abs() < 1.0);
    }

    #[test]
    fn test_flexure_phi() {
        let ey = 0.00207;
        assert_eq!(flexure_phi(0.001, ey), 0.65);
        assert_eq!(flexure_phi(0.006, ey), 0.90);
        let mid = flexure_phi(ey + 0.0015, ey);
        assert!((mid - 0.775).abs() < 1e-9);
    }
}
