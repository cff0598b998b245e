//! # Concrete Material Property Formulas
//!
//! Code relationships that derive concrete properties from `f'c`.
//!
//! Every function here accepts `f'c` in psi or ksi: values below 10 are
//! taken as ksi and scaled (see [`crate::units::strength_psi`]).
//!
//! ## References
//!
//! - ACI 318-19 Table 22.2.2.4.3 (β1)
//! - ACI 318-19 Section 19.2.2.1 (Ec)
//! - ACI 318-19 Section 19.2.3.1 (fr)

use crate::units::strength_psi;

/// Stress block depth factor β1 per ACI Table 22.2.2.4.3
///
/// ```text
/// β1 = 0.85                            f'c <= 4000 psi
/// β1 = 0.85 - 0.05(f'c - 4000)/1000    4000 < f'c < 8000 psi
/// β1 = 0.65                            f'c >= 8000 psi
/// ```
///
/// # Example
/// ```rust
/// use rc_core::equations::material::beta1;
///
/// assert_eq!(beta1(3000.0), 0.85);
/// assert!((beta1(6000.0) - 0.75).abs() < 1e-12);
/// assert_eq!(beta1(9.0), 0.65); // 9 ksi
/// ```
pub fn beta1(fc: f64) -> f64 {
    let fc = strength_psi(fc);
    if fc <= 4000.0 {
        0.85
    } else if fc >= 8000.0 {
        0.65
    } else {
        0.85 - 0.05 * (fc - 4000.0) / 1000.0
    }
}

/// Concrete modulus of elasticity Ec (psi)
///
/// # Formulas
/// - Without unit weight, ACI Eq. 19.2.2.1.b: `Ec = 57000·√f'c`
/// - With unit weight `wc` (pcf), ACI Eq. 19.2.2.1.a: `Ec = wc^1.5·33·√f'c`
///
/// The two agree at roughly `wc = 144 pcf`.
pub fn concrete_elastic_modulus(fc: f64, wc_pcf: Option<f64>) -> f64 {
    let root_fc = strength_psi(fc).sqrt();
    match wc_pcf {
        Some(wc) => wc.powf(1.5) * 33.0 * root_fc,
        None => 57000.0 * root_fc,
    }
}

/// Modulus of rupture `fr = 7.5·λ·√f'c` (psi), ACI Eq. 19.2.3.1
#[inline]
pub fn modulus_of_rupture(fc: f64, lam: f64) -> f64 {
    7.5 * lam * strength_psi(fc).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beta1_bounds() {
        assert_eq!(beta1(2500.0), 0.85);
        assert_eq!(beta1(4000.0), 0.85);
        assert_eq!(beta1(8000.0), 0.65);
        assert_eq!(beta1(12000.0), 0.65);
    }

    #[test]
    fn test_beta1_interpolation() {
        assert!((beta1(5000.0) - 0.80).abs() < 1e-12);
        assert!((beta1(6000.0) - 0.75).abs() < 1e-12);
        assert!((beta1(7000.0) - 0.70).abs() < 1e-12);
    }

    #[test]
    fn test_beta1_ksi_input() {
        assert!((beta1(6.0) - beta1(6000.0)).abs() < 1e-12);
    }

    #[test]
    fn test_elastic_modulus_equations_meet_near_144_pcf() {
        let eq_b = concrete_elastic_modulus(5000.0, None);
        let eq_a = concrete_elastic_modulus(5000.0, Some(143.959593));
        assert!((eq_a - eq_b).abs() / eq_b < 1e-6);
    }

    #[test]
    fn test_modulus_of_rupture_lightweight() {
        let nwc = modulus_of_rupture(4000.0, 1.0);
        let lwc = modulus_of_rupture(4.0, 0.75);
        assert!((lwc - 0.75 * nwc).abs() < 1e-9);
    }
}
