//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## US Customary Units (Primary)
//!
//! rc_core works in US customary units internally, matching ACI 318:
//! - Length: inches (in)
//! - Area: square inches (in²)
//! - Force: pounds (lb), kips (k = 1000 lb)
//! - Stress: pounds per square inch (psi), kips per square inch (ksi)
//! - Moment: inch-pounds (in-lb), kip-inches (k-in), kip-feet (k-ft)
//!
//! All formula functions take and return raw `f64` values in psi / in / lb / in-lb.
//! The wrappers here are used at the reporting boundary.
//!
//! ## ksi vs psi
//!
//! Concrete strength is accepted in either unit: any `f'c` below
//! [`KSI_THRESHOLD`] is taken as ksi and scaled to psi (see [`strength_psi`]).
//! No real concrete has `f'c` under 10 psi, so the rule is unambiguous.
//!
//! ## Example
//!
//! ```rust
//! use rc_core::units::{InLb, KipFt, Ksi, Psi, strength_psi};
//!
//! let fc: Psi = Ksi(4.0).into();
//! assert_eq!(fc.0, 4000.0);
//! assert_eq!(strength_psi(4.0), 4000.0);
//!
//! let m: KipFt = InLb(1_200_000.0).into();
//! assert_eq!(m.0, 100.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Strength values below this are interpreted as ksi
pub const KSI_THRESHOLD: f64 = 10.0;

/// Normalize a concrete strength to psi.
///
/// Values below [`KSI_THRESHOLD`] are assumed to be ksi and multiplied by 1000;
/// anything else is returned unchanged.
#[inline]
pub fn strength_psi(value: f64) -> f64 {
    if value < KSI_THRESHOLD {
        value * 1000.0
    } else {
        value
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

// ============================================================================
// Area Units
// ============================================================================

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

// ============================================================================
// Force Units
// ============================================================================

/// Force in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Force in kips (1 kip = 1000 pounds)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kips(pub f64);

impl From<Pounds> for Kips {
    fn from(lb: Pounds) -> Self {
        Kips(lb.0 / 1000.0)
    }
}

impl From<Kips> for Pounds {
    fn from(k: Kips) -> Self {
        Pounds(k.0 * 1000.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pounds per square inch (psi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

/// Stress in kips per square inch (ksi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ksi(pub f64);

impl From<Psi> for Ksi {
    fn from(psi: Psi) -> Self {
        Ksi(psi.0 / 1000.0)
    }
}

impl From<Ksi> for Psi {
    fn from(ksi: Ksi) -> Self {
        Psi(ksi.0 * 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in inch-pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InLb(pub f64);

/// Moment in kip-inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KipIn(pub f64);

/// Moment in kip-feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KipFt(pub f64);

impl From<InLb> for KipIn {
    fn from(inlb: InLb) -> Self {
        KipIn(inlb.0 / 1000.0)
    }
}

impl From<KipIn> for KipFt {
    fn from(kipin: KipIn) -> Self {
        KipFt(kipin.0 / 12.0)
    }
}

impl From<KipFt> for KipIn {
    fn from(kipft: KipFt) -> Self {
        KipIn(kipft.0 * 12.0)
    }
}

impl From<InLb> for KipFt {
    fn from(inlb: InLb) -> Self {
        KipIn::from(inlb).into()
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Inches);
impl_arithmetic!(SqIn);
impl_arithmetic!(Pounds);
impl_arithmetic!(Kips);
impl_arithmetic!(Psi);
impl_arithmetic!(Ksi);
impl_arithmetic!(InLb);
impl_arithmetic!(KipIn);
impl_arithmetic!(KipFt);
