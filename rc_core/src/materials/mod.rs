//! # Materials
//!
//! Immutable material property bundles consumed by the section engine.
//!
//! ## Material Types
//!
//! - **Concrete**: `f'c`, β1, ultimate strain `ecu`, lightweight factor λ,
//!   optional unit weight `wc` ([`ConcreteMaterial`])
//! - **Reinforcing steel**: `fy`, `Es`, derived `ey` ([`RebarMaterial`])
//! - **Bar sizes**: nominal diameter / area / weight per ACI Appendix A ([`BarSize`])
//!
//! Materials are validated once on construction and never mutated afterwards.
//! They are passed explicitly into every formula; there are no process-wide
//! defaults.
//!
//! ## Example
//!
//! ```rust
//! use rc_core::materials::{BarSize, ConcreteMaterial, RebarMaterial};
//!
//! let concrete = ConcreteMaterial::new(5000.0).unwrap();
//! let rebar = RebarMaterial::grade_60();
//!
//! assert!((concrete.b1() - 0.80).abs() < 1e-12);
//! assert!((rebar.ey() - 0.002069).abs() < 1e-6);
//! assert_eq!(BarSize::No8.area().0, 0.79);
//! ```

pub mod bar_sizes;
pub mod concrete;
pub mod rebar;

pub use bar_sizes::BarSize;
pub use concrete::{ConcreteMaterial, ACI_ULTIMATE_STRAIN};
pub use rebar::{RebarMaterial, GRADE_60_FY_PSI, STEEL_ES_PSI};
