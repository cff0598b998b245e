//! # rc_core - Reinforced Concrete Section Calculations
//!
//! `rc_core` implements ACI 318 strength calculations for rectangular
//! reinforced concrete sections: P-M interaction by strain compatibility
//! over any number of reinforcement layers, plus single-layer beam flexure
//! and one-way shear. All inputs and outputs are serde-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All Input/Result types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Compression Positive**: One sign convention for strain, stress and force
//!
//! ## Quick Start
//!
//! ```rust
//! use rc_core::materials::{BarSize, ConcreteMaterial, RebarMaterial};
//! use rc_core::section::RcSection;
//!
//! let concrete = ConcreteMaterial::new(5000.0).unwrap();
//! let rebar = RebarMaterial::grade_60();
//! let section = RcSection::symmetric(18.0, 18.0, 4, BarSize::No8, 1.5, 2).unwrap();
//!
//! let point = section.pm_point(8.0, &concrete, &rebar);
//! println!("P = {:.0} kips, M = {:.0} k-ft", point.axial_kips().0, point.moment_kip_ft().0);
//! assert!(point.axial < section.maximum_compression(&concrete, &rebar));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Interaction diagram and beam check
//! - [`equations`] - ACI formulas and the equation registry
//! - [`section`] - Layer placement and validated sections
//! - [`materials`] - Concrete, reinforcing steel and bar sizes
//! - [`settings`] - Design settings shared by a run
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod section;
pub mod settings;
pub mod units;

pub use calculations::{CalculationItem, CalculationOutput};
pub use errors::{CalcError, CalcResult};
pub use section::{RcSection, ReinforcementLayer};
pub use settings::DesignSettings;
