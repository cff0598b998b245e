//! # Reinforced Concrete Equations
//!
//! The ACI 318 formulas used by the calculations, kept in one place so each
//! can be checked against its code reference on its own.
//!
//! ## Modules
//!
//! - [`material`] - Concrete properties from f'c (β1, Ec, fr)
//! - [`flexure`] - Single-layer stress block, strain and steel stress
//! - [`shear`] - One-way concrete shear strength and stirrup demand
//! - [`strain_compat`] - Multi-layer strain compatibility and P-M points
//! - [`registry`] - Equation metadata and usage tracking
//!
//! ## Sign Conventions
//!
//! - **Strain / stress / force**: Positive in compression
//! - **Distances**: Measured from the extreme compression fiber
//! - **Moment**: Taken about mid-depth, positive for compression above it
//!
//! ## Units
//!
//! psi, in, in², lb, in-lb throughout. Concrete strengths below 10 are
//! read as ksi.
//!
//! ## References
//!
//! - ACI 318-19: Building Code Requirements for Structural Concrete
//! - ACI 318-14 Section 22.5 (shear with axial force)

pub mod flexure;
pub mod material;
pub mod registry;
pub mod shear;
pub mod strain_compat;

pub use flexure::{
    flexure_phi,
    neutral_axis_depth,
    nominal_moment,
    steel_stress,
    strain_at_depth,
    stress_block_depth,
    yield_strain,
};

pub use material::{beta1, concrete_elastic_modulus, modulus_of_rupture};

pub use shear::{
    concrete_shear_strength,
    concrete_shear_strength_with_axial,
    required_shear_reinforcement,
    shear_phi,
    PHI_SHEAR,
    PHI_SHEAR_SEISMIC,
};

pub use strain_compat::{
    c_from_z,
    layer_force,
    layer_states,
    layer_strain,
    layer_stress,
    maximum_compression,
    pm_point,
    pure_tension_capacity,
    sum_layer_forces,
    sum_layer_moments,
    z_from_c,
    LayerState,
    PmPoint,
    RUPTURE_Z,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
