//! # Equation Registry
//!
//! Central registry of the ACI 318 equations used in rc_core calculations.
//! Each equation carries its code reference, a plain-text formula, variable
//! definitions, and a pointer to the function that implements it.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for reports and audit trails
//! - Usage tracking during a calculation via `EquationTracker`
//! - Generation of `EQUATIONS.md` (see the `gen-equations` binary)
//!
//! ## Usage
//!
//! ```rust
//! use rc_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::PmPoint, "c = 8.0 in");
//!
//! let meta = Equation::PmPoint.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! assert_eq!(tracker.unique_equations(), vec![Equation::PmPoint]);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to the code provision or principle an equation comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// ACI 318 - Building Code Requirements for Structural Concrete
    ACI318 {
        year: u16,
        section: &'static str,
    },
    /// Fundamental mechanics (equilibrium, compatibility, geometry)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::ACI318 { year, section } => {
                format!("ACI 318-{} Section {}", year % 100, section)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::ACI318 { .. } => "ACI 318",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

const ACI_2019: u16 = 2019;
const ACI_2014: u16 = 2014;

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in reports and EQUATIONS.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// β1, Ec, fr, εy
    MaterialProperties,
    /// Reinforcement layer placement
    SectionGeometry,
    /// Single-layer flexure (stress block, steel stress, Mn, φ)
    Flexure,
    /// Multi-layer strain compatibility and the P-M diagram
    StrainCompatibility,
    /// One-way shear
    Shear,
}

impl EquationCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::MaterialProperties => "Material Properties",
            EquationCategory::SectionGeometry => "Section Geometry",
            EquationCategory::Flexure => "Flexure",
            EquationCategory::StrainCompatibility => "Strain Compatibility",
            EquationCategory::Shear => "Shear",
        }
    }

    /// Sort order for reports (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::MaterialProperties => 1,
            EquationCategory::SectionGeometry => 2,
            EquationCategory::Flexure => 3,
            EquationCategory::StrainCompatibility => 4,
            EquationCategory::Shear => 5,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "f'c", "As", "c")
    pub symbol: &'static str,
    pub description: &'static str,
    /// Units (e.g., "psi", "in²", "-")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Stress Block Depth")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    pub reference: CodeReference,
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used in rc_core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Material Properties
    // -------------------------------------------------------------------------
    /// β1 from f'c
    Beta1,
    /// Ec = 57000√f'c or wc^1.5·33√f'c
    ConcreteElasticModulus,
    /// fr = 7.5λ√f'c
    ModulusOfRupture,
    /// εy = fy/Es
    YieldStrain,

    // -------------------------------------------------------------------------
    // Section Geometry
    // -------------------------------------------------------------------------
    /// Evenly spaced layer depths
    LayerDistances,

    // -------------------------------------------------------------------------
    // Flexure
    // -------------------------------------------------------------------------
    /// a = fy·As/(0.85f'c·bw)
    StressBlockDepth,
    /// c = a/β1
    NeutralAxisDepth,
    /// ε = εcu(1 − d/c)
    StrainAtDepth,
    /// fs = Es·εs ≤ fy
    SteelStress,
    /// Mn = As·fs(d − a/2)
    NominalMoment,
    /// φ from net tensile strain
    FlexurePhi,

    // -------------------------------------------------------------------------
    // Strain Compatibility
    // -------------------------------------------------------------------------
    /// F = (fs − 0.85f'c)As inside the block, fs·As outside
    LayerForce,
    /// P = Cc + ΣF, M = Mc + ΣF(h/2 − d)
    PmPoint,
    /// Po = 0.85f'c(Ag − Ast) + fy·Ast
    MaximumCompression,
    /// Pnt = −fy·Ast
    PureTension,
    /// Z = εs/εy and its inverse
    DuctilityRatio,

    // -------------------------------------------------------------------------
    // Shear
    // -------------------------------------------------------------------------
    /// Vc = 2λ√f'c·bw·d
    ConcreteShearStrength,
    /// Vc with axial load
    ConcreteShearStrengthAxial,
    /// Av/s = (Vu − φVc)/(φ·fy·d)
    RequiredShearReinforcement,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            // Material properties
            Equation::Beta1 => EquationMetadata {
                name: "Stress Block Factor β1",
                description: "Ratio of equivalent stress block depth to neutral axis depth",
                formula_plain: "b1 = 0.85 (f'c <= 4000); 0.85 - 0.05(f'c - 4000)/1000; 0.65 (f'c >= 8000)",
                reference: CodeReference::ACI318 { year: ACI_2019, section: "Table 22.2.2.4.3" },
                variables: vec![
                    Variable::new("b1", "Stress block depth factor", "-"),
                    Variable::new("f'c", "Specified compressive strength", "psi"),
                ],
                assumptions: vec!["f'c below 10 is read as ksi"],
                category: EquationCategory::MaterialProperties,
                source_module: "equations/material.rs",
                source_function: "beta1",
            },

            Equation::ConcreteElasticModulus => EquationMetadata {
                name: "Concrete Modulus of Elasticity",
                description: "Secant modulus of concrete from strength and optional unit weight",
                formula_plain: "Ec = 57000*sqrt(f'c), or Ec = wc^1.5 * 33 * sqrt(f'c)",
                reference: CodeReference::ACI318 { year: ACI_2019, section: "19.2.2.1" },
                variables: vec![
                    Variable::new("Ec", "Modulus of elasticity", "psi"),
                    Variable::new("f'c", "Specified compressive strength", "psi"),
                    Variable::new("wc", "Unit weight of concrete", "pcf"),
                ],
                assumptions: vec!["wc between 90 and 160 pcf"],
                category: EquationCategory::MaterialProperties,
                source_module: "equations/material.rs",
                source_function: "concrete_elastic_modulus",
            },

            Equation::ModulusOfRupture => EquationMetadata {
                name: "Modulus of Rupture",
                description: "Flexural tensile strength of concrete",
                formula_plain: "fr = 7.5 * lambda * sqrt(f'c)",
                reference: CodeReference::ACI318 { year: ACI_2019, section: "19.2.3.1" },
                variables: vec![
                    Variable::new("fr", "Modulus of rupture", "psi"),
                    Variable::new("lambda", "Lightweight concrete factor", "-"),
                ],
                assumptions: vec![],
                category: EquationCategory::MaterialProperties,
                source_module: "equations/material.rs",
                source_function: "modulus_of_rupture",
            },

            Equation::YieldStrain => EquationMetadata {
                name: "Yield Strain",
                description: "Strain at which reinforcement yields",
                formula_plain: "ey = fy / Es",
                reference: CodeReference::ACI318 { year: ACI_2019, section: "20.2.2.1" },
                variables: vec![
                    Variable::new("ey", "Yield strain", "-"),
                    Variable::new("fy", "Specified yield strength", "psi"),
                    Variable::new("Es", "Modulus of elasticity of steel", "psi"),
                ],
                assumptions: vec!["Elastic-perfectly-plastic steel"],
                category: EquationCategory::MaterialProperties,
                source_module: "equations/flexure.rs",
                source_function: "yield_strain",
            },

            // Section geometry
            Equation::LayerDistances => EquationMetadata {
                name: "Layer Distances",
                description: "Evenly spaced reinforcement layer depths between the outer bar centroids",
                formula_plain: "d_i = start + i*(end - start)/(n - 1), start = cover + db/2, end = h - cover - db/2",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("n", "Number of layers", "-"),
                    Variable::new("db", "Bar diameter", "in"),
                    Variable::new("cover", "Clear cover", "in"),
                    Variable::new("h", "Section height", "in"),
                ],
                assumptions: vec!["A single layer is placed at mid-depth"],
                category: EquationCategory::SectionGeometry,
                source_module: "section.rs",
                source_function: "layer_distances",
            },

            // Flexure
            Equation::StressBlockDepth => EquationMetadata {
                name: "Stress Block Depth",
                description: "Equivalent rectangular stress block depth from horizontal equilibrium",
                formula_plain: "a = fy * As / (0.85 * f'c * bw)",
                reference: CodeReference::ACI318 { year: ACI_2019, section: "22.2.2.4.1" },
                variables: vec![
                    Variable::new("a", "Stress block depth", "in"),
                    Variable::new("As", "Tension steel area", "in²"),
                    Variable::new("bw", "Web width", "in"),
                ],
                assumptions: vec!["Tension steel yields", "No compression steel"],
                category: EquationCategory::Flexure,
                source_module: "equations/flexure.rs",
                source_function: "stress_block_depth",
            },

            Equation::NeutralAxisDepth => EquationMetadata {
                name: "Neutral Axis Depth",
                description: "Neutral axis depth from stress block depth",
                formula_plain: "c = a / b1",
                reference: CodeReference::ACI318 { year: ACI_2019, section: "22.2.2.4.1" },
                variables: vec![
                    Variable::new("c", "Neutral axis depth", "in"),
                    Variable::new("a", "Stress block depth", "in"),
                ],
                assumptions: vec![],
                category: EquationCategory::Flexure,
                source_module: "equations/flexure.rs",
                source_function: "neutral_axis_depth",
            },

            Equation::StrainAtDepth => EquationMetadata {
                name: "Strain at Depth",
                description: "Linear strain distribution through the section depth",
                formula_plain: "e(d) = ecu * (1 - d/c)",
                reference: CodeReference::ACI318 { year: ACI_2019, section: "22.2.1.2" },
                variables: vec![
                    Variable::new("ecu", "Ultimate concrete strain", "-"),
                    Variable::new("d", "Depth from compression face", "in"),
                    Variable::new("c", "Neutral axis depth", "in"),
                ],
                assumptions: vec!["Plane sections remain plane", "Compression positive"],
                category: EquationCategory::Flexure,
                source_module: "equations/flexure.rs",
                source_function: "strain_at_depth",
            },

            Equation::SteelStress => EquationMetadata {
                name: "Steel Stress",
                description: "Reinforcement stress from strain",
                formula_plain: "fs = Es * es, limited to +/- fy",
                reference: CodeReference::ACI318 { year: ACI_2019, section: "20.2.2.1" },
                variables: vec![
                    Variable::new("fs", "Steel stress", "psi"),
                    Variable::new("es", "Steel strain", "-"),
                ],
                assumptions: vec!["Elastic-perfectly-plastic steel", "No strain hardening"],
                category: EquationCategory::Flexure,
                source_module: "equations/flexure.rs",
                source_function: "steel_stress",
            },

            Equation::NominalMoment => EquationMetadata {
                name: "Nominal Moment",
                description: "Nominal flexural strength of a singly reinforced rectangular section",
                formula_plain: "Mn = As * fs * (d - a/2)",
                reference: CodeReference::ACI318 { year: ACI_2019, section: "22.3" },
                variables: vec![
                    Variable::new("Mn", "Nominal moment strength", "in-lb"),
                    Variable::new("d", "Effective depth", "in"),
                ],
                assumptions: vec!["Single layer of tension steel"],
                category: EquationCategory::Flexure,
                source_module: "equations/flexure.rs",
                source_function: "nominal_moment",
            },

            Equation::FlexurePhi => EquationMetadata {
                name: "Strength Reduction Factor (Flexure)",
                description: "phi interpolated on net tensile strain between compression- and tension-controlled limits",
                formula_plain: "phi = 0.65 + 0.25*(et - ey)/0.003, 0.65 <= phi <= 0.90",
                reference: CodeReference::ACI318 { year: ACI_2019, section: "Table 21.2.2" },
                variables: vec![
                    Variable::new("et", "Net tensile strain in extreme tension steel", "-"),
                    Variable::new("phi", "Strength reduction factor", "-"),
                ],
                assumptions: vec!["Tied transverse reinforcement"],
                category: EquationCategory::Flexure,
                source_module: "equations/flexure.rs",
                source_function: "flexure_phi",
            },

            // Strain compatibility
            Equation::LayerForce => EquationMetadata {
                name: "Layer Force",
                description: "Net force in a reinforcement layer, net of concrete displaced inside the stress block",
                formula_plain: "F = (fs - 0.85*f'c)*As if d <= b1*c, else F = fs*As",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("F", "Layer force, compression positive", "lb"),
                    Variable::new("As", "Layer steel area", "in²"),
                ],
                assumptions: vec!["Continuous at the neutral axis"],
                category: EquationCategory::StrainCompatibility,
                source_module: "equations/strain_compat.rs",
                source_function: "layer_force",
            },

            Equation::PmPoint => EquationMetadata {
                name: "P-M Interaction Point",
                description: "Nominal axial force and moment about mid-depth for a trial neutral axis depth",
                formula_plain: "P = 0.85*f'c*bw*a + sum(F), M = Cc*(h - a)/2 + sum(F*(h/2 - d)), a = min(b1*c, h)",
                reference: CodeReference::ACI318 { year: ACI_2019, section: "22.2" },
                variables: vec![
                    Variable::new("P", "Nominal axial force", "lb"),
                    Variable::new("M", "Nominal moment about mid-depth", "in-lb"),
                    Variable::new("Cc", "Concrete compression resultant", "lb"),
                    Variable::new("h", "Section height", "in"),
                ],
                assumptions: vec!["Rectangular section", "Uniaxial bending", "Concrete tensile strength neglected"],
                category: EquationCategory::StrainCompatibility,
                source_module: "equations/strain_compat.rs",
                source_function: "pm_point",
            },

            Equation::MaximumCompression => EquationMetadata {
                name: "Maximum Axial Compression",
                description: "Nominal axial strength at zero eccentricity",
                formula_plain: "Po = 0.85*f'c*(Ag - Ast) + fy*Ast",
                reference: CodeReference::ACI318 { year: ACI_2019, section: "22.4.2.2" },
                variables: vec![
                    Variable::new("Po", "Nominal axial strength", "lb"),
                    Variable::new("Ag", "Gross area", "in²"),
                    Variable::new("Ast", "Total longitudinal steel area", "in²"),
                ],
                assumptions: vec![],
                category: EquationCategory::StrainCompatibility,
                source_module: "equations/strain_compat.rs",
                source_function: "maximum_compression",
            },

            Equation::PureTension => EquationMetadata {
                name: "Pure Axial Tension",
                description: "Nominal axial tensile strength with all steel yielded",
                formula_plain: "Pnt = -fy * Ast",
                reference: CodeReference::ACI318 { year: ACI_2019, section: "22.4.3.1" },
                variables: vec![
                    Variable::new("Pnt", "Nominal axial tension, negative", "lb"),
                    Variable::new("Ast", "Total longitudinal steel area", "in²"),
                ],
                assumptions: vec!["Concrete tensile strength neglected"],
                category: EquationCategory::StrainCompatibility,
                source_module: "equations/strain_compat.rs",
                source_function: "pure_tension_capacity",
            },

            Equation::DuctilityRatio => EquationMetadata {
                name: "Ductility Ratio Z",
                description: "Strain at a depth expressed as a multiple of yield strain, and the neutral axis depth that produces it",
                formula_plain: "Z = ecu*(c - d)/(c*ey), c = ecu*d/(ecu - Z*ey)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("Z", "Ductility ratio, Z = -1 at balanced", "-"),
                    Variable::new("d", "Depth of extreme tension layer", "in"),
                ],
                assumptions: vec!["c = 0 reports Z = -1000", "No finite c beyond Z = ecu/ey"],
                category: EquationCategory::StrainCompatibility,
                source_module: "equations/strain_compat.rs",
                source_function: "z_from_c",
            },

            // Shear
            Equation::ConcreteShearStrength => EquationMetadata {
                name: "Concrete Shear Strength",
                description: "One-way shear strength provided by concrete without axial force",
                formula_plain: "Vc = 2 * lambda * sqrt(f'c) * bw * d",
                reference: CodeReference::ACI318 { year: ACI_2014, section: "22.5.5.1" },
                variables: vec![
                    Variable::new("Vc", "Concrete shear strength", "lb"),
                    Variable::new("bw", "Web width", "in"),
                    Variable::new("d", "Effective depth", "in"),
                ],
                assumptions: vec!["Nonprestressed member"],
                category: EquationCategory::Shear,
                source_module: "equations/shear.rs",
                source_function: "concrete_shear_strength",
            },

            Equation::ConcreteShearStrengthAxial => EquationMetadata {
                name: "Concrete Shear Strength with Axial Force",
                description: "One-way concrete shear strength modified for axial compression or tension",
                formula_plain: "Vc = max(0, (1 + Nu/(k*Ag)) * 2*lambda*sqrt(f'c)*bw*d), k = 2000 or 500",
                reference: CodeReference::ACI318 { year: ACI_2014, section: "22.5.6.1 / 22.5.7.1" },
                variables: vec![
                    Variable::new("Nu", "Factored axial force, compression positive", "lb"),
                    Variable::new("Ag", "Gross area", "in²"),
                    Variable::new("k", "500 for significant tension, else 2000", "psi"),
                ],
                assumptions: vec!["Significance of axial tension is a designer judgement"],
                category: EquationCategory::Shear,
                source_module: "equations/shear.rs",
                source_function: "concrete_shear_strength_with_axial",
            },

            Equation::RequiredShearReinforcement => EquationMetadata {
                name: "Required Shear Reinforcement",
                description: "Transverse steel area per unit spacing needed beyond the concrete contribution",
                formula_plain: "Av/s = (Vu - phi*Vc) / (phi * fy * d)",
                reference: CodeReference::ACI318 { year: ACI_2019, section: "22.5.8.5.3" },
                variables: vec![
                    Variable::new("Av/s", "Shear reinforcement per unit spacing", "in²/in"),
                    Variable::new("Vu", "Factored shear force", "lb"),
                    Variable::new("phi", "0.75, or 0.60 for seismic", "-"),
                ],
                assumptions: vec!["Vertical stirrups", "Negative result means no stirrups are needed for strength"],
                category: EquationCategory::Shear,
                source_module: "equations/shear.rs",
                source_function: "required_shear_reinforcement",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// All categories, in sort order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![MaterialProperties, SectionGeometry, Flexure, StrainCompatibility, Shear];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry
pub static ALL_EQUATIONS: &[Equation] = &[
    // Material properties
    Equation::Beta1,
    Equation::ConcreteElasticModulus,
    Equation::ModulusOfRupture,
    Equation::YieldStrain,
    // Geometry
    Equation::LayerDistances,
    // Flexure
    Equation::StressBlockDepth,
    Equation::NeutralAxisDepth,
    Equation::StrainAtDepth,
    Equation::SteelStress,
    Equation::NominalMoment,
    Equation::FlexurePhi,
    // Strain compatibility
    Equation::LayerForce,
    Equation::PmPoint,
    Equation::MaximumCompression,
    Equation::PureTension,
    Equation::DuctilityRatio,
    // Shear
    Equation::ConcreteShearStrength,
    Equation::ConcreteShearStrengthAxial,
    Equation::RequiredShearReinforcement,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationUsage {
    pub equation: Equation,
    /// Where/why it was used (e.g., "balanced point")
    pub context: String,
    /// The member label this equation was applied to, if any
    pub member_label: Option<String>,
}

impl EquationUsage {
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
            member_label: None,
        }
    }

    pub fn for_member(equation: Equation, context: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
            member_label: Some(label.into()),
        }
    }
}

/// Collector for equation usage during a calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Record equation usage for a specific member
    pub fn record_for_member(&mut self, equation: Equation, context: impl Into<String>, label: impl Into<String>) {
        self.usages.push(EquationUsage::for_member(equation, context, label));
    }

    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Unique equations in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Unique equations grouped by category, categories in sort order
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }

    /// Merge another tracker into this one
    pub fn merge(&mut self, other: EquationTracker) {
        self.usages.extend(other.usages);
    }
}

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate a complete EQUATIONS.md listing every registered equation,
/// grouped by category, with formulas, references and source links.
///
/// # Example
///
/// ```rust
/// use rc_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("RC Section Equations Reference"));
/// assert!(markdown.contains("Strain Compatibility"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# RC Section Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists the formulas used in rc_core calculations. Each equation
includes its formula, code reference, source location, and assumptions.

## Sign Conventions

| Quantity | Positive Direction |
|----------|-------------------|
| Strain, stress | Compression |
| Axial force | Compression |
| Moment | Compression on the face at distance 0 |
| Layer distance | Measured down from the compression face |
| Moment arm | Measured from mid-depth toward the compression face |

---

"#,
    );

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`](rc_core/src/{})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output.push_str(
        r#"## How to Audit

1. Find the equation you want to verify in the sections above
2. Check the **Reference** against ACI 318
3. Follow the **Source** link to the implementation
4. Run `cargo test` to check the equations against hand-calculated values
"#,
    );

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 19);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_module.is_empty(), "Equation {:?} missing source_module", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source_function", eq);
        }

        let mn = Equation::NominalMoment.metadata();
        assert!(mn.formula_plain.contains("(d - a/2)"));
    }

    #[test]
    fn test_every_equation_has_a_category_entry() {
        let total: usize = Equation::all_categories()
            .into_iter()
            .map(|cat| Equation::in_category(cat).len())
            .sum();
        assert_eq!(total, ALL_EQUATIONS.len());
    }

    #[test]
    fn test_code_reference_citation() {
        let aci = CodeReference::ACI318 { year: 2019, section: "22.4.2.2" };
        assert_eq!(aci.citation(), "ACI 318-19 Section 22.4.2.2");
        assert_eq!(aci.short_form(), "ACI 318");
        assert_eq!(CodeReference::Mechanics.citation(), "Fundamental Mechanics");
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::PmPoint, "c = 4.0 in");
        tracker.record(Equation::LayerForce, "c = 4.0 in");
        tracker.record(Equation::PmPoint, "c = 8.0 in");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(tracker.unique_equations(), vec![Equation::PmPoint, Equation::LayerForce]);
    }

    #[test]
    fn test_tracker_merge_and_member_label() {
        let mut a = EquationTracker::new();
        a.record_for_member(Equation::Beta1, "materials", "C-1");
        let mut b = EquationTracker::new();
        b.record(Equation::YieldStrain, "materials");
        a.merge(b);

        assert_eq!(a.usages().len(), 2);
        assert_eq!(a.usages()[0].member_label.as_deref(), Some("C-1"));
        assert_eq!(a.usages()[1].member_label, None);
    }

    #[test]
    fn test_by_category() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::ConcreteShearStrength, "test");
        tracker.record(Equation::Beta1, "test");
        tracker.record(Equation::StressBlockDepth, "test");

        let by_cat = tracker.by_category();
        let categories: Vec<_> = by_cat.iter().map(|(cat, _)| *cat).collect();
        assert_eq!(
            categories,
            vec![
                EquationCategory::MaterialProperties,
                EquationCategory::Flexure,
                EquationCategory::Shear
            ]
        );
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Equation::all_categories();
        let orders: Vec<u8> = cats.iter().map(|c| c.sort_order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);
    }

    #[test]
    fn test_tracker_serialization() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::MaximumCompression, "Po");
        let json = serde_json::to_string(&tracker).unwrap();
        assert!(json.contains("MaximumCompression"));
        let back: EquationTracker = serde_json::from_str(&json).unwrap();
        assert_eq!(back.unique_equations(), vec![Equation::MaximumCompression]);
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# RC Section Equations Reference"));
        assert!(markdown.contains("Auto-generated from source code"));
        assert!(markdown.contains("## Sign Conventions"));

        assert!(markdown.contains("## Material Properties"));
        assert!(markdown.contains("## Section Geometry"));
        assert!(markdown.contains("## Flexure"));
        assert!(markdown.contains("## Strain Compatibility"));
        assert!(markdown.contains("## Shear"));

        assert!(markdown.contains("### Stress Block Depth"));
        assert!(markdown.contains("`Po = 0.85*f'c*(Ag - Ast) + fy*Ast`"));
        assert!(markdown.contains("ACI 318-19"));
        assert!(markdown.contains("rc_core/src/equations/strain_compat.rs"));

        assert!(markdown.contains("**Total Equations:** 19"));
        assert!(markdown.contains("**Categories:** 5"));
        assert!(markdown.contains("## How to Audit"));
    }
}
