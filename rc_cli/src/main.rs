//! # rc_cli
//!
//! Command-line driver for rc_core. Reads a section or beam description
//! from TOML and prints a report table or the JSON result.
//!
//! ```text
//! rc_cli interaction column.toml --steps 40
//! rc_cli beam beam.toml --json
//! rc_cli --settings seismic.toml beam beam.toml
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace` for every sweep point) to see the
//! calculation log.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

use rc_core::calculations::beam::{self, RcBeamInput, RcBeamResult};
use rc_core::calculations::interaction::{self, InteractionInput, InteractionResult};
use rc_core::settings::DesignSettings;
use rc_core::units::{InLb, KipFt};

#[derive(Debug, Parser)]
#[command(name = "rc_cli", version, about = "Reinforced concrete section calculations per ACI 318")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Design settings file (TOML); defaults apply to anything it omits
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Print the result as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// P-M interaction diagram by strain compatibility
    Interaction {
        /// Section description (TOML)
        file: PathBuf,

        /// Number of neutral axis depths in the sweep
        #[arg(long)]
        steps: Option<usize>,
    },
    /// Flexure and shear check of a singly reinforced beam
    Beam {
        /// Beam description (TOML)
        file: PathBuf,
    },
}

fn parse_toml<T: DeserializeOwned>(text: &str, origin: &Path) -> Result<T> {
    toml::from_str(text).with_context(|| format!("Failed to parse {}", origin.display()))
}

fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    parse_toml(&text, path)
}

fn load_settings(path: Option<&Path>) -> Result<DesignSettings> {
    let settings = match path {
        Some(path) => load_toml(path)?,
        None => DesignSettings::default(),
    };
    settings.validate().context("Invalid design settings")?;
    log::debug!("settings: {:?}", settings);
    Ok(settings)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let settings = load_settings(cli.settings.as_deref())?;

    match cli.command {
        Command::Interaction { file, steps } => {
            let mut input: InteractionInput = load_toml(&file)?;
            if steps.is_some() {
                input.steps = steps;
            }
            let result = interaction::calculate(&input, &settings)
                .with_context(|| format!("Interaction diagram '{}' failed", input.label))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_interaction(&input, &result, &settings);
            }
        }
        Command::Beam { file } => {
            let input: RcBeamInput = load_toml(&file)?;
            let result =
                beam::calculate(&input, &settings).with_context(|| format!("Beam check '{}' failed", input.label))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_beam(&input, &result, &settings);
            }
        }
    }
    Ok(())
}

fn rule() {
    println!("═══════════════════════════════════════════════════════════════════");
}

fn kip_ft(inlb: f64) -> f64 {
    KipFt::from(InLb(inlb)).value()
}

fn print_interaction(input: &InteractionInput, result: &InteractionResult, settings: &DesignSettings) {
    rule();
    println!("  P-M INTERACTION: {}  ({})", result.label, settings.code);
    rule();
    println!();
    println!("Section:");
    println!("  b x h:    {:.2}\" x {:.2}\"", input.width_in, input.height_in);
    println!("  f'c:      {:.0} psi   (β1 = {:.3})", result.fc_psi, result.beta1);
    println!("  fy:       {:.0} psi", input.fy_psi);
    println!(
        "  Ag = {:.1} in²   ΣAs = {:.2} in²   ρg = {:.2}%",
        result.gross_area_in2,
        result.steel_area_in2,
        100.0 * result.steel_area_in2 / result.gross_area_in2
    );
    println!();
    println!("Layers:");
    for (i, layer) in result.layers.iter().enumerate() {
        println!("  {:>2}: d = {:>7.3} in   As = {:>6.3} in²", i + 1, layer.distance_in, layer.area_in2);
    }
    println!();
    println!(
        "  {:>9} {:>9} {:>10} {:>10} {:>6} {:>10} {:>10}",
        "c (in)", "Z", "Pn (k)", "Mn (k-ft)", "φ", "φPn (k)", "φMn (k-ft)"
    );
    for point in &result.points {
        let c = if point.c_in.is_finite() {
            format!("{:.3}", point.c_in)
        } else {
            "∞".to_string()
        };
        println!(
            "  {:>9} {:>9.3} {:>10.1} {:>10.1} {:>6.3} {:>10.1} {:>10.1}",
            c,
            point.z,
            point.axial_kips().value(),
            point.moment_kip_ft().value(),
            point.phi,
            point.design_axial_lb() / 1000.0,
            kip_ft(point.design_moment_inlb()),
        );
    }
    println!();
    println!("Capacities:");
    println!("  Po  = {:>10.1} k", result.maximum_compression_lb / 1000.0);
    println!("  Pnt = {:>10.1} k", result.pure_tension_lb / 1000.0);
    println!(
        "  Balanced: c = {:.3} in, Pb = {:.1} k, Mb = {:.1} k-ft",
        result.balanced.c_in,
        result.balanced.axial_kips().value(),
        result.balanced.moment_kip_ft().value()
    );
    rule();
}

fn print_beam(input: &RcBeamInput, result: &RcBeamResult, settings: &DesignSettings) {
    rule();
    println!("  RC BEAM CHECK: {}  ({})", input.label, settings.code);
    rule();
    println!();
    println!("Input:");
    println!(
        "  bw x h:   {:.2}\" x {:.2}\"   d = {:.2}\"",
        input.width_in, input.height_in, input.effective_depth_in
    );
    println!("  As:       {:.3} in²   ρ = {:.4}", input.tension_steel_in2, input.steel_ratio());
    println!("  f'c:      {:.0} psi   fy = {:.0} psi   λ = {:.2}", result.fc_psi, input.fy_psi, input.lambda);
    println!();
    println!("Flexure:");
    println!("  a  = {:.3} in   c = {:.3} in   β1 = {:.3}", result.stress_block_depth_in, result.neutral_axis_depth_in, result.beta1);
    println!(
        "  εs = {:.5}   fs = {:.0} psi {}",
        result.steel_strain,
        result.steel_stress_psi,
        if result.steel_yields { "(yields)" } else { "(elastic)" }
    );
    println!(
        "  εt = {:.5}   φ = {:.3} {}",
        result.net_tensile_strain,
        result.phi_flexure,
        if result.tension_controlled { "(tension-controlled)" } else { "(transition/compression)" }
    );
    println!("  Mn  = {:.1} k-ft", result.nominal_moment_kip_ft());
    println!("  φMn = {:.1} k-ft", result.design_moment_kip_ft());
    println!();
    println!("Shear:");
    println!("  Vu   = {:.0} lb   Nu = {:.0} lb", input.factored_shear_lb, input.axial_load_lb);
    println!("  Vc   = {:.0} lb   φ = {:.2}   φVc = {:.0} lb", result.concrete_shear_lb, result.phi_shear, result.design_concrete_shear_lb);
    println!("  Av/s = {:.4} in²/in", result.required_av_over_s.max(0.0));
    println!(
        "  Stirrups: {}",
        if result.stirrups_required {
            "required for strength"
        } else if result.minimum_stirrups_required {
            "minimum (Vu > φVc/2)"
        } else {
            "not required"
        }
    );
    rule();
}
