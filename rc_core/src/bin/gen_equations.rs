//! Write EQUATIONS.md from the equation registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations
//! ```
//!
//! Run from the workspace root; the file lands at `EQUATIONS.md`.

use std::fs;
use std::path::Path;

use rc_core::equations::generate_equations_markdown;

fn main() {
    let markdown = generate_equations_markdown();
    let output_path = Path::new("EQUATIONS.md");

    match fs::write(output_path, &markdown) {
        Ok(()) => println!("Wrote {} bytes to {}", markdown.len(), output_path.display()),
        Err(e) => {
            eprintln!("Error writing {}: {}", output_path.display(), e);
            std::process::exit(1);
        }
    }
}
