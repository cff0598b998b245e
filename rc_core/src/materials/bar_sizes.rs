//! Standard Reinforcing Bar Sizes
//!
//! Nominal dimensions of deformed bars per ACI 318-19 Appendix A
//! (ASTM A615 / A706 inch-pound designations).
//!
//! | Bar  | Diameter (in) | Area (in²) | Weight (lb/ft) |
//! |------|---------------|------------|----------------|
//! | #3   | 0.375         | 0.11       | 0.376          |
//! | #4   | 0.500         | 0.20       | 0.668          |
//! | #5   | 0.625         | 0.31       | 1.043          |
//! | #6   | 0.750         | 0.44       | 1.503          |
//! | #7   | 0.875         | 0.60       | 2.044          |
//! | #8   | 1.000         | 0.79       | 2.670          |
//! | #9   | 1.128         | 1.00       | 3.400          |
//! | #10  | 1.270         | 1.27       | 4.303          |
//! | #11  | 1.410         | 1.56       | 5.313          |
//! | #14  | 1.693         | 2.25       | 7.650          |
//! | #18  | 2.257         | 4.00       | 13.600         |

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CalcError;
use crate::units::{Inches, SqIn};

/// Standard deformed bar designation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarSize {
    #[serde(rename = "#3")]
    No3,
    #[serde(rename = "#4")]
    No4,
    #[serde(rename = "#5")]
    No5,
    #[serde(rename = "#6")]
    No6,
    #[serde(rename = "#7")]
    No7,
    #[serde(rename = "#8")]
    No8,
    #[serde(rename = "#9")]
    No9,
    #[serde(rename = "#10")]
    No10,
    #[serde(rename = "#11")]
    No11,
    #[serde(rename = "#14")]
    No14,
    #[serde(rename = "#18")]
    No18,
}

impl BarSize {
    /// All bar sizes, smallest first
    pub const ALL: [BarSize; 11] = [
        BarSize::No3,
        BarSize::No4,
        BarSize::No5,
        BarSize::No6,
        BarSize::No7,
        BarSize::No8,
        BarSize::No9,
        BarSize::No10,
        BarSize::No11,
        BarSize::No14,
        BarSize::No18,
    ];

    /// Bar number (eighths of an inch for #3 through #8)
    pub fn number(&self) -> u8 {
        match self {
            BarSize::No3 => 3,
            BarSize::No4 => 4,
            BarSize::No5 => 5,
            BarSize::No6 => 6,
            BarSize::No7 => 7,
            BarSize::No8 => 8,
            BarSize::No9 => 9,
            BarSize::No10 => 10,
            BarSize::No11 => 11,
            BarSize::No14 => 14,
            BarSize::No18 => 18,
        }
    }

    /// Look up a bar by its number
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|bar| bar.number() == number)
    }

    /// Nominal diameter
    pub fn diameter(&self) -> Inches {
        Inches(match self {
            BarSize::No3 => 0.375,
            BarSize::No4 => 0.500,
            BarSize::No5 => 0.625,
            BarSize::No6 => 0.750,
            BarSize::No7 => 0.875,
            BarSize::No8 => 1.000,
            BarSize::No9 => 1.128,
            BarSize::No10 => 1.270,
            BarSize::No11 => 1.410,
            BarSize::No14 => 1.693,
            BarSize::No18 => 2.257,
        })
    }

    /// Nominal cross-sectional area
    pub fn area(&self) -> SqIn {
        SqIn(match self {
            BarSize::No3 => 0.11,
            BarSize::No4 => 0.20,
            BarSize::No5 => 0.31,
            BarSize::No6 => 0.44,
            BarSize::No7 => 0.60,
            BarSize::No8 => 0.79,
            BarSize::No9 => 1.00,
            BarSize::No10 => 1.27,
            BarSize::No11 => 1.56,
            BarSize::No14 => 2.25,
            BarSize::No18 => 4.00,
        })
    }

    /// Nominal weight (lb/ft)
    pub fn weight_plf(&self) -> f64 {
        match self {
            BarSize::No3 => 0.376,
            BarSize::No4 => 0.668,
            BarSize::No5 => 1.043,
            BarSize::No6 => 1.503,
            BarSize::No7 => 2.044,
            BarSize::No8 => 2.67,
            BarSize::No9 => 3.4,
            BarSize::No10 => 4.303,
            BarSize::No11 => 5.313,
            BarSize::No14 => 7.65,
            BarSize::No18 => 13.6,
        }
    }
}

impl std::fmt::Display for BarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.number())
    }
}

impl FromStr for BarSize {
    type Err = CalcError;

    /// Parse "#8", "8" or "No8"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("No"))
            .unwrap_or(trimmed);
        digits
            .parse::<u8>()
            .ok()
            .and_then(BarSize::from_number)
            .ok_or_else(|| CalcError::invalid_input("bar", s, "Unknown bar size (expected #3-#11, #14 or #18)"))
    }
}
