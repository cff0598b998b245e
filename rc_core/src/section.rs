//! # Section Geometry
//!
//! Rectangular reinforced-concrete sections and the placement of their
//! reinforcement layers.
//!
//! ```text
//!    compression face (distance = 0)
//!    ┌────────────────┐ ─┬─
//!    │  ●   ●   ●   ● │  │ ← layer 0 at cover + db/2
//!    │                │  │
//!    │  ●           ● │  │ ← interior layers, evenly spaced
//!    │                │  h
//!    │  ●           ● │  │
//!    │                │  │
//!    │  ●   ●   ●   ● │  │ ← layer n-1 at h − cover − db/2
//!    └────────────────┘ ─┴─
//!            bw
//! ```
//!
//! Layers are always ordered by increasing distance from the compression
//! face. Moment arms are measured from mid-depth (`h/2`), positive for a
//! layer above mid-depth.

use serde::{Deserialize, Serialize};

use crate::equations::strain_compat::{maximum_compression, pm_point, PmPoint};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{BarSize, ConcreteMaterial, RebarMaterial};

/// One row of reinforcement: depth from the compression face and steel area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementLayer {
    /// Distance from the extreme compression fiber (in)
    pub distance_in: f64,
    /// Total steel area in the layer (in²)
    pub area_in2: f64,
}

impl ReinforcementLayer {
    pub fn new(distance_in: f64, area_in2: f64) -> Self {
        ReinforcementLayer {
            distance_in,
            area_in2,
        }
    }
}

/// Evenly spaced layer depths across a section.
///
/// Produces `layer_count` distances linearly interpolated from
/// `clear_cover + bar_diameter/2` to `section_height − clear_cover − bar_diameter/2`,
/// both ends inclusive.
///
/// A single layer is placed at the midpoint of that span (`h/2`), so a
/// one-layer section stays symmetric about mid-depth.
///
/// # Errors
///
/// `InvalidInput` if `layer_count` is zero, a dimension is non-positive,
/// the cover is negative, or the section is too shallow for the cover and bar.
///
/// # Example
/// ```rust
/// use rc_core::section::layer_distances;
///
/// // 4 layers of #8 bars, 1.5" cover, 24" deep
/// let d = layer_distances(4, 1.0, 1.5, 24.0).unwrap();
/// assert_eq!(d.len(), 4);
/// assert_eq!(d[0], 2.0);
/// assert_eq!(d[3], 22.0);
/// assert!((d[1] - 8.6667).abs() < 1e-4);
/// ```
pub fn layer_distances(
    layer_count: usize,
    bar_diameter: f64,
    clear_cover: f64,
    section_height: f64,
) -> CalcResult<Vec<f64>> {
    if layer_count == 0 {
        return Err(CalcError::invalid_input(
            "layer_count",
            "0",
            "At least one reinforcement layer is required",
        ));
    }
    if !(bar_diameter > 0.0) {
        return Err(CalcError::invalid_input(
            "bar_diameter",
            bar_diameter.to_string(),
            "Bar diameter must be positive",
        ));
    }
    if !(clear_cover >= 0.0) {
        return Err(CalcError::invalid_input(
            "clear_cover",
            clear_cover.to_string(),
            "Clear cover cannot be negative",
        ));
    }
    if !(section_height > 0.0) {
        return Err(CalcError::invalid_input(
            "section_height",
            section_height.to_string(),
            "Section height must be positive",
        ));
    }

    let start = clear_cover + bar_diameter / 2.0;
    let end = section_height - clear_cover - bar_diameter / 2.0;
    let span = end - start;

    if span < 0.0 || (layer_count > 1 && span == 0.0) {
        return Err(CalcError::invalid_input(
            "section_height",
            section_height.to_string(),
            format!(
                "Section is too shallow for {} layer(s) with {} in cover and {} in bars",
                layer_count, clear_cover, bar_diameter
            ),
        ));
    }

    if layer_count == 1 {
        return Ok(vec![(start + end) / 2.0]);
    }

    let step = span / (layer_count - 1) as f64;
    Ok((0..layer_count)
        .map(|i| if i == layer_count - 1 { end } else { start + step * i as f64 })
        .collect())
}

/// Rectangular reinforced-concrete section with validated reinforcement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RcSection {
    bw_in: f64,
    h_in: f64,
    layers: Vec<ReinforcementLayer>,
}

impl RcSection {
    /// Build a section from explicit layers.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for non-positive width or height
    /// - `InvalidGeometry` if there are no layers, a distance is outside
    ///   `(0, h)`, distances are not strictly increasing, an area is negative,
    ///   or the total steel area exceeds `bw·h`
    pub fn new(bw_in: f64, h_in: f64, layers: Vec<ReinforcementLayer>) -> CalcResult<Self> {
        if !(bw_in > 0.0) {
            return Err(CalcError::invalid_input("bw_in", bw_in.to_string(), "Width must be positive"));
        }
        if !(h_in > 0.0) {
            return Err(CalcError::invalid_input("h_in", h_in.to_string(), "Height must be positive"));
        }
        if layers.is_empty() {
            return Err(CalcError::invalid_geometry("Section has no reinforcement layers"));
        }

        for (i, layer) in layers.iter().enumerate() {
            if !(layer.distance_in > 0.0 && layer.distance_in < h_in) {
                return Err(CalcError::invalid_geometry(format!(
                    "Layer {} at {} in lies outside the section depth (0, {})",
                    i, layer.distance_in, h_in
                )));
            }
            if !(layer.area_in2 >= 0.0) {
                return Err(CalcError::invalid_geometry(format!(
                    "Layer {} has negative steel area {} in²",
                    i, layer.area_in2
                )));
            }
        }
        if let Some(i) = layers
            .windows(2)
            .position(|pair| pair[1].distance_in <= pair[0].distance_in)
        {
            return Err(CalcError::invalid_geometry(format!(
                "Layer distances must be strictly increasing (layer {} at {} in, layer {} at {} in)",
                i,
                layers[i].distance_in,
                i + 1,
                layers[i + 1].distance_in
            )));
        }

        let section = RcSection { bw_in, h_in, layers };
        if section.steel_area() > section.gross_area() {
            return Err(CalcError::invalid_geometry(format!(
                "Steel area {} in² exceeds gross area {} in²",
                section.steel_area(),
                section.gross_area()
            )));
        }
        log::debug!(
            "section {}x{} in with {} layers, As = {:.3} in²",
            bw_in,
            h_in,
            section.layers.len(),
            section.steel_area()
        );
        Ok(section)
    }

    /// Build a section from parallel distance and area slices.
    pub fn from_distances(bw_in: f64, h_in: f64, distances: &[f64], areas: &[f64]) -> CalcResult<Self> {
        if distances.len() != areas.len() {
            return Err(CalcError::invalid_geometry(format!(
                "{} layer distances but {} layer areas",
                distances.len(),
                areas.len()
            )));
        }
        let layers = distances
            .iter()
            .zip(areas)
            .map(|(&d, &a)| ReinforcementLayer::new(d, a))
            .collect();
        Self::new(bw_in, h_in, layers)
    }

    /// Build a section with `layer_count` evenly spaced layers of
    /// `bars_per_layer` bars each (see [`layer_distances`]).
    ///
    /// # Example
    /// ```rust
    /// use rc_core::materials::BarSize;
    /// use rc_core::section::RcSection;
    ///
    /// // 16x16 column, 3 layers of 3 #9
    /// let section = RcSection::symmetric(16.0, 16.0, 3, BarSize::No9, 1.5, 3).unwrap();
    /// assert!((section.steel_area() - 9.0).abs() < 1e-12);
    /// ```
    pub fn symmetric(
        bw_in: f64,
        h_in: f64,
        layer_count: usize,
        bar: BarSize,
        clear_cover_in: f64,
        bars_per_layer: u32,
    ) -> CalcResult<Self> {
        if bars_per_layer == 0 {
            return Err(CalcError::invalid_input(
                "bars_per_layer",
                "0",
                "Each layer needs at least one bar",
            ));
        }
        let distances = layer_distances(layer_count, bar.diameter().value(), clear_cover_in, h_in)?;
        let area = bar.area().value() * bars_per_layer as f64;
        let layers = distances
            .into_iter()
            .map(|d| ReinforcementLayer::new(d, area))
            .collect();
        Self::new(bw_in, h_in, layers)
    }

    /// Section width bw (in)
    pub fn width(&self) -> f64 {
        self.bw_in
    }

    /// Section height h (in)
    pub fn height(&self) -> f64 {
        self.h_in
    }

    /// Reinforcement layers, ordered from the compression face
    pub fn layers(&self) -> &[ReinforcementLayer] {
        &self.layers
    }

    /// Gross area Ag = bw·h (in²)
    pub fn gross_area(&self) -> f64 {
        self.bw_in * self.h_in
    }

    /// Total steel area ΣAs (in²)
    pub fn steel_area(&self) -> f64 {
        self.layers.iter().map(|l| l.area_in2).sum()
    }

    /// Reinforcement ratio ρg = ΣAs/Ag
    pub fn steel_ratio(&self) -> f64 {
        self.steel_area() / self.gross_area()
    }

    /// Depth of the layer farthest from the compression face, dt (in)
    pub fn extreme_tension_depth(&self) -> f64 {
        self.layers.last().map_or(0.0, |l| l.distance_in)
    }

    /// One point of the P-M interaction diagram for neutral axis depth `c`
    pub fn pm_point(&self, c: f64, concrete: &ConcreteMaterial, rebar: &RebarMaterial) -> PmPoint {
        pm_point(c, self.bw_in, self.h_in, &self.layers, concrete, rebar)
    }

    /// Upper-bound axial capacity of the section
    pub fn maximum_compression(&self, concrete: &ConcreteMaterial, rebar: &RebarMaterial) -> f64 {
        maximum_compression(self.gross_area(), &self.layers, concrete, rebar)
    }
}
