use crate::core::data::colour_config::ColourConfig;
use crate::core::data::rgba::Rgba;

const APPROACH: f64 = 2.0;
const THRESHOLD: f64 = 0.15;

/// Continuous brightness for a boundary pixel that escaped after
/// `iterations` steps out of `budget`.
///
/// The curve peaks around `iterations ≈ THRESHOLD * budget` and goes
/// negative past it; values outside `[0, 1]` are kept as-is and only
/// clamped when the colour is quantized for display.
#[must_use]
pub fn boundary_intensity(iterations: u32, budget: u32) -> f64 {
    let m = f64::from(iterations);
    -(APPROACH * m) / (m - THRESHOLD * f64::from(budget))
}

/// Maps an iteration count to a displayed colour.
///
/// Pixels that exhaust the budget are treated as set interior and get the
/// configured interior colour; everything else scales the boundary colour
/// by the intensity curve.
#[must_use]
pub fn colour_for(iterations: u32, budget: u32, colours: &ColourConfig) -> Rgba {
    if iterations >= budget {
        return colours.interior;
    }

    colours.boundary.scaled(boundary_intensity(iterations, budget))
}
