use crate::core::data::complex::Complex;

/// Default cap on the per-pixel iteration count.
pub const DEFAULT_ITERATION_BUDGET: u32 = 250;

/// Iterates `z ← z² + c` from `z₀ = 0` and returns the iteration index at
/// which the orbit escapes the radius-2 circle, or `budget` if it never
/// does.
///
/// The squares of both components are cached across iterations, and the
/// imaginary component is updated before the real one, both from the
/// previous iterates. Reordering either changes the numerical trajectory,
/// so this must stay exactly as written.
#[must_use]
pub fn escape_iterations(c: Complex, budget: u32) -> u32 {
    let mut a = 0.0_f64;
    let mut b = 0.0_f64;
    let mut a2 = 0.0_f64;
    let mut b2 = 0.0_f64;

    for iteration in 0..budget {
        if a2 + b2 > 4.0 {
            return iteration;
        }
        b = 2.0 * a * b + c.im;
        a = a2 - b2 + c.re;
        a2 = a * a;
        b2 = b * b;
    }

    budget
}
