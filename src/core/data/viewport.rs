use crate::core::data::complex::Complex;

/// The mathematical view state: which complex point the view is centered
/// on, how far it is zoomed, and the two pan accumulators.
///
/// `offset` holds pixel-space drag distance that has not yet been committed
/// by a zoom change. `center_bias` holds pan that has been folded into
/// viewport-fraction units, which stay representable at any zoom depth.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub look_at: Complex,
    pub zoom: f64,
    pub offset: [f64; 2],
    pub center_bias: [f64; 2],
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            look_at: Complex::new(-0.5, 0.0),
            zoom: 1.0,
            offset: [0.0, 0.0],
            center_bias: [0.0, 0.0],
        }
    }
}
