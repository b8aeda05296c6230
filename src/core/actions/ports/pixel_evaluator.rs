use crate::core::data::rgba::Rgba;
use crate::core::data::surface::RenderSurface;
use crate::core::data::viewport::Viewport;

/// Strategy for turning one pixel of a viewport into a colour.
///
/// The CPU implementation walks the escape-time kernel directly; a GPU
/// backend would satisfy the same seam with a compiled kernel. Pixel
/// coordinates are bottom-up, matching the coordinate mapper.
pub trait PixelEvaluator {
    fn evaluate(&self, px: f64, py: f64, viewport: &Viewport, surface: RenderSurface) -> Rgba;
}
