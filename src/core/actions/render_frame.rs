use rayon::prelude::*;

use crate::core::actions::ports::pixel_evaluator::PixelEvaluator;
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
use crate::core::data::surface::RenderSurface;
use crate::core::data::viewport::Viewport;

/// Renders the full pixel grid for one viewport snapshot.
///
/// Rows are evaluated in parallel with rayon's work-stealing scheduler;
/// pixels share no mutable state, so ordering between them is irrelevant.
/// The byte buffer is top-down while the evaluator's pixel space is
/// bottom-up, so the row index is flipped when sampling.
pub fn render_frame<E>(
    viewport: &Viewport,
    surface: RenderSurface,
    evaluator: &E,
) -> Result<FrameBuffer, FrameBufferError>
where
    E: PixelEvaluator + Sync,
{
    if surface.is_empty() {
        return Ok(FrameBuffer::new(surface));
    }

    let rows: Vec<Vec<u8>> = (0..surface.height_px)
        .into_par_iter()
        .map(|row| {
            let py = f64::from(surface.height_px - 1 - row);
            let mut row_bytes = Vec::with_capacity(surface.width_px as usize * 4);

            for px in 0..surface.width_px {
                let colour = evaluator.evaluate(f64::from(px), py, viewport, surface);
                row_bytes.extend_from_slice(&colour.to_display_bytes());
            }

            row_bytes
        })
        .collect();

    FrameBuffer::from_data(surface, rows.concat())
}
