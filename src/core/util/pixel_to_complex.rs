use crate::core::data::complex::Complex;
use crate::core::data::surface::RenderSurface;
use crate::core::data::viewport::Viewport;

/// Vertical extent, in complex-plane units, of the unzoomed view. Chosen so
/// the default viewport frames the whole set with a little margin.
pub const REFERENCE_FRAME_HEIGHT: f64 = 2.25;

/// Maps a pixel coordinate to the complex-plane point it samples.
///
/// Pixel coordinates are bottom-up: `py = 0` is the bottom row, so the
/// imaginary axis increases towards the top of the screen. The bounding box
/// is the reference frame scaled by `1/zoom`, shifted by the pending drag
/// offset (interpreted at the current zoom) and by the accumulated center
/// bias (interpreted at unit zoom), then translated to `look_at`.
///
/// Callers guarantee a nonzero surface.
#[must_use]
pub fn pixel_to_complex(
    px: f64,
    py: f64,
    viewport: &Viewport,
    surface: RenderSurface,
) -> Complex {
    let ratio = surface.aspect_ratio();
    let height = REFERENCE_FRAME_HEIGHT;
    let width = height * ratio;
    let width_z = width / viewport.zoom;
    let height_z = height / viewport.zoom;

    let real = (px * width_z
        + viewport.offset[0] * width_z
        + viewport.center_bias[0] * width)
        / f64::from(surface.width_px)
        + viewport.look_at.re
        - width_z / 2.0;
    let imag = (py * height_z
        + viewport.offset[1] * height_z
        + viewport.center_bias[1] * height)
        / f64::from(surface.height_px)
        + viewport.look_at.im
        - height_z / 2.0;

    Complex { re: real, im: imag }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    #[test]
    fn center_pixel_of_default_view_maps_to_look_at() {
        let surface = RenderSurface::new(800, 450);
        let viewport = Viewport::default();

        let point = pixel_to_complex(400.0, 225.0, &viewport, surface);

        assert_approx_eq(point.re, -0.5);
        assert_approx_eq(point.im, 0.0);
    }

    #[test]
    fn default_view_spans_the_reference_frame_vertically() {
        let surface = RenderSurface::new(800, 450);
        let viewport = Viewport::default();

        let bottom = pixel_to_complex(0.0, 0.0, &viewport, surface);
        let top = pixel_to_complex(0.0, 450.0, &viewport, surface);

        assert_approx_eq(top.im - bottom.im, REFERENCE_FRAME_HEIGHT);
        assert_approx_eq(bottom.im, -REFERENCE_FRAME_HEIGHT / 2.0);
    }

    #[test]
    fn aspect_ratio_scales_the_horizontal_extent() {
        let surface = RenderSurface::new(800, 450);
        let viewport = Viewport::default();

        let left = pixel_to_complex(0.0, 225.0, &viewport, surface);
        let right = pixel_to_complex(800.0, 225.0, &viewport, surface);

        // 2.25 * (800/450) = 4.0
        assert_approx_eq(right.re - left.re, 4.0);
    }

    #[test]
    fn zoom_contracts_the_box_around_the_center() {
        let surface = RenderSurface::new(800, 450);
        let mut viewport = Viewport::default();

        let wide = pixel_to_complex(0.0, 0.0, &viewport, surface);
        viewport.zoom = 4.0;
        let narrow = pixel_to_complex(0.0, 0.0, &viewport, surface);
        let center = pixel_to_complex(400.0, 225.0, &viewport, surface);

        assert_approx_eq(center.re, -0.5);
        assert_approx_eq(center.im, 0.0);
        assert_approx_eq(narrow.re - center.re, (wide.re - center.re) / 4.0);
        assert_approx_eq(narrow.im - center.im, (wide.im - center.im) / 4.0);
    }

    #[test]
    fn offset_shifts_by_whole_pixels_at_current_zoom() {
        let surface = RenderSurface::new(800, 450);
        let mut viewport = Viewport::default();

        let before = pixel_to_complex(300.0, 100.0, &viewport, surface);
        viewport.offset = [50.0, -25.0];
        let after = pixel_to_complex(250.0, 125.0, &viewport, surface);

        // Shifting the box by (50, -25) pixels shows the old content at the
        // pixel (50, -25) away in the opposite direction.
        assert_approx_eq(after.re, before.re);
        assert_approx_eq(after.im, before.im);
    }

    #[test]
    fn center_bias_is_interpreted_at_unit_zoom() {
        let surface = RenderSurface::new(800, 450);
        let mut viewport = Viewport::default();
        viewport.zoom = 2.0;
        viewport.center_bias = [100.0, 0.0];

        let biased = pixel_to_complex(400.0, 225.0, &viewport, surface);

        // 100 bias pixels * (4.0 frame width / 800 px), independent of zoom.
        assert_approx_eq(biased.re, -0.5 + 100.0 * 4.0 / 800.0);
        assert_approx_eq(biased.im, 0.0);
    }

    #[test]
    fn folding_offset_into_bias_preserves_the_mapping() {
        // offset/zoom folded into center_bias must map every pixel to the
        // same point as the raw offset did.
        let surface = RenderSurface::new(640, 480);
        let zoom = 8.0;
        let offset = [37.0, -12.5];

        let raw = Viewport {
            zoom,
            offset,
            ..Viewport::default()
        };
        let folded = Viewport {
            zoom,
            offset: [0.0, 0.0],
            center_bias: [offset[0] / zoom, offset[1] / zoom],
            ..Viewport::default()
        };

        for &(px, py) in &[(0.0, 0.0), (320.0, 240.0), (639.0, 1.0)] {
            let a = pixel_to_complex(px, py, &raw, surface);
            let b = pixel_to_complex(px, py, &folded, surface);
            assert_approx_eq(a.re, b.re);
            assert_approx_eq(a.im, b.im);
        }
    }
}
