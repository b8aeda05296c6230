use crate::core::data::surface::RenderSurface;
use crate::core::data::viewport::Viewport;

/// Owns the mutable view parameters and the draw gate, and applies the
/// gesture transition rules.
///
/// All mutations happen on the event thread; renders only ever see
/// [`Viewport`] copies taken between mutations, so a frame observes either
/// the pre- or the post-gesture state in full, never a mix.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    viewport: Viewport,
    surface: RenderSurface,
    continuous_draw: bool,
    redraw_forced: bool,
}

impl NavigationState {
    #[must_use]
    pub fn new(surface: RenderSurface) -> Self {
        Self {
            viewport: Viewport::default(),
            surface,
            continuous_draw: false,
            redraw_forced: true,
        }
    }

    /// Accumulates a drag delta, in pixels, into the pending offset.
    ///
    /// Unbounded by design: the mapper interprets the offset relative to
    /// the current zoom, so any distance is a valid view.
    pub fn pan(&mut self, dx_px: f64, dy_px: f64) {
        self.viewport.offset[0] += dx_px;
        self.viewport.offset[1] += dy_px;
        self.redraw_forced = true;
    }

    /// Commits a new zoom factor.
    ///
    /// The pending pixel offset is first folded into the center bias at the
    /// *previous* zoom (`center_bias += offset / zoom`), converting the drag
    /// into viewport-fraction units that survive any zoom depth; the offset
    /// then restarts from zero at the new scale. Non-finite or non-positive
    /// zooms are rejected without touching any state, and the previous zoom
    /// stays in effect.
    pub fn set_zoom(&mut self, new_zoom: f64) -> bool {
        if !new_zoom.is_finite() || new_zoom <= 0.0 {
            return false;
        }

        self.viewport.center_bias[0] += self.viewport.offset[0] / self.viewport.zoom;
        self.viewport.center_bias[1] += self.viewport.offset[1] / self.viewport.zoom;
        self.viewport.offset = [0.0, 0.0];
        self.viewport.zoom = new_zoom;
        self.redraw_forced = true;

        true
    }

    /// Records the new surface dimensions. The aspect ratio feeds the
    /// bounding-box computation, so this always forces a redraw.
    pub fn set_viewport_size(&mut self, width_px: u32, height_px: u32) {
        self.surface = RenderSurface::new(width_px, height_px);
        self.redraw_forced = true;
    }

    pub fn enable_continuous_draw(&mut self) {
        self.continuous_draw = true;
    }

    pub fn disable_continuous_draw(&mut self) {
        self.continuous_draw = false;
    }

    /// Reports whether the next tick should redraw, consuming any one-shot
    /// force. While a drag is active every tick redraws.
    pub fn take_redraw(&mut self) -> bool {
        let due = self.continuous_draw || self.redraw_forced;
        self.redraw_forced = false;
        due
    }

    pub fn reset_view(&mut self) {
        self.viewport = Viewport::default();
        self.redraw_forced = true;
    }

    /// Forces the next tick to redraw. Used by state-changing operations
    /// that live outside this component (colour or budget edits).
    pub fn force_redraw(&mut self) {
        self.redraw_forced = true;
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn surface(&self) -> RenderSurface {
        self.surface
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.continuous_draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::util::pixel_to_complex::pixel_to_complex;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn state() -> NavigationState {
        let mut nav = NavigationState::new(RenderSurface::new(800, 450));
        let _ = nav.take_redraw(); // discard the initial force
        nav
    }

    #[test]
    fn new_state_forces_an_initial_draw() {
        let mut nav = NavigationState::new(RenderSurface::new(800, 450));

        assert!(nav.take_redraw());
        assert!(!nav.take_redraw());
    }

    #[test]
    fn pan_accumulates_offset_and_marks_dirty() {
        let mut nav = state();

        nav.pan(10.0, -4.0);
        nav.pan(2.5, 1.0);

        assert_eq!(nav.viewport().offset, [12.5, -3.0]);
        assert!(nav.take_redraw());
    }

    #[test]
    fn pan_round_trip_restores_offset() {
        let mut nav = state();

        nav.pan(33.0, -21.0);
        nav.pan(-33.0, 21.0);

        assert_eq!(nav.viewport().offset, [0.0, 0.0]);
    }

    #[test]
    fn set_zoom_folds_offset_into_center_bias() {
        let mut nav = state();

        nav.pan(100.0, 0.0);
        assert!(nav.set_zoom(2.0));

        let viewport = nav.viewport();
        assert_eq!(viewport.center_bias, [100.0, 0.0]);
        assert_eq!(viewport.offset, [0.0, 0.0]);
        assert_eq!(viewport.zoom, 2.0);
    }

    #[test]
    fn set_zoom_folds_at_the_previous_zoom_level() {
        let mut nav = state();

        assert!(nav.set_zoom(4.0));
        nav.pan(100.0, -40.0);
        assert!(nav.set_zoom(8.0));

        assert_eq!(nav.viewport().center_bias, [25.0, -10.0]);
    }

    #[test]
    fn set_zoom_accumulates_bias_across_commits() {
        let mut nav = state();

        nav.pan(50.0, 0.0);
        assert!(nav.set_zoom(2.0));
        nav.pan(30.0, 0.0);
        assert!(nav.set_zoom(5.0));

        assert_eq!(nav.viewport().center_bias, [50.0 + 15.0, 0.0]);
    }

    #[test]
    fn set_zoom_rejects_non_positive_values() {
        let mut nav = state();
        nav.pan(10.0, 10.0);

        assert!(!nav.set_zoom(0.0));
        assert!(!nav.set_zoom(-3.0));

        let viewport = nav.viewport();
        assert_eq!(viewport.zoom, 1.0);
        assert_eq!(viewport.offset, [10.0, 10.0]);
        assert_eq!(viewport.center_bias, [0.0, 0.0]);
    }

    #[test]
    fn set_zoom_rejects_non_finite_values() {
        let mut nav = state();

        assert!(!nav.set_zoom(f64::NAN));
        assert!(!nav.set_zoom(f64::INFINITY));

        assert_eq!(nav.viewport().zoom, 1.0);
    }

    #[test]
    fn set_zoom_forces_a_redraw() {
        let mut nav = state();

        assert!(nav.set_zoom(3.0));

        assert!(nav.take_redraw());
    }

    #[test]
    fn repeated_zoom_commits_do_not_recenter() {
        // Zooming twice with no pan in between must keep look_at and the
        // screen-center mapping fixed.
        let mut nav = state();
        let surface = nav.surface();

        let before = pixel_to_complex(400.0, 225.0, &nav.viewport(), surface);
        assert!(nav.set_zoom(3.0));
        let mid = pixel_to_complex(400.0, 225.0, &nav.viewport(), surface);
        assert!(nav.set_zoom(11.0));
        let after = pixel_to_complex(400.0, 225.0, &nav.viewport(), surface);

        assert_eq!(nav.viewport().look_at.re, -0.5);
        assert_eq!(nav.viewport().look_at.im, 0.0);
        assert_approx_eq(mid.re, before.re);
        assert_approx_eq(mid.im, before.im);
        assert_approx_eq(after.re, before.re);
        assert_approx_eq(after.im, before.im);
    }

    #[test]
    fn zoom_commit_preserves_the_panned_view() {
        // The point shown at a pixel just before a zoom commit must still be
        // shown at that pixel just after (the box then contracts around it).
        let mut nav = state();
        let surface = nav.surface();

        nav.pan(137.0, -58.0);
        let before = pixel_to_complex(400.0, 225.0, &nav.viewport(), surface);
        assert!(nav.set_zoom(nav.viewport().zoom));
        let after = pixel_to_complex(400.0, 225.0, &nav.viewport(), surface);

        assert_approx_eq(after.re, before.re);
        assert_approx_eq(after.im, before.im);
    }

    #[test]
    fn deep_zoom_keeps_committed_pans_stable() {
        // Folded bias is zoom-invariant: commit a pan, then dive several
        // orders of magnitude and return; the mapping must not drift.
        let mut nav = state();
        let surface = nav.surface();

        nav.pan(100.0, 40.0);
        assert!(nav.set_zoom(1.0));
        let reference = pixel_to_complex(123.0, 321.0, &nav.viewport(), surface);

        for zoom in [1e3, 1e6, 1e9, 1.0] {
            assert!(nav.set_zoom(zoom));
        }
        let back = pixel_to_complex(123.0, 321.0, &nav.viewport(), surface);

        assert_approx_eq(back.re, reference.re);
        assert_approx_eq(back.im, reference.im);
    }

    #[test]
    fn resize_updates_surface_and_forces_redraw() {
        let mut nav = state();

        nav.set_viewport_size(1024, 768);

        assert_eq!(nav.surface(), RenderSurface::new(1024, 768));
        assert!(nav.take_redraw());
    }

    #[test]
    fn resize_to_zero_area_is_representable() {
        let mut nav = state();

        nav.set_viewport_size(0, 450);

        assert!(nav.surface().is_empty());
    }

    #[test]
    fn continuous_draw_redraws_every_tick() {
        let mut nav = state();

        nav.enable_continuous_draw();

        assert!(nav.take_redraw());
        assert!(nav.take_redraw());

        nav.disable_continuous_draw();

        assert!(!nav.take_redraw());
    }

    #[test]
    fn drag_gate_follows_pointer_state() {
        let mut nav = state();
        assert!(!nav.is_dragging());

        nav.enable_continuous_draw();
        assert!(nav.is_dragging());

        nav.disable_continuous_draw();
        assert!(!nav.is_dragging());
    }

    #[test]
    fn force_redraw_is_consumed_once() {
        let mut nav = state();

        nav.force_redraw();

        assert!(nav.take_redraw());
        assert!(!nav.take_redraw());
    }

    #[test]
    fn reset_view_restores_defaults_and_forces_redraw() {
        let mut nav = state();
        nav.pan(10.0, 20.0);
        assert!(nav.set_zoom(64.0));
        let _ = nav.take_redraw();

        nav.reset_view();

        assert_eq!(nav.viewport(), Viewport::default());
        assert!(nav.take_redraw());
    }
}
