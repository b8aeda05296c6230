use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::data::colour_config::ColourConfig;
use crate::core::data::rgba::Rgba;
use crate::core::data::surface::RenderSurface;
use crate::core::escape::algorithm::DEFAULT_ITERATION_BUDGET;
use crate::core::navigation::{NavigationState, ZoomCurve, ZoomDial};

/// Which of the two configurable colours a picker edits.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColourRole {
    Interior,
    Boundary,
}

/// Everything the GUI shell mutates between frames: the navigation core,
/// the zoom dial, colours, the iteration budget, and submission tracking.
pub struct GuiAppState {
    pub nav: NavigationState,
    pub dial: ZoomDial,
    pub colours: ColourConfig,
    pub iteration_budget: u32,
    last_submitted_request: Option<RenderRequest>,
    pub latest_submitted_generation: u64,
}

impl GuiAppState {
    #[must_use]
    pub fn new(surface: RenderSurface) -> Self {
        Self {
            nav: NavigationState::new(surface),
            dial: ZoomDial::default(),
            colours: ColourConfig::default(),
            iteration_budget: DEFAULT_ITERATION_BUDGET,
            last_submitted_request: None,
            latest_submitted_generation: 0,
        }
    }

    #[must_use]
    pub fn build_render_request(&self) -> RenderRequest {
        RenderRequest {
            viewport: self.nav.viewport(),
            surface: self.nav.surface(),
            colours: self.colours,
            iteration_budget: self.iteration_budget,
        }
    }

    #[must_use]
    pub fn should_submit(&self, request: &RenderRequest) -> bool {
        self.last_submitted_request
            .as_ref()
            .is_none_or(|last| last != request)
    }

    pub fn record_submission(&mut self, request: RenderRequest, generation: u64) {
        self.last_submitted_request = Some(request);
        self.latest_submitted_generation = generation;
    }

    /// Slider input: runs the raw value through the dial's curve and
    /// commits the result.
    pub fn set_zoom_raw(&mut self, z: f64) {
        let effective = self.dial.set_raw(z);
        let _ = self.nav.set_zoom(effective);
    }

    pub fn set_zoom_curve(&mut self, curve: ZoomCurve) {
        let effective = self.dial.set_curve(curve);
        let _ = self.nav.set_zoom(effective);
    }

    pub fn apply_wheel(&mut self, delta_px: f64) {
        let effective = self.dial.wheel(delta_px);
        let _ = self.nav.set_zoom(effective);
    }

    pub fn set_colour(&mut self, role: ColourRole, colour: Rgba) {
        match role {
            ColourRole::Interior => self.colours.interior = colour,
            ColourRole::Boundary => self.colours.boundary = colour,
        }
        self.nav.force_redraw();
    }

    pub fn set_iteration_budget(&mut self, budget: u32) {
        self.iteration_budget = budget;
        self.nav.force_redraw();
    }

    pub fn reset_view(&mut self) {
        self.nav.reset_view();
        self.dial = ZoomDial::default();
        self.iteration_budget = DEFAULT_ITERATION_BUDGET;
    }
}
