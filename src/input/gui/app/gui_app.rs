use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::interactive::{InteractiveController, RenderScheduler, SchedulerAction};
use crate::core::navigation::ZoomCurve;
use crate::core::data::rgba::Rgba;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::{ColourRole, GuiAppState};
use crate::input::gui::events::GuiEvent;
use crate::input::gui::pointer::{PointerTracker, wheel_delta_px};

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    controller: InteractiveController,
    scheduler: RenderScheduler,
    state: GuiAppState,
    pointer: PointerTracker,
    last_cursor: [f64; 2],
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller,
            scheduler: RenderScheduler::new(),
            state: GuiAppState::new(crate::core::data::surface::RenderSurface::new(
                size.width,
                size.height,
            )),
            pointer: PointerTracker::default(),
            last_cursor: [0.0, 0.0],
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.state.nav.set_viewport_size(width, height);

        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
    }

    pub fn handle_mouse_button(&mut self, button_state: ElementState) {
        match button_state {
            ElementState::Pressed => {
                self.pointer.begin_drag(self.last_cursor[0], self.last_cursor[1]);
                self.state.nav.enable_continuous_draw();
            }
            ElementState::Released => self.end_drag(),
        }
    }

    pub fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        self.last_cursor = [x, y];

        if let Some([dx, dy]) = self.pointer.motion(x, y) {
            self.state.nav.pan(dx, dy);
        }
    }

    pub fn end_drag(&mut self) {
        self.pointer.end_drag();
        self.state.nav.disable_continuous_draw();
    }

    pub fn handle_wheel(&mut self, delta: MouseScrollDelta) {
        self.state.apply_wheel(wheel_delta_px(delta));
    }

    /// Asks the draw gate whether the current pacer tick should redraw.
    pub fn take_redraw(&mut self) -> bool {
        self.state.nav.take_redraw()
    }

    pub fn observe_completion(&mut self) {
        self.scheduler
            .observe_completion(self.controller.last_completed_generation());
    }

    pub fn shutdown(&mut self) {
        self.controller.shutdown();
    }

    pub fn submit_render_request_if_needed(&mut self) {
        if self.width < 1 || self.height < 1 {
            return;
        }

        let request = self.state.build_render_request();

        if !self.state.should_submit(&request) {
            return;
        }

        let controller = &self.controller;
        let action = self.scheduler.update(
            request,
            self.state.nav.is_dragging(),
            controller.last_completed_generation(),
            |req| controller.submit_request(req),
        );

        if let SchedulerAction::Submitted { generation } = action {
            self.state.record_submission(request, generation);
        }
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let last_render_duration = self.presenter.last_render_duration();
        let last_error_message = self.presenter.last_error_message().map(str::to_owned);
        let egui_ctx = self.egui_ctx.clone();

        egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("View")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 240.0])
                .show(ctx, |ui| {
                    ui.heading("Mandelbrot View");
                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label("Zoom:");
                        let mut raw = self.state.dial.raw();
                        if ui
                            .add(egui::Slider::new(&mut raw, 0.01..=16.0).logarithmic(true))
                            .changed()
                        {
                            self.state.set_zoom_raw(raw);
                        }
                    });

                    ui.horizontal(|ui| {
                        ui.label("Zoom curve:");
                        let mut curve = self.state.dial.curve();
                        egui::ComboBox::from_id_source("zoom_curve")
                            .selected_text(curve.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in ZoomCurve::ALL {
                                    ui.selectable_value(&mut curve, kind, kind.display_name());
                                }
                            });
                        if curve != self.state.dial.curve() {
                            self.state.set_zoom_curve(curve);
                        }
                    });

                    ui.horizontal(|ui| {
                        ui.label("Iteration budget:");
                        let mut budget = self.state.iteration_budget;
                        if ui
                            .add(egui::Slider::new(&mut budget, 1..=1000))
                            .changed()
                        {
                            self.state.set_iteration_budget(budget);
                        }
                    });

                    ui.horizontal(|ui| {
                        ui.label("Boundary colour:");
                        let mut rgba = rgba_to_array(self.state.colours.boundary);
                        if ui.color_edit_button_rgba_unmultiplied(&mut rgba).changed() {
                            self.state.set_colour(ColourRole::Boundary, array_to_rgba(rgba));
                        }
                    });

                    ui.horizontal(|ui| {
                        ui.label("Interior colour:");
                        let mut rgba = rgba_to_array(self.state.colours.interior);
                        if ui.color_edit_button_rgba_unmultiplied(&mut rgba).changed() {
                            self.state.set_colour(ColourRole::Interior, array_to_rgba(rgba));
                        }
                    });

                    ui.separator();
                    let viewport = self.state.nav.viewport();
                    ui.label(format!(
                        "Center: ({:.6}, {:.6})",
                        viewport.look_at.re, viewport.look_at.im
                    ));
                    ui.label(format!("Effective zoom: {:.4}", viewport.zoom));

                    if ui.button("Reset view").clicked() {
                        self.state.reset_view();
                    }

                    ui.separator();
                    ui.label(format!("Window size: {}x{}", self.width, self.height));
                    ui.label(format!(
                        "Latest generation: {}",
                        self.state.latest_submitted_generation
                    ));
                    if let Some(render_duration) = last_render_duration {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                    if let Some(message) = &last_error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        })
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}

fn rgba_to_array(colour: Rgba) -> [f32; 4] {
    [colour.r, colour.g, colour.b, colour.a]
}

fn array_to_rgba(rgba: [f32; 4]) -> Rgba {
    Rgba::new(rgba[0], rgba[1], rgba[2], rgba[3])
}
