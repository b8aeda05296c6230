use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;
use winit::{event_loop::EventLoopProxy, window::Window};

use crate::controllers::interactive::ports::presenter_port::PresenterPort;
use crate::input::gui::events::GuiEvent;

pub trait GuiPresenterPort {
    fn new(window: &'static Window, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self;
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    fn share_adapter(&self) -> Arc<dyn PresenterPort>;
    fn resize(&mut self, width: u32, height: u32);
    fn last_render_duration(&self) -> Option<Duration>;
    fn last_error_message(&self) -> Option<&str>;
}
