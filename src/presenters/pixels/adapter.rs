use std::sync::Mutex;
use winit::event_loop::EventLoopProxy;

use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter_port::PresenterPort;
use crate::input::gui::events::GuiEvent;

/// Hands render events from the worker thread to the UI thread.
///
/// A single-slot mailbox: only the newest event matters, so a fresh frame
/// simply replaces an uncollected one, and the event loop is woken to come
/// pick it up.
pub struct PixelsAdapter {
    render_event: Mutex<Option<RenderEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl PresenterPort for PixelsAdapter {
    fn present(&self, event: RenderEvent) {
        *self.render_event.lock().unwrap() = Some(event);
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            render_event: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn render_event(&self) -> Option<RenderEvent> {
        self.render_event.lock().unwrap().take()
    }
}
