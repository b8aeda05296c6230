use std::marker::PhantomData;
use std::time::Instant;

use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::{FramePacer, InteractiveController};
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event()
            .build()
            .expect("Failed to create event loop");

        let event_loop_proxy = event_loop.create_proxy();

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot View")
                .with_inner_size(LogicalSize::new(800.0, 600.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)
                .expect("Failed to create window"),
        ));

        let presenter: P = self.presenter_factory.build(window, event_loop_proxy);
        let controller = InteractiveController::new(presenter.share_adapter());
        let mut app = GuiApp::new(window, &event_loop, presenter, controller);

        let mut pacer = FramePacer::default();
        let mut last_tick = Instant::now();
        let mut ui_repaint = true;

        event_loop
            .run(move |event, elwt| {
                match event {
                    Event::UserEvent(GuiEvent::Wake) => {
                        app.observe_completion();
                        ui_repaint = true;
                    }
                    Event::WindowEvent {
                        ref event,
                        window_id,
                    } if window_id == window.id() => {
                        // Forward the event to egui first
                        let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                        if egui_repaint {
                            ui_repaint = true;
                        }

                        match event {
                            WindowEvent::CloseRequested => {
                                app.shutdown();
                                elwt.exit();
                            }
                            WindowEvent::RedrawRequested => {
                                // Run the egui frame, then submit whatever
                                // the gestures changed since the last one.
                                let egui_output = app.update_ui(window);
                                app.submit_render_request_if_needed();

                                app.egui_state.handle_platform_output(
                                    window,
                                    egui_output.platform_output.clone(),
                                );

                                if egui_output
                                    .viewport_output
                                    .values()
                                    .any(|v| v.repaint_delay.is_zero())
                                {
                                    ui_repaint = true;
                                }

                                if let Err(e) = app.render(egui_output) {
                                    eprintln!("Render error: {e}");
                                    elwt.exit();
                                }
                            }
                            WindowEvent::Resized(size) => {
                                app.resize(size.width, size.height);
                                ui_repaint = true;
                            }
                            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                                app.scale_factor = *scale_factor;
                                app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                                let size = window.inner_size();
                                app.resize(size.width, size.height);
                                ui_repaint = true;
                            }
                            WindowEvent::MouseInput {
                                state,
                                button: MouseButton::Left,
                                ..
                            } => {
                                // Presses over the egui panel belong to egui;
                                // releases always end a drag.
                                let pressed = matches!(state, ElementState::Pressed);
                                if !egui_consumed || !pressed {
                                    app.handle_mouse_button(*state);
                                }
                            }
                            WindowEvent::CursorMoved { position, .. } => {
                                app.handle_cursor_moved(position.x, position.y);
                            }
                            WindowEvent::CursorLeft { .. } => {
                                app.end_drag();
                            }
                            WindowEvent::MouseWheel { delta, .. } => {
                                if !egui_consumed {
                                    app.handle_wheel(*delta);
                                }
                            }
                            _ => {}
                        }
                    }
                    Event::AboutToWait => {
                        let now = Instant::now();
                        let elapsed = now.duration_since(last_tick);
                        last_tick = now;

                        // The fixed-cadence render loop: only a due pacer
                        // tick consults the draw gate, and an idle gate does
                        // no work at all.
                        if pacer.advance(elapsed) && app.take_redraw() {
                            ui_repaint = false;
                            window.request_redraw();
                        } else if ui_repaint {
                            ui_repaint = false;
                            window.request_redraw();
                        }

                        elwt.set_control_flow(ControlFlow::WaitUntil(now + pacer.interval()));
                    }
                    _ => {}
                }
            })
            .expect("Event loop error");
    }
}
