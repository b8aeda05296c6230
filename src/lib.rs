mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod storage;

pub use controllers::interactive::data::frame_data::FrameData;
pub use controllers::interactive::data::render_request::RenderRequest;
pub use controllers::interactive::events::render_event::{RenderError, RenderEvent};
pub use controllers::interactive::ports::presenter_port::PresenterPort;
pub use controllers::interactive::{
    FramePacer, InteractiveController, REDRAW_INTERVAL, RenderScheduler, SchedulerAction,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::snapshot::{render_snapshot, render_snapshot_to};

pub use self::core::actions::ports::pixel_evaluator::PixelEvaluator;
pub use self::core::actions::render_frame::render_frame;
pub use self::core::colour::intensity::{boundary_intensity, colour_for};
pub use self::core::data::colour_config::ColourConfig;
pub use self::core::data::complex::Complex;
pub use self::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
pub use self::core::data::rgba::Rgba;
pub use self::core::data::surface::RenderSurface;
pub use self::core::data::viewport::Viewport;
pub use self::core::escape::algorithm::{DEFAULT_ITERATION_BUDGET, escape_iterations};
pub use self::core::escape::evaluator::EscapeTimeEvaluator;
pub use self::core::navigation::{NavigationState, ZoomCurve, ZoomDial};
pub use self::core::util::pixel_to_complex::{REFERENCE_FRAME_HEIGHT, pixel_to_complex};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
