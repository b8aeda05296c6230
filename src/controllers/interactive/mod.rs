//! Interactive controller for real-time viewport rendering.
//!
//! This module provides the application layer for interactive exploration,
//! managing render requests and dispatching results to the presentation
//! layer.
//!
//! # Architecture
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: [`data::render_request::RenderRequest`] snapshots describing
//!   what to render
//! - **Output**: the [`ports::presenter_port::PresenterPort`] trait for
//!   receiving rendered frames
//! - **Core**: uses the domain actions from `core/` for actual computation

mod controller;
pub mod data;
pub mod events;
pub mod pacer;
pub mod ports;
pub mod scheduler;

pub use controller::InteractiveController;
pub use pacer::{FramePacer, REDRAW_INTERVAL};
pub use scheduler::{RenderScheduler, SchedulerAction};
