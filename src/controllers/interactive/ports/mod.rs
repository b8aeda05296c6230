//! Port definitions for the interactive controller.
//!
//! Contains trait definitions that define interfaces between the controller
//! and the presentation layer.

pub mod presenter_port;
