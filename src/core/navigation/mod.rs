pub mod state;
pub mod zoom_dial;

pub use state::NavigationState;
pub use zoom_dial::{ZoomCurve, ZoomDial};
