use winit::event::MouseScrollDelta;

/// Pixels of wheel delta per scroll line.
const WHEEL_LINE_PX: f64 = 40.0;

/// Tracks the pointer during a drag and turns absolute positions into the
/// normalized pan deltas the navigation core consumes.
///
/// The sign convention matches the view, not the pointer: dragging right
/// moves the content with the pointer, so the horizontal delta is negated,
/// while the vertical delta keeps the window's downward direction (the
/// mapper's pixel space is bottom-up).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    dragging: bool,
    last_position: Option<[f64; 2]>,
}

impl PointerTracker {
    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.dragging = true;
        self.last_position = Some([x, y]);
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.last_position = None;
    }

    /// Feeds a pointer position; returns a pan delta while a drag is active.
    pub fn motion(&mut self, x: f64, y: f64) -> Option<[f64; 2]> {
        if !self.dragging {
            return None;
        }

        let delta = self
            .last_position
            .map(|[last_x, last_y]| [-(x - last_x), y - last_y]);
        self.last_position = Some([x, y]);

        delta
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

/// Normalizes a winit scroll delta to wheel pixels
/// (positive = scroll down = zoom out).
#[must_use]
pub fn wheel_delta_px(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -f64::from(y) * WHEEL_LINE_PX,
        MouseScrollDelta::PixelDelta(position) => -position.y,
    }
}
