use crate::core::data::frame_buffer::FrameBuffer;
use std::time::Duration;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub frame: FrameBuffer,
    pub render_duration: Duration,
}
