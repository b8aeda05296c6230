use crate::core::data::surface::RenderSurface;
use std::error::Error;
use std::fmt;

fn surface_to_buffer_size(surface: RenderSurface) -> usize {
    surface.pixel_count() * 4
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameBufferError {
    BoundsMismatch {
        surface_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                surface_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "surface size {} does not match buffer size {}",
                    surface_size, buffer_size
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

/// A rendered frame: row-major top-down RGBA8 bytes for one surface.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    surface: RenderSurface,
    data: Vec<u8>,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(surface: RenderSurface) -> Self {
        Self {
            surface,
            data: vec![0; surface_to_buffer_size(surface)],
        }
    }

    pub fn from_data(surface: RenderSurface, data: Vec<u8>) -> Result<Self, FrameBufferError> {
        let surface_size = surface_to_buffer_size(surface);

        if surface_size != data.len() {
            return Err(FrameBufferError::BoundsMismatch {
                surface_size,
                buffer_size: data.len(),
            });
        }

        Ok(Self { surface, data })
    }

    #[must_use]
    pub fn surface(&self) -> RenderSurface {
        self.surface
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }
}
