use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::storage::write_ppm::write_ppm;
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        write_ppm(frame, filepath)
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::surface::RenderSurface;

    #[test]
    fn test_present_writes_a_parseable_file() {
        let presenter = PpmFilePresenter::new();
        let frame = FrameBuffer::new(RenderSurface::new(3, 2));
        let path = std::env::temp_dir().join("mandel_view_ppm_presenter_test.ppm");

        presenter.present(&frame, &path).unwrap();
        let written = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(written.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(written.len(), b"P6\n3 2\n255\n".len() + 3 * 2 * 3);
    }
}
