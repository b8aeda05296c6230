use crate::core::data::frame_buffer::FrameBuffer;
use std::io::Write;
use std::path::Path;

/// Writes a frame as binary PPM. The alpha channel is dropped; PPM carries
/// plain RGB.
pub fn write_ppm(frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let file = std::fs::File::create(filepath)?;
    let mut writer = std::io::BufWriter::new(file);
    let surface = frame.surface();

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", surface.width_px, surface.height_px)?;
    writeln!(writer, "255")?;

    for pixel in frame.rgba_bytes().chunks_exact(4) {
        writer.write_all(&pixel[0..3])?;
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::surface::RenderSurface;

    #[test]
    fn test_write_ppm_emits_header_and_rgb_payload() {
        let surface = RenderSurface::new(2, 1);
        let frame = FrameBuffer::from_data(
            surface,
            vec![10, 20, 30, 255, 40, 50, 60, 255],
        )
        .unwrap();
        let path = std::env::temp_dir().join("mandel_view_write_ppm_test.ppm");

        write_ppm(&frame, &path).unwrap();
        let written = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let expected_header = b"P6\n2 1\n255\n";
        assert_eq!(&written[..expected_header.len()], expected_header);
        assert_eq!(&written[expected_header.len()..], &[10, 20, 30, 40, 50, 60]);
    }
}
