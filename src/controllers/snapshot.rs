use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::render_frame;
use crate::core::data::colour_config::ColourConfig;
use crate::core::data::surface::RenderSurface;
use crate::core::data::viewport::Viewport;
use crate::core::escape::algorithm::DEFAULT_ITERATION_BUDGET;
use crate::core::escape::evaluator::EscapeTimeEvaluator;

const SNAPSHOT_WIDTH: u32 = 800;
const SNAPSHOT_HEIGHT: u32 = 450;
const SNAPSHOT_PATH: &str = "output/view.ppm";

/// Renders the default viewport once and writes it next to the binary.
pub fn render_snapshot() -> Result<(), Box<dyn std::error::Error>> {
    let surface = RenderSurface::new(SNAPSHOT_WIDTH, SNAPSHOT_HEIGHT);

    render_snapshot_to(
        &Viewport::default(),
        surface,
        DEFAULT_ITERATION_BUDGET,
        crate::presenters::file::ppm::PpmFilePresenter::new(),
        SNAPSHOT_PATH,
    )
}

/// Renders one frame of `viewport` and hands it to the file presenter.
pub fn render_snapshot_to<P: FilePresenterPort>(
    viewport: &Viewport,
    surface: RenderSurface,
    iteration_budget: u32,
    presenter: P,
    filepath: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let filepath = filepath.as_ref();

    println!("Rendering view snapshot...");
    println!("Image size: {}x{}", surface.width_px, surface.height_px);
    println!("Iteration budget: {}", iteration_budget);
    println!(
        "Center: ({}, {}), zoom: {}",
        viewport.look_at.re, viewport.look_at.im, viewport.zoom
    );

    let evaluator = EscapeTimeEvaluator::new(iteration_budget, ColourConfig::default());
    let start = Instant::now();
    let frame = render_frame(viewport, surface, &evaluator)?;
    let render_duration = start.elapsed();

    println!("Duration:   {:?}", render_duration);

    if let Some(parent) = filepath.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    presenter.present(&frame, filepath)?;
    println!("Saved to {}", filepath.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenters::file::ppm::PpmFilePresenter;

    #[test]
    fn test_snapshot_writes_a_ppm_of_the_requested_size() {
        let path = std::env::temp_dir().join("mandel_view_snapshot_test.ppm");

        let result = render_snapshot_to(
            &Viewport::default(),
            RenderSurface::new(32, 18),
            25,
            PpmFilePresenter::new(),
            &path,
        );
        assert!(result.is_ok());

        let written = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(written.starts_with(b"P6\n32 18\n255\n"));
        assert_eq!(written.len(), b"P6\n32 18\n255\n".len() + 32 * 18 * 3);
    }

    #[test]
    fn test_snapshot_creates_missing_output_directory() {
        let dir = std::env::temp_dir().join("mandel_view_snapshot_dir_test");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("view.ppm");

        let result = render_snapshot_to(
            &Viewport::default(),
            RenderSurface::new(8, 8),
            10,
            PpmFilePresenter::new(),
            &path,
        );

        assert!(result.is_ok());
        assert!(path.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_zoomed_snapshot_differs_from_default() {
        let path_a = std::env::temp_dir().join("mandel_view_snapshot_a.ppm");
        let path_b = std::env::temp_dir().join("mandel_view_snapshot_b.ppm");
        let surface = RenderSurface::new(24, 24);

        let mut zoomed = Viewport::default();
        zoomed.zoom = 32.0;

        render_snapshot_to(&Viewport::default(), surface, 40, PpmFilePresenter::new(), &path_a)
            .unwrap();
        render_snapshot_to(&zoomed, surface, 40, PpmFilePresenter::new(), &path_b).unwrap();

        let a = std::fs::read(&path_a).unwrap();
        let b = std::fs::read(&path_b).unwrap();
        let _ = std::fs::remove_file(&path_a);
        let _ = std::fs::remove_file(&path_b);

        assert_ne!(a, b);
    }
}
