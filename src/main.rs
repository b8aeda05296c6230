fn main() -> Result<(), Box<dyn std::error::Error>> {
    mandel_view::render_snapshot()
}
