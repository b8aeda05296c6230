fn main() {
    let presenter_factory = mandel_view::PixelsPresenterFactory::new();
    let command = mandel_view::RunGuiCommand::new(presenter_factory);

    command.execute();
}
