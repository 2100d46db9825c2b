fn main() -> Result<(), Box<dyn std::error::Error>> {
    let presenter_factory = raster_explorer::PixelsPresenterFactory::new();
    let command = raster_explorer::RunGuiCommand::new(presenter_factory);

    command.execute()
}
