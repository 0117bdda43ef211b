// Crate error type. Every variant states *where* things went wrong.
// Interactive paths (pointer handling, measuring) never return these; they
// degrade to no-ops instead. Only setup and I/O can fail.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("window init error: {0}")]
    WindowInit(String), // Creating the demo window failed

    #[error("window update error: {0}")]
    WindowUpdate(String), // Pushing a frame to the window failed

    #[error("raster surface unavailable ({width}x{height})")]
    SurfaceUnavailable { width: u32, height: u32 }, // Overlay raster could not be allocated

    #[error("image save error: {0}")]
    ImageSave(#[from] image::ImageError), // Writing the overlay PNG failed
}
