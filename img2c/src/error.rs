//! This module defines the custom error type `Error` used throughout the crate,
//! as well as various error message constants.
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Application error: {0}")]
    Application(String),
    #[error("Image pipeline error: {0}")]
    Pipeline(String),
    /// Pixel readback was refused for the image. The message is meant to be
    /// shown to end users as-is.
    #[error("{}", ERROR_PIXEL_ACCESS)]
    PixelAccess,
    #[error("Settings error: {0}")]
    Settings(String),
    #[error("Font error: {0}")]
    Font(String),
}

impl From<Error> for io::Error {
    fn from(error: Error) -> Self {
        io::Error::other(error.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Application(format!("{error}"))
    }
}

/// Error message for issues related to decoding an image.
pub const ERROR_DECODING_IMAGE: &str = "Error decoding image";
/// Error message for issues related to opening a resource.
pub const ERROR_OPENING_RESOURCE: &str = "Error opening resource";
/// Error message for issues related to data processing.
pub const ERROR_DATA: &str = "Data error";
/// Error message for issues related to resizing an image.
pub const ERROR_RESIZE: &str = "Image resizing error";
/// Error message for zero-sized target grids.
pub const ERROR_DIMENSIONS: &str = "Target width and height must both be at least 1";
/// Error message for refused pixel readback.
pub const ERROR_PIXEL_ACCESS: &str = "Unable to read pixels from the image. Cross-origin images \
     are blocked from pixel access; use a local file upload instead.";
/// Error message for issues related to reading or parsing settings.
pub const ERROR_SETTINGS: &str = "Invalid settings";
/// Error message for issues related to loading a font.
pub const ERROR_LOADING_FONT: &str = "Cannot load font";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_access_message_names_cause_and_remedy() {
        let msg = Error::PixelAccess.to_string();
        assert!(msg.contains("Cross-origin"));
        assert!(msg.contains("local file"));
    }

    #[test]
    fn converts_into_io_error() {
        let err: io::Error = Error::Pipeline(ERROR_RESIZE.to_string()).into();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(err.to_string().contains(ERROR_RESIZE));
    }
}
