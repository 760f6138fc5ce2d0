use std::{io::Cursor, path::Path};

use image::{DynamicImage, ImageReader};

use crate::error::*;

/// Where a decoded image came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Read from a local file or in-memory upload; pixels are always readable.
    Local,
    /// Fetched from another origin. Pixels are readable only if the remote
    /// granted cross-origin usage.
    Remote { url: String, cors_approved: bool },
}

impl Origin {
    pub fn allows_readback(&self) -> bool {
        match self {
            Origin::Local => true,
            Origin::Remote { cors_approved, .. } => *cors_approved,
        }
    }
}

/// A decoded image together with its origin.
#[derive(Debug, Clone)]
pub struct ImageHandle {
    pub image: DynamicImage,
    pub origin: Origin,
}

impl ImageHandle {
    pub fn local(image: DynamicImage) -> Self {
        Self {
            image,
            origin: Origin::Local,
        }
    }

    pub fn remote(image: DynamicImage, url: impl Into<String>, cors_approved: bool) -> Self {
        Self {
            image,
            origin: Origin::Remote {
                url: url.into(),
                cors_approved,
            },
        }
    }

    /// Decodes an encoded image (png, jpeg, bmp, ...) held in memory.
    pub fn from_bytes(bytes: &[u8], origin: Origin) -> Result<Self, Error> {
        let image = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .decode()
            .map_err(|e| Error::Application(format!("{ERROR_DECODING_IMAGE}: {e:?}")))?;
        Ok(Self { image, origin })
    }

    /// Natural (source) dimensions as `(width, height)`.
    pub fn natural_size(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

pub fn open_image_from_path(path: &Path) -> Result<ImageHandle, Error> {
    let image = ImageReader::open(path)
        .map_err(|e| Error::Application(format!("{ERROR_OPENING_RESOURCE}: {e:?}")))?
        .decode()
        .map_err(|e| Error::Application(format!("{ERROR_DECODING_IMAGE}: {e:?}")))?;
    log::debug!(
        "opened {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(ImageHandle::local(image))
}
