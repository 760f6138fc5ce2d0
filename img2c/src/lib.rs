//! Converts raster images into monospace character art and renders that text
//! back into bitmaps.
//!
//! ```no_run
//! use img2c::{Settings, convert, source::open_image_from_path};
//!
//! let image = open_image_from_path("photo.jpg".as_ref())?;
//! let art = convert(&image, &Settings::default().with_output_width(80))?;
//! println!("{art}");
//! # Ok::<(), img2c::error::Error>(())
//! ```
pub mod art;
pub mod color;
pub mod error;
#[cfg(feature = "render")]
pub mod font;
pub mod maps;
pub mod pipeline;
#[cfg(feature = "render")]
pub mod render;
pub mod settings;
pub mod source;

pub use art::AsciiArt;
pub use pipeline::{convert, encode_ascii, rasterize};
#[cfg(feature = "render")]
pub use render::render_ascii;
pub use settings::Settings;
