use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

use crate::error::{ERROR_LOADING_FONT, Error};

/// Measures and draws text for the renderer.
///
/// `font_size` is the em size in pixels. `draw` places the top of the line
/// box at `y`.
pub trait Typeface {
    fn measure(&self, text: &str, font_size: f32) -> f32;

    fn draw(
        &self,
        canvas: &mut RgbaImage,
        color: Rgba<u8>,
        x: i32,
        y: i32,
        font_size: f32,
        text: &str,
    );
}

/// Well-known monospace fonts, probed in order when no font path is given.
pub const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Monaco.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "C:/Windows/Fonts/consola.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeMono.ttf",
    "/usr/share/fonts/gnu-free/FreeMono.otf",
];

/// A fixed-width font file, rendered through `ab_glyph`.
pub struct MonospaceFont {
    font: ab_glyph::FontVec,
    path: PathBuf,
}

impl MonospaceFont {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let data = std::fs::read(path)
            .map_err(|e| Error::Font(format!("{ERROR_LOADING_FONT} {}: {e}", path.display())))?;
        Self::from_bytes(data, path.to_path_buf())
    }

    pub fn from_bytes(data: Vec<u8>, path: PathBuf) -> Result<Self, Error> {
        let font = ab_glyph::FontVec::try_from_vec(data)
            .map_err(|e| Error::Font(format!("{ERROR_LOADING_FONT} {}: {e}", path.display())))?;
        Ok(Self { font, path })
    }

    /// Loads `path` when given, otherwise the first readable candidate font.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        if let Some(path) = path {
            return Self::from_path(path);
        }
        FONT_CANDIDATES
            .iter()
            .map(Path::new)
            .find_map(|candidate| Self::from_path(candidate).ok())
            .ok_or_else(|| {
                Error::Font(format!(
                    "{ERROR_LOADING_FONT}: no monospace font found, set a font path"
                ))
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `ab_glyph` scales by line height; convert from em size.
    fn px_scale(&self, font_size: f32) -> ab_glyph::PxScale {
        use ab_glyph::Font;

        let units_per_em = self.font.units_per_em().unwrap_or(1000.0);
        ab_glyph::PxScale::from(font_size * self.font.height_unscaled() / units_per_em)
    }
}

impl Typeface for MonospaceFont {
    fn measure(&self, text: &str, font_size: f32) -> f32 {
        use ab_glyph::{Font, ScaleFont};

        let scaled = self.font.as_scaled(self.px_scale(font_size));
        text.chars()
            .map(|ch| scaled.h_advance(self.font.glyph_id(ch)))
            .sum()
    }

    fn draw(
        &self,
        canvas: &mut RgbaImage,
        color: Rgba<u8>,
        x: i32,
        y: i32,
        font_size: f32,
        text: &str,
    ) {
        imageproc::drawing::draw_text_mut(
            canvas,
            color,
            x,
            y,
            self.px_scale(font_size),
            &self.font,
            text,
        );
    }
}
