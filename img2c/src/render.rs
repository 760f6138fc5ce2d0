use image::RgbaImage;

use crate::{
    art::AsciiArt,
    color::parse_color_or,
    font::Typeface,
    settings::{DEFAULT_BG_COLOR, DEFAULT_FG_COLOR, Settings},
};

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT: f32 = 1.2;

/// Pixel size of one character cell as `(width, height)`.
pub fn cell_size(typeface: &impl Typeface, font_size: f32) -> (u32, u32) {
    let char_w = (typeface.measure("M", font_size).ceil() as u32).max(1);
    let char_h = ((font_size * LINE_HEIGHT).ceil() as u32).max(1);
    (char_w, char_h)
}

/// Bitmap size for `cols` x `rows` cells, saturating instead of overflowing.
pub fn canvas_size((char_w, char_h): (u32, u32), cols: usize, rows: usize) -> (u32, u32) {
    let cols = u32::try_from(cols).unwrap_or(u32::MAX);
    let rows = u32::try_from(rows).unwrap_or(u32::MAX);
    (
        char_w.saturating_mul(cols).max(1),
        char_h.saturating_mul(rows).max(1),
    )
}

impl AsciiArt {
    /// Draws every line into a fresh bitmap, one row of cells per line.
    ///
    /// Lines shorter than the longest one leave background to their right.
    pub fn render_to_image(&self, settings: &Settings, typeface: &impl Typeface) -> RgbaImage {
        let font_px = settings.font_size;
        let (char_w, char_h) = cell_size(typeface, font_px);

        let (img_width, img_height) =
            canvas_size((char_w, char_h), self.max_line_len(), self.line_count());

        let background = parse_color_or(&settings.bg_color, DEFAULT_BG_COLOR);
        let foreground = parse_color_or(&settings.fg_color, DEFAULT_FG_COLOR);
        log::debug!("rendering {img_width}x{img_height} with {char_w}x{char_h} cells");

        let mut image = RgbaImage::from_pixel(img_width, img_height, background);
        for (i, line) in self.lines().iter().enumerate() {
            let Some(y_offset) = u32::try_from(i)
                .ok()
                .and_then(|row| row.checked_mul(char_h))
                .filter(|y| *y < img_height)
                .and_then(|y| i32::try_from(y).ok())
            else {
                break;
            };
            typeface.draw(&mut image, foreground, 0, y_offset, font_px, line);
        }

        image
    }
}

/// Renders text art back into a bitmap.
pub fn render_ascii(art: &AsciiArt, settings: &Settings, typeface: &impl Typeface) -> RgbaImage {
    art.render_to_image(settings, typeface)
}
