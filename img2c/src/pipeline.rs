use crate::{art::AsciiArt, error::*, settings::Settings, source::ImageHandle};
use fast_image_resize as fir;
use image::RgbaImage;

/// Downscaled RGBA samples, row-major, 4 bytes per cell.
pub type PixelGrid = RgbaImage;

/// Number of text rows for `width` columns of a `src_w` x `src_h` image.
///
/// Always at least 1.
pub fn output_height(width: u32, src_w: u32, src_h: u32, char_aspect: f32) -> u32 {
    if src_w == 0 {
        return 1;
    }
    let aspect_ratio = f64::from(src_h) / f64::from(src_w);
    let rows = (f64::from(width) * aspect_ratio * f64::from(char_aspect)).floor();
    // `as` saturates, so NaN and negatives land on 0 before the clamp
    (rows as u32).max(1)
}

/// ITU-R BT.709 relative luminance of an RGB triple, in [0, 255].
///
/// Computed in double precision; `f32` shifts web-safe greys such as 0x33
/// across ramp boundaries.
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)
}

/// Resamples `image` into exactly `width` x `height` RGBA cells.
///
/// Fails with [`Error::PixelAccess`] when the image's origin does not permit
/// pixel readback.
pub fn rasterize(image: &ImageHandle, width: u32, height: u32) -> Result<PixelGrid, Error> {
    if width == 0 || height == 0 {
        return Err(Error::Pipeline(format!(
            "{ERROR_DIMENSIONS}: got {width}x{height}"
        )));
    }

    let (src_w, src_h) = image.natural_size();
    let src_image = fir::images::Image::from_vec_u8(
        src_w,
        src_h,
        image.image.to_rgba8().into_raw(),
        fir::PixelType::U8x4,
    )
    .map_err(|err| Error::Pipeline(format!("{ERROR_RESIZE}:{err:?}")))?;

    let mut dst_image = fir::images::Image::new(width, height, fir::PixelType::U8x4);

    // alpha is left unmultiplied so transparent cells keep their RGB
    let mut resizer = fir::Resizer::new();
    resizer
        .resize(
            &src_image,
            &mut dst_image,
            &fir::ResizeOptions::new()
                .resize_alg(fir::ResizeAlg::Convolution(fir::FilterType::Bilinear))
                .use_alpha(false),
        )
        .map_err(|err| Error::Pipeline(format!("{ERROR_RESIZE}:{err:?}")))?;

    if !image.origin.allows_readback() {
        log::debug!("pixel readback refused for {:?}", image.origin);
        return Err(Error::PixelAccess);
    }

    log::debug!("rasterized {src_w}x{src_h} into {width}x{height} cells");
    RgbaImage::from_raw(width, height, dst_image.into_vec())
        .ok_or(Error::Pipeline(ERROR_DATA.to_string()))
}

/// Maps pixel luminance onto a character ramp.
pub struct ImagePipeline {
    /// The character lookup table used for the conversion. Never empty.
    char_map: Vec<char>,
    /// Luminance at or below this value becomes a space.
    black_threshold: f64,
    /// Whether luminance is complemented before lookup.
    invert: bool,
}

impl ImagePipeline {
    pub fn new(settings: &Settings) -> Self {
        Self {
            char_map: settings.ramp(),
            black_threshold: settings.black_threshold,
            invert: settings.invert,
        }
    }

    /// Character for a single luminance value.
    pub fn char_for(&self, lum: f64) -> char {
        let lum = if self.invert { 255.0 - lum } else { lum };
        if lum <= self.black_threshold {
            return ' ';
        }
        let n = self.char_map.len();
        let lookup_idx = ((lum / 255.0) * n as f64).floor() as usize;
        self.char_map[lookup_idx.min(n - 1)]
    }

    pub fn to_ascii(&self, input: &PixelGrid) -> AsciiArt {
        let (width, height) = (input.width(), input.height());

        let lines = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| {
                        let [r, g, b, _] = input.get_pixel(x, y).0;
                        self.char_for(luminance(r, g, b))
                    })
                    .collect::<String>()
            })
            .collect();

        AsciiArt::new(lines)
    }
}

/// Encodes an RGBA grid as text, one line per row and one character per cell.
pub fn encode_ascii(grid: &PixelGrid, settings: &Settings) -> AsciiArt {
    ImagePipeline::new(settings).to_ascii(grid)
}

/// Rasterizes `image` at the settings' resolution and encodes it as text.
pub fn convert(image: &ImageHandle, settings: &Settings) -> Result<AsciiArt, Error> {
    let (src_w, src_h) = image.natural_size();
    let width = settings.output_width;
    let height = output_height(width, src_w, src_h, settings.char_aspect);
    let grid = rasterize(image, width, height)?;
    Ok(encode_ascii(&grid, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba};

    fn settings(ramp: &str, threshold: f64, invert: bool) -> Settings {
        Settings {
            ascii_chars: ramp.to_string(),
            black_threshold: threshold,
            invert,
            ..Settings::default()
        }
    }

    fn gray_grid(width: u32, height: u32, v: u8) -> PixelGrid {
        RgbaImage::from_pixel(width, height, Rgba([v, v, v, 255]))
    }

    #[test]
    fn output_height_follows_aspect() {
        assert_eq!(output_height(100, 200, 100, 0.55), 27);
        assert_eq!(output_height(2, 2, 2, 1.0), 2);
        assert_eq!(output_height(10, 1000, 1, 0.55), 1);
        assert_eq!(output_height(10, 0, 10, 0.55), 1);
    }

    #[test]
    fn luminance_uses_bt709_weights() {
        assert!((luminance(255, 0, 0) - 54.213).abs() < 1e-3);
        assert!((luminance(0, 255, 0) - 182.376).abs() < 1e-3);
        assert!((luminance(0, 0, 255) - 18.411).abs() < 1e-3);
        assert!((luminance(255, 255, 255) - 255.0).abs() < 1e-3);
    }

    #[test]
    fn threshold_and_ramp_law() {
        let ramp = "@%#*+=-:. ";
        let n = ramp.chars().count();
        for t in [0.0_f64, 15.0, 100.0] {
            let pipeline = ImagePipeline::new(&settings(ramp, t, false));
            for l in 0..=255u8 {
                let lum = f64::from(l);
                let expected = if lum <= t {
                    ' '
                } else {
                    let i = ((lum / 255.0) * n as f64).floor() as usize;
                    ramp.chars().nth(i.min(n - 1)).unwrap()
                };
                assert_eq!(pipeline.char_for(lum), expected, "lum {l}, threshold {t}");
            }
        }
    }

    #[test]
    fn web_safe_greys_match_double_precision_reference() {
        // 0x33, 0x66 and 0xCC land just below a ramp boundary in f64
        assert!(luminance(51, 51, 51) < 51.0);
        let settings = Settings::default();
        for (grey, expected) in [(51, '%'), (102, '*'), (204, ':')] {
            let art = encode_ascii(&gray_grid(1, 1, grey), &settings);
            assert_eq!(art.to_string(), expected.to_string(), "grey {grey}");
        }
    }

    #[test]
    fn empty_ramp_uses_default_chars() {
        let pipeline = ImagePipeline::new(&settings("", -1.0, false));
        assert_eq!(pipeline.char_for(0.0), '@');
        assert_eq!(pipeline.char_for(255.0), ' ');
    }

    #[test]
    fn invert_matches_complemented_luminance() {
        let plain = ImagePipeline::new(&settings("@%#*+=-:. ", 15.0, false));
        let inverted = ImagePipeline::new(&settings("@%#*+=-:. ", 15.0, true));
        for l in 0..=255u8 {
            let lum = f64::from(l);
            assert_eq!(inverted.char_for(lum), plain.char_for(255.0 - lum));
        }
    }

    #[test]
    fn threshold_overrides_ramp_even_when_ramp_has_no_space() {
        let pipeline = ImagePipeline::new(&settings("ab", 200.0, false));
        assert_eq!(pipeline.char_for(150.0), ' ');
        assert_eq!(pipeline.char_for(201.0), 'b');
    }

    #[test]
    fn single_char_ramp() {
        let pipeline = ImagePipeline::new(&settings("x", 10.0, false));
        assert_eq!(pipeline.char_for(11.0), 'x');
        assert_eq!(pipeline.char_for(255.0), 'x');
        assert_eq!(pipeline.char_for(10.0), ' ');
    }

    #[test]
    fn black_grid_with_disabled_threshold_uses_darkest_glyph() {
        let art = encode_ascii(&gray_grid(4, 3, 0), &settings("@%#*+=-:. ", -1.0, false));
        assert_eq!(art.line_count(), 3);
        assert!(art.lines().iter().all(|line| line == "@@@@"));
    }

    #[test]
    fn black_grid_with_zero_threshold_is_blank() {
        let art = encode_ascii(&gray_grid(3, 2, 0), &settings("@%#*+=-:. ", 0.0, false));
        assert_eq!(art.to_string(), "   \n   ");
    }

    #[test]
    fn alpha_is_ignored() {
        let mut grid = gray_grid(2, 1, 200);
        grid.put_pixel(1, 0, Rgba([200, 200, 200, 0]));
        let art = encode_ascii(&grid, &Settings::default());
        let line: Vec<char> = art.lines()[0].chars().collect();
        assert_eq!(line[0], line[1]);
    }

    #[test]
    fn encoding_is_deterministic() {
        let grid = RgbaImage::from_fn(7, 5, |x, y| {
            Rgba([(x * 30) as u8, (y * 50) as u8, ((x + y) * 20) as u8, 255])
        });
        let settings = Settings::default();
        assert_eq!(
            encode_ascii(&grid, &settings).to_string(),
            encode_ascii(&grid, &settings).to_string()
        );
    }

    #[test]
    fn rejects_zero_dimensions() {
        let handle = ImageHandle::local(DynamicImage::ImageRgba8(gray_grid(4, 4, 128)));
        assert!(matches!(rasterize(&handle, 0, 3), Err(Error::Pipeline(_))));
        assert!(matches!(rasterize(&handle, 3, 0), Err(Error::Pipeline(_))));
    }

    #[test]
    fn rasterize_produces_requested_grid() {
        let handle = ImageHandle::local(DynamicImage::ImageRgba8(gray_grid(40, 20, 90)));
        let grid = rasterize(&handle, 8, 3).unwrap();
        assert_eq!(grid.dimensions(), (8, 3));
        assert_eq!(grid.as_raw().len(), 8 * 3 * 4);
        for p in grid.pixels() {
            assert!(p.0[..3].iter().all(|&c| c.abs_diff(90) <= 1), "{p:?}");
        }
    }

    #[test]
    fn rasterize_refuses_unapproved_remote_images() {
        let handle = ImageHandle::remote(
            DynamicImage::ImageRgba8(gray_grid(4, 4, 128)),
            "https://example.com/cat.png",
            false,
        );
        assert!(matches!(rasterize(&handle, 2, 2), Err(Error::PixelAccess)));
    }
}
