use crate::ascii::{AsciiGrid, render};
use crate::config::RenderSettings;
use crate::error::{AsciiError, Result};
use image::{DynamicImage, RgbImage, imageops};
use std::path::Path;
use std::time::Instant;

/// Decode the image at `path`
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| AsciiError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Compute the character grid size for an image
///
/// The width is capped at `max_width`; the height follows the original aspect
/// ratio scaled by `height_scale`, rounded, and never below 1.
///
/// # Arguments
/// * `width` - Original image width
/// * `height` - Original image height
/// * `max_width` - Maximum grid width in characters
/// * `height_scale` - Vertical correction factor (glyphs are taller than wide)
pub fn target_dimensions(
    width: u32,
    height: u32,
    max_width: u32,
    height_scale: f32,
) -> Result<(u32, u32)> {
    if width == 0 || height == 0 {
        return Err(AsciiError::Config(format!(
            "image has degenerate dimensions {width}x{height}"
        )));
    }
    if max_width == 0 {
        return Err(AsciiError::Config("max_width must be at least 1".to_string()));
    }
    if !height_scale.is_finite() || height_scale <= 0.0 {
        return Err(AsciiError::Config(format!(
            "height_scale must be greater than 0, got {height_scale}"
        )));
    }

    let new_width = width.min(max_width);
    let ratio = height as f64 / width as f64;
    let new_height = (new_width as f64 * height_scale as f64 * ratio).round();
    let new_height = new_height.clamp(1.0, u32::MAX as f64) as u32;

    Ok((new_width, new_height))
}

/// Resize a decoded image to grid dimensions and drop any alpha channel
///
/// Alpha is discarded rather than composited, so transparent pixels keep
/// whatever color they carry.
pub fn resize_for_grid(image: &DynamicImage, max_width: u32, height_scale: f32) -> Result<RgbImage> {
    let (width, height) = (image.width(), image.height());
    let (new_width, new_height) = target_dimensions(width, height, max_width, height_scale)?;

    if (new_width, new_height) == (width, height) {
        return Ok(image.to_rgb8());
    }

    log::debug!("resizing {width}x{height} -> {new_width}x{new_height}");

    let resized = image.resize_exact(new_width, new_height, imageops::FilterType::Triangle);
    Ok(resized.to_rgb8())
}

/// Load and resize an image file in one step
pub fn preprocess(path: &Path, max_width: u32, height_scale: f32) -> Result<RgbImage> {
    let image = load_image(path)?;
    resize_for_grid(&image, max_width, height_scale)
}

/// Converts an image file to an ASCII grid
///
/// This runs the whole pipeline:
/// 1. Validate settings
/// 2. Decode the file
/// 3. Resize to grid dimensions and drop alpha
/// 4. Map each pixel's luma onto the ramp
///
/// Nothing is written anywhere; sinks take the returned grid.
pub fn convert(path: &Path, settings: &RenderSettings) -> Result<AsciiGrid> {
    settings.validate()?;
    let start = Instant::now();

    let resized = preprocess(path, settings.max_width, settings.height_scale)?;
    let grid = convert_image(&resized, settings);

    log::debug!(
        "converted {} to {}x{} grid in {:.1} ms",
        path.display(),
        grid.width(),
        grid.height(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(grid)
}

/// Render an already resized image with the ramp and inversion from `settings`
pub fn convert_image(resized: &RgbImage, settings: &RenderSettings) -> AsciiGrid {
    render(resized, &settings.ramp(), settings.invert_brightness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn save_png(dir: &tempfile::TempDir, name: &str, img: &RgbImage) -> std::path::PathBuf {
        let path = dir.path().join(name);
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_target_dimensions_caps_width() {
        assert_eq!(target_dimensions(400, 200, 100, 1.0).unwrap(), (100, 50));
        assert_eq!(target_dimensions(400, 200, 100, 0.5).unwrap(), (100, 25));
    }

    #[test]
    fn test_target_dimensions_small_image_keeps_width() {
        assert_eq!(target_dimensions(40, 40, 100, 0.5).unwrap(), (40, 20));
    }

    #[test]
    fn test_target_dimensions_rounds() {
        // 3 * 0.5 * 1 = 1.5 -> 2
        assert_eq!(target_dimensions(3, 3, 100, 0.5).unwrap(), (3, 2));
        // 10 * 0.5 * 3/10 = 1.5 -> 2, 7 * 0.5 * 1 = 3.5 -> 4
        assert_eq!(target_dimensions(10, 3, 100, 0.5).unwrap(), (10, 2));
        assert_eq!(target_dimensions(7, 7, 100, 0.5).unwrap(), (7, 4));
    }

    #[test]
    fn test_target_dimensions_min_height() {
        assert_eq!(target_dimensions(1000, 1, 100, 0.1).unwrap(), (100, 1));
    }

    #[test]
    fn test_target_dimensions_preserves_aspect() {
        for (w, h, max, scale) in [(640, 480, 120, 0.5), (300, 900, 80, 1.2), (1920, 1080, 200, 0.45)] {
            let (nw, nh) = target_dimensions(w, h, max, scale).unwrap();
            let expected = scale as f64 * h as f64 / w as f64;
            let actual = nh as f64 / nw as f64;
            assert!((actual - expected).abs() <= 0.5 / nw as f64 + 1e-9);
        }
    }

    #[test]
    fn test_target_dimensions_rejects_degenerate() {
        assert!(matches!(target_dimensions(0, 10, 100, 0.5), Err(AsciiError::Config(_))));
        assert!(matches!(target_dimensions(10, 0, 100, 0.5), Err(AsciiError::Config(_))));
        assert!(matches!(target_dimensions(10, 10, 0, 0.5), Err(AsciiError::Config(_))));
        assert!(matches!(target_dimensions(10, 10, 5, 0.0), Err(AsciiError::Config(_))));
    }

    #[test]
    fn test_resize_for_grid_drops_alpha() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 0])));
        let resized = resize_for_grid(&img, 4, 1.0).unwrap();
        assert_eq!(resized.dimensions(), (4, 4));
        assert_eq!(*resized.get_pixel(0, 0), Rgb([10, 20, 30]));
    }

    #[test]
    fn test_resize_for_grid_downsamples() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 255])));
        let resized = resize_for_grid(&img, 4, 1.0).unwrap();
        assert_eq!(resized.dimensions(), (4, 4));
        let Rgb([r, g, b]) = *resized.get_pixel(1, 1);
        assert!(r.abs_diff(10) <= 1 && g.abs_diff(20) <= 1 && b.abs_diff(30) <= 1);
    }

    #[test]
    fn test_preprocess_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_png(&dir, "wide.png", &RgbImage::from_pixel(50, 20, Rgb([0, 0, 0])));

        let resized = preprocess(&path, 25, 1.0).unwrap();
        assert_eq!(resized.dimensions(), (25, 10));
    }

    #[test]
    fn test_preprocess_missing_file_is_decode_error() {
        let err = preprocess(Path::new("/nonexistent/picture.png"), 10, 0.5).unwrap_err();
        assert!(matches!(err, AsciiError::Decode { .. }));
    }

    #[test]
    fn test_preprocess_garbage_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = preprocess(&path, 10, 0.5).unwrap_err();
        assert!(matches!(err, AsciiError::Decode { .. }));
    }

    #[test]
    fn test_convert_white_2x2() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_png(&dir, "white.png", &RgbImage::from_pixel(2, 2, Rgb([255, 255, 255])));
        let settings = RenderSettings {
            max_width: 2,
            height_scale: 1.0,
            ..Default::default()
        };

        let grid = convert(&path, &settings).unwrap();
        assert_eq!(grid.rows(), &["$$".to_string(), "$$".to_string()]);

        let inverted = convert(
            &path,
            &RenderSettings {
                invert_brightness: true,
                ..settings
            },
        )
        .unwrap();
        assert_eq!(inverted.rows(), &["  ".to_string(), "  ".to_string()]);
    }

    #[test]
    fn test_convert_validates_settings_first() {
        let settings = RenderSettings {
            height_scale: -2.0,
            ..Default::default()
        };
        let err = convert(Path::new("/nonexistent/picture.png"), &settings).unwrap_err();
        assert!(matches!(err, AsciiError::Config(_)));
    }

    #[test]
    fn test_empty_ramp_matches_default_ramp() {
        let dir = tempfile::tempdir().unwrap();
        let mut img = RgbImage::new(16, 16);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgb([(x * 16) as u8, (y * 16) as u8, 128]);
        }
        let path = save_png(&dir, "gradient.png", &img);

        let explicit = convert(&path, &RenderSettings::default()).unwrap();
        let empty = convert(
            &path,
            &RenderSettings {
                character_ramp: String::new(),
                ..Default::default()
            },
        )
        .unwrap();
        let blank = convert(
            &path,
            &RenderSettings {
                character_ramp: "  ".to_string(),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(explicit, empty);
        assert_eq!(explicit, blank);
    }
}
