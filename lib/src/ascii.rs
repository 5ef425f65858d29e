use crate::luma::pixel_scaled_luma;
use crate::ramp::CharacterRamp;
use image::RgbImage;
use rayon::prelude::*;
use std::fmt;

/// Rendered text art: `height` rows of exactly `width` characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiGrid {
    width: u32,
    height: u32,
    rows: Vec<String>,
}

impl AsciiGrid {
    /// Build a grid from rows
    ///
    /// # Panics
    /// Panics if the rows are not all `width` characters long.
    pub fn from_rows(width: u32, rows: Vec<String>) -> Self {
        assert!(
            rows.iter().all(|row| row.chars().count() == width as usize),
            "every row must be {width} characters wide"
        );
        Self {
            width,
            height: rows.len() as u32,
            rows,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Plain-text form: every row followed by a newline
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.rows.iter().map(|r| r.len() + 1).sum());
        for row in &self.rows {
            text.push_str(row);
            text.push('\n');
        }
        text
    }
}

impl fmt::Display for AsciiGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Select the ramp character for every pixel of a row
///
/// # Arguments
/// * `image` - Resized RGB image
/// * `y` - Row index
/// * `ramp` - Glyphs, darkest first
/// * `invert` - Map bright pixels to dark glyphs instead
pub fn render_row(image: &RgbImage, y: u32, ramp: &CharacterRamp, invert: bool) -> String {
    (0..image.width())
        .map(|x| ramp.char_for(pixel_scaled_luma(image.get_pixel(x, y)), invert))
        .collect()
}

/// Map every pixel of `image` onto `ramp`
///
/// Rows are computed in parallel and collected in order, so the result is
/// the same as a plain row-major loop.
pub fn render(image: &RgbImage, ramp: &CharacterRamp, invert: bool) -> AsciiGrid {
    let (width, height) = image.dimensions();

    let rows = (0..height)
        .into_par_iter()
        .map(|y| render_row(image, y, ramp, invert))
        .collect();

    AsciiGrid {
        width,
        height,
        rows,
    }
}
