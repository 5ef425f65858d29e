use image::Rgb;

/// Fixed-point factor applied to luma so the weights become integers
pub const LUMA_SCALE: u32 = 1000;

/// Perceived brightness of an RGB color multiplied by [`LUMA_SCALE`]
///
/// L = 0.299*R + 0.587*G + 0.114*B, computed exactly in integers. The weights
/// sum to exactly 1000, so white is exactly `255 * LUMA_SCALE`.
#[inline]
pub fn scaled_luma(r: u8, g: u8, b: u8) -> u32 {
    299 * r as u32 + 587 * g as u32 + 114 * b as u32
}

#[inline]
pub fn pixel_scaled_luma(pixel: &Rgb<u8>) -> u32 {
    let [r, g, b] = pixel.0;
    scaled_luma(r, g, b)
}
