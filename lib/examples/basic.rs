/// Basic example: Convert a generated test image to text art
///
/// Draws a lit sphere on a dark background, prints the art, and saves an HTML copy
use ascii_ramp::{RenderSettings, convert_image, processor::resize_for_grid, write_html};
use image::{DynamicImage, Rgb, RgbImage};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("ascii-ramp - Basic Example");
    println!("==========================\n");

    let width = 320;
    let height = 320;
    let mut img = RgbImage::from_pixel(width, height, Rgb([20, 20, 30]));

    // Sphere lit from the top left
    let center = width as f32 / 2.0;
    let radius = 120.0;
    for y in 0..height {
        for x in 0..width {
            let dx = (x as f32 - center) / radius;
            let dy = (y as f32 - center) / radius;
            let d2 = dx * dx + dy * dy;
            if d2 < 1.0 {
                let dz = (1.0 - d2).sqrt();
                let light = (-0.5 * dx - 0.5 * dy + 0.7 * dz).clamp(0.0, 1.0);
                let v = (light * 255.0) as u8;
                img.put_pixel(x, y, Rgb([v, v, v]));
            }
        }
    }

    println!("Created test image: {}x{}", width, height);

    let settings = RenderSettings {
        max_width: 60,
        height_scale: 0.5,
        ..Default::default()
    };

    println!("Converting with:");
    println!("  - Max width: {}", settings.max_width);
    println!("  - Height scale: {}", settings.height_scale);
    println!("  - Ramp length: {}", settings.ramp().len());
    println!();

    let resized = resize_for_grid(&DynamicImage::ImageRgb8(img), settings.max_width, settings.height_scale)?;
    let grid = convert_image(&resized, &settings);

    print!("{grid}");

    write_html(Path::new("basic_output.html"), &grid)?;
    println!("\n✓ Saved HTML to: basic_output.html");
    Ok(())
}
