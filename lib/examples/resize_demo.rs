use ascii_ramp::processor::target_dimensions;

fn main() {
    println!("ascii-ramp - Grid Size Demo");
    println!("===========================\n");

    let test_cases = vec![
        (100, 100, "100x100 (smaller than max width)"),
        (640, 480, "640x480 (VGA)"),
        (1920, 1080, "1920x1080 (Full HD)"),
        (400, 1600, "400x1600 (tall strip)"),
        (3000, 10, "3000x10 (thin banner)"),
    ];

    for height_scale in [0.5, 1.0] {
        println!("height_scale = {}", height_scale);

        for (width, height, description) in &test_cases {
            match target_dimensions(*width, *height, 120, height_scale) {
                Ok((cols, rows)) => println!("  {:<36} -> {}x{} characters", description, cols, rows),
                Err(e) => println!("  {:<36} -> error: {}", description, e),
            }
        }
        println!();
    }

    println!("Widths are capped at 120; heights keep the original aspect ratio");
    println!("times height_scale, rounded and never below one row.");
}
