mod app;

use app::AsciiApp;
use eframe::egui;

fn main() -> eframe::Result {
    // Configure logging
    env_logger::init();

    // Configure viewport/window
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("ASCII Art Generator")
            .with_icon(load_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "ASCII Art Generator",
        options,
        Box::new(|cc| Ok(Box::new(AsciiApp::new(cc)))),
    )
}

/// Application icon: a left-to-right brightness ramp in vertical bars
fn load_icon() -> egui::IconData {
    let icon_size = 32;
    let mut pixels = vec![0u8; icon_size * icon_size * 4];

    for y in 0..icon_size {
        for x in 0..icon_size {
            let idx = (y * icon_size + x) * 4;

            // Bars get denser (brighter) toward the right edge
            let level = (x * 255 / (icon_size - 1)) as u8;
            let lit = x % 4 != 3 && y % 4 != 3;
            let v = if lit { level } else { 0 };

            pixels[idx] = v; // R
            pixels[idx + 1] = v; // G
            pixels[idx + 2] = v; // B
            pixels[idx + 3] = 255; // A
        }
    }

    egui::IconData {
        rgba: pixels,
        width: icon_size as u32,
        height: icon_size as u32,
    }
}
