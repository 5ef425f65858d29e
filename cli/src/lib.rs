//! Command line front end for ascii-ramp

use std::io::Write;
use std::ops::ControlFlow;
use std::path::PathBuf;

use anyhow::{Context, Result};
use ascii_ramp::{AsciiGrid, OutputFormat, RenderSettings, Reveal, convert, play, write_html, write_text};
use clap::{Parser, ValueEnum};

/// Render an image as text art in the terminal or as an HTML page.
#[derive(Parser, Debug)]
#[command(name = "ascii-ramp", version, long_about = None)]
pub struct Cli {
    /// Image to convert (PNG, JPEG, BMP, GIF).
    pub image: PathBuf,

    /// TOML settings file. Flags given on the command line override it.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum width in characters.
    #[arg(short = 'w', long)]
    pub max_width: Option<u32>,

    /// Vertical scale applied to the image aspect ratio.
    #[arg(short = 's', long)]
    pub height_scale: Option<f32>,

    /// Map bright pixels to sparse glyphs (for light backgrounds).
    #[arg(short, long, default_value_t = false, overrides_with = "no_invert")]
    pub invert: bool,

    /// Turn off inversion set in the settings file.
    #[arg(long, default_value_t = false, overrides_with = "invert")]
    pub no_invert: bool,

    /// Glyphs ordered dark to light. Empty uses the built-in ramp.
    #[arg(short, long)]
    pub ramp: Option<String>,

    /// Output sink.
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// HTML file to write; implies --format html.
    #[arg(long)]
    pub html_out: Option<PathBuf>,

    /// Also save the plain text to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print line by line with a pause between lines.
    #[arg(long, default_value_t = false, overrides_with = "no_live")]
    pub live: bool,

    /// Turn off line-by-line printing set in the settings file.
    #[arg(long, default_value_t = false, overrides_with = "live")]
    pub no_live: bool,

    /// Print character by character.
    #[arg(short, long, default_value_t = false, overrides_with = "no_animate")]
    pub animate: bool,

    /// Turn off character animation set in the settings file.
    #[arg(long, default_value_t = false, overrides_with = "animate")]
    pub no_animate: bool,

    /// Pause per line in milliseconds (a tenth of it per character).
    #[arg(long)]
    pub delay_ms: Option<f64>,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Terminal,
    Html,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Terminal => OutputFormat::Terminal,
            Format::Html => OutputFormat::Html,
        }
    }
}

impl Cli {
    /// Merge the settings file (if any) with command line overrides
    pub fn settings(&self) -> Result<RenderSettings> {
        let mut settings = match &self.config {
            Some(path) => RenderSettings::load(path)?,
            None => RenderSettings::default(),
        };

        if let Some(max_width) = self.max_width {
            settings.max_width = max_width;
        }
        if let Some(height_scale) = self.height_scale {
            settings.height_scale = height_scale;
        }
        if let Some(invert) = switch(self.invert, self.no_invert) {
            settings.invert_brightness = invert;
        }
        if let Some(ramp) = &self.ramp {
            settings.character_ramp = ramp.clone();
        }
        if let Some(path) = &self.html_out {
            settings.html_path = Some(path.clone());
            settings.output_format = OutputFormat::Html;
        }
        if let Some(format) = self.format {
            settings.output_format = format.into();
        }
        if let Some(live) = switch(self.live, self.no_live) {
            settings.live_render = live;
        }
        if let Some(animate) = switch(self.animate, self.no_animate) {
            settings.animation_enabled = animate;
        }
        if let Some(delay_ms) = self.delay_ms {
            settings.animation_delay_ms = delay_ms;
        }

        settings.validate()?;
        Ok(settings)
    }
}

/// `--flag` / `--no-flag` pair; clap keeps only the last one given
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Convert the image and send it to the configured sink
///
/// The HTML document is written before the optional text dump, so a failed
/// HTML write leaves no files behind. Terminal output goes to `out`, paced
/// with `std::thread::sleep`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<AsciiGrid> {
    let settings = cli.settings()?;
    let grid = convert(&cli.image, &settings)
        .with_context(|| format!("failed to convert {}", cli.image.display()))?;

    let html_path = match (settings.output_format, &settings.html_path) {
        (OutputFormat::Html, Some(path)) => {
            write_html(path, &grid)?;
            Some(path)
        }
        _ => None,
    };

    if let Some(path) = &cli.output {
        write_text(path, &grid)?;
    }

    match html_path {
        Some(path) => {
            writeln!(out, "Saved HTML to {}", path.display())?;
        }
        None => {
            let reveal = Reveal::from_settings(&grid, &settings);
            log::debug!(
                "revealing {}x{} grid in {:?} mode",
                grid.width(),
                grid.height(),
                reveal.mode()
            );
            play(reveal, out, |pause| {
                if !pause.is_zero() {
                    std::thread::sleep(pause);
                }
                ControlFlow::Continue(())
            })?;
        }
    }

    Ok(grid)
}
