use ascii_ramp::config::{HEIGHT_SCALE_RANGE, MAX_WIDTH_RANGE};
use ascii_ramp::processor::load_image;
use ascii_ramp::{AsciiGrid, DEFAULT_RAMP, OutputFormat, RenderSettings, Reveal, RevealStep, convert, write_html};
use eframe::egui;
use image::DynamicImage;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Longest side of the source preview thumbnail
const THUMBNAIL_SIZE: u32 = 300;

/// Main application state for the generator GUI
pub struct AsciiApp {
    /// Selected source image
    image_path: Option<PathBuf>,
    /// Texture handle for the source thumbnail
    preview_texture: Option<egui::TextureHandle>,
    /// Thumbnail waiting to be uploaded as a texture
    pending_preview: Option<DynamicImage>,

    /// Conversion settings edited by the controls
    settings: RenderSettings,
    /// Last generated grid
    grid: Option<AsciiGrid>,

    /// Text revealed so far in the preview
    shown_text: String,
    /// Steps of the running reveal that have not been shown yet
    pending_steps: VecDeque<RevealStep>,
    /// When the next pending step is due
    next_step_at: Instant,

    /// Regenerate the terminal preview whenever a setting changes
    auto_process: bool,
    /// Flag indicating settings have changed since the last generate
    needs_reprocess: bool,

    /// Last conversion time in milliseconds
    last_process_time_ms: f64,
    /// HTML file written by the last generate
    saved_html: Option<PathBuf>,
    /// Error message to display (if any)
    error_message: Option<String>,
}

impl Default for AsciiApp {
    fn default() -> Self {
        Self {
            image_path: None,
            preview_texture: None,
            pending_preview: None,
            settings: RenderSettings::default(),
            grid: None,
            shown_text: String::new(),
            pending_steps: VecDeque::new(),
            next_step_at: Instant::now(),
            auto_process: false,
            needs_reprocess: false,
            last_process_time_ms: 0.0,
            saved_html: None,
            error_message: None,
        }
    }
}

impl AsciiApp {
    /// Create a new generator application
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Select an image and prepare its thumbnail
    pub fn select_image(&mut self, path: &Path) {
        match load_image(path) {
            Ok(img) => {
                self.pending_preview = Some(img.thumbnail(THUMBNAIL_SIZE, THUMBNAIL_SIZE));
                self.preview_texture = None;
                self.image_path = Some(path.to_path_buf());
                self.needs_reprocess = true;
                self.error_message = None;
            }
            Err(e) => {
                let detail = error_chain(&e);
                log::warn!("{detail}");
                self.preview_texture = None;
                self.image_path = None;
                self.error_message = Some(format!("Could not load image: {detail}"));
            }
        }
    }

    /// Convert the selected image and send it to the chosen sink
    ///
    /// A failed conversion clears the previous grid.
    fn generate(&mut self) {
        let Some(path) = self.image_path.clone() else {
            self.error_message = Some("Please select an image first".to_string());
            return;
        };
        if self.settings.output_format == OutputFormat::Html && self.settings.html_path.is_none() {
            self.error_message = Some("Please select an HTML output file".to_string());
            return;
        }

        self.shown_text.clear();
        self.pending_steps.clear();
        self.saved_html = None;

        let start = Instant::now();
        let grid = match convert(&path, &self.settings) {
            Ok(grid) => grid,
            Err(e) => {
                self.grid = None;
                self.error_message = Some(format!("Failed to generate ASCII art: {}", error_chain(&e)));
                return;
            }
        };
        self.last_process_time_ms = start.elapsed().as_secs_f64() * 1000.0;
        self.needs_reprocess = false;
        self.error_message = None;

        match (self.settings.output_format, self.settings.html_path.clone()) {
            (OutputFormat::Html, Some(html_path)) => match write_html(&html_path, &grid) {
                Ok(()) => self.saved_html = Some(html_path),
                Err(e) => {
                    self.error_message = Some(format!("Failed to save HTML file: {}", error_chain(&e)))
                }
            },
            _ => {
                let reveal = Reveal::from_settings(&grid, &self.settings);
                self.pending_steps = VecDeque::with_capacity(reveal.step_count());
                self.pending_steps.extend(reveal);
                self.next_step_at = Instant::now();
            }
        }

        self.grid = Some(grid);
    }

    /// Move every due reveal step into the visible text
    ///
    /// Returns how long to wait before the next step, if any remain.
    fn advance_reveal(&mut self) -> Option<Duration> {
        let now = Instant::now();

        while self.next_step_at <= now {
            let step = self.pending_steps.pop_front()?;
            self.shown_text.push_str(&step.text);
            self.next_step_at += step.pause;
        }

        if self.pending_steps.is_empty() {
            None
        } else {
            Some(self.next_step_at - now)
        }
    }

    /// Render the control panel UI
    fn render_controls(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.heading("Image Selection");
        ui.separator();

        ui.horizontal(|ui| {
            let name = self
                .image_path
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "No image selected".to_string());
            ui.label(name);

            if ui.button("Browse...").clicked()
                && let Some(path) = rfd::FileDialog::new()
                    .add_filter("Image files", &["jpg", "jpeg", "png", "bmp", "gif"])
                    .pick_file()
            {
                self.select_image(&path);
            }
        });

        ui.add_space(8.0);

        ui.collapsing("Conversion Settings", |ui| {
            changed |= ui
                .add(egui::Slider::new(&mut self.settings.max_width, MAX_WIDTH_RANGE).text("Max Width"))
                .on_hover_text("Maximum number of characters per line")
                .changed();

            changed |= ui
                .add(
                    egui::Slider::new(&mut self.settings.height_scale, HEIGHT_SCALE_RANGE)
                        .step_by(0.1)
                        .text("Height Scale"),
                )
                .on_hover_text("Compensates for characters being taller than wide")
                .changed();

            changed |= ui
                .checkbox(&mut self.settings.invert_brightness, "Invert Brightness")
                .on_hover_text("Use dense characters for dark pixels")
                .changed();

            ui.label("Character Set:");
            ui.horizontal(|ui| {
                changed |= ui
                    .text_edit_singleline(&mut self.settings.character_ramp)
                    .on_hover_text("Characters from darkest to brightest; empty uses the default")
                    .changed();

                if ui.button("Reset").clicked() {
                    self.settings.character_ramp = DEFAULT_RAMP.to_string();
                    changed = true;
                }
            });
        });

        ui.add_space(8.0);

        ui.collapsing("Output Format", |ui| {
            ui.radio_value(&mut self.settings.output_format, OutputFormat::Terminal, "Terminal Output");
            ui.radio_value(&mut self.settings.output_format, OutputFormat::Html, "HTML Output");

            if self.settings.output_format == OutputFormat::Html {
                ui.horizontal(|ui| {
                    let name = self
                        .settings
                        .html_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "No file selected".to_string());
                    ui.label(name);

                    if ui.button("Browse...").clicked()
                        && let Some(path) = rfd::FileDialog::new()
                            .add_filter("HTML files", &["html"])
                            .set_file_name("ascii_art.html")
                            .save_file()
                    {
                        self.settings.html_path = Some(path);
                    }
                });
            }
        });

        ui.add_space(8.0);

        ui.collapsing("Render Options", |ui| {
            ui.checkbox(&mut self.settings.live_render, "Live Render")
                .on_hover_text("Reveal the art line by line");
            ui.checkbox(&mut self.settings.animation_enabled, "Animate")
                .on_hover_text("Reveal the art character by character");

            ui.horizontal(|ui| {
                ui.label("Animation Delay:");
                ui.add(
                    egui::DragValue::new(&mut self.settings.animation_delay_ms)
                        .range(0.0..=1000.0)
                        .speed(1.0)
                        .suffix(" ms"),
                );
            });
        });

        ui.add_space(16.0);
        ui.separator();

        ui.checkbox(&mut self.auto_process, "Auto-generate")
            .on_hover_text("Regenerate the terminal preview when settings change");

        if ui
            .add_sized([ui.available_width(), 32.0], egui::Button::new("Generate ASCII Art"))
            .clicked()
        {
            self.generate();
        }

        if self.last_process_time_ms > 0.0 {
            ui.label(format!("Last generate: {:.1} ms", self.last_process_time_ms));
        }

        changed
    }

    /// Show the source thumbnail, uploading it on first use
    fn render_preview(&mut self, ui: &mut egui::Ui) {
        ui.heading("Image Preview");

        if let Some(img) = self.pending_preview.take() {
            let rgba = img.to_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
            self.preview_texture =
                Some(ui.ctx().load_texture("preview", color_image, egui::TextureOptions::default()));
        }

        match &self.preview_texture {
            Some(tex) => {
                ui.image((tex.id(), tex.size_vec2()));
            }
            None => {
                ui.label("No image loaded");
            }
        }
    }

    /// Show the revealed art in a black monospace area
    fn render_output(&self, ui: &mut egui::Ui) {
        ui.heading("ASCII Art Preview");

        if let Some(grid) = &self.grid {
            ui.label(format!("{}x{} characters", grid.width(), grid.height()));
        }

        if let Some(path) = &self.saved_html {
            ui.horizontal(|ui| {
                ui.label("HTML file saved:");
                let url = format!("file://{}", std::path::absolute(path).unwrap_or_else(|_| path.clone()).display());
                ui.hyperlink_to(path.display().to_string(), url);
            });
        }

        egui::Frame::default()
            .fill(egui::Color32::BLACK)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::ScrollArea::both().stick_to_bottom(true).show(ui, |ui| {
                    ui.set_min_size(ui.available_size());
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(&self.shown_text)
                                .monospace()
                                .size(8.0)
                                .color(egui::Color32::WHITE),
                        )
                        .wrap_mode(egui::TextWrapMode::Extend),
                    );
                });
            });
    }
}

impl eframe::App for AsciiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Image files", &["jpg", "jpeg", "png", "bmp", "gif"])
                            .pick_file()
                        {
                            self.select_image(&path);
                        }
                        ui.close();
                    }

                    ui.separator();

                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Left panel: Controls
        egui::SidePanel::left("control_panel")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if self.render_controls(ui) {
                        self.needs_reprocess = true;
                    }
                    ui.add_space(16.0);
                    self.render_preview(ui);
                });
            });

        // Auto-generate only ever refreshes the on-screen preview
        if self.auto_process
            && self.needs_reprocess
            && self.image_path.is_some()
            && self.settings.output_format == OutputFormat::Terminal
        {
            self.generate();
        }

        if let Some(wait) = self.advance_reveal() {
            ctx.request_repaint_after(wait);
        }

        // Central panel: revealed art
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(ref msg) = self.error_message {
                ui.colored_label(egui::Color32::RED, msg);
                if ui.button("Clear Error").clicked() {
                    self.error_message = None;
                }
                ui.separator();
            }

            self.render_output(ui);
        });
    }
}

/// Error message followed by each underlying cause, joined with `: `
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(e) = cause {
        message.push_str(": ");
        message.push_str(&e.to_string());
        cause = e.source();
    }
    message
}
