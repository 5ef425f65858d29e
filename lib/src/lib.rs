//! ascii-ramp - image to text-art converter
//!
//! Each pixel of a downsampled image is mapped to a glyph from a character
//! ramp by its luma (0.299R + 0.587G + 0.114B). The resulting grid can be
//! printed as plain text, revealed progressively, or saved as a static HTML
//! page.
//!
//! # Example
//! ```no_run
//! use ascii_ramp::{RenderSettings, convert, write_html};
//! use std::path::Path;
//!
//! let settings = RenderSettings {
//!     max_width: 80,
//!     ..Default::default()
//! };
//! let grid = convert(Path::new("photo.jpg"), &settings).unwrap();
//! print!("{grid}");
//! write_html(Path::new("photo.html"), &grid).unwrap();
//! ```

pub mod animation;
pub mod ascii;
pub mod config;
pub mod error;
pub mod luma;
pub mod output;
pub mod processor;
pub mod ramp;

// Re-export main types for convenience
pub use animation::{Reveal, RevealMode, RevealStep, play};
pub use ascii::{AsciiGrid, render};
pub use config::{OutputFormat, RenderSettings};
pub use error::{AsciiError, Result};
pub use output::{escape_html, render_html, write_html, write_text};
pub use processor::{convert, convert_image, preprocess};
pub use ramp::{CharacterRamp, DEFAULT_RAMP};
