use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{AsciiError, Result};
use crate::ramp::{CharacterRamp, DEFAULT_RAMP};

/// Suggested width range for front-end controls (not enforced)
pub const MAX_WIDTH_RANGE: std::ops::RangeInclusive<u32> = 20..=200;
/// Suggested height scale range for front-end controls (not enforced)
pub const HEIGHT_SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.1..=2.0;

/// Where a finished grid goes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Html,
}

/// Settings for one conversion run
///
/// Passed by reference into each call; nothing here is shared between runs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Upper bound on the grid width in characters
    pub max_width: u32, // default 100
    /// Vertical correction for non-square glyph cells
    pub height_scale: f32, // default 0.5
    pub invert_brightness: bool,
    /// Glyphs ordered dark to light; empty means the default ramp
    pub character_ramp: String,

    pub output_format: OutputFormat,
    /// Required when `output_format` is `Html`
    pub html_path: Option<PathBuf>,

    /// Reveal the grid line by line
    pub live_render: bool,
    /// Reveal the grid character by character (takes priority over `live_render`)
    pub animation_enabled: bool,
    /// Pause per line; per character it is a tenth of this
    pub animation_delay_ms: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_width: 100,
            height_scale: 0.5,
            invert_brightness: false,
            character_ramp: DEFAULT_RAMP.to_string(),

            output_format: OutputFormat::Terminal,
            html_path: None,

            live_render: false,
            animation_enabled: false,
            animation_delay_ms: 10.0,
        }
    }
}

impl RenderSettings {
    /// Checks the settings for values no conversion can run with
    pub fn validate(&self) -> Result<()> {
        if self.max_width < 1 {
            return Err(AsciiError::Config(format!(
                "max_width must be at least 1, got {}",
                self.max_width
            )));
        }
        if !self.height_scale.is_finite() || self.height_scale <= 0.0 {
            return Err(AsciiError::Config(format!(
                "height_scale must be greater than 0, got {}",
                self.height_scale
            )));
        }
        if !self.animation_delay_ms.is_finite()
            || self.animation_delay_ms < 0.0
            || Duration::try_from_secs_f64(self.animation_delay_ms / 1000.0).is_err()
        {
            return Err(AsciiError::Config(format!(
                "animation_delay_ms must be 0 or more and fit in a duration, got {}",
                self.animation_delay_ms
            )));
        }
        if self.output_format == OutputFormat::Html && self.html_path.is_none() {
            return Err(AsciiError::Config(
                "html output selected but no output path given".to_string(),
            ));
        }
        Ok(())
    }

    /// Ramp to render with, after the empty-input fallback
    pub fn ramp(&self) -> CharacterRamp {
        CharacterRamp::new(&self.character_ramp)
    }

    pub fn animation_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.animation_delay_ms.max(0.0) / 1000.0).unwrap_or(Duration::MAX)
    }

    /// Parse settings from TOML; missing keys take their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| AsciiError::Config(format!("bad settings file: {e}")))
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AsciiError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text)?;
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }
}
