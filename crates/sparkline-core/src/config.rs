// File: crates/sparkline-core/src/config.rs
// Summary: Sparkline options with defaults, TOML loading and validation.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SparklineError};
use crate::theme::{self, GradientColors};
use crate::types::{PlotExtent, HEIGHT, STROKE_WIDTH, WIDTH};

/// Presentation options. Every field is optional in TOML; camelCase names are
/// accepted as aliases.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SparklineOptions {
    pub width: f64,
    pub height: f64,
    #[serde(alias = "strokeWidth")]
    pub stroke_width: f64,
    pub animate: bool,
    #[serde(alias = "showDots")]
    pub show_dots: bool,
    #[serde(alias = "gradientColors")]
    pub gradient_colors: GradientColors,
    #[serde(alias = "showTooltip")]
    pub show_tooltip: bool,
    #[serde(alias = "backgroundColor")]
    pub background_color: String,
}

impl Default for SparklineOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            stroke_width: STROKE_WIDTH,
            animate: true,
            show_dots: true,
            gradient_colors: GradientColors::default(),
            show_tooltip: true,
            background_color: theme::BACKGROUND.to_string(),
        }
    }
}

impl SparklineOptions {
    pub fn extent(&self) -> PlotExtent {
        PlotExtent::new(self.width, self.height, self.stroke_width)
    }

    /// Reject non-positive or non-finite sizes.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("stroke_width", self.stroke_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SparklineError::InvalidOption { name, value });
            }
        }
        Ok(())
    }
}

/// A config file: the series plus its options.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SparklineConfig {
    #[serde(default)]
    pub data: Vec<f64>,
    #[serde(flatten)]
    pub options: SparklineOptions,
}

impl SparklineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: SparklineConfig = toml::from_str(s)?;
        cfg.options.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SparklineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded sparkline config");
        Self::from_toml_str(&text)
    }
}
