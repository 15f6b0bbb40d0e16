use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Constants of the box geometry. The defaults reproduce the classic EPS
/// schema output; changing them changes the drawn pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Added to the font size to get the row height.
    pub row_margin: u32,
    /// Blank characters measured and added to the widest column label.
    pub margin_blanks: usize,
    /// Step of the title widening loop.
    pub widen_step: f64,
    pub max_widen_iterations: usize,
    pub header_offset: f64,
    pub text_offset: f64,
    pub text_inset: f64,
    pub border_width: f64,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ConfigError - I/O Error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("ConfigError - Parse Error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("ConfigError - widen_step must be a positive number, got {0}")]
    InvalidWidenStep(f64),
    #[error("ConfigError - max_widen_iterations must be at least 1")]
    InvalidIterationBound,
}

impl LayoutConfig {
    pub const ROW_MARGIN: u32 = 4;
    pub const MARGIN_BLANKS: usize = 6;
    pub const WIDEN_STEP: f64 = 7.0;
    pub const MAX_WIDEN_ITERATIONS: usize = 10_000;
    // header rect sits 12 below the origin, text baselines 14 below
    pub const HEADER_OFFSET: f64 = 12.0;
    pub const TEXT_OFFSET: f64 = 14.0;
    pub const TEXT_INSET: f64 = 5.0;
    pub const BORDER_WIDTH: f64 = 1.0;

    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_toml_str(&input)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.widen_step.is_finite() && self.widen_step > 0.0) {
            return Err(ConfigError::InvalidWidenStep(self.widen_step));
        }
        if self.max_widen_iterations == 0 {
            return Err(ConfigError::InvalidIterationBound);
        }
        Ok(())
    }

    pub fn margin(&self) -> String {
        " ".repeat(self.margin_blanks)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_margin: Self::ROW_MARGIN,
            margin_blanks: Self::MARGIN_BLANKS,
            widen_step: Self::WIDEN_STEP,
            max_widen_iterations: Self::MAX_WIDEN_ITERATIONS,
            header_offset: Self::HEADER_OFFSET,
            text_offset: Self::TEXT_OFFSET,
            text_inset: Self::TEXT_INSET,
            border_width: Self::BORDER_WIDTH,
        }
    }
}
