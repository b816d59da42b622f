use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default render resolution, matching common scan resolutions
pub const DEFAULT_DPI: u32 = 300;

/// Comprehensive spread conversion configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpreadOptions {
    // Input
    pub input_dir: PathBuf,
    pub recursive: bool,

    // Pairing policy
    pub single_top: bool,
    pub reading_direction: ReadingDirection,

    // Rendering
    pub dpi: u32,
    pub background: Background,
    pub pdfium_library: Option<PathBuf>,

    // Failure policy
    pub keep_going: bool,
}

impl Default for SpreadOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            recursive: false,
            single_top: false,
            reading_direction: ReadingDirection::LeftToRight,
            dpi: DEFAULT_DPI,
            background: Background::default(),
            pdfium_library: None,
            keep_going: false,
        }
    }
}

impl SpreadOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| SpreadError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SpreadError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// True when pairs are ordered right-to-left
    pub fn vertical(&self) -> bool {
        self.reading_direction.is_vertical()
    }

    /// Render scale relative to the PDF's 72 points per inch
    pub fn render_scale(&self) -> f32 {
        self.dpi as f32 / 72.0
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(SpreadError::Config("DPI must be greater than zero".to_string()));
        }

        if self.input_dir.as_os_str().is_empty() {
            return Err(SpreadError::Config("No input directory specified".to_string()));
        }

        Ok(())
    }
}
