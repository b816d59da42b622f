use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpreadError {
    #[error("Cannot read source directory {}: {source}", .path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(
        "{} would write into {}, already used by {}",
        .source_pdf.display(),
        .output_dir.display(),
        .claimed_by.display()
    )]
    OutputCollision {
        source_pdf: PathBuf,
        output_dir: PathBuf,
        claimed_by: PathBuf,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Coarse classification of a [`SpreadError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source directory could not be listed
    Discovery,
    /// A PDF, page, or page image could not be decoded
    Decode,
    /// Output could not be created, copied, or encoded
    Io,
    /// Options were rejected before any work started
    Config,
}

impl SpreadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SpreadError::Discovery { .. } => ErrorKind::Discovery,
            SpreadError::Decode(_) => ErrorKind::Decode,
            SpreadError::Image(err) => match err {
                image::ImageError::Decoding(_) | image::ImageError::Unsupported(_) => {
                    ErrorKind::Decode
                }
                _ => ErrorKind::Io,
            },
            SpreadError::Io(_) | SpreadError::OutputCollision { .. } | SpreadError::TaskJoin(_) => {
                ErrorKind::Io
            }
            SpreadError::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpreadError>;

/// Order of the two pages inside a spread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReadingDirection {
    /// Earlier page on the left
    #[default]
    LeftToRight,
    /// Earlier page on the right (vertical-writing books, manga)
    RightToLeft,
}

impl ReadingDirection {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            ReadingDirection::RightToLeft
        } else {
            ReadingDirection::LeftToRight
        }
    }

    pub fn is_vertical(self) -> bool {
        self == ReadingDirection::RightToLeft
    }
}

/// Opaque RGB colour used to fill the spread canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Background {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Background {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Background {
    pub const WHITE: Background = Background {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const BLACK: Background = Background { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }
}

impl std::str::FromStr for Background {
    type Err = SpreadError;

    /// Parse `R,G,B` with decimal components
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(SpreadError::Config(format!(
                "Background must be R,G,B, got '{}'",
                s
            )));
        }
        let mut rgb = [0u8; 3];
        for (slot, part) in rgb.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| {
                SpreadError::Config(format!("Invalid colour component '{}'", part))
            })?;
        }
        Ok(Background::new(rgb[0], rgb[1], rgb[2]))
    }
}

/// Role of a page copied through without pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleRole {
    /// First page held back by `single_top`
    Cover,
    /// Last page left over when the remainder is odd
    Trailing,
}

/// Pipeline stage reported to progress observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Rasterize,
    Compose,
}

/// Statistics about the allocation of one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Number of composite spreads
    pub spreads: usize,
    /// Whether the first page is emitted as a cover
    pub cover: bool,
    /// Whether the last page is emitted as a trailing single
    pub trailing_single: bool,
    /// Files written to the spread directory
    pub output_files: usize,
}

impl SpreadStatistics {
    /// Number of pages copied through without pairing
    pub fn singles(&self) -> usize {
        usize::from(self.cover) + usize::from(self.trailing_single)
    }
}
