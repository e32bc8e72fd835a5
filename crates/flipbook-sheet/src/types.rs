use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No input images after filtering")]
    NoInput,
    #[error("No frames could be decoded")]
    NoFrames,
}

pub type Result<T> = std::result::Result<T, SheetError>;

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Landscape: width > height (recommended for wide frames)
    #[default]
    Landscape,
    /// Portrait: height > width
    Portrait,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// How the frame sequence is ordered before placement
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortStrategy {
    /// Embedded capture timestamp (EXIF DateTimeOriginal); images
    /// without one sort after all images that have it
    #[default]
    CaptureTime,
    /// Case-insensitive filename comparison
    Filename,
    /// Filesystem modification time
    ModifiedTime,
    /// Filesystem creation time
    CreatedTime,
}

/// Counts reported alongside a generated sheet set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetStatistics {
    /// Input files that survived hidden-name filtering
    pub valid_images: usize,
    /// Hidden files (leading dot, `._` resource forks) excluded up front
    pub skipped_hidden: usize,
    /// Frames actually placed on pages
    pub frames: usize,
    /// Output page count
    pub pages: usize,
}
