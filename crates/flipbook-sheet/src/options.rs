use crate::types::*;

/// Sheet generation configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetOptions {
    /// Ordering applied to the frame sequence. The timestamp strategies
    /// read the staged copies of the inputs, so capture-time or filename
    /// ordering is preferred when inputs arrive as byte blobs.
    pub sort_strategy: SortStrategy,

    // Page geometry
    pub paper_size: PaperSize,
    pub orientation: Orientation,

    /// Grid columns, 2..=8
    pub columns: usize,
    /// Grid rows, 2..=7
    pub rows: usize,

    /// Space between the page edge and the grid
    pub margin_mm: f32,
    /// Space between adjacent cells
    pub gutter_mm: f32,

    /// Divisor applied to page and cell dimensions for the first-page
    /// preview raster
    pub preview_scale: f32,
    /// JPEG quality used for frames embedded in the PDF
    pub jpeg_quality: u8,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            sort_strategy: SortStrategy::CaptureTime,
            paper_size: PaperSize::Letter,
            orientation: Orientation::Landscape,
            columns: 3,
            rows: 4,
            // 0.25 in and 0.1 in
            margin_mm: 6.35,
            gutter_mm: 2.54,
            preview_scale: 1.5,
            jpeg_quality: 95,
        }
    }
}

impl SheetOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| SheetError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SheetError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !(2..=8).contains(&self.columns) {
            return Err(SheetError::Config(format!(
                "Columns must be between 2 and 8, got {}",
                self.columns
            )));
        }
        if !(2..=7).contains(&self.rows) {
            return Err(SheetError::Config(format!(
                "Rows must be between 2 and 7, got {}",
                self.rows
            )));
        }
        if self.margin_mm < 0.0 || self.gutter_mm < 0.0 {
            return Err(SheetError::Config(
                "Margin and gutter must not be negative".to_string(),
            ));
        }
        if self.preview_scale < 1.0 {
            return Err(SheetError::Config(format!(
                "Preview scale must be at least 1.0, got {}",
                self.preview_scale
            )));
        }
        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err(SheetError::Config(format!(
                "JPEG quality must be between 1 and 100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }

    /// Frames per page for this grid shape
    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }
}
