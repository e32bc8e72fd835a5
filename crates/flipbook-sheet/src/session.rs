//! Per-session state
//!
//! An explicit object the caller owns, holding the current input set
//! and the output of the most recent generate call. Setting new inputs
//! invalidates the cached output.

use crate::options::SheetOptions;
use crate::sheet::{self, SheetOutput, SourceImage, is_hidden_name};
use crate::types::Result;

#[derive(Debug, Default)]
pub struct Session {
    input_files: Vec<SourceImage>,
    last_output: Option<SheetOutput>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the input set; any previously generated output is dropped
    pub fn set_inputs(&mut self, images: Vec<SourceImage>) {
        self.input_files = images;
        self.last_output = None;
    }

    pub fn inputs(&self) -> &[SourceImage] {
        &self.input_files
    }

    /// (visible, hidden) counts of the current inputs
    pub fn input_counts(&self) -> (usize, usize) {
        let hidden = self
            .input_files
            .iter()
            .filter(|image| is_hidden_name(&image.name))
            .count();
        (self.input_files.len() - hidden, hidden)
    }

    /// Run generation over the stored inputs and cache the result
    pub async fn generate(&mut self, options: &SheetOptions) -> Result<&SheetOutput> {
        let output = sheet::generate(&self.input_files, options).await?;
        Ok(self.last_output.insert(output))
    }

    pub fn last_output(&self) -> Option<&SheetOutput> {
        self.last_output.as_ref()
    }

    /// Drop inputs and any cached output
    pub fn clear(&mut self) {
        self.input_files.clear();
        self.last_output = None;
    }
}
