//! Extraction options

use crate::error::{ExtractError, Result};
use crate::types::{DEFAULT_MIN_BYTES, Markers};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "./extracted_images";

/// Options for one extraction run
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// File to scan
    pub input: PathBuf,
    /// Directory receiving `image_NNN.jpg` files
    pub output_dir: PathBuf,
    /// Spans must be strictly larger than this many bytes
    pub min_bytes: usize,
    /// Start/end byte patterns
    pub markers: Markers,
    /// Optional JSON manifest describing every extracted image
    pub manifest: Option<PathBuf>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            min_bytes: DEFAULT_MIN_BYTES,
            markers: Markers::jpeg(),
            manifest: None,
        }
    }
}

impl ExtractOptions {
    /// Creates options for the given input file
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_min_bytes(mut self, min_bytes: usize) -> Self {
        self.min_bytes = min_bytes;
        self
    }

    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    pub fn with_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest = Some(path.into());
        self
    }

    /// Rejects settings the scanner cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.markers.start.is_empty() {
            return Err(ExtractError::InvalidMarker(
                "start marker is empty".to_string(),
            ));
        }
        if self.markers.end.is_empty() {
            return Err(ExtractError::InvalidMarker("end marker is empty".to_string()));
        }
        Ok(())
    }
}
