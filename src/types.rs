use std::ops::Range;
use std::path::PathBuf;

pub type Offset = usize;

pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];
pub const JPEG_EOI: [u8; 2] = [0xFF, 0xD9];

/// Spans must be strictly larger than this to be written out.
pub const DEFAULT_MIN_BYTES: usize = 10_000;

pub const OUTPUT_EXTENSION: &str = "jpg";

/// Start/end byte patterns bounding a candidate image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: Vec<u8>,
    pub end: Vec<u8>,
}

impl Markers {
    pub fn new(start: impl Into<Vec<u8>>, end: impl Into<Vec<u8>>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn jpeg() -> Self {
        Self::new(JPEG_SOI, JPEG_EOI)
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::jpeg()
    }
}

/// Byte range `[start, end)` of one start/end marker pair, end marker included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Offset,
    pub end: Offset,
}

impl Span {
    pub fn new(start: Offset, end: Offset) -> Self {
        debug_assert!(start < end, "span must not be empty");
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn exceeds(&self, min_bytes: usize) -> bool {
        self.len() > min_bytes
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedImage {
    /// 1-based extraction order.
    pub index: usize,
    pub offset: Offset,
    pub len: usize,
    pub path: PathBuf,
}

impl ExtractedImage {
    pub fn filename(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string()
    }
}

#[derive(Debug, Default)]
pub struct ExtractionReport {
    pub images: Vec<ExtractedImage>,
    pub spans_found: usize,
    pub spans_skipped: usize,
}

impl ExtractionReport {
    pub fn count(&self) -> usize {
        self.images.len()
    }

    pub fn total_bytes(&self) -> usize {
        self.images.iter().map(|i| i.len).sum()
    }
}
