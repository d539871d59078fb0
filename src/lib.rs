pub mod analysis;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod manifest;
pub mod options;
pub mod types;

pub use analysis::{SpanScanner, find_spans};
pub use error::{ExtractError, Result};
pub use extraction::{Extractor, extract, generate_filename};
pub use options::ExtractOptions;
pub use types::{ExtractedImage, ExtractionReport, Markers, Offset, Span};
