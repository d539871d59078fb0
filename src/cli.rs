use crate::options::{DEFAULT_OUTPUT_DIR, ExtractOptions};
use crate::types::{DEFAULT_MIN_BYTES, JPEG_EOI, JPEG_SOI, Markers};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pdfjpeg")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract embedded JPEG images from a PDF by marker scanning", long_about = None)]
pub struct Cli {
    /// File to scan (usually a PDF)
    pub input: PathBuf,

    /// Directory for extracted images, created if missing
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Only keep spans strictly larger than this many bytes
    #[arg(long, default_value_t = DEFAULT_MIN_BYTES)]
    pub min_bytes: usize,

    /// Start marker as hex, e.g. ffd8
    #[arg(long, value_parser = parse_marker, default_value = "ffd8")]
    pub start_marker: HexBytes,

    /// End marker as hex, e.g. ffd9
    #[arg(long, value_parser = parse_marker, default_value = "ffd9")]
    pub end_marker: HexBytes,

    /// Write a JSON manifest with offsets and SHA-256 of every image
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_options(&self) -> ExtractOptions {
        let mut options = ExtractOptions::new(&self.input)
            .with_output_dir(&self.output)
            .with_min_bytes(self.min_bytes)
            .with_markers(Markers::new(
                self.start_marker.0.clone(),
                self.end_marker.0.clone(),
            ));
        if let Some(path) = &self.manifest {
            options = options.with_manifest(path);
        }
        options
    }

    pub fn uses_default_markers(&self) -> bool {
        self.start_marker.0 == JPEG_SOI && self.end_marker.0 == JPEG_EOI
    }
}

/// Raw marker bytes given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexBytes(pub Vec<u8>);

/// Accepts `ffd8`, `FF:D8`, `ff d8` and `0xffd8`.
pub fn parse_marker(s: &str) -> Result<HexBytes, String> {
    let trimmed = s.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = trimmed
        .chars()
        .filter(|c| !matches!(c, ':' | ' ' | '-' | '_'))
        .collect();

    if digits.is_empty() {
        return Err("marker must not be empty".to_string());
    }

    hex::decode(&digits)
        .map(HexBytes)
        .map_err(|e| format!("invalid hex marker '{}': {}", s, e))
}
