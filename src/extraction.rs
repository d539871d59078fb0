use crate::analysis::SpanScanner;
use crate::error::{ExtractError, Result};
use crate::manifest;
use crate::options::ExtractOptions;
use crate::types::{ExtractedImage, ExtractionReport, OUTPUT_EXTENSION, Span};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

/// Scans `input_path` with the default JPEG markers and threshold, writing
/// every qualifying span to `output_dir`. Returns the number of images written.
pub fn extract(input_path: &Path, output_dir: &Path) -> Result<usize> {
    let options = ExtractOptions::new(input_path).with_output_dir(output_dir);
    let report = Extractor::new(options).run()?;
    Ok(report.count())
}

pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Runs the extraction and prints one line per written image plus a
    /// final total on stdout. The total is printed before the manifest is
    /// written, so it reflects the images on disk even if that write fails.
    pub fn run(&self) -> Result<ExtractionReport> {
        let (report, data) = self.extract_images(|image| {
            println!("Extracted: {} ({} bytes)", image.path.display(), image.len);
        })?;
        println!("Total extracted images: {}", report.count());
        self.write_manifest(&data, &report)?;
        Ok(report)
    }

    /// Runs the extraction, calling `on_extracted` after each image is
    /// persisted. Nothing is printed.
    pub fn run_with<F>(&self, on_extracted: F) -> Result<ExtractionReport>
    where
        F: FnMut(&ExtractedImage),
    {
        let (report, data) = self.extract_images(on_extracted)?;
        self.write_manifest(&data, &report)?;
        Ok(report)
    }

    fn extract_images<F>(&self, mut on_extracted: F) -> Result<(ExtractionReport, Vec<u8>)>
    where
        F: FnMut(&ExtractedImage),
    {
        self.options.validate()?;

        let output_dir = &self.options.output_dir;
        fs::create_dir_all(output_dir).map_err(|source| ExtractError::CreateOutputDir {
            path: output_dir.clone(),
            source,
        })?;

        let input = &self.options.input;
        let data = fs::read(input).map_err(|source| ExtractError::ReadInput {
            path: input.clone(),
            source,
        })?;

        let start_time = Instant::now();
        tracing::info!("Starting scan of {} ({} bytes)", input.display(), data.len());

        let mut report = ExtractionReport::default();

        for span in SpanScanner::new(&data, &self.options.markers) {
            report.spans_found += 1;

            if !span.exceeds(self.options.min_bytes) {
                tracing::debug!(
                    "Skipping span at {:#x}: {} bytes (threshold {})",
                    span.start,
                    span.len(),
                    self.options.min_bytes
                );
                report.spans_skipped += 1;
                continue;
            }

            let index = report.images.len() + 1;
            let image = write_span(&data, span, index, output_dir)?;
            on_extracted(&image);
            report.images.push(image);
        }

        tracing::info!(
            "Scan complete: {} spans, {} extracted, {} skipped in {:.2}s",
            report.spans_found,
            report.count(),
            report.spans_skipped,
            start_time.elapsed().as_secs_f64()
        );

        Ok((report, data))
    }

    fn write_manifest(&self, data: &[u8], report: &ExtractionReport) -> Result<()> {
        let Some(path) = &self.options.manifest else {
            return Ok(());
        };
        manifest::write_manifest(
            path,
            &self.options.input,
            data,
            self.options.min_bytes,
            &report.images,
        )?;
        tracing::info!("Manifest written to {}", path.display());
        Ok(())
    }
}

fn write_span(data: &[u8], span: Span, index: usize, output_dir: &Path) -> Result<ExtractedImage> {
    let path = output_dir.join(generate_filename(index));

    write_bytes(&path, &data[span.range()]).map_err(|source| ExtractError::WriteImage {
        path: path.clone(),
        source,
    })?;

    Ok(ExtractedImage {
        index,
        offset: span.start,
        len: span.len(),
        path,
    })
}

fn write_bytes(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut out = File::create(path)?;
    out.write_all(bytes)?;
    out.sync_all()
}

pub fn generate_filename(index: usize) -> String {
    format!("image_{:03}.{}", index, OUTPUT_EXTENSION)
}
