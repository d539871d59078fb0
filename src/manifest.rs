use crate::error::{ExtractError, Result};
use crate::types::ExtractedImage;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct Manifest {
    pub source: String,
    pub source_size: u64,
    pub threshold: usize,
    pub images: Vec<ManifestEntry>,
}

#[derive(Debug, Serialize)]
pub struct ManifestEntry {
    pub filename: String,
    pub index: usize,
    pub source_offset: String,
    pub source_offset_decimal: u64,
    pub file_size: u64,
    pub sha256_hash: String,
}

impl Manifest {
    /// `data` is the scanned input buffer the images were cut from.
    pub fn build(source: &Path, data: &[u8], threshold: usize, images: &[ExtractedImage]) -> Self {
        let images = images
            .iter()
            .map(|image| ManifestEntry {
                filename: image.filename(),
                index: image.index,
                source_offset: format!("0x{:016X}", image.offset),
                source_offset_decimal: image.offset as u64,
                file_size: image.len as u64,
                sha256_hash: compute_sha256(&data[image.offset..image.offset + image.len]),
            })
            .collect();

        Self {
            source: source.display().to_string(),
            source_size: data.len() as u64,
            threshold,
            images,
        }
    }
}

pub fn write_manifest(
    path: &Path,
    source: &Path,
    data: &[u8],
    threshold: usize,
    images: &[ExtractedImage],
) -> Result<()> {
    let manifest = Manifest::build(source, data, threshold, images);
    let json = serde_json::to_string_pretty(&manifest)?;

    fs::write(path, json).map_err(|err| ExtractError::WriteManifest {
        path: path.to_path_buf(),
        source: err,
    })
}

pub fn compute_sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            compute_sha256(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_build_entries() {
        let data = b"xxABCDyy".to_vec();
        let images = vec![ExtractedImage {
            index: 1,
            offset: 2,
            len: 4,
            path: PathBuf::from("out/image_001.jpg"),
        }];

        let manifest = Manifest::build(Path::new("doc.pdf"), &data, 3, &images);
        assert_eq!(manifest.source, "doc.pdf");
        assert_eq!(manifest.source_size, 8);
        assert_eq!(manifest.threshold, 3);

        let entry = &manifest.images[0];
        assert_eq!(entry.filename, "image_001.jpg");
        assert_eq!(entry.source_offset, "0x0000000000000002");
        assert_eq!(entry.source_offset_decimal, 2);
        assert_eq!(entry.file_size, 4);
        assert_eq!(entry.sha256_hash, compute_sha256(b"ABCD"));
    }

    #[test]
    fn test_json_shape() {
        let manifest = Manifest::build(Path::new("a.pdf"), &[], 10_000, &[]);
        let value: serde_json::Value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(value["threshold"], 10_000);
        assert_eq!(value["images"].as_array().map(Vec::len), Some(0));
    }
}
