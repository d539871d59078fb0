use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("cannot read input {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write image {}: {source}", path.display())]
    WriteImage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write manifest {}: {source}", path.display())]
    WriteManifest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot encode manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid marker: {0}")]
    InvalidMarker(String),
}

impl ExtractError {
    /// True for failures of the underlying file I/O, as opposed to bad
    /// configuration or encoding.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::ReadInput { .. }
                | Self::CreateOutputDir { .. }
                | Self::WriteImage { .. }
                | Self::WriteManifest { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
