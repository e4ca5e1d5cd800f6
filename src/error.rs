//! Error type shared by the generator, image I/O and configuration helpers.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("output directory {} does not exist", .0.display())]
    MissingOutputDir(PathBuf),

    #[error("failed to create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{0}")]
    Config(String),

    #[error("invalid generator parameters: {0}")]
    InvalidParams(String),
}

pub type Result<T, E = SampleError> = std::result::Result<T, E>;
