//! Error types for the banner renderer.

use crate::core_modules::font::{FontLoadError, FontRole};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeroError>;

#[derive(Error, Debug)]
pub enum HeroError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: jpeg_encoder::EncodingError,
    },

    /// JPEG dimensions are limited to 16 bits.
    #[error("{path} would be {width}x{height}, too large for JPEG")]
    TooLarge { path: PathBuf, width: u32, height: u32 },

    /// Two configurations would write the same output file.
    #[error("duplicate output filename: {0}")]
    DuplicateFilename(String),

    /// Only reachable with a custom font chain that has no built-in fallback.
    #[error("no {role} font could be loaded: {source}")]
    FontUnavailable {
        role: FontRole,
        #[source]
        source: FontLoadError,
    },
}

impl HeroError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        HeroError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
