//! Error types for the converter.
//!
//! [`DecodeError`] is the per-record tier: the record is logged and skipped,
//! and the run carries on. [`ConvertError`] aborts the whole run.

use std::path::PathBuf;
use thiserror::Error;

/// Why an embedded image could not be turned into pixels.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Not a data URL")]
    NotADataUrl,

    #[error("Data URL has no ',' before its payload")]
    MissingPayload,

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Undecodable image bytes: {0}")]
    Image(#[from] image::ImageError),
}

/// Fatal errors that stop a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record {index} has no [x, y, w, h] bbox: {bbox}")]
    InvalidBbox { index: usize, bbox: String },

    #[error("Failed to write image {}: {source}", path.display())]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl DecodeError {
    /// Short tag used when counting skipped records.
    pub fn kind(&self) -> SkipKind {
        match self {
            DecodeError::NotADataUrl | DecodeError::MissingPayload => SkipKind::NotADataUrl,
            DecodeError::Base64(_) => SkipKind::InvalidBase64,
            DecodeError::Image(_) => SkipKind::UndecodableImage,
        }
    }
}

// Skip buckets reported in the processing summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipKind {
    NotADataUrl,
    InvalidBase64,
    UndecodableImage,
}
