//! Labeled crops to COCO format converter
//!
//! This library turns a JSON export of labeled image crops (each entry an
//! embedded data-URL image, a bounding box and a label) into a COCO
//! object-detection dataset: extracted JPEG files plus `annotations.json`
//! and `categories.json`.

pub mod coco;
pub mod config;
pub mod conversion;
pub mod data_url;
pub mod error;
pub mod io;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use coco::{Annotation, Category, CocoFile, CocoWriter, Image};
pub use config::{Args, ConvertConfig};
pub use conversion::{convert, process_record, ConversionSummary, RecordOutcome};
pub use error::{ConvertError, DecodeError};
pub use io::setup_output_directories;
pub use types::{InputRecord, ProcessingStats};
