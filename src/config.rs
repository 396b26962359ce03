use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

/// JPEG quality used when none is given on the command line.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Convert a JSON export of labeled image crops into a COCO dataset.
#[derive(Parser, Debug, Clone)]
#[command(name = "convert_annotations", version, long_about = None)]
pub struct Args {
    /// JSON array of {image: dataURL, bbox: [x, y, w, h], label} entries
    pub annotations_json: PathBuf,

    /// Output directory for images/, annotations.json and categories.json
    pub out_dir: PathBuf,

    /// Quality of the written JPEG files (1-100)
    #[arg(long = "quality", default_value_t = DEFAULT_JPEG_QUALITY, value_parser = validate_quality)]
    pub quality: u8,
}

/// Settings that shape the converter output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertConfig {
    pub jpeg_quality: u8,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl Args {
    pub fn to_convert_config(&self) -> ConvertConfig {
        ConvertConfig {
            jpeg_quality: self.quality,
        }
    }
}

// Validate that the quality is between 1 and 100
fn validate_quality(s: &str) -> Result<u8, String> {
    match u8::from_str(s) {
        Ok(val) if (1..=100).contains(&val) => Ok(val),
        _ => Err("QUALITY must be between 1 and 100".to_string()),
    }
}
