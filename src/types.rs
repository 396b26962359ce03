use serde::Deserialize;
use serde_json::Value;

use crate::error::SkipKind;

/// Label used for records that carry none.
pub const DEFAULT_LABEL: &str = "unknown";

// One labeled crop as exported by the capture tool
#[derive(Debug, Deserialize, Clone)]
pub struct InputRecord {
    /// Embedded image, normally a `data:` URL string. Anything else is skipped.
    #[serde(default)]
    pub image: Value,
    /// `[x, y, width, height]` in pixels, only looked at once the image decodes
    #[serde(default)]
    pub bbox: Value,
    #[serde(default)]
    pub label: Option<String>,
}

impl InputRecord {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(DEFAULT_LABEL)
    }

    pub fn image_str(&self) -> Option<&str> {
        self.image.as_str()
    }

    /// The box as four numbers, or `None` if it has any other shape.
    pub fn bbox(&self) -> Option<[f64; 4]> {
        match self.bbox.as_array()?.as_slice() {
            [x, y, w, h] => Some([x.as_f64()?, y.as_f64()?, w.as_f64()?, h.as_f64()?]),
            _ => None,
        }
    }
}

// Struct to hold processing statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub total_records: usize,
    pub images_written: usize,
    pub skipped_not_data_url: usize,
    pub skipped_invalid_base64: usize,
    pub skipped_undecodable_image: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_total(&mut self) {
        self.total_records += 1;
    }

    pub fn increment_written(&mut self) {
        self.images_written += 1;
    }

    pub fn increment_skipped(&mut self, kind: SkipKind) {
        match kind {
            SkipKind::NotADataUrl => self.skipped_not_data_url += 1,
            SkipKind::InvalidBase64 => self.skipped_invalid_base64 += 1,
            SkipKind::UndecodableImage => self.skipped_undecodable_image += 1,
        }
    }

    pub fn total_skipped(&self) -> usize {
        self.skipped_not_data_url + self.skipped_invalid_base64 + self.skipped_undecodable_image
    }

    pub fn print_summary(&self) {
        log::info!("=== Processing Summary ===");
        log::info!("Total records: {}", self.total_records);
        log::info!("Images written: {}", self.images_written);

        let total_skipped = self.total_skipped();
        if total_skipped > 0 {
            log::warn!(
                "Skipped records: {} (not a data URL: {}, invalid base64: {}, undecodable image: {})",
                total_skipped,
                self.skipped_not_data_url,
                self.skipped_invalid_base64,
                self.skipped_undecodable_image
            );
        }
    }
}
