use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::types::InputRecord;

/// Read and parse the exported JSON array from a file stream
///
/// The array must hold record objects; anything else fails the whole run.
pub fn read_input_records(path: &Path) -> Result<Vec<InputRecord>, ConvertError> {
    let file = File::open(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| ConvertError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
                label
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

/// Create an output directory if it is missing, keeping any existing content
pub fn create_output_directory(path: &Path) -> Result<PathBuf, ConvertError> {
    fs::create_dir_all(path).map_err(|source| ConvertError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}
