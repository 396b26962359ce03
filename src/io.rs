use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::utils::create_output_directory;

pub const IMAGES_DIR_NAME: &str = "images";
pub const ANNOTATIONS_FILE_NAME: &str = "annotations.json";
pub const CATEGORIES_FILE_NAME: &str = "categories.json";

// Struct to hold the paths of the dataset output
#[derive(Debug, Clone)]
pub struct OutputDirs {
    pub out_dir: PathBuf,
    pub images_dir: PathBuf,
}

impl OutputDirs {
    pub fn annotations_path(&self) -> PathBuf {
        self.out_dir.join(ANNOTATIONS_FILE_NAME)
    }

    pub fn categories_path(&self) -> PathBuf {
        self.out_dir.join(CATEGORIES_FILE_NAME)
    }
}

/// Set up the directory structure for the dataset output
pub fn setup_output_directories(out_dir: &Path) -> Result<OutputDirs, ConvertError> {
    let out_dir = create_output_directory(out_dir)?;
    let images_dir = create_output_directory(&out_dir.join(IMAGES_DIR_NAME))?;
    Ok(OutputDirs {
        out_dir,
        images_dir,
    })
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConvertError + '_ {
    move |source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Write `value` as 2-space indented JSON
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ConvertError> {
    let mut writer = BufWriter::new(File::create(path).map_err(io_error(path))?);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| ConvertError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_error(path))
}

/// Encode an RGB image as JPEG at the given quality
pub fn save_jpeg(image: &RgbImage, path: &Path, quality: u8) -> Result<(), ConvertError> {
    let mut writer = BufWriter::new(File::create(path).map_err(io_error(path))?);
    JpegEncoder::new_with_quality(&mut writer, quality)
        .encode_image(image)
        .map_err(|source| ConvertError::ImageWrite {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(io_error(path))
}
