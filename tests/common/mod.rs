// Shared fixtures for the integration tests
#![allow(dead_code)]

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// A `data:image/png;base64,...` URL for a solid red image
pub fn red_png_data_url(width: u32, height: u32) -> String {
    let mut png = Vec::new();
    RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]))
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .unwrap();
    format!("data:image/png;base64,{}", STANDARD.encode(&png))
}

/// Write `json` to `<dir>/input.json` and return its path
pub fn write_input(dir: &Path, json: &serde_json::Value) -> PathBuf {
    let path = dir.join("input.json");
    std::fs::write(&path, serde_json::to_vec(json).unwrap()).unwrap();
    path
}
