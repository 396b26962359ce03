//! COCO format data structures and utilities
//!
//! Only the subset the capture export can fill is emitted: `images`,
//! `annotations` and `categories`, each object with a fixed key order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// COCO category information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

/// COCO image information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: u32,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

impl Image {
    pub fn new(id: u32, width: u32, height: u32) -> Self {
        Self {
            id,
            file_name: image_file_name(id),
            width,
            height,
        }
    }
}

/// COCO annotation information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: u32,
    pub image_id: u32,
    pub category_id: u32,
    pub bbox: [i64; 4], // [x, y, width, height]
    pub area: i64,
    pub iscrowd: u32,
    pub segmentation: Vec<Vec<f64>>,
}

impl Annotation {
    /// A single-box annotation; `bbox` is truncated to whole pixels.
    pub fn from_bbox(id: u32, image_id: u32, category_id: u32, bbox: [f64; 4]) -> Self {
        Self {
            id,
            image_id,
            category_id,
            bbox: truncate_bbox(bbox),
            area: truncated_area(bbox[2], bbox[3]),
            iscrowd: 0,
            segmentation: Vec::new(),
        }
    }
}

/// Complete COCO dataset structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CocoFile {
    pub images: Vec<Image>,
    pub annotations: Vec<Annotation>,
    pub categories: Vec<Category>,
}

/// Labels in first-seen order, each with a stable 1-based id.
#[derive(Debug, Default)]
pub struct CategoryTable {
    categories: Vec<Category>,
    ids: HashMap<String, u32>,
}

impl CategoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of `label`, assigning the next one if it is new.
    pub fn register(&mut self, label: &str) -> u32 {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = self.categories.len() as u32 + 1;
        self.ids.insert(label.to_string(), id);
        self.categories.push(Category {
            id,
            name: label.to_string(),
        });
        id
    }

    pub fn into_categories(self) -> Vec<Category> {
        self.categories
    }
}

/// Writer for COCO format datasets
///
/// Image and annotation ids come from one counter: every written record
/// produces exactly one of each, so the two ids always match.
#[derive(Debug)]
pub struct CocoWriter {
    next_id: u32,
    categories: CategoryTable,
    images: Vec<Image>,
    annotations: Vec<Annotation>,
}

impl Default for CocoWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CocoWriter {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            categories: CategoryTable::new(),
            images: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Register a label and return its category id
    pub fn add_category(&mut self, label: &str) -> u32 {
        self.categories.register(label)
    }

    /// Claim the next image id (annotation id is the same value).
    ///
    /// Call only once the record's image has decoded.
    pub fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Record an image and its single box annotation
    pub fn add_record(
        &mut self,
        id: u32,
        width: u32,
        height: u32,
        category_id: u32,
        bbox: [f64; 4],
    ) {
        self.images.push(Image::new(id, width, height));
        self.annotations
            .push(Annotation::from_bbox(id, id, category_id, bbox));
    }

    /// Build the complete COCO dataset structure
    pub fn build(self) -> CocoFile {
        CocoFile {
            images: self.images,
            annotations: self.annotations,
            categories: self.categories.into_categories(),
        }
    }
}

/// File name of the image with the given id, e.g. `image_00001.jpg`
pub fn image_file_name(id: u32) -> String {
    format!("image_{:05}.jpg", id)
}

/// Truncate each bbox component toward zero
pub fn truncate_bbox(bbox: [f64; 4]) -> [i64; 4] {
    bbox.map(|v| v as i64)
}

/// Truncate the box area `w * h` toward zero
pub fn truncated_area(width: f64, height: f64) -> i64 {
    (width * height) as i64
}
