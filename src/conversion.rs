use indicatif::ProgressBar;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::coco::{image_file_name, CocoWriter};
use crate::config::ConvertConfig;
use crate::data_url::decode_embedded_image;
use crate::error::{ConvertError, DecodeError, SkipKind};
use crate::io::{save_jpeg, setup_output_directories, write_json_pretty, OutputDirs};
use crate::types::{InputRecord, ProcessingStats};
use crate::utils::read_input_records;

/// What a finished conversion produced
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub images_written: usize,
    pub images_dir: PathBuf,
    pub annotations_path: PathBuf,
    pub categories_path: PathBuf,
    pub stats: ProcessingStats,
}

/// Convert the exported crops at `input` into a COCO dataset under `out_dir`
///
/// Per-record image decode failures are logged and skipped. Everything else
/// aborts the run; files written so far stay on disk.
pub fn convert(
    input: &Path,
    out_dir: &Path,
    config: &ConvertConfig,
    pb: &ProgressBar,
) -> Result<ConversionSummary, ConvertError> {
    if !input.exists() {
        return Err(ConvertError::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    let output_dirs = setup_output_directories(out_dir)?;
    let records = read_input_records(input)?;
    info!("Read {} records from {}", records.len(), input.display());

    pb.set_length(records.len() as u64);
    let mut writer = CocoWriter::new();
    let mut stats = ProcessingStats::new();
    for (index, record) in records.iter().enumerate() {
        stats.increment_total();
        match process_record(index, record, &mut writer, &output_dirs, config)? {
            RecordOutcome::Written(id) => {
                debug!("Wrote {}", image_file_name(id));
                stats.increment_written();
            }
            RecordOutcome::Skipped(kind) => stats.increment_skipped(kind),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let annotations_path = output_dirs.annotations_path();
    let categories_path = output_dirs.categories_path();
    let coco = writer.build();

    write_json_pretty(&annotations_path, &coco)?;
    info!("Wrote {}", annotations_path.display());
    write_json_pretty(&categories_path, &coco.categories)?;
    info!("Wrote {}", categories_path.display());

    Ok(ConversionSummary {
        images_written: coco.images.len(),
        images_dir: output_dirs.images_dir,
        annotations_path,
        categories_path,
        stats,
    })
}

/// Result of processing a single record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Image and annotation written under this id
    Written(u32),
    Skipped(SkipKind),
}

/// Process one record: register its label, decode, write the image and
/// record the image and annotation entries
///
/// No id is claimed for a record whose image does not decode. The bbox is
/// only checked for decodable records; a bad one there is fatal.
pub fn process_record(
    index: usize,
    record: &InputRecord,
    writer: &mut CocoWriter,
    output_dirs: &OutputDirs,
    config: &ConvertConfig,
) -> Result<RecordOutcome, ConvertError> {
    // Labels count even when the image turns out to be unusable
    let category_id = writer.add_category(record.label());

    let decoded = record
        .image_str()
        .ok_or(DecodeError::NotADataUrl)
        .and_then(decode_embedded_image);
    let image = match decoded {
        Ok(image) => image,
        Err(e) => {
            warn!("Skipping image decode: {}", e);
            return Ok(RecordOutcome::Skipped(e.kind()));
        }
    };

    let bbox = record.bbox().ok_or_else(|| ConvertError::InvalidBbox {
        index,
        bbox: record.bbox.to_string(),
    })?;

    let id = writer.next_id();
    save_jpeg(
        &image,
        &output_dirs.images_dir.join(image_file_name(id)),
        config.jpeg_quality,
    )?;
    writer.add_record(id, image.width(), image.height(), category_id, bbox);

    Ok(RecordOutcome::Written(id))
}
