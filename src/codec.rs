//! Image codec boundary.
//!
//! The batch pipeline only ever talks to the codec through the narrow
//! [`ImageCodec`] capability below, so the discovery/filter/report logic can be
//! exercised with a fake codec in tests. [`DefaultCodec`] is the real thing,
//! built on the `image` crate plus an oxipng pass for PNG output.

use crate::constants::LIBDEFLATER_LEVEL;
use crate::error::{OptimizeError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader, RgbImage};
use oxipng::Deflaters;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Output container, derived from the file's own extension since every write
/// is in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    Png,
    Jpeg,
}

impl TargetFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| OptimizeError::UnsupportedFormat(path.display().to_string()))?;

        match ext.to_lowercase().as_str() {
            "png" => Ok(TargetFormat::Png),
            "jpg" | "jpeg" => Ok(TargetFormat::Jpeg),
            other => Err(OptimizeError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EncodeSettings {
    pub format: TargetFormat,
    /// JPEG quality 1-100. PNG encoding is lossless and ignores it.
    pub quality: u8,
}

/// The capabilities the pipeline needs from a codec: open a raster image,
/// report its dimensions, resample it, and save it with encode settings.
pub trait ImageCodec {
    type Image;

    fn open(&self, path: &Path) -> Result<Self::Image>;
    fn dimensions(&self, image: &Self::Image) -> (u32, u32);
    fn resize(&self, image: Self::Image, width: u32, height: u32) -> Self::Image;
    fn save(&self, image: &Self::Image, path: &Path, settings: &EncodeSettings) -> Result<()>;
}

/// Real codec backed by the `image` crate, with oxipng handling the PNG
/// size-optimization pass.
pub struct DefaultCodec;

impl ImageCodec for DefaultCodec {
    type Image = DynamicImage;

    fn open(&self, path: &Path) -> Result<DynamicImage> {
        if !path.exists() {
            return Err(OptimizeError::FileNotFound(path.to_path_buf()));
        }
        Ok(ImageReader::open(path)?.decode()?)
    }

    fn dimensions(&self, image: &DynamicImage) -> (u32, u32) {
        image.dimensions()
    }

    fn resize(&self, image: DynamicImage, width: u32, height: u32) -> DynamicImage {
        image.resize_exact(width, height, image::imageops::FilterType::Lanczos3)
    }

    fn save(&self, image: &DynamicImage, path: &Path, settings: &EncodeSettings) -> Result<()> {
        match settings.format {
            TargetFormat::Jpeg => write_jpeg(image, path, settings.quality),
            TargetFormat::Png => write_png(image, path),
        }
    }
}

/// Composite onto an opaque white background. JPEG has no alpha channel, so
/// transparent pixels have to land on something.
pub fn flatten_onto_white(image: &DynamicImage) -> RgbImage {
    let rgba = image.to_rgba8();
    let mut flat = RgbImage::new(rgba.width(), rgba.height());

    for (src, dst) in rgba.pixels().zip(flat.pixels_mut()) {
        let [r, g, b, a] = src.0;
        let alpha = a as u32;
        let blend = |channel: u8| ((channel as u32 * alpha + 255 * (255 - alpha)) / 255) as u8;
        dst.0 = [blend(r), blend(g), blend(b)];
    }

    flat
}

fn write_jpeg(image: &DynamicImage, path: &Path, quality: u8) -> Result<()> {
    let flat = if image.color().has_alpha() {
        DynamicImage::ImageRgb8(flatten_onto_white(image))
    } else {
        DynamicImage::ImageRgb8(image.to_rgb8())
    };

    let mut tmp = scratch_file(path, ".jpg")?;
    {
        let mut writer = BufWriter::new(&mut tmp);
        let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
        flat.write_with_encoder(encoder)?;
        writer.flush()?;
    }
    replace_file(tmp, path)
}

fn write_png(image: &DynamicImage, path: &Path) -> Result<()> {
    let mut encoded = Vec::new();
    image.write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)?;

    let mut options = oxipng::Options::max_compression();
    options.force = true;
    options.deflate = Deflaters::Libdeflater {
        compression: LIBDEFLATER_LEVEL,
    };

    let optimized = oxipng::optimize_from_memory(&encoded, &options)
        .map_err(|e| OptimizeError::PngOptimization(e.to_string()))?;

    let mut tmp = scratch_file(path, ".png")?;
    tmp.write_all(&optimized)?;
    replace_file(tmp, path)
}

/// Scratch file in the same directory as the target, so the final rename never
/// crosses a filesystem. The dotfile prefix keeps concurrent scans from
/// picking it up.
fn scratch_file(path: &Path, suffix: &str) -> Result<NamedTempFile> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    Ok(tempfile::Builder::new()
        .prefix(".optimize-images-")
        .suffix(suffix)
        .tempfile_in(dir)?)
}

fn replace_file(tmp: NamedTempFile, path: &Path) -> Result<()> {
    tmp.persist(path)
        .map(|_| ())
        .map_err(|e| OptimizeError::Io(e.error))
}
