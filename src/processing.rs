use crate::codec::{EncodeSettings, ImageCodec, TargetFormat};
use crate::config::RunConfig;
use crate::error::Result;
use std::fmt;
use std::fs;
use std::path::Path;

/// Downscale target for an image whose longer side exceeds the maximum
/// dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePlan {
    pub from: (u32, u32),
    pub to: (u32, u32),
}

impl fmt::Display for ResizePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} → {}x{}",
            self.from.0, self.from.1, self.to.0, self.to.1
        )
    }
}

/// Outcome of one successfully handled file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Optimized {
    /// Live mode: the file was re-encoded in place.
    Written {
        size_after: u64,
        resized: Option<ResizePlan>,
    },
    /// Dry run: nothing written, after-size unknown.
    Predicted { resized: Option<ResizePlan> },
}

/// Uniform scale so the longer side lands on `max_dimension`. Both dimensions
/// round to the nearest pixel and never drop below 1. Returns `None` when the
/// image is already within bounds.
pub fn plan_resize(width: u32, height: u32, max_dimension: u32) -> Option<ResizePlan> {
    let longest = width.max(height);
    if longest <= max_dimension {
        return None;
    }

    let ratio = max_dimension as f64 / longest as f64;
    let to_width = ((width as f64 * ratio).round() as u32).max(1);
    let to_height = ((height as f64 * ratio).round() as u32).max(1);

    Some(ResizePlan {
        from: (width, height),
        to: (to_width, to_height),
    })
}

/// Run one file through the codec: decode, plan the resize, and in live mode
/// resample and re-encode in place, measuring the resulting size.
pub fn optimize_file<C: ImageCodec>(
    codec: &C,
    path: &Path,
    config: &RunConfig,
) -> Result<Optimized> {
    let format = TargetFormat::from_path(path)?;
    let image = codec.open(path)?;

    let (width, height) = codec.dimensions(&image);
    let plan = plan_resize(width, height, config.max_dimension);

    if config.dry_run {
        return Ok(Optimized::Predicted { resized: plan });
    }

    let image = match plan {
        Some(plan) => codec.resize(image, plan.to.0, plan.to.1),
        None => image,
    };

    let settings = EncodeSettings {
        format,
        quality: config.quality,
    };
    codec.save(&image, path, &settings)?;

    let size_after = fs::metadata(path)?.len();
    Ok(Optimized::Written {
        size_after,
        resized: plan,
    })
}
