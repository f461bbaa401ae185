//! Per-file reports, the aggregate summary, and all human-readable rendering.

use crate::config::RunConfig;
use crate::constants::REPORT_RULE_WIDTH;
use crate::error::Result;
use crate::processing::Optimized;
use crate::{error, info, warn};
use std::path::{Path, PathBuf};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One file's outcome, success or failure, as fed to the aggregator.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub size_before: u64,
    pub outcome: Result<Optimized>,
}

/// Aggregate counters folded over every [`FileReport`] in the run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub failed: usize,
    pub total_bytes_before: u64,
    pub total_bytes_after: u64,
}

impl RunSummary {
    pub fn record(&mut self, report: &FileReport) {
        match &report.outcome {
            Ok(Optimized::Written { size_after, .. }) => {
                self.processed += 1;
                self.total_bytes_before += report.size_before;
                self.total_bytes_after += size_after;
            }
            Ok(Optimized::Predicted { .. }) => {
                self.processed += 1;
                self.total_bytes_before += report.size_before;
            }
            Err(_) => {
                self.failed += 1;
            }
        }
    }
}

pub fn format_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MB)
}

/// Size reduction as a percentage of the original. Negative when a file grew.
pub fn savings_percent(before: u64, after: u64) -> f64 {
    if before == 0 {
        return 0.0;
    }
    (before as f64 - after as f64) / before as f64 * 100.0
}

pub fn print_run_header(config: &RunConfig, file_count: usize) {
    info!("🖼️  Image Optimizer");
    info!("{}", "=".repeat(REPORT_RULE_WIDTH));
    info!(
        "Mode: {}",
        if config.dry_run {
            "DRY RUN (no changes)"
        } else {
            "LIVE (will modify files)"
        }
    );
    info!("Quality: {}", config.quality);
    info!("Max dimension: {}px", config.max_dimension);
    info!("Files to process: {}", file_count);
    info!("");
}

pub fn print_file_header(path: &Path, size_before: u64) {
    info!("📸 {}", display_name(path));
    info!("  Original: {}", format_mb(size_before));
}

pub fn print_file_outcome(report: &FileReport, config: &RunConfig) {
    match &report.outcome {
        Ok(Optimized::Written { size_after, resized }) => {
            if let Some(plan) = resized {
                info!("  Resized: {}", plan);
            }
            let saved_mb = (report.size_before as f64 - *size_after as f64) / BYTES_PER_MB;
            let percent = savings_percent(report.size_before, *size_after);
            if percent >= 0.0 {
                info!(
                    "  Optimized: {} (saved {:.2} MB, -{:.1}%)",
                    format_mb(*size_after),
                    saved_mb,
                    percent
                );
            } else {
                info!(
                    "  Optimized: {} (grew {:.2} MB, +{:.1}%)",
                    format_mb(*size_after),
                    -saved_mb,
                    -percent
                );
            }
        }
        Ok(Optimized::Predicted { resized }) => {
            if let Some(plan) = resized {
                info!("  Would resize: {}", plan);
            }
            info!("  Would compress with quality={}", config.quality);
        }
        Err(e) => {
            error!("Error: {}", e);
        }
    }
    info!("");
}

pub fn print_summary(summary: &RunSummary, dry_run: bool) {
    info!("{}", "=".repeat(REPORT_RULE_WIDTH));
    info!("✅ Summary");
    info!("Files processed: {}", summary.processed);
    info!("Total size before: {}", format_mb(summary.total_bytes_before));

    if dry_run {
        info!("");
        info!("💡 Run without --dry-run to actually optimize the files");
    } else {
        let saved_mb = (summary.total_bytes_before as f64 - summary.total_bytes_after as f64)
            / BYTES_PER_MB;
        let percent = savings_percent(summary.total_bytes_before, summary.total_bytes_after);
        info!("Total size after: {}", format_mb(summary.total_bytes_after));
        info!("Total saved: {:.2} MB ({:.1}% reduction)", saved_mb, percent);
    }

    if summary.failed > 0 {
        warn!("Failed files: {}", summary.failed);
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
