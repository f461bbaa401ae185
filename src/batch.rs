//! Candidate discovery and the sequential batch run loop.

use crate::codec::ImageCodec;
use crate::config::RunConfig;
use crate::constants::{MIN_OPTIMIZE_BYTES, PROGRESS_SPINNER_TEMPLATE, SUPPORTED_IMAGE_EXTENSIONS};
use crate::error::{OptimizeError, Result};
use crate::processing::optimize_file;
use crate::prompt::Confirm;
use crate::report::{self, FileReport, RunSummary};
use crate::{info, logger, verbose};
use indicatif::{ProgressBar, ProgressStyle};
use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const CONFIRM_PROMPT: &str = "⚠️  This will MODIFY your image files. Continue? (yes/no): ";

/// Drive one full run: discover candidates, gate on confirmation where
/// required, process each file in order with per-file error isolation, and
/// emit the summary.
///
/// `NoFilesFound` and `Cancelled` are returned to the caller rather than
/// printed here; both end the run with nothing modified.
pub fn run<C: ImageCodec>(
    config: &RunConfig,
    codec: &C,
    confirm: &mut dyn Confirm,
) -> Result<RunSummary> {
    let candidates = collect_candidates(config)?;
    if candidates.is_empty() {
        return Err(OptimizeError::NoFilesFound);
    }

    report::print_run_header(config, candidates.len());

    // Directory scans in live mode touch files the user never named, so those
    // runs require an explicit go-ahead.
    if !config.dry_run && config.explicit_files.is_none() {
        if !confirm.confirm(CONFIRM_PROMPT)? {
            return Err(OptimizeError::Cancelled);
        }
        info!("");
    }

    let mut summary = RunSummary::default();

    for path in candidates {
        let size_before = match fs::metadata(&path) {
            Ok(meta) => meta.len(),
            Err(e) => {
                report::print_file_header(&path, 0);
                let entry = FileReport {
                    path,
                    size_before: 0,
                    outcome: Err(e.into()),
                };
                report::print_file_outcome(&entry, config);
                summary.record(&entry);
                continue;
            }
        };

        if size_before < MIN_OPTIMIZE_BYTES {
            verbose!("Skipping {} (under 100KB, already optimized)", path.display());
            continue;
        }

        report::print_file_header(&path, size_before);

        let spinner = create_progress_spinner(&format!("Optimizing {}...", path.display()));
        let outcome = optimize_file(codec, &path, config);
        spinner.finish_and_clear();

        let entry = FileReport {
            path,
            size_before,
            outcome,
        };
        report::print_file_outcome(&entry, config);
        summary.record(&entry);
    }

    report::print_summary(&summary, config.dry_run);
    Ok(summary)
}

/// Candidate files for this run, per the config: the explicit list filtered to
/// regular files (caller order preserved), or a scan of the current directory
/// sorted largest-first.
pub fn collect_candidates(config: &RunConfig) -> Result<Vec<PathBuf>> {
    match &config.explicit_files {
        // Explicit paths that are missing or not regular files (directories,
        // sockets) are dropped up front, the same silent exclusion nonexistent
        // paths get. An all-excluded list surfaces as NoFilesFound.
        Some(files) => Ok(files.iter().filter(|path| path.is_file()).cloned().collect()),
        None => scan_directory(Path::new(".")),
    }
}

/// Non-recursive scan for PNG/JPEG files, hidden entries skipped, sorted by
/// byte size descending so the highest-impact files lead the report.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(dir).min_depth(1).max_depth(1).into_iter();
    // Depth 0 is the scan root itself, which may legitimately be ".".
    for entry in walker
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_image_file(path) {
            files.push(path.to_path_buf());
        }
    }

    files.sort_by_cached_key(|path| Reverse(fs::metadata(path).map(|m| m.len()).unwrap_or(0)));
    Ok(files)
}

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn create_progress_spinner(message: &str) -> ProgressBar {
    if !logger::prints_info() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template(PROGRESS_SPINNER_TEMPLATE)
            .expect("Invalid progress template"),
    );
    pb.set_message(message.to_string());
    pb
}
