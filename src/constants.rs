pub const DEFAULT_QUALITY: u8 = 85;
pub const AGGRESSIVE_QUALITY: u8 = 75;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

pub const DEFAULT_MAX_DIMENSION: u32 = 2000;

/// Files below this size are treated as already optimized and skipped.
pub const MIN_OPTIMIZE_BYTES: u64 = 100 * 1024;

/// Deflate level for the PNG re-encode pass (libdeflater maximum).
pub const LIBDEFLATER_LEVEL: u8 = 12;

pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

pub const REPORT_RULE_WIDTH: usize = 60;
