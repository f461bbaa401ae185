//! Console output gating.
//!
//! The reporter writes plain lines to stdout and warnings/errors to stderr,
//! so "logging" here is one process-wide verbosity level resolved from the
//! CLI flags at startup. `--quiet` wins when both flags are given; the
//! spinner in the batch loop consults the same level so quiet runs draw
//! nothing at all.

use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Verbosity {
    Quiet = 0,
    Normal = 1,
    Verbose = 2,
}

static LEVEL: AtomicU8 = AtomicU8::new(Verbosity::Normal as u8);

pub fn configure(quiet: bool, verbose: bool) {
    let level = if quiet {
        Verbosity::Quiet
    } else if verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };
    LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn prints_info() -> bool {
    LEVEL.load(Ordering::Relaxed) >= Verbosity::Normal as u8
}

pub fn prints_verbose() -> bool {
    LEVEL.load(Ordering::Relaxed) >= Verbosity::Verbose as u8
}

/// Report lines: headers, per-file results, the summary.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if $crate::logger::prints_info() {
            println!($($arg)*);
        }
    };
}

/// Diagnostics off by default, e.g. which files the size filter skipped.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::logger::prints_verbose() {
            println!("🔍 {}", format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        if $crate::logger::prints_info() {
            eprintln!("⚠️  {}", format!($($arg)*));
        }
    };
}

/// Always printed; per-file failures must be visible even in quiet runs.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        eprintln!("❌ {}", format!($($arg)*));
    };
}
