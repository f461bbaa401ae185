use crate::constants::{DEFAULT_MAX_DIMENSION, DEFAULT_QUALITY};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "optimize-images",
    about = "Optimize PNG and JPEG images for web performance",
    long_about = "optimize-images scans the current directory (or an explicit file list) for \
                  PNG/JPEG files, downscales anything larger than the maximum dimension, and \
                  re-encodes each file in place, reporting before/after sizes. Files under \
                  100KB are considered already optimized and skipped.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    optimize-images                 # optimize every PNG/JPEG in the current directory\n  \
    optimize-images --dry-run       # preview what would be optimized\n  \
    optimize-images --aggressive    # more aggressive compression (quality 75)\n  \
    optimize-images hero.png        # optimize specific files, no confirmation prompt"
)]
pub struct Args {
    #[arg(long, help = "Preview without making changes")]
    pub dry_run: bool,

    #[arg(
        long,
        help = "More aggressive compression (quality=75)",
        long_help = "Shortcut that forces the JPEG quality to 75, overriding --quality."
    )]
    pub aggressive: bool,

    #[arg(
        short = 'q',
        long,
        default_value_t = DEFAULT_QUALITY,
        help = "JPEG quality (1-100, default: 85)",
        long_help = "JPEG encoding quality from 1 (smallest) to 100 (best). \
                     PNG output is lossless and ignores this value."
    )]
    pub quality: u8,

    #[arg(
        long = "max-size",
        default_value_t = DEFAULT_MAX_DIMENSION,
        help = "Maximum dimension in pixels (default: 2000)",
        long_help = "Images whose longer side exceeds this are downscaled proportionally \
                     so the longer side equals it."
    )]
    pub max_size: u32,

    #[arg(long, help = "Suppress informational output")]
    pub quiet: bool,

    #[arg(long, help = "Show extra diagnostics, e.g. which files were skipped")]
    pub verbose: bool,

    #[arg(
        help = "Specific files to optimize (default: all PNG/JPEG in current directory)",
        long_help = "When files are listed explicitly, directory scanning and the interactive \
                     confirmation prompt are both skipped. Paths that do not exist are ignored."
    )]
    pub files: Vec<PathBuf>,
}
