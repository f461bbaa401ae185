pub mod batch;
pub mod cli;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod logger;
pub mod processing;
pub mod prompt;
pub mod report;

pub use batch::{collect_candidates, is_image_file, run, scan_directory};
pub use cli::Args;
pub use codec::{DefaultCodec, EncodeSettings, ImageCodec, TargetFormat};
pub use config::RunConfig;
pub use error::{OptimizeError, Result};
pub use processing::{optimize_file, plan_resize, Optimized, ResizePlan};
pub use prompt::{is_affirmative, Confirm, StdinConfirm};
pub use report::{FileReport, RunSummary};
