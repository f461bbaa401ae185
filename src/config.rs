use crate::cli::Args;
use crate::constants::{AGGRESSIVE_QUALITY, MAX_QUALITY, MIN_QUALITY};
use crate::error::{OptimizeError, Result};
use std::path::PathBuf;

/// Immutable configuration for one run, resolved once at startup.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub quality: u8,
    pub max_dimension: u32,
    pub dry_run: bool,
    /// `Some` when the user listed files on the command line. Explicit lists
    /// skip directory discovery and the confirmation prompt.
    pub explicit_files: Option<Vec<PathBuf>>,
}

impl RunConfig {
    pub fn new(
        quality: u8,
        max_dimension: u32,
        aggressive: bool,
        dry_run: bool,
        files: Vec<PathBuf>,
    ) -> Result<Self> {
        let quality = if aggressive { AGGRESSIVE_QUALITY } else { quality };
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(OptimizeError::InvalidQuality(quality));
        }

        Ok(Self {
            quality,
            max_dimension,
            dry_run,
            explicit_files: if files.is_empty() { None } else { Some(files) },
        })
    }

    pub fn from_args(args: &Args) -> Result<Self> {
        Self::new(
            args.quality,
            args.max_size,
            args.aggressive,
            args.dry_run,
            args.files.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        let config = RunConfig::new(85, 2000, false, false, vec![]).unwrap();
        assert_eq!(config.quality, 85);
        assert_eq!(config.max_dimension, 2000);
        assert!(!config.dry_run);
        assert!(config.explicit_files.is_none());
    }

    #[test]
    fn aggressive_overrides_quality() {
        let config = RunConfig::new(95, 2000, true, false, vec![]).unwrap();
        assert_eq!(config.quality, 75);
    }

    #[test]
    fn quality_out_of_range_rejected() {
        let result = RunConfig::new(0, 2000, false, false, vec![]);
        assert!(matches!(result, Err(OptimizeError::InvalidQuality(0))));

        let result = RunConfig::new(101, 2000, false, false, vec![]);
        assert!(matches!(result, Err(OptimizeError::InvalidQuality(101))));
    }

    #[test]
    fn aggressive_quality_always_valid() {
        // Even a nonsense --quality value is irrelevant once --aggressive wins.
        let config = RunConfig::new(200, 2000, true, false, vec![]).unwrap();
        assert_eq!(config.quality, 75);
    }

    #[test]
    fn explicit_files_preserved_in_order() {
        let files = vec![PathBuf::from("b.jpg"), PathBuf::from("a.png")];
        let config = RunConfig::new(85, 2000, false, false, files.clone()).unwrap();
        assert_eq!(config.explicit_files, Some(files));
    }
}
