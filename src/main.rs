use clap::Parser;
use optimize_images::cli::Args;
use optimize_images::codec::DefaultCodec;
use optimize_images::config::RunConfig;
use optimize_images::error::{OptimizeError, Result};
use optimize_images::prompt::StdinConfirm;
use optimize_images::{batch, logger};

fn main() -> Result<()> {
    let args = Args::parse();
    logger::configure(args.quiet, args.verbose);

    let config = RunConfig::from_args(&args)?;
    let codec = DefaultCodec;
    let mut confirm = StdinConfirm;

    match batch::run(&config, &codec, &mut confirm) {
        Ok(_) => Ok(()),
        Err(OptimizeError::NoFilesFound) => {
            optimize_images::error!("No image files found");
            Ok(())
        }
        Err(OptimizeError::Cancelled) => {
            optimize_images::info!("Cancelled.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
