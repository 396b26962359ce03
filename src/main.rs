use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::{error, info};
use std::process::ExitCode;

use crops2coco::utils::create_progress_bar;
use crops2coco::{convert, Args, ConvertError};

const EXIT_USAGE: u8 = 1;
const EXIT_INPUT_NOT_FOUND: u8 = 2;
const EXIT_FAILURE: u8 = 3;

fn main() -> ExitCode {
    // Initialize the logger; diagnostics and the summary go to stdout
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            println!("{}", e.render());
            println!("{}", Args::command().render_long_help());
            return ExitCode::from(EXIT_USAGE);
        }
    };

    info!("Starting conversion of {}...", args.annotations_json.display());

    let pb = create_progress_bar(0, "Records");
    match convert(
        &args.annotations_json,
        &args.out_dir,
        &args.to_convert_config(),
        &pb,
    ) {
        Ok(summary) => {
            summary.stats.print_summary();
            info!(
                "Wrote {} images to {}",
                summary.images_written,
                summary.images_dir.display()
            );
            info!(
                "Wrote COCO annotations to {}",
                summary.annotations_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e @ ConvertError::InputNotFound { .. }) => {
            error!("{}", e);
            ExitCode::from(EXIT_INPUT_NOT_FOUND)
        }
        Err(e) => {
            pb.abandon();
            error!("Conversion failed: {}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
