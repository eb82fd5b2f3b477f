mod args;
mod encode;
mod progress;
mod status;

use std::process::ExitCode;

use clap::Parser;

use crate::args::Args;
use crate::status::Status;

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .target(env_logger::Target::Stderr)
        .init();

    run(&args).into()
}

fn run(args: &Args) -> Status {
    if let Err(e) = std::fs::create_dir_all(&args.output_dir) {
        eprintln!(
            "Error: cannot create output directory {}: {}",
            args.output_dir.display(),
            e
        );
        return Status::from_error(&e.into());
    }

    let mut status = Status::Success;
    for input in &args.files {
        match encode::encode_file(input, &args.output_dir, !args.quiet) {
            Ok(report) => {
                log::info!(
                    "{} -> {} ({} bytes, {:.1}% of raw)",
                    report.input.display(),
                    report.output.display(),
                    report.stats.bytes_written,
                    report.stats.compression_ratio() * 100.0
                );
                if args.stats {
                    println!("{}", report.to_json());
                }
            }
            Err(err) => {
                eprintln!("Error: {err:#}");
                log::warn!("skipping {}", input.display());
                status = status.merge(Status::from_error(&err));
            }
        }
    }
    status
}
