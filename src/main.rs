//! cartfile-to-package - Carthage to Swift Package Manager migration CLI
//!
//! Reads a Cartfile and generates a package directory containing:
//! - Package.swift with one package dependency per Cartfile entry
//! - Empty.swift so the package target has a source file

use cartfile_to_package::cli::CliArgs;
use cartfile_to_package::manifest::PackageWriter;
use cartfile_to_package::output::{create_formatter, OutputConfig};
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter())))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    args.validate()?;

    if args.verbose {
        eprintln!("cartfile-to-package v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Cartfile: {}", args.cartfile.display());
        eprintln!("Package: {}", args.package_path.display());
        if args.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    let writer = PackageWriter::new(args.dry_run);
    let report = writer.generate(&args.cartfile, &args.package_path)?;

    let mut output_config =
        OutputConfig::from_cli(args.json, args.verbose, args.quiet, args.dry_run, args.print);
    output_config.color = io::stdout().is_terminal();
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
