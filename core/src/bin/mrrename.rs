use clap::Parser;
use log::{error, info};
use mrseries_core::cli::{load_rules, setup_logging, OutputFormat, RenameCli};
use mrseries_core::rename::collect_dicom_files;
use mrseries_core::{RenameManager, RenameOptions, RenameReport, RenameSummary, SeriesClassifier};
use std::process;

fn main() {
    let cli = RenameCli::parse();

    setup_logging(cli.verbose);

    if !cli.input.is_dir() {
        eprintln!("Error: {} is not a directory", cli.input.display());
        process::exit(1);
    }

    let rules = match load_rules(cli.rules.as_deref()) {
        Ok(rules) => rules,
        Err(e) => {
            error!("Failed to load rules: {}", e);
            eprintln!("Error: Failed to load rules: {}", e);
            process::exit(1);
        }
    };

    info!("Processing directory: {}", cli.input.display());

    let files = collect_dicom_files(&cli.input);
    if files.is_empty() {
        eprintln!("Error: No DICOM files found in {}", cli.input.display());
        process::exit(1);
    }

    info!("Found {} DICOM files", files.len());

    let options = RenameOptions::default()
        .unmatched(cli.unmatched.into())
        .overwrite(cli.overwrite)
        .dry_run(cli.dry_run)
        .threads(cli.threads);
    let manager = RenameManager::new(SeriesClassifier::new(rules), options);

    let summary = match manager.run_files(&files, &cli.output) {
        Ok(summary) => summary,
        Err(e) => {
            error!("Rename failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    output_summary(&summary, cli.format);
}

fn output_summary(summary: &RenameSummary, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", RenameReport::new(summary)),
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match serde_json::to_string_pretty(summary) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}
