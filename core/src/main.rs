use clap::Parser;
use log::{error, info};
use mrseries_core::cli::{load_rules, setup_logging, Cli, OutputFormat};
use mrseries_core::{ClassifiedSeries, RuleSet, SeriesClassifier, TextReport};
use std::path::PathBuf;
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let rules = match load_rules(cli.rules.as_deref()) {
        Ok(rules) => rules,
        Err(e) => {
            error!("Failed to load rules: {}", e);
            eprintln!("Error: Failed to load rules: {}", e);
            process::exit(1);
        }
    };

    if cli.dump_rules {
        dump_rules(&rules);
        return;
    }

    let classifier = SeriesClassifier::new(rules);
    let mut results = Vec::new();
    let mut failed = 0;

    for path in &cli.files {
        match classifier.classify_file(path) {
            Ok(series) => {
                info!("{}: {}", path.display(), series.result);
                results.push((path.clone(), series));
            }
            Err(e) => {
                error!("Failed to classify {}: {}", path.display(), e);
                eprintln!("Error: {}: {}", path.display(), e);
                failed += 1;
            }
        }
    }

    output_results(&results, cli.format);

    if failed > 0 {
        process::exit(1);
    }
}

fn dump_rules(rules: &RuleSet) {
    #[cfg(feature = "json")]
    {
        match rules.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: Failed to serialize rules: {}", e);
                process::exit(1);
            }
        }
    }
    #[cfg(not(feature = "json"))]
    {
        let _ = rules;
        eprintln!("Error: --dump-rules requires the 'json' feature");
        eprintln!("Rebuild with: cargo build --features json");
        process::exit(1);
    }
}

fn output_results(results: &[(PathBuf, ClassifiedSeries)], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for (path, series) in results {
                println!("File: {}", path.display());
                println!("{}", TextReport::new(series));
            }
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match output_json(results) {
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
                let _ = results;
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}

#[cfg(feature = "json")]
fn output_json(results: &[(PathBuf, ClassifiedSeries)]) -> Result<String, serde_json::Error> {
    use serde::Serialize;

    #[derive(Serialize)]
    struct FileJson<'a> {
        file_path: String,
        #[serde(flatten)]
        series: &'a ClassifiedSeries,
    }

    let files: Vec<FileJson> = results
        .iter()
        .map(|(path, series)| FileJson {
            file_path: path.display().to_string(),
            series,
        })
        .collect();

    serde_json::to_string_pretty(&files)
}
