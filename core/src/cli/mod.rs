pub mod report;

use crate::classifier::RuleSet;
use crate::error::Result;
use crate::types::UnmatchedPolicy;
use clap::{Parser, ValueEnum};
use log::info;
use std::path::{Path, PathBuf};

/// Command-line arguments for mrseries
#[derive(Parser, Debug)]
#[command(name = "mrseries")]
#[command(about = "Classify MR DICOM series and synthesize canonical series names")]
#[command(version)]
pub struct Cli {
    /// Paths to DICOM files
    #[arg(value_name = "FILE", required_unless_present = "dump_rules")]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// JSON rule table replacing the built-in rules
    #[arg(long, value_name = "RULES")]
    pub rules: Option<PathBuf>,

    /// Print the active rule table as JSON and exit
    #[arg(long)]
    pub dump_rules: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command-line arguments for mrrename
#[derive(Parser, Debug)]
#[command(name = "mrrename")]
#[command(about = "Copy DICOM files into a study/series tree named by classification")]
#[command(version)]
pub struct RenameCli {
    /// Directory containing DICOM files (searched recursively)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Root of the renamed tree
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// What to do with instances no rule matches
    #[arg(long, default_value = "skip")]
    pub unmatched: UnmatchedArg,

    /// Replace files already present at the destination
    #[arg(long)]
    pub overwrite: bool,

    /// Report destinations without copying anything
    #[arg(long)]
    pub dry_run: bool,

    /// Worker threads (defaults to one per core)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// JSON rule table replacing the built-in rules
    #[arg(long, value_name = "RULES")]
    pub rules: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// Handling of instances that match no rule
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum UnmatchedArg {
    /// Leave them out of the output tree
    Skip,
    /// Copy them into the UNCLASSIFIED folder of their study
    Passthrough,
}

impl From<UnmatchedArg> for UnmatchedPolicy {
    fn from(arg: UnmatchedArg) -> Self {
        match arg {
            UnmatchedArg::Skip => UnmatchedPolicy::Skip,
            UnmatchedArg::Passthrough => UnmatchedPolicy::Passthrough,
        }
    }
}

pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Built-in rules, or the JSON table at `path`
pub fn load_rules(path: Option<&Path>) -> Result<RuleSet> {
    match path {
        Some(path) => load_rule_file(path),
        None => RuleSet::builtin(),
    }
}

#[cfg(feature = "json")]
fn load_rule_file(path: &Path) -> Result<RuleSet> {
    let rules = RuleSet::from_json_file(path)?;
    info!("Loaded {} rules from {}", rules.len(), path.display());
    Ok(rules)
}

#[cfg(not(feature = "json"))]
fn load_rule_file(path: &Path) -> Result<RuleSet> {
    info!("Cannot load {}", path.display());
    Err(crate::error::SeriesError::Config(
        "rule files require the 'json' feature".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_files_required() {
        assert!(Cli::try_parse_from(["mrseries"]).is_err());

        let cli = Cli::try_parse_from(["mrseries", "--dump-rules"]).unwrap();
        assert!(cli.dump_rules);
        assert!(cli.files.is_empty());

        let cli = Cli::try_parse_from(["mrseries", "-f", "json", "a.dcm", "b.dcm"]).unwrap();
        assert_eq!(cli.files.len(), 2);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_rename_cli_options() {
        let cli = RenameCli::try_parse_from([
            "mrrename",
            "in",
            "out",
            "--unmatched",
            "passthrough",
            "--dry-run",
            "-j",
            "4",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("in"));
        assert_eq!(cli.output, PathBuf::from("out"));
        assert!(cli.dry_run);
        assert!(!cli.overwrite);
        assert_eq!(cli.threads, Some(4));
        assert_eq!(
            UnmatchedPolicy::from(cli.unmatched),
            UnmatchedPolicy::Passthrough
        );
    }

    #[test]
    fn test_rename_cli_defaults() {
        let cli = RenameCli::try_parse_from(["mrrename", "in", "out"]).unwrap();
        assert_eq!(UnmatchedPolicy::from(cli.unmatched), UnmatchedPolicy::Skip);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.threads, None);
        assert!(cli.rules.is_none());
    }

    #[test]
    fn test_load_builtin_rules() {
        let rules = load_rules(None).unwrap();
        assert_eq!(rules.len(), 16);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_load_rule_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("rules.json");
        std::fs::write(&path, RuleSet::builtin().unwrap().to_json().unwrap()).unwrap();

        let rules = load_rules(Some(&path)).unwrap();
        assert_eq!(rules.len(), 16);
        assert!(load_rules(Some(&temp_dir.path().join("missing.json"))).is_err());
    }
}
