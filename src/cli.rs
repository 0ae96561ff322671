use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use license_curator::curation::CurationReason;

#[derive(Parser)]
#[command(name = "license-curator")]
#[command(about = "Reconcile scanner license findings with curated overrides")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply curations to scanner findings and report the outcome
    Apply {
        /// Scanner output JSON (default: auto-detected scan-results.json)
        findings: Option<PathBuf>,

        /// Curations file (default: curations.toml)
        #[arg(short, long)]
        curations: Option<PathBuf>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show pass-through findings as well as curated ones
        #[arg(short, long)]
        verbose: bool,

        /// Suppress non-error output
        #[arg(short, long)]
        quiet: bool,

        /// Exit with an error when a curation matched no finding
        #[arg(long)]
        fail_on_unused: bool,
    },
    /// Validate a curations file
    Validate {
        /// Curations file (default: curations.toml)
        curations: Option<PathBuf>,
    },
    /// Create a starter curations file
    Init {
        /// Where to write the file (default: curations.toml)
        path: Option<PathBuf>,
    },
    /// Append a curation rule to the curations file
    Record {
        /// Path pattern the rule applies to
        #[arg(long, default_value = "**")]
        path: String,

        /// Start lines the finding must begin at (repeatable)
        #[arg(long)]
        start_line: Vec<usize>,

        /// Exact line count the finding must span
        #[arg(long)]
        line_count: Option<usize>,

        /// Detected license the rule applies to
        #[arg(long)]
        detected: Option<String>,

        /// Concluded license ("NONE" removes the finding)
        #[arg(long)]
        concluded: String,

        /// Why the detection is overridden
        #[arg(long)]
        reason: ReasonArg,

        /// Free-text justification
        #[arg(long, default_value = "")]
        comment: String,

        /// Curations file (default: curations.toml)
        #[arg(short, long)]
        curations: Option<PathBuf>,
    },
}

#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReasonArg {
    IncorrectDetection,
    NotDetected,
    LicenseTextMismatch,
    Other,
}

impl From<ReasonArg> for CurationReason {
    fn from(reason: ReasonArg) -> Self {
        match reason {
            ReasonArg::IncorrectDetection => CurationReason::IncorrectDetection,
            ReasonArg::NotDetected => CurationReason::NotDetected,
            ReasonArg::LicenseTextMismatch => CurationReason::LicenseTextMismatch,
            ReasonArg::Other => CurationReason::Other,
        }
    }
}
