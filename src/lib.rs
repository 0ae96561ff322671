pub mod config;
pub mod curation;
pub mod error;
pub mod findings;
pub mod init;
pub mod output;
pub mod report;

// Re-export main types for easy access
pub use curation::{
    apply_all, path_matches, unused_curations, CurationProvenance, CurationReason, CurationResult,
    CurationsFile, LicenseFindingCuration, REMOVE_LICENSE,
};
pub use error::CurationError;
pub use findings::{LicenseFinding, ScannerReport, TextLocation};
pub use report::{create_report, CurationReport, CurationSummary};
