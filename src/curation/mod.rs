pub mod config;
pub mod engine;
pub mod matcher;
pub mod storage;

// Re-export main types
pub use config::{CurationReason, CurationsFile, LicenseFindingCuration, REMOVE_LICENSE};
pub use engine::{apply_all, unused_curations, CurationProvenance, CurationResult};
pub use matcher::path_matches;
pub use storage::{append_curation, default_curations_file_path};
