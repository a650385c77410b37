// mod.rs - Report data structures and loading

pub mod loader;
pub mod record;

// Re-export main types for convenience
pub use loader::{load_report, read_report_lines, sample_name_from_path, RankedReport, DEFAULT_WINDOW};
pub use record::{find_accession, parse_hit_line, RankedHitRecord};
