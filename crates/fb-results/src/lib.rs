//! fb-results: per-row and batch result data model.

pub mod output;
pub mod types;

pub use output::OutputKey;
pub use types::{BatchResult, BatchStats, Completion, EtaVolMethod, RowResult, VolEffResult};
