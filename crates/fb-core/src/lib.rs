//! fb-core: stable foundation for frostbench.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - convert (rig-unit <-> SI conversion functions)
//! - circuit (left/center/right circuit labels)
//! - warn (structured warning records)
//! - error (shared error types)

pub mod circuit;
pub mod convert;
pub mod error;
pub mod units;
pub mod warn;

// Re-exports: nice ergonomics for downstream crates
pub use circuit::Circuit;
pub use error::{CoreError, CoreResult};
pub use warn::{WarnCode, Warning};
