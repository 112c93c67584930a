//! fb-props: refrigerant property boundary for frostbench.
//!
//! Provides:
//! - Refrigerant identifiers with CoolProp name mappings
//! - The `PropertyBackend` trait that isolates the calculation engine from
//!   any equation-of-state implementation
//! - A CoolProp backend (via `rfluids`) for real fluid properties
//! - An analytic surrogate backend for tests and offline runs
//!
//! # Architecture
//!
//! The engine only ever talks to `dyn PropertyBackend`. CoolProp is the
//! production implementation; the surrogate reproduces the qualitative shape
//! of a light hydrocarbon refrigerant (monotonic saturation curve, distinct
//! liquid/vapor branches) without linking the native library, which keeps
//! engine tests deterministic and fast.

pub mod backend;
pub mod coolprop;
pub mod error;
pub mod refrigerant;
pub mod surrogate;

pub use backend::PropertyBackend;
pub use coolprop::CoolPropBackend;
pub use error::{PropError, PropResult};
pub use refrigerant::Refrigerant;
pub use surrogate::SurrogateBackend;
