//! fb-engine: the two-step diagnostic calculation engine.
//!
//! Step one derives a volumetric efficiency constant from the compressor's
//! rated datasheet values ([`calculate_eta_vol`]). Step two applies it,
//! together with sensor readings resolved through the role map, to every
//! dataset row ([`calculate_row`]), producing state-point properties and
//! derived performance metrics with per-section graceful degradation.
//! [`run_batch`] wires both steps together over a whole dataset.

pub mod batch;
pub mod error;
pub mod input;
pub mod rated;
pub mod row;

pub use batch::run_batch;
pub use error::{EngineError, EngineResult};
pub use input::{BatchConfig, CompressorSpec, Dataset, RatedInputs, Row};
pub use rated::{calculate_eta_vol, DEFAULT_ETA_VOL};
pub use row::calculate_row;
