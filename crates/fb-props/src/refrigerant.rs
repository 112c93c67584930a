//! Refrigerant identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Refrigerants the rig is plumbed or certified for.
///
/// The identifier is a per-run configuration constant: the whole batch runs
/// against one refrigerant, threaded explicitly through every calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Refrigerant {
    /// Propane (R290), the rig's default charge.
    R290,
    /// Difluoromethane.
    R32,
    /// Tetrafluoroethane.
    R134a,
    /// Difluoroethane.
    R152a,
    /// Tetrafluoropropene.
    R1234yf,
    /// Ammonia (R717).
    R717,
    /// R410A blend. Listed for forward compatibility; the CoolProp backend
    /// resolves it as a predefined mixture.
    R410A,
}

impl Refrigerant {
    pub const ALL: [Refrigerant; 7] = [
        Refrigerant::R290,
        Refrigerant::R32,
        Refrigerant::R134a,
        Refrigerant::R152a,
        Refrigerant::R1234yf,
        Refrigerant::R717,
        Refrigerant::R410A,
    ];

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            Refrigerant::R290 => "R290",
            Refrigerant::R32 => "R32",
            Refrigerant::R134a => "R134a",
            Refrigerant::R152a => "R152a",
            Refrigerant::R1234yf => "R1234yf",
            Refrigerant::R717 => "R717",
            Refrigerant::R410A => "R410A",
        }
    }

    /// Fluid name understood by the CoolProp HEOS backend.
    pub(crate) fn coolprop_name(&self) -> &'static str {
        match self {
            Refrigerant::R290 => "Propane",
            Refrigerant::R32 => "R32",
            Refrigerant::R134a => "R134a",
            Refrigerant::R152a => "R152a",
            Refrigerant::R1234yf => "R1234yf",
            Refrigerant::R717 => "Ammonia",
            Refrigerant::R410A => "R410A",
        }
    }
}

impl Default for Refrigerant {
    fn default() -> Self {
        Refrigerant::R290
    }
}

impl fmt::Display for Refrigerant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
