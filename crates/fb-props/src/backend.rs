//! Property backend trait.

use crate::error::{PropError, PropResult};
use crate::refrigerant::Refrigerant;
use fb_core::units::{Density, Pressure, SpecEnthalpy, SpecEntropy, Temperature};

/// Equation-of-state boundary used by the calculation engine.
///
/// All pressures are absolute. Saturation queries use the bubble point
/// (quality = 0), matching the rig's historical spreadsheet methodology.
///
/// Implementations must be thread-safe (Send + Sync); the batch orchestrator
/// may evaluate rows from a worker pool. Backends wrapping non-reentrant
/// native libraries should hold their state behind a lock or use one handle
/// per worker.
pub trait PropertyBackend: Send + Sync {
    /// Backend name for logs and batch metadata.
    fn name(&self) -> &str;

    /// Whether this backend can model the given refrigerant.
    fn supports(&self, refrigerant: Refrigerant) -> bool;

    /// Saturation temperature at an absolute pressure (bubble point).
    fn saturation_temperature(
        &self,
        p: Pressure,
        refrigerant: Refrigerant,
    ) -> PropResult<Temperature>;

    /// Saturation pressure at a temperature (bubble point).
    fn saturation_pressure(
        &self,
        t: Temperature,
        refrigerant: Refrigerant,
    ) -> PropResult<Pressure>;

    /// Specific enthalpy [J/kg] at a single-phase (P, T) state.
    fn enthalpy_pt(
        &self,
        p: Pressure,
        t: Temperature,
        refrigerant: Refrigerant,
    ) -> PropResult<SpecEnthalpy>;

    /// Specific entropy [J/(kg·K)] at a single-phase (P, T) state.
    fn entropy_pt(
        &self,
        p: Pressure,
        t: Temperature,
        refrigerant: Refrigerant,
    ) -> PropResult<SpecEntropy>;

    /// Density [kg/m³] at a single-phase (P, T) state.
    fn density_pt(
        &self,
        p: Pressure,
        t: Temperature,
        refrigerant: Refrigerant,
    ) -> PropResult<Density>;
}

/// Validate a (P, T) input pair before it reaches a backend.
///
/// Backends call this first so invalid states are rejected uniformly rather
/// than surfacing as backend-specific faults.
pub(crate) fn check_pt(p: Pressure, t: Temperature) -> PropResult<()> {
    let p_pa = p.value;
    let t_k = t.value;
    if !p_pa.is_finite() || p_pa <= 0.0 {
        return Err(PropError::InvalidState {
            what: "absolute pressure must be positive and finite",
        });
    }
    if !t_k.is_finite() || t_k <= 0.0 {
        return Err(PropError::InvalidState {
            what: "temperature must be positive and finite",
        });
    }
    Ok(())
}
