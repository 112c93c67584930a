//! CoolProp-based property backend.

use crate::backend::{check_pt, PropertyBackend};
use crate::error::{PropError, PropResult};
use crate::refrigerant::Refrigerant;
use fb_core::units::{Density, Pressure, SpecEnthalpy, SpecEntropy, Temperature};
use rfluids::io::{FluidInputPair, FluidParam};
use rfluids::native::AbstractState;

/// CoolProp backend for refrigerant properties.
///
/// Each query constructs a fresh `AbstractState`, so the backend itself is
/// stateless and can be shared freely across threads. R410A resolves as a
/// CoolProp predefined mixture; everything else is a pure HEOS fluid.
pub struct CoolPropBackend;

impl CoolPropBackend {
    pub fn new() -> Self {
        CoolPropBackend
    }

    fn state_for(&self, refrigerant: Refrigerant) -> PropResult<AbstractState> {
        AbstractState::new("HEOS", refrigerant.coolprop_name()).map_err(|e| PropError::Backend {
            message: format!("CoolProp state creation failed for {}: {}", refrigerant, e),
        })
    }

    /// Update to a (P, T) state and read one output parameter.
    fn query_pt(
        &self,
        p: Pressure,
        t: Temperature,
        refrigerant: Refrigerant,
        param: FluidParam,
    ) -> PropResult<f64> {
        check_pt(p, t)?;
        let mut state = self.state_for(refrigerant)?;
        state
            .update(FluidInputPair::PT, p.value, t.value)
            .map_err(|e| PropError::Backend {
                message: format!(
                    "CoolProp error at P={} Pa, T={} K: {}",
                    p.value, t.value, e
                ),
            })?;
        state.keyed_output(param).map_err(|e| PropError::Backend {
            message: format!("CoolProp output query failed: {}", e),
        })
    }
}

impl Default for CoolPropBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyBackend for CoolPropBackend {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn supports(&self, _refrigerant: Refrigerant) -> bool {
        // Every listed refrigerant has a HEOS fluid or predefined mixture.
        true
    }

    fn saturation_temperature(
        &self,
        p: Pressure,
        refrigerant: Refrigerant,
    ) -> PropResult<Temperature> {
        let p_pa = p.value;
        if !p_pa.is_finite() || p_pa <= 0.0 {
            return Err(PropError::InvalidState {
                what: "absolute pressure must be positive and finite",
            });
        }
        let mut state = self.state_for(refrigerant)?;
        state
            .update(FluidInputPair::PQ, p_pa, 0.0)
            .map_err(|e| PropError::Backend {
                message: format!("CoolProp error at P={} Pa, Q=0: {}", p_pa, e),
            })?;
        let t_k = state
            .keyed_output(FluidParam::T)
            .map_err(|e| PropError::Backend {
                message: format!("CoolProp output query failed: {}", e),
            })?;
        Ok(fb_core::units::k(t_k))
    }

    fn saturation_pressure(
        &self,
        t: Temperature,
        refrigerant: Refrigerant,
    ) -> PropResult<Pressure> {
        let t_k = t.value;
        if !t_k.is_finite() || t_k <= 0.0 {
            return Err(PropError::InvalidState {
                what: "temperature must be positive and finite",
            });
        }
        let mut state = self.state_for(refrigerant)?;
        state
            .update(FluidInputPair::QT, 0.0, t_k)
            .map_err(|e| PropError::Backend {
                message: format!("CoolProp error at T={} K, Q=0: {}", t_k, e),
            })?;
        let p_pa = state
            .keyed_output(FluidParam::P)
            .map_err(|e| PropError::Backend {
                message: format!("CoolProp output query failed: {}", e),
            })?;
        Ok(fb_core::units::pa(p_pa))
    }

    fn enthalpy_pt(
        &self,
        p: Pressure,
        t: Temperature,
        refrigerant: Refrigerant,
    ) -> PropResult<SpecEnthalpy> {
        self.query_pt(p, t, refrigerant, FluidParam::HMass)
    }

    fn entropy_pt(
        &self,
        p: Pressure,
        t: Temperature,
        refrigerant: Refrigerant,
    ) -> PropResult<SpecEntropy> {
        self.query_pt(p, t, refrigerant, FluidParam::SMass)
    }

    fn density_pt(
        &self,
        p: Pressure,
        t: Temperature,
        refrigerant: Refrigerant,
    ) -> PropResult<Density> {
        let rho = self.query_pt(p, t, refrigerant, FluidParam::DMass)?;
        if !rho.is_finite() || rho <= 0.0 {
            return Err(PropError::Backend {
                message: "CoolProp returned a non-physical density".into(),
            });
        }
        Ok(fb_core::units::kg_m3(rho))
    }
}
