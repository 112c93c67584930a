//! Analytic surrogate backend for tests and offline work.

use crate::backend::{check_pt, PropertyBackend};
use crate::error::{PropError, PropResult};
use crate::refrigerant::Refrigerant;
use fb_core::units::{k, kg_m3, pa, Density, Pressure, SpecEnthalpy, SpecEntropy, Temperature};

/// Saturation curve slope, K per unit of ln(P / 1 atm).
const SAT_SLOPE_K: f64 = 28.0;
/// Saturation temperature at 1 atm, K.
const SAT_T_ATM_K: f64 = 233.15;
const ATM_PA: f64 = 101_325.0;
/// Effective specific gas constant for the vapor branch, J/(kg·K).
const R_SPEC: f64 = 800.0;

/// Closed-form property model with a qualitatively refrigerant-like shape.
///
/// Not tied to any real fluid: the point is deterministic, dependency-free
/// numbers whose trends (saturation temperature rises with pressure, vapor
/// enthalpy above liquid enthalpy, vapor density tracks the ideal-gas law)
/// let engine tests assert on signs and plausible magnitudes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SurrogateBackend;

impl SurrogateBackend {
    pub fn new() -> Self {
        SurrogateBackend
    }

    fn t_sat_k(p_pa: f64) -> f64 {
        SAT_T_ATM_K + SAT_SLOPE_K * (p_pa / ATM_PA).ln()
    }

    fn p_sat_pa(t_k: f64) -> f64 {
        ATM_PA * ((t_k - SAT_T_ATM_K) / SAT_SLOPE_K).exp()
    }
}

impl PropertyBackend for SurrogateBackend {
    fn name(&self) -> &str {
        "Surrogate"
    }

    fn supports(&self, _refrigerant: Refrigerant) -> bool {
        true
    }

    fn saturation_temperature(
        &self,
        p: Pressure,
        _refrigerant: Refrigerant,
    ) -> PropResult<Temperature> {
        let p_pa = p.value;
        if !p_pa.is_finite() || p_pa <= 0.0 {
            return Err(PropError::InvalidState {
                what: "absolute pressure must be positive and finite",
            });
        }
        Ok(k(Self::t_sat_k(p_pa)))
    }

    fn saturation_pressure(
        &self,
        t: Temperature,
        _refrigerant: Refrigerant,
    ) -> PropResult<Pressure> {
        let t_k = t.value;
        if !t_k.is_finite() || t_k <= 0.0 {
            return Err(PropError::InvalidState {
                what: "temperature must be positive and finite",
            });
        }
        Ok(pa(Self::p_sat_pa(t_k)))
    }

    fn enthalpy_pt(
        &self,
        p: Pressure,
        t: Temperature,
        _refrigerant: Refrigerant,
    ) -> PropResult<SpecEnthalpy> {
        check_pt(p, t)?;
        let dt = t.value - Self::t_sat_k(p.value);
        if dt >= 0.0 {
            Ok(550e3 + 1.7e3 * dt)
        } else {
            Ok(250e3 + 2.6e3 * dt)
        }
    }

    fn entropy_pt(
        &self,
        p: Pressure,
        t: Temperature,
        _refrigerant: Refrigerant,
    ) -> PropResult<SpecEntropy> {
        check_pt(p, t)?;
        let dt = t.value - Self::t_sat_k(p.value);
        if dt >= 0.0 {
            Ok(2.4e3 + 6.0 * dt)
        } else {
            Ok(1.2e3 + 4.0 * dt)
        }
    }

    fn density_pt(
        &self,
        p: Pressure,
        t: Temperature,
        _refrigerant: Refrigerant,
    ) -> PropResult<Density> {
        check_pt(p, t)?;
        let dt = t.value - Self::t_sat_k(p.value);
        if dt >= 0.0 {
            Ok(kg_m3(p.value / (R_SPEC * t.value)))
        } else {
            // Incompressible liquid branch.
            Ok(kg_m3(500.0))
        }
    }
}
