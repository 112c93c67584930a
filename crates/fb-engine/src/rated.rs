//! Volumetric efficiency from rated datasheet conditions.

use crate::input::RatedInputs;
use fb_core::convert::{f_to_k, ft3_to_m3, hz_to_rev_per_hr, KG_PER_LB};
use fb_core::units::k;
use fb_core::Warning;
use fb_props::{PropertyBackend, Refrigerant};
use fb_results::{EtaVolMethod, VolEffResult};
use tracing::{info, warn};

/// Policy fallback when rated inputs cannot produce an efficiency.
///
/// A documented constant, not a measurement; callers can override it through
/// `BatchConfig::fallback_eta_vol`.
pub const DEFAULT_ETA_VOL: f64 = 0.85;

/// Derive volumetric efficiency from the five rated datasheet values.
///
/// `eta_vol = rated mass flow / theoretical mass flow`, where theoretical
/// mass flow is rated return-gas density times swept volume per hour at the
/// rated frequency, with return-gas density evaluated at the saturation
/// pressure of the rated evaporator temperature.
///
/// Never fails hard: incomplete inputs, property-backend failures, and
/// degenerate arithmetic all fall back to `fallback` with one warning per
/// cause, so the batch always has a usable efficiency.
pub fn calculate_eta_vol(
    backend: &dyn PropertyBackend,
    rated: &RatedInputs,
    refrigerant: Refrigerant,
    fallback: f64,
) -> VolEffResult {
    let missing = rated.missing_fields();
    if !missing.is_empty() {
        warn!(
            missing = missing.len(),
            fallback, "rated inputs incomplete, using fallback volumetric efficiency"
        );
        return VolEffResult {
            eta_vol: fallback,
            method: EtaVolMethod::Default,
            warnings: missing.into_iter().map(Warning::missing_rated).collect(),
        };
    }

    // All five present and non-zero past this point.
    let mass_flow_lb_hr = rated.mass_flow_lb_hr.unwrap_or_default();
    let frequency_hz = rated.frequency_hz.unwrap_or_default();
    let displacement_ft3 = rated.displacement_ft3.unwrap_or_default();
    let evap_sat_temp_f = rated.evap_sat_temp_f.unwrap_or_default();
    let return_gas_temp_f = rated.return_gas_temp_f.unwrap_or_default();

    let result = (|| -> Result<f64, String> {
        let t_evap_k = f_to_k(evap_sat_temp_f).map_err(|e| e.to_string())?;
        let t_return_k = f_to_k(return_gas_temp_f).map_err(|e| e.to_string())?;
        let p_sat = backend
            .saturation_pressure(k(t_evap_k), refrigerant)
            .map_err(|e| e.to_string())?;
        let rho = backend
            .density_pt(p_sat, k(t_return_k), refrigerant)
            .map_err(|e| e.to_string())?;

        let theoretical_kg_hr =
            rho.value * hz_to_rev_per_hr(frequency_hz) * ft3_to_m3(displacement_ft3);
        if !theoretical_kg_hr.is_finite() || theoretical_kg_hr <= 0.0 {
            return Err(format!(
                "theoretical mass flow is not positive ({theoretical_kg_hr} kg/hr)"
            ));
        }
        Ok(mass_flow_lb_hr * KG_PER_LB / theoretical_kg_hr)
    })();

    match result {
        Ok(eta_vol) => {
            info!(eta_vol, "volumetric efficiency calculated from rated inputs");
            VolEffResult {
                eta_vol,
                method: EtaVolMethod::Calculated,
                warnings: Vec::new(),
            }
        }
        Err(reason) => {
            warn!(%reason, fallback, "volumetric efficiency fell back to default");
            VolEffResult {
                eta_vol: fallback,
                method: EtaVolMethod::Default,
                warnings: vec![Warning::property_failure(
                    None,
                    format!("Volumetric efficiency fell back to default: {reason}"),
                )],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fb_core::WarnCode;
    use fb_props::{PropError, PropResult, SurrogateBackend};
    use fb_core::units::{Density, Pressure, Temperature};
    use proptest::prelude::*;

    fn rated_scenario_a() -> RatedInputs {
        RatedInputs {
            mass_flow_lb_hr: Some(211.0),
            frequency_hz: Some(75.0),
            displacement_ft3: Some(0.01),
            evap_sat_temp_f: Some(40.0),
            return_gas_temp_f: Some(65.0),
        }
    }

    #[test]
    fn empty_inputs_fall_back_with_five_warnings() {
        let backend = SurrogateBackend::new();
        let result = calculate_eta_vol(
            &backend,
            &RatedInputs::default(),
            Refrigerant::R290,
            DEFAULT_ETA_VOL,
        );
        assert_eq!(result.eta_vol, 0.85);
        assert_eq!(result.method, EtaVolMethod::Default);
        assert_eq!(result.warnings.len(), 5);
        assert!(result
            .warnings
            .iter()
            .all(|w| w.code == WarnCode::MissingRated));
    }

    #[test]
    fn rated_conditions_give_plausible_efficiency() {
        let backend = SurrogateBackend::new();
        let result = calculate_eta_vol(
            &backend,
            &rated_scenario_a(),
            Refrigerant::R290,
            DEFAULT_ETA_VOL,
        );
        assert_eq!(result.method, EtaVolMethod::Calculated);
        assert!(result.warnings.is_empty());
        assert!(
            result.eta_vol > 0.5 && result.eta_vol < 1.0,
            "eta_vol = {}",
            result.eta_vol
        );
    }

    #[test]
    fn custom_fallback_is_honored() {
        let backend = SurrogateBackend::new();
        let result =
            calculate_eta_vol(&backend, &RatedInputs::default(), Refrigerant::R290, 0.7);
        assert_eq!(result.eta_vol, 0.7);
    }

    /// Backend that refuses every query.
    struct FailingBackend;

    impl PropertyBackend for FailingBackend {
        fn name(&self) -> &str {
            "Failing"
        }
        fn supports(&self, _r: Refrigerant) -> bool {
            true
        }
        fn saturation_temperature(
            &self,
            _p: Pressure,
            _r: Refrigerant,
        ) -> PropResult<Temperature> {
            Err(PropError::Backend {
                message: "synthetic failure".into(),
            })
        }
        fn saturation_pressure(&self, _t: Temperature, _r: Refrigerant) -> PropResult<Pressure> {
            Err(PropError::Backend {
                message: "synthetic failure".into(),
            })
        }
        fn enthalpy_pt(&self, _p: Pressure, _t: Temperature, _r: Refrigerant) -> PropResult<f64> {
            Err(PropError::Backend {
                message: "synthetic failure".into(),
            })
        }
        fn entropy_pt(&self, _p: Pressure, _t: Temperature, _r: Refrigerant) -> PropResult<f64> {
            Err(PropError::Backend {
                message: "synthetic failure".into(),
            })
        }
        fn density_pt(&self, _p: Pressure, _t: Temperature, _r: Refrigerant) -> PropResult<Density> {
            Err(PropError::Backend {
                message: "synthetic failure".into(),
            })
        }
    }

    #[test]
    fn backend_failure_falls_back_gracefully() {
        let result = calculate_eta_vol(
            &FailingBackend,
            &rated_scenario_a(),
            Refrigerant::R290,
            DEFAULT_ETA_VOL,
        );
        assert_eq!(result.method, EtaVolMethod::Default);
        assert_eq!(result.eta_vol, 0.85);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, WarnCode::PropertyFailure);
        assert!(result.warnings[0].message.contains("synthetic failure"));
    }

    proptest! {
        /// eta_vol is linear in rated mass flow, everything else fixed.
        #[test]
        fn linear_in_rated_mass_flow(scale in 1.1..4.0f64) {
            let backend = SurrogateBackend::new();
            let base = rated_scenario_a();
            let mut scaled = base;
            scaled.mass_flow_lb_hr = Some(211.0 * scale);
            let r1 = calculate_eta_vol(&backend, &base, Refrigerant::R290, DEFAULT_ETA_VOL);
            let r2 = calculate_eta_vol(&backend, &scaled, Refrigerant::R290, DEFAULT_ETA_VOL);
            prop_assert_eq!(r1.method, EtaVolMethod::Calculated);
            prop_assert!((r2.eta_vol / r1.eta_vol - scale).abs() < 1e-9);
        }
    }
}
