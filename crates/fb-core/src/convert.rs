//! Conversions between rig instrumentation units and SI.
//!
//! The test rig logs temperatures in °F, pressures in psig, compressor speed
//! in Hz or RPM, and displacement in ft³; the property backend works in SI.
//! Conversion factors follow the published definitions (1 ft = 0.3048 m,
//! 1 lb = 0.45359237 kg, 1 BTU/lb = 2.326 kJ/kg, 14.696 psi = 101 325 Pa).

use crate::error::{CoreError, CoreResult};

/// Local atmospheric reference used for gauge pressure readings [psi].
pub const ATM_PSI: f64 = 14.696;

/// Pascals per psi, anchored at 14.696 psi = 101 325 Pa.
pub const PA_PER_PSI: f64 = 101_325.0 / ATM_PSI;

/// Kilograms per pound (exact).
pub const KG_PER_LB: f64 = 0.453_592_37;

/// Cubic meters per cubic foot (exact).
pub const M3_PER_FT3: f64 = 0.028_316_846_592;

/// BTU/hr per watt.
pub const BTU_HR_PER_W: f64 = 3.412_141_633;

/// kJ/kg per BTU/lb (international table, exact).
pub const KJ_KG_PER_BTU_LB: f64 = 2.326;

/// Convert °F to K. Fails if the result is below absolute zero.
pub fn f_to_k(temp_f: f64) -> CoreResult<f64> {
    if !temp_f.is_finite() {
        return Err(CoreError::NonFinite {
            what: "temperature [°F]",
        });
    }
    let kelvin = (temp_f - 32.0) * 5.0 / 9.0 + 273.15;
    if kelvin < 0.0 {
        return Err(CoreError::Domain {
            what: "temperature below absolute zero [°F]",
            value: temp_f,
        });
    }
    Ok(kelvin)
}

/// Convert K to °F. Fails for negative absolute temperature.
pub fn k_to_f(temp_k: f64) -> CoreResult<f64> {
    if !temp_k.is_finite() {
        return Err(CoreError::NonFinite {
            what: "temperature [K]",
        });
    }
    if temp_k < 0.0 {
        return Err(CoreError::Domain {
            what: "negative absolute temperature [K]",
            value: temp_k,
        });
    }
    Ok((temp_k - 273.15) * 9.0 / 5.0 + 32.0)
}

/// Convert gauge pressure [psig] to absolute pressure [Pa].
///
/// Fails when the implied absolute pressure is negative (reading below
/// physical vacuum).
pub fn psig_to_pa(pressure_psig: f64) -> CoreResult<f64> {
    if !pressure_psig.is_finite() {
        return Err(CoreError::NonFinite {
            what: "pressure [psig]",
        });
    }
    let pa = (pressure_psig + ATM_PSI) * PA_PER_PSI;
    if pa < 0.0 {
        return Err(CoreError::Domain {
            what: "gauge pressure below physical vacuum [psig]",
            value: pressure_psig,
        });
    }
    Ok(pa)
}

/// Convert absolute pressure [Pa] to gauge pressure [psig].
pub fn pa_to_psig(pressure_pa: f64) -> CoreResult<f64> {
    if !pressure_pa.is_finite() {
        return Err(CoreError::NonFinite {
            what: "pressure [Pa]",
        });
    }
    if pressure_pa < 0.0 {
        return Err(CoreError::Domain {
            what: "negative absolute pressure [Pa]",
            value: pressure_pa,
        });
    }
    Ok(pressure_pa / PA_PER_PSI - ATM_PSI)
}

/// Convert compressor electrical frequency [Hz] to revolutions per hour.
pub fn hz_to_rev_per_hr(hz: f64) -> f64 {
    hz * 3600.0
}

/// Convert shaft speed [RPM] to revolutions per second.
pub fn rpm_to_rev_per_s(rpm: f64) -> f64 {
    rpm / 60.0
}

/// Convert cubic feet to cubic meters.
pub fn ft3_to_m3(ft3: f64) -> f64 {
    ft3 * M3_PER_FT3
}

/// Convert cubic meters to cubic feet.
pub fn m3_to_ft3(m3: f64) -> f64 {
    m3 / M3_PER_FT3
}

/// Convert mass flow [lb/hr] to [kg/s].
pub fn lb_hr_to_kg_s(lb_hr: f64) -> f64 {
    lb_hr * KG_PER_LB / 3600.0
}

/// Convert mass flow [kg/s] to [lb/hr].
pub fn kg_s_to_lb_hr(kg_s: f64) -> f64 {
    kg_s * 3600.0 / KG_PER_LB
}

/// Convert specific enthalpy [kJ/kg] to [BTU/lb].
pub fn kj_kg_to_btu_lb(kj_kg: f64) -> f64 {
    kj_kg / KJ_KG_PER_BTU_LB
}

/// Convert specific enthalpy [BTU/lb] to [kJ/kg].
pub fn btu_lb_to_kj_kg(btu_lb: f64) -> f64 {
    btu_lb * KJ_KG_PER_BTU_LB
}

/// Convert power [W] to [BTU/hr].
pub fn w_to_btu_hr(watts: f64) -> f64 {
    watts * BTU_HR_PER_W
}

/// Convert power [BTU/hr] to [W].
pub fn btu_hr_to_w(btu_hr: f64) -> f64 {
    btu_hr / BTU_HR_PER_W
}

/// Convert a temperature difference [K] to [°F] (interval, no offset).
pub fn delta_k_to_delta_f(delta_k: f64) -> f64 {
    delta_k * 9.0 / 5.0
}
