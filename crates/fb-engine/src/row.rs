//! Per-row performance calculation.
//!
//! Nine output sections, each an independent failure domain: a missing
//! sensor or a property failure marks that section's outputs not-computed
//! and appends a structured warning, and the remaining sections proceed.
//! Sections 8 and 9 encode the only dependency chain (compressor-inlet
//! density feeds mass flow, which feeds cooling capacity together with the
//! TXV enthalpies).

use crate::input::{CompressorSpec, Row};
use fb_core::convert::{
    delta_k_to_delta_f, f_to_k, ft3_to_m3, k_to_f, kg_s_to_lb_hr, psig_to_pa, rpm_to_rev_per_s,
    w_to_btu_hr,
};
use fb_core::units::{k, pa};
use fb_core::{Circuit, Warning};
use fb_props::{PropertyBackend, Refrigerant};
use fb_results::{Completion, OutputKey, RowResult};
use fb_topology::{RoleMap, SensorRole};
use std::collections::{BTreeMap, BTreeSet};

/// Number of output sections a row attempts.
const SECTIONS: usize = 9;

/// Compute every derivable output for one row.
///
/// Never fails: every failure path terminates in partial output plus a
/// warning. Values in the returned map are in the historical sheet units
/// (°F, ΔT °F, psig, kg/m³, kJ/kg, kJ/(kg·K), lb/hr, BTU/hr).
pub fn calculate_row(
    backend: &dyn PropertyBackend,
    row: &Row,
    roles: &RoleMap,
    eta_vol: f64,
    spec: &CompressorSpec,
    refrigerant: Refrigerant,
) -> RowResult {
    let mut calc = RowCalc {
        backend,
        row,
        roles,
        refrigerant,
        outputs: BTreeMap::new(),
        warnings: Vec::new(),
        noted_roles: BTreeSet::new(),
        rho_comp_in_si: None,
        h_comp_in_si: None,
        rpm: None,
        h_txv_si: BTreeMap::new(),
        m_dot_kg_s: None,
    };

    // Shared pressure readings, converted once.
    let p_suc = calc.read_pressure(SensorRole::SuctionPressure);
    let p_disch = calc.read_pressure(SensorRole::DischargePressure);

    let mut computed = 0usize;
    for circuit in Circuit::ALL {
        if calc.coil_section(circuit, p_suc) {
            computed += 1;
        }
    }
    if calc.compressor_inlet_section(p_suc) {
        computed += 1;
    }
    if calc.compressor_outlet_section() {
        computed += 1;
    }
    if calc.condenser_section(p_disch) {
        computed += 1;
    }
    if calc.txv_sections(p_disch) {
        computed += 1;
    }
    if calc.mass_flow_section(eta_vol, spec) {
        computed += 1;
    }
    if calc.cooling_capacity_section() {
        computed += 1;
    }

    RowResult {
        outputs: calc.outputs,
        warnings: calc.warnings,
        completion: Completion {
            computed,
            attempted: SECTIONS,
        },
    }
}

/// A pressure reading in both instrumentation and SI units.
#[derive(Clone, Copy)]
struct PressureReading {
    psig: f64,
    pa: f64,
}

struct RowCalc<'a> {
    backend: &'a dyn PropertyBackend,
    row: &'a Row,
    roles: &'a RoleMap,
    refrigerant: Refrigerant,
    outputs: BTreeMap<OutputKey, f64>,
    warnings: Vec<Warning>,
    /// Roles already warned about in this row, to keep warnings per-role
    /// rather than per-section.
    noted_roles: BTreeSet<SensorRole>,

    // Intermediates stashed for the dependency chain.
    rho_comp_in_si: Option<f64>,
    h_comp_in_si: Option<f64>,
    rpm: Option<f64>,
    h_txv_si: BTreeMap<Circuit, f64>,
    m_dot_kg_s: Option<f64>,
}

impl RowCalc<'_> {
    /// Raw value for a role: `None` when unresolved or unread, with one
    /// warning per role per row. Averaged bindings use the mean of whichever
    /// columns hold a reading.
    fn read(&mut self, role: SensorRole) -> Option<f64> {
        let Some(binding) = self.roles.get(role) else {
            self.note_missing(role, format!("Sensor not mapped: {}", role.key()));
            return None;
        };
        let readings: Vec<f64> = binding
            .columns()
            .iter()
            .filter_map(|col| self.row.get(col))
            .collect();
        if readings.is_empty() {
            self.note_missing(role, format!("No reading: {}", role.key()));
            return None;
        }
        Some(readings.iter().sum::<f64>() / readings.len() as f64)
    }

    /// Gauge pressure reading converted to absolute Pa. Conversion failures
    /// (readings below physical vacuum) warn as property failures.
    fn read_pressure(&mut self, role: SensorRole) -> Option<PressureReading> {
        let psig = self.read(role)?;
        match psig_to_pa(psig) {
            Ok(pa) => Some(PressureReading { psig, pa }),
            Err(e) => {
                self.note_failure(role, format!("{}: {e}", role.key()));
                None
            }
        }
    }

    /// Temperature reading in (°F, K).
    fn read_temp(&mut self, role: SensorRole) -> Option<(f64, f64)> {
        let temp_f = self.read(role)?;
        match f_to_k(temp_f) {
            Ok(temp_k) => Some((temp_f, temp_k)),
            Err(e) => {
                self.note_failure(role, format!("{}: {e}", role.key()));
                None
            }
        }
    }

    fn note_missing(&mut self, role: SensorRole, message: String) {
        if self.noted_roles.insert(role) {
            self.warnings.push(Warning::missing_sensor(role.key(), message));
        }
    }

    fn note_failure(&mut self, role: SensorRole, message: String) {
        if self.noted_roles.insert(role) {
            self.warnings
                .push(Warning::property_failure(Some(role.key()), message));
        }
    }

    /// Echo a raw sensor reading into the output table. Passthroughs never
    /// gate a section.
    fn passthrough(&mut self, role: SensorRole, key: OutputKey) {
        if let Some(value) = self.read(role) {
            self.outputs.insert(key, value);
        }
    }

    /// Saturation temperature plus single-phase density/enthalpy/entropy at
    /// one (pressure, temperature) state, all SI.
    fn state_properties(&self, p_pa: f64, t_k: f64) -> Result<StateProps, String> {
        let t_sat_k = self
            .backend
            .saturation_temperature(pa(p_pa), self.refrigerant)
            .map_err(|e| e.to_string())?
            .value;
        let rho = self
            .backend
            .density_pt(pa(p_pa), k(t_k), self.refrigerant)
            .map_err(|e| e.to_string())?
            .value;
        let h = self
            .backend
            .enthalpy_pt(pa(p_pa), k(t_k), self.refrigerant)
            .map_err(|e| e.to_string())?;
        let s = self
            .backend
            .entropy_pt(pa(p_pa), k(t_k), self.refrigerant)
            .map_err(|e| e.to_string())?;
        let t_sat_f = k_to_f(t_sat_k).map_err(|e| e.to_string())?;
        Ok(StateProps {
            t_sat_k,
            t_sat_f,
            rho,
            h,
            s,
        })
    }

    /// Sections 1-3: one evaporator coil per circuit, at suction pressure.
    fn coil_section(&mut self, circuit: Circuit, p_suc: Option<PressureReading>) -> bool {
        let outlet = self.read_temp(SensorRole::CoilOutletTemp(circuit));

        // Passthroughs echo regardless of whether the section computes.
        self.passthrough(
            SensorRole::TxvOutletTemp(circuit),
            OutputKey::TxvOutletTemp(circuit),
        );
        self.passthrough(
            SensorRole::CoilInletTemp(circuit),
            OutputKey::CoilInletTemp(circuit),
        );

        let (Some(p), Some((t_f, t_k))) = (p_suc, outlet) else {
            return false;
        };
        match self.state_properties(p.pa, t_k) {
            Ok(props) => {
                self.outputs.insert(OutputKey::CoilOutletTemp(circuit), t_f);
                self.outputs
                    .insert(OutputKey::CoilSatTemp(circuit), props.t_sat_f);
                self.outputs.insert(
                    OutputKey::CoilSuperheat(circuit),
                    delta_k_to_delta_f(t_k - props.t_sat_k),
                );
                self.outputs
                    .insert(OutputKey::CoilDensity(circuit), props.rho);
                self.outputs
                    .insert(OutputKey::CoilEnthalpy(circuit), props.h / 1e3);
                self.outputs
                    .insert(OutputKey::CoilEntropy(circuit), props.s / 1e3);
                true
            }
            Err(reason) => {
                self.warnings.push(Warning::property_failure(
                    Some(SensorRole::CoilOutletTemp(circuit).key()),
                    format!("{} coil properties failed: {reason}", circuit.label()),
                ));
                false
            }
        }
    }

    /// Section 4: compressor-inlet state. Feeds the mass-flow section.
    fn compressor_inlet_section(&mut self, p_suc: Option<PressureReading>) -> bool {
        let inlet = self.read_temp(SensorRole::CompressorInletTemp);
        let (Some(p), Some((t_f, t_k))) = (p_suc, inlet) else {
            return false;
        };
        match self.state_properties(p.pa, t_k) {
            Ok(props) => {
                self.outputs.insert(OutputKey::SuctionPressure, p.psig);
                self.outputs.insert(OutputKey::CompInletTemp, t_f);
                self.outputs.insert(OutputKey::CompInSatTemp, props.t_sat_f);
                self.outputs.insert(
                    OutputKey::TotalSuperheat,
                    delta_k_to_delta_f(t_k - props.t_sat_k),
                );
                self.outputs.insert(OutputKey::CompInDensity, props.rho);
                self.outputs.insert(OutputKey::CompInEnthalpy, props.h / 1e3);
                self.outputs.insert(OutputKey::CompInEntropy, props.s / 1e3);
                self.rho_comp_in_si = Some(props.rho);
                self.h_comp_in_si = Some(props.h);
                true
            }
            Err(reason) => {
                self.warnings.push(Warning::property_failure(
                    Some(SensorRole::CompressorInletTemp.key()),
                    format!("Compressor-inlet properties failed: {reason}"),
                ));
                false
            }
        }
    }

    /// Section 5: two independent passthrough readings; computed only when
    /// both are present.
    fn compressor_outlet_section(&mut self) -> bool {
        let t_3a = self.read(SensorRole::CompressorOutletTemp);
        let rpm = self.read(SensorRole::CompressorSpeed);
        if let Some(t) = t_3a {
            self.outputs.insert(OutputKey::DischargeTemp, t);
        }
        if let Some(rpm) = rpm {
            self.outputs.insert(OutputKey::CompressorSpeed, rpm);
            self.rpm = Some(rpm);
        }
        t_3a.is_some() && rpm.is_some()
    }

    /// Section 6: condenser state and subcooling at discharge pressure.
    fn condenser_section(&mut self, p_disch: Option<PressureReading>) -> bool {
        let inlet = self.read_temp(SensorRole::CondenserInletTemp);
        let outlet = self.read_temp(SensorRole::CondenserOutletTemp);

        self.passthrough(SensorRole::CondenserWaterInTemp, OutputKey::WaterInTemp);
        self.passthrough(SensorRole::CondenserWaterOutTemp, OutputKey::WaterOutTemp);

        let (Some(p), Some((t_in_f, _)), Some((t_out_f, t_out_k))) = (p_disch, inlet, outlet)
        else {
            return false;
        };
        let t_sat_k = match self
            .backend
            .saturation_temperature(pa(p.pa), self.refrigerant)
        {
            Ok(t) => t.value,
            Err(e) => {
                self.warnings.push(Warning::property_failure(
                    Some(SensorRole::DischargePressure.key()),
                    format!("Condenser saturation failed: {e}"),
                ));
                return false;
            }
        };
        let Ok(t_sat_f) = k_to_f(t_sat_k) else {
            return false;
        };
        self.outputs.insert(OutputKey::CondenserInletTemp, t_in_f);
        self.outputs.insert(OutputKey::DischargePressure, p.psig);
        self.outputs.insert(OutputKey::CondenserOutletTemp, t_out_f);
        self.outputs.insert(OutputKey::CondenserSatTemp, t_sat_f);
        // Negative subcooling is a valid, if suspicious, output.
        self.outputs.insert(
            OutputKey::Subcooling,
            delta_k_to_delta_f(t_sat_k - t_out_k),
        );
        true
    }

    /// Section 7: liquid state at each circuit's TXV inlet. The section
    /// counts as computed only when all three circuits compute, but each
    /// circuit is its own failure domain and §9 needs only one of them.
    fn txv_sections(&mut self, p_disch: Option<PressureReading>) -> bool {
        let mut all = true;
        for circuit in Circuit::ALL {
            if !self.txv_circuit(circuit, p_disch) {
                all = false;
            }
        }
        all
    }

    fn txv_circuit(&mut self, circuit: Circuit, p_disch: Option<PressureReading>) -> bool {
        let inlet = self.read_temp(SensorRole::TxvInletTemp(circuit));
        let (Some(p), Some((t_f, t_k))) = (p_disch, inlet) else {
            return false;
        };
        let result = (|| -> Result<(f64, f64, f64), String> {
            let t_sat_k = self
                .backend
                .saturation_temperature(pa(p.pa), self.refrigerant)
                .map_err(|e| e.to_string())?
                .value;
            let h = self
                .backend
                .enthalpy_pt(pa(p.pa), k(t_k), self.refrigerant)
                .map_err(|e| e.to_string())?;
            let t_sat_f = k_to_f(t_sat_k).map_err(|e| e.to_string())?;
            Ok((t_sat_k, t_sat_f, h))
        })();
        match result {
            Ok((t_sat_k, t_sat_f, h)) => {
                self.outputs.insert(OutputKey::TxvInletTemp(circuit), t_f);
                self.outputs.insert(OutputKey::TxvSatTemp(circuit), t_sat_f);
                self.outputs.insert(
                    OutputKey::TxvSubcooling(circuit),
                    delta_k_to_delta_f(t_sat_k - t_k),
                );
                self.outputs.insert(OutputKey::TxvEnthalpy(circuit), h / 1e3);
                self.h_txv_si.insert(circuit, h);
                true
            }
            Err(reason) => {
                self.warnings.push(Warning::property_failure(
                    Some(SensorRole::TxvInletTemp(circuit).key()),
                    format!("{} TXV properties failed: {reason}", circuit.label()),
                ));
                false
            }
        }
    }

    /// Section 8: mass flow from compressor speed, inlet density, volumetric
    /// efficiency, and displacement. All four prerequisites must be present.
    fn mass_flow_section(&mut self, eta_vol: f64, spec: &CompressorSpec) -> bool {
        let mut blockers: Vec<&str> = Vec::new();
        if self.rpm.is_none() {
            blockers.push("compressor speed");
        }
        if self.rho_comp_in_si.is_none() {
            blockers.push("compressor-inlet density");
        }
        if !(eta_vol > 0.0) {
            blockers.push("volumetric efficiency");
        }
        if !(spec.displacement_ft3 > 0.0) {
            blockers.push("compressor displacement");
        }
        if !blockers.is_empty() {
            self.warnings.push(Warning::not_computable(format!(
                "Mass flow rate not computed: missing {}",
                blockers.join(", ")
            )));
            return false;
        }
        let rpm = self.rpm.unwrap_or_default();
        let rho = self.rho_comp_in_si.unwrap_or_default();
        let m_dot_kg_s =
            rho * eta_vol * ft3_to_m3(spec.displacement_ft3) * rpm_to_rev_per_s(rpm);
        self.outputs
            .insert(OutputKey::MassFlow, kg_s_to_lb_hr(m_dot_kg_s));
        self.m_dot_kg_s = Some(m_dot_kg_s);
        true
    }

    /// Section 9: cooling capacity from mass flow, compressor-inlet enthalpy,
    /// and the mean of the available TXV enthalpies. Partial TXV coverage is
    /// a deliberate averaging policy, not an error.
    fn cooling_capacity_section(&mut self) -> bool {
        let mut blockers: Vec<&str> = Vec::new();
        if self.m_dot_kg_s.is_none() {
            blockers.push("mass flow rate");
        }
        if self.h_comp_in_si.is_none() {
            blockers.push("compressor-inlet enthalpy");
        }
        if self.h_txv_si.is_empty() {
            blockers.push("TXV enthalpy (all circuits)");
        }
        if !blockers.is_empty() {
            self.warnings.push(Warning::not_computable(format!(
                "Cooling capacity not computed: missing {}",
                blockers.join(", ")
            )));
            return false;
        }
        let m_dot = self.m_dot_kg_s.unwrap_or_default();
        let h_in = self.h_comp_in_si.unwrap_or_default();
        let h_txv_mean =
            self.h_txv_si.values().sum::<f64>() / self.h_txv_si.len() as f64;
        let qc_w = m_dot * (h_in - h_txv_mean);
        self.outputs
            .insert(OutputKey::CoolingCapacity, w_to_btu_hr(qc_w));
        true
    }
}

struct StateProps {
    t_sat_k: f64,
    t_sat_f: f64,
    rho: f64,
    h: f64,
    s: f64,
}
