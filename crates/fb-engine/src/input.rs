//! Engine inputs: rows, rated datasheet values, compressor geometry,
//! batch configuration.

use fb_props::Refrigerant;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One timestamped record of raw sensor readings, keyed by data column.
///
/// Absence from the map means "no reading". A stored non-finite value is
/// treated the same as an absent one at read time; zero is a legitimate
/// reading, never a missing-value marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    values: BTreeMap<String, f64>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            values: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn set(&mut self, column: impl Into<String>, value: f64) {
        self.values.insert(column.into(), value);
    }

    /// Reading for a column, if present and finite.
    pub fn get(&self, column: &str) -> Option<f64> {
        self.values.get(column).copied().filter(|v| v.is_finite())
    }
}

/// The loaded dataset: declared columns plus ordered rows.
///
/// `columns` is the full set of columns the loader declared; role resolution
/// checks port mappings against it so a stale mapping cannot produce ghost
/// readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

/// The five manufacturer datasheet values volumetric efficiency is derived
/// from. Each is optional; a stored zero counts as missing (an unfilled form
/// field, not a measurement).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatedInputs {
    /// Rated mass flow [lb/hr].
    pub mass_flow_lb_hr: Option<f64>,
    /// Rated compressor electrical frequency [Hz].
    pub frequency_hz: Option<f64>,
    /// Rated displacement [ft³/rev].
    pub displacement_ft3: Option<f64>,
    /// Rated evaporator saturation temperature [°F].
    pub evap_sat_temp_f: Option<f64>,
    /// Rated return-gas temperature [°F].
    pub return_gas_temp_f: Option<f64>,
}

impl RatedInputs {
    /// Display names of fields that are absent or zero, in datasheet order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        fn present(v: Option<f64>) -> bool {
            matches!(v, Some(x) if x != 0.0 && x.is_finite())
        }
        let mut missing = Vec::new();
        if !present(self.mass_flow_lb_hr) {
            missing.push("Rated Mass Flow Rate");
        }
        if !present(self.frequency_hz) {
            missing.push("Rated Frequency");
        }
        if !present(self.displacement_ft3) {
            missing.push("Rated Displacement");
        }
        if !present(self.evap_sat_temp_f) {
            missing.push("Rated Evaporator Temperature");
        }
        if !present(self.return_gas_temp_f) {
            missing.push("Rated Return Gas Temperature");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Compressor geometry used by both calculation steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressorSpec {
    /// Swept displacement per revolution [ft³].
    pub displacement_ft3: f64,
}

/// Per-batch configuration, fixed before the first row is processed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    pub refrigerant: Refrigerant,
    /// Volumetric efficiency used when the rated inputs cannot produce one.
    pub fallback_eta_vol: f64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            refrigerant: Refrigerant::default(),
            fallback_eta_vol: crate::rated::DEFAULT_ETA_VOL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_reading_is_absent() {
        let mut row = Row::new();
        row.set("sensor_01", f64::NAN);
        row.set("sensor_02", 42.0);
        assert_eq!(row.get("sensor_01"), None);
        assert_eq!(row.get("sensor_02"), Some(42.0));
        assert_eq!(row.get("sensor_03"), None);
    }

    #[test]
    fn zero_reading_is_a_reading() {
        let row = Row::from_pairs([("sensor_01", 0.0)]);
        assert_eq!(row.get("sensor_01"), Some(0.0));
    }

    #[test]
    fn empty_rated_inputs_miss_all_five() {
        assert_eq!(RatedInputs::default().missing_fields().len(), 5);
    }

    #[test]
    fn zero_rated_field_counts_as_missing() {
        let rated = RatedInputs {
            mass_flow_lb_hr: Some(211.0),
            frequency_hz: Some(0.0),
            displacement_ft3: Some(0.01),
            evap_sat_temp_f: Some(40.0),
            return_gas_temp_f: Some(65.0),
        };
        assert_eq!(rated.missing_fields(), vec!["Rated Frequency"]);
        assert!(!rated.is_complete());
    }

    #[test]
    fn default_config_uses_documented_fallback() {
        let cfg = BatchConfig::default();
        assert_eq!(cfg.fallback_eta_vol, 0.85);
        assert_eq!(cfg.refrigerant, Refrigerant::R290);
    }
}
