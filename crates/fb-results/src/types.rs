//! Result containers for per-row and batch calculations.

use crate::output::OutputKey;
use fb_core::Warning;
use serde::Serialize;
use std::collections::BTreeMap;

/// Section completion for one row: `computed` of `attempted` sections
/// produced all their core outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub computed: usize,
    pub attempted: usize,
}

impl Completion {
    pub fn fraction(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            self.computed as f64 / self.attempted as f64
        }
    }

    pub fn is_full(&self) -> bool {
        self.attempted > 0 && self.computed == self.attempted
    }
}

/// Calculated outputs for one input row.
///
/// Absence from `outputs` is the "not computed" marker; a present key always
/// holds a finite value in the schema's historical units. Immutable once the
/// calculator returns it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowResult {
    pub outputs: BTreeMap<OutputKey, f64>,
    pub warnings: Vec<Warning>,
    pub completion: Completion,
}

impl RowResult {
    pub fn get(&self, key: OutputKey) -> Option<f64> {
        self.outputs.get(&key).copied()
    }

    pub fn is_computed(&self, key: OutputKey) -> bool {
        self.outputs.contains_key(&key)
    }
}

/// How the batch's volumetric efficiency was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EtaVolMethod {
    /// Derived from the five rated datasheet inputs.
    Calculated,
    /// Policy fallback constant; rated inputs were incomplete or the
    /// property query failed.
    Default,
}

/// Volumetric efficiency, computed once per batch and shared by every row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolEffResult {
    pub eta_vol: f64,
    pub method: EtaVolMethod,
    pub warnings: Vec<Warning>,
}

/// Run-level aggregates over a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatchStats {
    pub total_rows: usize,
    pub rows_without_warnings: usize,
    pub rows_fully_complete: usize,
    pub mean_completion: f64,
    pub total_warnings: usize,
}

impl BatchStats {
    pub fn from_rows(rows: &[RowResult]) -> Self {
        let total_rows = rows.len();
        let rows_without_warnings = rows.iter().filter(|r| r.warnings.is_empty()).count();
        let rows_fully_complete = rows.iter().filter(|r| r.completion.is_full()).count();
        let mean_completion = if total_rows == 0 {
            0.0
        } else {
            rows.iter().map(|r| r.completion.fraction()).sum::<f64>() / total_rows as f64
        };
        let total_warnings = rows.iter().map(|r| r.warnings.len()).sum();
        Self {
            total_rows,
            rows_without_warnings,
            rows_fully_complete,
            mean_completion,
            total_warnings,
        }
    }
}

/// Ordered per-row results plus run-level metadata, aligned with the input
/// rows one-to-one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub rows: Vec<RowResult>,
    pub vol_eff: VolEffResult,
    pub refrigerant: String,
    pub backend: String,
    pub stats: BatchStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fb_core::Circuit;

    fn row(computed: usize, warnings: usize) -> RowResult {
        RowResult {
            outputs: BTreeMap::new(),
            warnings: (0..warnings)
                .map(|i| Warning::not_computable(format!("w{i}")))
                .collect(),
            completion: Completion {
                computed,
                attempted: 9,
            },
        }
    }

    #[test]
    fn completion_fraction() {
        let c = Completion {
            computed: 3,
            attempted: 9,
        };
        assert!((c.fraction() - 1.0 / 3.0).abs() < 1e-12);
        assert!(!c.is_full());
        assert!(Completion {
            computed: 9,
            attempted: 9
        }
        .is_full());
    }

    #[test]
    fn stats_aggregate_rows() {
        let rows = vec![row(9, 0), row(9, 2), row(3, 5)];
        let stats = BatchStats::from_rows(&rows);
        assert_eq!(stats.total_rows, 3);
        assert_eq!(stats.rows_without_warnings, 1);
        assert_eq!(stats.rows_fully_complete, 2);
        assert_eq!(stats.total_warnings, 7);
        assert!((stats.mean_completion - (1.0 + 1.0 + 1.0 / 3.0) / 3.0).abs() < 1e-12);
    }

    #[test]
    fn stats_on_empty_batch() {
        let stats = BatchStats::from_rows(&[]);
        assert_eq!(stats.total_rows, 0);
        assert_eq!(stats.mean_completion, 0.0);
    }

    #[test]
    fn row_outputs_serialize_by_column_name() {
        let mut outputs = BTreeMap::new();
        outputs.insert(OutputKey::CoilSatTemp(Circuit::Left), 21.5);
        outputs.insert(OutputKey::MassFlow, 182.0);
        let r = RowResult {
            outputs,
            warnings: vec![],
            completion: Completion {
                computed: 1,
                attempted: 9,
            },
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["outputs"]["T_sat.lh"], 21.5);
        assert_eq!(json["outputs"]["m_dot"], 182.0);
        assert_eq!(json["completion"]["computed"], 1);
    }
}
