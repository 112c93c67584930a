//! Batch orchestration: role resolution, volumetric efficiency, per-row
//! calculation, aggregate statistics.

use crate::error::{EngineError, EngineResult};
use crate::input::{BatchConfig, CompressorSpec, Dataset, RatedInputs};
use crate::rated::calculate_eta_vol;
use crate::row::calculate_row;
use fb_props::PropertyBackend;
use fb_results::{BatchResult, BatchStats};
use fb_topology::{resolve_roles, ComponentGraph};
use tracing::{debug, info};

/// Run the two-step calculation over a whole dataset.
///
/// Fatal errors are confined to setup: an unsupported refrigerant or an
/// empty dataset abort before any row is processed. Everything after that
/// degrades per row and per section; results are reported in input order.
pub fn run_batch(
    backend: &dyn PropertyBackend,
    dataset: &Dataset,
    topology: &ComponentGraph,
    rated: &RatedInputs,
    spec: &CompressorSpec,
    config: &BatchConfig,
) -> EngineResult<BatchResult> {
    if !backend.supports(config.refrigerant) {
        return Err(EngineError::Config {
            message: format!(
                "property backend {} cannot model {}",
                backend.name(),
                config.refrigerant
            ),
        });
    }
    if dataset.rows.is_empty() {
        return Err(EngineError::NoData);
    }

    let roles = resolve_roles(topology, &dataset.columns);
    for role in roles.unresolved_roles() {
        debug!(role = role.key(), "sensor role unresolved");
    }
    info!(
        rows = dataset.rows.len(),
        resolved = roles.len(),
        refrigerant = %config.refrigerant,
        backend = backend.name(),
        "starting batch"
    );

    let vol_eff = calculate_eta_vol(backend, rated, config.refrigerant, config.fallback_eta_vol);

    let rows: Vec<_> = dataset
        .rows
        .iter()
        .map(|row| {
            calculate_row(
                backend,
                row,
                &roles,
                vol_eff.eta_vol,
                spec,
                config.refrigerant,
            )
        })
        .collect();

    let stats = BatchStats::from_rows(&rows);
    info!(
        rows = stats.total_rows,
        fully_complete = stats.rows_fully_complete,
        warnings = stats.total_warnings,
        "batch finished"
    );

    Ok(BatchResult {
        rows,
        vol_eff,
        refrigerant: config.refrigerant.name().to_string(),
        backend: backend.name().to_string(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Row;
    use fb_props::{PropResult, Refrigerant, SurrogateBackend};
    use fb_core::units::{Density, Pressure, Temperature};

    struct NoR717Backend(SurrogateBackend);

    impl PropertyBackend for NoR717Backend {
        fn name(&self) -> &str {
            "NoAmmonia"
        }
        fn supports(&self, r: Refrigerant) -> bool {
            r != Refrigerant::R717
        }
        fn saturation_temperature(&self, p: Pressure, r: Refrigerant) -> PropResult<Temperature> {
            self.0.saturation_temperature(p, r)
        }
        fn saturation_pressure(&self, t: Temperature, r: Refrigerant) -> PropResult<Pressure> {
            self.0.saturation_pressure(t, r)
        }
        fn enthalpy_pt(&self, p: Pressure, t: Temperature, r: Refrigerant) -> PropResult<f64> {
            self.0.enthalpy_pt(p, t, r)
        }
        fn entropy_pt(&self, p: Pressure, t: Temperature, r: Refrigerant) -> PropResult<f64> {
            self.0.entropy_pt(p, t, r)
        }
        fn density_pt(&self, p: Pressure, t: Temperature, r: Refrigerant) -> PropResult<Density> {
            self.0.density_pt(p, t, r)
        }
    }

    fn empty_setup() -> (ComponentGraph, RatedInputs, CompressorSpec) {
        (
            ComponentGraph::new(),
            RatedInputs::default(),
            CompressorSpec {
                displacement_ft3: 0.01,
            },
        )
    }

    #[test]
    fn empty_dataset_is_fatal() {
        let (topology, rated, spec) = empty_setup();
        let backend = SurrogateBackend::new();
        let err = run_batch(
            &backend,
            &Dataset::default(),
            &topology,
            &rated,
            &spec,
            &BatchConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, EngineError::NoData);
    }

    #[test]
    fn unsupported_refrigerant_is_fatal_before_rows() {
        let (topology, rated, spec) = empty_setup();
        let backend = NoR717Backend(SurrogateBackend::new());
        let dataset = Dataset {
            columns: vec![],
            rows: vec![Row::new()],
        };
        let config = BatchConfig {
            refrigerant: Refrigerant::R717,
            ..BatchConfig::default()
        };
        let err = run_batch(&backend, &dataset, &topology, &rated, &spec, &config).unwrap_err();
        assert!(matches!(err, EngineError::Config { .. }));
    }

    #[test]
    fn degenerate_batch_succeeds_with_empty_results() {
        // No topology, no rated inputs: every row degrades fully, but the
        // batch itself is a success.
        let (topology, rated, spec) = empty_setup();
        let backend = SurrogateBackend::new();
        let dataset = Dataset {
            columns: vec![],
            rows: vec![Row::new(), Row::new(), Row::new()],
        };
        let result = run_batch(
            &backend,
            &dataset,
            &topology,
            &rated,
            &spec,
            &BatchConfig::default(),
        )
        .unwrap();
        assert_eq!(result.rows.len(), 3);
        assert_eq!(result.stats.rows_fully_complete, 0);
        assert_eq!(result.stats.mean_completion, 0.0);
        assert_eq!(result.vol_eff.eta_vol, 0.85);
        assert!(result.rows.iter().all(|r| r.outputs.is_empty()));
    }
}
