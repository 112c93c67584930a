//! Resolution of a fully mapped three-circuit rig.

use fb_core::Circuit;
use fb_topology::{resolve_roles, ComponentGraph, ComponentKind, RoleBinding, SensorRole};

/// Build the reference rig: one compressor, one condenser, three evaporator
/// circuits with two sub-coils each, three TXVs.
fn reference_rig() -> (ComponentGraph, Vec<String>) {
    let mut g = ComponentGraph::new();
    let mut cols: Vec<String> = Vec::new();
    fn col(name: &str, cols: &mut Vec<String>) -> String {
        cols.push(name.to_string());
        name.to_string()
    }

    g.add_component("comp", ComponentKind::Compressor, None)
        .unwrap();
    g.map_port("comp", "SP", col("sensor_01", &mut cols)).unwrap();
    g.map_port("comp", "DP", col("sensor_02", &mut cols)).unwrap();
    g.map_port("comp", "RPM", col("sensor_03", &mut cols)).unwrap();
    g.map_port("comp", "inlet", col("sensor_04", &mut cols)).unwrap();
    g.map_port("comp", "outlet", col("sensor_05", &mut cols)).unwrap();

    g.add_component("cond", ComponentKind::Condenser, None)
        .unwrap();
    g.map_port("cond", "inlet", col("sensor_06", &mut cols)).unwrap();
    g.map_port("cond", "outlet", col("sensor_07", &mut cols)).unwrap();
    g.map_port("cond", "water_inlet", col("sensor_08", &mut cols))
        .unwrap();
    g.map_port("cond", "water_outlet", col("sensor_09", &mut cols))
        .unwrap();

    let mut n = 10;
    for circuit in Circuit::ALL {
        let suffix = circuit.suffix();
        let evap_id = format!("evap_{suffix}");
        g.add_component(&evap_id, ComponentKind::Evaporator, Some(circuit))
            .unwrap();
        for i in 1..=2 {
            g.map_port(
                &evap_id,
                format!("inlet_circuit_{i}"),
                col(&format!("sensor_{n:02}"), &mut cols),
            )
            .unwrap();
            n += 1;
            g.map_port(
                &evap_id,
                format!("outlet_circuit_{i}"),
                col(&format!("sensor_{n:02}"), &mut cols),
            )
            .unwrap();
            n += 1;
        }

        let txv_id = format!("txv_{suffix}");
        g.add_component(&txv_id, ComponentKind::Txv, Some(circuit))
            .unwrap();
        g.map_port(&txv_id, "inlet", col(&format!("sensor_{n:02}"), &mut cols))
            .unwrap();
        n += 1;
        g.map_port(&txv_id, "outlet", col(&format!("sensor_{n:02}"), &mut cols))
            .unwrap();
        n += 1;
    }

    (g, cols)
}

#[test]
fn fully_mapped_rig_resolves_every_role() {
    let (g, cols) = reference_rig();
    let map = resolve_roles(&g, &cols);
    assert!(map.unresolved_roles().is_empty());
    assert_eq!(map.len(), SensorRole::ALL.len());
}

#[test]
fn coil_roles_bind_both_sub_coils() {
    let (g, cols) = reference_rig();
    let map = resolve_roles(&g, &cols);
    for circuit in Circuit::ALL {
        match map.get(SensorRole::CoilOutletTemp(circuit)) {
            Some(RoleBinding::Averaged(cols)) => assert_eq!(cols.len(), 2),
            other => panic!("expected averaged binding, got {other:?}"),
        }
    }
}

#[test]
fn missing_dataset_columns_unresolve_their_roles() {
    let (g, mut cols) = reference_rig();
    // Drop the RPM column from the dataset.
    cols.retain(|c| c != "sensor_03");
    let map = resolve_roles(&g, &cols);
    assert!(!map.is_resolved(SensorRole::CompressorSpeed));
    assert_eq!(map.unresolved_roles(), vec![SensorRole::CompressorSpeed]);
}

#[test]
fn role_map_serializes_by_role_key() {
    let (g, cols) = reference_rig();
    let map = resolve_roles(&g, &cols);
    let json = serde_json::to_value(&map).unwrap();
    let bindings = &json["bindings"];
    assert_eq!(bindings["P_suc"], "sensor_01");
    assert!(bindings["T_2a-LH"].is_array());
}
