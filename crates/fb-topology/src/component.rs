//! Component instances and the rig graph.

use crate::error::{TopologyError, TopologyResult};
use fb_core::Circuit;
use serde::{Deserialize, Serialize};

/// Kind of a mapped component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Compressor,
    Evaporator,
    Condenser,
    Txv,
}

/// One component instance from the rig diagram.
///
/// `ports` pairs a port name with the data column its sensor writes to.
/// Port naming follows the diagram editor's schema: the compressor exposes
/// `SP`, `DP`, `RPM`, `inlet`, `outlet`; the condenser `inlet`, `outlet`,
/// `water_inlet`, `water_outlet`; a TXV `inlet` and `outlet`; an evaporator
/// a dynamic set `inlet_circuit_N` / `outlet_circuit_N`. Unmapped ports are
/// simply absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInstance {
    pub id: String,
    pub kind: ComponentKind,
    /// Circuit label for per-circuit components (evaporators and TXVs).
    pub circuit: Option<Circuit>,
    /// Mapped ports in mapping order: (port name, data column).
    pub ports: Vec<(String, String)>,
}

impl ComponentInstance {
    /// Column mapped to an exactly-named port, if any.
    pub fn port_column(&self, port: &str) -> Option<&str> {
        self.ports
            .iter()
            .find(|(name, _)| name == port)
            .map(|(_, col)| col.as_str())
    }

    /// Columns mapped to ports sharing a name prefix, in mapping order.
    pub fn port_columns_with_prefix(&self, prefix: &str) -> Vec<&str> {
        self.ports
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(_, col)| col.as_str())
            .collect()
    }
}

/// The rig as mapped in the diagram: an ordered set of component instances.
///
/// Insertion order is preserved and is the tie-breaker for role resolution
/// (first matching component wins), so identical graphs always resolve
/// identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentGraph {
    components: Vec<ComponentInstance>,
}

impl ComponentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component instance. Ids must be unique.
    pub fn add_component(
        &mut self,
        id: impl Into<String>,
        kind: ComponentKind,
        circuit: Option<Circuit>,
    ) -> TopologyResult<()> {
        let id = id.into();
        if self.components.iter().any(|c| c.id == id) {
            return Err(TopologyError::DuplicateComponent { id });
        }
        self.components.push(ComponentInstance {
            id,
            kind,
            circuit,
            ports: Vec::new(),
        });
        Ok(())
    }

    /// Map a port of an existing component to a data column.
    ///
    /// Remapping an already-mapped port replaces the previous column.
    pub fn map_port(
        &mut self,
        id: &str,
        port: impl Into<String>,
        column: impl Into<String>,
    ) -> TopologyResult<()> {
        let comp = self
            .components
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| TopologyError::UnknownComponent { id: id.to_string() })?;
        let port = port.into();
        let column = column.into();
        if let Some(entry) = comp.ports.iter_mut().find(|(name, _)| *name == port) {
            entry.1 = column;
        } else {
            comp.ports.push((port, column));
        }
        Ok(())
    }

    /// All components in insertion order.
    pub fn components(&self) -> &[ComponentInstance] {
        &self.components
    }

    /// Components of one kind, optionally restricted to a circuit label,
    /// in insertion order.
    pub fn components_matching(
        &self,
        kind: ComponentKind,
        circuit: Option<Circuit>,
    ) -> impl Iterator<Item = &ComponentInstance> {
        self.components
            .iter()
            .filter(move |c| c.kind == kind && (circuit.is_none() || c.circuit == circuit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_component_id_rejected() {
        let mut g = ComponentGraph::new();
        g.add_component("comp1", ComponentKind::Compressor, None)
            .unwrap();
        assert!(matches!(
            g.add_component("comp1", ComponentKind::Condenser, None),
            Err(TopologyError::DuplicateComponent { .. })
        ));
    }

    #[test]
    fn map_port_requires_known_component() {
        let mut g = ComponentGraph::new();
        assert!(matches!(
            g.map_port("ghost", "SP", "col_1"),
            Err(TopologyError::UnknownComponent { .. })
        ));
    }

    #[test]
    fn remapping_replaces_column() {
        let mut g = ComponentGraph::new();
        g.add_component("comp1", ComponentKind::Compressor, None)
            .unwrap();
        g.map_port("comp1", "SP", "old_col").unwrap();
        g.map_port("comp1", "SP", "new_col").unwrap();
        assert_eq!(g.components()[0].port_column("SP"), Some("new_col"));
        assert_eq!(g.components()[0].ports.len(), 1);
    }

    #[test]
    fn prefix_query_collects_dynamic_ports_in_order() {
        let mut g = ComponentGraph::new();
        g.add_component("evap_l", ComponentKind::Evaporator, Some(Circuit::Left))
            .unwrap();
        g.map_port("evap_l", "outlet_circuit_1", "t_out_1").unwrap();
        g.map_port("evap_l", "outlet_circuit_2", "t_out_2").unwrap();
        g.map_port("evap_l", "inlet_circuit_1", "t_in_1").unwrap();
        let cols = g.components()[0].port_columns_with_prefix("outlet_circuit_");
        assert_eq!(cols, vec!["t_out_1", "t_out_2"]);
    }

    #[test]
    fn matching_filters_kind_and_circuit() {
        let mut g = ComponentGraph::new();
        g.add_component("txv_l", ComponentKind::Txv, Some(Circuit::Left))
            .unwrap();
        g.add_component("txv_c", ComponentKind::Txv, Some(Circuit::Center))
            .unwrap();
        g.add_component("cond", ComponentKind::Condenser, None).unwrap();
        let ids: Vec<_> = g
            .components_matching(ComponentKind::Txv, Some(Circuit::Center))
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["txv_c"]);
    }
}
