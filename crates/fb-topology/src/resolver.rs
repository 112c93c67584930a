//! Role resolution against a component graph.

use crate::component::ComponentGraph;
use crate::roles::{PortSelector, SensorRole};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Concrete data column(s) backing a resolved role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RoleBinding {
    /// The common case: one sensor column.
    Single(String),
    /// Multi-coil roles: the row reader averages whichever of these columns
    /// hold a reading. Always at least two entries.
    Averaged(Vec<String>),
}

impl RoleBinding {
    /// The bound columns, regardless of arity.
    pub fn columns(&self) -> &[String] {
        match self {
            RoleBinding::Single(col) => std::slice::from_ref(col),
            RoleBinding::Averaged(cols) => cols,
        }
    }
}

/// Immutable role-to-column map for one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoleMap {
    bindings: BTreeMap<SensorRole, RoleBinding>,
}

impl RoleMap {
    pub fn get(&self, role: SensorRole) -> Option<&RoleBinding> {
        self.bindings.get(&role)
    }

    pub fn is_resolved(&self, role: SensorRole) -> bool {
        self.bindings.contains_key(&role)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Roles from the required table that did not resolve.
    pub fn unresolved_roles(&self) -> Vec<SensorRole> {
        SensorRole::ALL
            .into_iter()
            .filter(|r| !self.bindings.contains_key(r))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SensorRole, &RoleBinding)> {
        self.bindings.iter().map(|(r, b)| (*r, b))
    }
}

/// Resolve every required sensor role against the mapped topology.
///
/// A port mapping only counts if its column is among `declared_columns`;
/// mappings onto columns the loaded dataset does not carry are treated as
/// unresolved. For exact-port roles the first matching component wins. For
/// multi-coil roles the columns of every matching evaporator's sub-coil
/// ports are collected, in insertion order, and averaged at read time.
///
/// Never fails: unresolved roles are absent from the returned map and
/// reported by the caller as per-role warnings.
pub fn resolve_roles(graph: &ComponentGraph, declared_columns: &[String]) -> RoleMap {
    let declared: BTreeSet<&str> = declared_columns.iter().map(String::as_str).collect();
    let mut bindings = BTreeMap::new();

    for role in SensorRole::ALL {
        let q = role.query();
        match q.port {
            PortSelector::Exact(port) => {
                let col = graph
                    .components_matching(q.kind, q.circuit)
                    .filter_map(|c| c.port_column(port))
                    .find(|col| declared.contains(col));
                if let Some(col) = col {
                    bindings.insert(role, RoleBinding::Single(col.to_string()));
                }
            }
            PortSelector::Prefix(prefix) => {
                let cols: Vec<String> = graph
                    .components_matching(q.kind, q.circuit)
                    .flat_map(|c| c.port_columns_with_prefix(prefix))
                    .filter(|col| declared.contains(col))
                    .map(str::to_string)
                    .collect();
                match cols.len() {
                    0 => {}
                    1 => {
                        let mut cols = cols;
                        bindings.insert(role, RoleBinding::Single(cols.remove(0)));
                    }
                    _ => {
                        bindings.insert(role, RoleBinding::Averaged(cols));
                    }
                }
            }
        }
    }

    RoleMap { bindings }
}
