//! Rig topology and sensor-role resolution.
//!
//! A [`ComponentGraph`] describes the rig as mapped in the diagram editor:
//! component instances (compressor, evaporator circuits, condenser, TXVs),
//! their circuit labels, and which ports carry a sensor column. The resolver
//! turns that description plus the dataset's declared columns into an
//! immutable [`RoleMap`] the calculation engine reads per row.

pub mod component;
pub mod error;
pub mod resolver;
pub mod roles;

pub use component::{ComponentGraph, ComponentInstance, ComponentKind};
pub use error::{TopologyError, TopologyResult};
pub use resolver::{resolve_roles, RoleBinding, RoleMap};
pub use roles::{RoleQuery, SensorRole};
