//! Logical sensor roles and the table mapping them onto the topology.

use crate::component::ComponentKind;
use fb_core::Circuit;
use serde::{Serialize, Serializer};
use std::fmt;

/// A logical measurement the calculation engine needs, independent of which
/// physical sensor provides it.
///
/// Role keys are the rig's historical spreadsheet identifiers and are the
/// stable contract with downstream display code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SensorRole {
    SuctionPressure,
    DischargePressure,
    CompressorSpeed,
    CompressorInletTemp,
    CompressorOutletTemp,
    CondenserInletTemp,
    CondenserOutletTemp,
    CondenserWaterInTemp,
    CondenserWaterOutTemp,
    /// Refrigerant temperature just downstream of a circuit's TXV.
    TxvOutletTemp(Circuit),
    /// Coil inlet temperature, averaged across a circuit's sub-coils.
    CoilInletTemp(Circuit),
    /// Coil outlet temperature, averaged across a circuit's sub-coils.
    CoilOutletTemp(Circuit),
    /// Liquid-line temperature entering a circuit's TXV.
    TxvInletTemp(Circuit),
}

/// How a role's port is selected on a matching component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortSelector {
    /// A single exactly-named port.
    Exact(&'static str),
    /// Every port whose name starts with the prefix; the row reader averages
    /// the resolved columns.
    Prefix(&'static str),
}

/// One row of the role table: which component/port satisfies a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleQuery {
    pub kind: ComponentKind,
    pub circuit: Option<Circuit>,
    pub port: PortSelector,
}

impl SensorRole {
    pub const ALL: [SensorRole; 21] = [
        SensorRole::SuctionPressure,
        SensorRole::DischargePressure,
        SensorRole::CompressorSpeed,
        SensorRole::CompressorInletTemp,
        SensorRole::CompressorOutletTemp,
        SensorRole::CondenserInletTemp,
        SensorRole::CondenserOutletTemp,
        SensorRole::CondenserWaterInTemp,
        SensorRole::CondenserWaterOutTemp,
        SensorRole::TxvOutletTemp(Circuit::Left),
        SensorRole::CoilInletTemp(Circuit::Left),
        SensorRole::CoilOutletTemp(Circuit::Left),
        SensorRole::TxvInletTemp(Circuit::Left),
        SensorRole::TxvOutletTemp(Circuit::Center),
        SensorRole::CoilInletTemp(Circuit::Center),
        SensorRole::CoilOutletTemp(Circuit::Center),
        SensorRole::TxvInletTemp(Circuit::Center),
        SensorRole::TxvOutletTemp(Circuit::Right),
        SensorRole::CoilInletTemp(Circuit::Right),
        SensorRole::CoilOutletTemp(Circuit::Right),
        SensorRole::TxvInletTemp(Circuit::Right),
    ];

    /// Historical role key, e.g. `P_suc` or `T_2a-LH`.
    ///
    /// The casing quirks (`T_2a-LH` vs `T_2a-ctr`, `T_1c-rh`) are inherited
    /// from the rig's spreadsheet era and deliberately preserved.
    pub fn key(&self) -> &'static str {
        match self {
            SensorRole::SuctionPressure => "P_suc",
            SensorRole::DischargePressure => "P_disch",
            SensorRole::CompressorSpeed => "RPM",
            SensorRole::CompressorInletTemp => "T_2b",
            SensorRole::CompressorOutletTemp => "T_3a",
            SensorRole::CondenserInletTemp => "T_3b",
            SensorRole::CondenserOutletTemp => "T_4a",
            SensorRole::CondenserWaterInTemp => "T_waterin",
            SensorRole::CondenserWaterOutTemp => "T_waterout",
            SensorRole::TxvOutletTemp(Circuit::Left) => "T_1a-lh",
            SensorRole::TxvOutletTemp(Circuit::Center) => "T_1a-ctr",
            SensorRole::TxvOutletTemp(Circuit::Right) => "T_1a-rh",
            SensorRole::CoilInletTemp(Circuit::Left) => "T_1b-lh",
            SensorRole::CoilInletTemp(Circuit::Center) => "T_1b-ctr",
            SensorRole::CoilInletTemp(Circuit::Right) => "T_1c-rh",
            SensorRole::CoilOutletTemp(Circuit::Left) => "T_2a-LH",
            SensorRole::CoilOutletTemp(Circuit::Center) => "T_2a-ctr",
            SensorRole::CoilOutletTemp(Circuit::Right) => "T_2a-RH",
            SensorRole::TxvInletTemp(Circuit::Left) => "T_4b-lh",
            SensorRole::TxvInletTemp(Circuit::Center) => "T_4b-ctr",
            SensorRole::TxvInletTemp(Circuit::Right) => "T_4b-rh",
        }
    }

    /// The topology query that satisfies this role.
    pub fn query(&self) -> RoleQuery {
        match *self {
            SensorRole::SuctionPressure => RoleQuery {
                kind: ComponentKind::Compressor,
                circuit: None,
                port: PortSelector::Exact("SP"),
            },
            SensorRole::DischargePressure => RoleQuery {
                kind: ComponentKind::Compressor,
                circuit: None,
                port: PortSelector::Exact("DP"),
            },
            SensorRole::CompressorSpeed => RoleQuery {
                kind: ComponentKind::Compressor,
                circuit: None,
                port: PortSelector::Exact("RPM"),
            },
            SensorRole::CompressorInletTemp => RoleQuery {
                kind: ComponentKind::Compressor,
                circuit: None,
                port: PortSelector::Exact("inlet"),
            },
            SensorRole::CompressorOutletTemp => RoleQuery {
                kind: ComponentKind::Compressor,
                circuit: None,
                port: PortSelector::Exact("outlet"),
            },
            SensorRole::CondenserInletTemp => RoleQuery {
                kind: ComponentKind::Condenser,
                circuit: None,
                port: PortSelector::Exact("inlet"),
            },
            SensorRole::CondenserOutletTemp => RoleQuery {
                kind: ComponentKind::Condenser,
                circuit: None,
                port: PortSelector::Exact("outlet"),
            },
            SensorRole::CondenserWaterInTemp => RoleQuery {
                kind: ComponentKind::Condenser,
                circuit: None,
                port: PortSelector::Exact("water_inlet"),
            },
            SensorRole::CondenserWaterOutTemp => RoleQuery {
                kind: ComponentKind::Condenser,
                circuit: None,
                port: PortSelector::Exact("water_outlet"),
            },
            SensorRole::TxvOutletTemp(c) => RoleQuery {
                kind: ComponentKind::Txv,
                circuit: Some(c),
                port: PortSelector::Exact("outlet"),
            },
            SensorRole::CoilInletTemp(c) => RoleQuery {
                kind: ComponentKind::Evaporator,
                circuit: Some(c),
                port: PortSelector::Prefix("inlet_circuit_"),
            },
            SensorRole::CoilOutletTemp(c) => RoleQuery {
                kind: ComponentKind::Evaporator,
                circuit: Some(c),
                port: PortSelector::Prefix("outlet_circuit_"),
            },
            SensorRole::TxvInletTemp(c) => RoleQuery {
                kind: ComponentKind::Txv,
                circuit: Some(c),
                port: PortSelector::Exact("inlet"),
            },
        }
    }
}

impl fmt::Display for SensorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for SensorRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn role_keys_are_unique() {
        let keys: BTreeSet<_> = SensorRole::ALL.iter().map(|r| r.key()).collect();
        assert_eq!(keys.len(), SensorRole::ALL.len());
    }

    #[test]
    fn historical_casing_preserved() {
        assert_eq!(SensorRole::CoilOutletTemp(Circuit::Left).key(), "T_2a-LH");
        assert_eq!(SensorRole::CoilOutletTemp(Circuit::Center).key(), "T_2a-ctr");
        assert_eq!(SensorRole::CoilInletTemp(Circuit::Right).key(), "T_1c-rh");
    }

    #[test]
    fn coil_roles_are_prefix_queries() {
        let q = SensorRole::CoilOutletTemp(Circuit::Center).query();
        assert_eq!(q.kind, ComponentKind::Evaporator);
        assert_eq!(q.circuit, Some(Circuit::Center));
        assert_eq!(q.port, PortSelector::Prefix("outlet_circuit_"));
    }

    #[test]
    fn pressure_roles_target_the_compressor() {
        let q = SensorRole::SuctionPressure.query();
        assert_eq!(q.kind, ComponentKind::Compressor);
        assert_eq!(q.port, PortSelector::Exact("SP"));
        assert_eq!(q.circuit, None);
    }
}
