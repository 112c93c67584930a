//! The fixed output schema.

use fb_core::Circuit;
use serde::{Serialize, Serializer};
use std::fmt;

/// One column of the augmented output table.
///
/// `name()` reproduces the rig's historical spreadsheet column names exactly,
/// inconsistent casing and embedded spaces included; downstream plotting and
/// display code addresses columns by these strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputKey {
    // Coil sections (one per circuit).
    CoilOutletTemp(Circuit),
    CoilSatTemp(Circuit),
    CoilSuperheat(Circuit),
    CoilDensity(Circuit),
    CoilEnthalpy(Circuit),
    CoilEntropy(Circuit),
    /// Passthrough: temperature downstream of the circuit's TXV.
    TxvOutletTemp(Circuit),
    /// Passthrough: coil inlet temperature.
    CoilInletTemp(Circuit),

    // Compressor inlet section.
    SuctionPressure,
    CompInletTemp,
    CompInSatTemp,
    TotalSuperheat,
    CompInDensity,
    CompInEnthalpy,
    CompInEntropy,

    // Compressor outlet section.
    DischargeTemp,
    CompressorSpeed,

    // Condenser section.
    CondenserInletTemp,
    DischargePressure,
    CondenserOutletTemp,
    CondenserSatTemp,
    Subcooling,
    /// Passthrough.
    WaterInTemp,
    /// Passthrough.
    WaterOutTemp,

    // TXV sections (one per circuit).
    TxvInletTemp(Circuit),
    TxvSatTemp(Circuit),
    TxvSubcooling(Circuit),
    TxvEnthalpy(Circuit),

    // Derived performance.
    MassFlow,
    CoolingCapacity,
}

impl OutputKey {
    /// Every output column, grouped by section.
    pub const ALL: [OutputKey; 54] = {
        use OutputKey::*;
        [
            CoilOutletTemp(Circuit::Left),
            CoilSatTemp(Circuit::Left),
            CoilSuperheat(Circuit::Left),
            CoilDensity(Circuit::Left),
            CoilEnthalpy(Circuit::Left),
            CoilEntropy(Circuit::Left),
            TxvOutletTemp(Circuit::Left),
            CoilInletTemp(Circuit::Left),
            CoilOutletTemp(Circuit::Center),
            CoilSatTemp(Circuit::Center),
            CoilSuperheat(Circuit::Center),
            CoilDensity(Circuit::Center),
            CoilEnthalpy(Circuit::Center),
            CoilEntropy(Circuit::Center),
            TxvOutletTemp(Circuit::Center),
            CoilInletTemp(Circuit::Center),
            CoilOutletTemp(Circuit::Right),
            CoilSatTemp(Circuit::Right),
            CoilSuperheat(Circuit::Right),
            CoilDensity(Circuit::Right),
            CoilEnthalpy(Circuit::Right),
            CoilEntropy(Circuit::Right),
            TxvOutletTemp(Circuit::Right),
            CoilInletTemp(Circuit::Right),
            SuctionPressure,
            CompInletTemp,
            CompInSatTemp,
            TotalSuperheat,
            CompInDensity,
            CompInEnthalpy,
            CompInEntropy,
            DischargeTemp,
            CompressorSpeed,
            CondenserInletTemp,
            DischargePressure,
            CondenserOutletTemp,
            CondenserSatTemp,
            Subcooling,
            WaterInTemp,
            WaterOutTemp,
            TxvInletTemp(Circuit::Left),
            TxvSatTemp(Circuit::Left),
            TxvSubcooling(Circuit::Left),
            TxvEnthalpy(Circuit::Left),
            TxvInletTemp(Circuit::Center),
            TxvSatTemp(Circuit::Center),
            TxvSubcooling(Circuit::Center),
            TxvEnthalpy(Circuit::Center),
            TxvInletTemp(Circuit::Right),
            TxvSatTemp(Circuit::Right),
            TxvSubcooling(Circuit::Right),
            TxvEnthalpy(Circuit::Right),
            MassFlow,
            CoolingCapacity,
        ]
    };

    /// Historical column name.
    pub fn name(&self) -> &'static str {
        match self {
            OutputKey::CoilOutletTemp(Circuit::Left) => "T_2a-LH",
            OutputKey::CoilOutletTemp(Circuit::Center) => "T_2a-ctr",
            OutputKey::CoilOutletTemp(Circuit::Right) => "T_2a-RH",
            OutputKey::CoilSatTemp(Circuit::Left) => "T_sat.lh",
            OutputKey::CoilSatTemp(Circuit::Center) => "T_sat.ctr",
            OutputKey::CoilSatTemp(Circuit::Right) => "T_sat.rh",
            OutputKey::CoilSuperheat(Circuit::Left) => "S.H_lh coil",
            OutputKey::CoilSuperheat(Circuit::Center) => "S.H_ctr coil",
            OutputKey::CoilSuperheat(Circuit::Right) => "S.H_rh coil",
            OutputKey::CoilDensity(Circuit::Left) => "D_coil lh",
            OutputKey::CoilDensity(Circuit::Center) => "D_coil ctr",
            OutputKey::CoilDensity(Circuit::Right) => "D_coil rh",
            OutputKey::CoilEnthalpy(Circuit::Left) => "H_coil lh",
            OutputKey::CoilEnthalpy(Circuit::Center) => "H_coil ctr",
            OutputKey::CoilEnthalpy(Circuit::Right) => "H_coil rh",
            OutputKey::CoilEntropy(Circuit::Left) => "S_coil lh",
            OutputKey::CoilEntropy(Circuit::Center) => "S_coil ctr",
            OutputKey::CoilEntropy(Circuit::Right) => "S_coil rh",
            OutputKey::TxvOutletTemp(Circuit::Left) => "T_1a-lh",
            OutputKey::TxvOutletTemp(Circuit::Center) => "T_1a-ctr",
            OutputKey::TxvOutletTemp(Circuit::Right) => "T_1a-rh",
            OutputKey::CoilInletTemp(Circuit::Left) => "T_1b-lh",
            OutputKey::CoilInletTemp(Circuit::Center) => "T_1b-ctr",
            OutputKey::CoilInletTemp(Circuit::Right) => "T_1c-rh",
            OutputKey::SuctionPressure => "P_suction",
            OutputKey::CompInletTemp => "T_2b",
            OutputKey::CompInSatTemp => "T_sat.comp.in",
            OutputKey::TotalSuperheat => "S.H_total",
            OutputKey::CompInDensity => "D_comp.in",
            OutputKey::CompInEnthalpy => "H_comp.in",
            OutputKey::CompInEntropy => "S_comp.in",
            OutputKey::DischargeTemp => "T_3a",
            OutputKey::CompressorSpeed => "rpm",
            OutputKey::CondenserInletTemp => "T_3b",
            OutputKey::DischargePressure => "P_disch",
            OutputKey::CondenserOutletTemp => "T_4a",
            OutputKey::CondenserSatTemp => "T_sat.cond",
            OutputKey::Subcooling => "S.C",
            OutputKey::WaterInTemp => "T_waterin",
            OutputKey::WaterOutTemp => "T_waterout",
            OutputKey::TxvInletTemp(Circuit::Left) => "T_4b-lh",
            OutputKey::TxvInletTemp(Circuit::Center) => "T_4b-ctr",
            OutputKey::TxvInletTemp(Circuit::Right) => "T_4b-rh",
            OutputKey::TxvSatTemp(Circuit::Left) => "T_sat.txv.lh",
            OutputKey::TxvSatTemp(Circuit::Center) => "T_sat.txv.ctr",
            OutputKey::TxvSatTemp(Circuit::Right) => "T_sat.txv.rh",
            OutputKey::TxvSubcooling(Circuit::Left) => "S.C-txv.lh",
            OutputKey::TxvSubcooling(Circuit::Center) => "S.C-txv.ctr",
            OutputKey::TxvSubcooling(Circuit::Right) => "S.C-txv.rh",
            OutputKey::TxvEnthalpy(Circuit::Left) => "H_txv.lh",
            OutputKey::TxvEnthalpy(Circuit::Center) => "H_txv.ctr",
            OutputKey::TxvEnthalpy(Circuit::Right) => "H_txv.rh",
            OutputKey::MassFlow => "m_dot",
            OutputKey::CoolingCapacity => "qc",
        }
    }

    /// Passthrough columns echo raw sensor readings; they never gate a
    /// section and do not count toward completion.
    pub fn is_passthrough(&self) -> bool {
        matches!(
            self,
            OutputKey::TxvOutletTemp(_)
                | OutputKey::CoilInletTemp(_)
                | OutputKey::WaterInTemp
                | OutputKey::WaterOutTemp
        )
    }
}

impl fmt::Display for OutputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for OutputKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
