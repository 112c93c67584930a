//! Refrigerant circuit labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three parallel evaporator circuits.
///
/// The circuits share a common compressor and condenser but have independent
/// coils and expansion valves, so most per-circuit quantities come in threes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Circuit {
    Left,
    Center,
    Right,
}

impl Circuit {
    pub const ALL: [Circuit; 3] = [Circuit::Left, Circuit::Center, Circuit::Right];

    /// Human-readable label as used in topology properties.
    pub fn label(&self) -> &'static str {
        match self {
            Circuit::Left => "Left",
            Circuit::Center => "Center",
            Circuit::Right => "Right",
        }
    }

    /// Short suffix used in historical column names.
    pub fn suffix(&self) -> &'static str {
        match self {
            Circuit::Left => "lh",
            Circuit::Center => "ctr",
            Circuit::Right => "rh",
        }
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_suffixes() {
        assert_eq!(Circuit::Left.label(), "Left");
        assert_eq!(Circuit::Center.suffix(), "ctr");
        assert_eq!(Circuit::ALL.len(), 3);
    }
}
