//! Structured warning records.
//!
//! Every recoverable failure inside a calculation produces one of these
//! instead of an error return. Warnings carry a machine-checkable code and
//! the affected sensor role, so tests and the data-quality layer can match on
//! structure; the message is for humans and is joined into display text only
//! at the presentation boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine-checkable warning category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarnCode {
    /// A sensor role was unresolved or had no reading in this row.
    MissingSensor,
    /// A rated (datasheet) input was absent or zero.
    MissingRated,
    /// The property backend rejected the state or failed outright.
    PropertyFailure,
    /// A derived quantity could not be computed because an upstream
    /// quantity in its dependency chain is unavailable.
    NotComputable,
}

/// One warning attached to a row result or the volumetric efficiency result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub code: WarnCode,
    pub message: String,
    /// Role key of the sensor this warning concerns, when there is one.
    pub affected_role: Option<String>,
}

impl Warning {
    pub fn missing_sensor(role_key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: WarnCode::MissingSensor,
            message: message.into(),
            affected_role: Some(role_key.into()),
        }
    }

    pub fn missing_rated(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            code: WarnCode::MissingRated,
            message: format!("Missing rated input: {field}"),
            affected_role: None,
        }
    }

    pub fn property_failure(
        role_key: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: WarnCode::PropertyFailure,
            message: message.into(),
            affected_role: role_key.map(str::to_owned),
        }
    }

    pub fn not_computable(message: impl Into<String>) -> Self {
        Self {
            code: WarnCode::NotComputable,
            message: message.into(),
            affected_role: None,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.affected_role {
            Some(role) => write!(f, "{} ({})", self.message, role),
            None => f.write_str(&self.message),
        }
    }
}
