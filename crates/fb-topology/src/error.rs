//! Topology construction errors.

use thiserror::Error;

pub type TopologyResult<T> = Result<T, TopologyError>;

/// Errors raised while building a component graph.
///
/// Role resolution itself never fails; unresolved roles are reported through
/// the role map, not through this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// A component id was added twice.
    #[error("Duplicate component id: {id}")]
    DuplicateComponent { id: String },

    /// A port mapping referenced a component id that was never added.
    #[error("Unknown component id: {id}")]
    UnknownComponent { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_component() {
        let err = TopologyError::UnknownComponent { id: "comp1".into() };
        assert!(err.to_string().contains("comp1"));
    }
}
