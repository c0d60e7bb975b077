//! Error types for the layout engine

use thiserror::Error;

/// Errors surfaced by the solver when activating or deactivating constraints.
///
/// These are reported, never recovered from: the constraint set describing
/// the layout needs fixing.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required constraint conflicts with those already active
    #[error("unsatisfiable constraint '{constraint}': {reason}")]
    Unsatisfiable { constraint: String, reason: String },

    /// The same solver constraint was activated twice
    #[error("constraint '{constraint}' is already active")]
    Duplicate { constraint: String },

    /// Deactivation of a constraint this engine never activated
    #[error("constraint '{constraint}' is not active in this engine")]
    NotActive { constraint: String },

    #[error("internal solver error: {0}")]
    Internal(String),
}

impl EngineError {
    pub fn unsatisfiable(constraint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unsatisfiable {
            constraint: constraint.into(),
            reason: reason.into(),
        }
    }

    /// Description of the offending constraint, when there is one
    pub fn constraint(&self) -> Option<&str> {
        match self {
            Self::Unsatisfiable { constraint, .. }
            | Self::Duplicate { constraint }
            | Self::NotActive { constraint } => Some(constraint),
            Self::Internal(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsatisfiable_display() {
        let err = EngineError::unsatisfiable("a.width == 10", "conflicts with active constraints");
        assert!(err.to_string().contains("a.width == 10"));
        assert_eq!(err.constraint(), Some("a.width == 10"));
    }

    #[test]
    fn test_internal_has_no_constraint() {
        let err = EngineError::Internal("boom".to_string());
        assert!(err.constraint().is_none());
        assert!(err.to_string().contains("boom"));
    }
}
