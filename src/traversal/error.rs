//! Traversal and replay errors.

use crate::core::SerializeError;
use thiserror::Error;

/// Errors that can occur while exploring or replaying a transition system.
#[derive(Debug, Error)]
pub enum TraversalError {
    #[error("Event '{event_type}' at position {index} cannot be applied: {reason}")]
    InvalidReplayEvent {
        index: usize,
        event_type: String,
        reason: String,
    },

    #[error("Traversal limit ({limit}) exceeded. Supply a filter that bounds the state space")]
    UnboundedExploration { limit: usize },

    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

impl TraversalError {
    /// Check if the traversal stopped at its configured limit.
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::UnboundedExploration { .. })
    }
}
