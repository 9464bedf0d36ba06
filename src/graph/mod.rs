//! Declarative machine descriptions and their directed-graph projection.
//!
//! This is the statechart-shaped side of the crate: it knows nothing about
//! traversal and projects the declared structure, not the reachable state
//! space.

mod description;
mod directed;
mod error;

pub use description::{
    Machine, NodeKind, NodeTransition, StateNode, StateNodeConfig, TransitionConfig, ID_DELIMITER,
};
pub use directed::{to_directed_graph, DirectedGraphEdge, DirectedGraphLabel, DirectedGraphNode};
pub use error::{DescriptionError, InvalidDescription};
