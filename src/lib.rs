//! Mindset Graph: path generation over pure transition systems
//!
//! Given an initial state, a deterministic transition function, and a way of
//! producing candidate events per state, this library computes navigable path
//! data for model-based testing and visualization. Every operation is a pure
//! function of its inputs: the caller owns the transition system, and each
//! call owns its own frontier and result map.
//!
//! # Core Concepts
//!
//! - **Transition systems**: anything implementing `TransitionSystem`, or a
//!   closure wrapped in a `Reducer`
//! - **State identity**: states are deduplicated by a serialized key, not by
//!   reference
//! - **Event sources**: fixed lists, per-type maps, or state-dependent
//!   generators
//! - **Filters**: predicates that bound the explored state space
//! - **Paths**: immutable sequences of steps from the initial state
//!
//! # Example
//!
//! ```rust
//! use mindset_graph::core::Reducer;
//! use mindset_graph::event_enum;
//! use mindset_graph::traversal::{path_from_events, traverse_shortest_paths, TraversalOptions};
//!
//! event_enum! {
//!     enum Count { Inc }
//! }
//!
//! let counter = Reducer::new(0u32, |n: &u32, _: &Count| n + 1);
//! let options = TraversalOptions::builder()
//!     .events(vec![Count::Inc])
//!     .filter(|n: &u32| *n < 5)
//!     .build();
//!
//! let paths = traverse_shortest_paths(&counter, &options).unwrap();
//! assert_eq!(paths.keys().collect::<Vec<_>>(), vec!["0", "1", "2", "3", "4"]);
//!
//! let replayed = path_from_events(&counter, &[Count::Inc, Count::Inc]).unwrap();
//! assert_eq!(replayed.state, 2);
//! ```

pub mod core;
pub mod graph;
mod macros;
pub mod traversal;

// Re-export commonly used types
pub use core::{Event, Filter, PathMap, PathPlan, Reducer, StatePath, Step, TransitionSystem};
pub use graph::{to_directed_graph, Machine, StateNodeConfig};
pub use traversal::{
    adjacency_map, path_from_events, traverse_shortest_paths, traverse_simple_paths,
    TraversalError, TraversalOptions,
};
