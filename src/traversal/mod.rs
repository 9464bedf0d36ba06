//! State-space traversal over transition systems.
//!
//! Four operations share one configuration type and one way of expanding a
//! state:
//!
//! - [`adjacency_map`]: the one-hop transition relation of every reachable
//!   state
//! - [`traverse_shortest_paths`]: one shortest path to every reachable state
//!   (breadth-first)
//! - [`traverse_simple_paths`]: every cycle-free path to every reachable
//!   state (depth-first, explicit stack)
//! - [`path_from_events`]: a single path replaying a given event sequence
//!
//! Every call owns its frontier and result map; nothing is shared between
//! calls, so traversals of the same system may run concurrently.
//!
//! # Example
//!
//! ```rust
//! use mindset_graph::core::Reducer;
//! use mindset_graph::event_enum;
//! use mindset_graph::traversal::{traverse_shortest_paths, traverse_simple_paths, TraversalOptions};
//!
//! event_enum! {
//!     enum Op { A, B, Reset }
//! }
//!
//! let reducer = Reducer::new(0u8, |s: &u8, e: &Op| match e {
//!     Op::A => 1,
//!     Op::B if *s == 1 => 2,
//!     Op::Reset => 0,
//!     _ => *s,
//! });
//! let options = TraversalOptions::builder()
//!     .events(vec![Op::A, Op::B, Op::Reset])
//!     .build();
//!
//! let shortest = traverse_shortest_paths(&reducer, &options).unwrap();
//! let simple = traverse_simple_paths(&reducer, &options).unwrap();
//!
//! assert_eq!(shortest.len(), 3);
//! assert_eq!(simple.len(), 3);
//! ```

mod adjacency;
mod error;
mod explore;
mod options;
mod replay;
mod shortest;
mod simple;

pub use adjacency::{adjacency_map, AdjacencyEdge, AdjacencyEntry, AdjacencyMap};
pub use error::TraversalError;
pub use options::{TraversalOptions, TraversalOptionsBuilder};
pub use replay::path_from_events;
pub use shortest::traverse_shortest_paths;
pub use simple::traverse_simple_paths;
