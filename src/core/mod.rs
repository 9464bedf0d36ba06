//! Core types of the traversal engine.
//!
//! This module contains the pure building blocks every traversal is made of:
//! - Transition systems via the `TransitionSystem` trait
//! - State identity via `StateSerializer`
//! - Candidate events via `EventSource`
//! - Expansion bounds via `Filter`
//! - Immutable paths and the maps that index them
//!
//! Nothing in this module performs I/O or keeps state between calls.

mod event;
mod filter;
mod path;
mod serializer;
mod source;
mod system;

pub use event::Event;
pub use filter::Filter;
pub use path::{PathMap, PathPlan, StatePath, Step};
pub use serializer::{
    serialize_event, JsonSerializer, SerializeError, SerializedEvent, SerializedState,
    StateSerializer, KEY_SEPARATOR,
};
pub use source::{EventGenerator, EventMap, EventSource, EventSpec};
pub use system::{Reducer, ReducerFn, TransitionRejected, TransitionSystem};
