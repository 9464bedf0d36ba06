//! Core Event trait for events fed into a transition system.
//!
//! Events are opaque to the traversal engine apart from two capabilities:
//! a type tag (used by per-type event sources and event-tagged state keys)
//! and a canonical serialized form (used as adjacency edge keys and in
//! path identities).

use serde::Serialize;
use std::fmt::Debug;

/// Trait for events accepted by a transition system.
///
/// # Required Traits
///
/// - `Clone`: Events are copied into every path step that applies them
/// - `Debug`: Events must be debuggable for diagnostics
/// - `Serialize`: Events are keyed by their canonical JSON form
///
/// # Example
///
/// ```rust
/// use mindset_graph::core::Event;
/// use serde::Serialize;
///
/// #[derive(Clone, Debug, Serialize)]
/// #[serde(tag = "type")]
/// enum CounterEvent {
///     #[serde(rename = "INC")]
///     Inc { value: i64 },
///     #[serde(rename = "RESET")]
///     Reset,
/// }
///
/// impl Event for CounterEvent {
///     fn event_type(&self) -> &str {
///         match self {
///             Self::Inc { .. } => "INC",
///             Self::Reset => "RESET",
///         }
///     }
/// }
///
/// assert_eq!(CounterEvent::Inc { value: 1 }.event_type(), "INC");
/// ```
pub trait Event: Clone + Debug + Serialize {
    /// The event's type tag.
    ///
    /// Distinct instances of the same kind of event (differing only in
    /// payload) share one type tag.
    fn event_type(&self) -> &str;
}
