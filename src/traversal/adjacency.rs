//! One-hop reachability: the full transition relation without path history.

use super::error::TraversalError;
use super::explore::Explorer;
use super::options::TraversalOptions;
use crate::core::{serialize_event, Event, SerializedEvent, SerializedState, TransitionSystem};
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::collections::VecDeque;

/// An outgoing edge: the event applied and the state it leads to.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyEdge<S, E> {
    pub event: E,
    pub state: S,
    pub key: SerializedState,
}

/// Outgoing edges of one state, keyed by serialized event.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyEntry<S, E> {
    pub state: S,
    transitions: IndexMap<SerializedEvent, AdjacencyEdge<S, E>>,
}

impl<S, E> AdjacencyEntry<S, E> {
    fn new(state: S) -> Self {
        Self {
            state,
            transitions: IndexMap::new(),
        }
    }

    /// Edge for a serialized event.
    pub fn transition(&self, event_key: &str) -> Option<&AdjacencyEdge<S, E>> {
        self.transitions.get(event_key)
    }

    /// Edges in event-source order.
    pub fn transitions(&self) -> impl Iterator<Item = (&str, &AdjacencyEdge<S, E>)> {
        self.transitions
            .iter()
            .map(|(event_key, edge)| (event_key.as_str(), edge))
    }

    pub fn out_degree(&self) -> usize {
        self.transitions.len()
    }
}

/// Adjacency entries keyed by serialized state, in discovery order.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMap<S, E> {
    entries: IndexMap<SerializedState, AdjacencyEntry<S, E>>,
}

impl<S, E> AdjacencyMap<S, E> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&AdjacencyEntry<S, E>> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AdjacencyEntry<S, E>)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry))
    }

    /// Total number of recorded edges.
    pub fn edge_count(&self) -> usize {
        self.entries.values().map(AdjacencyEntry::out_degree).sum()
    }
}

/// Explore the reachable graph breadth-first, recording every state's
/// outgoing edges.
///
/// Each key is expanded at most once. When two events serialize to the same
/// event key from one state, the first recorded edge is kept.
///
/// # Example
///
/// ```rust
/// use mindset_graph::core::Reducer;
/// use mindset_graph::event_enum;
/// use mindset_graph::traversal::{adjacency_map, TraversalOptions};
///
/// event_enum! {
///     enum Toggle { Flip }
/// }
///
/// let switch = Reducer::new(false, |on: &bool, _: &Toggle| !on);
/// let options = TraversalOptions::builder().events(vec![Toggle::Flip]).build();
///
/// let adjacency = adjacency_map(&switch, &options).unwrap();
/// assert_eq!(adjacency.keys().collect::<Vec<_>>(), vec!["false", "true"]);
/// assert_eq!(adjacency.edge_count(), 2);
/// ```
pub fn adjacency_map<T>(
    system: &T,
    options: &TraversalOptions<T::State, T::Event>,
) -> Result<AdjacencyMap<T::State, T::Event>, TraversalError>
where
    T: TransitionSystem,
    T::Event: Event,
{
    let explorer = Explorer::new(system, options);
    let mut entries: IndexMap<SerializedState, AdjacencyEntry<T::State, T::Event>> =
        IndexMap::new();
    let mut queue = VecDeque::new();

    let (initial, initial_key) = explorer.initial()?;
    tracing::debug!(initial = %initial_key, "Building adjacency map");
    queue.push_back((initial, initial_key));

    while let Some((state, key)) = queue.pop_front() {
        if entries.contains_key(&key) {
            continue;
        }
        explorer.check_limit(entries.len())?;

        let mut entry = AdjacencyEntry::new(state.clone());
        for successor in explorer.successors(&state)? {
            let slot = match entry.transitions.entry(serialize_event(&successor.event)?) {
                Entry::Occupied(edge) => {
                    tracing::trace!(source = %key, event = %edge.key(), "Edge already recorded");
                    continue;
                }
                Entry::Vacant(slot) => slot,
            };
            if !entries.contains_key(&successor.key) {
                queue.push_back((successor.state.clone(), successor.key.clone()));
            }
            slot.insert(AdjacencyEdge {
                event: successor.event,
                state: successor.state,
                key: successor.key,
            });
        }
        entries.insert(key, entry);
    }

    let adjacency = AdjacencyMap { entries };
    tracing::debug!(
        states = adjacency.len(),
        edges = adjacency.edge_count(),
        "Adjacency map complete"
    );
    Ok(adjacency)
}
