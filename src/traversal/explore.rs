//! Exploration plumbing shared by every traversal.
//!
//! All three explorers (adjacency, shortest paths, simple paths) expand a
//! state the same way: ask the event source for candidates in order, apply
//! each through the transition system, drop rejected events and
//! filter-rejected states, and key whatever survives.

use super::error::TraversalError;
use super::options::TraversalOptions;
use crate::core::{Event, SerializedState, TransitionSystem};

/// A filter-accepted successor of an expanded state.
pub(crate) struct Successor<S, E> {
    pub(crate) event: E,
    pub(crate) state: S,
    pub(crate) key: SerializedState,
}

/// Filter-accepted successors of one state, in event-source order.
pub(crate) type Successors<T> =
    Vec<Successor<<T as TransitionSystem>::State, <T as TransitionSystem>::Event>>;

pub(crate) struct Explorer<'a, T: TransitionSystem> {
    system: &'a T,
    options: &'a TraversalOptions<T::State, T::Event>,
}

impl<'a, T> Explorer<'a, T>
where
    T: TransitionSystem,
    T::Event: Event,
{
    pub(crate) fn new(system: &'a T, options: &'a TraversalOptions<T::State, T::Event>) -> Self {
        Self { system, options }
    }

    /// The initial state and its key. The initial state is never filtered.
    pub(crate) fn initial(&self) -> Result<(T::State, SerializedState), TraversalError> {
        let state = self.system.initial_state();
        let key = self.options.serializer.serialize(&state, None)?;
        Ok((state, key))
    }

    /// Successors of `state` in event-source order.
    pub(crate) fn successors(&self, state: &T::State) -> Result<Successors<T>, TraversalError> {
        let mut successors = Vec::new();

        for event in self.options.events.events(state) {
            let next = match self.system.transition(state, &event) {
                Ok(next) => next,
                Err(rejected) => {
                    tracing::trace!(event = event.event_type(), %rejected, "Event not applicable");
                    continue;
                }
            };

            if !self.options.filter.check(&next) {
                tracing::trace!(event = event.event_type(), "Filter rejected reached state");
                continue;
            }

            let key = self.options.serializer.serialize(&next, Some(&event))?;
            successors.push(Successor {
                event,
                state: next,
                key,
            });
        }

        Ok(successors)
    }

    /// Fail once `count` reaches the configured limit.
    pub(crate) fn check_limit(&self, count: usize) -> Result<(), TraversalError> {
        match self.options.limit {
            Some(limit) if count >= limit => {
                tracing::debug!(limit, "Traversal limit reached");
                Err(TraversalError::UnboundedExploration { limit })
            }
            _ => Ok(()),
        }
    }
}
