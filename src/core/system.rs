//! Transition systems: an initial state plus a deterministic transition
//! function.

use thiserror::Error;

/// Signal from a transition system that an event cannot be applied to a
/// state.
///
/// Traversals treat a rejected event as an absent edge. Path replay reports
/// it as an invalid replay event.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct TransitionRejected {
    pub reason: String,
}

impl TransitionRejected {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A deterministic transition system.
///
/// `transition` must be pure: identical `(state, event)` inputs always
/// produce an identical result, and neither input is mutated.
pub trait TransitionSystem {
    type State: Clone;
    type Event: Clone;

    /// The state every traversal starts from.
    fn initial_state(&self) -> Self::State;

    /// Compute the state reached by applying `event` to `state`.
    fn transition(
        &self,
        state: &Self::State,
        event: &Self::Event,
    ) -> Result<Self::State, TransitionRejected>;
}

/// Type alias for reducer transition functions.
pub type ReducerFn<S, E> = Box<dyn Fn(&S, &E) -> Result<S, TransitionRejected> + Send + Sync>;

/// A transition system backed by a reducer closure.
///
/// # Example
///
/// ```rust
/// use mindset_graph::core::{Reducer, TransitionSystem};
///
/// let toggle = Reducer::new(false, |on: &bool, _event: &()| !on);
///
/// assert!(!toggle.initial_state());
/// assert_eq!(toggle.transition(&false, &()), Ok(true));
/// ```
pub struct Reducer<S, E> {
    initial: S,
    reduce: ReducerFn<S, E>,
}

impl<S: Clone, E: Clone> Reducer<S, E> {
    /// Wrap a total reducer: every event applies to every state.
    pub fn new<F>(initial: S, reduce: F) -> Self
    where
        F: Fn(&S, &E) -> S + Send + Sync + 'static,
    {
        Self {
            initial,
            reduce: Box::new(move |state, event| Ok(reduce(state, event))),
        }
    }

    /// Wrap a reducer that may reject events it cannot handle.
    pub fn partial<F>(initial: S, reduce: F) -> Self
    where
        F: Fn(&S, &E) -> Result<S, TransitionRejected> + Send + Sync + 'static,
    {
        Self {
            initial,
            reduce: Box::new(reduce),
        }
    }
}

impl<S: Clone, E: Clone> TransitionSystem for Reducer<S, E> {
    type State = S;
    type Event = E;

    fn initial_state(&self) -> S {
        self.initial.clone()
    }

    fn transition(&self, state: &S, event: &E) -> Result<S, TransitionRejected> {
        (self.reduce)(state, event)
    }
}
