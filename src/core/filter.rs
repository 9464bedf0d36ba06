//! Filters bounding which states a traversal may expand.
//!
//! A filter is checked against every state produced by a transition. A
//! rejected state is dropped together with the edge that produced it and is
//! never expanded. This is the only termination mechanism for unbounded
//! state spaces.

use std::fmt;
use std::sync::Arc;

/// Pure predicate deciding whether a reached state is admitted.
///
/// # Example
///
/// ```rust
/// use mindset_graph::core::Filter;
///
/// let below_five = Filter::new(|count: &u32| *count < 5);
///
/// assert!(below_five.check(&4));
/// assert!(!below_five.check(&5));
/// ```
pub struct Filter<S> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S> Filter<S> {
    /// Create a filter from a pure predicate function.
    ///
    /// The predicate must be deterministic; traversals may evaluate it more
    /// than once for equal states.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Filter admitting every state.
    pub fn accept_all() -> Self {
        Self::new(|_| true)
    }

    /// Check whether `state` may be admitted and expanded.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S> Default for Filter<S> {
    fn default() -> Self {
        Self::accept_all()
    }
}

impl<S> Clone for Filter<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S> fmt::Debug for Filter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").finish_non_exhaustive()
    }
}
