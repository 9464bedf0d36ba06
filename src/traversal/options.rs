//! Traversal configuration and its builder.

use crate::core::{Event, EventSource, Filter, JsonSerializer, StateSerializer};
use serde::Serialize;
use std::fmt;

/// Configuration shared by every traversal.
///
/// Options are immutable once built and passed by reference into each
/// traversal call; nothing is configured globally.
pub struct TraversalOptions<S, E> {
    pub(crate) serializer: Box<dyn StateSerializer<S, E>>,
    pub(crate) events: Box<dyn EventSource<S, E>>,
    pub(crate) filter: Filter<S>,
    pub(crate) limit: Option<usize>,
}

impl<S, E> TraversalOptions<S, E>
where
    S: Serialize + 'static,
    E: Event + Send + Sync + 'static,
{
    /// Builder starting from the default JSON serializer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mindset_graph::traversal::TraversalOptions;
    /// use mindset_graph::event_enum;
    ///
    /// event_enum! {
    ///     enum Tick { Inc }
    /// }
    ///
    /// let options: TraversalOptions<u32, Tick> = TraversalOptions::builder()
    ///     .events(vec![Tick::Inc])
    ///     .filter(|count: &u32| *count < 5)
    ///     .limit(1_000)
    ///     .build();
    ///
    /// assert_eq!(options.limit(), Some(1_000));
    /// ```
    pub fn builder() -> TraversalOptionsBuilder<S, E> {
        TraversalOptionsBuilder::new(JsonSerializer::new())
    }
}

impl<S, E> Default for TraversalOptions<S, E>
where
    S: Serialize + 'static,
    E: Event + Send + Sync + 'static,
{
    /// JSON keys, no events, accept-all filter, no limit.
    fn default() -> Self {
        Self::builder().build()
    }
}

impl<S, E> TraversalOptions<S, E> {
    /// Caller-imposed bound on explored states (or recorded simple paths).
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn filter(&self) -> &Filter<S> {
        &self.filter
    }
}

impl<S, E> fmt::Debug for TraversalOptions<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraversalOptions")
            .field("filter", &self.filter)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

/// Builder for traversal options.
pub struct TraversalOptionsBuilder<S, E> {
    serializer: Box<dyn StateSerializer<S, E>>,
    events: Box<dyn EventSource<S, E>>,
    filter: Filter<S>,
    limit: Option<usize>,
}

impl<S, E> TraversalOptionsBuilder<S, E>
where
    E: Clone + Send + Sync + 'static,
{
    /// Start from an explicit serializer, for states without a JSON form.
    pub fn new<Ser>(serializer: Ser) -> Self
    where
        Ser: StateSerializer<S, E> + 'static,
    {
        Self {
            serializer: Box::new(serializer),
            events: Box::new(Vec::<E>::new()),
            filter: Filter::accept_all(),
            limit: None,
        }
    }
}

impl<S, E> TraversalOptionsBuilder<S, E> {
    /// Replace the state serializer
    pub fn serializer<Ser>(mut self, serializer: Ser) -> Self
    where
        Ser: StateSerializer<S, E> + 'static,
    {
        self.serializer = Box::new(serializer);
        self
    }

    /// Set the event source: a `Vec`, an `EventMap`, or `Fn(&S) -> Vec<E>`
    pub fn events<Src>(mut self, events: Src) -> Self
    where
        Src: EventSource<S, E> + 'static,
    {
        self.events = Box::new(events);
        self
    }

    /// Set the expansion filter
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.filter = Filter::new(predicate);
        self
    }

    /// Reuse an existing filter
    pub fn with_filter(mut self, filter: Filter<S>) -> Self {
        self.filter = filter;
        self
    }

    /// Fail with `UnboundedExploration` past `limit` states
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn build(self) -> TraversalOptions<S, E> {
        TraversalOptions {
            serializer: self.serializer,
            events: self.events,
            filter: self.filter,
            limit: self.limit,
        }
    }
}
