//! Event sources: the candidate events to try from each visited state.
//!
//! The order of the returned events is significant. It decides which of
//! several equally short paths wins in a shortest-path traversal and the
//! enumeration order of simple paths, so every source here is stable.

/// Produces the ordered candidate events for a state.
pub trait EventSource<S, E>: Send + Sync {
    fn events(&self, state: &S) -> Vec<E>;
}

/// A fixed list, tried in order regardless of state.
impl<S, E> EventSource<S, E> for Vec<E>
where
    E: Clone + Send + Sync,
{
    fn events(&self, _state: &S) -> Vec<E> {
        self.clone()
    }
}

impl<S, E, F> EventSource<S, E> for F
where
    F: Fn(&S) -> Vec<E> + Send + Sync,
{
    fn events(&self, state: &S) -> Vec<E> {
        self(state)
    }
}

/// Type alias for per-state event generators.
pub type EventGenerator<S, E> = Box<dyn Fn(&S) -> Vec<E> + Send + Sync>;

/// How the events of one event type are produced.
pub enum EventSpec<S, E> {
    /// Fixed instances of the event type.
    Fixed(Vec<E>),

    /// Instances generated fresh from each visited state.
    Generated(EventGenerator<S, E>),
}

/// Events keyed by event type, tried in the order the types were added.
///
/// # Example
///
/// ```rust
/// use mindset_graph::core::{EventMap, EventSource};
///
/// let events = EventMap::new()
///     .with_events("RESET", vec![0i64])
///     .with_generator("ADD", |count: &i64| vec![*count + 10]);
///
/// assert_eq!(events.events(&5), vec![0, 15]);
/// ```
pub struct EventMap<S, E> {
    entries: Vec<(String, EventSpec<S, E>)>,
}

impl<S, E> EventMap<S, E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register fixed instances for an event type.
    pub fn with_events(self, event_type: impl Into<String>, events: Vec<E>) -> Self {
        self.with_spec(event_type, EventSpec::Fixed(events))
    }

    /// Register a generator evaluated at every visited state.
    pub fn with_generator<F>(self, event_type: impl Into<String>, generator: F) -> Self
    where
        F: Fn(&S) -> Vec<E> + Send + Sync + 'static,
    {
        self.with_spec(event_type, EventSpec::Generated(Box::new(generator)))
    }

    /// Register an event spec. Re-registering a type replaces it in place.
    pub fn with_spec(mut self, event_type: impl Into<String>, spec: EventSpec<S, E>) -> Self {
        let event_type = event_type.into();
        match self.entries.iter_mut().find(|(t, _)| *t == event_type) {
            Some(entry) => entry.1 = spec,
            None => self.entries.push((event_type, spec)),
        }
        self
    }

    /// Registered event types, in trial order.
    pub fn event_types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(t, _)| t.as_str())
    }
}

impl<S, E> Default for EventMap<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, E> EventSource<S, E> for EventMap<S, E>
where
    E: Clone + Send + Sync,
{
    fn events(&self, state: &S) -> Vec<E> {
        self.entries
            .iter()
            .flat_map(|(_, spec)| match spec {
                EventSpec::Fixed(events) => events.clone(),
                EventSpec::Generated(generate) => generate(state),
            })
            .collect()
    }
}
