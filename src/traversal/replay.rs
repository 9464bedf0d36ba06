//! Deterministic replay of an explicit event sequence.

use super::error::TraversalError;
use crate::core::{Event, StatePath, Step, TransitionSystem};

/// Replay `events` from the initial state, one step per event.
///
/// No filter or event source is involved: this is a linear walk through the
/// transition function. The first event the system rejects aborts the
/// replay with `InvalidReplayEvent`.
///
/// # Example
///
/// ```rust
/// use mindset_graph::core::Reducer;
/// use mindset_graph::event_enum;
/// use mindset_graph::traversal::path_from_events;
///
/// event_enum! {
///     enum Count { Inc, Reset }
/// }
///
/// let counter = Reducer::new(0u32, |n: &u32, e: &Count| match e {
///     Count::Inc => n + 1,
///     Count::Reset => 0,
/// });
///
/// let path = path_from_events(&counter, &[Count::Inc, Count::Inc, Count::Reset, Count::Inc]).unwrap();
/// assert_eq!(path.weight(), 4);
/// assert_eq!(path.state, 1);
/// ```
pub fn path_from_events<T>(
    system: &T,
    events: &[T::Event],
) -> Result<StatePath<T::State, T::Event>, TraversalError>
where
    T: TransitionSystem,
    T::Event: Event,
{
    let mut path = StatePath::initial(system.initial_state());

    for (index, event) in events.iter().enumerate() {
        let next = system.transition(&path.state, event).map_err(|rejected| {
            tracing::debug!(index, event = event.event_type(), %rejected, "Replay rejected");
            TraversalError::InvalidReplayEvent {
                index,
                event_type: event.event_type().to_string(),
                reason: rejected.reason,
            }
        })?;
        path = path.extend(Step {
            event: event.clone(),
            state: next,
        });
    }

    Ok(path)
}
