//! State key serialization.
//!
//! The traversal engine never compares states directly. Identity is the
//! serialized key: two states are "the same" exactly when they serialize to
//! the same string. Overriding the serializer to drop parts of a state is
//! the main lever for collapsing an otherwise unbounded state space.

use super::event::Event;
use serde::Serialize;
use thiserror::Error;

/// Canonical identity of a state inside a traversal.
pub type SerializedState = String;

/// Canonical identity of an event inside a traversal.
pub type SerializedEvent = String;

/// Separator between the components of a default key.
pub const KEY_SEPARATOR: &str = " | ";

/// Errors produced while serializing states or events.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("State serializer failed: {0}")]
    Custom(String),
}

/// Turns a state (and the event that produced it, if any) into its key.
///
/// Plain closures returning a `String` are serializers. Implement the trait
/// by hand when some states have no key, reporting them as
/// [`SerializeError::Custom`]; the traversal stops with that error.
///
/// # Example
///
/// ```rust
/// use mindset_graph::core::{SerializeError, SerializedState, StateSerializer};
///
/// struct Reading;
///
/// impl<E> StateSerializer<f64, E> for Reading {
///     fn serialize(&self, state: &f64, _: Option<&E>) -> Result<SerializedState, SerializeError> {
///         if state.is_nan() {
///             return Err(SerializeError::Custom("NaN reading has no key".to_string()));
///         }
///         Ok(format!("{state:.1}"))
///     }
/// }
///
/// let key = StateSerializer::<f64, ()>::serialize(&Reading, &20.04, None).unwrap();
/// assert_eq!(key, "20.0");
///
/// let err = StateSerializer::<f64, ()>::serialize(&Reading, &f64::NAN, None).unwrap_err();
/// assert!(matches!(err, SerializeError::Custom(_)));
/// ```
pub trait StateSerializer<S, E>: Send + Sync {
    fn serialize(&self, state: &S, event: Option<&E>) -> Result<SerializedState, SerializeError>;
}

impl<S, E, F> StateSerializer<S, E> for F
where
    F: Fn(&S, Option<&E>) -> String + Send + Sync,
{
    fn serialize(&self, state: &S, event: Option<&E>) -> Result<SerializedState, SerializeError> {
        Ok(self(state, event))
    }
}

/// Default serializer: the state's JSON form, optionally followed by the
/// triggering event's type tag.
///
/// # Example
///
/// ```rust
/// use mindset_graph::core::{JsonSerializer, StateSerializer};
/// use mindset_graph::event_enum;
///
/// event_enum! {
///     enum Light { Timer }
/// }
///
/// let plain = JsonSerializer::new();
/// let tagged = JsonSerializer::with_event_type();
///
/// assert_eq!(
///     StateSerializer::<_, Light>::serialize(&plain, &"green", None).unwrap(),
///     r#""green""#
/// );
/// assert_eq!(
///     tagged.serialize(&"green", Some(&Light::Timer)).unwrap(),
///     r#""green" | "Timer""#
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonSerializer {
    include_event_type: bool,
}

impl JsonSerializer {
    /// Key on the state alone.
    pub fn new() -> Self {
        Self {
            include_event_type: false,
        }
    }

    /// Key on the state and the type tag of the event that produced it.
    pub fn with_event_type() -> Self {
        Self {
            include_event_type: true,
        }
    }
}

impl<S, E> StateSerializer<S, E> for JsonSerializer
where
    S: Serialize,
    E: Event,
{
    fn serialize(&self, state: &S, event: Option<&E>) -> Result<SerializedState, SerializeError> {
        let value = serde_json::to_string(state)?;
        if !self.include_event_type {
            return Ok(value);
        }

        let tag = serde_json::to_string(event.map_or("", |e| e.event_type()))?;
        Ok(format!("{value}{KEY_SEPARATOR}{tag}"))
    }
}

/// Canonical JSON form of an event.
pub fn serialize_event<E: Serialize>(event: &E) -> Result<SerializedEvent, SerializeError> {
    Ok(serde_json::to_string(event)?)
}
