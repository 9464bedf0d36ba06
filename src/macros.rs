//! Macros for ergonomic event definitions.

/// Generate an `Event` implementation for a unit-variant enum.
///
/// The type tag of each variant is its name, and each variant serializes to
/// its name as a JSON string.
///
/// # Example
///
/// ```
/// use mindset_graph::core::Event;
/// use mindset_graph::event_enum;
///
/// event_enum! {
///     pub enum LightEvent {
///         Timer,
///         PowerOutage,
///         PushButton,
///     }
/// }
///
/// assert_eq!(LightEvent::PowerOutage.event_type(), "PowerOutage");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn event_type(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
