//! Depth-first enumeration of every simple (cycle-free) path.

use super::error::TraversalError;
use super::explore::{Explorer, Successor};
use super::options::TraversalOptions;
use crate::core::{
    serialize_event, Event, PathMap, SerializeError, SerializedEvent, SerializedState, StatePath,
    Step, TransitionSystem,
};
use std::collections::HashSet;

/// One level of the explicit DFS stack.
struct Frame<S, E> {
    key: SerializedState,
    pending: std::vec::IntoIter<Successor<S, E>>,
}

/// Find every simple path from the initial state to every reachable key.
///
/// A path is simple when no two of its positions (the initial state
/// included) share a key. Paths reaching the same key through different
/// event histories are all retained. The number of simple paths can grow
/// exponentially with branching; bound it through the filter, the event
/// source, or a limit.
///
/// # Example
///
/// ```rust
/// use mindset_graph::core::Reducer;
/// use mindset_graph::event_enum;
/// use mindset_graph::traversal::{traverse_simple_paths, TraversalOptions};
///
/// event_enum! {
///     enum Swap { Foo, Bar }
/// }
///
/// let flip = Reducer::new('a', |s: &char, _: &Swap| if *s == 'a' { 'b' } else { 'a' });
/// let options = TraversalOptions::builder()
///     .events(vec![Swap::Foo, Swap::Bar])
///     .build();
///
/// let paths = traverse_simple_paths(&flip, &options).unwrap();
/// assert_eq!(paths.get(r#""a""#).unwrap().paths.len(), 1);
/// assert_eq!(paths.get(r#""b""#).unwrap().paths.len(), 2);
/// ```
pub fn traverse_simple_paths<T>(
    system: &T,
    options: &TraversalOptions<T::State, T::Event>,
) -> Result<PathMap<T::State, T::Event>, TraversalError>
where
    T: TransitionSystem,
    T::Event: Event,
{
    let explorer = Explorer::new(system, options);
    let mut paths = PathMap::new();

    let (initial, initial_key) = explorer.initial()?;
    tracing::debug!(initial = %initial_key, "Traversing simple paths");

    // Keys on the current path, and the (event, key) identity of its steps.
    let mut on_path: HashSet<SerializedState> = HashSet::new();
    let mut identity: Vec<(SerializedEvent, SerializedState)> = Vec::new();
    let mut seen_paths: HashSet<String> = HashSet::new();

    let mut current = StatePath::initial(initial.clone());
    let mut recorded = 1;
    paths.push(&initial_key, current.clone());
    on_path.insert(initial_key.clone());

    let mut stack = vec![Frame {
        key: initial_key,
        pending: explorer.successors(&current.state)?.into_iter(),
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(successor) = frame.pending.next() else {
            // Backtrack; the root frame has no step of its own.
            on_path.remove(&frame.key);
            stack.pop();
            if !stack.is_empty() {
                current.steps.pop();
                identity.pop();
                current.state = match current.steps.last() {
                    Some(step) => step.state.clone(),
                    None => initial.clone(),
                };
            }
            continue;
        };

        if on_path.contains(&successor.key) {
            tracing::trace!(key = %successor.key, "Skipping edge that closes a cycle");
            continue;
        }

        identity.push((serialize_event(&successor.event)?, successor.key.clone()));
        let path_identity = serde_json::to_string(&identity).map_err(SerializeError::from)?;
        if !seen_paths.insert(path_identity) {
            identity.pop();
            continue;
        }

        explorer.check_limit(recorded)?;
        current = current.extend(Step {
            event: successor.event,
            state: successor.state,
        });
        paths.push(&successor.key, current.clone());
        recorded += 1;

        on_path.insert(successor.key.clone());
        stack.push(Frame {
            key: successor.key,
            pending: explorer.successors(&current.state)?.into_iter(),
        });
    }

    tracing::debug!(
        states = paths.len(),
        paths = recorded,
        "Simple paths complete"
    );
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Reducer;
    use crate::event_enum;
    use serde::Serialize;

    event_enum! {
        enum Op {
            A,
            B,
            Reset,
        }
    }

    #[derive(Clone, Debug, PartialEq, Serialize)]
    struct Count {
        value: &'static str,
        count: u32,
    }

    fn count_machine() -> Reducer<Count, Op> {
        let initial = Count {
            value: "start",
            count: 0,
        };
        Reducer::new(initial, |s: &Count, _: &Op| {
            if s.value == "finish" {
                return s.clone();
            }
            let count = s.count + 1;
            let value = if count == 3 { "finish" } else { "start" };
            Count { value, count }
        })
    }

    fn value_context_key(s: &Count, _: Option<&Op>) -> String {
        format!("{:?} | {{\"count\":{}}}", s.value, s.count)
    }

    #[test]
    fn value_based_paths() {
        let options = TraversalOptions::builder()
            .events(vec![Op::A])
            .serializer(value_context_key)
            .build();

        let paths = traverse_simple_paths(&count_machine(), &options).unwrap();

        let keys: Vec<_> = paths.keys().collect();
        assert_eq!(
            keys,
            vec![
                r#""start" | {"count":0}"#,
                r#""start" | {"count":1}"#,
                r#""start" | {"count":2}"#,
                r#""finish" | {"count":3}"#,
            ]
        );
        for (expected, (_, plan)) in paths.iter().enumerate() {
            assert_eq!(plan.paths.len(), 1);
            assert_eq!(plan.paths[0].weight(), expected);
        }
    }

    #[test]
    fn equivalent_transitions_keep_distinct_histories() {
        let machine = Reducer::new("a", |s: &&'static str, _: &Op| match *s {
            "a" => "b",
            _ => "a",
        });
        let options = TraversalOptions::builder()
            .events(vec![Op::A, Op::B])
            .build();

        let paths = traverse_simple_paths(&machine, &options).unwrap();

        assert_eq!(paths.keys().collect::<Vec<_>>(), vec![r#""a""#, r#""b""#]);
        let to_b = &paths.get(r#""b""#).unwrap().paths;
        assert_eq!(to_b.len(), 2);
        assert_eq!(to_b[0].events(), vec![&Op::A]);
        assert_eq!(to_b[1].events(), vec![&Op::B]);
    }

    #[test]
    fn paths_never_revisit_a_key() {
        let machine = Reducer::new(0u8, |s: &u8, e: &Op| match e {
            Op::A => 1,
            Op::B if *s == 1 => 2,
            Op::Reset => 0,
            _ => *s,
        });
        let options = TraversalOptions::builder()
            .events(vec![Op::A, Op::B, Op::Reset])
            .build();

        let paths = traverse_simple_paths(&machine, &options).unwrap();

        assert_eq!(paths.get("0").unwrap().paths.len(), 1);
        assert_eq!(paths.get("1").unwrap().paths.len(), 1);
        assert_eq!(
            paths.get("2").unwrap().paths[0].events(),
            vec![&Op::A, &Op::B]
        );

        for path in paths.paths() {
            let mut seen = HashSet::from([0u8]);
            for state in path.states() {
                assert!(seen.insert(*state), "revisited {state} in {path:?}");
            }
        }
    }

    #[test]
    fn backtracking_restores_terminal_state() {
        // 0 -A-> 1 -A-> 2, and 0 -B-> 3: the B branch starts from 0 again.
        let machine = Reducer::new(0u8, |s: &u8, e: &Op| match (s, e) {
            (0, Op::A) => 1,
            (1, Op::A) => 2,
            (0, Op::B) => 3,
            (s, _) => *s,
        });
        let options = TraversalOptions::builder()
            .events(vec![Op::A, Op::B])
            .build();

        let paths = traverse_simple_paths(&machine, &options).unwrap();
        let to_three = &paths.get("3").unwrap().paths;

        assert_eq!(to_three.len(), 1);
        assert_eq!(to_three[0].events(), vec![&Op::B]);
        assert_eq!(to_three[0].state, 3);
    }

    #[test]
    fn limit_caps_recorded_paths() {
        let machine = Reducer::new(0u64, |n: &u64, _: &Op| n + 1);
        let options = TraversalOptions::builder()
            .events(vec![Op::A])
            .limit(20)
            .build();

        let err = traverse_simple_paths(&machine, &options).unwrap_err();
        assert!(err.is_unbounded());
    }
}
