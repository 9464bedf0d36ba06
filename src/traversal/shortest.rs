//! Breadth-first shortest paths to every reachable state.

use super::error::TraversalError;
use super::explore::Explorer;
use super::options::TraversalOptions;
use crate::core::{Event, PathMap, StatePath, Step, TransitionSystem};
use std::collections::VecDeque;

/// Find one shortest path from the initial state to every reachable key.
///
/// The first discovery of a key wins, so paths are minimal by BFS layer,
/// and among equally short alternatives the one whose events come first in
/// event-source order is kept. Terminates iff the filter-accepted key space
/// is finite (or a limit is configured).
///
/// # Example
///
/// ```rust
/// use mindset_graph::core::Reducer;
/// use mindset_graph::event_enum;
/// use mindset_graph::traversal::{traverse_shortest_paths, TraversalOptions};
///
/// event_enum! {
///     enum Count { Inc }
/// }
///
/// let counter = Reducer::new(0u32, |n: &u32, _: &Count| n + 1);
/// let options = TraversalOptions::builder()
///     .events(vec![Count::Inc])
///     .filter(|n: &u32| *n < 5)
///     .build();
///
/// let paths = traverse_shortest_paths(&counter, &options).unwrap();
/// assert_eq!(paths.keys().collect::<Vec<_>>(), vec!["0", "1", "2", "3", "4"]);
/// assert_eq!(paths.get("3").unwrap().paths[0].weight(), 3);
/// ```
pub fn traverse_shortest_paths<T>(
    system: &T,
    options: &TraversalOptions<T::State, T::Event>,
) -> Result<PathMap<T::State, T::Event>, TraversalError>
where
    T: TransitionSystem,
    T::Event: Event,
{
    let explorer = Explorer::new(system, options);
    let mut paths = PathMap::new();
    let mut queue = VecDeque::new();

    let (initial, initial_key) = explorer.initial()?;
    tracing::debug!(initial = %initial_key, "Traversing shortest paths");
    queue.push_back((initial_key, StatePath::initial(initial)));

    while let Some((key, path)) = queue.pop_front() {
        if paths.contains_key(&key) {
            continue;
        }
        explorer.check_limit(paths.len())?;

        for successor in explorer.successors(&path.state)? {
            if paths.contains_key(&successor.key) {
                continue;
            }
            let next = path.extend(Step {
                event: successor.event,
                state: successor.state,
            });
            queue.push_back((successor.key, next));
        }
        paths.insert_first(key, path);
    }

    tracing::debug!(states = paths.len(), "Shortest paths complete");
    Ok(paths)
}
