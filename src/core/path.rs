//! Paths through a transition system and the maps that index them.
//!
//! Paths are immutable values: extending a path returns a new one, leaving
//! the receiver untouched, so a traversal can branch from any prefix.

use super::serializer::SerializedState;
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One transition: the event applied and the state reached by applying it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Step<S, E> {
    pub event: E,
    pub state: S,
}

/// Ordered steps from the initial state to a terminal state.
///
/// `state` is the terminal state; for the zero-length path it is the
/// initial state itself.
///
/// # Example
///
/// ```rust
/// use mindset_graph::core::{StatePath, Step};
///
/// let start = StatePath::<&str, &str>::initial("green");
/// let path = start.extend(Step { event: "TIMER", state: "yellow" });
///
/// assert_eq!(start.weight(), 0);
/// assert_eq!(path.weight(), 1);
/// assert_eq!(path.state, "yellow");
/// assert_eq!(path.states(), vec![&"yellow"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatePath<S, E> {
    pub state: S,
    pub steps: Vec<Step<S, E>>,
}

impl<S: Clone, E: Clone> StatePath<S, E> {
    /// The zero-length path standing at `state`.
    pub fn initial(state: S) -> Self {
        Self {
            state,
            steps: Vec::new(),
        }
    }

    /// Append a step, returning a new path.
    pub fn extend(&self, step: Step<S, E>) -> Self {
        let mut steps = self.steps.clone();
        let state = step.state.clone();
        steps.push(step);
        Self { state, steps }
    }
}

impl<S, E> StatePath<S, E> {
    /// Number of steps.
    pub fn weight(&self) -> usize {
        self.steps.len()
    }

    /// Events in the order they are applied.
    pub fn events(&self) -> Vec<&E> {
        self.steps.iter().map(|step| &step.event).collect()
    }

    /// States reached after each step.
    pub fn states(&self) -> Vec<&S> {
        self.steps.iter().map(|step| &step.state).collect()
    }
}

/// All retained paths whose terminal state shares one key.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathPlan<S, E> {
    pub state: S,
    pub paths: Vec<StatePath<S, E>>,
}

impl<S, E> PathPlan<S, E> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            paths: Vec::new(),
        }
    }

    /// The shortest retained path.
    pub fn shortest(&self) -> Option<&StatePath<S, E>> {
        self.paths.iter().min_by_key(|path| path.weight())
    }
}

/// Path plans keyed by serialized state, in discovery order.
///
/// Equality compares plans in order, so two maps with the same plans
/// discovered in a different order are not equal.
#[derive(Clone, Debug)]
pub struct PathMap<S, E> {
    plans: IndexMap<SerializedState, PathPlan<S, E>>,
}

impl<S, E> PathMap<S, E> {
    pub(crate) fn new() -> Self {
        Self {
            plans: IndexMap::new(),
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.plans.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&PathPlan<S, E>> {
        self.plans.get(key)
    }

    /// Keys in discovery order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.plans.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PathPlan<S, E>)> {
        self.plans.iter().map(|(key, plan)| (key.as_str(), plan))
    }

    /// Every retained path of every plan, flattened in discovery order.
    pub fn paths(&self) -> impl Iterator<Item = &StatePath<S, E>> {
        self.plans.values().flat_map(|plan| plan.paths.iter())
    }

    /// Record `path` as the only path to `key`, unless `key` is already
    /// present.
    pub(crate) fn insert_first(&mut self, key: SerializedState, path: StatePath<S, E>) -> bool
    where
        S: Clone,
    {
        let Entry::Vacant(slot) = self.plans.entry(key) else {
            return false;
        };
        slot.insert(PathPlan {
            state: path.state.clone(),
            paths: vec![path],
        });
        true
    }

    /// Append `path` to the plan for `key`, creating the plan if needed.
    pub(crate) fn push(&mut self, key: &str, path: StatePath<S, E>)
    where
        S: Clone,
    {
        self.plans
            .entry(key.to_string())
            .or_insert_with(|| PathPlan::new(path.state.clone()))
            .paths
            .push(path);
    }
}

impl<S: PartialEq, E: PartialEq> PartialEq for PathMap<S, E> {
    fn eq(&self, other: &Self) -> bool {
        self.plans.iter().eq(other.plans.iter())
    }
}

impl<S, E> IntoIterator for PathMap<S, E> {
    type Item = (SerializedState, PathPlan<S, E>);
    type IntoIter = indexmap::map::IntoIter<SerializedState, PathPlan<S, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.plans.into_iter()
    }
}

impl<S: Serialize, E: Serialize> Serialize for PathMap<S, E> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, plan) in self.iter() {
            map.serialize_entry(key, plan)?;
        }
        map.end()
    }
}
