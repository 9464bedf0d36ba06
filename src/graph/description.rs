//! Declarative hierarchical/parallel machine descriptions.
//!
//! A `StateNodeConfig` tree is the raw description. `Machine::new` validates
//! it, accumulating every problem instead of stopping at the first, and
//! resolves every transition target to a node id. A `Machine` therefore
//! never holds a dangling target.

use super::error::{DescriptionError, InvalidDescription};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Separator between the keys of a node id.
pub const ID_DELIMITER: char = '.';

/// Kind of a state node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    #[default]
    Atomic,
    Compound,
    Parallel,
    Final,
}

impl NodeKind {
    /// Whether nodes of this kind may contain child states.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Compound | Self::Parallel)
    }
}

/// A declared transition: an event and the keys or ids it targets.
///
/// An empty target list declares a targetless (self) transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionConfig {
    pub event: String,
    #[serde(default)]
    pub targets: Vec<String>,
}

/// Raw description of one state node and its descendants.
///
/// # Example
///
/// ```rust
/// use mindset_graph::graph::{Machine, StateNodeConfig};
///
/// let light = StateNodeConfig::compound("light", "green")
///     .state(StateNodeConfig::atomic("green").on("TIMER", "yellow"))
///     .state(StateNodeConfig::atomic("yellow").on("TIMER", "green"));
///
/// let machine = Machine::new(light).unwrap();
/// assert_eq!(machine.state_nodes().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateNodeConfig {
    pub key: String,
    #[serde(default, rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub initial: Option<String>,
    #[serde(default)]
    pub states: Vec<StateNodeConfig>,
    #[serde(default)]
    pub on: Vec<TransitionConfig>,
    #[serde(default)]
    pub on_done: Vec<String>,
}

impl StateNodeConfig {
    fn with_kind(key: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            key: key.into(),
            kind,
            initial: None,
            states: Vec::new(),
            on: Vec::new(),
            on_done: Vec::new(),
        }
    }

    pub fn atomic(key: impl Into<String>) -> Self {
        Self::with_kind(key, NodeKind::Atomic)
    }

    pub fn compound(key: impl Into<String>, initial: impl Into<String>) -> Self {
        let mut node = Self::with_kind(key, NodeKind::Compound);
        node.initial = Some(initial.into());
        node
    }

    pub fn parallel(key: impl Into<String>) -> Self {
        Self::with_kind(key, NodeKind::Parallel)
    }

    pub fn final_state(key: impl Into<String>) -> Self {
        Self::with_kind(key, NodeKind::Final)
    }

    /// Add a child state.
    pub fn state(mut self, child: StateNodeConfig) -> Self {
        self.states.push(child);
        self
    }

    /// Declare a transition to one target.
    pub fn on(self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.on_targets(event, vec![target.into()])
    }

    /// Declare a transition to several targets (one per parallel region).
    pub fn on_targets(mut self, event: impl Into<String>, targets: Vec<String>) -> Self {
        self.on.push(TransitionConfig {
            event: event.into(),
            targets,
        });
        self
    }

    /// Declare a targetless transition.
    pub fn on_self(self, event: impl Into<String>) -> Self {
        self.on_targets(event, Vec::new())
    }

    /// Declare the transition taken when this node reaches a final child.
    pub fn on_done(mut self, target: impl Into<String>) -> Self {
        self.on_done.push(target.into());
        self
    }
}

/// A declared transition with targets resolved to node ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeTransition {
    pub event: String,
    pub targets: Vec<String>,
}

/// A validated state node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateNode {
    pub id: String,
    pub key: String,
    pub kind: NodeKind,
    pub initial: Option<String>,
    pub transitions: Vec<NodeTransition>,
    parent: Option<usize>,
    children: Vec<usize>,
}

impl StateNode {
    /// Event of the transition taken when this node is done.
    pub fn done_event(&self) -> String {
        format!("done.state.{}", self.id)
    }
}

/// A validated machine description with resolved targets.
#[derive(Debug, Clone)]
pub struct Machine {
    nodes: Vec<StateNode>,
    index: HashMap<String, usize>,
}

type Check = Validation<(), NonEmptyVec<DescriptionError>>;

impl Machine {
    /// Validate `root` and resolve every transition target.
    pub fn new(root: StateNodeConfig) -> Result<Self, InvalidDescription> {
        let mut machine = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        };
        let mut declared = Vec::new();
        machine.flatten(&root, None, &mut declared);

        let mut checks: Vec<Check> = Vec::new();
        for (slot, config) in declared.iter().enumerate() {
            machine.check_node(slot, config, &mut checks);
        }

        match Validation::all_vec(checks).map(|_| ()) {
            Validation::Success(()) => {
                machine.resolve_transitions(&declared);
                tracing::debug!(nodes = machine.nodes.len(), "Machine description validated");
                Ok(machine)
            }
            Validation::Failure(errors) => Err(InvalidDescription {
                problems: errors.iter().cloned().collect(),
            }),
        }
    }

    /// Record `config` and its descendants in document order.
    fn flatten<'c>(
        &mut self,
        config: &'c StateNodeConfig,
        parent: Option<usize>,
        declared: &mut Vec<&'c StateNodeConfig>,
    ) {
        let id = match parent {
            Some(p) => format!("{}{ID_DELIMITER}{}", self.nodes[p].id, config.key),
            None => config.key.clone(),
        };
        let slot = self.nodes.len();
        self.index.entry(id.clone()).or_insert(slot);
        self.nodes.push(StateNode {
            id,
            key: config.key.clone(),
            kind: config.kind,
            initial: config.initial.clone(),
            transitions: Vec::new(),
            parent,
            children: Vec::new(),
        });
        declared.push(config);
        if let Some(p) = parent {
            self.nodes[p].children.push(slot);
        }

        for child in &config.states {
            self.flatten(child, Some(slot), declared);
        }
    }

    fn check_node(&self, slot: usize, config: &StateNodeConfig, checks: &mut Vec<Check>) {
        let node = &self.nodes[slot];

        if config.key.is_empty() || config.key.contains([ID_DELIMITER, '#']) {
            checks.push(Validation::fail(DescriptionError::InvalidKey {
                key: config.key.clone(),
            }));
        }

        let mut keys = HashSet::new();
        for child in &config.states {
            if !keys.insert(child.key.as_str()) {
                checks.push(Validation::fail(DescriptionError::DuplicateKey {
                    parent: node.id.clone(),
                    key: child.key.clone(),
                }));
            }
        }

        if !node.kind.is_composite() && !config.states.is_empty() {
            checks.push(Validation::fail(DescriptionError::UnexpectedChildren {
                id: node.id.clone(),
            }));
        }

        if node.kind == NodeKind::Compound {
            match &config.initial {
                None => checks.push(Validation::fail(DescriptionError::MissingInitial {
                    id: node.id.clone(),
                })),
                Some(initial) if !keys.contains(initial.as_str()) => {
                    checks.push(Validation::fail(DescriptionError::UnknownInitial {
                        id: node.id.clone(),
                        initial: initial.clone(),
                    }))
                }
                Some(_) => {}
            }
        }

        for (event, target) in declared_targets(node, config) {
            if self.resolve(slot, target).is_none() {
                checks.push(Validation::fail(DescriptionError::UnknownTarget {
                    source_id: node.id.clone(),
                    event,
                    target: target.to_string(),
                }));
            }
        }
    }

    fn resolve_transitions(&mut self, declared: &[&StateNodeConfig]) {
        for (slot, config) in declared.iter().enumerate() {
            let mut transitions: Vec<NodeTransition> = config
                .on
                .iter()
                .map(|t| NodeTransition {
                    event: t.event.clone(),
                    targets: self.resolve_all(slot, &t.targets),
                })
                .collect();
            if !config.on_done.is_empty() {
                transitions.push(NodeTransition {
                    event: self.nodes[slot].done_event(),
                    targets: self.resolve_all(slot, &config.on_done),
                });
            }
            self.nodes[slot].transitions = transitions;
        }
    }

    fn resolve_all(&self, slot: usize, targets: &[String]) -> Vec<String> {
        targets
            .iter()
            .filter_map(|target| self.resolve(slot, target))
            .map(|found| self.nodes[found].id.clone())
            .collect()
    }

    /// Resolve a target: `#id` is absolute, `.path` is relative to the
    /// source, anything else is relative to the source's parent.
    fn resolve(&self, slot: usize, target: &str) -> Option<usize> {
        let node = &self.nodes[slot];
        let id = if let Some(absolute) = target.strip_prefix('#') {
            absolute.to_string()
        } else if target.starts_with(ID_DELIMITER) {
            format!("{}{target}", node.id)
        } else {
            let base = node.parent.unwrap_or(slot);
            format!("{}{ID_DELIMITER}{target}", self.nodes[base].id)
        };
        self.index.get(&id).copied()
    }

    /// The root node.
    pub fn root(&self) -> &StateNode {
        &self.nodes[0]
    }

    pub fn id(&self) -> &str {
        &self.root().id
    }

    pub fn node(&self, id: &str) -> Option<&StateNode> {
        self.index.get(id).map(|&slot| &self.nodes[slot])
    }

    /// Direct children of the node `id`, in declaration order.
    pub fn children(&self, id: &str) -> Vec<&StateNode> {
        self.index
            .get(id)
            .map(|&slot| {
                self.nodes[slot]
                    .children
                    .iter()
                    .map(|&child| &self.nodes[child])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every node below the root, in document order.
    pub fn state_nodes(&self) -> Vec<&StateNode> {
        self.nodes.iter().skip(1).collect()
    }
}

fn declared_targets<'c>(
    node: &StateNode,
    config: &'c StateNodeConfig,
) -> impl Iterator<Item = (String, &'c str)> {
    let done_event = node.done_event();
    config
        .on
        .iter()
        .flat_map(|t| {
            t.targets
                .iter()
                .map(move |target| (t.event.clone(), target.as_str()))
        })
        .chain(
            config
                .on_done
                .iter()
                .map(move |target| (done_event.clone(), target.as_str())),
        )
}
