//! Structural projection of a machine into a node/edge tree for rendering.

use super::description::{Machine, NodeKind, StateNode};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectedGraphLabel {
    pub text: String,
}

/// One declared event-to-target edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectedGraphEdge {
    /// `<source>:<transition index>:<target index>`
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: DirectedGraphLabel,
}

/// One state node with its outgoing edges and nested children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectedGraphNode {
    pub id: String,
    pub key: String,
    pub kind: NodeKind,
    pub children: Vec<DirectedGraphNode>,
    pub edges: Vec<DirectedGraphEdge>,
}

impl DirectedGraphNode {
    /// Flatten the tree into a petgraph graph.
    ///
    /// Node weights are node ids, edge weights are event names. Only
    /// declared edges are present; nesting is not encoded as edges.
    pub fn to_petgraph(&self) -> DiGraph<String, String> {
        let mut graph = DiGraph::new();
        let mut indices: HashMap<String, NodeIndex> = HashMap::new();

        let mut pending = vec![self];
        let mut nodes = Vec::new();
        while let Some(node) = pending.pop() {
            indices.insert(node.id.clone(), graph.add_node(node.id.clone()));
            nodes.push(node);
            pending.extend(node.children.iter().rev());
        }

        for node in nodes {
            for edge in &node.edges {
                let source = indices.get(&edge.source);
                let target = indices.get(&edge.target);
                if let (Some(&from), Some(&to)) = (source, target) {
                    graph.add_edge(from, to, edge.label.text.clone());
                }
            }
        }

        graph
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }
}

/// Project the declared structure of `machine`, independent of reachability.
pub fn to_directed_graph(machine: &Machine) -> DirectedGraphNode {
    project(machine, machine.root())
}

fn project(machine: &Machine, node: &StateNode) -> DirectedGraphNode {
    let edges = node
        .transitions
        .iter()
        .enumerate()
        .flat_map(|(ti, transition)| {
            let targets: Vec<&str> = if transition.targets.is_empty() {
                vec![node.id.as_str()]
            } else {
                transition.targets.iter().map(String::as_str).collect()
            };
            targets
                .into_iter()
                .enumerate()
                .map(move |(gi, target)| DirectedGraphEdge {
                    id: format!("{}:{ti}:{gi}", node.id),
                    source: node.id.clone(),
                    target: target.to_string(),
                    label: DirectedGraphLabel {
                        text: transition.event.clone(),
                    },
                })
        })
        .collect();

    DirectedGraphNode {
        id: node.id.clone(),
        key: node.key.clone(),
        kind: node.kind,
        children: machine
            .children(&node.id)
            .into_iter()
            .map(|child| project(machine, child))
            .collect(),
        edges,
    }
}
