//! Optional consistency check of a graph before rendering.
//!
//! Rendering never depends on this pass: a graph with dangling edges still
//! renders, Graphviz just draws the missing endpoints as plain nodes.

use std::collections::{HashMap, HashSet};
use std::fmt;

use bagel_error::{Error, ErrorKind};
use bagel_graph::{Graph, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Two nodes share an id.
    DuplicateNodeId,
    /// Two input slots of one node share an idx.
    DuplicateInputIdx,
    /// Edge source id names no node.
    UnknownSourceNode,
    /// Edge target id names no node.
    UnknownTargetNode,
    /// Edge target node has no input slot with the given idx.
    UnknownTargetInput,
}

impl DiagnosticKind {
    pub fn error_kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateNodeId | Self::DuplicateInputIdx => ErrorKind::DuplicateId,
            Self::UnknownSourceNode | Self::UnknownTargetNode | Self::UnknownTargetInput => {
                ErrorKind::InvalidReference
            }
        }
    }
}

/// A single finding of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    fn new(kind: DiagnosticKind, message: String) -> Self {
        Self { kind, message }
    }

    pub fn into_error(self) -> Error {
        let error = match self.kind.error_kind() {
            ErrorKind::DuplicateId => Error::duplicate_id(self.message),
            _ => Error::invalid_reference(self.message),
        };
        error.with_operation("dot::validate")
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Report duplicate ids and dangling edge references.
///
/// Diagnostics come in document order: node findings first, then edges.
/// When an id is duplicated, edges resolve against its first node.
pub fn validate(graph: &Graph) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut by_id: HashMap<u64, &Node> = HashMap::with_capacity(graph.nodes.len());

    for node in &graph.nodes {
        if by_id.contains_key(&node.id) {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::DuplicateNodeId,
                format!("node id {} appears more than once", node.id),
            ));
        } else {
            by_id.insert(node.id, node);
        }

        let mut seen = HashSet::with_capacity(node.inputs.len());
        for slot in &node.inputs {
            if !seen.insert(slot.idx) {
                diagnostics.push(Diagnostic::new(
                    DiagnosticKind::DuplicateInputIdx,
                    format!("node {} has more than one input with idx {}", node.id, slot.idx),
                ));
            }
        }
    }

    for (pos, edge) in graph.edges.iter().enumerate() {
        if !by_id.contains_key(&edge.from_node_id) {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::UnknownSourceNode,
                format!("edge {pos} starts at unknown node {}", edge.from_node_id),
            ));
        }

        match by_id.get(&edge.to_node_id) {
            None => diagnostics.push(Diagnostic::new(
                DiagnosticKind::UnknownTargetNode,
                format!("edge {pos} ends at unknown node {}", edge.to_node_id),
            )),
            Some(target) if target.input(edge.to_node_input_idx).is_none() => {
                diagnostics.push(Diagnostic::new(
                    DiagnosticKind::UnknownTargetInput,
                    format!(
                        "edge {pos} ends at input {} which node {} does not have",
                        edge.to_node_input_idx, edge.to_node_id
                    ),
                ))
            }
            Some(_) => {}
        }
    }

    diagnostics
}
