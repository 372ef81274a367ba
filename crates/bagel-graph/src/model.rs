//! Core types of a computation graph.

use serde::{Deserialize, Serialize};

/// Type tag of input nodes.
pub const INPUT_TYPE: &str = "INPUT";
/// Type tag of output nodes.
pub const OUTPUT_TYPE: &str = "OUTPUT";

// Graph

/// A computation graph: nodes and weighted edges, both in document order.
///
/// Document order is kept as-is; it decides the order of statements in the
/// rendered output but has no effect on the relationships drawn.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    /// Writers omit this section entirely when a graph has no edges.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Total number of input slots across all nodes.
    pub fn input_count(&self) -> usize {
        self.nodes.iter().map(|n| n.inputs.len()).sum()
    }
}

// Node

/// One computational unit of the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: u64,
    /// Type tag, e.g. "INPUT", "OUTPUT", "SIN", ">0". Also names the output port.
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub inputs: Vec<InputSlot>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<OutputSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Symbol name of an EXTERN node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extern_name: Option<String>,
    /// Name of the graph an EXTERN/SUBGRAPH node refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subgraph_name: Option<String>,
}

impl Node {
    /// Create a node with no optional metadata.
    pub fn new(id: u64, node_type: impl Into<String>, inputs: Vec<InputSlot>) -> Self {
        Self {
            id,
            node_type: node_type.into(),
            inputs,
            outputs: Vec::new(),
            name: None,
            extern_name: None,
            subgraph_name: None,
        }
    }

    pub fn kind(&self) -> NodeKind<'_> {
        NodeKind::from_tag(&self.node_type)
    }

    pub fn input(&self, idx: i64) -> Option<&InputSlot> {
        self.inputs.iter().find(|slot| slot.idx == idx)
    }
}

/// Node category derived from the free-form type tag.
///
/// Every tag maps to exactly one variant; unknown tags are `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind<'a> {
    Input,
    Output,
    Other(&'a str),
}

impl<'a> NodeKind<'a> {
    pub fn from_tag(tag: &'a str) -> Self {
        match tag {
            INPUT_TYPE => Self::Input,
            OUTPUT_TYPE => Self::Output,
            other => Self::Other(other),
        }
    }
}

// Slots

/// One input port of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSlot {
    /// Port index; any integer, negative values included.
    pub idx: i64,
    /// Merge type of the port, e.g. "SUM", "WEIGHTED_SUM".
    #[serde(rename = "type")]
    pub slot_type: String,
    pub bias: f64,
    pub default: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl InputSlot {
    pub fn new(idx: i64, slot_type: impl Into<String>, bias: f64, default: f64) -> Self {
        Self {
            idx,
            slot_type: slot_type.into(),
            bias,
            default,
            name: None,
        }
    }
}

/// Output port descriptor. Rendering always draws a single output port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSlot {
    pub idx: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// Edge

/// Directed, weighted connection from a node's output to another node's input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub from_node_id: u64,
    /// Kept for completeness; every node renders one output port.
    pub from_node_output_idx: i64,
    pub to_node_id: u64,
    pub to_node_input_idx: i64,
    pub weight: f64,
    #[serde(
        rename = "ignore_for_sort",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ignore_for_sort: Option<i64>,
}

impl Edge {
    pub fn new(from_node_id: u64, to_node_id: u64, to_node_input_idx: i64, weight: f64) -> Self {
        Self {
            from_node_id,
            from_node_output_idx: 0,
            to_node_id,
            to_node_input_idx,
            weight,
            ignore_for_sort: None,
        }
    }
}
