//! Decoding graph documents.
//!
//! The on-disk format is YAML (JSON documents are accepted as well, being a
//! subset of YAML). Missing required keys and non-numeric values are reported
//! as `ErrorKind::ParseFailed`; unrecognized keys are ignored.

use std::fs;
use std::path::Path;
use std::time::Instant;

use bagel_error::{Error, Result};
use tracing::debug;

use crate::model::Graph;

impl Graph {
    /// Decode a graph from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|err| {
            let mut error = Error::parse_failed(err.to_string());
            if let Some(location) = err.location() {
                error = error
                    .with_context("line", location.line().to_string())
                    .with_context("column", location.column().to_string());
            }
            error
                .with_operation("graph::from_yaml_str")
                .set_source(err)
        })
    }

    /// Read and decode a graph document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let start = Instant::now();

        let text = fs::read_to_string(path).map_err(|err| {
            Error::from(err)
                .with_operation("graph::from_path")
                .with_context("path", path.display().to_string())
        })?;

        let graph = Self::from_yaml_str(&text).map_err(|err| {
            err.with_operation("graph::from_path")
                .with_context("path", path.display().to_string())
        })?;

        debug!(
            path = %path.display(),
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            secs = start.elapsed().as_secs_f64(),
            "graph loaded"
        );
        Ok(graph)
    }

    /// Pretty JSON dump of the model.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            Error::serialization_failed(err.to_string())
                .with_operation("graph::to_json_pretty")
                .set_source(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use bagel_error::ErrorKind;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Edge, InputSlot, Node};

    const SMALL: &str = r#"
nodes:
  - id: 0
    type: INPUT
    inputs: []
  - id: 1
    type: SIN
    inputs:
      - {idx: 0, type: SUM, bias: 0.5, default: 0}
edges:
  - {fromNodeId: 0, fromNodeOutputIdx: 0, toNodeId: 1, toNodeInputIdx: 0, weight: 1.5}
"#;

    #[test]
    fn decodes_nodes_and_edges_in_order() {
        let graph = Graph::from_yaml_str(SMALL).unwrap();
        let expected = Graph::new(
            vec![
                Node::new(0, "INPUT", vec![]),
                Node::new(1, "SIN", vec![InputSlot::new(0, "SUM", 0.5, 0.0)]),
            ],
            vec![Edge::new(0, 1, 0, 1.5)],
        );
        assert_eq!(graph, expected);
    }

    #[test]
    fn missing_edges_section_means_no_edges() {
        let graph = Graph::from_yaml_str("nodes:\n  - {id: 7, type: OUTPUT}\n").unwrap();
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.nodes[0].inputs.is_empty());
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn accepts_writer_metadata() {
        let text = r#"
nodes:
  - id: 3
    type: EXTERN
    extern_name: my_fn
    name: ext
    inputs:
      - {idx: 0, type: WEIGHTED_SUM, bias: 0, default: 0, name: x}
    outputs:
      - {idx: 0, name: y}
edges:
  - {fromNodeId: 3, fromNodeOutputIdx: 0, toNodeId: 3, toNodeInputIdx: 0, weight: 1, ignore_for_sort: 1}
"#;
        let graph = Graph::from_yaml_str(text).unwrap();
        let node = &graph.nodes[0];
        assert_eq!(node.extern_name.as_deref(), Some("my_fn"));
        assert_eq!(node.name.as_deref(), Some("ext"));
        assert_eq!(node.inputs[0].name.as_deref(), Some("x"));
        assert_eq!(node.outputs.len(), 1);
        assert_eq!(graph.edges[0].ignore_for_sort, Some(1));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let text = "nodes:\n  - {id: 1, type: ABS, color: red}\nversion: 2\n";
        let graph = Graph::from_yaml_str(text).unwrap();
        assert_eq!(graph.nodes[0].node_type, "ABS");
    }

    #[test]
    fn missing_id_is_a_parse_error() {
        let err = Graph::from_yaml_str("nodes:\n  - {type: ABS}\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailed);
        assert_eq!(err.operation(), "graph::from_yaml_str");
        assert!(err.message().contains("id"), "{err}");
    }

    #[test]
    fn non_numeric_weight_is_a_parse_error() {
        let text = "nodes: []\nedges:\n  - {fromNodeId: 0, fromNodeOutputIdx: 0, toNodeId: 1, toNodeInputIdx: 0, weight: heavy}\n";
        let err = Graph::from_yaml_str(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailed);
    }

    #[test]
    fn negative_port_indices_are_accepted() {
        let text = "nodes:\n  - {id: 1, type: SIN, inputs: [{idx: -1, type: SUM, bias: 0, default: 0}]}\nedges:\n  - {fromNodeId: 0, fromNodeOutputIdx: 0, toNodeId: 1, toNodeInputIdx: -1, weight: 1}\n";
        let graph = Graph::from_yaml_str(text).unwrap();
        assert_eq!(graph.nodes[0].inputs[0].idx, -1);
        assert_eq!(graph.edges[0].to_node_input_idx, -1);
        assert!(graph.nodes[0].input(-1).is_some());
    }

    #[test]
    fn json_documents_are_accepted() {
        let text = r#"{"nodes": [{"id": 2, "type": "OUTPUT", "inputs": []}], "edges": []}"#;
        let graph = Graph::from_yaml_str(text).unwrap();
        assert_eq!(graph.nodes[0].id, 2);
    }

    #[test]
    fn json_dump_uses_document_keys() {
        let graph = Graph::new(
            vec![Node::new(0, "INPUT", vec![])],
            vec![Edge::new(0, 1, 2, 0.25)],
        );
        let json = graph.to_json_pretty().unwrap();
        assert!(json.contains("\"type\": \"INPUT\""), "{json}");
        assert!(json.contains("\"toNodeInputIdx\": 2"), "{json}");
        assert!(!json.contains("ignore_for_sort"), "{json}");
    }
}
