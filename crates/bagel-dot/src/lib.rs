//! Graph rendering module for producing DOT format output.
//!
//! This module turns a bagel [`Graph`] into a Graphviz document: one `Mrecord`
//! node per graph node, showing its input slots and its single output port,
//! and one statement per weighted edge.
//!
//! # Module Structure
//!
//! - [`dot`]: DOT format utilities and the `DotBuilder`
//! - [`config`]: Render configuration (pen width, canvas, spacing, fills)
//! - [`render`]: Node and edge statements
//! - [`check`]: Optional consistency check (duplicates, dangling edges)

pub mod check;
pub mod config;
pub mod dot;
mod render;

use bagel_graph::Graph;

pub use check::{Diagnostic, DiagnosticKind, validate};
pub use config::RenderConfig;
pub use dot::DotBuilder;
pub use render::render_with_config;

// ============================================================================
// Public API
// ============================================================================

/// Render the graph to DOT format with the default configuration.
///
/// `title` names the digraph, usually the path of the source document.
/// The output depends only on the arguments; rendering the same graph twice
/// yields identical text.
pub fn render(title: &str, graph: &Graph) -> String {
    render_with_config(title, graph, &RenderConfig::default())
}
