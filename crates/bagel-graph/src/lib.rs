//! Graph model for bagel computation graphs.
//!
//! A [`Graph`] is decoded once from a YAML document, read by the renderer and
//! then dropped. Nothing in this crate checks cross references between edges
//! and nodes; see `bagel_dot::validate` for that.
//!
//! # Module Structure
//!
//! - [`model`]: `Graph`, `Node`, `InputSlot`, `OutputSlot`, `Edge`, `NodeKind`
//! - [`load`]: YAML decoding and file loading

pub mod load;
pub mod model;

pub use model::{Edge, Graph, InputSlot, Node, NodeKind, OutputSlot};
