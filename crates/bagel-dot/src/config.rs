//! Render configuration.
//!
//! Every knob of the DOT output lives here instead of in format strings. The
//! defaults reproduce the classic bagel output byte for byte.

use std::fs;
use std::path::Path;

use bagel_error::{Error, Result};
use bagel_graph::NodeKind;
use serde::Deserialize;

use crate::dot::pen_width;

/// Fill of `INPUT` nodes (pale green).
pub const INPUT_FILL: &str = "#bbeebb";
/// Fill of `OUTPUT` nodes (pale blue).
pub const OUTPUT_FILL: &str = "#bbccff";
/// Fill of every other node (pale yellow).
pub const COMPUTE_FILL: &str = "#ffff70";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Stroke thickness of node outlines and edges (`penwidth`).
    pub line_width: f64,
    /// Layout bounding box in inches (`size`).
    pub canvas_size: (u32, u32),
    /// Minimum distance between ranks (`ranksep`).
    pub rank_sep: f64,
    /// Minimum distance between nodes of the same rank (`nodesep`).
    pub node_sep: f64,
    pub input_fill: String,
    pub output_fill: String,
    pub compute_fill: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            canvas_size: (100, 100),
            rank_sep: 1.0,
            node_sep: 1.0,
            input_fill: INPUT_FILL.to_string(),
            output_fill: OUTPUT_FILL.to_string(),
            compute_fill: COMPUTE_FILL.to_string(),
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: RenderConfig = toml::from_str(text).map_err(|err| {
            Error::config_invalid(err.message().to_string())
                .with_operation("config::from_toml_str")
                .set_source(err)
        })?;
        config.check()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            Error::from(err)
                .with_operation("config::from_path")
                .with_context("path", path.display().to_string())
        })?;
        Self::from_toml_str(&text).map_err(|err| {
            err.with_operation("config::from_path")
                .with_context("path", path.display().to_string())
        })
    }

    /// Fill color for a node category.
    pub fn fill_for(&self, kind: NodeKind<'_>) -> &str {
        match kind {
            NodeKind::Input => self.input_fill.as_str(),
            NodeKind::Output => self.output_fill.as_str(),
            NodeKind::Other(_) => self.compute_fill.as_str(),
        }
    }

    /// `penwidth` attribute value.
    pub fn pen_width_attr(&self) -> String {
        pen_width(self.line_width)
    }

    /// `size` attribute value, e.g. `100,100`.
    pub fn canvas_size_attr(&self) -> String {
        format!("{},{}", self.canvas_size.0, self.canvas_size.1)
    }

    fn check(&self) -> Result<()> {
        let lengths = [
            ("line_width", self.line_width),
            ("rank_sep", self.rank_sep),
            ("node_sep", self.node_sep),
        ];
        for (field, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::config_invalid(format!(
                    "{field} must be a non-negative number, got {value}"
                ))
                .with_context("field", field));
            }
        }
        Ok(())
    }
}
