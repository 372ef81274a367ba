//! DOT format utilities for graph rendering.

use std::fmt::Write;

/// Escape characters that would end a quoted DOT string.
pub fn escape_quoted(input: &str) -> String {
    input.replace('"', "\\\"")
}

/// Escape text placed inside a record label field.
///
/// `>` would otherwise be read as the end of a `<port>` marker.
pub fn escape_record_text(input: &str) -> String {
    input.replace('>', "\\>")
}

/// Format a value with two decimals, right-aligned in five columns (`%5.2f`).
///
/// Non-finite values are spelled the C way (`nan`, `inf`, `-inf`).
pub fn fixed2(value: f64) -> String {
    if value.is_nan() {
        format!("{:>5}", "nan")
    } else if value.is_infinite() {
        format!("{:>5}", if value < 0.0 { "-inf" } else { "inf" })
    } else {
        format!("{value:5.2}")
    }
}

/// Format a pen width the way `%f` does (six decimals).
pub fn pen_width(value: f64) -> String {
    format!("{value:.6}")
}

/// Record identifier of a node: `node` plus the id zero-padded to five digits.
pub fn node_name(id: u64) -> String {
    format!("node{id:05}")
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// A DOT graph builder for constructing valid DOT output.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Create a new directed graph with the given (quoted) name.
    pub fn new(name: &str) -> Self {
        Self::with_capacity(name, 4096)
    }

    /// Like [`DotBuilder::new`], reserving `capacity` bytes up front.
    pub fn with_capacity(name: &str, capacity: usize) -> Self {
        let mut output = String::with_capacity(capacity);
        let _ = writeln!(output, "digraph \"{}\" {{", escape_quoted(name));
        Self { output, indent: 1 }
    }

    /// Add a graph attribute.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{}=\"{}\";", key, escape_quoted(value));
        self
    }

    /// Add a complete statement at the current indent level.
    pub fn statement(&mut self, text: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        self.output.push_str(text);
        self.output.push('\n');
        self
    }

    /// Add a blank line for readability.
    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Change the indent level used by following statements.
    pub fn set_indent(&mut self, level: usize) -> &mut Self {
        self.indent = level;
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}
