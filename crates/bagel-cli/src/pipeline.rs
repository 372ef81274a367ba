//! Core processing pipeline: load → check → render.

use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

use bagel_dot::{RenderConfig, render_with_config, validate};
use bagel_error::Result;
use bagel_graph::Graph;

use crate::BagelOptions;

/// Process one graph document and return the text to emit.
///
/// 1. Load the render configuration (defaults unless `--config`)
/// 2. Decode the YAML document
/// 3. Optionally check references (`--check`, fatal with `--strict`)
/// 4. Render DOT, or dump the model as JSON (`--print-model`)
pub fn process_file(opts: &BagelOptions, input: &Path) -> Result<String> {
    let config = match &opts.config {
        Some(path) => RenderConfig::from_path(path)?,
        None => RenderConfig::default(),
    };

    // 1. Load
    let load_start = Instant::now();
    let graph = Graph::from_path(input)?;
    info!(
        "Loading {}: {:.2}s ({} nodes, {} edges)",
        input.display(),
        load_start.elapsed().as_secs_f64(),
        graph.nodes.len(),
        graph.edges.len()
    );

    // 2. Check
    if opts.check || opts.strict {
        check_graph(&graph, opts.strict)?;
    }

    if opts.print_model {
        return graph.to_json_pretty();
    }

    // 3. Render
    let render_start = Instant::now();
    let title = input.display().to_string();
    let dot = render_with_config(&title, &graph, &config);
    info!(
        "Graph rendering: {:.2}s",
        render_start.elapsed().as_secs_f64()
    );

    Ok(dot)
}

fn check_graph(graph: &Graph, strict: bool) -> Result<()> {
    let diagnostics = validate(graph);
    if diagnostics.is_empty() {
        info!("Check: no problems found");
        return Ok(());
    }

    for diagnostic in &diagnostics {
        warn!(kind = ?diagnostic.kind, "{diagnostic}");
        eprintln!("warning: {diagnostic}");
    }

    if strict {
        let count = diagnostics.len();
        if let Some(first) = diagnostics.into_iter().next() {
            return Err(first
                .into_error()
                .with_context("problems", count.to_string()));
        }
    }
    Ok(())
}
