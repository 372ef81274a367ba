//! bagel-dot command-line interface.
//!
pub mod input;
pub mod output;
pub mod pipeline;

use std::path::PathBuf;

use bagel_error::Result;

pub use input::{default_output_path, resolve_input};
pub use output::emit;
pub use pipeline::process_file;

/// Options for running bagel-dot.
#[derive(Debug, Clone, Default)]
pub struct BagelOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub stdout: bool,
    pub config: Option<PathBuf>,
    pub check: bool,
    pub strict: bool,
    pub print_model: bool,
}

impl BagelOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }
}

/// Main entry point.
///
/// Returns the path written to, or `None` when the text went to stdout.
pub fn run_main(opts: &BagelOptions) -> Result<Option<PathBuf>> {
    let input = resolve_input(&opts.input)?;
    let text = process_file(opts, &input)?;
    emit(opts, &input, &text)
}
