//! Writing the generated text.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use bagel_error::Result;

use crate::BagelOptions;
use crate::input::default_output_path;

/// Write `text` to its destination.
///
/// `--stdout`, and model dumps without `--output`, go to standard output.
/// Otherwise the text is written to `--output` or to `<input>.dot`,
/// replacing any existing file.
pub fn emit(opts: &BagelOptions, input: &Path, text: &str) -> Result<Option<PathBuf>> {
    if opts.stdout || (opts.print_model && opts.output.is_none()) {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()?;
        return Ok(None);
    }

    let path = opts
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(input));
    fs::write(&path, text).map_err(|err| {
        bagel_error::Error::from(err)
            .with_operation("cli::emit")
            .with_context("path", path.display().to_string())
    })?;
    info!(path = %path.display(), bytes = text.len(), "output written");
    Ok(Some(path))
}
