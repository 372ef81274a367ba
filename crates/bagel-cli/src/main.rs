use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use bagel_cli::{BagelOptions, run_main};
use bagel_error::{ErrorKind, Result};

#[derive(Parser, Debug)]
#[command(
    name = "bagel-dot",
    about = "Render a bagel YAML graph as a Graphviz DOT document",
    version
)]
pub struct Cli {
    /// Graph document (YAML) to render
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output file path (default: FILE with ".dot" appended)
    #[arg(short = 'o', long = "output", value_name = "FILE", conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Print the DOT document to stdout instead of writing a file
    #[arg(long, default_value_t = false)]
    stdout: bool,

    /// TOML file overriding pen width, canvas size, spacing and fill colors
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report duplicate ids and dangling edges before rendering
    #[arg(long, default_value_t = false)]
    check: bool,

    /// Like --check, but fail instead of rendering when problems are found
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Print the parsed graph model as JSON instead of rendering (to --output if given)
    #[arg(long, default_value_t = false)]
    print_model: bool,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = BagelOptions {
        input: args.file,
        output: args.output,
        stdout: args.stdout,
        config: args.config,
        check: args.check,
        strict: args.strict,
        print_model: args.print_model,
    };

    let result = run_main(&opts);

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");

    match result {
        Ok(Some(path)) => {
            eprintln!("Wrote {}", path.display());
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => {
            tracing::error!(error = %e, "execution failed");
            Err(e)
        }
    }
}

pub fn main() -> ExitCode {
    let args = Cli::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind().is_input_error() || e.kind() == ErrorKind::FileNotFound => {
            eprintln!("Error: {}", e.message());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
