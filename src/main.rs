// Glint: compile Glint source files to JavaScript

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use glint::parser::parse::DEFAULT_PROGRAM_NAME;
use glint::{run_pipeline, Emit};

#[derive(Parser, Debug)]
#[command(name = "glint", version, about = "Compile Glint source to JavaScript")]
struct Cli {
    /// Glint source file
    input: PathBuf,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stage to stop at and print
    #[arg(long, value_enum, default_value_t = Emit::Js)]
    emit: Emit,
}

fn main() -> ExitCode {
    // Logging is off unless GLINT_LOG holds a filter, e.g. GLINT_LOG=glint=debug
    if let Ok(filter) = EnvFilter::try_from_env("GLINT_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(io::stderr)
            .init();
        tracing::debug!("tracing initialized");
    }

    let cli = Cli::parse();

    let source = match fs::read_to_string(&cli.input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: failed to read '{}': {}", cli.input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let name = cli
        .input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(DEFAULT_PROGRAM_NAME);

    // Dumps are buffered so a failed compilation writes nothing at all.
    let mut buffer = Vec::new();
    let output = match run_pipeline(&source, name, cli.emit, &mut buffer) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    buffer.extend_from_slice(output.as_bytes());

    let written = match &cli.output {
        Some(path) => fs::write(path, &buffer),
        None => io::stdout().lock().write_all(&buffer),
    };

    if let Err(e) = written {
        eprintln!("Error: failed to write output: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
