//! Pipeline entry
//!
//! Runs the stages in order for one source unit and stops after the stage
//! the caller asked for. Dump modes write a listing to the supplied writer
//! and return empty text; translation returns the JavaScript.

use crate::codegen::generate;
use crate::parser::lexer::tokenize;
use crate::parser::{ParseError, Parser};
use std::io::{self, Write};
use thiserror::Error;

/// What the pipeline produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Emit {
    /// One token per line
    Tokens,
    /// The parsed program tree
    Ast,
    /// JavaScript output
    #[default]
    Js,
}

/// Any failure of a compilation
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to write dump: {0}")]
    Io(#[from] io::Error),
}

/// Run the pipeline on `source`, naming the program `name`.
pub fn run_pipeline<W: Write>(
    source: &str,
    name: &str,
    emit: Emit,
    dump: &mut W,
) -> Result<String, CompileError> {
    let tokens = {
        let _span = tracing::info_span!("scan", program = %name).entered();
        tokenize(source)
    };

    if emit == Emit::Tokens {
        for token in &tokens {
            writeln!(dump, "{token}")?;
        }
        return Ok(String::new());
    }

    let program = {
        let _span = tracing::info_span!("parse", program = %name).entered();
        Parser::from_tokens(tokens).with_name(name).parse_program()?
    };

    if emit == Emit::Ast {
        writeln!(dump, "{program:#?}")?;
        return Ok(String::new());
    }

    let _span = tracing::info_span!("generate", program = %name).entered();
    Ok(generate(&program))
}

/// Translate `source` to JavaScript.
pub fn compile(source: &str, name: &str) -> Result<String, CompileError> {
    run_pipeline(source, name, Emit::Js, &mut io::sink())
}
