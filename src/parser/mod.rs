//! Glint source code parser
//!
//! This module transforms Glint source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`cursor`]: Clamped lookahead view over the token sequence
//! - [`parse`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Language
//!
//! - Functions: `fn name(a: int, b: str[]): bool { ... }`
//! - Types: `int`, `str`, `bool`, `void`, each optionally `[]`
//! - Statements: `let`, `return`, `if`/`elif`/`else`, `match`, `for`,
//!   `break`, `skip`, `defer`, and call expressions
//! - Expressions: integer, string (`'...'`), boolean and array literals,
//!   variables, calls, and the binary operators `* / + - .. < <= > >= == !=
//!   and or`
//! - Comments start with `#` and run to end of line
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with a shunting-yard operator stack
//! for binary expressions. No external parser generator dependencies.

pub mod ast;
pub mod cursor;
mod declarations;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;

pub use parse::{parse_source, ParseError, Parser};
