//! # Introduction
//!
//! Glint compiles a small statically-typed, C-like scripting language to
//! JavaScript in a single forward pass.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST → Generator → JavaScript
//! ```
//!
//! 1. [`parser`]: scans the source into tokens and parses them into an AST
//!    ([`parser::ast::Program`]).
//! 2. [`codegen`]: walks the AST and writes JavaScript text.
//! 3. [`driver`]: runs the stages for a chosen [`driver::Emit`] mode, as used
//!    by the `glint` binary.
//!
//! ## Example
//!
//! ```
//! let js = glint::compile("fn main(): void { print('hi') }", "hello").unwrap();
//! assert_eq!(js, "function main() {\n    console.log('hi');\n}\n\nmain();\n");
//! ```
//!
//! No type checking or scope validation is performed; the first syntax error
//! aborts compilation.

pub mod codegen;
pub mod driver;
pub mod parser;

pub use driver::{compile, run_pipeline, CompileError, Emit};
