//! JavaScript code generation
//!
//! This module walks a parsed [`Program`](crate::parser::ast::Program) and
//! lowers it to JavaScript source text:
//! - [`engine`]: the [`Generator`](engine::Generator), functions, blocks and `defer`
//! - `statements`: statement lowering (`let`, `if`, `match`, jumps)
//! - `loops`: the three `for` loop forms
//! - `expressions`: literals, calls and operators
//! - `builtins`: intrinsics that map onto host primitives (`print`)
//! - `names`: identifier spelling in the output
//!
//! # Lowering Model
//!
//! Generation is deterministic and cannot fail. It performs no semantic
//! validation, and types are dropped since the target is dynamically typed.
//! Calls are checked against the set of function names declared anywhere in
//! the program; a call to an unknown name lowers to nothing and is only
//! reported through `tracing`. A range used anywhere but a loop header is
//! treated the same way.

mod builtins;
pub mod emitter;
pub mod engine;
mod expressions;
mod loops;
mod names;
mod statements;

pub use engine::{generate, Generator};
