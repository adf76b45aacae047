// AST (Abstract Syntax Tree) definitions for Glint programs

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Base types named by the type keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    Int,
    Str,
    Bool,
    Void,
}

/// Declared type: a base type, optionally as an array (`int[]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Type {
    pub base: BaseType,
    pub is_array: bool,
}

impl Type {
    pub fn new(base: BaseType) -> Self {
        Type {
            base,
            is_array: false,
        }
    }

    pub fn with_array(mut self) -> Self {
        self.is_array = true;
        self
    }
}

/// Binary operators, in the order of the precedence table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Multiplicative
    Multiply,
    Divide,
    // Additive
    Add,
    Subtract,
    // Half-open integer interval, only meaningful as loop bounds
    Range,
    // Relational / equality
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Multiply | BinaryOp::Divide => 5,
            BinaryOp::Add | BinaryOp::Subtract => 4,
            BinaryOp::Range => 3,
            BinaryOp::Lt
            | BinaryOp::Le
            | BinaryOp::Gt
            | BinaryOp::Ge
            | BinaryOp::Eq
            | BinaryOp::Ne => 2,
            BinaryOp::And | BinaryOp::Or => 1,
        }
    }
}

/// Function parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub param_type: Type,
}

/// Expressions. Every child is exclusively owned by its parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Str(String),
    Int(i64),
    Bool(bool),
    Array(Vec<Expr>),
    Variable(String),
    Call {
        name: String,
        args: Vec<Expr>,
        location: SourceLocation,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// `let name: type = init`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: String,
    pub var_type: Type,
    pub init: Expr,
}

/// A condition guarding a block (`if` and `elif` arms)
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub condition: Expr,
    pub body: Block,
}

/// `if ... elif ... else ...`
#[derive(Debug, Clone, PartialEq)]
pub struct IfChain {
    pub primary: Branch,
    pub elifs: Vec<Branch>,
    pub else_body: Option<Block>,
}

/// One `pattern { ... }` arm of a match
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCase {
    pub pattern: Expr,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchStmt {
    pub scrutinee: Expr,
    pub cases: Vec<MatchCase>,
    pub default: Option<Block>,
}

/// Name bound to each iteration when a loop has no explicit binding
pub const IMPLICIT_LOOP_VAR: &str = "it";

#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    pub binding: Option<String>,
    pub iterable: Option<Expr>,
    pub body: Block,
}

/// The three loop forms a `for` statement can take
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopShape<'a> {
    Infinite,
    Counted { start: &'a Expr, end: &'a Expr },
    Each(&'a Expr),
}

impl ForLoop {
    /// The loop variable, `it` unless a binding was written.
    pub fn variable(&self) -> &str {
        self.binding.as_deref().unwrap_or(IMPLICIT_LOOP_VAR)
    }

    pub fn shape(&self) -> LoopShape<'_> {
        match &self.iterable {
            None => LoopShape::Infinite,
            Some(Expr::Binary {
                op: BinaryOp::Range,
                left,
                right,
            }) => LoopShape::Counted {
                start: left,
                end: right,
            },
            Some(expr) => LoopShape::Each(expr),
        }
    }
}

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expr(Expr),
    Return(Expr),
    VarDecl(VarDecl),
    If(IfChain),
    Match(MatchStmt),
    For(ForLoop),
    Break,
    Skip,
    Defer(Expr),
}

/// A brace-delimited statement sequence.
///
/// `declarations` indexes the `let` statements in source order so later passes
/// can walk the declared locals without re-scanning or sharing nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
    declarations: Vec<usize>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        let declarations = statements
            .iter()
            .enumerate()
            .filter(|(_, stmt)| matches!(stmt, Stmt::VarDecl(_)))
            .map(|(index, _)| index)
            .collect();
        Block {
            statements,
            declarations,
        }
    }

    /// Variable declarations of this block, in declaration order.
    pub fn locals(&self) -> impl Iterator<Item = &VarDecl> + '_ {
        self.declarations
            .iter()
            .filter_map(|&index| match self.statements.get(index) {
                Some(Stmt::VarDecl(decl)) => Some(decl),
                _ => None,
            })
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// `fn name(params): return_type { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub params: Vec<Param>,
    pub return_type: Type,
    pub body: Block,
    pub location: SourceLocation,
}

/// Top-level program structure
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub name: String,
    pub functions: Vec<Function>,
}

impl Program {
    pub fn new(name: impl Into<String>) -> Self {
        Program {
            name: name.into(),
            functions: Vec::new(),
        }
    }
}
