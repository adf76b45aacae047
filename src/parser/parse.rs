//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser is a recursive descent matcher over a [`Cursor`]:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: function declarations, parameters and types
//! - `statements`: blocks and the statement forms
//! - `expressions`: operands and shunting-yard precedence climbing
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared cursor.
//!
//! There is no error recovery: the first mismatch is returned and no partial
//! tree escapes.

use crate::parser::ast::*;
use crate::parser::cursor::Cursor;
use crate::parser::lexer::{Lexer, Token, TokenKind};
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Parse error at {location}: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: TokenKind,
        location: SourceLocation,
    },

    #[error("Parse error at {location}: expected 'fn', found {found}")]
    ExpectedFunction {
        found: TokenKind,
        location: SourceLocation,
    },

    #[error("Parse error at {location}: expected statement, found {found}")]
    ExpectedStatement {
        found: TokenKind,
        location: SourceLocation,
    },

    #[error("Parse error at {location}: expected expression, found {found}")]
    ExpectedExpression {
        found: TokenKind,
        location: SourceLocation,
    },

    #[error("Parse error at {location}: expected type, found {found}")]
    ExpectedType {
        found: TokenKind,
        location: SourceLocation,
    },

    #[error("Parse error at {location}: integer literal {literal} is out of range")]
    IntegerOutOfRange {
        literal: String,
        location: SourceLocation,
    },
}

impl ParseError {
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::UnexpectedToken { location, .. }
            | ParseError::ExpectedFunction { location, .. }
            | ParseError::ExpectedStatement { location, .. }
            | ParseError::ExpectedExpression { location, .. }
            | ParseError::ExpectedType { location, .. }
            | ParseError::IntegerOutOfRange { location, .. } => *location,
        }
    }
}

/// Program name used when none is given
pub const DEFAULT_PROGRAM_NAME: &str = "main";

/// Recursive descent parser for Glint
pub struct Parser {
    pub(crate) cursor: Cursor,
    name: String,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        let tokens = Lexer::new(source).tokenize();
        Self::from_tokens(tokens)
    }

    /// Parse an already scanned token sequence.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            cursor: Cursor::new(tokens),
            name: DEFAULT_PROGRAM_NAME.to_string(),
        }
    }

    /// Name given to the resulting [`Program`].
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Parse the entire program (a sequence of function declarations)
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new(self.name.clone());

        loop {
            let token = self.cursor.advance().clone();
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::Fn => {
                    let function = self.parse_function(token.location)?;
                    program.functions.push(function);
                }
                found => {
                    return Err(ParseError::ExpectedFunction {
                        found,
                        location: token.location,
                    })
                }
            }
        }

        tracing::debug!(
            program = %program.name,
            functions = program.functions.len(),
            "parsed program"
        );
        Ok(program)
    }

    // ===== Helper methods =====

    pub(crate) fn peek_kind(&self) -> &TokenKind {
        &self.cursor.peek().kind
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.peek_kind()) == std::mem::discriminant(kind)
    }

    pub(crate) fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.cursor.peek().location
    }

    /// Consume a token of the given kind or fail naming what was expected.
    pub(crate) fn expect_token(
        &mut self,
        kind: &TokenKind,
        ctx: &str,
    ) -> Result<SourceLocation, ParseError> {
        if self.check(kind) {
            Ok(self.cursor.advance().location)
        } else {
            Err(self.unexpected(format!("{kind} {ctx}")))
        }
    }

    pub(crate) fn expect_lparen(&mut self, ctx: &str) -> Result<SourceLocation, ParseError> {
        self.expect_token(&TokenKind::LParen, ctx)
    }

    pub(crate) fn expect_rparen(&mut self, ctx: &str) -> Result<SourceLocation, ParseError> {
        self.expect_token(&TokenKind::RParen, ctx)
    }

    pub(crate) fn expect_lbrace(&mut self, ctx: &str) -> Result<SourceLocation, ParseError> {
        self.expect_token(&TokenKind::LBrace, ctx)
    }

    pub(crate) fn expect_rbrace(&mut self, ctx: &str) -> Result<SourceLocation, ParseError> {
        self.expect_token(&TokenKind::RBrace, ctx)
    }

    pub(crate) fn expect_colon(&mut self, ctx: &str) -> Result<SourceLocation, ParseError> {
        self.expect_token(&TokenKind::Colon, ctx)
    }

    pub(crate) fn expect_identifier(&mut self, ctx: &str) -> Result<String, ParseError> {
        if let TokenKind::Ident(name) = self.peek_kind() {
            let name = name.clone();
            self.cursor.advance();
            Ok(name)
        } else {
            Err(self.unexpected(format!("identifier {ctx}")))
        }
    }

    /// Error for the next token not being `expected`.
    pub(crate) fn unexpected(&self, expected: String) -> ParseError {
        let token = self.cursor.peek();
        ParseError::UnexpectedToken {
            expected,
            found: token.kind.clone(),
            location: token.location,
        }
    }
}

/// Scan and parse `source` into a [`Program`] called `name`.
pub fn parse_source(source: &str, name: &str) -> Result<Program, ParseError> {
    Parser::new(source).with_name(name).parse_program()
}
