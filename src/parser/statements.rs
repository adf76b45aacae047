//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! block     ::= "{" statement* "}"
//! statement ::= expr_stmt | return_stmt | let_stmt | if_stmt | match_stmt
//!             | for_stmt | "break" | "skip" | "defer" expression
//! let_stmt  ::= "let" IDENT ":" type "=" expression
//! if_stmt   ::= "if" expression block ("elif" expression block)* ["else" block]
//! match_stmt::= "match" expression "{" (expression block)* ["else" block] "}"
//! for_stmt  ::= "for" [IDENT "in"] [expression] block
//! ```
//!
//! Statements have no terminator; each form ends where its grammar does.
//! The dispatching token is peeked and only consumed once a rule is chosen.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a brace-delimited block
    pub(crate) fn parse_block(&mut self, ctx: &str) -> Result<Block, ParseError> {
        self.expect_lbrace(ctx)?;

        let mut statements = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.cursor.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        self.expect_rbrace("after block")?;
        Ok(Block::new(statements))
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.peek_kind() {
            TokenKind::Ident(_) => Ok(Stmt::Expr(self.parse_expression()?)),
            TokenKind::Return => {
                self.cursor.advance();
                Ok(Stmt::Return(self.parse_expression()?))
            }
            TokenKind::Let => {
                self.cursor.advance();
                self.parse_variable_declaration()
            }
            TokenKind::If => {
                self.cursor.advance();
                self.parse_if_chain()
            }
            TokenKind::Match => {
                self.cursor.advance();
                self.parse_match_statement()
            }
            TokenKind::For => {
                self.cursor.advance();
                self.parse_for_loop()
            }
            TokenKind::Break => {
                self.cursor.advance();
                Ok(Stmt::Break)
            }
            TokenKind::Skip => {
                self.cursor.advance();
                Ok(Stmt::Skip)
            }
            TokenKind::Defer => {
                self.cursor.advance();
                Ok(Stmt::Defer(self.parse_expression()?))
            }
            found => Err(ParseError::ExpectedStatement {
                found: found.clone(),
                location: self.current_location(),
            }),
        }
    }

    /// Parse variable declaration: name: type = init
    fn parse_variable_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect_identifier("after 'let'")?;
        self.expect_colon("after variable name")?;
        let var_type = self.parse_type()?;
        self.expect_token(&TokenKind::Eq, "in variable declaration")?;
        let init = self.parse_expression()?;

        Ok(Stmt::VarDecl(VarDecl {
            name,
            var_type,
            init,
        }))
    }

    /// Parse if / elif / else chain
    fn parse_if_chain(&mut self) -> Result<Stmt, ParseError> {
        let primary = self.parse_branch("after if condition")?;

        let mut elifs = Vec::new();
        while self.match_token(&TokenKind::Elif) {
            elifs.push(self.parse_branch("after elif condition")?);
        }

        let else_body = if self.match_token(&TokenKind::Else) {
            Some(self.parse_block("after 'else'")?)
        } else {
            None
        };

        Ok(Stmt::If(IfChain {
            primary,
            elifs,
            else_body,
        }))
    }

    fn parse_branch(&mut self, ctx: &str) -> Result<Branch, ParseError> {
        let condition = self.parse_expression()?;
        let body = self.parse_block(ctx)?;
        Ok(Branch { condition, body })
    }

    /// Parse match statement: scrutinee { pattern { } ... else { } }
    fn parse_match_statement(&mut self) -> Result<Stmt, ParseError> {
        let scrutinee = self.parse_expression()?;
        self.expect_lbrace("before match cases")?;

        let mut cases = Vec::new();
        while !self.check(&TokenKind::RBrace)
            && !self.check(&TokenKind::Else)
            && !self.cursor.is_at_end()
        {
            let pattern = self.parse_expression()?;
            let body = self.parse_block("after match pattern")?;
            cases.push(MatchCase { pattern, body });
        }

        let default = if self.match_token(&TokenKind::Else) {
            Some(self.parse_block("after 'else'")?)
        } else {
            None
        };

        self.expect_rbrace("after match cases")?;

        Ok(Stmt::Match(MatchStmt {
            scrutinee,
            cases,
            default,
        }))
    }

    /// Parse for loop: [binding in] [iterable] block
    fn parse_for_loop(&mut self) -> Result<Stmt, ParseError> {
        let binding = match (self.peek_kind(), &self.cursor.lookahead(1).kind) {
            (TokenKind::Ident(name), TokenKind::In) => {
                let name = name.clone();
                self.cursor.advance();
                self.cursor.advance();
                Some(name)
            }
            _ => None,
        };

        let iterable = if self.check(&TokenKind::LBrace) {
            None
        } else {
            Some(self.parse_expression()?)
        };

        let body = self.parse_block("before loop body")?;

        Ok(Stmt::For(ForLoop {
            binding,
            iterable,
            body,
        }))
    }
}
