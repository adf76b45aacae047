//! Expression parsing implementation
//!
//! Binary expressions are parsed with a shunting-yard operator stack:
//! parse an operand, then for each following operator reduce every pending
//! operator whose precedence is greater than or equal to it before pushing
//! it. Equal precedence therefore reduces left first, which makes every
//! operator left-associative.
//!
//! # Precedence (highest to lowest)
//!
//! | Tier | Operators |
//! |------|-----------|
//! | 5 | `*` `/` |
//! | 4 | `+` `-` |
//! | 3 | `..` |
//! | 2 | `<` `<=` `>` `>=` `==` `!=` |
//! | 1 | `and` `or` |
//!
//! Operands are literals, array literals, `it`, variable references and
//! calls. A call is an identifier whose following token is `(`.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

/// Map an operator token to its binary operator.
fn binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::Star => BinaryOp::Multiply,
        TokenKind::Slash => BinaryOp::Divide,
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Subtract,
        TokenKind::DotDot => BinaryOp::Range,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::Le => BinaryOp::Le,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::Ge => BinaryOp::Ge,
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::Ne,
        TokenKind::And => BinaryOp::And,
        TokenKind::Or => BinaryOp::Or,
        _ => return None,
    };
    Some(op)
}

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        // Each pending operator is stacked with its left operand.
        let mut pending: Vec<(Expr, BinaryOp)> = Vec::new();
        let mut operand = self.parse_operand()?;

        while let Some(op) = binary_op(self.peek_kind()) {
            self.cursor.advance();

            while pending
                .last()
                .is_some_and(|(_, top)| top.precedence() >= op.precedence())
            {
                if let Some((left, top)) = pending.pop() {
                    operand = Expr::binary(top, left, operand);
                }
            }

            pending.push((operand, op));
            operand = self.parse_operand()?;
        }

        while let Some((left, op)) = pending.pop() {
            operand = Expr::binary(op, left, operand);
        }

        Ok(operand)
    }

    /// Parse a single operand
    fn parse_operand(&mut self) -> Result<Expr, ParseError> {
        let location = self.current_location();

        let expr = match self.peek_kind() {
            TokenKind::StringLiteral(s) => Expr::Str(s.clone()),
            TokenKind::IntLiteral(digits) => {
                let value = digits.parse::<i64>().map_err(|_| ParseError::IntegerOutOfRange {
                    literal: digits.clone(),
                    location,
                })?;
                Expr::Int(value)
            }
            TokenKind::True => Expr::Bool(true),
            TokenKind::False => Expr::Bool(false),
            TokenKind::It => Expr::Variable(IMPLICIT_LOOP_VAR.to_string()),
            TokenKind::LBracket => return self.parse_array_literal(),
            TokenKind::Ident(name) => {
                if self.cursor.lookahead(1).kind == TokenKind::LParen {
                    return self.parse_call();
                }
                Expr::Variable(name.clone())
            }
            found => {
                return Err(ParseError::ExpectedExpression {
                    found: found.clone(),
                    location,
                })
            }
        };

        self.cursor.advance();
        Ok(expr)
    }

    /// Parse array literal: [expr, expr, ...]
    fn parse_array_literal(&mut self) -> Result<Expr, ParseError> {
        self.expect_token(&TokenKind::LBracket, "to open array literal")?;
        let elements = self.parse_comma_separated(&TokenKind::RBracket)?;
        self.expect_token(&TokenKind::RBracket, "after array elements")?;
        Ok(Expr::Array(elements))
    }

    /// Parse function call: name(args)
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let location = self.current_location();
        let name = self.expect_identifier("as function name")?;

        self.expect_lparen("after function name")?;
        let args = self.parse_comma_separated(&TokenKind::RParen)?;
        self.expect_rparen("after arguments")?;

        Ok(Expr::Call {
            name,
            args,
            location,
        })
    }

    /// Expressions separated by commas, up to (not including) `close`.
    fn parse_comma_separated(&mut self, close: &TokenKind) -> Result<Vec<Expr>, ParseError> {
        let mut items = Vec::new();

        if self.check(close) {
            return Ok(items);
        }

        loop {
            items.push(self.parse_expression()?);
            if !self.match_token(&TokenKind::Comma) {
                break;
            }
        }

        Ok(items)
    }
}
