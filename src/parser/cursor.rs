//! Clamped cursor over a token sequence.
//!
//! The cursor never moves past the final token: once the trailing
//! [`TokenKind::Eof`] is reached, every further [`Cursor::advance`] and every
//! over-long [`Cursor::lookahead`] yields that same token again.

use super::ast::SourceLocation;
use super::lexer::{Token, TokenKind};

pub struct Cursor {
    tokens: Vec<Token>,
    position: usize,
}

impl Cursor {
    /// Wrap a token sequence. A trailing `Eof` is appended if missing.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let location = tokens
                .last()
                .map(|t| t.location)
                .unwrap_or(SourceLocation::new(1, 1));
            tokens.push(Token::new(TokenKind::Eof, location));
        }
        Self {
            tokens,
            position: 0,
        }
    }

    fn last_index(&self) -> usize {
        self.tokens.len() - 1
    }

    /// Return the next token and move past it, stopping at the final token.
    pub fn advance(&mut self) -> &Token {
        let index = self.position;
        if self.position < self.last_index() {
            self.position += 1;
        }
        &self.tokens[index]
    }

    /// The next token, without consuming it.
    pub fn peek(&self) -> &Token {
        self.lookahead(0)
    }

    /// The token `n` places after the next one (`lookahead(0)` is `peek()`).
    pub fn lookahead(&self, n: usize) -> &Token {
        let index = self.position.saturating_add(n).min(self.last_index());
        &self.tokens[index]
    }

    pub fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}
