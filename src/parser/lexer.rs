//! Lexer (tokenizer) for Glint source code
//!
//! Converts raw source text into a flat [`Token`] sequence consumed by the
//! parser through a [`Cursor`](super::cursor::Cursor).
//!
//! The lexer never fails. Characters it does not recognise, and a `!` or `.`
//! that is not completed into `!=` or `..`, produce no token at all; they are
//! reported at `trace` level only.

use super::ast::SourceLocation;
use std::fmt;

/// Token discriminant, carrying the literal text for literal kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Literals
    IntLiteral(String),
    StringLiteral(String),

    // Identifiers (variables and function names alike)
    Ident(String),

    // Keywords
    Fn,
    Let,
    Return,
    If,
    Elif,
    Else,
    Match,
    For,
    It,
    In,
    Break,
    Skip,
    Defer,
    True,
    False,
    And,
    Or,

    // Type names
    IntType,
    StrType,
    BoolType,
    VoidType,

    // Arithmetic
    Plus,  // +
    Minus, // -
    Star,  // *
    Slash, // /

    // Comparison
    EqEq,  // ==
    NotEq, // !=
    Lt,    // <
    Le,    // <=
    Gt,    // >
    Ge,    // >=

    DotDot, // ..
    Eq,     // =

    // Punctuation
    LParen,   // (
    RParen,   // )
    LBrace,   // {
    RBrace,   // }
    LBracket, // [
    RBracket, // ]
    Comma,    // ,
    Colon,    // :

    // End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::IntLiteral(n) => write!(f, "int literal {}", n),
            TokenKind::StringLiteral(s) => write!(f, "string literal '{}'", s),
            TokenKind::Ident(s) => write!(f, "identifier '{}'", s),
            TokenKind::Fn => write!(f, "'fn'"),
            TokenKind::Let => write!(f, "'let'"),
            TokenKind::Return => write!(f, "'return'"),
            TokenKind::If => write!(f, "'if'"),
            TokenKind::Elif => write!(f, "'elif'"),
            TokenKind::Else => write!(f, "'else'"),
            TokenKind::Match => write!(f, "'match'"),
            TokenKind::For => write!(f, "'for'"),
            TokenKind::It => write!(f, "'it'"),
            TokenKind::In => write!(f, "'in'"),
            TokenKind::Break => write!(f, "'break'"),
            TokenKind::Skip => write!(f, "'skip'"),
            TokenKind::Defer => write!(f, "'defer'"),
            TokenKind::True => write!(f, "'true'"),
            TokenKind::False => write!(f, "'false'"),
            TokenKind::And => write!(f, "'and'"),
            TokenKind::Or => write!(f, "'or'"),
            TokenKind::IntType => write!(f, "'int'"),
            TokenKind::StrType => write!(f, "'str'"),
            TokenKind::BoolType => write!(f, "'bool'"),
            TokenKind::VoidType => write!(f, "'void'"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::EqEq => write!(f, "'=='"),
            TokenKind::NotEq => write!(f, "'!='"),
            TokenKind::Lt => write!(f, "'<'"),
            TokenKind::Le => write!(f, "'<='"),
            TokenKind::Gt => write!(f, "'>'"),
            TokenKind::Ge => write!(f, "'>='"),
            TokenKind::DotDot => write!(f, "'..'"),
            TokenKind::Eq => write!(f, "'='"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::LBracket => write!(f, "'['"),
            TokenKind::RBracket => write!(f, "']'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::Eof => write!(f, "end of file"),
        }
    }
}

/// A token and where it starts in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {}",
            self.location.line, self.location.column, self.kind
        )
    }
}

/// Lexer for Glint source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input. The result always ends with exactly one
    /// [`TokenKind::Eof`].
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();

            if self.is_at_end() {
                tokens.push(Token::new(TokenKind::Eof, self.current_location()));
                break;
            }

            if let Some(token) = self.next_token() {
                tokens.push(token);
            }
        }

        tracing::debug!(count = tokens.len(), "scanned tokens");
        tokens
    }

    /// Scan one token starting at the current character, or `None` when the
    /// character is dropped.
    fn next_token(&mut self) -> Option<Token> {
        let loc = self.current_location();
        let ch = self.advance()?;

        let kind = match ch {
            '\'' => self.string_literal(),
            '0'..='9' => self.number_literal(ch),
            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(ch),

            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,

            '=' => self.pair('=', TokenKind::EqEq, Some(TokenKind::Eq))?,
            '<' => self.pair('=', TokenKind::Le, Some(TokenKind::Lt))?,
            '>' => self.pair('=', TokenKind::Ge, Some(TokenKind::Gt))?,
            '!' => self.pair('=', TokenKind::NotEq, None)?,
            '.' => self.pair('.', TokenKind::DotDot, None)?,

            _ => {
                tracing::trace!(%ch, %loc, "dropping unrecognized character");
                return None;
            }
        };

        Some(Token::new(kind, loc))
    }

    /// Two-character operator: `paired` when the next character is `second`,
    /// otherwise the single-character `fallback` (if there is one).
    fn pair(
        &mut self,
        second: char,
        paired: TokenKind,
        fallback: Option<TokenKind>,
    ) -> Option<TokenKind> {
        if self.peek() == Some(second) {
            self.advance();
            return Some(paired);
        }
        if fallback.is_none() {
            tracing::trace!(
                line = self.line,
                column = self.column,
                "dropping incomplete operator"
            );
        }
        fallback
    }

    /// Parse string literal. Contents are kept verbatim up to the closing
    /// quote or end of input.
    fn string_literal(&mut self) -> TokenKind {
        let mut string = String::new();

        while let Some(ch) = self.advance() {
            if ch == '\'' {
                return TokenKind::StringLiteral(string);
            }
            string.push(ch);
        }

        TokenKind::StringLiteral(string)
    }

    /// Parse numeric literal (unsigned integers only)
    fn number_literal(&mut self, first_digit: char) -> TokenKind {
        let mut num_str = String::new();
        num_str.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        TokenKind::IntLiteral(num_str)
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, first_char: char) -> TokenKind {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match ident.as_str() {
            "fn" => TokenKind::Fn,
            "let" => TokenKind::Let,
            "return" => TokenKind::Return,
            "if" => TokenKind::If,
            "elif" => TokenKind::Elif,
            "else" => TokenKind::Else,
            "match" => TokenKind::Match,
            "for" => TokenKind::For,
            "it" => TokenKind::It,
            "in" => TokenKind::In,
            "break" => TokenKind::Break,
            "skip" => TokenKind::Skip,
            "defer" => TokenKind::Defer,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "int" => TokenKind::IntType,
            "str" => TokenKind::StrType,
            "bool" => TokenKind::BoolType,
            "void" => TokenKind::VoidType,
            _ => TokenKind::Ident(ident),
        }
    }

    /// Skip whitespace and `#` line comments
    fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else if ch == '#' {
                self.skip_line_comment();
            } else {
                break;
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.advance() {
            if ch == '\n' {
                break;
            }
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Convenience wrapper: scan `source` in one call.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}
