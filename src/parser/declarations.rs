//! Declaration parsing implementation
//!
//! Functions are the only top-level declarations:
//!
//! ```text
//! function ::= "fn" IDENT "(" [param ("," param)*] ")" ":" type block
//! param    ::= IDENT ":" type
//! type     ::= ("int" | "str" | "bool" | "void") ["[" "]"]
//! ```

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse the rest of a function after its `fn` keyword.
    pub(crate) fn parse_function(
        &mut self,
        location: SourceLocation,
    ) -> Result<Function, ParseError> {
        let name = self.expect_identifier("after 'fn'")?;

        self.expect_lparen("after function name")?;
        let params = self.parse_parameter_list()?;
        self.expect_rparen("after parameters")?;

        self.expect_colon("before return type")?;
        let return_type = self.parse_type()?;

        let body = self.parse_block("before function body")?;

        tracing::debug!(function = %name, params = params.len(), "parsed function");

        Ok(Function {
            name,
            params,
            return_type,
            body,
            location,
        })
    }

    /// Parse parameter list: name: type, name: type, ...
    fn parse_parameter_list(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();

        if !matches!(self.peek_kind(), TokenKind::Ident(_)) {
            return Ok(params);
        }

        loop {
            let name = self.expect_identifier("in parameter list")?;
            self.expect_colon("after parameter name")?;
            let param_type = self.parse_type()?;
            params.push(Param { name, param_type });

            if !self.match_token(&TokenKind::Comma) {
                break;
            }
        }

        Ok(params)
    }

    /// Parse type: base_type [ "[]" ]
    pub(crate) fn parse_type(&mut self) -> Result<Type, ParseError> {
        let base = match self.peek_kind() {
            TokenKind::IntType => BaseType::Int,
            TokenKind::StrType => BaseType::Str,
            TokenKind::BoolType => BaseType::Bool,
            TokenKind::VoidType => BaseType::Void,
            found => {
                return Err(ParseError::ExpectedType {
                    found: found.clone(),
                    location: self.current_location(),
                })
            }
        };
        self.cursor.advance();

        let mut ty = Type::new(base);
        if self.match_token(&TokenKind::LBracket) {
            self.expect_token(&TokenKind::RBracket, "to close array type")?;
            ty = ty.with_array();
        }

        Ok(ty)
    }
}
