//! Expression lowering
//!
//! Nested binary operations are always parenthesized, so the output never
//! relies on JavaScript's own precedence table (which, unlike Glint's, ranks
//! `&&` above `||`). Equality is strict: `==` and `!=` become `===` and `!==`.

use crate::codegen::builtins::intrinsic;
use crate::codegen::engine::Generator;
use crate::codegen::names::js_name;
use crate::parser::ast::*;

/// JavaScript spelling of a binary operator. `Range` has none.
fn js_operator(op: BinaryOp) -> Option<&'static str> {
    let text = match op {
        BinaryOp::Multiply => "*",
        BinaryOp::Divide => "/",
        BinaryOp::Add => "+",
        BinaryOp::Subtract => "-",
        BinaryOp::Range => return None,
        BinaryOp::Lt => "<",
        BinaryOp::Le => "<=",
        BinaryOp::Gt => ">",
        BinaryOp::Ge => ">=",
        BinaryOp::Eq => "===",
        BinaryOp::Ne => "!==",
        BinaryOp::And => "&&",
        BinaryOp::Or => "||",
    };
    Some(text)
}

/// Single-quoted JavaScript literal for verbatim string text.
///
/// Backslashes pass through untouched. Line terminators cannot appear raw
/// inside a JavaScript string, so they are written as escapes.
fn string_literal(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('\'');
    for ch in text.chars() {
        match ch {
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\u{2028}' => literal.push_str("\\u2028"),
            '\u{2029}' => literal.push_str("\\u2029"),
            other => literal.push(other),
        }
    }
    literal.push('\'');
    literal
}

impl<'p> Generator<'p> {
    pub(crate) fn lower_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Str(s) => string_literal(s),
            Expr::Int(n) => n.to_string(),
            Expr::Bool(b) => b.to_string(),
            Expr::Array(elements) => format!("[{}]", self.lower_list(elements)),
            Expr::Variable(name) => js_name(name).into_owned(),
            Expr::Call {
                name,
                args,
                location,
            } => {
                if let Some(target) = intrinsic(name) {
                    return format!("{target}({})", self.lower_list(args));
                }
                if self.is_declared(name) {
                    return format!("{}({})", js_name(name), self.lower_list(args));
                }
                self.report_unknown_call(name, *location);
                "undefined".to_string()
            }
            Expr::Binary { op, left, right } => {
                let Some(operator) = js_operator(*op) else {
                    tracing::warn!(
                        function = %self.current_function,
                        "range outside a for loop header lowers to undefined"
                    );
                    return "undefined".to_string();
                };
                let left = self.lower_operand(left);
                let right = self.lower_operand(right);
                format!("{left} {operator} {right}")
            }
        }
    }

    /// Lower an operand of a binary operation, parenthesizing nested operations.
    fn lower_operand(&self, expr: &Expr) -> String {
        let text = self.lower_expr(expr);
        if matches!(expr, Expr::Binary { .. }) {
            format!("({text})")
        } else {
            text
        }
    }

    fn lower_list(&self, exprs: &[Expr]) -> String {
        exprs
            .iter()
            .map(|e| self.lower_expr(e))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub(crate) fn report_unknown_call(&self, name: &str, location: SourceLocation) {
        tracing::warn!(
            function = %self.current_function,
            callee = %name,
            %location,
            "call to undeclared function lowers to nothing"
        );
    }
}
