//! Statement lowering
//!
//! Each statement becomes one or more lines at the current indentation:
//!
//! - `let x: T = e` → `let x = e;`
//! - `if` / `elif` / `else` → `if (...) { } else if (...) { } else { }`
//! - `match` → `switch` where every case block ends in `break;`, so arms
//!   never fall through, and `else` becomes `default:`
//! - `break` → `break;`, `skip` → `continue;`
//!
//! `defer` is handled by the enclosing block in
//! [`Generator::emit_block`](super::engine::Generator).

use crate::codegen::builtins::intrinsic;
use crate::codegen::engine::Generator;
use crate::codegen::names::js_name;
use crate::parser::ast::*;

impl<'p> Generator<'p> {
    pub(crate) fn emit_statement(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expr(expr) => {
                let line = self.expression_statement(expr);
                self.out.line(line);
            }
            Stmt::Return(expr) => {
                let value = self.lower_expr(expr);
                self.out.line(format!("return {value};"));
            }
            Stmt::VarDecl(decl) => {
                let init = self.lower_expr(&decl.init);
                self.out.line(format!("let {} = {};", js_name(&decl.name), init));
            }
            Stmt::If(chain) => self.emit_if_chain(chain),
            Stmt::Match(stmt) => self.emit_match(stmt),
            Stmt::For(for_loop) => self.emit_for_loop(for_loop),
            Stmt::Break => self.out.line("break;"),
            Stmt::Skip => self.out.line("continue;"),
            Stmt::Defer(_) => unreachable!("defer is lowered by the enclosing block"),
        }
    }

    /// An expression evaluated for its effect, terminated with `;`.
    ///
    /// A call to a function the program never declares lowers to the empty
    /// statement `;`.
    pub(crate) fn expression_statement(&self, expr: &Expr) -> String {
        if let Expr::Call { name, location, .. } = expr {
            if intrinsic(name).is_none() && !self.is_declared(name) {
                self.report_unknown_call(name, *location);
                return ";".to_string();
            }
        }
        format!("{};", self.lower_expr(expr))
    }

    fn emit_if_chain(&mut self, chain: &IfChain) {
        let condition = self.lower_expr(&chain.primary.condition);
        self.out.line(format!("if ({condition}) {{"));
        self.emit_block(&chain.primary.body, None);

        for branch in &chain.elifs {
            let condition = self.lower_expr(&branch.condition);
            self.out.line(format!("}} else if ({condition}) {{"));
            self.emit_block(&branch.body, None);
        }

        if let Some(else_body) = &chain.else_body {
            self.out.line("} else {");
            self.emit_block(else_body, None);
        }

        self.out.line("}");
    }

    fn emit_match(&mut self, stmt: &MatchStmt) {
        let scrutinee = self.lower_expr(&stmt.scrutinee);
        self.out.line(format!("switch ({scrutinee}) {{"));
        self.out.indent();

        for case in &stmt.cases {
            let pattern = self.lower_expr(&case.pattern);
            self.out.line(format!("case {pattern}: {{"));
            self.emit_block(&case.body, Some("break;"));
            self.out.line("}");
        }

        if let Some(default) = &stmt.default {
            self.out.line("default: {");
            self.emit_block(default, None);
            self.out.line("}");
        }

        self.out.dedent();
        self.out.line("}");
    }
}
