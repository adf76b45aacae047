// Generation engine: program, function and block lowering

use crate::codegen::emitter::Emitter;
use crate::codegen::names::{js_name, GENERATED_PREFIX};
use crate::parser::ast::*;
use rustc_hash::FxHashSet;

/// Name of the function invoked at the end of the output, when it takes no
/// parameters.
pub const ENTRY_POINT: &str = "main";

/// Walks a [`Program`] and writes JavaScript
pub struct Generator<'p> {
    program: &'p Program,

    /// Every function name declared in the program
    functions: FxHashSet<&'p str>,

    /// Output buffer
    pub(crate) out: Emitter,

    /// Function currently being lowered, for diagnostics
    pub(crate) current_function: &'p str,

    /// Counters keeping generated names unique within the output
    next_defer: usize,
    next_loop: usize,
}

impl<'p> Generator<'p> {
    pub fn new(program: &'p Program) -> Self {
        let functions = program
            .functions
            .iter()
            .map(|f| f.name.as_str())
            .collect();

        Self {
            program,
            functions,
            out: Emitter::new(),
            current_function: "",
            next_defer: 0,
            next_loop: 0,
        }
    }

    /// Lower the whole program.
    pub fn generate(mut self) -> String {
        let program = self.program;

        for function in &program.functions {
            if !self.out.is_empty() {
                self.out.blank();
            }
            self.emit_function(function);
        }

        if self.has_entry_point() {
            self.out.blank();
            self.out.line(format!("{ENTRY_POINT}();"));
        }

        tracing::debug!(
            program = %program.name,
            functions = program.functions.len(),
            "generated program"
        );
        self.out.finish()
    }

    /// Whether `name` is declared somewhere in the program.
    pub(crate) fn is_declared(&self, name: &str) -> bool {
        self.functions.contains(name)
    }

    fn has_entry_point(&self) -> bool {
        self.program
            .functions
            .iter()
            .any(|f| f.name == ENTRY_POINT && f.params.is_empty())
    }

    /// Suffix for the bound temporaries of the next counted loop.
    pub(crate) fn fresh_loop_id(&mut self) -> usize {
        let id = self.next_loop;
        self.next_loop += 1;
        id
    }

    fn emit_function(&mut self, function: &'p Function) {
        self.current_function = function.name.as_str();

        let params: Vec<_> = function.params.iter().map(|p| js_name(&p.name)).collect();
        self.out.line(format!(
            "function {}({}) {{",
            js_name(&function.name),
            params.join(", ")
        ));
        self.emit_block(&function.body, None);
        self.out.line("}");
    }

    /// Emit the statements of a block one level deeper than the current line.
    ///
    /// Deferred expressions become closures where they are declared and are
    /// called in declaration order at the block's fall-through exit, before
    /// `terminator` (if any). An early `return`, `break` or `skip` leaves the
    /// block without reaching those calls.
    pub(crate) fn emit_block(&mut self, block: &Block, terminator: Option<&str>) {
        self.out.indent();

        let mut deferred = Vec::new();
        for stmt in &block.statements {
            match stmt {
                Stmt::Defer(expr) => deferred.push(self.emit_defer(expr)),
                other => self.emit_statement(other),
            }
        }

        for name in deferred {
            self.out.line(format!("{name}();"));
        }
        if let Some(terminator) = terminator {
            self.out.line(terminator);
        }

        self.out.dedent();
    }

    /// Capture a deferred expression as a zero-argument closure, returning
    /// the closure's name.
    fn emit_defer(&mut self, expr: &Expr) -> String {
        let name = format!("{GENERATED_PREFIX}defer{}", self.next_defer);
        self.next_defer += 1;

        let body = self.expression_statement(expr);
        self.out.line(format!("const {name} = () => {{ {body} }};"));

        name
    }
}

/// Lower a parsed program to JavaScript.
pub fn generate(program: &Program) -> String {
    Generator::new(program).generate()
}
