//! Loop lowering
//!
//! A `for` statement takes one of three forms, chosen by
//! [`ForLoop::shape`]:
//!
//! - no iteration expression: `while (true)`
//! - a range `a..b`: a counted loop over the half-open interval `[a, b)`
//! - any other expression: `for (const v of expr)`
//!
//! The loop variable is the explicit binding, or `it`. Range bounds are
//! evaluated once, in order, into `__startN`/`__endN` constants ahead of the
//! loop, so a bound may call functions or name an enclosing loop's variable.

use crate::codegen::engine::Generator;
use crate::codegen::names::{js_name, GENERATED_PREFIX};
use crate::parser::ast::*;

impl<'p> Generator<'p> {
    pub(crate) fn emit_for_loop(&mut self, for_loop: &ForLoop) {
        let var = js_name(for_loop.variable());

        let header = match for_loop.shape() {
            LoopShape::Infinite => "while (true) {".to_string(),
            LoopShape::Counted { start, end } => {
                let id = self.fresh_loop_id();
                let start_name = format!("{GENERATED_PREFIX}start{id}");
                let end_name = format!("{GENERATED_PREFIX}end{id}");

                let start = self.lower_expr(start);
                let end = self.lower_expr(end);
                self.out.line(format!("const {start_name} = {start};"));
                self.out.line(format!("const {end_name} = {end};"));
                format!("for (let {var} = {start_name}; {var} < {end_name}; {var}++) {{")
            }
            LoopShape::Each(iterable) => {
                let iterable = self.lower_expr(iterable);
                format!("for (const {var} of {iterable}) {{")
            }
        };

        self.out.line(header);
        self.emit_block(&for_loop.body, None);
        self.out.line("}");
    }
}

#[cfg(test)]
mod tests {
    use crate::codegen::generate;
    use crate::parser::parse::parse_source;

    fn js(source: &str) -> String {
        let program = parse_source(source, "test").unwrap();
        generate(&program)
    }

    #[test]
    fn test_counted_loop_is_half_open() {
        let output = js("fn f(): void { for i in 0..10 { print(i) } }");

        assert!(output.contains(
            "    const __start0 = 0;\n\
             \x20   const __end0 = 10;\n\
             \x20   for (let i = __start0; i < __end0; i++) {\n\
             \x20       console.log(i);\n\
             \x20   }\n"
        ));
    }

    #[test]
    fn test_counted_loop_defaults_to_it() {
        let output = js("fn f(n: int): void { for 1..n + 1 { print(it) } }");

        assert!(output.contains("const __end0 = n + 1;"));
        assert!(output.contains("for (let it = __start0; it < __end0; it++) {"));
        assert!(output.contains("console.log(it);"));
    }

    #[test]
    fn test_bounds_are_evaluated_once_before_the_loop() {
        let output = js("fn n(): int { return 3 } fn f(): void { for 0..n() { print(it) } }");

        let bound = output.find("const __end0 = n();").unwrap();
        let header = output.find("for (let it = __start0; it < __end0; it++)").unwrap();
        assert!(bound < header);
        assert_eq!(output.matches("n();").count(), 1);
    }

    #[test]
    fn test_inner_range_bounded_by_outer_it() {
        let output = js("fn f(): void { for 1..3 { for 0..it { print(it) } } }");

        let lines: Vec<&str> = output.lines().map(str::trim).collect();
        assert_eq!(
            lines[1..9],
            [
                "const __start0 = 1;",
                "const __end0 = 3;",
                "for (let it = __start0; it < __end0; it++) {",
                "const __start1 = 0;",
                "const __end1 = it;",
                "for (let it = __start1; it < __end1; it++) {",
                "console.log(it);",
                "}",
            ]
        );
    }

    #[test]
    fn test_reserved_loop_binding() {
        let output = js("fn f(xs: int[]): void { for new in xs { print(new) } }");

        assert!(output.contains("for (const new_ of xs) {\n        console.log(new_);"));
    }

    #[test]
    fn test_element_iteration() {
        let output = js("fn f(xs: int[]): void { for x in xs { print(x) } for [1, 2] { print(it) } }");

        assert!(output.contains("for (const x of xs) {"));
        assert!(output.contains("for (const it of [1, 2]) {"));
    }

    #[test]
    fn test_infinite_loop_ignores_binding() {
        let output = js("fn f(): void { for i in { break } }");

        assert!(output.contains("while (true) {\n        break;\n    }"));
    }

    #[test]
    fn test_range_outside_loop_header_lowers_to_undefined() {
        let output = js("fn f(): void { let r: int = 0..3 }");

        assert!(output.contains("    let r = undefined;\n"));
    }

    #[test]
    fn test_chained_range_bound_lowers_to_undefined() {
        // `0..1..2` is `(0..1)..2`: the outer range drives the loop.
        let output = js("fn g(): void { for 0..1..2 { } }");

        assert!(output.contains("const __start0 = undefined;"));
        assert!(output.contains("const __end0 = 2;"));
    }
}
