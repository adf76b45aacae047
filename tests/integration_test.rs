// Integration tests for the Glint compiler

use glint::codegen::generate;
use glint::compile;
use glint::parser::ast::{BinaryOp, Expr, Stmt};
use glint::parser::lexer::{tokenize, TokenKind};
use glint::parser::Parser;

mod common;
use common::run_with_node;

#[test]
fn test_scan_parse_generate_by_hand() {
    let source = r#"
        fn add(a: int, b: int): int {
            return a + b
        }

        fn main(): void {
            print(add(3, 4))
        }
    "#;

    let tokens = tokenize(source);
    assert_eq!(tokens.last().map(|t| &t.kind), Some(&TokenKind::Eof));

    let program = Parser::from_tokens(tokens)
        .with_name("add")
        .parse_program()
        .expect("Parsing failed");
    assert_eq!(program.name, "add");
    assert_eq!(program.functions.len(), 2);

    let js = generate(&program);
    assert_eq!(
        js,
        "function add(a, b) {\n    return a + b;\n}\n\n\
         function main() {\n    console.log(add(3, 4));\n}\n\n\
         main();\n"
    );

    if let Some(stdout) = run_with_node(&js) {
        assert_eq!(stdout, "7\n");
    }
}

#[test]
fn test_precedence_in_parsed_program() {
    let source = "fn f(a: int, b: int, c: int): int { return a + b * c }";
    let program = Parser::new(source).parse_program().expect("Parsing failed");

    let Stmt::Return(expr) = &program.functions[0].body.statements[0] else {
        panic!("Expected return statement");
    };
    assert_eq!(
        *expr,
        Expr::binary(
            BinaryOp::Add,
            Expr::Variable("a".to_string()),
            Expr::binary(
                BinaryOp::Multiply,
                Expr::Variable("b".to_string()),
                Expr::Variable("c".to_string())
            )
        )
    );
}

#[test]
fn test_counted_loop_visits_half_open_range() {
    let source = r#"
        fn main(): void {
            for i in 0..10 {
                print(i)
            }
        }
    "#;

    let js = compile(source, "range").expect("Compilation failed");
    assert!(js.contains("for (let i = __start0; i < __end0; i++) {"));

    if let Some(stdout) = run_with_node(&js) {
        let visited: Vec<&str> = stdout.lines().collect();
        assert_eq!(visited, vec!["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    }
}

#[test]
fn test_defers_run_in_order_and_skip_on_early_exit() {
    let source = r#"
        fn early(stop: bool): int {
            defer print('first')
            defer print('second')
            if stop {
                return 1
            }
            print('body')
            return 0
        }

        fn fall_through(): void {
            defer print('first')
            defer print('second')
            print('body')
        }

        fn main(): void {
            fall_through()
            early(true)
            for {
                defer print('loop')
                break
            }
            print('end')
        }
    "#;

    let js = compile(source, "defer").expect("Compilation failed");

    if let Some(stdout) = run_with_node(&js) {
        assert_eq!(stdout, "body\nfirst\nsecond\nend\n");
    }

    let fall_through = js
        .split("function fall_through() {")
        .nth(1)
        .expect("fall_through missing");
    let first = fall_through.find("__defer2();").expect("first call missing");
    let second = fall_through.find("__defer3();").expect("second call missing");
    let body = fall_through.find("console.log('body');").expect("body missing");
    assert!(body < first && first < second);
}

#[test]
fn test_undeclared_function_compiles_to_nothing() {
    let source = r#"
        fn main(): void {
            launch_rockets(3)
            print('still here')
        }
    "#;

    let js = compile(source, "undeclared").expect("Compilation must not fail");
    assert!(!js.contains("launch_rockets"));
    assert!(js.contains("    ;\n"));

    if let Some(stdout) = run_with_node(&js) {
        assert_eq!(stdout, "still here\n");
    }
}

#[test]
fn test_first_syntax_error_aborts() {
    let source = r#"
        fn broken(): int {
            return
        }

        fn main(): void {
            print('never compiled')
        }
    "#;

    let err = compile(source, "broken").expect_err("Compilation should fail");
    assert!(err.to_string().starts_with("Parse error at line 4, column 9"));
}

#[test]
fn test_silently_dropped_operators() {
    // `!` without `=` and a lone `.` are dropped by the scanner, so this
    // parses as `print(a b)`... which is a syntax error naming `b`.
    let source = "fn main(): void { print(a ! b) }";

    let err = compile(source, "dropped").expect_err("Compilation should fail");
    assert!(err.to_string().contains("found identifier 'b'"));

    // A stray `.` between statements disappears entirely.
    let js = compile("fn main(): void { print(1) . print(2) }", "dropped")
        .expect("Compilation failed");
    assert!(js.contains("console.log(1);\n    console.log(2);"));
}

#[test]
fn test_range_bounds_evaluated_once() {
    let source = r#"
        fn limit(): int {
            print('limit')
            return 3
        }

        fn main(): void {
            for 1..3 {
                for 0..it {
                    print(it)
                }
            }
            for 0..limit() {
                print(it)
            }
        }
    "#;

    let js = compile(source, "bounds").expect("Compilation failed");
    assert!(js.contains("const __end1 = it;"));
    assert!(js.contains("const __end2 = limit();"));

    if let Some(stdout) = run_with_node(&js) {
        assert_eq!(stdout, "0\n0\n1\nlimit\n0\n1\n2\n");
    }
}

#[test]
fn test_multiline_string_stays_valid() {
    let source = "fn main(): void {\n    print('first\nsecond')\n}\n";

    let js = compile(source, "multiline").expect("Compilation failed");
    assert!(js.contains("console.log('first\\nsecond');"));

    if let Some(stdout) = run_with_node(&js) {
        assert_eq!(stdout, "first\nsecond\n");
    }
}

#[test]
fn test_reserved_words_as_names() {
    let source = r#"
        fn class(new: int): int {
            let var: int = new * 2
            return var
        }

        fn main(): void {
            let this: int = class(21)
            print(this)
        }
    "#;

    let js = compile(source, "reserved").expect("Compilation failed");
    assert!(js.contains("function class_(new_) {"));

    if let Some(stdout) = run_with_node(&js) {
        assert_eq!(stdout, "42\n");
    }
}
