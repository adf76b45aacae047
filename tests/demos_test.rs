// End-to-end tests over the sample programs in demos/

use glint::compile;
use std::fs;
use std::path::Path;

mod common;
use common::run_with_node;

fn compile_demo(file: &str) -> String {
    let path = Path::new("demos").join(file);
    let source = fs::read_to_string(&path).expect("Failed to read demo file");
    let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("main");
    compile(&source, name).expect("Compilation failed")
}

#[test]
fn test_hello_prints_string_literal() {
    let js = compile_demo("hello.glint");

    assert_eq!(
        js,
        "function main() {\n    console.log('Hello, world!');\n}\n\nmain();\n"
    );
    if let Some(stdout) = run_with_node(&js) {
        assert_eq!(stdout, "Hello, world!\n");
    }
}

#[test]
fn test_arithmetic_prints_28() {
    let js = compile_demo("arithmetic.glint");

    assert!(js.contains("function three() {\n    return 1 + 2;\n}"));
    assert!(js.contains("    return three() + (8 / 2);\n"));
    assert!(js.contains("    console.log(seven() * four());\n"));
    if let Some(stdout) = run_with_node(&js) {
        assert_eq!(stdout, "28\n");
    }
}

#[test]
fn test_logic_prints_false_then_true() {
    let js = compile_demo("logic.glint");

    assert!(js.contains("    console.log(true && false);\n"));
    assert!(js.contains("    console.log((1 < 2) || (2 < 1));\n"));
    if let Some(stdout) = run_with_node(&js) {
        assert_eq!(stdout, "false\ntrue\n");
    }
}

#[test]
fn test_branches_print_in_source_order() {
    let js = compile_demo("branches.glint");

    assert!(js.contains(
        "    if (n < 0) {\n\
         \x20       return 'negative';\n\
         \x20   } else if (n === 0) {\n\
         \x20       return 'zero';\n\
         \x20   } else {\n\
         \x20       return 'positive';\n\
         \x20   }\n"
    ));
    if let Some(stdout) = run_with_node(&js) {
        assert_eq!(stdout, "negative\nzero\npositive\n");
    }
}

#[test]
fn test_loops_match_and_defer() {
    let js = compile_demo("loops.glint");

    assert!(js.contains("switch (n) {"));
    assert!(js.contains("for (let i = __start0; i < __end0; i++) {"));
    assert!(js.contains("for (const it of names) {"));
    assert!(js.contains("while (true) {"));
    if let Some(stdout) = run_with_node(&js) {
        assert_eq!(stdout, "zero\none\nmany\na\nb\ndone\n");
    }
}

#[test]
fn test_compilation_is_deterministic() {
    for file in ["hello.glint", "arithmetic.glint", "logic.glint", "branches.glint", "loops.glint"] {
        assert_eq!(compile_demo(file), compile_demo(file));
    }
}
