//! Identifier mapping
//!
//! Glint identifiers are carried into the output unchanged unless they would
//! be invalid or clash there. JavaScript reserved words, and host globals the
//! generated code relies on, get a trailing `_`. The `__` prefix is kept for
//! names the generator invents (`__defer0`, `__end0`), so a source name that
//! starts with it is suffixed too.

use std::borrow::Cow;

/// Prefix of every name the generator introduces itself
pub(crate) const GENERATED_PREFIX: &str = "__";

/// Words JavaScript rejects (or treats specially) as binding names, plus the
/// globals the output refers to.
const RESERVED: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "console",
    "continue", "debugger", "default", "delete", "do", "else", "enum", "eval",
    "export", "extends", "false", "finally", "for", "function", "if",
    "implements", "import", "in", "Infinity", "instanceof", "interface", "let",
    "NaN", "new", "null", "package", "private", "protected", "public", "return",
    "static", "super", "switch", "this", "throw", "true", "try", "typeof",
    "undefined", "var", "void", "while", "with", "yield",
];

/// Output spelling of a source identifier.
pub(crate) fn js_name(name: &str) -> Cow<'_, str> {
    if name.starts_with(GENERATED_PREFIX) || RESERVED.contains(&name) {
        Cow::Owned(format!("{name}_"))
    } else {
        Cow::Borrowed(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_pass_through() {
        assert_eq!(js_name("total"), "total");
        assert_eq!(js_name("it"), "it");
        assert_eq!(js_name("main"), "main");
        assert!(matches!(js_name("x_1"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_reserved_words_are_suffixed() {
        assert_eq!(js_name("new"), "new_");
        assert_eq!(js_name("class"), "class_");
        assert_eq!(js_name("console"), "console_");
        assert_eq!(js_name("undefined"), "undefined_");
    }

    #[test]
    fn test_generated_prefix_is_kept_free() {
        assert_eq!(js_name("__defer0"), "__defer0_");
        assert_eq!(js_name("__end"), "__end_");
        assert_eq!(js_name("_private"), "_private");
    }
}
