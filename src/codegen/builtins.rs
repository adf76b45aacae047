//! Intrinsic functions
//!
//! Intrinsics are callable without being declared and lower directly onto a
//! host primitive. `print(...)` writes its arguments to the console.

/// Host primitive an intrinsic call lowers to, if `name` is an intrinsic.
pub(crate) fn intrinsic(name: &str) -> Option<&'static str> {
    match name {
        "print" => Some("console.log"),
        _ => None,
    }
}
