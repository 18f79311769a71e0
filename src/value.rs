//! Typed interpretation of raw variable text.

/// A type a resolved variable can be read as.
pub trait VariableValue: Sized {
    /// Name used in format errors ("int", "bool", ...).
    const KIND: &'static str;

    /// Parse the raw text, or `None` if it is not a valid value of this type.
    fn parse_variable(raw: &str) -> Option<Self>;
}

impl VariableValue for String {
    const KIND: &'static str = "string";

    fn parse_variable(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

/// Base-10 with optional sign; surrounding whitespace is ignored.
/// Values outside the 32-bit range are rejected.
impl VariableValue for i32 {
    const KIND: &'static str = "int";

    fn parse_variable(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

/// 64-bit counterpart of the `i32` impl, for `get::<i64>`.
impl VariableValue for i64 {
    const KIND: &'static str = "long";

    fn parse_variable(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

/// Only the literals `true` and `false`, in any letter case.
impl VariableValue for bool {
    const KIND: &'static str = "bool";

    fn parse_variable(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("true") {
            Some(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}
