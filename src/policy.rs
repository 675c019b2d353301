use crate::Kind;
use crate::Value;

/// What lenient coercion does when the strict parse is undetermined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    /// The strict parse always decides.
    Never,
    /// Use a fixed value.
    Default(bool),
    /// Everything except `false` and `nil` is `true`.
    Truthiness,
}

/// Per-type fallback table.
///
/// | kind    | fallback          |
/// |---------|-------------------|
/// | bool    | never             |
/// | nil     | never             |
/// | string  | `false`           |
/// | symbol  | `false`           |
/// | numeric | `true`            |
/// | other   | truthiness        |
///
/// Unknown text is not an explicit yes, hence `false`; any number other than
/// zero is truthy, hence `true`.
pub const fn fallback(kind: Kind) -> Fallback {
    match kind {
        Kind::Bool | Kind::Nil => Fallback::Never,
        Kind::Str | Kind::Symbol => Fallback::Default(false),
        Kind::Numeric => Fallback::Default(true),
        Kind::Other => Fallback::Truthiness,
    }
}

/// Only `false` and `nil` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Bool(false) | Value::Nil)
}
