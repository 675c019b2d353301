use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::Error;

/// A value that can be converted to `bool`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Nil,
    Str(String),
    Symbol(String),
    Int(i64),
    Float(f64),
    /// Any value without a strict boolean parse.
    Other {
        type_name: &'static str,
        repr: String,
    },
}

/// Source type of a [`Value`], used to look up the coercion policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Bool,
    Nil,
    Str,
    Symbol,
    Numeric,
    Other,
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::Nil => Kind::Nil,
            Value::Str(_) => Kind::Str,
            Value::Symbol(_) => Kind::Symbol,
            Value::Int(_) | Value::Float(_) => Kind::Numeric,
            Value::Other { .. } => Kind::Other,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Nil => "nil",
            Value::Str(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Other { type_name, .. } => *type_name,
        }
    }

    /// Returns `false` only for values that can not be parsed strictly at all.
    ///
    /// This separates "no capability" from "parsed but undetermined",
    /// which [`to_boolean_strict`](crate::to_boolean_strict) reports the same way.
    pub fn has_strict_parse(&self) -> bool {
        !matches!(self, Value::Other { .. })
    }

    pub fn other(type_name: &'static str, repr: impl Into<String>) -> Value {
        Value::Other {
            type_name,
            repr: repr.into(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(value) => write!(f, "{}", value),
            Value::Nil => write!(f, "nil"),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Symbol(name) => write!(f, ":{}", name),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Other { repr, .. } => write!(f, "{}", repr),
        }
    }
}

/// Literal syntax used by the command line:
/// `nil`, `true`, `false`, `:symbol`, numbers, `"quoted text"`;
/// anything else is taken as text verbatim.
impl FromStr for Value {
    type Err = Error;

    fn from_str(other: &str) -> Result<Self, Self::Err> {
        match other {
            "nil" => return Ok(Value::Nil),
            "true" => return Ok(Value::Bool(true)),
            "false" => return Ok(Value::Bool(false)),
            _ => {}
        }
        if let Some(name) = other.strip_prefix(':') {
            if name.is_empty() {
                return Err(Error::InvalidLiteral(other.to_string()));
            }
            return Ok(Value::Symbol(name.to_string()));
        }
        if other.starts_with('"') {
            return unquote(other).map(Value::Str);
        }
        if let Ok(n) = other.parse::<i64>() {
            return Ok(Value::Int(n));
        }
        if looks_like_float(other) {
            if let Ok(x) = other.parse::<f64>() {
                return Ok(Value::Float(x));
            }
        }
        Ok(Value::Str(other.to_string()))
    }
}

fn unquote(other: &str) -> Result<String, Error> {
    let invalid = || Error::InvalidLiteral(other.to_string());
    let inner = other
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(invalid)?;
    let mut string = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some('"') => string.push('"'),
                Some('\\') => string.push('\\'),
                Some('n') => string.push('\n'),
                Some('t') => string.push('\t'),
                _ => return Err(invalid()),
            },
            // closing quote in the middle
            '"' => return Err(invalid()),
            ch => string.push(ch),
        }
    }
    Ok(string)
}

// `f64::from_str` also accepts `inf` and `NaN`, which should stay text.
fn looks_like_float(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
        && s
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}

impl From<bool> for Value {
    fn from(other: bool) -> Self {
        Value::Bool(other)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nil
    }
}

impl From<&str> for Value {
    fn from(other: &str) -> Self {
        Value::Str(other.to_string())
    }
}

impl From<String> for Value {
    fn from(other: String) -> Self {
        Value::Str(other)
    }
}

impl From<f32> for Value {
    fn from(other: f32) -> Self {
        Value::Float(other.into())
    }
}

impl From<f64> for Value {
    fn from(other: f64) -> Self {
        Value::Float(other)
    }
}

macro_rules! impl_from_int {
    ($($t:ident)*) => {
        $(
            impl From<$t> for Value {
                fn from(other: $t) -> Self {
                    Value::Int(other.into())
                }
            }
        )*
    };
}

impl_from_int!(i8 i16 i32 i64 u8 u16 u32);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(other: Option<T>) -> Self {
        match other {
            Some(value) => value.into(),
            None => Value::Nil,
        }
    }
}
