use log::debug;

use crate::fallback;
use crate::is_truthy;
use crate::parse_strict;
use crate::Error;
use crate::Fallback;
use crate::Kind;
use crate::Value;

/// Conversion to `bool` for a single source type.
pub trait ToBool {
    /// Strict parse: `None` when the value does not determine a boolean.
    fn parse_bool(&self) -> Option<bool>;

    /// Lenient conversion: never fails.
    fn to_b(&self) -> bool;
}

impl ToBool for bool {
    fn parse_bool(&self) -> Option<bool> {
        Some(*self)
    }

    fn to_b(&self) -> bool {
        *self
    }
}

impl ToBool for str {
    fn parse_bool(&self) -> Option<bool> {
        parse_strict(self)
    }

    fn to_b(&self) -> bool {
        self.parse_bool()
            .unwrap_or_else(|| default_for(Kind::Str))
    }
}

impl ToBool for String {
    fn parse_bool(&self) -> Option<bool> {
        self.as_str().parse_bool()
    }

    fn to_b(&self) -> bool {
        self.as_str().to_b()
    }
}

/// `None` behaves like `nil`.
impl<T: ToBool> ToBool for Option<T> {
    fn parse_bool(&self) -> Option<bool> {
        match self {
            Some(value) => value.parse_bool(),
            None => Some(false),
        }
    }

    fn to_b(&self) -> bool {
        match self {
            Some(value) => value.to_b(),
            None => false,
        }
    }
}

impl<T: ToBool + ?Sized> ToBool for &T {
    fn parse_bool(&self) -> Option<bool> {
        (**self).parse_bool()
    }

    fn to_b(&self) -> bool {
        (**self).to_b()
    }
}

macro_rules! impl_to_bool_numeric {
    ($zero:literal, $one:literal, $($t:ident)*) => {
        $(
            impl ToBool for $t {
                #[allow(clippy::float_cmp)]
                fn parse_bool(&self) -> Option<bool> {
                    if *self == $zero {
                        Some(false)
                    } else if *self == $one {
                        Some(true)
                    } else {
                        None
                    }
                }

                fn to_b(&self) -> bool {
                    self.parse_bool()
                        .unwrap_or_else(|| default_for(Kind::Numeric))
                }
            }
        )*
    };
}

impl_to_bool_numeric!(0, 1, i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
impl_to_bool_numeric!(0.0, 1.0, f32 f64);

impl ToBool for Value {
    fn parse_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => value.parse_bool(),
            Value::Nil => Some(false),
            Value::Str(s) | Value::Symbol(s) => s.parse_bool(),
            Value::Int(n) => n.parse_bool(),
            Value::Float(x) => x.parse_bool(),
            Value::Other { .. } => None,
        }
    }

    fn to_b(&self) -> bool {
        if let Some(value) = self.parse_bool() {
            return value;
        }
        let policy = fallback(self.kind());
        debug!("`{}` is undetermined, applying {:?}", self, policy);
        match policy {
            Fallback::Default(value) => value,
            // `Never` kinds always parse, this arm only keeps the match total
            Fallback::Never | Fallback::Truthiness => is_truthy(self),
        }
    }
}

fn default_for(kind: Kind) -> bool {
    match fallback(kind) {
        Fallback::Default(value) => value,
        Fallback::Never | Fallback::Truthiness => true,
    }
}

/// Strict conversion of any value.
///
/// Values without a strict parse and values whose parse is undetermined
/// both give `None`; see [`Value::has_strict_parse`] to tell them apart.
pub fn to_boolean_strict(value: &Value) -> Option<bool> {
    value.parse_bool()
}

/// Lenient conversion of any value, using the per-type [`fallback`] table.
pub fn to_boolean_lenient(value: &Value) -> bool {
    value.to_b()
}

/// Strict conversion that fails with [`Error::TypeMismatch`] instead of
/// returning `None`.
pub fn coerce_strict_or_fail(value: &Value) -> Result<bool, Error> {
    match to_boolean_strict(value) {
        Some(result) => Ok(result),
        None => {
            debug!("cannot convert `{}` to bool", value);
            Err(Error::type_mismatch(value))
        }
    }
}

/// `true` if the value is literally `true` or `false`.
pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

/// `true` if the value is literally `true`.
pub fn is_true(value: &Value) -> bool {
    matches!(value, Value::Bool(true))
}

/// `true` if the value is literally `false`.
pub fn is_false(value: &Value) -> bool {
    matches!(value, Value::Bool(false))
}

/// The zero element of `bool`.
pub const fn zero() -> bool {
    false
}

/// `true` only for `false`.
pub const fn is_zero(value: bool) -> bool {
    !value
}

#[cfg(test)]
mod tests {

    #![allow(clippy::unwrap_used)]

    use quickcheck::Arbitrary;
    use rand::Rng;

    use super::*;
    use crate::FALSE_VALUES;
    use crate::TRUE_VALUES;

    #[test]
    fn lenient_strings() {
        assert!(!to_boolean_lenient(&Value::from("")));
        assert!(!to_boolean_lenient(&Value::from("maybe")));
        assert!(to_boolean_lenient(&Value::from(" YES ")));
        assert!(!to_boolean_lenient(&Value::from("off")));
        assert!(!"banana".to_b());
        assert!("On".to_string().to_b());
    }

    #[test]
    fn lenient_symbols() {
        assert!(to_boolean_lenient(&Value::Symbol("yes".into())));
        assert!(!to_boolean_lenient(&Value::Symbol("n".into())));
        assert!(!to_boolean_lenient(&Value::Symbol("whatever".into())));
        assert_eq!(
            Some(true),
            to_boolean_strict(&Value::Symbol("TRUE".into()))
        );
    }

    #[test]
    fn lenient_numbers() {
        assert!(to_boolean_lenient(&Value::from(2)));
        assert!(to_boolean_lenient(&Value::from(-1)));
        assert!(!to_boolean_lenient(&Value::from(0)));
        assert!(to_boolean_lenient(&Value::from(1)));
        assert!(!to_boolean_lenient(&Value::from(0.0)));
        assert!(!to_boolean_lenient(&Value::from(-0.0)));
        assert!(to_boolean_lenient(&Value::from(1.0)));
        assert!(to_boolean_lenient(&Value::from(0.5)));
        assert!(to_boolean_lenient(&Value::from(f64::NAN)));
        assert!(!0_u64.to_b());
        assert!(u128::MAX.to_b());
        assert_eq!(None, 2_i8.parse_bool());
        assert_eq!(Some(true), 1_usize.parse_bool());
    }

    #[test]
    fn lenient_nil_and_bool() {
        assert!(!to_boolean_lenient(&Value::Nil));
        assert_eq!(Some(false), to_boolean_strict(&Value::Nil));
        assert!(to_boolean_lenient(&Value::Bool(true)));
        assert!(!to_boolean_lenient(&Value::Bool(false)));
        assert!(!None::<&str>.to_b());
        assert_eq!(Some(false), None::<i32>.parse_bool());
        assert!(Some("y").to_b());
        assert!(Some(5_i32).to_b());
    }

    #[test]
    fn other_values() {
        let object = Value::other("Object", "#<Object>");
        assert_eq!(None, to_boolean_strict(&object));
        assert!(to_boolean_lenient(&object));
        assert_eq!(
            Err(Error::TypeMismatch {
                repr: "#<Object>".into(),
                type_name: "Object",
            }),
            coerce_strict_or_fail(&object)
        );
    }

    #[test]
    fn strict_or_fail() {
        assert_eq!(Ok(true), coerce_strict_or_fail(&Value::from("yes")));
        assert_eq!(Ok(false), coerce_strict_or_fail(&Value::from(0)));
        assert_eq!(Ok(false), coerce_strict_or_fail(&Value::Nil));
        assert_eq!(Ok(true), coerce_strict_or_fail(&Value::Bool(true)));
        let error = coerce_strict_or_fail(&Value::from("banana")).unwrap_err();
        assert_eq!(
            Error::TypeMismatch {
                repr: "\"banana\"".into(),
                type_name: "string",
            },
            error
        );
        assert_eq!(
            "cannot convert `\"banana\"` of type `string` to bool",
            error.to_string()
        );
        assert!(matches!(
            coerce_strict_or_fail(&Value::from(2)),
            Err(Error::TypeMismatch { type_name: "integer", .. })
        ));
    }

    #[test]
    fn predicates() {
        assert!(is_true(&Value::Bool(true)));
        assert!(!is_true(&Value::from(1)));
        assert!(!is_true(&Value::from("true")));
        assert!(!is_boolean(&Value::from("true")));
        assert!(!is_boolean(&Value::Nil));
        assert!(is_boolean(&Value::Bool(false)));
        assert!(is_false(&Value::Bool(false)));
        assert!(!is_false(&Value::Nil));
        assert!(!is_false(&Value::from(0)));
    }

    #[test]
    fn zero_is_false() {
        assert!(!zero());
        assert!(is_zero(false));
        assert!(!is_zero(true));
    }

    #[quickcheck_macros::quickcheck]
    fn lenient_is_idempotent(ArbitraryValue(value): ArbitraryValue) {
        let once = to_boolean_lenient(&value);
        assert_eq!(
            once,
            to_boolean_lenient(&Value::Bool(once)),
            "value = `{}`",
            value
        );
    }

    #[quickcheck_macros::quickcheck]
    fn lenient_agrees_with_strict(ArbitraryValue(value): ArbitraryValue) {
        match to_boolean_strict(&value) {
            Some(expected) => {
                assert_eq!(expected, to_boolean_lenient(&value), "value = `{}`", value);
                assert_eq!(Ok(expected), coerce_strict_or_fail(&value));
            }
            None => {
                assert!(coerce_strict_or_fail(&value).is_err(), "value = `{}`", value);
                let expected = match value.kind() {
                    Kind::Str | Kind::Symbol => false,
                    Kind::Numeric | Kind::Other => true,
                    Kind::Bool | Kind::Nil => unreachable!("value = `{}`", value),
                };
                assert_eq!(expected, to_boolean_lenient(&value), "value = `{}`", value);
            }
        }
    }

    #[quickcheck_macros::quickcheck]
    fn predicates_never_coerce(ArbitraryValue(value): ArbitraryValue) {
        assert_eq!(is_boolean(&value), is_true(&value) || is_false(&value));
        assert!(!(is_true(&value) && is_false(&value)));
        if !matches!(value, Value::Bool(_)) {
            assert!(!is_boolean(&value), "value = `{}`", value);
        }
    }

    #[derive(Debug, Clone)]
    struct ArbitraryValue(Value);

    impl Arbitrary for ArbitraryValue {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let mut prng = rand::thread_rng();
            let value = match prng.gen_range(0..8) {
                0 => Value::Bool(prng.gen_bool(0.5)),
                1 => Value::Nil,
                2 => Value::Str(random_token(&mut prng)),
                3 => Value::Str(String::arbitrary(g)),
                4 => Value::Symbol(random_token(&mut prng)),
                5 => Value::Int(prng.gen_range(-3..4)),
                6 => Value::Float(f64::arbitrary(g)),
                _ => Value::other("Object", "#<Object>"),
            };
            Self(value)
        }
    }

    fn random_token(prng: &mut impl Rng) -> String {
        let i = prng.gen_range(0..(TRUE_VALUES.len() + FALSE_VALUES.len() + 1));
        TRUE_VALUES
            .iter()
            .chain(FALSE_VALUES.iter())
            .nth(i)
            .map(|token| token.to_uppercase())
            .unwrap_or_else(|| "maybe".to_string())
    }
}
