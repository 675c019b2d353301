use crate::parse_strict;
use crate::Error;

/// Reads a boolean flag from the environment; unset variables are `false`.
pub fn env_to_bool(name: &str) -> Result<bool, Error> {
    match std::env::var(name) {
        Ok(value) => str_to_bool(name, value.as_str()),
        Err(_) => Ok(false),
    }
}

pub fn str_to_bool(name: &str, s: &str) -> Result<bool, Error> {
    parse_strict(s).ok_or_else(|| Error::InvalidFlag {
        name: name.to_string(),
        value: s.to_string(),
    })
}

pub fn bool_to_str(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}
