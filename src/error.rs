use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("cannot convert `{repr}` of type `{type_name}` to bool")]
    TypeMismatch {
        repr: String,
        type_name: &'static str,
    },
    #[error("invalid literal: `{0}`")]
    InvalidLiteral(String),
    #[error("invalid boolean in `{name}`: `{value}`")]
    InvalidFlag { name: String, value: String },
}

impl Error {
    pub(crate) fn type_mismatch(value: &crate::Value) -> Error {
        Error::TypeMismatch {
            repr: value.to_string(),
            type_name: value.type_name(),
        }
    }
}
