use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::duration::DurationError;

#[derive(Debug, Error)]
pub enum BindError {
    #[error("Options struct {options} binds '{key}', which the argument source does not produce")]
    MissingKey { options: &'static str, key: String },

    #[error("Argument '{key}' is missing from the options struct")]
    UnknownKey { key: String },

    #[error("Arguments missing from the options struct: {}", list_keys(.0))]
    UnknownKeys(Vec<BindError>),

    #[error("{key}: {source}")]
    Format { key: String, source: FormatError },

    #[error("{key}: {message}")]
    Coercion { key: String, message: String },

    #[error("{key}: expected {expected}, found {found}")]
    Mismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid argument source: {0}")]
    Source(String),
}

impl BindError {
    /// The argument key this error is about, when there is exactly one.
    pub fn key(&self) -> Option<&str> {
        match self {
            BindError::MissingKey { key, .. }
            | BindError::UnknownKey { key }
            | BindError::Format { key, .. }
            | BindError::Coercion { key, .. }
            | BindError::Mismatch { key, .. } => Some(key),
            BindError::UnknownKeys(_) | BindError::Source(_) => None,
        }
    }
}

fn list_keys(errors: &[BindError]) -> String {
    errors
        .iter()
        .filter_map(BindError::key)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Why a textual argument could not become the field's value.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error(transparent)]
    Int(#[from] ParseIntError),

    #[error(transparent)]
    Float(#[from] ParseFloatError),

    #[error(transparent)]
    Duration(#[from] DurationError),

    #[error("count {value} does not fit in {target}")]
    OutOfRange { value: u64, target: &'static str },

    #[error("{0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_formats_correctly() {
        let err = BindError::MissingKey {
            options: "NavalFate",
            key: "--speed".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("NavalFate"));
        assert!(msg.contains("--speed"));
    }

    #[test]
    fn unknown_keys_lists_every_key() {
        let err = BindError::UnknownKeys(vec![
            BindError::UnknownKey { key: "<x>".into() },
            BindError::UnknownKey { key: "--moored".into() },
        ]);
        assert_eq!(
            err.to_string(),
            "Arguments missing from the options struct: <x>, --moored"
        );
    }

    #[test]
    fn format_error_is_prefixed_with_key() {
        let source = "abc".parse::<i64>().unwrap_err();
        let err = BindError::Format {
            key: "<x>".into(),
            source: source.into(),
        };
        assert_eq!(err.to_string(), "<x>: invalid digit found in string");
    }

    #[test]
    fn key_accessor() {
        let err = BindError::Coercion {
            key: "<url>".into(),
            message: "bad scheme".into(),
        };
        assert_eq!(err.key(), Some("<url>"));
        assert_eq!(BindError::Source("x".into()).key(), None);
    }
}
