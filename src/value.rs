//! Argument values as produced by a command-line parser.
//!
//! A parser hands over a flat map from key to an optional value. Keys follow
//! the parser's own conventions (`--speed`, `<name>`, `ship`) and are treated
//! as opaque strings. A key mapped to `None` was declared by the grammar but
//! not given on the command line.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::BindError;

/// The flat key → value map consumed by the unmarshaller.
pub type Arguments = HashMap<String, Option<ArgValue>>;

/// A single parsed argument value.
///
/// Serializes untagged, so docopt-style JSON (`true`, `3`, `"10"`,
/// `["a", "b"]`) maps straight onto the variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// A switch or command that is either present or not.
    Bool(bool),
    /// How many times a repeatable flag was given.
    Count(u64),
    /// A single token, still to be coerced into the field's type.
    Str(String),
    /// A repeated positional or option.
    List(Vec<String>),
}

impl ArgValue {
    /// Short name of the variant, used in mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            ArgValue::Bool(_) => "boolean",
            ArgValue::Count(_) => "count",
            ArgValue::Str(_) => "string",
            ArgValue::List(_) => "list",
        }
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        ArgValue::Bool(b)
    }
}

impl From<u64> for ArgValue {
    fn from(n: u64) -> Self {
        ArgValue::Count(n)
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        ArgValue::Str(s.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        ArgValue::Str(s)
    }
}

impl From<Vec<String>> for ArgValue {
    fn from(items: Vec<String>) -> Self {
        ArgValue::List(items)
    }
}

impl From<Vec<&str>> for ArgValue {
    fn from(items: Vec<&str>) -> Self {
        ArgValue::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Build an [`Arguments`] map from a JSON object such as a docopt `--json`
/// dump.
///
/// Values may be `null`, booleans, non-negative integers, strings or arrays
/// of strings. Anything else is rejected with [`BindError::Source`].
pub fn arguments_from_json(value: serde_json::Value) -> Result<Arguments, BindError> {
    let serde_json::Value::Object(map) = value else {
        return Err(BindError::Source(format!(
            "expected a JSON object of arguments, found {}",
            json_kind(&value)
        )));
    };

    map.into_iter()
        .map(|(key, raw)| {
            let parsed = serde_json::from_value::<Option<ArgValue>>(raw)
                .map_err(|e| BindError::Source(format!("{key}: {e}")))?;
            Ok((key, parsed))
        })
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
