use std::fmt;

use serde::Serialize;

/// One cell after classification. Exports carry no schema, so every
/// value arrives as text and is tagged by `pipeline::infer`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InferredValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Null,
}

impl InferredValue {
    pub fn is_null(&self) -> bool {
        matches!(self, InferredValue::Null)
    }
}

impl fmt::Display for InferredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferredValue::Int(v) => write!(f, "{v}"),
            InferredValue::Float(v) => write!(f, "{v}"),
            InferredValue::Bool(v) => write!(f, "{v}"),
            InferredValue::Str(v) => f.write_str(v),
            InferredValue::Null => f.write_str("null"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/value.rs"]
mod tests;
