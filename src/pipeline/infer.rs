use crate::model::value::InferredValue;

/// Column-name suffixes that mark integer-keyed or ordinal values.
const INT_SUFFIXES: [&str; 4] = ["id", "count", "order", "sortorder"];

const TRUE_WORDS: [&str; 5] = ["true", "yes", "t", "y", "1"];
const FALSE_WORDS: [&str; 5] = ["false", "no", "f", "n", "0"];

/// Classifies one raw cell. Precedence is fixed: null, suffix-driven
/// integer, numeric shape, boolean word, string fallback.
///
/// The numeric-shape rule matches plain integers too, so a value like
/// `"5"` in a non-suffixed column comes out `Float(5.0)`; only the
/// column suffix produces `Int`. Downstream consumers rely on this.
pub fn infer(value: &str, column: &str) -> InferredValue {
    if value.trim().is_empty() {
        return InferredValue::Null;
    }

    let column = column.to_lowercase();
    if INT_SUFFIXES.iter().any(|s| column.ends_with(s))
        && let Ok(n) = value.parse::<i64>()
    {
        return InferredValue::Int(n);
    }

    if has_numeric_shape(value)
        && let Ok(f) = value.parse::<f64>()
    {
        return InferredValue::Float(f);
    }

    let lowered = value.to_lowercase();
    if TRUE_WORDS.contains(&lowered.as_str()) {
        return InferredValue::Bool(true);
    }
    if FALSE_WORDS.contains(&lowered.as_str()) {
        return InferredValue::Bool(false);
    }

    InferredValue::Str(value.to_string())
}

// Digits and dots only; no sign, no exponent. "1.2.3" matches the
// shape and is left to the parse attempt to reject.
fn has_numeric_shape(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit() || c == '.')
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/infer.rs"]
mod tests;
