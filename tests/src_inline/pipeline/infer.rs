use super::*;
use crate::model::value::InferredValue;

#[test]
fn empty_and_whitespace_are_null() {
    assert_eq!(infer("", "name"), InferredValue::Null);
    assert_eq!(infer("   ", "name"), InferredValue::Null);
    assert_eq!(infer("\t", "sortorder"), InferredValue::Null);
}

#[test]
fn suffix_columns_parse_integers_first() {
    assert_eq!(infer("7", "sortorder"), InferredValue::Int(7));
    assert_eq!(infer("42", "croptypeid"), InferredValue::Int(42));
    assert_eq!(infer("3", "Id"), InferredValue::Int(3));
    assert_eq!(infer("-5", "regionid"), InferredValue::Int(-5));
}

#[test]
fn suffix_parse_failure_falls_through() {
    assert_eq!(infer("7.5", "sortorder"), InferredValue::Float(7.5));
    assert_eq!(infer("n/a", "locationid"), InferredValue::Str("n/a".to_string()));
}

#[test]
fn plain_numeric_columns_come_out_float() {
    // only the column suffix produces Int; "7" anywhere else is a float
    assert_eq!(infer("7", "rate"), InferredValue::Float(7.0));
    assert_eq!(infer("0.25", "yieldcd"), InferredValue::Float(0.25));
}

#[test]
fn numeric_shape_with_failed_parse_degrades_to_string() {
    assert_eq!(infer("1.2.3", "rate"), InferredValue::Str("1.2.3".to_string()));
    assert_eq!(infer(".", "rate"), InferredValue::Str(".".to_string()));
}

#[test]
fn boolean_words_are_case_insensitive() {
    assert_eq!(infer("true", "covercrop"), InferredValue::Bool(true));
    assert_eq!(infer("TRUE", "covercrop"), InferredValue::Bool(true));
    assert_eq!(infer("Yes", "covercrop"), InferredValue::Bool(true));
    assert_eq!(infer("t", "covercrop"), InferredValue::Bool(true));
    assert_eq!(infer("y", "covercrop"), InferredValue::Bool(true));
    assert_eq!(infer("FALSE", "covercrop"), InferredValue::Bool(false));
    assert_eq!(infer("no", "covercrop"), InferredValue::Bool(false));
    assert_eq!(infer("f", "covercrop"), InferredValue::Bool(false));
    assert_eq!(infer("N", "covercrop"), InferredValue::Bool(false));
}

#[test]
fn numeric_zero_and_one_stay_numeric() {
    // "1" and "0" hit the numeric rule before the boolean words do
    assert_eq!(infer("1", "covercrop"), InferredValue::Float(1.0));
    assert_eq!(infer("0", "covercrop"), InferredValue::Float(0.0));
}

#[test]
fn everything_else_is_an_unchanged_string() {
    assert_eq!(infer("Wheat", "name"), InferredValue::Str("Wheat".to_string()));
    assert_eq!(infer(" Wheat ", "name"), InferredValue::Str(" Wheat ".to_string()));
    assert_eq!(infer("-5", "rate"), InferredValue::Str("-5".to_string()));
    assert_eq!(infer("1e3", "rate"), InferredValue::Str("1e3".to_string()));
}
