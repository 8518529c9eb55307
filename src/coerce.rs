//! Whole-result type coercion
//!
//! Applied once to the fully substituted text, selected by the first
//! placeholder's tags. Malformed payloads degrade to the uncoerced text
//! instead of failing: a bad numeric field must not turn the whole template
//! into NaN, and naive truthiness would make every non-empty string `true`.

use serde_json::{Number, Value};

use crate::grammar::TypeTag;

/// Literal text substituted for unresolved placeholders under
/// [`MissingKeys::Undefined`](crate::MissingKeys::Undefined)
pub const UNDEFINED: &str = "undefined";

/// Coerce the assembled text per the first placeholder's tags.
///
/// The `:null` modifier wins over any type tag: text that is exactly the
/// unresolved-value marker becomes an explicit null.
pub fn finalize(text: String, type_tag: Option<TypeTag>, null_tag: bool) -> Value {
    if null_tag && text == UNDEFINED {
        return Value::Null;
    }

    match type_tag {
        Some(TypeTag::Int) => coerce_int(text),
        Some(TypeTag::Num) => coerce_num(text),
        Some(TypeTag::Bool) => coerce_bool(text),
        Some(TypeTag::Json) => coerce_json(text),
        Some(TypeTag::Str) | Some(TypeTag::Any) | None => Value::String(text),
    }
}

/// Integer part of a finite numeric payload, otherwise the text unchanged
fn coerce_int(text: String) -> Value {
    match text.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Value::from(number.trunc() as i64),
        _ => Value::String(text),
    }
}

fn coerce_num(text: String) -> Value {
    if let Ok(integer) = text.trim().parse::<i64>() {
        return Value::from(integer);
    }
    match text.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => match Number::from_f64(number) {
            Some(number) => Value::Number(number),
            None => Value::String(text),
        },
        _ => Value::String(text),
    }
}

/// Only the literal forms "true"/"false" coerce; anything else passes
/// through unchanged.
fn coerce_bool(text: String) -> Value {
    match text.as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(text),
    }
}

fn coerce_json(text: String) -> Value {
    match serde_json::from_str(&text) {
        Ok(parsed) => parsed,
        Err(_) => Value::String(text),
    }
}
