//! Conversions between the canonical string form of an attribute and its
//! typed value. Decoding rejects malformed literals with `None`; callers
//! treat that as "reject the attribute", never as a fault.

use std::fmt::Display;
use std::str::FromStr;

use crate::value::{DataKind, ScalarKind, Value};

/// Decodes `literal` against `kind`.
///
/// ```
/// use tokenext::codec::decode;
/// use tokenext::value::{DataKind, ScalarKind, Value};
///
/// let kind = DataKind::List(ScalarKind::Integer);
/// assert_eq!(Some(Value::Integers(vec![1, 2, 3])), decode(kind, "[1, 2, 3]"));
/// assert_eq!(None, decode(kind, "[1, x]"));
/// ```
pub fn decode(kind: DataKind, literal: &str) -> Option<Value> {
    match kind {
        DataKind::Scalar(scalar) => decode_scalar(scalar, literal),
        DataKind::List(element) => decode_list(element, literal),
    }
}

/// Renders a stored value back to its canonical string form. List kinds
/// render bracketed with element order preserved, so decode and encode
/// cycles are idempotent in visible form.
pub fn encode(value: &Value) -> String {
    match value {
        Value::Integer(value) => value.to_string(),
        Value::Double(value) => value.to_string(),
        Value::Byte(value) => value.to_string(),
        Value::Str(value) => value.clone(),
        Value::Boolean(value) => value.to_string(),
        Value::Integers(elements) => encode_list(elements),
        Value::Doubles(elements) => encode_list(elements),
        Value::Bytes(elements) => encode_list(elements),
        Value::Strs(elements) => encode_list(elements),
        Value::Booleans(elements) => encode_list(elements),
    }
}

fn decode_scalar(kind: ScalarKind, literal: &str) -> Option<Value> {
    match kind {
        ScalarKind::Integer => literal.trim().parse().ok().map(Value::Integer),
        ScalarKind::Double => literal.trim().parse().ok().map(Value::Double),
        ScalarKind::Byte => literal.trim().parse().ok().map(Value::Byte),
        // The literal is the value, untouched.
        ScalarKind::String => Some(Value::Str(String::from(literal))),
        ScalarKind::Boolean => literal.trim().parse().ok().map(Value::Boolean),
    }
}

fn decode_list(element: ScalarKind, literal: &str) -> Option<Value> {
    let inner = literal.trim().strip_prefix('[')?.strip_suffix(']')?;
    let elements = inner.split(',').map(str::trim);
    // An empty element rejects the whole list, the empty literal `[]`
    // included: stripping its brackets splits into one empty element.
    match element {
        ScalarKind::Integer => parse_elements(elements).map(Value::Integers),
        ScalarKind::Double => parse_elements(elements).map(Value::Doubles),
        ScalarKind::Byte => parse_elements(elements).map(Value::Bytes),
        ScalarKind::String => elements
            .map(|element| {
                if element.is_empty() {
                    None
                } else {
                    Some(String::from(element))
                }
            })
            .collect::<Option<Vec<_>>>()
            .map(Value::Strs),
        ScalarKind::Boolean => parse_elements(elements).map(Value::Booleans),
    }
}

fn parse_elements<'a, T: FromStr>(elements: impl Iterator<Item = &'a str>) -> Option<Vec<T>> {
    elements.map(|element| element.parse().ok()).collect()
}

fn encode_list<T: Display>(elements: &[T]) -> String {
    let rendered: Vec<String> = elements.iter().map(T::to_string).collect();
    format!("[{}]", rendered.join(", "))
}
