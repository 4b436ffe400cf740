use serde_json::{Map, Value};

/// One hop into a JSON document.
#[derive(Debug, Clone, Copy)]
pub enum Step<'a> {
    Key(&'a str),
    Index(usize),
}

/// Borrow a value as a record, if it is a JSON object.
pub fn as_record(value: &Value) -> Option<&Map<String, Value>> {
    value.as_object()
}

/// The elements of a list-valued field, or an empty slice when the field is
/// missing or not an array.
pub fn list_field<'a>(record: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    record
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Follow `steps` from `value`, returning `None` as soon as a hop is missing
/// or lands on the wrong kind of container.
pub fn path<'a>(value: &'a Value, steps: &[Step<'_>]) -> Option<&'a Value> {
    steps.iter().try_fold(value, |current, step| match step {
        Step::Key(key) => current.as_object()?.get(*key),
        Step::Index(idx) => current.as_array()?.get(*idx),
    })
}

/// Like [`path`], but yields an owned `null` for anything absent.
pub fn path_or_null(value: &Value, steps: &[Step<'_>]) -> Value {
    path(value, steps).cloned().unwrap_or(Value::Null)
}

/// Name of the JSON type, for diagnostics.
pub fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
