/// JSON decoder — canonical call list from a model's JSON output.
///
/// Three single-call shapes are recognized, tried in order:
///
/// 1. `{"function_name": "f", "parameters": {...}}`
/// 2. `{"name": "f", "arguments": {...}}`
/// 3. `{"f": {...}}` — a single key whose value is the parameter object; a
///    non-object value means a call with no parameters.
///
/// A top-level array decodes each element independently, all-or-nothing; a
/// top-level object is a one-call list. An empty array is an empty call
/// list, not an error.
use serde_json::Value;

use crate::call::{Arguments, ToolCall};
use crate::error::CodecError;

/// Decode JSON-formatted function calls.
///
/// # Errors
///
/// [`CodecError::Syntax`] for text that is not valid JSON,
/// [`CodecError::Shape`] for JSON that matches no recognized call shape,
/// [`CodecError::Semantic`] for an empty function name.
pub fn decode_json(text: &str) -> Result<Vec<ToolCall>, CodecError> {
    let parsed: Value = serde_json::from_str(text)
        .map_err(|e| CodecError::Syntax(format!("invalid JSON: {e}")))?;

    match parsed {
        Value::Array(items) => items.iter().map(decode_single_call).collect(),
        other => Ok(vec![decode_single_call(&other)?]),
    }
}

fn decode_single_call(call: &Value) -> Result<ToolCall, CodecError> {
    let Value::Object(obj) = call else {
        return Err(CodecError::Shape(format!(
            "expected a call object, got {}",
            kind_label(call)
        )));
    };

    // Shape 1: explicit function_name/parameters pair.
    if let (Some(name), Some(params)) = (obj.get("function_name"), obj.get("parameters")) {
        return shaped_call(name, params, "parameters");
    }

    // Shape 2: alternative name/arguments pair.
    if let (Some(name), Some(params)) = (obj.get("name"), obj.get("arguments")) {
        return shaped_call(name, params, "arguments");
    }

    // Shape 3: simplified single-key object.
    if obj.len() == 1 {
        if let Some((name, value)) = obj.iter().next() {
            let arguments = match value {
                Value::Object(params) => Arguments::from_object(params.clone()),
                // Non-object value: a call with no parameters.
                _ => Arguments::default(),
            };
            return new_call(name, arguments);
        }
    }

    Err(CodecError::Shape(format!(
        "unrecognized call shape: {}",
        Value::Object(obj.clone())
    )))
}

fn shaped_call(name: &Value, params: &Value, params_field: &str) -> Result<ToolCall, CodecError> {
    let Value::String(name) = name else {
        return Err(CodecError::Shape(format!(
            "function name must be a string, got {}",
            kind_label(name)
        )));
    };
    let Value::Object(params) = params else {
        return Err(CodecError::Shape(format!(
            "'{params_field}' must be an object, got {}",
            kind_label(params)
        )));
    };
    new_call(name, Arguments::from_object(params.clone()))
}

fn new_call(name: &str, arguments: Arguments) -> Result<ToolCall, CodecError> {
    if name.is_empty() {
        return Err(CodecError::Semantic(
            "function name is empty".to_string(),
        ));
    }
    Ok(ToolCall::new(name.to_string(), arguments))
}

pub(crate) fn kind_label(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
