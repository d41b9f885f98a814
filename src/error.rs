use miette::Diagnostic;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum DtcgError {
    #[error("Expected an object at {path}, found {found}")]
    #[diagnostic(
        code(dtcg::expected_object),
        help("Every group and design token must be a JSON object. Check the value at this path.")
    )]
    ExpectedObject { path: String, found: &'static str },
}

/// Renders a node path for error messages and logs.
pub(crate) fn display_path(path: &[String]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(".")
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
