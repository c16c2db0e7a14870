/// Function-doc rendering — turn a function catalog into the documentation
/// text embedded in the model's instructions.
///
/// The input schema mirrors the JSON-schema shape of the source catalogs:
/// `{"name", "description", "parameters": {"type": "object", "properties":
/// {...}, "required": [...]}}`. Rendering is read-only and never fails on
/// well-formed input; missing descriptions default to the empty string and
/// missing types to `"any"`.
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CodecError;

mod python;
mod xml;

/// One function's documentation record, owned by the external caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDoc {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: ParameterSchema,
}

/// The `parameters` block of a function doc.
///
/// Parameters keep their catalog order: required parameters typically come
/// first, and the Python renderer depends on that to emit defaulted
/// parameters after bare ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSchema {
    #[serde(rename = "type", default = "object_type")]
    pub schema_type: String,
    #[serde(default)]
    pub properties: IndexMap<String, ParameterDoc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Default for ParameterSchema {
    fn default() -> Self {
        Self {
            schema_type: object_type(),
            properties: IndexMap::new(),
            required: Vec::new(),
        }
    }
}

impl ParameterSchema {
    #[must_use]
    pub fn is_required(&self, param_name: &str) -> bool {
        self.required.iter().any(|r| r == param_name)
    }
}

fn object_type() -> String {
    "object".to_string()
}

/// One declared parameter. Extra schema fields (`enum`, constraints, …) are
/// carried through verbatim so JSON rendering stays lossless.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParameterDoc {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ParameterDoc {
    /// The declared type tag, `"any"` when absent.
    #[must_use]
    pub fn type_tag(&self) -> &str {
        self.param_type.as_deref().unwrap_or("any")
    }

    #[must_use]
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Documentation output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    Json,
    Python,
    Xml,
}

impl DocFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DocFormat::Json => "json",
            DocFormat::Python => "python",
            DocFormat::Xml => "xml",
        }
    }
}

impl fmt::Display for DocFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocFormat {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(DocFormat::Json),
            "python" => Ok(DocFormat::Python),
            "xml" => Ok(DocFormat::Xml),
            _ => Err(CodecError::Config(format!("unknown doc format '{s}'"))),
        }
    }
}

/// Render a function catalog as documentation text in the given format.
///
/// Functions render in input order. None of the renderers escape
/// markup-significant characters in names or descriptions beyond what their
/// emitter does natively; callers feeding untrusted text must pre-sanitize.
#[must_use]
pub fn render_function_docs(functions: &[FunctionDoc], format: DocFormat) -> String {
    match format {
        DocFormat::Json => render_json(functions),
        DocFormat::Python => python::render_python(functions),
        DocFormat::Xml => xml::render_xml(functions),
    }
}

/// Pretty-printed serialization of the schema slice verbatim.
fn render_json(functions: &[FunctionDoc]) -> String {
    serde_json::to_string_pretty(functions).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
pub(crate) fn sample_weather_doc() -> FunctionDoc {
    FunctionDoc {
        name: "get_weather".to_string(),
        description: "Get the current weather for a location".to_string(),
        parameters: ParameterSchema {
            schema_type: "object".to_string(),
            properties: IndexMap::from([
                (
                    "location".to_string(),
                    ParameterDoc {
                        param_type: Some("string".to_string()),
                        description: Some("City name".to_string()),
                        ..ParameterDoc::default()
                    },
                ),
                (
                    "unit".to_string(),
                    ParameterDoc {
                        param_type: Some("string".to_string()),
                        description: Some("Temperature unit".to_string()),
                        default: Some(Value::String("celsius".to_string())),
                        ..ParameterDoc::default()
                    },
                ),
            ]),
            required: vec!["location".to_string()],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_render_round_trips() {
        let docs = vec![sample_weather_doc()];
        let rendered = render_function_docs(&docs, DocFormat::Json);
        let parsed: Vec<FunctionDoc> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, docs);
    }

    #[test]
    fn json_render_matches_catalog_shape() {
        let rendered = render_function_docs(&[sample_weather_doc()], DocFormat::Json);
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value[0]["name"], json!("get_weather"));
        assert_eq!(value[0]["parameters"]["type"], json!("object"));
        assert_eq!(
            value[0]["parameters"]["properties"]["location"]["type"],
            json!("string")
        );
        assert_eq!(value[0]["parameters"]["required"], json!(["location"]));
        assert_eq!(
            value[0]["parameters"]["properties"]["unit"]["default"],
            json!("celsius")
        );
    }

    #[test]
    fn catalog_deserializes_with_missing_optional_fields() {
        let doc: FunctionDoc = serde_json::from_value(json!({
            "name": "bare",
        }))
        .unwrap();
        assert_eq!(doc.description, "");
        assert_eq!(doc.parameters.schema_type, "object");
        assert!(doc.parameters.properties.is_empty());
        assert!(doc.parameters.required.is_empty());
    }

    #[test]
    fn extra_schema_fields_survive_round_trip() {
        let doc: FunctionDoc = serde_json::from_value(json!({
            "name": "set_mode",
            "description": "Set mode",
            "parameters": {
                "type": "object",
                "properties": {
                    "mode": { "type": "string", "enum": ["fast", "slow"] }
                },
                "required": ["mode"]
            }
        }))
        .unwrap();
        let rendered = render_function_docs(std::slice::from_ref(&doc), DocFormat::Json);
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            value[0]["parameters"]["properties"]["mode"]["enum"],
            json!(["fast", "slow"])
        );
    }

    #[test]
    fn doc_format_from_str() {
        assert_eq!("json".parse::<DocFormat>().unwrap(), DocFormat::Json);
        assert_eq!("Python".parse::<DocFormat>().unwrap(), DocFormat::Python);
        assert_eq!("XML".parse::<DocFormat>().unwrap(), DocFormat::Xml);
        assert!(matches!(
            "markdown".parse::<DocFormat>().unwrap_err(),
            CodecError::Config(_)
        ));
    }
}
