/// Format dispatch — route raw model output to the right decoder.
///
/// Decoding runs in two fixed steps: the `<tool_call>` wrapper marker is
/// stripped first (a pass-through for unmarked input), then the text goes to
/// the decoder selected by [`OutputFormat`]. Dispatch is an exhaustive match
/// over the format enum, so adding a format is a compile-time-checked
/// extension rather than a string-matched fallback.
use std::fmt;
use std::str::FromStr;

use crate::call::ToolCall;
use crate::error::CodecError;
use crate::instructions;

pub mod json;
pub mod xml;

pub use json::decode_json;
pub use xml::decode_xml;

/// Opening marker some models emit around their entire output.
pub const TOOL_CALL_OPEN: &str = "<tool_call>";
/// Closing marker matching [`TOOL_CALL_OPEN`].
pub const TOOL_CALL_CLOSE: &str = "</tool_call>";

/// The output format a model was instructed to produce.
///
/// The `*Tagged` variants describe runs where the model wraps its output in
/// the `<tool_call>` marker pair; the marker stripper handles both cases, so
/// a tagged variant decodes exactly like its base format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Python,
    Json,
    Xml,
    PythonTagged,
    JsonTagged,
    XmlTagged,
}

impl OutputFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Python => "Python",
            OutputFormat::Json => "JSON",
            OutputFormat::Xml => "XML",
            OutputFormat::PythonTagged => "PythonTagged",
            OutputFormat::JsonTagged => "JSONTagged",
            OutputFormat::XmlTagged => "XMLTagged",
        }
    }

    #[must_use]
    pub fn is_tagged(self) -> bool {
        matches!(
            self,
            OutputFormat::PythonTagged | OutputFormat::JsonTagged | OutputFormat::XmlTagged
        )
    }

    /// The fixed instruction block shown to the model for this format.
    /// Tagged variants share their base format's instruction.
    #[must_use]
    pub fn instruction(self) -> &'static str {
        match self {
            OutputFormat::Python | OutputFormat::PythonTagged => {
                instructions::PYTHON_FORMAT_INSTRUCTION
            }
            OutputFormat::Json | OutputFormat::JsonTagged => instructions::JSON_FORMAT_INSTRUCTION,
            OutputFormat::Xml | OutputFormat::XmlTagged => instructions::XML_FORMAT_INSTRUCTION,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = CodecError;

    /// Parse a format token, case-insensitively. Both `JSONTagged` and
    /// `json_tagged` spellings are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().replace(['_', '-'], "").to_ascii_lowercase();
        match token.as_str() {
            "python" => Ok(OutputFormat::Python),
            "json" => Ok(OutputFormat::Json),
            "xml" => Ok(OutputFormat::Xml),
            "pythontagged" => Ok(OutputFormat::PythonTagged),
            "jsontagged" => Ok(OutputFormat::JsonTagged),
            "xmltagged" => Ok(OutputFormat::XmlTagged),
            _ => Err(CodecError::Config(format!(
                "unknown output format '{s}'"
            ))),
        }
    }
}

/// Strip the optional `<tool_call>…</tool_call>` wrapper from a model's raw
/// output.
///
/// Leading/trailing whitespace is trimmed first; when the trimmed text is
/// wrapped in the marker pair, both markers are removed and the inner text
/// is trimmed again. Repeats until a fixed point so the result is idempotent
/// even for pathological nested wrappers. Unmarked input passes through
/// (trimmed) unchanged.
#[must_use]
pub fn strip_tool_call_marker(text: &str) -> &str {
    let mut out = text.trim();
    while out.len() >= TOOL_CALL_OPEN.len() + TOOL_CALL_CLOSE.len()
        && out.starts_with(TOOL_CALL_OPEN)
        && out.ends_with(TOOL_CALL_CLOSE)
    {
        out = out[TOOL_CALL_OPEN.len()..out.len() - TOOL_CALL_CLOSE.len()].trim();
    }
    out
}

/// Decode raw model output into the canonical call list.
///
/// # Errors
///
/// Returns [`CodecError::Config`] for the Python variants — the Python-call
/// syntax decoder is provided by the host harness, not this crate — and the
/// routed decoder's `Syntax`/`Shape`/`Semantic` errors otherwise.
pub fn decode(text: &str, format: OutputFormat) -> Result<Vec<ToolCall>, CodecError> {
    let stripped = strip_tool_call_marker(text);
    match format {
        OutputFormat::Json | OutputFormat::JsonTagged => json::decode_json(stripped),
        OutputFormat::Xml | OutputFormat::XmlTagged => xml::decode_xml(stripped),
        OutputFormat::Python | OutputFormat::PythonTagged => Err(CodecError::Config(format!(
            "format '{format}' has no built-in decoder; Python-call syntax is parsed by the host harness"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- marker stripping -----------------------------------------------

    #[test]
    fn strip_removes_marker_pair() {
        assert_eq!(
            strip_tool_call_marker("<tool_call>test content</tool_call>"),
            "test content"
        );
    }

    #[test]
    fn strip_trims_inside_and_outside() {
        assert_eq!(
            strip_tool_call_marker("  <tool_call>  test content  </tool_call>  "),
            "test content"
        );
    }

    #[test]
    fn strip_passes_unmarked_input_through() {
        assert_eq!(strip_tool_call_marker("test content"), "test content");
        assert_eq!(strip_tool_call_marker("  padded  "), "padded");
    }

    #[test]
    fn strip_requires_both_markers() {
        assert_eq!(
            strip_tool_call_marker("<tool_call>unclosed"),
            "<tool_call>unclosed"
        );
        assert_eq!(
            strip_tool_call_marker("dangling</tool_call>"),
            "dangling</tool_call>"
        );
    }

    #[test]
    fn strip_is_idempotent() {
        let inputs = [
            "<tool_call>x</tool_call>",
            "plain",
            "<tool_call><tool_call>nested</tool_call></tool_call>",
            "<tool_call></tool_call>",
            "",
        ];
        for input in inputs {
            let once = strip_tool_call_marker(input);
            assert_eq!(strip_tool_call_marker(once), once, "input: {input:?}");
        }
    }

    #[test]
    fn strip_empty_wrapper_yields_empty() {
        assert_eq!(strip_tool_call_marker("<tool_call></tool_call>"), "");
    }

    // -- format parsing -------------------------------------------------

    #[test]
    fn format_from_str_accepts_both_spellings() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "JSONTagged".parse::<OutputFormat>().unwrap(),
            OutputFormat::JsonTagged
        );
        assert_eq!(
            "xml_tagged".parse::<OutputFormat>().unwrap(),
            OutputFormat::XmlTagged
        );
        assert_eq!(
            "Python".parse::<OutputFormat>().unwrap(),
            OutputFormat::Python
        );
    }

    #[test]
    fn format_from_str_rejects_unknown_token() {
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, CodecError::Config(_)));
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn tagged_variants_report_tagged() {
        assert!(OutputFormat::JsonTagged.is_tagged());
        assert!(!OutputFormat::Json.is_tagged());
    }

    // -- dispatch -------------------------------------------------------

    #[test]
    fn decode_routes_json() {
        let calls = decode(r#"{"f": {"x": 1}}"#, OutputFormat::Json).unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name(), "f");
    }

    #[test]
    fn decode_tagged_json_strips_marker_first() {
        let text = r#"<tool_call>{"function_name": "get_weather", "parameters": {"location": "Boston"}}</tool_call>"#;
        let calls = decode(text, OutputFormat::JsonTagged).unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name(), "get_weather");
    }

    #[test]
    fn decode_tagged_xml_strips_marker_first() {
        let text = "<tool_call>\n<function_call>\n<name>get_weather</name>\n\
                    <arguments><arg name=\"location\">Seattle</arg></arguments>\n\
                    </function_call>\n</tool_call>";
        let calls = decode(text, OutputFormat::XmlTagged).unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name(), "get_weather");
        assert_eq!(
            calls[0].arguments().named()["location"],
            serde_json::json!("Seattle")
        );
    }

    #[test]
    fn decode_python_is_config_error() {
        let err = decode("[f(x=1)]", OutputFormat::Python).unwrap_err();
        assert!(matches!(err, CodecError::Config(_)));
        let err = decode("[f(x=1)]", OutputFormat::PythonTagged).unwrap_err();
        assert!(matches!(err, CodecError::Config(_)));
    }

    #[test]
    fn instruction_is_shared_between_base_and_tagged() {
        assert_eq!(
            OutputFormat::Json.instruction(),
            OutputFormat::JsonTagged.instruction()
        );
        assert!(OutputFormat::Xml.instruction().contains("<function_call>"));
        assert!(OutputFormat::Python
            .instruction()
            .contains("func_name1(params_name1=params_value1"));
    }
}
