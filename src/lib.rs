//! Encoding/decoding core of an LLM tool-call evaluation harness.
//!
//! Converts between a canonical, format-independent representation of
//! function invocations ([`ToolCall`]) and the textual surface formats a
//! model is asked to produce: JSON objects/arrays and XML tag syntax, with
//! the Python-call syntax handled by the host harness. The companion
//! renderers turn a function catalog ([`render::FunctionDoc`]) into the
//! documentation text embedded in the model's instructions.
//!
//! Everything here is a pure, synchronous function over in-memory text:
//! identical input always yields an identical canonical result, and decoding
//! is all-or-nothing — no partial call list is ever returned alongside an
//! error.
//!
//! Typical decode path:
//!
//! ```
//! use toolcall_codec::{decode, OutputFormat};
//!
//! let raw = r#"<tool_call>{"get_weather": {"location": "Boston"}}</tool_call>"#;
//! let calls = decode(raw, OutputFormat::JsonTagged).unwrap();
//! assert_eq!(calls[0].name(), "get_weather");
//! ```

pub mod call;
pub mod coerce;
pub mod decode;
pub mod error;
pub mod instructions;
pub mod render;

pub use call::{calls_to_value, Arguments, PositionalSlot, ToolCall, POSITIONAL_KEY};
pub use coerce::{coerce, TypeHint};
pub use decode::{
    decode, decode_json, decode_xml, strip_tool_call_marker, OutputFormat, TOOL_CALL_CLOSE,
    TOOL_CALL_OPEN,
};
pub use error::CodecError;
pub use render::{render_function_docs, DocFormat, FunctionDoc, ParameterDoc, ParameterSchema};
