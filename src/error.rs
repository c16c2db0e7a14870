/// Canonical error type used across the decode/render core.
///
/// The four variants map to the four ways a decode can fail:
///
/// - [`Syntax`](CodecError::Syntax) — the text is not well-formed JSON/XML
///   at all.
/// - [`Shape`](CodecError::Shape) — well-formed, but no recognized call
///   shape matches (wrong keys, non-object parameters, unexpected root tag).
/// - [`Semantic`](CodecError::Semantic) — shaped correctly, but violates a
///   call invariant (missing function name, duplicate named argument).
/// - [`Config`](CodecError::Config) — the caller requested a format this
///   crate cannot decode; the run is misconfigured, the model output is not
///   at fault.
///
/// Decoding is all-or-nothing per input: no partial call list is ever
/// returned alongside an error.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Syntax error: {0}")]
    Syntax(String),
    #[error("Shape error: {0}")]
    Shape(String),
    #[error("Semantic error: {0}")]
    Semantic(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl CodecError {
    /// True when the failure is caller misconfiguration rather than bad
    /// model output. External retry policies only resample the model for
    /// output faults.
    #[must_use]
    pub fn is_caller_fault(&self) -> bool {
        matches!(self, CodecError::Config(_))
    }
}
