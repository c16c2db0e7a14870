/// Value coercion — turn an argument's raw text into the most specific
/// sensible JSON value.
///
/// Coercion is the one piece of the decode pipeline that never fails: a
/// malformed numeric or structured sub-value falls back to the original
/// string rather than aborting an otherwise-valid call. Every fallback is
/// logged at `debug` level so a string that *looks* like a successful parse
/// can be told apart from one that merely fell through.
use serde_json::{Number, Value};

/// Declared type of an XML argument, from its `type` attribute.
///
/// Tokens are matched case-insensitively; an unrecognized token is treated
/// as no hint at all (automatic detection applies).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeHint {
    Bool,
    Int,
    Float,
    Str,
    Array,
    Object,
}

impl TypeHint {
    /// Parse a hint token. Returns `None` for unknown tokens.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.eq_ignore_ascii_case("bool") || token.eq_ignore_ascii_case("boolean") {
            Some(TypeHint::Bool)
        } else if token.eq_ignore_ascii_case("int") || token.eq_ignore_ascii_case("integer") {
            Some(TypeHint::Int)
        } else if token.eq_ignore_ascii_case("float") || token.eq_ignore_ascii_case("number") {
            Some(TypeHint::Float)
        } else if token.eq_ignore_ascii_case("string") || token.eq_ignore_ascii_case("str") {
            Some(TypeHint::Str)
        } else if token.eq_ignore_ascii_case("array") || token.eq_ignore_ascii_case("list") {
            Some(TypeHint::Array)
        } else if token.eq_ignore_ascii_case("object") || token.eq_ignore_ascii_case("dict") {
            Some(TypeHint::Object)
        } else {
            None
        }
    }
}

/// Coerce `raw` into a typed JSON value.
///
/// With a hint, the hinted parse is attempted first and falls back to the
/// original string on failure. Without a hint, detection runs in a fixed
/// priority order: case-insensitive `true`/`false` → boolean; integer parse
/// (only when the text carries no decimal point) → integer; float parse →
/// float; otherwise the literal string. `"1.0"` yields a float, `"1"` an
/// integer, `"yes"` stays the string `"yes"`.
#[must_use]
pub fn coerce(raw: &str, hint: Option<TypeHint>) -> Value {
    match hint {
        Some(TypeHint::Bool) => Value::Bool(raw.eq_ignore_ascii_case("true")),
        Some(TypeHint::Int) => match raw.parse::<i64>() {
            Ok(n) => Value::Number(n.into()),
            Err(_) => fallback(raw, "integer"),
        },
        Some(TypeHint::Float) => match raw.parse::<f64>().ok().and_then(Number::from_f64) {
            Some(n) => Value::Number(n),
            None => fallback(raw, "float"),
        },
        Some(TypeHint::Str) => Value::String(raw.to_string()),
        Some(TypeHint::Array | TypeHint::Object) => match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(_) => fallback(raw, "structured"),
        },
        None => detect(raw),
    }
}

fn detect(raw: &str) -> Value {
    if raw.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if !raw.contains('.') {
        if let Ok(n) = raw.parse::<i64>() {
            return Value::Number(n.into());
        }
    }
    if let Some(n) = raw.parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(n);
    }
    Value::String(raw.to_string())
}

fn fallback(raw: &str, hinted: &str) -> Value {
    tracing::debug!(raw, hinted, "coercion fallback: kept value as string");
    Value::String(raw.to_string())
}
