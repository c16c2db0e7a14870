/// Canonical tool-call representation shared by every format decoder.
///
/// A decode produces an ordered `Vec<ToolCall>`; each call serializes to a
/// single-key JSON mapping `{name: {param: value, ...}}`, which is the shape
/// the downstream scorer compares structurally against ground truth.
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::error::CodecError;

/// Reserved key for unnamed (positional) XML arguments when a call's
/// arguments are lowered to a JSON object.
///
/// The empty string is provably distinct from every named key: arguments
/// whose `name` attribute is absent *or empty* are routed to the positional
/// slot, so no named argument can ever occupy this key.
pub const POSITIONAL_KEY: &str = "";

/// Accumulator for unnamed XML arguments.
///
/// The shape of the stored value depends on how many unnamed arguments the
/// call carries: a single one stays a scalar, a second one promotes the slot
/// to an ordered list. Callers that consume [`Arguments::positional`] must
/// handle both shapes; a lone unnamed argument is indistinguishable from "a
/// list of one" only after the caller normalizes, which this crate
/// deliberately does not do (scoring against existing ground truth depends
/// on the asymmetry).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PositionalSlot {
    #[default]
    Empty,
    One(Value),
    Many(Vec<Value>),
}

impl PositionalSlot {
    fn push(&mut self, value: Value) {
        match std::mem::take(self) {
            PositionalSlot::Empty => *self = PositionalSlot::One(value),
            PositionalSlot::One(first) => *self = PositionalSlot::Many(vec![first, value]),
            PositionalSlot::Many(mut values) => {
                values.push(value);
                *self = PositionalSlot::Many(values);
            }
        }
    }

    fn to_value(&self) -> Option<Value> {
        match self {
            PositionalSlot::Empty => None,
            PositionalSlot::One(value) => Some(value.clone()),
            PositionalSlot::Many(values) => Some(Value::Array(values.clone())),
        }
    }
}

/// The parameter mapping of a single call: named arguments plus the
/// positional slot for unnamed XML arguments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arguments {
    named: Map<String, Value>,
    positional: PositionalSlot,
}

impl Arguments {
    /// Build from an already-parsed JSON object (the JSON decoder's path).
    #[must_use]
    pub fn from_object(named: Map<String, Value>) -> Self {
        Self {
            named,
            positional: PositionalSlot::Empty,
        }
    }

    /// Insert a named argument.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Semantic`] when `name` is already present;
    /// duplicates are never silently overwritten.
    pub fn insert_named(&mut self, name: String, value: Value) -> Result<(), CodecError> {
        if self.named.contains_key(&name) {
            return Err(CodecError::Semantic(format!(
                "duplicate named argument '{name}'"
            )));
        }
        self.named.insert(name, value);
        Ok(())
    }

    /// Append an unnamed argument to the positional slot.
    pub fn push_positional(&mut self, value: Value) {
        self.positional.push(value);
    }

    /// The named arguments, in map order.
    #[must_use]
    pub fn named(&self) -> &Map<String, Value> {
        &self.named
    }

    /// The positional slot. See [`PositionalSlot`] for the scalar-vs-list
    /// shape rules.
    #[must_use]
    pub fn positional(&self) -> &PositionalSlot {
        &self.positional
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.positional == PositionalSlot::Empty
    }

    /// Lower to a plain JSON object. Positional values land under
    /// [`POSITIONAL_KEY`].
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut out = self.named.clone();
        if let Some(positional) = self.positional.to_value() {
            out.insert(POSITIONAL_KEY.to_string(), positional);
        }
        Value::Object(out)
    }
}

/// A single decoded function invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCall {
    name: String,
    arguments: Arguments,
}

impl ToolCall {
    #[must_use]
    pub fn new(name: String, arguments: Arguments) -> Self {
        Self { name, arguments }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// The canonical single-key mapping `{name: {param: value, ...}}`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut entry = Map::with_capacity(1);
        entry.insert(self.name.clone(), self.arguments.to_value());
        Value::Object(entry)
    }
}

impl Serialize for ToolCall {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.arguments.to_value())?;
        map.end()
    }
}

/// Lower a decoded call list to the JSON array the external scorer consumes.
#[must_use]
pub fn calls_to_value(calls: &[ToolCall]) -> Value {
    Value::Array(calls.iter().map(ToolCall::to_value).collect())
}
