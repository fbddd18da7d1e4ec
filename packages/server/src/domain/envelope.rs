//! The relayed message payload.

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while validating an inbound text frame
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The frame is not well-formed JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The frame is valid JSON but not an object
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// A validated relay payload: one JSON object per text frame.
///
/// The relay interprets no field except [`Envelope::TIME_FIELD`], which it
/// adds (or overwrites) with the server receipt time before broadcasting.
/// Everything else passes through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    fields: Map<String, Value>,
}

impl Envelope {
    /// Field carrying the server receipt time
    pub const TIME_FIELD: &'static str = "time";

    /// Parse a raw text frame into an `Envelope`.
    ///
    /// Only JSON objects are accepted. Scalars, arrays, and `null` are valid
    /// JSON but carry no fields to relay, so they are rejected just like
    /// malformed text.
    pub fn parse(raw: &str) -> Result<Self, EnvelopeError> {
        let value: Value = serde_json::from_str(raw)?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(EnvelopeError::NotAnObject(json_kind(&other))),
        }
    }

    /// Set the server receipt time, replacing any client-supplied value.
    pub fn stamp(&mut self, received_at: String) {
        self.fields
            .insert(Self::TIME_FIELD.to_string(), Value::String(received_at));
    }

    /// Serialize back into a single text frame.
    ///
    /// A string-keyed map of `Value`s always serializes, so this cannot fail.
    pub fn to_frame(&self) -> String {
        serde_json::to_string(&self.fields).unwrap()
    }

    /// Look up a field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
