use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventBodyError {
    #[error("body is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("body must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// A single scheduled event. The JSON shape uses capitalised keys
/// (`ID`, `Title`, `Description`) in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl Event {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Decodes a request body. Only a JSON object is accepted; `null` yields the
    /// zero-value event. The request's content type is not consulted.
    pub fn from_json_body(body: &[u8]) -> Result<Self, EventBodyError> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Null => Ok(Self::default()),
            value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
            Value::Array(_) => Err(EventBodyError::NotAnObject("an array")),
            Value::String(_) => Err(EventBodyError::NotAnObject("a string")),
            Value::Number(_) => Err(EventBodyError::NotAnObject("a number")),
            Value::Bool(_) => Err(EventBodyError::NotAnObject("a boolean")),
        }
    }

    /// Overwrites the mutable fields with those of `changes`. The identifier is kept.
    pub fn apply_changes(&mut self, changes: Event) {
        self.title = changes.title;
        self.description = changes.description;
    }
}
