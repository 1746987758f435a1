use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One rule violation found in a form definition.
///
/// `scope` is usually the key of the offending element; `field` is the
/// attribute that failed. A few rules use fixed scopes such as `form`,
/// `elements` or `choices`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub scope: String,
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        scope: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ValidationError {
            scope: scope.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} {}", self.scope, self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Result of validation: every error found, in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages recorded for one scope/field pair, in order.
    pub fn messages_for(&self, scope: &str, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.scope == scope && e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// Errors nested as `{scope: {field: [message, ...]}}`.
    ///
    /// Scopes and fields keep first-seen order; repeated messages are kept.
    pub fn grouped(&self) -> Value {
        let mut scopes = Map::new();
        for error in &self.errors {
            let fields = scopes
                .entry(error.scope.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            let Value::Object(fields) = fields else {
                continue;
            };
            let messages = fields
                .entry(error.field.clone())
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(messages) = messages {
                messages.push(Value::String(error.message.clone()));
            }
        }
        Value::Object(scopes)
    }
}

/// Returned by [`crate::check`] when a form definition has errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidForm {
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for InvalidForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.len() {
            1 => write!(f, "form definition has 1 error: {}", self.errors[0]),
            n => write!(f, "form definition has {} errors", n),
        }
    }
}

impl std::error::Error for InvalidForm {}

impl From<ValidationResult> for InvalidForm {
    fn from(result: ValidationResult) -> Self {
        InvalidForm {
            errors: result.errors,
        }
    }
}
