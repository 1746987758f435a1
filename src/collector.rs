//! Ordered accumulator for validation errors.

use crate::error::{ValidationError, ValidationResult};

/// Accumulates errors for one validation run. Nothing is deduplicated.
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<ValidationError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, scope: &str, field: &str, message: impl Into<String>) {
        self.errors.push(ValidationError::new(scope, field, message));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_result(self) -> ValidationResult {
        ValidationResult {
            errors: self.errors,
        }
    }
}
