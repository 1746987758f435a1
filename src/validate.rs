//! Form definition validation.
//!
//! Returns **all** errors, not just the first. Validation borrows the document
//! and never modifies it.
//!
//! Two passes share one [`ValidationContext`]:
//!
//! 1. the structural pass checks every element and declares its key;
//! 2. the conditional pass checks `required_conditions` / `visible_conditions`
//!    against the now-complete key registry.
//!
//! The order matters: conditions may reference keys declared later in the
//! document.

use crate::collector::ErrorCollector;
use crate::conditional::validate_conditionals;
use crate::error::*;
use crate::primitives::*;
use crate::registry::KeyRegistry;
use crate::structural::validate_fields;
use serde_json::Value;
use tracing::debug;

/// Mutable state for one validation run.
#[derive(Debug, Default)]
pub(crate) struct ValidationContext {
    pub(crate) registry: KeyRegistry,
    pub(crate) errors: ErrorCollector,
}

/// Validate a form definition document.
///
/// The document is expected to look like
/// `{"form": {"name": ..., "elements": [...]}}`. Any other shape yields a
/// normal, invalid result; this function never panics on malformed input.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
///
/// let doc = json!({
///     "form": {
///         "name": "Site survey",
///         "elements": [{
///             "key": "q1",
///             "type": "TextField",
///             "label": "Q1",
///             "data_name": "q1",
///             "disabled": false,
///             "hidden": false,
///             "required": true
///         }]
///     }
/// });
/// assert!(formdef::validate(&doc).is_valid());
/// ```
pub fn validate(document: &Value) -> ValidationResult {
    let mut ctx = ValidationContext::default();

    let Some(form) = document
        .get("form")
        .filter(|f| is_truthy(f))
        .and_then(Value::as_object)
    else {
        debug!("document has no form object");
        ctx.errors.add("form", "form", "must exist and not be empty");
        return ctx.errors.into_result();
    };

    let Some(elements) = non_empty_array(form.get("elements")) else {
        debug!("form has no elements");
        ctx.errors.add("form", "elements", "must be a non-empty array");
        return ctx.errors.into_result();
    };
    debug!(elements = elements.len(), "validating form");

    if is_blank_opt(form.get("name")) {
        ctx.errors.add("form", "name", "cannot be blank");
    }

    validate_fields(form.get("elements"), &mut ctx);
    validate_conditionals(elements, &mut ctx);

    debug!(
        keys = ctx.registry.len(),
        errors = ctx.errors.len(),
        valid = !ctx.errors.has_errors(),
        "form validation finished"
    );
    ctx.errors.into_result()
}
