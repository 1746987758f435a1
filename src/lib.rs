//! Validation for nested form definition documents.
//!
//! A form definition is a tree of typed field descriptors (text, choice,
//! classification, photo, date-time) and sections, plus conditional
//! required/visible rules that reference other fields by key. This crate checks
//! such a tree against a fixed rulebook and reports every violation it finds:
//!
//! ```text
//! serde_json::Value → validate(doc) → ValidationResult { errors }
//!                   → check(doc)    → Result<(), InvalidForm>
//! ```
//!
//! Parsing raw text is left to the caller; any `serde_json::Value` is accepted.
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//!
//! let doc = json!({
//!     "form": {
//!         "name": "Inspection",
//!         "elements": [{
//!             "key": "notes",
//!             "type": "TextField",
//!             "label": "Notes",
//!             "data_name": "notes",
//!             "disabled": false,
//!             "hidden": false,
//!             "required": false,
//!             "visible_conditions": [
//!                 { "field_key": "unknown", "operator": "equal_to", "value": "x" }
//!             ]
//!         }]
//!     }
//! });
//!
//! let result = formdef::validate(&doc);
//! assert!(!result.is_valid());
//! assert_eq!(
//!     result.messages_for("notes", "visible_conditions"),
//!     vec!["key unknown does not exist on the form"]
//! );
//! ```

pub mod collector;
pub mod element;
pub mod enums;
pub mod error;
pub mod primitives;
pub mod registry;
pub mod validate;

pub(crate) mod conditional;
pub(crate) mod structural;

pub use error::*;

pub use validate::validate;

/// Convenience entry point for callers that prefer `?` over inspecting a
/// [`ValidationResult`].
///
/// # Errors
///
/// Returns [`InvalidForm`] carrying every error when validation fails.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
///
/// let err = formdef::check(&json!({})).unwrap_err();
/// assert_eq!(err.errors[0].message, "must exist and not be empty");
/// ```
pub fn check(document: &serde_json::Value) -> Result<(), InvalidForm> {
    let result = validate::validate(document);
    if result.is_valid() {
        Ok(())
    } else {
        Err(result.into())
    }
}
