//! First pass: per-element shape and attribute rules.
//!
//! Walks the tree pre-order, declaring every key in the registry. Sections are
//! expanded with an explicit stack so nesting depth is bounded by the heap.

use crate::element::{BOOLEAN_FLAGS, Element, ElementKey, UNKEYED_SCOPE};
use crate::enums::ElementType;
use crate::primitives::*;
use crate::validate::ValidationContext;
use serde_json::Value;
use tracing::{debug, trace};

/// Validates a sequence of elements and, transitively, all nested sections.
pub(crate) fn validate_fields(elements: Option<&Value>, ctx: &mut ValidationContext) {
    let Some(elements) = non_empty_array(elements) else {
        ctx.errors.add("form", "elements", "must be a non-empty array");
        return;
    };

    let mut pending: Vec<&Value> = elements.iter().rev().collect();
    while let Some(element) = pending.pop() {
        if let Some(children) = validate_field(element, ctx) {
            pending.extend(children.iter().rev());
        }
    }
}

/// Checks one element. Returns the children of a well-formed section so the
/// caller can descend into them before moving on to siblings.
fn validate_field<'a>(value: &'a Value, ctx: &mut ValidationContext) -> Option<&'a [Value]> {
    if is_blank(value) {
        ctx.errors.add("elements", "element", "must not be empty");
        return None;
    }
    let Some(element) = Element::from_value(value) else {
        ctx.errors.add("elements", "element", "must be an object");
        return None;
    };

    let key = match element.key() {
        ElementKey::Key(key) => key,
        ElementKey::Missing => {
            debug!("skipping element without a key");
            ctx.errors.add(UNKEYED_SCOPE, "key", "must exist and not be nil");
            return None;
        }
        ElementKey::NotAString(raw) => {
            debug!(key = %describe(raw), "skipping element with a non-string key");
            ctx.errors.add(UNKEYED_SCOPE, "key", "must be a string");
            return None;
        }
    };

    if !ctx.registry.declare(key, element.type_name()) {
        debug!(key, "skipping duplicate key");
        ctx.errors.add(key, "key", "must be unique");
        return None;
    }
    trace!(key, element_type = ?element.type_name(), "structural check");

    if is_blank_opt(element.get("label")) {
        ctx.errors.add(key, "label", "is required");
    }
    if is_blank_opt(element.get("data_name")) {
        ctx.errors.add(key, "data_name", "is required");
    }
    if element.element_type().is_none() {
        ctx.errors.add(key, "type", "is not one of the valid types");
    }
    for flag in BOOLEAN_FLAGS {
        if !is_strict_bool(element.get(flag)) {
            ctx.errors.add(key, flag, "must be true or false");
        }
    }

    match element.element_type() {
        Some(ElementType::ClassificationField) => {
            check_classification(key, &element, ctx);
            None
        }
        Some(ElementType::ChoiceField) => {
            check_choices(key, &element, ctx);
            None
        }
        Some(ElementType::Section) => section_children(key, &element, ctx),
        _ => None,
    }
}

// ─── Type-specific rules ────────────────────────────────────────────────────

fn check_classification(key: &str, element: &Element<'_>, ctx: &mut ValidationContext) {
    // An absent classification_set_id is accepted; only a set-but-blank one fails.
    if element.get_set("classification_set_id").is_some_and(is_blank) {
        ctx.errors.add(key, "classification_set_id", "is required");
    }
}

fn section_children<'a>(
    key: &str,
    element: &Element<'a>,
    ctx: &mut ValidationContext,
) -> Option<&'a [Value]> {
    match element.children() {
        Some([]) => {
            ctx.errors.add(key, "elements", "must contain additional elements");
            None
        }
        Some(children) => Some(children),
        None => {
            ctx.errors.add(key, "elements", "must be an array object");
            None
        }
    }
}

fn check_choices(key: &str, element: &Element<'_>, ctx: &mut ValidationContext) {
    if let Some(list_id) = element.get_set("choice_list_id") {
        if is_blank(list_id) {
            ctx.errors.add(key, "choice_list_id", "is required");
        }
        return;
    }

    let Some(choices) = non_empty_array(element.get("choices")) else {
        ctx.errors.add(key, "choices", "must be a non-empty array");
        return;
    };
    for choice in choices {
        let has_label = choice
            .as_object()
            .and_then(|c| c.get("label"))
            .is_some_and(is_present);
        if !has_label {
            // Scoped to the literal "choices", not the element key.
            ctx.errors.add("choices", "label", "contains an invalid label");
        }
    }
}
