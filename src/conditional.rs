//! Second pass: `required_conditions` and `visible_conditions`.
//!
//! Runs only once the structural pass has declared every key, so a condition
//! may reference an element that appears later in the document.

use crate::element::Element;
use crate::enums::{ConditionGroup, ConditionLogic, ElementType, Operator};
use crate::primitives::*;
use crate::validate::ValidationContext;
use serde_json::Value;
use tracing::trace;

/// Checks the conditions of every element in `elements` and nested sections.
pub(crate) fn validate_conditionals(elements: &[Value], ctx: &mut ValidationContext) {
    let mut pending: Vec<&Value> = elements.iter().rev().collect();
    while let Some(value) = pending.pop() {
        // Non-mapping elements were already reported by the structural pass.
        let Some(element) = Element::from_value(value) else {
            continue;
        };
        validate_conditional(&element, ctx);

        if element.element_type() == Some(ElementType::Section)
            && let Some(children) = element.children()
        {
            pending.extend(children.iter().rev());
        }
    }
}

fn validate_conditional(element: &Element<'_>, ctx: &mut ValidationContext) {
    let scope = element.key().scope();
    let allowed = Operator::allowed_for(element.element_type());
    trace!(scope, "conditional check");

    for group in ConditionGroup::ALL {
        if let Some(logic) = element.get_set(group.logic_attribute())
            && logic.as_str().and_then(ConditionLogic::parse).is_none()
        {
            ctx.errors.add(scope, group.logic_attribute(), "is not valid");
        }

        let Some(conditions) = element.get_set(group.attribute()) else {
            continue;
        };
        let Value::Array(conditions) = conditions else {
            ctx.errors.add(scope, group.attribute(), "must be an array object");
            continue;
        };
        for condition in conditions {
            validate_condition(condition, scope, group, allowed, ctx);
        }
    }
}

fn validate_condition(
    condition: &Value,
    scope: &str,
    group: ConditionGroup,
    allowed: &[Operator],
    ctx: &mut ValidationContext,
) {
    let field = group.attribute();

    let Some(field_key) = condition_attr(condition, "field_key").filter(|v| is_truthy(v)) else {
        ctx.errors.add(scope, field, "field key must exist for condition");
        return;
    };
    let shown = describe(field_key);

    let declared = field_key.as_str().is_some_and(|k| ctx.registry.contains(k));
    if !declared {
        ctx.errors.add(
            scope,
            field,
            format!("key {} does not exist on the form", shown),
        );
    }

    let operator = condition_attr(condition, "operator")
        .and_then(Value::as_str)
        .and_then(Operator::parse);
    if !operator.is_some_and(|op| allowed.contains(&op)) {
        ctx.errors.add(scope, field, format!("operator for {} is invalid", shown));
    }

    let has_value = condition_attr(condition, "value").is_some_and(is_present);
    if operator.is_some_and(Operator::is_unary) && has_value {
        ctx.errors.add(scope, field, "value cannot be blank");
    }
}

fn condition_attr<'a>(condition: &'a Value, name: &str) -> Option<&'a Value> {
    condition.as_object().and_then(|c| c.get(name))
}
