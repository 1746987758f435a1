use formdef::validate::validate;
use proptest::prelude::*;
use serde_json::{Value, json};
use std::collections::HashSet;

fn text_field(key: &str) -> Value {
    json!({
        "key": key,
        "type": "TextField",
        "label": "L",
        "data_name": "d",
        "disabled": false,
        "hidden": false,
        "required": false
    })
}

/// Splits `keys` into a top-level run and a nested section.
fn form_with_section(keys: &[String], split: usize) -> Value {
    let split = split.min(keys.len());
    let mut elements: Vec<Value> = keys[..split].iter().map(|k| text_field(k)).collect();
    if split < keys.len() {
        let children: Vec<Value> = keys[split..].iter().map(|k| text_field(k)).collect();
        let mut section = text_field("__section");
        section["type"] = json!("Section");
        section["elements"] = Value::Array(children);
        elements.push(section);
    }
    json!({ "form": { "name": "keys", "elements": elements } })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // One "must be unique" per repeated occurrence, wherever it sits.
    #[test]
    fn duplicate_count_matches_repeats(
        keys in prop::collection::vec("[a-d]", 1..12),
        split in 0usize..12,
    ) {
        let doc = form_with_section(&keys, split);
        let result = validate(&doc);

        let distinct: HashSet<&String> = keys.iter().collect();
        let expected = keys.len() - distinct.len();
        let unique_errors: Vec<_> = result
            .errors
            .iter()
            .filter(|e| e.message == "must be unique")
            .collect();

        prop_assert_eq!(unique_errors.len(), expected);
        prop_assert_eq!(result.errors.len(), expected, "errors: {:?}", result.errors);
        for e in unique_errors {
            prop_assert_eq!(e.field.as_str(), "key");
            prop_assert!(distinct.contains(&e.scope));
        }
    }
}
