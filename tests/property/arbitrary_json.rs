use formdef::validate::validate;
use proptest::prelude::*;
use serde_json::{Value, json};

/// Attribute names the validator looks at, mixed with noise.
const ATTRIBUTES: &[&str] = &[
    "key",
    "type",
    "label",
    "data_name",
    "disabled",
    "hidden",
    "required",
    "elements",
    "choices",
    "choice_list_id",
    "classification_set_id",
    "required_conditions",
    "required_conditions_type",
    "visible_conditions",
    "visible_conditions_type",
    "field_key",
    "operator",
    "value",
    "noise",
];

const WORDS: &[&str] = &[
    "q1",
    "q2",
    "s1",
    "TextField",
    "ChoiceField",
    "ClassificationField",
    "Section",
    "equal_to",
    "is_empty",
    "contains",
    "any",
    "all",
    "",
    " ",
];

/// Strategy for JSON trees shaped loosely like form elements.
fn arb_json(depth: u32) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|i| json!(i)),
        prop::sample::select(WORDS).prop_map(|s| Value::String(s.to_string())),
    ];

    leaf.prop_recursive(depth, 96, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::vec((prop::sample::select(ATTRIBUTES), inner), 0..8).prop_map(
                |pairs| {
                    let map: serde_json::Map<String, Value> = pairs
                        .into_iter()
                        .map(|(k, v)| (k.to_string(), v))
                        .collect();
                    Value::Object(map)
                }
            ),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Any value at all yields a normal result.
    #[test]
    fn arbitrary_documents_never_panic(doc in arb_json(5)) {
        let result = validate(&doc);
        prop_assert_eq!(result.is_valid(), result.errors.is_empty());
    }

    // Element-shaped noise under a form: deterministic and read-only.
    #[test]
    fn validation_is_idempotent(elements in prop::collection::vec(arb_json(4), 1..6)) {
        let doc = json!({ "form": { "name": "p", "elements": elements } });
        let before = doc.clone();
        let first = validate(&doc);
        let second = validate(&doc);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(doc, before);
    }

    // Every grouped message corresponds to exactly one flat error.
    #[test]
    fn grouped_preserves_every_error(elements in prop::collection::vec(arb_json(3), 1..6)) {
        let doc = json!({ "form": { "name": "", "elements": elements } });
        let result = validate(&doc);
        let grouped = result.grouped();
        let total: usize = grouped
            .as_object()
            .unwrap()
            .values()
            .flat_map(|fields| fields.as_object().unwrap().values())
            .map(|messages| messages.as_array().unwrap().len())
            .sum();
        prop_assert_eq!(total, result.errors.len());
    }
}
