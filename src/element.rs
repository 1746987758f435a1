//! Borrowed, typed view over one element mapping.

use crate::enums::ElementType;
use crate::primitives::is_truthy;
use serde_json::{Map, Value};

/// Scope used for errors on elements that have no usable key.
pub const UNKEYED_SCOPE: &str = "element";

/// The three boolean flags every element must carry.
pub const BOOLEAN_FLAGS: [&str; 3] = ["disabled", "hidden", "required"];

/// Outcome of reading an element's `key` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKey<'a> {
    /// Absent, `null` or `false`.
    Missing,
    /// Set to something other than a string.
    NotAString(&'a Value),
    Key(&'a str),
}

impl<'a> ElementKey<'a> {
    /// Error scope for rules reported against this element.
    pub fn scope(self) -> &'a str {
        match self {
            ElementKey::Key(key) => key,
            ElementKey::Missing | ElementKey::NotAString(_) => UNKEYED_SCOPE,
        }
    }
}

/// A single element of the form tree.
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    attrs: &'a Map<String, Value>,
}

impl<'a> Element<'a> {
    /// Returns `None` unless `value` is a mapping.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(|attrs| Element { attrs })
    }

    pub fn get(&self, attribute: &str) -> Option<&'a Value> {
        self.attrs.get(attribute)
    }

    /// The attribute when it exists and is truthy.
    pub fn get_set(&self, attribute: &str) -> Option<&'a Value> {
        self.get(attribute).filter(|v| is_truthy(v))
    }

    pub fn key(&self) -> ElementKey<'a> {
        match self.get_set("key") {
            None => ElementKey::Missing,
            Some(Value::String(key)) => ElementKey::Key(key),
            Some(other) => ElementKey::NotAString(other),
        }
    }

    /// The raw `type` string, recognised or not.
    pub fn type_name(&self) -> Option<&'a str> {
        self.get("type").and_then(Value::as_str)
    }

    pub fn element_type(&self) -> Option<ElementType> {
        self.type_name().and_then(ElementType::parse)
    }

    /// Nested `elements` when it is an array, empty or not.
    pub fn children(&self) -> Option<&'a [Value]> {
        self.get("elements")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }
}
