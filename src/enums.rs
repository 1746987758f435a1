//! Closed vocabularies of the form definition rulebook.
//!
//! Every enum here is closed: values outside the listed variants are
//! validation errors, never extension points.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Element type, the `type` attribute of every element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    TextField,
    ChoiceField,
    ClassificationField,
    PhotoField,
    DateTimeField,
    Section,
}

impl ElementType {
    pub const ALL: [ElementType; 6] = [
        ElementType::TextField,
        ElementType::ChoiceField,
        ElementType::ClassificationField,
        ElementType::PhotoField,
        ElementType::DateTimeField,
        ElementType::Section,
    ];

    /// Exact, case-sensitive lookup.
    pub fn parse(name: &str) -> Option<ElementType> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ElementType::TextField => "TextField",
            ElementType::ChoiceField => "ChoiceField",
            ElementType::ClassificationField => "ClassificationField",
            ElementType::PhotoField => "PhotoField",
            ElementType::DateTimeField => "DateTimeField",
            ElementType::Section => "Section",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison operator of a single condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    EqualTo,
    NotEqualTo,
    Contains,
    StartsWith,
    GreaterThan,
    LessThan,
    IsEmpty,
    IsNotEmpty,
}

impl Operator {
    /// Operators accepted on choice and classification fields.
    pub const CHOICE_OPERATORS: &'static [Operator] = &[
        Operator::EqualTo,
        Operator::NotEqualTo,
        Operator::IsEmpty,
        Operator::IsNotEmpty,
    ];

    /// Operators accepted on every other element, including untyped ones.
    pub const GENERAL_OPERATORS: &'static [Operator] = &[
        Operator::EqualTo,
        Operator::NotEqualTo,
        Operator::Contains,
        Operator::StartsWith,
        Operator::GreaterThan,
        Operator::LessThan,
        Operator::IsEmpty,
        Operator::IsNotEmpty,
    ];

    pub fn parse(name: &str) -> Option<Operator> {
        Self::GENERAL_OPERATORS
            .iter()
            .copied()
            .find(|op| op.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::EqualTo => "equal_to",
            Operator::NotEqualTo => "not_equal_to",
            Operator::Contains => "contains",
            Operator::StartsWith => "starts_with",
            Operator::GreaterThan => "greater_than",
            Operator::LessThan => "less_than",
            Operator::IsEmpty => "is_empty",
            Operator::IsNotEmpty => "is_not_empty",
        }
    }

    /// Whitelist for conditions declared on an element of the given type.
    pub fn allowed_for(element_type: Option<ElementType>) -> &'static [Operator] {
        match element_type {
            Some(ElementType::ChoiceField | ElementType::ClassificationField) => {
                Self::CHOICE_OPERATORS
            }
            _ => Self::GENERAL_OPERATORS,
        }
    }

    /// Operators that compare against nothing and so take no `value`.
    pub fn is_unary(self) -> bool {
        matches!(self, Operator::IsEmpty | Operator::IsNotEmpty)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the conditions of one group combine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionLogic {
    Any,
    All,
}

impl ConditionLogic {
    pub fn parse(name: &str) -> Option<ConditionLogic> {
        match name {
            "any" => Some(ConditionLogic::Any),
            "all" => Some(ConditionLogic::All),
            _ => None,
        }
    }
}

/// The two condition-bearing attributes of an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionGroup {
    RequiredConditions,
    VisibleConditions,
}

impl ConditionGroup {
    pub const ALL: [ConditionGroup; 2] = [
        ConditionGroup::RequiredConditions,
        ConditionGroup::VisibleConditions,
    ];

    /// Attribute holding the condition list.
    pub fn attribute(self) -> &'static str {
        match self {
            ConditionGroup::RequiredConditions => "required_conditions",
            ConditionGroup::VisibleConditions => "visible_conditions",
        }
    }

    /// Attribute holding the `any`/`all` discriminator.
    pub fn logic_attribute(self) -> &'static str {
        match self {
            ConditionGroup::RequiredConditions => "required_conditions_type",
            ConditionGroup::VisibleConditions => "visible_conditions_type",
        }
    }
}
