// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Search conditions and condition sets

use crate::error::{IgcError, IgcResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Comparison operator of a single condition, as spelled by IGC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "=")]
    Equals,
    #[serde(rename = "<>")]
    NotEquals,
    #[serde(rename = "like {0}%")]
    StartsWith,
    #[serde(rename = "like %{0}")]
    EndsWith,
    #[serde(rename = "like %{0}%")]
    Contains,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = "between")]
    Between,
    #[serde(rename = "isNull")]
    IsNull,
    #[serde(rename = "in")]
    In,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCondition {
    pub property: String,
    pub operator: Operator,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Value>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub negated: bool,
}

impl SearchCondition {
    fn with_value(property: impl Into<String>, operator: Operator, value: Value) -> Self {
        Self {
            property: property.into(),
            operator,
            value: Some(value),
            min: None,
            max: None,
            negated: false,
        }
    }

    pub fn eq(property: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_value(property, Operator::Equals, value.into())
    }

    pub fn ne(property: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_value(property, Operator::NotEquals, value.into())
    }

    pub fn starts_with(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(property, Operator::StartsWith, Value::String(value.into()))
    }

    pub fn ends_with(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(property, Operator::EndsWith, Value::String(value.into()))
    }

    pub fn contains(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(property, Operator::Contains, Value::String(value.into()))
    }

    pub fn gt(property: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_value(property, Operator::GreaterThan, value.into())
    }

    pub fn lt(property: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_value(property, Operator::LessThan, value.into())
    }

    pub fn gte(property: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_value(property, Operator::GreaterOrEqual, value.into())
    }

    pub fn lte(property: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_value(property, Operator::LessOrEqual, value.into())
    }

    pub fn between(
        property: impl Into<String>,
        min: impl Into<Value>,
        max: impl Into<Value>,
    ) -> Self {
        Self {
            property: property.into(),
            operator: Operator::Between,
            value: None,
            min: Some(min.into()),
            max: Some(max.into()),
            negated: false,
        }
    }

    pub fn is_null(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            operator: Operator::IsNull,
            value: None,
            min: None,
            max: None,
            negated: false,
        }
    }

    pub fn is_in<V: Into<Value>>(property: impl Into<String>, values: Vec<V>) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        Self::with_value(property, Operator::In, Value::Array(values))
    }

    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Parse the compact `property<op>value` form used on the command line
    ///
    /// Operators: `=`, `<>`, `>=`, `<=`, `>`, `<`, `~` (contains),
    /// `^` (starts with), `$` (ends with). `property=null` is an isNull
    /// check and `property!=null` its negation.
    pub fn parse(expression: &str) -> IgcResult<Self> {
        const OPERATORS: &[(&str, Operator)] = &[
            ("!=", Operator::NotEquals),
            ("<>", Operator::NotEquals),
            (">=", Operator::GreaterOrEqual),
            ("<=", Operator::LessOrEqual),
            ("=", Operator::Equals),
            (">", Operator::GreaterThan),
            ("<", Operator::LessThan),
            ("~", Operator::Contains),
            ("^", Operator::StartsWith),
            ("$", Operator::EndsWith),
        ];

        let (position, token, operator) = OPERATORS
            .iter()
            .filter_map(|(token, op)| expression.find(token).map(|pos| (pos, *token, *op)))
            .min_by_key(|(pos, token, _)| (*pos, std::cmp::Reverse(token.len())))
            .ok_or_else(|| {
                IgcError::InvalidSearch(format!("no operator in condition '{}'", expression))
            })?;

        let property = expression[..position].trim();
        let raw = expression[position + token.len()..].trim();
        if property.is_empty() {
            return Err(IgcError::InvalidSearch(format!(
                "missing property in condition '{}'",
                expression
            )));
        }

        if raw == "null" {
            return match operator {
                Operator::Equals => Ok(Self::is_null(property)),
                Operator::NotEquals => Ok(Self::is_null(property).negate()),
                _ => Err(IgcError::InvalidSearch(format!(
                    "null can only be compared with = or <> in '{}'",
                    expression
                ))),
            };
        }

        Ok(Self::with_value(property, operator, parse_scalar(raw, operator)))
    }

    pub fn validate(&self) -> IgcResult<()> {
        if self.property.is_empty() {
            return Err(IgcError::InvalidSearch(
                "condition without a property".to_string(),
            ));
        }
        match self.operator {
            Operator::Between if self.min.is_none() || self.max.is_none() => {
                Err(IgcError::InvalidSearch(format!(
                    "between on '{}' requires both min and max",
                    self.property
                )))
            }
            Operator::IsNull | Operator::Between => Ok(()),
            Operator::In if !matches!(self.value, Some(Value::Array(_))) => {
                Err(IgcError::InvalidSearch(format!(
                    "in on '{}' requires a list of values",
                    self.property
                )))
            }
            _ if self.value.is_none() => Err(IgcError::InvalidSearch(format!(
                "condition on '{}' requires a value",
                self.property
            ))),
            _ => Ok(()),
        }
    }
}

// Like-style operators always compare text
fn parse_scalar(raw: &str, operator: Operator) -> Value {
    if matches!(
        operator,
        Operator::Contains | Operator::StartsWith | Operator::EndsWith
    ) {
        return Value::String(raw.to_string());
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(raw.trim_matches('"').to_string()),
    }
}

/// Either a single condition or a nested set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Criterion {
    Condition(SearchCondition),
    Set(ConditionSet),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionSet {
    #[serde(default)]
    pub conditions: Vec<Criterion>,

    #[serde(default)]
    pub operator: LogicalOperator,

    #[serde(default, skip_serializing_if = "is_false")]
    pub negated: bool,
}

impl ConditionSet {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn any() -> Self {
        Self {
            operator: LogicalOperator::Or,
            ..Default::default()
        }
    }

    pub fn with(mut self, condition: SearchCondition) -> Self {
        self.conditions.push(Criterion::Condition(condition));
        self
    }

    pub fn with_set(mut self, set: ConditionSet) -> Self {
        self.conditions.push(Criterion::Set(set));
        self
    }

    pub fn push(&mut self, condition: SearchCondition) {
        self.conditions.push(Criterion::Condition(condition));
    }

    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn validate(&self) -> IgcResult<()> {
        for criterion in &self.conditions {
            match criterion {
                Criterion::Condition(c) => c.validate()?,
                Criterion::Set(s) => {
                    if s.is_empty() {
                        return Err(IgcError::InvalidSearch(
                            "nested condition set is empty".to_string(),
                        ));
                    }
                    s.validate()?
                }
            }
        }
        Ok(())
    }
}
