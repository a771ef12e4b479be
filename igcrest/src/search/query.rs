// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Search request body for `POST /search`

use super::condition::{ConditionSet, SearchCondition};
use crate::error::{IgcError, IgcResult};
use crate::model::AssetType;
use serde::{Deserialize, Serialize};

/// Largest page the IGC REST API accepts
pub const MAX_PAGE_SIZE: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub property: String,
    pub ascending: bool,
}

/// A search across one or more asset types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Search {
    pub types: Vec<String>,

    /// Properties to return for each item, besides the system fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<String>,

    #[serde(rename = "where", default, skip_serializing_if = "ConditionSet::is_empty")]
    pub conditions: ConditionSet,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin: Option<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<Sort>,
}

impl Search {
    pub fn new<S: Into<String>>(types: impl IntoIterator<Item = S>) -> Self {
        Self {
            types: types.into_iter().map(Into::into).collect(),
            properties: Vec::new(),
            conditions: ConditionSet::default(),
            page_size: None,
            begin: None,
            sorts: Vec::new(),
        }
    }

    pub fn for_type(type_id: impl Into<String>) -> Self {
        let type_id: String = type_id.into();
        Self::new([type_id])
    }

    /// Search for one generated type, returning every modelled property
    pub fn for_asset<T: AssetType>() -> Self {
        Self::for_type(T::TYPE_ID).with_properties(T::all_properties())
    }

    pub fn with_properties<S: Into<String>>(mut self, properties: impl IntoIterator<Item = S>) -> Self {
        self.properties = properties.into_iter().map(Into::into).collect();
        self
    }

    pub fn add_property(mut self, property: impl Into<String>) -> Self {
        self.properties.push(property.into());
        self
    }

    /// Add a condition to the top-level set
    pub fn and_where(mut self, condition: SearchCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Replace the top-level condition set
    pub fn with_conditions(mut self, conditions: ConditionSet) -> Self {
        self.conditions = conditions;
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn begin(mut self, begin: u64) -> Self {
        self.begin = Some(begin);
        self
    }

    pub fn sort_by(mut self, property: impl Into<String>, ascending: bool) -> Self {
        self.sorts.push(Sort {
            property: property.into(),
            ascending,
        });
        self
    }

    pub fn validate(&self) -> IgcResult<()> {
        if self.types.is_empty() || self.types.iter().any(|t| t.is_empty()) {
            return Err(IgcError::InvalidSearch(
                "at least one asset type is required".to_string(),
            ));
        }
        match self.page_size {
            Some(0) => {
                return Err(IgcError::InvalidSearch(
                    "page size must be greater than zero".to_string(),
                ))
            }
            Some(size) if size > MAX_PAGE_SIZE => {
                return Err(IgcError::InvalidSearch(format!(
                    "page size {} exceeds the maximum of {}",
                    size, MAX_PAGE_SIZE
                )))
            }
            _ => {}
        }
        self.conditions.validate()
    }

    pub fn to_json(&self) -> IgcResult<serde_json::Value> {
        self.validate()?;
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::DatabaseColumn;
    use serde_json::json;

    #[test]
    fn test_search_body() {
        let search = Search::for_type("term")
            .with_properties(["name", "status"])
            .and_where(SearchCondition::eq("status", "ACCEPTED"))
            .page_size(50)
            .sort_by("name", true);
        assert_eq!(
            search.to_json().unwrap(),
            json!({
                "types": ["term"],
                "properties": ["name", "status"],
                "where": {
                    "conditions": [{"property": "status", "operator": "=", "value": "ACCEPTED"}],
                    "operator": "and"
                },
                "pageSize": 50,
                "sorts": [{"property": "name", "ascending": true}]
            })
        );
    }

    #[test]
    fn test_minimal_search_omits_optional_parts() {
        let body = Search::for_type("category").to_json().unwrap();
        assert_eq!(body, json!({"types": ["category"]}));
    }

    #[test]
    fn test_for_asset_requests_model_properties() {
        let search = Search::for_asset::<DatabaseColumn>();
        assert_eq!(search.types, vec!["database_column".to_string()]);
        assert!(search.properties.iter().any(|p| p == "alias_(business_name)"));
        assert!(search.properties.iter().any(|p| p == "modified_on"));
    }

    #[test]
    fn test_validation() {
        assert!(Search::new(Vec::<String>::new()).validate().is_err());
        assert!(Search::for_type("term").page_size(0).validate().is_err());
        assert!(Search::for_type("term")
            .page_size(MAX_PAGE_SIZE + 1)
            .validate()
            .is_err());
        let mut bad = SearchCondition::between("modified_on", 0, 1);
        bad.min = None;
        assert!(Search::for_type("term").and_where(bad).to_json().is_err());
    }
}
