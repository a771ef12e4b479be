// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Payloads of the IGC `/types` endpoints
//!
//! These describe the server's own type catalog, which is what the
//! generated models are derived from.

use crate::model::PropertyKind;
use serde::{Deserialize, Serialize};

/// One entry of `GET /types`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSummary {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "_name", default)]
    pub name: String,

    #[serde(rename = "_url", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Data type of a property in the server catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyType {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "_name", default)]
    pub name: String,

    #[serde(rename = "_url", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidValue {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeProperty {
    pub name: String,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(rename = "type")]
    pub data_type: PropertyType,

    /// -1 for unbounded
    #[serde(default)]
    pub max_cardinality: Option<i64>,

    #[serde(default)]
    pub is_required: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub valid_values: Vec<ValidValue>,
}

impl TypeProperty {
    pub fn is_many(&self) -> bool {
        matches!(self.max_cardinality, Some(c) if c < 0 || c > 1)
    }

    /// Model kind this property maps to
    pub fn kind(&self) -> PropertyKind {
        match self.data_type.id.as_str() {
            "string" | "text" => {
                if self.is_many() {
                    PropertyKind::StringList
                } else {
                    PropertyKind::String
                }
            }
            "number" | "double" | "float" => PropertyKind::Number,
            "integer" | "int" | "long" => PropertyKind::Integer,
            "boolean" => PropertyKind::Boolean,
            "date" | "datetime" => PropertyKind::Date,
            "enum" => PropertyKind::Enum,
            _ if self.is_many() => PropertyKind::ReferenceList,
            _ => PropertyKind::Reference,
        }
    }

    /// System properties such as `_id` are not part of the model
    pub fn is_system(&self) -> bool {
        self.name.starts_with('_')
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyGroup {
    #[serde(default)]
    pub properties: Vec<TypeProperty>,
}

/// Response of `GET /types/{id}` with view, create and edit properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDetails {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "_name", default)]
    pub name: String,

    #[serde(rename = "_url", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_info: Option<PropertyGroup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_info: Option<PropertyGroup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_info: Option<PropertyGroup>,
}

impl TypeDetails {
    /// Viewable, non-system properties in catalog order
    pub fn properties(&self) -> impl Iterator<Item = &TypeProperty> {
        self.view_info
            .iter()
            .flat_map(|group| group.properties.iter())
            .filter(|p| !p.is_system())
    }

    pub fn property(&self, name: &str) -> Option<&TypeProperty> {
        self.properties().find(|p| p.name == name)
    }

    pub fn can_be_created(&self) -> bool {
        self.create_info
            .as_ref()
            .map(|group| !group.properties.is_empty())
            .unwrap_or(false)
    }

    pub fn includes_modification_details(&self) -> bool {
        self.property("modified_on").is_some()
    }

    /// Names of properties that can be set on update
    pub fn editable_properties(&self) -> Vec<&str> {
        self.edit_info
            .iter()
            .flat_map(|group| group.properties.iter())
            .map(|p| p.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_details() -> TypeDetails {
        serde_json::from_value(json!({
            "_id": "label",
            "_name": "Label",
            "_url": "https://igc:9443/ibm/iis/igc-rest/v1/types/label",
            "viewInfo": {
                "properties": [
                    {"name": "_id", "displayName": "RID", "type": {"_id": "string", "_name": "String"}},
                    {"name": "name", "displayName": "Name", "type": {"_id": "string", "_name": "String"}, "maxCardinality": 1},
                    {"name": "labeled_assets", "displayName": "Labeled Assets", "type": {"_id": "main_object", "_name": "Main Object"}, "maxCardinality": -1},
                    {"name": "modified_on", "displayName": "Modified On", "type": {"_id": "datetime", "_name": "Date Time"}}
                ]
            },
            "createInfo": {
                "properties": [
                    {"name": "name", "type": {"_id": "string", "_name": "String"}, "isRequired": true}
                ]
            },
            "editInfo": {
                "properties": [
                    {"name": "description", "type": {"_id": "string", "_name": "String"}}
                ]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_property_kinds() {
        let details = sample_details();
        assert_eq!(details.property("name").unwrap().kind(), PropertyKind::String);
        assert_eq!(
            details.property("labeled_assets").unwrap().kind(),
            PropertyKind::ReferenceList
        );
        assert_eq!(details.property("modified_on").unwrap().kind(), PropertyKind::Date);
    }

    #[test]
    fn test_system_properties_hidden() {
        let details = sample_details();
        assert!(details.property("_id").is_none());
        assert_eq!(details.properties().count(), 3);
    }

    #[test]
    fn test_flags() {
        let details = sample_details();
        assert!(details.can_be_created());
        assert!(details.includes_modification_details());
        assert_eq!(details.editable_properties(), vec!["description"]);
    }

    #[test]
    fn test_string_list_kind() {
        let prop: TypeProperty = serde_json::from_value(json!({
            "name": "data_type_filter_elements_enum",
            "type": {"_id": "string", "_name": "String"},
            "maxCardinality": -1
        }))
        .unwrap();
        assert_eq!(prop.kind(), PropertyKind::StringList);
    }

    #[test]
    fn test_type_summary_list() {
        let types: Vec<TypeSummary> = serde_json::from_value(json!([
            {"_id": "term", "_name": "Term", "_url": "https://igc:9443/ibm/iis/igc-rest/v1/types/term"},
            {"_id": "category", "_name": "Category"}
        ]))
        .unwrap();
        assert_eq!(types.len(), 2);
        assert!(types[1].url.is_none());
    }
}
