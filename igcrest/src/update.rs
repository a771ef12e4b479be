// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Request bodies for creating and updating assets

use crate::catalog::{TypeCatalog, TypeDescriptor};
use crate::error::{IgcError, IgcResult};
use crate::model::{AssetType, PropertyKind};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How a relationship edit combines with the existing related assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipMode {
    #[default]
    Append,
    Replace,
    ReplaceAll,
}

/// Body of `PUT /assets/{rid}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Update {
    values: Map<String, Value>,
}

impl Update {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(property.into(), value.into());
        self
    }

    /// Relate the asset to others by RID
    pub fn relate<S: Into<String>>(
        mut self,
        property: impl Into<String>,
        rids: impl IntoIterator<Item = S>,
        mode: RelationshipMode,
    ) -> Self {
        let items: Vec<Value> = rids.into_iter().map(|r| Value::String(r.into())).collect();
        let mut edit = Map::new();
        edit.insert("items".to_string(), Value::Array(items));
        edit.insert("mode".to_string(), serde_json::to_value(mode).unwrap_or(Value::Null));
        self.values.insert(property.into(), Value::Object(edit));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Check every property exists on the type and is edited the right way
    pub fn validate_against(&self, descriptor: &TypeDescriptor) -> IgcResult<()> {
        if self.is_empty() {
            return Err(IgcError::InvalidParameters(
                "update contains no changes".to_string(),
            ));
        }
        for (name, value) in &self.values {
            let property = descriptor.property(name).ok_or_else(|| {
                IgcError::InvalidParameters(format!(
                    "'{}' is not a property of '{}'",
                    name, descriptor.type_id
                ))
            })?;
            let is_edit = value.get("items").is_some() && value.get("mode").is_some();
            if property.kind == PropertyKind::ReferenceList && !is_edit {
                return Err(IgcError::InvalidParameters(format!(
                    "'{}' is a relationship list; use relate()",
                    name
                )));
            }
            if is_edit && property.kind != PropertyKind::ReferenceList {
                return Err(IgcError::InvalidParameters(format!(
                    "'{}' is not a relationship list",
                    name
                )));
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> IgcResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Body of `POST /assets`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Create {
    #[serde(rename = "_type")]
    type_id: String,

    #[serde(flatten)]
    values: Map<String, Value>,
}

impl Create {
    /// Start a creation request for a generated type
    pub fn new<T: AssetType>() -> IgcResult<Self> {
        Self::for_descriptor(&TypeDescriptor::of::<T>())
    }

    /// Start a creation request for a type known to the catalog
    pub fn for_type(catalog: &TypeCatalog, type_id: &str) -> IgcResult<Self> {
        let descriptor = catalog
            .get(type_id)
            .ok_or_else(|| IgcError::UnknownType(type_id.to_string()))?;
        Self::for_descriptor(descriptor)
    }

    fn for_descriptor(descriptor: &TypeDescriptor) -> IgcResult<Self> {
        if !descriptor.can_be_created {
            return Err(IgcError::NotSupported(format!(
                "assets of type '{}' cannot be created through the REST API",
                descriptor.type_id
            )));
        }
        Ok(Self {
            type_id: descriptor.type_id.to_string(),
            values: Map::new(),
        })
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub fn set(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(property.into(), value.into());
        self
    }

    /// Set a single-valued relationship by RID
    pub fn set_reference(self, property: impl Into<String>, rid: impl Into<String>) -> Self {
        self.set(property, Value::String(rid.into()))
    }

    /// Set a relationship list by RID
    pub fn set_references<S: Into<String>>(
        self,
        property: impl Into<String>,
        rids: impl IntoIterator<Item = S>,
    ) -> Self {
        let items: Vec<Value> = rids.into_iter().map(|r| Value::String(r.into())).collect();
        self.set(property, Value::Array(items))
    }

    pub fn to_json(&self) -> IgcResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
