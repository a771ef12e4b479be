// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Type catalog implementation
//!
//! The TypeCatalog maps IGC `_type` values to the static metadata of the
//! generated model for that type, and turns raw JSON into boxed assets once
//! the concrete type is only known at runtime.

use super::builtin;
use crate::error::{IgcError, IgcResult};
use crate::model::asset::names_where;
use crate::model::{Asset, AssetType, ItemList, PropertyDescriptor, PropertyKind, UntypedAsset};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

/// Turns a JSON object into the boxed model of one specific type
pub type DeserializeFn = fn(Value) -> IgcResult<Box<dyn Asset>>;

static GLOBAL_CATALOG: Lazy<TypeCatalog> = Lazy::new(TypeCatalog::new);

/// Runtime copy of one type's [`AssetType`] metadata
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    pub type_id: &'static str,
    pub display_name: &'static str,
    pub properties: &'static [PropertyDescriptor],
    pub can_be_created: bool,
    pub includes_modification_details: bool,
    deserializer: DeserializeFn,
}

fn deserialize_boxed<T: AssetType>(value: Value) -> IgcResult<Box<dyn Asset>> {
    serde_json::from_value::<T>(value)
        .map(|asset| Box::new(asset) as Box<dyn Asset>)
        .map_err(|e| IgcError::Deserialization {
            type_id: T::TYPE_ID.to_string(),
            message: e.to_string(),
        })
}

impl TypeDescriptor {
    pub fn of<T: AssetType>() -> Self {
        Self {
            type_id: T::TYPE_ID,
            display_name: T::DISPLAY_NAME,
            properties: T::PROPERTIES,
            can_be_created: T::CAN_BE_CREATED,
            includes_modification_details: T::INCLUDES_MODIFICATION_DETAILS,
            deserializer: deserialize_boxed::<T>,
        }
    }

    pub fn property(&self, name: &str) -> Option<&'static PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn all_properties(&self) -> Vec<&'static str> {
        names_where(self.properties, |_| true)
    }

    pub fn non_relationship_properties(&self) -> Vec<&'static str> {
        names_where(self.properties, |k| !k.is_relationship())
    }

    pub fn string_properties(&self) -> Vec<&'static str> {
        names_where(self.properties, |k| k == PropertyKind::String)
    }

    pub fn paged_relationship_properties(&self) -> Vec<&'static str> {
        names_where(self.properties, |k| k == PropertyKind::ReferenceList)
    }

    pub fn deserialize(&self, value: Value) -> IgcResult<Box<dyn Asset>> {
        (self.deserializer)(value)
    }
}

/// Registry of every asset type with a generated model
pub struct TypeCatalog {
    /// Map of IGC type id to descriptor
    types: HashMap<String, TypeDescriptor>,
}

impl TypeCatalog {
    /// Create a catalog with every built-in type registered
    pub fn new() -> Self {
        let mut catalog = Self::empty();
        builtin::register_all_types(&mut catalog);
        catalog
    }

    pub fn empty() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Process-wide catalog of the built-in types
    pub fn global() -> &'static TypeCatalog {
        &GLOBAL_CATALOG
    }

    pub fn register<T: AssetType>(&mut self) {
        self.register_descriptor(TypeDescriptor::of::<T>());
    }

    /// Register a descriptor, replacing any previous one for the same type
    pub fn register_descriptor(&mut self, descriptor: TypeDescriptor) {
        if self.types.contains_key(descriptor.type_id) {
            log::warn!(
                "Replacing registered model for type '{}'",
                descriptor.type_id
            );
        }
        log::debug!("Registered asset type: {}", descriptor.type_id);
        self.types
            .insert(descriptor.type_id.to_string(), descriptor);
    }

    pub fn get(&self, type_id: &str) -> Option<&TypeDescriptor> {
        self.types.get(type_id)
    }

    pub fn has_type(&self, type_id: &str) -> bool {
        self.types.contains_key(type_id)
    }

    /// All registered type ids, sorted
    pub fn type_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.types.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// All descriptors, sorted by type id
    pub fn descriptors(&self) -> Vec<&TypeDescriptor> {
        let mut all: Vec<&TypeDescriptor> = self.types.values().collect();
        all.sort_by_key(|d| d.type_id);
        all
    }

    pub fn properties_of(&self, type_id: &str) -> IgcResult<&'static [PropertyDescriptor]> {
        self.get(type_id)
            .map(|d| d.properties)
            .ok_or_else(|| IgcError::UnknownType(type_id.to_string()))
    }

    /// Deserialize an asset, dispatching on its `_type`
    ///
    /// Types without a registered model come back as [`UntypedAsset`].
    pub fn deserialize(&self, value: Value) -> IgcResult<Box<dyn Asset>> {
        let type_id = value
            .get("_type")
            .and_then(Value::as_str)
            .ok_or_else(|| IgcError::MissingField("_type".to_string()))?
            .to_string();

        match self.types.get(&type_id) {
            Some(descriptor) => descriptor.deserialize(value),
            None => {
                log::debug!("No model for type '{}', keeping it untyped", type_id);
                serde_json::from_value::<UntypedAsset>(value)
                    .map(|asset| Box::new(asset) as Box<dyn Asset>)
                    .map_err(|e| IgcError::Deserialization {
                        type_id,
                        message: e.to_string(),
                    })
            }
        }
    }

    /// Deserialize as a specific registered type, ignoring `_type`
    pub fn deserialize_as(&self, type_id: &str, value: Value) -> IgcResult<Box<dyn Asset>> {
        let descriptor = self
            .get(type_id)
            .ok_or_else(|| IgcError::UnknownType(type_id.to_string()))?;
        descriptor.deserialize(value)
    }

    pub fn deserialize_list(&self, list: ItemList<Value>) -> IgcResult<Vec<Box<dyn Asset>>> {
        list.into_iter().map(|item| self.deserialize(item)).collect()
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::{DatabaseTable, Term};
    use serde_json::json;

    #[test]
    fn test_catalog_registers_builtin_types() {
        let catalog = TypeCatalog::new();
        assert!(catalog.has_type("term"));
        assert!(catalog.has_type("host_(engine)"));
        assert!(!catalog.has_type("no_such_type"));
        assert_eq!(catalog.type_count(), catalog.type_ids().len());
    }

    #[test]
    fn test_type_ids_sorted() {
        let catalog = TypeCatalog::new();
        let ids = catalog.type_ids();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_dispatch_on_type() {
        let catalog = TypeCatalog::new();
        let asset = catalog
            .deserialize(json!({"_id": "t1", "_type": "term", "name": "Revenue"}))
            .unwrap();
        assert!(asset.is::<Term>());
        let term = asset.downcast_ref::<Term>().unwrap();
        assert_eq!(term.name().map(String::as_str), Some("Revenue"));
        assert_eq!(asset.display_name(), "Term");
    }

    #[test]
    fn test_unknown_type_is_untyped() {
        let catalog = TypeCatalog::new();
        let asset = catalog
            .deserialize(json!({"_id": "x1", "_type": "$MyBundle-Widget", "colour": "red"}))
            .unwrap();
        let untyped = asset.downcast_ref::<UntypedAsset>().unwrap();
        assert_eq!(untyped.reference.type_id, "$MyBundle-Widget");
        assert_eq!(untyped.properties.get("colour"), Some(&json!("red")));
        assert!(!untyped.properties.contains_key("_id"));
    }

    #[test]
    fn test_missing_type_field() {
        let catalog = TypeCatalog::new();
        let err = catalog.deserialize(json!({"_id": "x1"})).unwrap_err();
        assert!(matches!(err, IgcError::MissingField(ref f) if f == "_type"));
    }

    #[test]
    fn test_deserialize_as_ignores_reported_type() {
        let catalog = TypeCatalog::new();
        let asset = catalog
            .deserialize_as(
                "term",
                json!({"_id": "t1", "_type": "category", "_name": "Revenue", "status": "CANDIDATE"}),
            )
            .unwrap();
        let term = asset.downcast_ref::<Term>().unwrap();
        assert_eq!(term.reference.type_id, "category");
        assert_eq!(term.status().map(String::as_str), Some("CANDIDATE"));
    }

    #[test]
    fn test_deserialize_as_unregistered_type() {
        let catalog = TypeCatalog::new();
        let err = catalog
            .deserialize_as("$MyBundle-Widget", json!({"_id": "x1", "_type": "$MyBundle-Widget"}))
            .unwrap_err();
        assert!(matches!(err, IgcError::UnknownType(ref t) if t == "$MyBundle-Widget"));
        assert!(matches!(
            TypeCatalog::empty().deserialize_as("term", json!({"_id": "t1", "_type": "term"})),
            Err(IgcError::UnknownType(_))
        ));
    }

    #[test]
    fn test_malformed_known_type() {
        let catalog = TypeCatalog::new();
        let err = catalog
            .deserialize(json!({"_id": "t1", "_type": "database_table", "database_columns": 42}))
            .unwrap_err();
        assert!(matches!(err, IgcError::Deserialization { ref type_id, .. } if type_id == "database_table"));
    }

    #[test]
    fn test_descriptor_matches_static_tables() {
        let descriptor = TypeDescriptor::of::<DatabaseTable>();
        assert_eq!(descriptor.type_id, "database_table");
        assert_eq!(
            descriptor.paged_relationship_properties(),
            DatabaseTable::paged_relationship_properties()
        );
        assert_eq!(
            descriptor.string_properties(),
            DatabaseTable::string_properties()
        );
    }

    #[test]
    fn test_properties_of_unknown_type() {
        let catalog = TypeCatalog::empty();
        assert!(matches!(
            catalog.properties_of("term"),
            Err(IgcError::UnknownType(_))
        ));
    }
}
