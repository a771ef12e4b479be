// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Static and dynamic views over generated asset types
//!
//! Each generated type carries a static property table ([`AssetType`]) and
//! can be handled behind a trait object ([`Asset`]) once the concrete type
//! is only known at runtime from the `_type` field.

use super::reference::Reference;
use crate::error::IgcResult;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// Value kind of a single IGC property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    String,
    Integer,
    Number,
    Boolean,
    Date,
    Enum,
    StringList,
    Reference,
    ReferenceList,
}

impl PropertyKind {
    pub fn is_relationship(&self) -> bool {
        matches!(self, PropertyKind::Reference | PropertyKind::ReferenceList)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::String => "String",
            PropertyKind::Integer => "Integer",
            PropertyKind::Number => "Number",
            PropertyKind::Boolean => "Boolean",
            PropertyKind::Date => "Date",
            PropertyKind::Enum => "Enum",
            PropertyKind::StringList => "StringList",
            PropertyKind::Reference => "Reference",
            PropertyKind::ReferenceList => "ReferenceList",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a generated property table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    /// Property name as it appears in IGC JSON
    pub name: &'static str,
    pub kind: PropertyKind,
}

pub(crate) fn names_where(
    properties: &'static [PropertyDescriptor],
    keep: impl Fn(PropertyKind) -> bool,
) -> Vec<&'static str> {
    properties
        .iter()
        .filter(|p| keep(p.kind))
        .map(|p| p.name)
        .collect()
}

/// Compile-time metadata of a generated IGC asset type
pub trait AssetType: Asset + Serialize + DeserializeOwned + Default + 'static {
    /// IGC `_type` value
    const TYPE_ID: &'static str;
    const DISPLAY_NAME: &'static str;
    /// Properties in declaration order
    const PROPERTIES: &'static [PropertyDescriptor];
    /// Whether the REST API accepts creation of this type
    const CAN_BE_CREATED: bool;
    /// Whether the type carries created/modified by/on properties
    const INCLUDES_MODIFICATION_DETAILS: bool;

    fn all_properties() -> Vec<&'static str> {
        names_where(Self::PROPERTIES, |_| true)
    }

    fn non_relationship_properties() -> Vec<&'static str> {
        names_where(Self::PROPERTIES, |k| !k.is_relationship())
    }

    fn string_properties() -> Vec<&'static str> {
        names_where(Self::PROPERTIES, |k| k == PropertyKind::String)
    }

    fn paged_relationship_properties() -> Vec<&'static str> {
        names_where(Self::PROPERTIES, |k| k == PropertyKind::ReferenceList)
    }

    fn property(name: &str) -> Option<&'static PropertyDescriptor> {
        Self::PROPERTIES.iter().find(|p| p.name == name)
    }

    fn is_type(type_id: &str) -> bool {
        type_id == Self::TYPE_ID
    }

    fn is_type_of(reference: &Reference) -> bool {
        Self::is_type(&reference.type_id)
    }
}

/// Runtime view of any deserialized asset
pub trait Asset: fmt::Debug + Send + Sync {
    fn reference(&self) -> &Reference;

    fn display_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn to_json(&self) -> IgcResult<serde_json::Value>;

    fn type_id(&self) -> &str {
        &self.reference().type_id
    }

    fn rid(&self) -> &str {
        &self.reference().id
    }
}

impl dyn Asset {
    pub fn downcast_ref<T: Asset + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn is<T: Asset + 'static>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Raw JSON value of one property, if set
    pub fn property_value(&self, name: &str) -> Option<serde_json::Value> {
        let json = self.to_json().ok()?;
        json.get(name).filter(|v| !v.is_null()).cloned()
    }
}

/// An asset whose `_type` has no generated model
///
/// Keeps the identity and every other field as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UntypedAsset {
    #[serde(flatten)]
    pub reference: Reference,

    #[serde(flatten)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl Asset for UntypedAsset {
    fn reference(&self) -> &Reference {
        &self.reference
    }

    fn display_name(&self) -> &'static str {
        "Untyped Asset"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn to_json(&self) -> IgcResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
