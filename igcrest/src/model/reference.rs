// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Identity of an IGC object as it appears on the wire

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static RID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]+(\.[A-Za-z0-9]+)*$").expect("RID pattern is valid")
});

/// A link to an IGC asset
///
/// Every object returned by the IGC REST API carries these system fields,
/// and relationship properties are expressed as lists of them. Only `_id`
/// and `_type` are guaranteed to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Repository id (RID)
    #[serde(rename = "_id")]
    pub id: String,

    /// IGC type id, e.g. `database_table`
    #[serde(rename = "_type")]
    pub type_id: String,

    #[serde(rename = "_name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "_url", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Containment path from the outermost container down to the parent
    #[serde(rename = "_context", default, skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<Reference>,
}

impl Reference {
    pub fn new(id: impl Into<String>, type_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_id: type_id.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_context(mut self, context: Vec<Reference>) -> Self {
        self.context = context;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Fully-qualified path of the asset, e.g. `host::db::schema::table`
    ///
    /// Context entries without a name are skipped. Falls back to the RID
    /// when the asset itself has no name.
    pub fn context_path(&self) -> String {
        let mut parts: Vec<&str> = self
            .context
            .iter()
            .filter_map(|c| c.name.as_deref())
            .collect();
        parts.push(self.name.as_deref().unwrap_or(&self.id));
        parts.join("::")
    }

    /// Identity comparison; only the RID matters
    pub fn is_same_as(&self, other: &Reference) -> bool {
        self.id == other.id
    }

    pub fn is_valid_rid(rid: &str) -> bool {
        RID_PATTERN.is_match(rid)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} '{}' ({})", self.type_id, name, self.id),
            None => write!(f, "{} ({})", self.type_id, self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_minimal_reference() {
        let r: Reference = serde_json::from_value(json!({
            "_id": "b1c497ce.54bd3a08.001mts4qn.7n9a341.3d4c9s.5nb2i9kce5hp3gfpmgqac",
            "_type": "term"
        }))
        .unwrap();
        assert_eq!(r.type_id(), "term");
        assert!(r.name().is_none());
        assert!(r.context.is_empty());
    }

    #[test]
    fn test_context_path() {
        let r = Reference::new("t1", "database_table")
            .with_name("CUSTOMERS")
            .with_context(vec![
                Reference::new("h1", "host").with_name("db2host"),
                Reference::new("d1", "database").with_name("SALES"),
                Reference::new("s1", "database_schema").with_name("DB2INST1"),
            ]);
        assert_eq!(r.context_path(), "db2host::SALES::DB2INST1::CUSTOMERS");
    }

    #[test]
    fn test_context_path_falls_back_to_rid() {
        let r = Reference::new("abc.def", "term");
        assert_eq!(r.context_path(), "abc.def");
    }

    #[test]
    fn test_identity_ignores_name() {
        let a = Reference::new("x.1", "term").with_name("Customer");
        let b = Reference::new("x.1", "term").with_name("Client");
        assert!(a.is_same_as(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_rid_validation() {
        assert!(Reference::is_valid_rid(
            "6662c0f2.e1b1ec6c.001mts4qn.7n9a341.3d4c9s.5nb2i9kce5hp3gfpmgqac"
        ));
        assert!(Reference::is_valid_rid("deadbeef"));
        assert!(!Reference::is_valid_rid(""));
        assert!(!Reference::is_valid_rid("a..b"));
        assert!(!Reference::is_valid_rid("a/b"));
        assert!(!Reference::is_valid_rid("a_b.c"));
        assert!(!Reference::is_valid_rid("a-b"));
        assert!(!Reference::is_valid_rid(".ab"));
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let value = serde_json::to_value(Reference::new("r1", "label")).unwrap();
        assert_eq!(value, json!({"_id": "r1", "_type": "label"}));
    }
}
