// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Paged lists as returned for relationships and search results

use super::reference::Reference;
use serde::{Deserialize, Serialize};

/// Paging block attached to every list the IGC REST API returns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    #[serde(default)]
    pub num_total: u64,

    #[serde(default)]
    pub page_size: u64,

    /// Zero-based index of the first item in this page
    #[serde(default)]
    pub begin: u64,

    /// Zero-based, inclusive index of the last item in this page
    #[serde(default)]
    pub end: u64,

    /// URL of the next page, absent on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

/// A page of items plus the paging block describing where it sits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemList<T> {
    #[serde(default)]
    pub paging: Paging,

    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Relationship property value: a paged list of references
pub type ReferenceList = ItemList<Reference>;

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self {
            paging: Paging::default(),
            items: Vec::new(),
        }
    }
}

impl<T> ItemList<T> {
    pub fn from_items(items: Vec<T>) -> Self {
        let count = items.len() as u64;
        Self {
            paging: Paging {
                num_total: count,
                page_size: count,
                begin: 0,
                end: count.saturating_sub(1),
                next: None,
                previous: None,
            },
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// True if the server has another page for this list
    pub fn has_more(&self) -> bool {
        self.paging.next.is_some()
    }

    /// True if every item the server reported is present locally
    pub fn is_complete(&self) -> bool {
        self.items.len() as u64 >= self.paging.num_total
    }

    /// Append the next page, taking over its position and next link
    pub fn extend_page(&mut self, page: ItemList<T>) {
        self.items.extend(page.items);
        self.paging.end = page.paging.end;
        self.paging.next = page.paging.next;
        self.paging.num_total = page.paging.num_total.max(self.items.len() as u64);
    }
}

impl ItemList<Reference> {
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|r| r.id.as_str()).collect()
    }

    pub fn contains_id(&self, rid: &str) -> bool {
        self.items.iter().any(|r| r.id == rid)
    }
}

impl<T> IntoIterator for ItemList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ItemList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
