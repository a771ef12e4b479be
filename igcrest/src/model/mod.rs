// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Data model for IGC REST payloads
//!
//! This module contains the wire-level building blocks (references, paged
//! lists, timestamps), the traits that describe a generated asset type, and
//! the generated asset types themselves.

pub mod asset;
pub mod dates;
pub mod macros;
pub mod paging;
pub mod reference;
pub mod types;

pub use asset::{Asset, AssetType, PropertyDescriptor, PropertyKind, UntypedAsset};
pub use dates::IgcDate;
pub use paging::{ItemList, Paging, ReferenceList};
pub use reference::Reference;
