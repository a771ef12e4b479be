// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Type catalog
//!
//! Runtime registry of the generated models, the payloads of the server's
//! own type catalog, and drift detection between the two.

pub mod builtin;
pub mod drift;
pub mod registry;
pub mod type_details;

pub use drift::{compare, DriftReport, KindMismatch};
pub use registry::{DeserializeFn, TypeCatalog, TypeDescriptor};
pub use type_details::{PropertyGroup, PropertyType, TypeDetails, TypeProperty, TypeSummary, ValidValue};
