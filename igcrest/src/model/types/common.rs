// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Properties shared by every catalog asset

crate::igc_asset! {
    /// The abstract `main_object` type
    ///
    /// Search results typed as `MainObject` are useful when a query spans
    /// several asset types and only the common properties are needed.
    pub struct MainObject : main_object {
        type_id: "main_object",
        display_name: "Main Object",
        creatable: false,
        modification_details: true,
        properties {}
    }
}
