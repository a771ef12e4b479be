// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Declaration macros for IGC asset types
//!
//! Every model in [`crate::model::types`] is one `igc_asset!` invocation,
//! which is also the form `codegen` emits from the IGC type catalog.

/// Maps a [`PropertyKind`](crate::model::PropertyKind) name to its Rust type
#[macro_export]
macro_rules! igc_property_type {
    (String) => { ::std::string::String };
    (Integer) => { i64 };
    (Number) => { f64 };
    (Boolean) => { bool };
    (Date) => { $crate::model::IgcDate };
    (Enum) => { ::std::string::String };
    (StringList) => { ::std::vec::Vec<::std::string::String> };
    (Reference) => { $crate::model::Reference };
    (ReferenceList) => { $crate::model::ReferenceList };
}

/// Declares an IGC asset type
///
/// ```ignore
/// igc_asset! {
///     /// A glossary label
///     pub struct Label {
///         type_id: "label",
///         display_name: "Label",
///         creatable: true,
///         modification_details: true,
///         properties {
///             name: String = "name",
///             labeled_assets: ReferenceList = "labeled_assets",
///         }
///     }
/// }
/// ```
///
/// `pub struct X : main_object { .. }` prepends the properties every
/// catalog asset shares. Crates expanding this macro need `serde` and
/// `serde_json` among their own dependencies for the derives.
#[macro_export]
macro_rules! igc_asset {
    (
        $(#[$meta:meta])*
        pub struct $name:ident : main_object {
            type_id: $type_id:literal,
            display_name: $display:literal,
            creatable: $creatable:literal,
            modification_details: $md:literal,
            properties { $($props:tt)* }
        }
    ) => {
        $crate::igc_asset! {
            $(#[$meta])*
            pub struct $name {
                type_id: $type_id,
                display_name: $display,
                creatable: $creatable,
                modification_details: $md,
                properties {
                    name: String = "name",
                    short_description: String = "short_description",
                    long_description: String = "long_description",
                    labels: ReferenceList = "labels",
                    stewards: ReferenceList = "stewards",
                    assigned_to_terms: ReferenceList = "assigned_to_terms",
                    implements_rules: ReferenceList = "implements_rules",
                    governed_by_rules: ReferenceList = "governed_by_rules",
                    notes: ReferenceList = "notes",
                    created_by: String = "created_by",
                    created_on: Date = "created_on",
                    modified_by: String = "modified_by",
                    modified_on: Date = "modified_on",
                    $($props)*
                }
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            type_id: $type_id:literal,
            display_name: $display:literal,
            creatable: $creatable:literal,
            modification_details: $md:literal,
            properties {
                $( $field:ident : $kind:ident = $json:literal ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            #[serde(flatten)]
            pub reference: $crate::model::Reference,
            $(
                #[serde(rename = $json, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$crate::igc_property_type!($kind)>,
            )*
        }

        impl $name {
            /// Empty instance with only its identity set
            pub fn new(id: impl Into<String>) -> Self {
                Self {
                    reference: $crate::model::Reference::new(id, $type_id),
                    ..Default::default()
                }
            }

            $(
                pub fn $field(&self) -> Option<&$crate::igc_property_type!($kind)> {
                    self.$field.as_ref()
                }

                $crate::paste::paste! {
                    pub fn [<set_ $field>](&mut self, value: Option<$crate::igc_property_type!($kind)>) {
                        self.$field = value;
                    }
                }
            )*
        }

        impl $crate::model::AssetType for $name {
            const TYPE_ID: &'static str = $type_id;
            const DISPLAY_NAME: &'static str = $display;
            const PROPERTIES: &'static [$crate::model::PropertyDescriptor] = &[
                $(
                    $crate::model::PropertyDescriptor {
                        name: $json,
                        kind: $crate::model::PropertyKind::$kind,
                    },
                )*
            ];
            const CAN_BE_CREATED: bool = $creatable;
            const INCLUDES_MODIFICATION_DETAILS: bool = $md;
        }

        impl $crate::model::Asset for $name {
            fn reference(&self) -> &$crate::model::Reference {
                &self.reference
            }

            fn display_name(&self) -> &'static str {
                $display
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn to_json(&self) -> $crate::error::IgcResult<::serde_json::Value> {
                Ok(::serde_json::to_value(self)?)
            }
        }
    };
}
