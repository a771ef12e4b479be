// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Business glossary assets and the principals that steward them

crate::igc_asset! {
    pub struct Category : main_object {
        type_id: "category",
        display_name: "Category",
        creatable: true,
        modification_details: true,
        properties {
            parent_category: Reference = "parent_category",
            subcategories: ReferenceList = "subcategories",
            terms: ReferenceList = "terms",
            referencing_categories: ReferenceList = "referencing_categories",
            translations: ReferenceList = "translations",
        }
    }
}

crate::igc_asset! {
    pub struct Term : main_object {
        type_id: "term",
        display_name: "Term",
        creatable: true,
        modification_details: true,
        properties {
            abbreviation: String = "abbreviation",
            additional_abbreviation: String = "additional_abbreviation",
            example: String = "example",
            usage: String = "usage",
            status: Enum = "status",
            type_: Enum = "type",
            is_modifier: Enum = "is_modifier",
            parent_category: Reference = "parent_category",
            referencing_categories: ReferenceList = "referencing_categories",
            is_a_type_of: Reference = "is_a_type_of",
            has_types: ReferenceList = "has_types",
            is_of: Reference = "is_of",
            has_a: ReferenceList = "has_a",
            synonyms: ReferenceList = "synonyms",
            preferred_synonym: Reference = "preferred_synonym",
            related_terms: ReferenceList = "related_terms",
            replaces: ReferenceList = "replaces",
            replaced_by: Reference = "replaced_by",
            assigned_terms: ReferenceList = "assigned_terms",
            assigned_assets: ReferenceList = "assigned_assets",
        }
    }
}

crate::igc_asset! {
    pub struct Label {
        type_id: "label",
        display_name: "Label",
        creatable: true,
        modification_details: true,
        properties {
            name: String = "name",
            description: String = "description",
            labeled_assets: ReferenceList = "labeled_assets",
            created_by: String = "created_by",
            created_on: Date = "created_on",
            modified_by: String = "modified_by",
            modified_on: Date = "modified_on",
        }
    }
}

crate::igc_asset! {
    pub struct User {
        type_id: "user",
        display_name: "User",
        creatable: false,
        modification_details: true,
        properties {
            principal_id: String = "principal_id",
            given_name: String = "given_name",
            surname: String = "surname",
            full_name: String = "full_name",
            title: String = "title",
            job_title: String = "job_title",
            email_address: String = "email_address",
            organization: String = "organization",
            business_address: String = "business_address",
            office_phone_number: String = "office_phone_number",
            mobile_phone_number: String = "mobile_phone_number",
            groups: ReferenceList = "groups",
            managed_assets: ReferenceList = "managed_assets",
            created_by: String = "created_by",
            created_on: Date = "created_on",
            modified_by: String = "modified_by",
            modified_on: Date = "modified_on",
        }
    }
}

crate::igc_asset! {
    pub struct Group {
        type_id: "group",
        display_name: "Group",
        creatable: false,
        modification_details: true,
        properties {
            principal_id: String = "principal_id",
            name: String = "name",
            description: String = "description",
            email_address: String = "email_address",
            users: ReferenceList = "users",
            managed_assets: ReferenceList = "managed_assets",
            created_by: String = "created_by",
            created_on: Date = "created_on",
            modified_by: String = "modified_by",
            modified_on: Date = "modified_on",
        }
    }
}

crate::igc_asset! {
    /// A user registered as a steward
    pub struct StewardUser {
        type_id: "steward_user",
        display_name: "Steward User",
        creatable: false,
        modification_details: false,
        properties {
            principal_id: String = "principal_id",
            given_name: String = "given_name",
            surname: String = "surname",
            full_name: String = "full_name",
            email_address: String = "email_address",
            organization: String = "organization",
            managed_assets: ReferenceList = "managed_assets",
        }
    }
}

crate::igc_asset! {
    /// A group registered as a steward
    pub struct StewardGroup {
        type_id: "steward_group",
        display_name: "Steward Group",
        creatable: false,
        modification_details: false,
        properties {
            principal_id: String = "principal_id",
            name: String = "name",
            email_address: String = "email_address",
            managed_assets: ReferenceList = "managed_assets",
        }
    }
}
