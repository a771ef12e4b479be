// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Governance policies, rules and data classification

crate::igc_asset! {
    pub struct InformationGovernancePolicy : main_object {
        type_id: "information_governance_policy",
        display_name: "Information Governance Policy",
        creatable: true,
        modification_details: true,
        properties {
            parent_policy: Reference = "parent_policy",
            sub_policies: ReferenceList = "sub_policies",
            information_governance_rules: ReferenceList = "information_governance_rules",
            status: Enum = "status",
        }
    }
}

crate::igc_asset! {
    pub struct InformationGovernanceRule : main_object {
        type_id: "information_governance_rule",
        display_name: "Information Governance Rule",
        creatable: true,
        modification_details: true,
        properties {
            referencing_policies: ReferenceList = "referencing_policies",
            implemented_by_assets: ReferenceList = "implemented_by_assets",
            governs_assets: ReferenceList = "governs_assets",
            related_rules: ReferenceList = "related_rules",
            status: Enum = "status",
        }
    }
}

crate::igc_asset! {
    pub struct DataRuleDefinition : main_object {
        type_id: "data_rule_definition",
        display_name: "Data Rule Definition",
        creatable: false,
        modification_details: true,
        properties {
            expression: String = "expression",
            project: Reference = "project",
            data_rules: ReferenceList = "data_rules",
            published: Boolean = "published",
        }
    }
}

crate::igc_asset! {
    pub struct DataClass : main_object {
        type_id: "data_class",
        display_name: "Data Class",
        creatable: true,
        modification_details: true,
        properties {
            class_code: String = "class_code",
            type_: Enum = "type",
            provider: String = "provider",
            enabled: Boolean = "enabled",
            example: String = "example",
            regular_expression: String = "regular_expression",
            threshold: Number = "threshold",
            minimum_data_length: Integer = "minimum_data_length",
            maximum_data_length: Integer = "maximum_data_length",
            data_type_filter_elements_enum: StringList = "data_type_filter_elements_enum",
            parent_data_class: Reference = "parent_data_class",
            contains_data_classes: ReferenceList = "contains_data_classes",
            classifications_selected: ReferenceList = "classifications_selected",
        }
    }
}

crate::igc_asset! {
    /// A data class detected on, or selected for, a field or column
    pub struct Classification {
        type_id: "classification",
        display_name: "Data Classification",
        creatable: false,
        modification_details: true,
        properties {
            classifies_asset: Reference = "classifies_asset",
            data_class: Reference = "data_class",
            confidence_percent: Number = "confidencePercent",
            threshold: Number = "threshold",
            value_frequency: Integer = "value_frequency",
            detected_state: Enum = "detectedState",
            created_by: String = "created_by",
            created_on: Date = "created_on",
            modified_by: String = "modified_by",
            modified_on: Date = "modified_on",
        }
    }
}
