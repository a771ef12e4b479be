// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Structured file assets

crate::igc_asset! {
    pub struct DataFileFolder : main_object {
        type_id: "data_file_folder",
        display_name: "Data File Folder",
        creatable: false,
        modification_details: true,
        properties {
            host: Reference = "host",
            parent_folder: Reference = "parent_folder",
            data_file_folders: ReferenceList = "data_file_folders",
            data_files: ReferenceList = "data_files",
        }
    }
}

crate::igc_asset! {
    pub struct DataFile : main_object {
        type_id: "data_file",
        display_name: "Data File",
        creatable: false,
        modification_details: true,
        properties {
            path: String = "path",
            imported_from: String = "imported_from",
            parent_folder: Reference = "parent_folder",
            data_file_records: ReferenceList = "data_file_records",
            read_by_design: ReferenceList = "read_by_(design)",
            written_by_design: ReferenceList = "written_by_(design)",
        }
    }
}

crate::igc_asset! {
    pub struct DataFileRecord : main_object {
        type_id: "data_file_record",
        display_name: "Data File Record",
        creatable: false,
        modification_details: true,
        properties {
            data_file: Reference = "data_file",
            alias_business_name: String = "alias_(business_name)",
            data_file_fields: ReferenceList = "data_file_fields",
        }
    }
}

crate::igc_asset! {
    pub struct DataFileField : main_object {
        type_id: "data_file_field",
        display_name: "Data File Field",
        creatable: false,
        modification_details: true,
        properties {
            data_file_record: Reference = "data_file_record",
            alias_business_name: String = "alias_(business_name)",
            data_type: Enum = "data_type",
            length: Integer = "length",
            minimum_length: Integer = "minimum_length",
            fraction: Integer = "fraction",
            position: Integer = "position",
            allows_null_values: Boolean = "allows_null_values",
            default_value: String = "default_value",
            selected_classification: Reference = "selected_classification",
            detected_classifications: ReferenceList = "detected_classifications",
        }
    }
}
