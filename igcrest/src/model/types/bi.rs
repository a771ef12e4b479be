// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Business intelligence assets

crate::igc_asset! {
    pub struct BiServer : main_object {
        type_id: "bi_server",
        display_name: "BI Server",
        creatable: false,
        modification_details: true,
        properties {
            host: Reference = "host",
            bi_folders: ReferenceList = "bi_folders",
            bi_models: ReferenceList = "bi_models",
        }
    }
}

crate::igc_asset! {
    pub struct BiFolder : main_object {
        type_id: "bi_folder",
        display_name: "BI Folder",
        creatable: false,
        modification_details: true,
        properties {
            bi_server: Reference = "bi_server",
            parent_folder: Reference = "parent_folder",
            bi_folders: ReferenceList = "bi_folders",
            bi_models: ReferenceList = "bi_models",
            bi_reports: ReferenceList = "bi_reports",
        }
    }
}

crate::igc_asset! {
    pub struct BiModel : main_object {
        type_id: "bi_model",
        display_name: "BI Model",
        creatable: false,
        modification_details: true,
        properties {
            bi_server: Reference = "bi_server",
            bi_folder: Reference = "bi_folder",
            bi_collections: ReferenceList = "bi_collections",
        }
    }
}

crate::igc_asset! {
    pub struct BiCollection : main_object {
        type_id: "bi_collection",
        display_name: "BI Collection",
        creatable: false,
        modification_details: true,
        properties {
            bi_model: Reference = "bi_model",
            bi_collection_members: ReferenceList = "bi_collection_members",
            used_by_bi_report_queries: ReferenceList = "used_by_bi_report_queries",
        }
    }
}

crate::igc_asset! {
    pub struct BiReport : main_object {
        type_id: "bi_report",
        display_name: "BI Report",
        creatable: false,
        modification_details: true,
        properties {
            bi_folder: Reference = "bi_folder",
            author: String = "author",
            bi_report_queries: ReferenceList = "bi_report_queries",
        }
    }
}

crate::igc_asset! {
    pub struct BiReportQuery : main_object {
        type_id: "bi_report_query",
        display_name: "BI Report Query",
        creatable: false,
        modification_details: true,
        properties {
            bi_report: Reference = "bi_report",
            uses_bi_collections: ReferenceList = "uses_bi_collections",
        }
    }
}
