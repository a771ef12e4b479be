// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Relational database assets and the infrastructure that hosts them

crate::igc_asset! {
    pub struct Host : main_object {
        type_id: "host",
        display_name: "Host",
        creatable: false,
        modification_details: true,
        properties {
            location: String = "location",
            databases: ReferenceList = "databases",
            data_file_folders: ReferenceList = "data_file_folders",
            connectors: ReferenceList = "connectors",
        }
    }
}

crate::igc_asset! {
    /// A host running the information server engine tier
    pub struct HostEngine : main_object {
        type_id: "host_(engine)",
        display_name: "Host (Engine)",
        creatable: false,
        modification_details: true,
        properties {
            location: String = "location",
            databases: ReferenceList = "databases",
            data_file_folders: ReferenceList = "data_file_folders",
            connectors: ReferenceList = "connectors",
            transformation_projects: ReferenceList = "transformation_projects",
        }
    }
}

crate::igc_asset! {
    pub struct Database : main_object {
        type_id: "database",
        display_name: "Database",
        creatable: false,
        modification_details: true,
        properties {
            host: Reference = "host",
            dbms: String = "dbms",
            dbms_vendor: String = "dbms_vendor",
            dbms_version: String = "dbms_version",
            dbms_server_instance: String = "dbms_server_instance",
            imported_from: String = "imported_from",
            database_schemas: ReferenceList = "database_schemas",
            data_connections: ReferenceList = "data_connections",
        }
    }
}

crate::igc_asset! {
    pub struct DatabaseSchema : main_object {
        type_id: "database_schema",
        display_name: "Database Schema",
        creatable: false,
        modification_details: true,
        properties {
            database: Reference = "database",
            imported_from: String = "imported_from",
            database_tables: ReferenceList = "database_tables",
            views: ReferenceList = "views",
        }
    }
}

crate::igc_asset! {
    pub struct DatabaseTable : main_object {
        type_id: "database_table",
        display_name: "Database Table",
        creatable: false,
        modification_details: true,
        properties {
            database_schema: Reference = "database_schema",
            alias_business_name: String = "alias_(business_name)",
            imported_from: String = "imported_from",
            database_columns: ReferenceList = "database_columns",
            defined_primary_key: ReferenceList = "defined_primary_key",
            defined_foreign_key: ReferenceList = "defined_foreign_key",
            read_by_design: ReferenceList = "read_by_(design)",
            written_by_design: ReferenceList = "written_by_(design)",
        }
    }
}

crate::igc_asset! {
    /// A database view
    pub struct View : main_object {
        type_id: "view",
        display_name: "View",
        creatable: false,
        modification_details: true,
        properties {
            database_schema: Reference = "database_schema",
            alias_business_name: String = "alias_(business_name)",
            expression: String = "expression",
            imported_from: String = "imported_from",
            database_columns: ReferenceList = "database_columns",
        }
    }
}

crate::igc_asset! {
    pub struct DatabaseColumn : main_object {
        type_id: "database_column",
        display_name: "Database Column",
        creatable: false,
        modification_details: true,
        properties {
            database_table_or_view: Reference = "database_table_or_view",
            alias_business_name: String = "alias_(business_name)",
            data_type: Enum = "data_type",
            odbc_type: Enum = "odbc_type",
            length: Integer = "length",
            minimum_length: Integer = "minimum_length",
            fraction: Integer = "fraction",
            position: Integer = "position",
            allows_null_values: Boolean = "allows_null_values",
            unique: Boolean = "unique",
            default_value: String = "default_value",
            selected_classification: Reference = "selected_classification",
            detected_classifications: ReferenceList = "detected_classifications",
        }
    }
}

crate::igc_asset! {
    pub struct DataConnection : main_object {
        type_id: "data_connection",
        display_name: "Data Connection",
        creatable: false,
        modification_details: true,
        properties {
            connection_string: String = "connection_string",
            username: String = "username",
            data_connectors: Reference = "data_connectors",
            imports_database: Reference = "imports_database",
        }
    }
}

crate::igc_asset! {
    pub struct Connector : main_object {
        type_id: "connector",
        display_name: "Connector",
        creatable: false,
        modification_details: true,
        properties {
            host: Reference = "host",
            version: String = "version",
            data_connections: ReferenceList = "data_connections",
        }
    }
}
