// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! DataStage projects and jobs, and application (OpenIGC-style) assets

crate::igc_asset! {
    pub struct TransformationProject : main_object {
        type_id: "transformation_project",
        display_name: "Transformation Project",
        creatable: false,
        modification_details: true,
        properties {
            host_engine: Reference = "host_(engine)",
            jobs: ReferenceList = "jobs",
            data_connections: ReferenceList = "data_connections",
        }
    }
}

crate::igc_asset! {
    /// A DataStage job
    pub struct Dsjob : main_object {
        type_id: "dsjob",
        display_name: "Job",
        creatable: false,
        modification_details: true,
        properties {
            transformation_project: Reference = "transformation_project",
            type_: Enum = "type",
            job_type: Enum = "job_type",
            compiled_by: String = "compiled_by",
            stages: ReferenceList = "stages",
            reads_from_design: ReferenceList = "reads_from_(design)",
            writes_to_design: ReferenceList = "writes_to_(design)",
        }
    }
}

crate::igc_asset! {
    pub struct Stage : main_object {
        type_id: "stage",
        display_name: "Stage",
        creatable: false,
        modification_details: true,
        properties {
            job_or_container: Reference = "job_or_container",
            stage_type: Reference = "stage_type",
            type_: String = "type",
            input_links: ReferenceList = "input_links",
            output_links: ReferenceList = "output_links",
            reads_from_design: ReferenceList = "reads_from_(design)",
            writes_to_design: ReferenceList = "writes_to_(design)",
        }
    }
}

crate::igc_asset! {
    pub struct Application : main_object {
        type_id: "application",
        display_name: "Application",
        creatable: false,
        modification_details: true,
        properties {
            imported_from: String = "imported_from",
            object_types: ReferenceList = "object_types",
        }
    }
}

crate::igc_asset! {
    pub struct ObjectType : main_object {
        type_id: "object_type",
        display_name: "Object Type",
        creatable: false,
        modification_details: true,
        properties {
            application: Reference = "application",
            methods: ReferenceList = "methods",
        }
    }
}

crate::igc_asset! {
    pub struct Method : main_object {
        type_id: "method",
        display_name: "Method",
        creatable: false,
        modification_details: true,
        properties {
            object_type: Reference = "object_type",
            input_parameters: ReferenceList = "input_parameters",
            output_values: ReferenceList = "output_values",
        }
    }
}
