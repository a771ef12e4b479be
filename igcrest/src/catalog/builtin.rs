// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Registration of the built-in asset types
//!
//! Adding a generated type requires only its `igc_asset!` declaration and
//! one line in register_all_types.

use super::registry::TypeCatalog;
use crate::model::types::*;

pub fn register_all_types(catalog: &mut TypeCatalog) {
    catalog.register::<MainObject>();

    // Glossary and principals
    catalog.register::<Category>();
    catalog.register::<Term>();
    catalog.register::<Label>();
    catalog.register::<User>();
    catalog.register::<Group>();
    catalog.register::<StewardUser>();
    catalog.register::<StewardGroup>();

    // Governance
    catalog.register::<InformationGovernancePolicy>();
    catalog.register::<InformationGovernanceRule>();
    catalog.register::<DataRuleDefinition>();
    catalog.register::<DataClass>();
    catalog.register::<Classification>();

    // Databases
    catalog.register::<Host>();
    catalog.register::<HostEngine>();
    catalog.register::<Database>();
    catalog.register::<DatabaseSchema>();
    catalog.register::<DatabaseTable>();
    catalog.register::<View>();
    catalog.register::<DatabaseColumn>();
    catalog.register::<DataConnection>();
    catalog.register::<Connector>();

    // Files
    catalog.register::<DataFileFolder>();
    catalog.register::<DataFile>();
    catalog.register::<DataFileRecord>();
    catalog.register::<DataFileField>();

    // Jobs and applications
    catalog.register::<TransformationProject>();
    catalog.register::<Dsjob>();
    catalog.register::<Stage>();
    catalog.register::<Application>();
    catalog.register::<ObjectType>();
    catalog.register::<Method>();

    // Business intelligence
    catalog.register::<BiServer>();
    catalog.register::<BiFolder>();
    catalog.register::<BiModel>();
    catalog.register::<BiCollection>();
    catalog.register::<BiReport>();
    catalog.register::<BiReportQuery>();

    log::info!(
        "Asset type registration complete: {} types",
        catalog.type_count()
    );
}
