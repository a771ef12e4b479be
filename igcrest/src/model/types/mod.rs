// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Generated IGC asset types, grouped by catalog area

pub mod bi;
pub mod common;
pub mod database;
pub mod files;
pub mod glossary;
pub mod governance;
pub mod jobs;

pub use bi::{BiCollection, BiFolder, BiModel, BiReport, BiReportQuery, BiServer};
pub use common::MainObject;
pub use database::{
    Connector, DataConnection, Database, DatabaseColumn, DatabaseSchema, DatabaseTable, Host,
    HostEngine, View,
};
pub use files::{DataFile, DataFileField, DataFileFolder, DataFileRecord};
pub use glossary::{Category, Group, Label, StewardGroup, StewardUser, Term, User};
pub use governance::{
    Classification, DataClass, DataRuleDefinition, InformationGovernancePolicy,
    InformationGovernanceRule,
};
pub use jobs::{Application, Dsjob, Method, ObjectType, Stage, TransformationProject};
