// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! igcrest - Typed models and a REST client for the IBM Information Governance Catalog
//!
//! IGC exposes every kind of metadata asset (glossary terms, database
//! columns, DataStage jobs, BI reports, ...) through one generic REST API
//! under `/ibm/iis/igc-rest/v1`. This crate gives each asset type a typed
//! model and keeps them all reachable at runtime through a [`TypeCatalog`].
//!
//! # Features
//!
//! - **Typed models**: one struct per asset type, declared with [`igc_asset!`]
//! - **Dynamic dispatch**: payloads are typed by their `_type` field
//! - **Searches and updates**: builders for `POST /search` and `PUT /assets`
//! - **Drift detection**: compare a model with the server's own type catalog
//! - **Code generation**: render new `igc_asset!` declarations from the server
//!
//! # Usage
//!
//! ```no_run
//! use igcrest::{ClientConfig, IgcRestClient, Search, SearchCondition};
//! use igcrest::model::types::Term;
//!
//! let client = IgcRestClient::new(&ClientConfig::from_env())?;
//! let search = Search::for_asset::<Term>()
//!     .and_where(SearchCondition::eq("status", "ACCEPTED"));
//! let terms = client.all_pages(client.search::<Term>(&search)?)?;
//! for term in &terms {
//!     println!("{}", term.reference.context_path());
//! }
//! # Ok::<(), igcrest::IgcError>(())
//! ```

pub mod catalog;
pub mod client;
pub mod codegen;
pub mod error;
pub mod model;
pub mod search;
pub mod update;

pub use catalog::{DriftReport, TypeCatalog, TypeDescriptor, TypeDetails, TypeSummary};
pub use client::{ClientConfig, IgcRestClient};
pub use error::{IgcError, IgcResult};
pub use model::{
    Asset, AssetType, IgcDate, ItemList, Paging, PropertyKind, Reference, ReferenceList,
    UntypedAsset,
};
pub use search::{ConditionSet, Operator, Search, SearchCondition};
pub use update::{Create, RelationshipMode, Update};

#[doc(hidden)]
pub use paste;

/// igcrest version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// igcrest crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
