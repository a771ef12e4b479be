// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command-line arguments

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "igcrest", version, about = "IBM Information Governance Catalog REST client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON file with connection settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Services tier URL, e.g. https://igc:9443
    #[arg(long, global = true)]
    pub url: Option<String>,

    #[arg(short = 'u', long, global = true)]
    pub user: Option<String>,

    /// Prompted for when a user is given without one
    #[arg(short = 'p', long, global = true)]
    pub password: Option<String>,

    /// Debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List asset types
    Types {
        /// List the server's types instead of the built-in models
        #[arg(long)]
        remote: bool,
    },

    /// Show the properties of one asset type
    Describe {
        type_id: String,

        /// Show the server's definition instead of the built-in model
        #[arg(long)]
        remote: bool,
    },

    /// Fetch one asset by RID
    Get {
        rid: String,

        /// Show one relationship property instead of the asset
        #[arg(long)]
        relationship: Option<String>,

        /// Follow paging links for the relationship
        #[arg(long, requires = "relationship")]
        all: bool,
    },

    /// Search for assets
    Search {
        /// Asset type to search (repeatable)
        #[arg(short = 't', long = "type", required = true)]
        types: Vec<String>,

        /// Condition such as `name~Cust` or `status=ACCEPTED` (repeatable)
        #[arg(short = 'w', long = "where")]
        conditions: Vec<String>,

        /// Match any condition instead of all of them
        #[arg(long)]
        any: bool,

        /// Property to return (repeatable)
        #[arg(long = "property")]
        properties: Vec<String>,

        #[arg(long)]
        page_size: Option<u32>,

        /// Fetch every page
        #[arg(long)]
        all: bool,
    },

    /// Compare built-in models with the server's type catalog
    Drift {
        /// Types to check; all built-in types when empty
        type_ids: Vec<String>,
    },

    /// Render `igc_asset!` declarations for server types
    Codegen {
        /// Types to fetch from the server
        type_ids: Vec<String>,

        /// Read type details from a saved `GET /types/{id}` response instead
        #[arg(long, conflicts_with = "type_ids")]
        file: Option<PathBuf>,

        /// Write to a file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Path of the macro in the generated code
        #[arg(long, default_value = "igcrest::igc_asset")]
        macro_path: String,
    },

    /// Print version information
    Version,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
