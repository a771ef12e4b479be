// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! igcrest CLI entry point

use clap::Parser;
use colored::Colorize;

mod cli;
use cli::handlers::ConnectionOptions;
use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // -v wins over --log-level; RUST_LOG still applies per module
    let log_level = if cli.verbose {
        log::LevelFilter::Debug
    } else if let Some(level) = cli.log_level {
        level.to_level_filter()
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let conn = ConnectionOptions {
        config: cli.config,
        url: cli.url,
        user: cli.user,
        password: cli.password,
    };
    let format = cli.format;

    match cli.command {
        Commands::Version => {
            println!("{} {}", "igcrest".bold().green(), igcrest::VERSION);
            println!(
                "IBM Information Governance Catalog REST client ({} built-in types)",
                igcrest::TypeCatalog::global().type_count()
            );
            Ok(())
        }

        Commands::Types { remote } => cli::handle_types(&conn, remote, format),

        Commands::Describe { type_id, remote } => {
            cli::handle_describe(&conn, type_id, remote, format)
        }

        Commands::Get {
            rid,
            relationship,
            all,
        } => cli::handle_get(&conn, rid, relationship, all, format),

        Commands::Search {
            types,
            conditions,
            any,
            properties,
            page_size,
            all,
        } => cli::handle_search(&conn, types, conditions, any, properties, page_size, all, format),

        Commands::Drift { type_ids } => cli::handle_drift(&conn, type_ids, format),

        Commands::Codegen {
            type_ids,
            file,
            output,
            macro_path,
        } => cli::handle_codegen(&conn, type_ids, file, output, macro_path),
    }
}
