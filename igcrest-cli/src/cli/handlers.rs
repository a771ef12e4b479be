// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers for igcrest

use colored::Colorize;
use std::path::{Path, PathBuf};

use super::commands::OutputFormat;
use super::output::OutputFormatter;
use igcrest::catalog::compare;
use igcrest::codegen;
use igcrest::{
    ClientConfig, ConditionSet, IgcRestClient, Search, SearchCondition, TypeCatalog, TypeDetails,
};

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Connection flags shared by every command that talks to a server
#[derive(Debug, Clone, Default)]
pub struct ConnectionOptions {
    pub config: Option<PathBuf>,
    pub url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl ConnectionOptions {
    /// Config file, then `IGC_*` variables, then command-line flags
    pub fn resolve(&self) -> Result<ClientConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        }
        .apply_env();

        if let Some(url) = &self.url {
            config.base_url = url.clone();
        }
        if let Some(user) = &self.user {
            config.user = Some(user.clone());
        }
        if let Some(password) = &self.password {
            config.password = Some(password.clone());
        }
        config.validate()?;
        Ok(config)
    }

    fn connect(&self) -> Result<IgcRestClient, Box<dyn std::error::Error>> {
        let mut config = self.resolve()?;
        if let (Some(user), None) = (&config.user, &config.password) {
            print!("Password for {}: ", user);
            std::io::Write::flush(&mut std::io::stdout())?;
            config.password = Some(rpassword::read_password()?);
        }
        Ok(IgcRestClient::new(&config)?)
    }
}

/// Handle the types command
pub fn handle_types(conn: &ConnectionOptions, remote: bool, format: OutputFormat) -> CliResult {
    if remote {
        let client = conn.connect()?;
        let types = client.list_types()?;
        print!("{}", OutputFormatter::type_summaries(&types, format));
    } else {
        let descriptors = TypeCatalog::global().descriptors();
        print!("{}", OutputFormatter::descriptors(&descriptors, format));
    }
    Ok(())
}

/// Handle the describe command
pub fn handle_describe(
    conn: &ConnectionOptions,
    type_id: String,
    remote: bool,
    format: OutputFormat,
) -> CliResult {
    if remote {
        let client = conn.connect()?;
        let details = client.type_details(&type_id)?;
        print!("{}", OutputFormatter::type_details(&details, format));
        return Ok(());
    }

    match TypeCatalog::global().get(&type_id) {
        Some(descriptor) => {
            print!("{}", OutputFormatter::descriptor(descriptor, format));
            Ok(())
        }
        None => Err(format!(
            "No built-in model for '{}'. Use --remote to ask the server.",
            type_id
        )
        .into()),
    }
}

/// Handle the get command
pub fn handle_get(
    conn: &ConnectionOptions,
    rid: String,
    relationship: Option<String>,
    all: bool,
    format: OutputFormat,
) -> CliResult {
    let client = conn.connect()?;
    match relationship {
        Some(property) => {
            let mut related = client.get_relationship(&rid, &property)?;
            if all {
                related = client.all_pages(related)?;
            }
            print!("{}", OutputFormatter::references(&related, format));
        }
        None => {
            let asset = client.get_asset(&rid)?;
            print!("{}", OutputFormatter::asset(asset.as_ref(), format));
        }
    }
    Ok(())
}

/// Build the search described by the command-line flags
pub fn build_search(
    types: Vec<String>,
    conditions: &[String],
    any: bool,
    properties: Vec<String>,
    page_size: Option<u32>,
) -> Result<Search, Box<dyn std::error::Error>> {
    let mut set = if any { ConditionSet::any() } else { ConditionSet::all() };
    for expression in conditions {
        set.push(SearchCondition::parse(expression)?);
    }

    let properties = if properties.is_empty() && types.len() == 1 {
        // Default to the scalar properties of the built-in model
        TypeCatalog::global()
            .get(&types[0])
            .map(|d| d.non_relationship_properties().into_iter().map(String::from).collect())
            .unwrap_or_default()
    } else {
        properties
    };

    let mut search = Search::new(types)
        .with_properties(properties)
        .with_conditions(set);
    if let Some(size) = page_size {
        search = search.page_size(size);
    }
    search.validate()?;
    Ok(search)
}

/// Handle the search command
#[allow(clippy::too_many_arguments)]
pub fn handle_search(
    conn: &ConnectionOptions,
    types: Vec<String>,
    conditions: Vec<String>,
    any: bool,
    properties: Vec<String>,
    page_size: Option<u32>,
    all: bool,
    format: OutputFormat,
) -> CliResult {
    let search = build_search(types, &conditions, any, properties, page_size)?;
    let client = conn.connect()?;

    let results = if all {
        let first = client.search::<serde_json::Value>(&search)?;
        let everything = client.all_pages(first)?;
        let paging = everything.paging.clone();
        igcrest::ItemList {
            paging,
            items: client.catalog().deserialize_list(everything)?,
        }
    } else {
        client.search_assets(&search)?
    };

    print!("{}", OutputFormatter::assets(&results, format));
    Ok(())
}

/// Handle the drift command
pub fn handle_drift(conn: &ConnectionOptions, type_ids: Vec<String>, format: OutputFormat) -> CliResult {
    let catalog = TypeCatalog::global();
    let type_ids: Vec<String> = if type_ids.is_empty() {
        catalog.type_ids().into_iter().map(String::from).collect()
    } else {
        type_ids
    };

    let client = conn.connect()?;
    let mut reports = Vec::with_capacity(type_ids.len());
    for type_id in &type_ids {
        let descriptor = catalog
            .get(type_id)
            .ok_or_else(|| format!("No built-in model for '{}'", type_id))?;
        let details = client.type_details(type_id)?;
        reports.push(compare(descriptor, &details)?);
    }

    print!("{}", OutputFormatter::drift(&reports, format));

    let drifted = reports.iter().filter(|r| !r.is_clean()).count();
    if drifted > 0 {
        return Err(format!("{} of {} types differ from the server", drifted, reports.len()).into());
    }
    Ok(())
}

/// Read type details saved from `GET /types/{id}`, one object or an array
pub fn load_type_details(path: &Path) -> Result<Vec<TypeDetails>, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    let details = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    Ok(details)
}

/// Handle the codegen command
pub fn handle_codegen(
    conn: &ConnectionOptions,
    type_ids: Vec<String>,
    file: Option<PathBuf>,
    output: Option<PathBuf>,
    macro_path: String,
) -> CliResult {
    let details = match file {
        Some(path) => load_type_details(&path)?,
        None => {
            if type_ids.is_empty() {
                return Err("Name at least one type, or pass --file".into());
            }
            let client = conn.connect()?;
            type_ids
                .iter()
                .map(|id| client.type_details(id))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    let rendered = codegen::render_module_with(&details, &macro_path);

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            eprintln!(
                "{}",
                format!("Wrote {} declarations to {}", details.len(), path.display()).green()
            );
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
