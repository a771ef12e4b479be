// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Formatting for CLI output

use super::commands::OutputFormat;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use igcrest::{Asset, DriftReport, ItemList, ReferenceList, TypeDescriptor, TypeDetails, TypeSummary};
use serde_json::Value;

/// Renders library results as tables or JSON
pub struct OutputFormatter;

impl OutputFormatter {
    pub fn descriptors(descriptors: &[&TypeDescriptor], format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::pretty(&Value::Array(
                descriptors
                    .iter()
                    .map(|d| {
                        serde_json::json!({
                            "_id": d.type_id,
                            "_name": d.display_name,
                            "properties": d.properties.len(),
                            "creatable": d.can_be_created,
                        })
                    })
                    .collect(),
            )),
            OutputFormat::Table => {
                let mut table = Self::table(&["Type", "Name", "Properties", "Creatable"]);
                for d in descriptors {
                    table.add_row(vec![
                        d.type_id.to_string(),
                        d.display_name.to_string(),
                        d.properties.len().to_string(),
                        Self::yes_no(d.can_be_created),
                    ]);
                }
                format!("{}\n{}\n", "Built-in types".bold().green(), table)
            }
        }
    }

    pub fn type_summaries(types: &[TypeSummary], format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::pretty(types),
            OutputFormat::Table => {
                let mut table = Self::table(&["Type", "Name"]);
                for t in types {
                    table.add_row(vec![t.id.clone(), t.name.clone()]);
                }
                format!("{}\n{}\n", "Server types".bold().green(), table)
            }
        }
    }

    pub fn descriptor(descriptor: &TypeDescriptor, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::pretty(&serde_json::json!({
                "_id": descriptor.type_id,
                "_name": descriptor.display_name,
                "creatable": descriptor.can_be_created,
                "modificationDetails": descriptor.includes_modification_details,
                "properties": descriptor.properties.iter().map(|p| {
                    serde_json::json!({"name": p.name, "kind": p.kind.as_str()})
                }).collect::<Vec<_>>(),
            })),
            OutputFormat::Table => {
                let mut table = Self::table(&["Property", "Kind"]);
                for p in descriptor.properties {
                    table.add_row(vec![p.name.to_string(), p.kind.to_string()]);
                }
                format!(
                    "{} ({})\n{}\n",
                    descriptor.display_name.bold().green(),
                    descriptor.type_id,
                    table
                )
            }
        }
    }

    pub fn type_details(details: &TypeDetails, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::pretty(details),
            OutputFormat::Table => {
                let mut table = Self::table(&["Property", "Type", "Kind", "Many", "Required"]);
                for p in details.properties() {
                    table.add_row(vec![
                        p.name.clone(),
                        p.data_type.id.clone(),
                        p.kind().to_string(),
                        Self::yes_no(p.is_many()),
                        Self::yes_no(p.is_required.unwrap_or(false)),
                    ]);
                }
                format!("{} ({})\n{}\n", details.name.bold().green(), details.id, table)
            }
        }
    }

    pub fn asset(asset: &dyn Asset, format: OutputFormat) -> String {
        let json = match asset.to_json() {
            Ok(json) => json,
            Err(e) => return format!("{}\n", format!("Cannot render asset: {}", e).red()),
        };
        match format {
            OutputFormat::Json => Self::pretty(&json),
            OutputFormat::Table => {
                let mut table = Self::table(&["Property", "Value"]);
                if let Value::Object(map) = &json {
                    for (key, value) in map {
                        if key.starts_with('_') {
                            continue;
                        }
                        table.add_row(vec![key.clone(), Self::value_to_string(value)]);
                    }
                }
                let reference = asset.reference();
                format!(
                    "{} {}\n{}\n{}\n",
                    asset.display_name().bold().green(),
                    reference.context_path(),
                    reference.id().dimmed(),
                    table
                )
            }
        }
    }

    pub fn assets(list: &ItemList<Box<dyn Asset>>, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => {
                let items: Vec<Value> = list
                    .iter()
                    .filter_map(|a| a.to_json().ok())
                    .collect();
                Self::pretty(&serde_json::json!({"paging": list.paging, "items": items}))
            }
            OutputFormat::Table => {
                if list.is_empty() {
                    return format!("{}\n", "No results found".yellow());
                }
                let mut table = Self::table(&["RID", "Type", "Name"]);
                for asset in list {
                    let reference = asset.reference();
                    table.add_row(vec![
                        reference.id().to_string(),
                        reference.type_id().to_string(),
                        reference.context_path(),
                    ]);
                }
                format!("{}\n{}\n", table, Self::paging_line(list.len(), list.paging.num_total, list.has_more()))
            }
        }
    }

    pub fn references(list: &ReferenceList, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::pretty(list),
            OutputFormat::Table => {
                if list.is_empty() {
                    return format!("{}\n", "No related assets".yellow());
                }
                let mut table = Self::table(&["RID", "Type", "Name"]);
                for r in list {
                    table.add_row(vec![r.id().to_string(), r.type_id().to_string(), r.context_path()]);
                }
                format!("{}\n{}\n", table, Self::paging_line(list.len(), list.paging.num_total, list.has_more()))
            }
        }
    }

    pub fn drift(reports: &[DriftReport], format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::pretty(reports),
            OutputFormat::Table => {
                let mut output = String::new();
                for report in reports {
                    if report.is_clean() {
                        output.push_str(&format!("{} {}\n", "✓".green(), report.type_id));
                        continue;
                    }
                    output.push_str(&format!("{} {}\n", "✗".red(), report.type_id.bold()));
                    for name in &report.missing_locally {
                        output.push_str(&format!("    {} {}\n", "+".green(), name));
                    }
                    for name in &report.missing_remotely {
                        output.push_str(&format!("    {} {}\n", "-".red(), name));
                    }
                    for m in &report.kind_mismatches {
                        output.push_str(&format!(
                            "    {} {}: {} -> {}\n",
                            "~".yellow(),
                            m.property,
                            m.local,
                            m.remote
                        ));
                    }
                }
                output
            }
        }
    }

    fn table(header: &[&str]) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(
            header
                .iter()
                .map(|h| Cell::new(h).fg(Color::Green))
                .collect::<Vec<_>>(),
        );
        table
    }

    fn paging_line(shown: usize, total: u64, more: bool) -> String {
        let line = format!("{} of {} items", shown, total.max(shown as u64));
        if more {
            format!("{} (use --all for the rest)", line).yellow().to_string()
        } else {
            line
        }
    }

    fn yes_no(value: bool) -> String {
        let text = if value { "yes" } else { "no" };
        text.to_string()
    }

    fn pretty<T: serde::Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| {
            "{\"status\": \"error\", \"error\": \"Could not serialize output to JSON\"}".to_string()
        })
    }

    /// Display text for one property value
    fn value_to_string(value: &Value) -> String {
        match value {
            Value::Null => "NULL".to_string(),
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(items) => items
                .iter()
                .map(Self::value_to_string)
                .collect::<Vec<_>>()
                .join(", "),
            Value::Object(map) => {
                if let Some(items) = map.get("items").and_then(Value::as_array) {
                    // Paged relationship
                    let total = map
                        .get("paging")
                        .and_then(|p| p.get("numTotal"))
                        .and_then(Value::as_u64)
                        .unwrap_or(items.len() as u64);
                    let names: Vec<String> = items.iter().map(Self::value_to_string).collect();
                    if total as usize > names.len() {
                        format!("{} (+{} more)", names.join(", "), total as usize - names.len())
                    } else {
                        names.join(", ")
                    }
                } else if let Some(name) = map.get("_name").and_then(Value::as_str) {
                    name.to_string()
                } else if let Some(id) = map.get("_id").and_then(Value::as_str) {
                    id.to_string()
                } else {
                    Value::Object(map.clone()).to_string()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_to_string_relationship_summary() {
        let value = json!({
            "paging": {"numTotal": 5, "pageSize": 2},
            "items": [{"_id": "a", "_name": "Alpha"}, {"_id": "b", "_name": "Beta"}]
        });
        assert_eq!(OutputFormatter::value_to_string(&value), "Alpha, Beta (+3 more)");
    }

    #[test]
    fn test_value_to_string_scalars() {
        assert_eq!(OutputFormatter::value_to_string(&json!(null)), "NULL");
        assert_eq!(OutputFormatter::value_to_string(&json!(["x", "y"])), "x, y");
        assert_eq!(OutputFormatter::value_to_string(&json!({"_id": "rid1"})), "rid1");
    }

    #[test]
    fn test_drift_json() {
        let report = DriftReport {
            type_id: "term".to_string(),
            missing_locally: vec!["new_prop".to_string()],
            ..Default::default()
        };
        let out = OutputFormatter::drift(&[report], OutputFormat::Json);
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["missing_locally"][0], "new_prop");
    }
}
