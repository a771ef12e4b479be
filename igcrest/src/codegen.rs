// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Renders `igc_asset!` declarations from the server's type catalog

use crate::catalog::TypeDetails;
use crate::model::types::MainObject;
use crate::model::AssetType;
use std::fmt::Write;

const RESERVED_WORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "crate", "do", "dyn", "else",
    "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in", "let", "loop", "macro",
    "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return", "self", "static",
    "struct", "super", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use",
    "virtual", "where", "while", "yield",
];

/// Members `igc_asset!` already puts on every struct
const GENERATED_MEMBERS: &[&str] = &["reference", "new"];

/// UpperCamelCase struct name for an IGC type id
///
/// `host_(engine)` becomes `HostEngine`.
pub fn struct_name(type_id: &str) -> String {
    type_id
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// snake_case Rust field name for an IGC property name
///
/// `alias_(business_name)` becomes `alias_business_name`,
/// `confidencePercent` becomes `confidence_percent`. Keywords and names the
/// macro generates itself get a trailing `_`, so `type` becomes `type_`.
pub fn field_name(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    let mut prev_lower = false;
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else if c.is_ascii_alphanumeric() {
            out.push(c);
            prev_lower = true;
        } else {
            if !out.ends_with('_') {
                out.push('_');
            }
            prev_lower = false;
        }
    }
    let mut name = out.trim_matches('_').to_string();
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    if RESERVED_WORDS.contains(&name.as_str()) || GENERATED_MEMBERS.contains(&name.as_str()) {
        name.push('_');
    }
    name
}

fn extends_main_object(details: &TypeDetails) -> bool {
    MainObject::PROPERTIES
        .iter()
        .all(|p| details.property(p.name).is_some())
}

/// Render one declaration using `crate::igc_asset!`
pub fn render_asset(details: &TypeDetails) -> String {
    render_asset_with(details, "crate::igc_asset")
}

/// Render one declaration with an explicit macro path, e.g. `igcrest::igc_asset`
pub fn render_asset_with(details: &TypeDetails, macro_path: &str) -> String {
    let main_object = extends_main_object(details);
    let display_name = if details.name.is_empty() {
        details.id.as_str()
    } else {
        details.name.as_str()
    };

    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "{}! {{", macro_path);
    if main_object {
        let _ = writeln!(out, "    pub struct {} : main_object {{", struct_name(&details.id));
    } else {
        let _ = writeln!(out, "    pub struct {} {{", struct_name(&details.id));
    }
    let _ = writeln!(out, "        type_id: {:?},", details.id);
    let _ = writeln!(out, "        display_name: {:?},", display_name);
    let _ = writeln!(out, "        creatable: {},", details.can_be_created());
    let _ = writeln!(
        out,
        "        modification_details: {},",
        details.includes_modification_details()
    );
    let _ = writeln!(out, "        properties {{");
    for property in details.properties() {
        if main_object && MainObject::property(&property.name).is_some() {
            continue;
        }
        let _ = writeln!(
            out,
            "            {}: {} = {:?},",
            field_name(&property.name),
            property.kind(),
            property.name
        );
    }
    let _ = writeln!(out, "        }}");
    let _ = writeln!(out, "    }}");
    let _ = writeln!(out, "}}");
    out
}

/// Render several declarations as one module body
pub fn render_module(details: &[TypeDetails]) -> String {
    render_module_with(details, "crate::igc_asset")
}

pub fn render_module_with(details: &[TypeDetails], macro_path: &str) -> String {
    let mut out = String::new();
    for (i, d) in details.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_asset_with(d, macro_path));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_struct_names() {
        assert_eq!(struct_name("host_(engine)"), "HostEngine");
        assert_eq!(struct_name("database_table"), "DatabaseTable");
        assert_eq!(struct_name("dsjob"), "Dsjob");
        assert_eq!(struct_name("$MyBundle-Widget"), "MyBundleWidget");
    }

    #[test]
    fn test_field_names() {
        assert_eq!(field_name("alias_(business_name)"), "alias_business_name");
        assert_eq!(field_name("read_by_(design)"), "read_by_design");
        assert_eq!(field_name("confidencePercent"), "confidence_percent");
        assert_eq!(field_name("detectedState"), "detected_state");
        assert_eq!(field_name("type"), "type_");
        assert_eq!(field_name("name"), "name");
        assert_eq!(field_name("3rd_party"), "_3rd_party");
    }

    #[test]
    fn test_field_names_avoid_generated_members() {
        assert_eq!(field_name("reference"), "reference_");
        assert_eq!(field_name("new"), "new_");
        assert_eq!(field_name("New"), "new_");
        assert_eq!(field_name("references"), "references");
    }

    #[test]
    fn test_render_module_separates_declarations() {
        let details: Vec<TypeDetails> = ["label", "category"]
            .iter()
            .map(|id| {
                serde_json::from_value(json!({
                    "_id": id,
                    "viewInfo": {"properties": [{"name": "reference", "type": {"_id": "string"}}]}
                }))
                .unwrap()
            })
            .collect();

        let module = render_module(&details);
        assert_eq!(module, format!("{}\n{}", render_asset(&details[0]), render_asset(&details[1])));
        assert!(module.contains("    pub struct Category {"));
        assert!(module.contains("display_name: \"category\","));
        assert!(module.contains("reference_: String = \"reference\","));
        assert_eq!(module.matches("crate::igc_asset! {").count(), 2);

        let external = render_module_with(&details, "igcrest::igc_asset");
        assert_eq!(external.matches("igcrest::igc_asset! {").count(), 2);
        assert!(render_module(&[]).is_empty());
    }

    #[test]
    fn test_render_plain_type() {
        let details: TypeDetails = serde_json::from_value(json!({
            "_id": "label",
            "_name": "Label",
            "viewInfo": {"properties": [
                {"name": "_id", "type": {"_id": "string"}},
                {"name": "name", "type": {"_id": "string"}},
                {"name": "labeled_assets", "type": {"_id": "main_object"}, "maxCardinality": -1}
            ]},
            "createInfo": {"properties": [{"name": "name", "type": {"_id": "string"}}]}
        }))
        .unwrap();

        let expected = "\
crate::igc_asset! {
    pub struct Label {
        type_id: \"label\",
        display_name: \"Label\",
        creatable: true,
        modification_details: false,
        properties {
            name: String = \"name\",
            labeled_assets: ReferenceList = \"labeled_assets\",
        }
    }
}
";
        assert_eq!(render_asset(&details), expected);
    }

    #[test]
    fn test_render_main_object_type_skips_common_properties() {
        let mut properties: Vec<serde_json::Value> = MainObject::PROPERTIES
            .iter()
            .map(|p| {
                let type_id = match p.kind {
                    crate::model::PropertyKind::Date => "datetime",
                    crate::model::PropertyKind::ReferenceList => "main_object",
                    _ => "string",
                };
                let cardinality = if p.kind.is_relationship() { -1 } else { 1 };
                json!({"name": p.name, "type": {"_id": type_id}, "maxCardinality": cardinality})
            })
            .collect();
        properties.push(json!({"name": "location", "type": {"_id": "string"}}));

        let details: TypeDetails = serde_json::from_value(json!({
            "_id": "host_(engine)",
            "_name": "Host (Engine)",
            "viewInfo": {"properties": properties}
        }))
        .unwrap();

        let rendered = render_asset_with(&details, "igcrest::igc_asset");
        assert!(rendered.starts_with("igcrest::igc_asset! {\n    pub struct HostEngine : main_object {"));
        assert!(rendered.contains("type_id: \"host_(engine)\","));
        assert!(rendered.contains("modification_details: true,"));
        assert!(rendered.contains("location: String = \"location\","));
        assert!(!rendered.contains("short_description"));
    }
}
