//! Sample payloads shaped like IGC 11.7 responses

use serde_json::{json, Value};

pub const TERM_RID: &str = "6662c0f2.e1b1ec6c.00263shl8.8b4sdaj.qtlbfd.mpbu5bfeggb7plvlac5hp";
pub const COLUMN_RID: &str = "b1c497ce.6e83759b.001mts4is.1tl2hjj.7a8s9v.c0ofn8pmd7nqg1qkhbqld";

pub fn category_ref(id: &str, name: &str) -> Value {
    json!({"_id": id, "_type": "category", "_name": name})
}

pub fn term_json() -> Value {
    json!({
        "_id": TERM_RID,
        "_type": "term",
        "_name": "Customer Number",
        "_url": format!("https://igc:9443/ibm/iis/igc-rest/v1/assets/{}", TERM_RID),
        "_context": [category_ref("cat1", "Finance"), category_ref("cat2", "Customers")],
        "short_description": "Unique identifier of a customer",
        "status": "ACCEPTED",
        "parent_category": category_ref("cat2", "Customers"),
        "synonyms": {
            "paging": {"numTotal": 1, "pageSize": 10, "begin": 0, "end": 0},
            "items": [{"_id": "t2", "_type": "term", "_name": "Client Number"}]
        },
        "modified_on": 1546300800000i64,
        "modified_by": "isadmin"
    })
}

pub fn column_json() -> Value {
    json!({
        "_id": COLUMN_RID,
        "_type": "database_column",
        "_name": "CUST_NO",
        "alias_(business_name)": "Customer Number",
        "data_type": "INTEGER",
        "length": 10,
        "allows_null_values": false,
        "position": 1
    })
}

pub fn unknown_type_json() -> Value {
    json!({
        "_id": "x1",
        "_type": "$MyBundle-Widget",
        "_name": "Widget 1",
        "$colour": "red"
    })
}

/// A search result page; `next` is absolute, as IGC sends it
pub fn term_page(items: Vec<Value>, begin: u64, total: u64, next: Option<&str>) -> Value {
    let end = begin + items.len() as u64;
    let mut paging = json!({
        "numTotal": total,
        "pageSize": items.len(),
        "begin": begin,
        "end": end.saturating_sub(1)
    });
    if let Some(next) = next {
        paging["next"] = json!(next);
    }
    json!({"paging": paging, "items": items})
}

pub fn term_ref(id: &str, name: &str) -> Value {
    json!({"_id": id, "_type": "term", "_name": name})
}

pub fn label_type_details() -> Value {
    json!({
        "_id": "label",
        "_name": "Label",
        "viewInfo": {"properties": [
            {"name": "name", "type": {"_id": "string"}, "maxCardinality": 1},
            {"name": "description", "type": {"_id": "string"}, "maxCardinality": 1},
            {"name": "labeled_assets", "type": {"_id": "main_object"}, "maxCardinality": -1},
            {"name": "created_by", "type": {"_id": "string"}},
            {"name": "created_on", "type": {"_id": "datetime"}},
            {"name": "modified_by", "type": {"_id": "string"}},
            {"name": "modified_on", "type": {"_id": "datetime"}},
            {"name": "colour", "type": {"_id": "string"}}
        ]},
        "createInfo": {"properties": [{"name": "name", "type": {"_id": "string"}}]},
        "editInfo": {"properties": [{"name": "description", "type": {"_id": "string"}}]}
    })
}
