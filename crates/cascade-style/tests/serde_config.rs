#![cfg(feature = "serde")]

//! Loading a stylesheet from host configuration.
//!
//!   cargo test -p cascade-style --features serde --test serde_config

use cascade_style::{Part, StyleSheet};

#[test]
fn stylesheet_loads_from_json() {
    let json = r##"{
        "panel": { "background": "#1e1e1e", "z-index": "1000" },
        "row-disabled": { "opacity": "0.5" }
    }"##;
    let sheet: StyleSheet = serde_json::from_str(json).expect("valid stylesheet");
    assert_eq!(sheet.len(), 2);
    assert_eq!(
        sheet.get(Part::Panel).and_then(|s| s.get("z-index")),
        Some("1000")
    );
    assert!(sheet.get(Part::Row).is_none());
    assert_eq!(sheet.resolve_row(false).get("opacity"), Some("0.5"));
}

#[test]
fn unknown_part_is_rejected() {
    let json = r#"{ "header": { "color": "red" } }"#;
    assert!(serde_json::from_str::<StyleSheet>(json).is_err());
}

#[test]
fn stylesheet_survives_serialization() {
    let json = r#"{ "divider": { "height": "1px" } }"#;
    let sheet: StyleSheet = serde_json::from_str(json).expect("valid stylesheet");
    let back = serde_json::to_string(&sheet).expect("serializable");
    let again: StyleSheet = serde_json::from_str(&back).expect("re-parse");
    assert_eq!(sheet, again);
}

#[test]
fn property_order_follows_the_file() {
    let json = r#"{ "row": { "border-left": "2px solid", "border": "none", "avalue": "x" } }"#;
    let sheet: StyleSheet = serde_json::from_str(json).expect("valid stylesheet");
    let names: Vec<&str> = sheet
        .get(Part::Row)
        .expect("row defined")
        .iter()
        .map(|(k, _)| k)
        .collect();
    assert_eq!(names, vec!["border-left", "border", "avalue"]);

    let back = serde_json::to_string(&sheet).expect("serializable");
    assert_eq!(
        back,
        r#"{"row":{"border-left":"2px solid","border":"none","avalue":"x"}}"#
    );
}
