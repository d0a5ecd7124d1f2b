use approx::assert_relative_eq;
use serde_json::json;

use crate::{CatalogColumn, CatalogRecord};

#[test]
fn lookup_is_case_insensitive() {
    let record = CatalogRecord::from_value(json!({
        "PL_NAME": "TRAPPIST-1 e",
        "HostName": "TRAPPIST-1",
        "st_teff": 2566,
    }));

    assert_eq!(record.text("pl_name").as_deref(), Some("TRAPPIST-1 e"));
    assert_eq!(record.text("PL_NAME").as_deref(), Some("TRAPPIST-1 e"));
    assert_eq!(record.text(CatalogColumn::HostName).as_deref(), Some("TRAPPIST-1"));
    assert_eq!(record.number("ST_TEFF"), Some(2566.0));
    assert_eq!(record.keys().collect::<Vec<_>>(), vec!["hostname", "pl_name", "st_teff"]);
}

#[test]
fn lower_case_spelling_wins_over_upper_case() {
    // serde_json orders object keys, so check both insertion orders explicitly.
    let mut upper_first = CatalogRecord::new();
    upper_first.insert("PL_ORBSMAX", json!(5.0));
    upper_first.insert("pl_orbsmax", json!(1.0));

    let mut lower_first = CatalogRecord::new();
    lower_first.insert("pl_orbsmax", json!(1.0));
    lower_first.insert("PL_ORBSMAX", json!(5.0));

    assert_eq!(upper_first.number("pl_orbsmax"), Some(1.0));
    assert_eq!(lower_first.number("pl_orbsmax"), Some(1.0));
    assert_eq!(lower_first.len(), 1);
}

#[test]
fn null_fields_are_absent() {
    let record = CatalogRecord::from_value(json!({
        "pl_orbeccen": null,
        "PL_ORBECCEN": 0.2,
    }));

    assert_eq!(record.number(CatalogColumn::Eccentricity), Some(0.2));

    let only_null = CatalogRecord::from_value(json!({ "st_mass": null }));
    assert!(only_null.is_empty());
    assert!(!only_null.contains("st_mass"));
}

#[test]
fn numeric_strings_are_coerced() {
    let record = CatalogRecord::new()
        .with("st_rad", " 0.92 ")
        .with("pl_orbper", "3.5e2")
        .with("pl_rade", "+1.5");

    assert_relative_eq!(record.num("st_rad", 1.0), 0.92);
    assert_relative_eq!(record.num("pl_orbper", 365.0), 350.0);
    assert_relative_eq!(record.num("pl_rade", 1.0), 1.5);
}

#[test]
fn non_numeric_and_non_finite_values_fall_back() {
    let record = CatalogRecord::from_value(json!({
        "st_rad": "",
        "st_teff": "hot",
        "st_lum": "NaN",
        "st_mass": "inf",
        "pl_rade": true,
        "pl_masse": [1.0],
        "pl_orbper": { "value": 10 },
    }));

    for key in ["st_rad", "st_teff", "st_lum", "st_mass", "pl_rade", "pl_masse", "pl_orbper"] {
        assert_eq!(record.num(key, -7.0), -7.0, "{} should fall back", key);
        assert_eq!(record.number(key), None);
    }
    assert_eq!(record.num("pl_orbsmax", 2.5), 2.5);
}

#[test]
fn malformed_records_are_empty() {
    assert!(CatalogRecord::from_value(json!([1, 2, 3])).is_empty());
    assert!(CatalogRecord::from_value(json!("pl_name")).is_empty());
    assert!(CatalogRecord::from_value(json!(null)).is_empty());
    assert_eq!(CatalogRecord::new().num("st_lum", 0.0), 0.0);
}

#[test]
fn text_accepts_numbers_but_not_empty_strings() {
    let record = CatalogRecord::from_value(json!({
        "pl_name": 42,
        "hostname": "",
    }));

    assert_eq!(record.text("pl_name").as_deref(), Some("42"));
    assert_eq!(record.text("hostname"), None);
    assert_eq!(record.list_label(), "42 (—)");
}

#[test]
fn deserializes_from_json_text() {
    let record: CatalogRecord =
        serde_json::from_str(r#"{"PL_NAME":"51 Peg b","pl_orbper":4.23}"#).unwrap();
    assert_eq!(record.list_label(), "51 Peg b (—)");

    let parsed = CatalogRecord::from_json_str(r#"{"hostname":"51 Peg"}"#).unwrap();
    assert_eq!(parsed.text("HOSTNAME").as_deref(), Some("51 Peg"));

    assert!(CatalogRecord::from_json_str("{not json").is_err());
}
