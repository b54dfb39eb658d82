//! Integration tests for configuration and identifier serialization.
//!
//! These tests verify that [`LoggerConfig`] accepts both option namings when
//! deserialized, that serialized configurations read back unchanged, and that
//! identifiers and metadata serialize as plain JSON values.

use logging::{Category, Level, LogRequest, LoggerConfig, Metadata, Value};
use serde_json::json;

fn from_json(value: serde_json::Value) -> LoggerConfig {
    serde_json::from_value(value).expect("config deserializes")
}

// ============================================================================
// Configuration Tests
// ============================================================================

/// Verifies an empty object is the default configuration.
#[test]
fn empty_object_is_default() {
    assert_eq!(from_json(json!({})), LoggerConfig::default());
}

/// Verifies a serialized configuration reads back unchanged.
#[test]
fn serialized_config_reads_back() {
    let config = LoggerConfig::default()
        .with_category_enforcement(true)
        .with_default_levels(true)
        .with_use_lock(true);

    let text = serde_json::to_string(&config).unwrap();
    let restored: LoggerConfig = serde_json::from_str(&text).unwrap();

    assert_eq!(restored, config);
}

/// Verifies the whole-gate names set both gates.
#[test]
fn whole_gate_names() {
    assert_eq!(
        from_json(json!({ "force_enforcement": true })),
        LoggerConfig::default().force_enforcement(true)
    );
    assert_eq!(
        from_json(json!({ "allow_disabled": false })),
        LoggerConfig::default().force_enforcement(true)
    );
    assert_eq!(
        from_json(json!({ "allow_disabled": true })),
        LoggerConfig::default()
    );
}

/// Verifies per-gate fields take precedence over whole-gate names.
#[test]
fn per_gate_fields_take_precedence() {
    let config = from_json(json!({
        "force_enforcement": true,
        "enforce_levels": false,
    }));

    assert!(config.enforce_categories);
    assert!(!config.enforce_levels);
}

/// Verifies `force_enforcement` takes precedence over `allow_disabled`.
#[test]
fn force_enforcement_beats_allow_disabled() {
    let config = from_json(json!({
        "allow_disabled": true,
        "force_enforcement": true,
    }));

    assert!(config.enforce_categories && config.enforce_levels);
}

/// Verifies unknown fields are rejected.
#[test]
fn unknown_fields_are_rejected() {
    let result = serde_json::from_value::<LoggerConfig>(json!({ "verbose": true }));

    assert!(result.is_err());
}

// ============================================================================
// Identifier and Metadata Tests
// ============================================================================

/// Verifies identifiers serialize as bare strings.
#[test]
fn identifiers_are_plain_strings() {
    assert_eq!(serde_json::to_value(Level::INFO).unwrap(), json!("INFO_LEVEL"));

    let category: Category = serde_json::from_value(json!("net")).unwrap();
    assert_eq!(category, "net");
}

/// Verifies metadata values map onto JSON scalars and objects.
#[test]
fn metadata_maps_to_json_object() {
    let metadata: Metadata = serde_json::from_value(json!({
        "ok": true,
        "count": 3,
        "ratio": 0.5,
        "name": "db",
        "nested": { "depth": 1 },
    }))
    .unwrap();

    assert_eq!(metadata.get("ok"), Some(&Value::Bool(true)));
    assert_eq!(metadata.get("count"), Some(&Value::Int(3)));
    assert_eq!(metadata.get("ratio"), Some(&Value::Float(0.5)));
    assert_eq!(metadata.get("name"), Some(&Value::from("db")));
    assert_eq!(
        metadata.get("nested"),
        Some(&Value::Map(Metadata::new().with("depth", 1)))
    );
}

/// Verifies a request serializes with named fields.
#[test]
fn request_serializes_fields() {
    let request = LogRequest::new("hello")
        .with_writer("console")
        .with_level(Level::WARN)
        .with_category("net")
        .with_field("attempt", 2);

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["message"], "hello");
    assert_eq!(value["writer"], "console");
    assert_eq!(value["level"], "WARN_LEVEL");
    assert_eq!(value["category"], "net");
    assert_eq!(value["metadata"]["attempt"], 2);
}
