//! # Configuration Tests
//!
//! Defaults, JSON deserialization, and partial overrides.

use mips_core::Config;

#[test]
fn default_values() {
    let config = Config::default();
    assert_eq!(config.max_cycles, 1000);
    assert!(!config.trace);
    assert_eq!(config.memory_slots, 1024);
}

#[test]
fn deserializes_full_config() {
    let config =
        Config::from_json(r#"{"max_cycles": 100, "trace": true, "memory_slots": 16}"#).unwrap();
    assert_eq!(config.max_cycles, 100);
    assert!(config.trace);
    assert_eq!(config.memory_slots, 16);
}

/// Absent fields keep their defaults.
#[test]
fn deserializes_partial_config() {
    let config = Config::from_json(r#"{"max_cycles": 100}"#).unwrap();
    assert_eq!(config.max_cycles, 100);
    assert!(!config.trace);
    assert_eq!(config.memory_slots, 1024);
}

#[test]
fn empty_object_is_all_defaults() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn rejects_invalid_json() {
    assert!(Config::from_json("max_cycles: 100").is_err());
}
