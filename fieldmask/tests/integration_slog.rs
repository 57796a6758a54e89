//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - `slog_masked()` produces correctly masked JSON values
//! - The `slog::Value` implementation works with slog's serialization API

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use fieldmask::{
    Mask, Masker,
    slog::{MaskedJson, SlogMaskedExt},
};
use serde::Serialize;
use serde_json::Value as JsonValue;

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, CapturedValue>>,
}

#[derive(Debug, Clone, PartialEq)]
enum CapturedValue {
    Str(String),
    Serde(JsonValue),
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<CapturedValue> {
        self.captured.borrow().get(key).cloned()
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.to_string()));
        Ok(())
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Serde(json));
        Ok(())
    }
}

fn serialize_to_capture<V: slog::Value, S: slog::Serializer>(
    value: &V,
    key: &'static str,
    serializer: &mut S,
) {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    value.serialize(&record, key, serializer).unwrap();
}

#[derive(Clone, Mask, Serialize)]
struct User {
    username: String,
    #[mask("all")]
    password: String,
    profile: Profile,
}

#[derive(Clone, Mask, Serialize)]
struct Profile {
    #[mask("regex,^[^@]+", mask_char = "X")]
    email: String,
}

fn user() -> User {
    User {
        username: "alice".into(),
        password: "hunter2".into(),
        profile: Profile {
            email: "alice@example.com".into(),
        },
    }
}

#[test]
fn emits_masked_struct_as_nested_serde() {
    let masked = user().slog_masked(&Masker::new());

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&masked, "user", &mut serializer);

    match serializer.get("user") {
        Some(CapturedValue::Serde(json)) => {
            assert_eq!(json["username"], "alice");
            assert_eq!(json["password"], "*******");
            assert_eq!(json["profile"]["email"], "XXXXX@example.com");
        }
        other => panic!("expected Serde value for 'user', got {other:?}"),
    }
}

#[test]
fn wrapper_exposes_json() {
    let masked = user().slog_masked(&Masker::new());
    assert_eq!(masked.value()["password"], "*******");
    let inner = masked.clone().into_inner();
    assert_eq!(MaskedJson::new(inner), masked);
}

#[test]
fn works_with_a_real_logger() {
    let logger = slog::Logger::root(slog::Discard, slog::o!());
    slog::info!(logger, "login"; "user" => user().slog_masked(&Masker::new()));
}
