//! Declarative rule tables for car payloads
//!
//! Rules run in table order so the error list is deterministic:
//! model, year, sensors, then each sensor entry in index order.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Number, Value};

use crate::model::{CarUpdate, NewCar, Sensor};

use super::errors::{ValidationErrors, ValidationResult};

pub const MODEL_REQUIRED: &str = "Model is required";
pub const YEAR_NOT_NUMERIC: &str = "Year must be a number";
pub const SENSORS_NOT_ARRAY: &str = "Sensors must be an array";
pub const SENSOR_TYPE_REQUIRED: &str = "Sensor type is required";
pub const SENSOR_VALUE_NOT_NUMERIC: &str = "Sensor value must be a number";
pub const BODY_NOT_OBJECT: &str = "Request body must be a JSON object";

/// What a field's value must look like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// A string with at least one character
    NonEmptyString,
    /// A JSON number, or a string spelling one
    Numeric,
    /// A JSON array
    Array,
}

impl Check {
    pub fn passes(&self, value: &Value) -> bool {
        match self {
            Check::NonEmptyString => value.as_str().is_some_and(|s| !s.is_empty()),
            Check::Numeric => numeric_value(value).is_some(),
            Check::Array => value.is_array(),
        }
    }
}

/// Whether a field must appear on creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// One row of a rule table
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub presence: Presence,
    pub check: Check,
    pub message: &'static str,
}

/// Top-level car fields
pub const CAR_RULES: &[FieldRule] = &[
    FieldRule {
        field: "model",
        presence: Presence::Required,
        check: Check::NonEmptyString,
        message: MODEL_REQUIRED,
    },
    FieldRule {
        field: "year",
        presence: Presence::Required,
        check: Check::Numeric,
        message: YEAR_NOT_NUMERIC,
    },
    FieldRule {
        field: "sensors",
        presence: Presence::Optional,
        check: Check::Array,
        message: SENSORS_NOT_ARRAY,
    },
];

/// Fields of each entry inside `sensors`.
///
/// Both are required whenever an entry exists, on creation and update alike.
pub const SENSOR_RULES: &[FieldRule] = &[
    FieldRule {
        field: "type",
        presence: Presence::Required,
        check: Check::NonEmptyString,
        message: SENSOR_TYPE_REQUIRED,
    },
    FieldRule {
        field: "value",
        presence: Presence::Required,
        check: Check::Numeric,
        message: SENSOR_VALUE_NOT_NUMERIC,
    },
];

/// Which write the payload is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Full record; required fields must be present
    Create,
    /// Partial record; every top-level field is optional
    Update,
}

/// Check a write payload against the rule tables.
///
/// Pure: never mutates the payload and performs no I/O. On failure the
/// returned list holds every violated rule.
pub fn validate(payload: &Value, mode: Mode) -> ValidationResult<()> {
    let obj = payload
        .as_object()
        .ok_or_else(|| ValidationErrors::single("body", BODY_NOT_OBJECT))?;

    let mut errors = ValidationErrors::new();

    for rule in CAR_RULES {
        let presence = match mode {
            Mode::Create => rule.presence,
            Mode::Update => Presence::Optional,
        };
        apply_rule(obj, rule, presence, rule.field, &mut errors);
    }

    if let Some(Value::Array(sensors)) = obj.get("sensors") {
        for (i, entry) in sensors.iter().enumerate() {
            let empty = Map::new();
            let entry = entry.as_object().unwrap_or(&empty);
            for rule in SENSOR_RULES {
                let path = format!("sensors[{}].{}", i, rule.field);
                apply_rule(entry, rule, rule.presence, &path, &mut errors);
            }
        }
    }

    errors.into_result()
}

fn apply_rule(
    obj: &Map<String, Value>,
    rule: &FieldRule,
    presence: Presence,
    path: &str,
    errors: &mut ValidationErrors,
) {
    match obj.get(rule.field) {
        Some(value) if !rule.check.passes(value) => errors.push(path, rule.message),
        Some(_) => {}
        None if presence == Presence::Required => errors.push(path, rule.message),
        None => {}
    }
}

/// Validate a creation payload and convert it into a `NewCar`.
///
/// A missing `sensors` field yields an empty sequence.
pub fn parse_new_car(payload: &Value) -> ValidationResult<NewCar> {
    validate(payload, Mode::Create)?;
    let fields = ExtractedFields::from_payload(payload);

    match (fields.model, fields.year) {
        (Some(model), Some(year)) => Ok(NewCar {
            model,
            year,
            sensors: fields.sensors.unwrap_or_default(),
        }),
        (None, _) => Err(ValidationErrors::single("model", MODEL_REQUIRED)),
        (_, None) => Err(ValidationErrors::single("year", YEAR_NOT_NUMERIC)),
    }
}

/// Validate an update payload and convert it into a `CarUpdate`.
///
/// Fields outside the car model are ignored.
pub fn parse_car_update(payload: &Value) -> ValidationResult<CarUpdate> {
    validate(payload, Mode::Update)?;
    let fields = ExtractedFields::from_payload(payload);

    Ok(CarUpdate {
        model: fields.model,
        year: fields.year,
        sensors: fields.sensors,
    })
}

/// Typed view of a payload that has already passed validation
struct ExtractedFields {
    model: Option<String>,
    year: Option<Number>,
    sensors: Option<Vec<Sensor>>,
}

impl ExtractedFields {
    fn from_payload(payload: &Value) -> Self {
        let model = payload
            .get("model")
            .and_then(Value::as_str)
            .map(str::to_string);
        let year = payload.get("year").and_then(numeric_value);
        let sensors = payload
            .get("sensors")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(sensor_from_value).collect());

        Self {
            model,
            year,
            sensors,
        }
    }
}

fn sensor_from_value(entry: &Value) -> Option<Sensor> {
    let kind = entry.get("type")?.as_str()?;
    let value = numeric_value(entry.get("value")?)?;
    Some(Sensor::new(kind, value))
}

fn numeric_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[+-]?([0-9]*\.)?[0-9]+$").ok())
        .as_ref()
}

fn is_numeric_string(s: &str) -> bool {
    numeric_pattern().map_or(false, |pattern| pattern.is_match(s))
}

/// Interpret a JSON value as a number.
///
/// Accepts JSON numbers and strings such as `"2023"` or `"-1.5"`. Integers
/// that fit an `i64` stay integers; anything wider becomes a double, the
/// widest number the document store holds.
pub fn numeric_value(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) => storable_number(n),
        Value::String(s) if is_numeric_string(s) => {
            let unsigned = s.strip_prefix('+').unwrap_or(s);
            if !unsigned.contains('.') {
                if let Ok(i) = unsigned.parse::<i64>() {
                    return Some(Number::from(i));
                }
            }
            unsigned.parse::<f64>().ok().and_then(Number::from_f64)
        }
        _ => None,
    }
}

fn storable_number(n: &Number) -> Option<Number> {
    if n.is_i64() {
        return Some(n.clone());
    }
    n.as_f64().and_then(Number::from_f64)
}
