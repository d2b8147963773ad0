//! # Validation Layer
//!
//! Checks incoming write payloads against declarative rule tables before
//! anything reaches the store.
//!
//! Validation is a pure function of the payload: no I/O, no mutation. A
//! failing payload yields every violated rule, in table order.

mod errors;
mod rules;

pub use errors::{FieldError, ValidationErrors, ValidationResult};
pub use rules::{
    numeric_value, parse_car_update, parse_new_car, validate, Check, FieldRule, Mode, Presence,
    BODY_NOT_OBJECT, CAR_RULES, MODEL_REQUIRED, SENSORS_NOT_ARRAY, SENSOR_RULES,
    SENSOR_TYPE_REQUIRED, SENSOR_VALUE_NOT_NUMERIC, YEAR_NOT_NUMERIC,
};
