//! # Car Model
//!
//! Record shapes for cars and their embedded sensor readings.
//!
//! - `Car` is the persisted record, as returned to clients
//! - `NewCar` is a validated creation payload (no id yet)
//! - `CarUpdate` is a validated partial update; absent fields are untouched

mod car;

pub use car::{Car, CarUpdate, NewCar, Sensor};
