//! Car and sensor record types

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A single reading attached to a car.
///
/// Sensors have no identity outside their parent car.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    /// Kind of reading, e.g. "Temperature"
    #[serde(rename = "type")]
    pub kind: String,

    /// Measured value
    pub value: Number,
}

impl Sensor {
    pub fn new(kind: impl Into<String>, value: impl Into<Number>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// A persisted car record.
///
/// The id is assigned by the store on creation and never changes.
/// On the wire it is serialized as `_id`, the store's native key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    #[serde(rename = "_id")]
    pub id: String,

    pub model: String,

    pub year: Number,

    /// Insertion order is preserved
    #[serde(default)]
    pub sensors: Vec<Sensor>,
}

/// Validated creation payload
#[derive(Debug, Clone, PartialEq)]
pub struct NewCar {
    pub model: String,
    pub year: Number,
    pub sensors: Vec<Sensor>,
}

impl NewCar {
    /// Attach a store-assigned id, producing the persisted record
    pub fn into_car(self, id: String) -> Car {
        Car {
            id,
            model: self.model,
            year: self.year,
            sensors: self.sensors,
        }
    }
}

/// Validated partial update.
///
/// `sensors`, when present, replaces the whole sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarUpdate {
    pub model: Option<String>,
    pub year: Option<Number>,
    pub sensors: Option<Vec<Sensor>>,
}

impl CarUpdate {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.model.is_none() && self.year.is_none() && self.sensors.is_none()
    }

    /// Apply the present fields to `car`
    pub fn apply_to(&self, car: &mut Car) {
        if let Some(model) = &self.model {
            car.model = model.clone();
        }
        if let Some(year) = &self.year {
            car.year = year.clone();
        }
        if let Some(sensors) = &self.sensors {
            car.sensors = sensors.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_car() -> Car {
        NewCar {
            model: "Tesla Model 3".to_string(),
            year: Number::from(2022),
            sensors: vec![Sensor::new("Temperature", 25), Sensor::new("Speed", 120)],
        }
        .into_car("60d21b9667d0d8992e610c85".to_string())
    }

    #[test]
    fn test_car_serializes_with_store_key() {
        let json = serde_json::to_value(sample_car()).unwrap();
        assert_eq!(json["_id"], "60d21b9667d0d8992e610c85");
        assert_eq!(json["model"], "Tesla Model 3");
        assert_eq!(json["year"], 2022);
        assert_eq!(json["sensors"][0]["type"], "Temperature");
        assert_eq!(json["sensors"][1]["value"], 120);
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_car_deserializes_without_sensors() {
        let car: Car = serde_json::from_value(json!({
            "_id": "abc",
            "model": "Civic",
            "year": 2010
        }))
        .unwrap();
        assert!(car.sensors.is_empty());
    }

    #[test]
    fn test_fractional_values_survive() {
        let sensor = Sensor::new("Pressure", Number::from_f64(35.5).unwrap());
        let json = serde_json::to_value(&sensor).unwrap();
        assert_eq!(json["value"], 35.5);
    }

    #[test]
    fn test_update_applies_only_present_fields() {
        let mut car = sample_car();
        let update = CarUpdate {
            model: Some("Tesla Model S".to_string()),
            ..Default::default()
        };
        update.apply_to(&mut car);

        assert_eq!(car.model, "Tesla Model S");
        assert_eq!(car.year, Number::from(2022));
        assert_eq!(car.sensors.len(), 2);
    }

    #[test]
    fn test_update_replaces_sensors_wholesale() {
        let mut car = sample_car();
        let update = CarUpdate {
            sensors: Some(vec![Sensor::new("Fuel", 40)]),
            ..Default::default()
        };
        update.apply_to(&mut car);

        assert_eq!(car.sensors, vec![Sensor::new("Fuel", 40)]);
    }

    #[test]
    fn test_empty_update() {
        assert!(CarUpdate::default().is_empty());
        let update = CarUpdate {
            year: Some(Number::from(2024)),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
