//! Value types for fare estimation.
//!
//! Nothing here validates ranges: coordinates and hours are passed through
//! unchanged and the distance and rate lookups decide what to do with them.

use serde::{Deserialize, Serialize};

/// A geographic position in degrees.
///
/// Accepts either `{"lat": .., "lon": ..}` or a `[lat, lon]` pair on input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "CoordinateRepr")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CoordinateRepr {
    Object { lat: f64, lon: f64 },
    Pair([f64; 2]),
}

impl From<CoordinateRepr> for Coordinate {
    fn from(repr: CoordinateRepr) -> Self {
        match repr {
            CoordinateRepr::Object { lat, lon } => Self { lat, lon },
            CoordinateRepr::Pair([lat, lon]) => Self { lat, lon },
        }
    }
}

/// Booking hour as received from an external caller.
///
/// Whole and fractional numbers are compared against the surge bands, and
/// booleans compare as 0 and 1. Anything else cannot be compared and falls
/// back to the base rate.
#[derive(Debug, Clone, PartialEq)]
pub enum HourInput {
    Whole(i64),
    Fractional(f64),
    Malformed(String),
}

impl From<i64> for HourInput {
    fn from(hour: i64) -> Self {
        HourInput::Whole(hour)
    }
}

impl From<&serde_json::Value> for HourInput {
    fn from(value: &serde_json::Value) -> Self {
        if let Some(flag) = value.as_bool() {
            return HourInput::Whole(i64::from(flag));
        }
        if let Some(hour) = value.as_i64() {
            return HourInput::Whole(hour);
        }
        match value.as_f64() {
            Some(hour) if hour.is_finite() => HourInput::Fractional(hour),
            _ => HourInput::Malformed(value.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coordinate_from_object() {
        let coord: Coordinate = serde_json::from_value(json!({"lat": 19.076, "lon": 72.8777})).unwrap();
        assert_eq!(coord, Coordinate::new(19.076, 72.8777));
    }

    #[test]
    fn test_coordinate_from_pair() {
        let coord: Coordinate = serde_json::from_value(json!([18.5204, 73.8567])).unwrap();
        assert_eq!(coord, Coordinate::new(18.5204, 73.8567));
    }

    #[test]
    fn test_coordinate_rejects_extra_elements() {
        let result: Result<Coordinate, _> = serde_json::from_value(json!([1.0, 2.0, 3.0]));
        assert!(result.is_err());

        let result: Result<Coordinate, _> = serde_json::from_value(json!(["north", "east"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_coordinate_out_of_range_passes_through() {
        let coord: Coordinate = serde_json::from_value(json!({"lat": 123.0, "lon": -400.0})).unwrap();
        assert_eq!(coord.lat, 123.0);
        assert_eq!(coord.lon, -400.0);
    }

    #[test]
    fn test_hour_input_from_json() {
        assert_eq!(HourInput::from(&json!(9)), HourInput::Whole(9));
        assert_eq!(HourInput::from(&json!(-3)), HourInput::Whole(-3));
        assert_eq!(HourInput::from(&json!(9.5)), HourInput::Fractional(9.5));
        assert_eq!(
            HourInput::from(&json!("nine")),
            HourInput::Malformed("\"nine\"".to_string())
        );
        assert_eq!(HourInput::from(&json!(null)), HourInput::Malformed("null".to_string()));
    }

    #[test]
    fn test_boolean_hour_compares_as_integer() {
        assert_eq!(HourInput::from(&json!(true)), HourInput::Whole(1));
        assert_eq!(HourInput::from(&json!(false)), HourInput::Whole(0));
    }
}
