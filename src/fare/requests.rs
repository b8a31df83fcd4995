//! Request DTOs for fare API endpoints.

use serde::Deserialize;

use super::models::{Coordinate, HourInput};

/// Hour preselected by the booking form.
pub const DEFAULT_BOOKING_HOUR: i64 = 9;

/// Request to estimate a fare
#[derive(Debug, Deserialize)]
pub struct EstimateFareRequest {
    pub pick_up: Coordinate,
    pub drop: Coordinate,
    /// Raw JSON; values that are not numbers are billed at the base rate.
    #[serde(default = "default_booking_hour")]
    pub booking_hour: serde_json::Value,
}

fn default_booking_hour() -> serde_json::Value {
    serde_json::Value::from(DEFAULT_BOOKING_HOUR)
}

impl EstimateFareRequest {
    pub fn hour_input(&self) -> HourInput {
        HourInput::from(&self.booking_hour)
    }
}
