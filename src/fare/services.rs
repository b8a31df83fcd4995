//! Fare estimation entry points.
//!
//! Combines the distance estimate and the surge rate into a quoted fare.
//! Distance and rate problems are recovered from and reported through a
//! [`DiagnosticsSink`]; a quote is always produced.

use rust_decimal::Decimal;
use tracing::debug;

use super::calculators::{price_distance, Fare};
use super::diagnostics::{DiagnosticsSink, TracingSink};
use super::distance::{estimate_distance, DistanceEstimate};
use super::models::{Coordinate, HourInput};
use super::surge::{band_for, SurgeBand};

/// A fare with the figures it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct FareQuote {
    pub fare: Fare,
    pub distance: DistanceEstimate,
    pub price_per_km: Decimal,
    pub surge_band: SurgeBand,
}

/// Quote a fare, reporting recoverable problems to `sink`.
pub fn quote_fare_with_sink(
    pick_up: Coordinate,
    drop: Coordinate,
    booking_hour: &HourInput,
    sink: &mut dyn DiagnosticsSink,
) -> FareQuote {
    let distance = estimate_distance(pick_up, drop, sink);
    let surge_band = band_for(booking_hour, sink);
    let price_per_km = surge_band.price_per_km();

    let amount = price_distance(distance.kilometers, price_per_km);

    debug!(
        "Quoted {} for {:.3} km ({:?}) at {}/km ({:?})",
        amount, distance.kilometers, distance.method, price_per_km, surge_band
    );

    FareQuote {
        fare: Fare::new(amount),
        distance,
        price_per_km,
        surge_band,
    }
}

/// Final fare for a trip, reporting recoverable problems to `sink`.
pub fn get_final_price(
    pick_up: Coordinate,
    drop: Coordinate,
    booking_hour: i64,
    sink: &mut dyn DiagnosticsSink,
) -> Fare {
    quote_fare_with_sink(pick_up, drop, &HourInput::Whole(booking_hour), sink).fare
}

/// Final fare for a trip. Warnings are logged.
pub fn compute_fare(pick_up: Coordinate, drop: Coordinate, booking_hour: i64) -> Fare {
    get_final_price(pick_up, drop, booking_hour, &mut TracingSink)
}
