//! Core fare calculation functions.
//!
//! Pure functions for fare math - no I/O.

use rust_decimal::prelude::*;
use serde::{Serialize, Serializer};

/// Currency attached to every fare.
pub const FARE_CURRENCY: &str = "INR";

/// Fares are quoted to this many decimal places.
pub const FARE_DECIMAL_PLACES: u32 = 2;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use ride_fare_estimator::fare::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Fare amount as it came out of the multiplication.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FareAmount {
    /// Rounded to [`FARE_DECIMAL_PLACES`].
    Exact(Decimal),
    /// NaN, infinite, or larger than a `Decimal` holds. Floats that large
    /// have no fractional digits, so they are already "rounded".
    Float(f64),
}

impl FareAmount {
    pub fn to_f64(&self) -> f64 {
        match self {
            FareAmount::Exact(amount) => amount.to_f64().unwrap_or(f64::NAN),
            FareAmount::Float(amount) => *amount,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            FareAmount::Exact(amount) => Some(*amount),
            FareAmount::Float(_) => None,
        }
    }
}

impl std::fmt::Display for FareAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FareAmount::Exact(amount) => write!(f, "{}", amount),
            FareAmount::Float(amount) => write!(f, "{}", amount),
        }
    }
}

impl Serialize for FareAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A computed fare.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fare {
    pub amount: FareAmount,
    pub currency: &'static str,
}

impl Fare {
    pub fn new(amount: FareAmount) -> Self {
        Self {
            amount,
            currency: FARE_CURRENCY,
        }
    }

    /// Fare as a float, for callers that display plain numbers.
    pub fn to_f64(&self) -> f64 {
        self.amount.to_f64()
    }
}

impl std::fmt::Display for Fare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Multiply a distance by a per-km rate and round to [`FARE_DECIMAL_PLACES`].
///
/// The distance is converted with its full binary value so rounding matches
/// rounding the float product. Distances with no decimal form are
/// multiplied as floats.
pub fn price_distance(distance_km: f64, price_per_km: Decimal) -> FareAmount {
    let exact = Decimal::from_f64_retain(distance_km)
        .and_then(|distance| distance.checked_mul(price_per_km));

    match exact {
        Some(amount) => FareAmount::Exact(round_money(amount, FARE_DECIMAL_PLACES)),
        None => FareAmount::Float(distance_km * price_per_km.to_f64().unwrap_or(f64::NAN)),
    }
}
