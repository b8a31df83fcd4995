//! Response DTOs for fare API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{Fare, FARE_CURRENCY};
use super::diagnostics::Diagnostic;
use super::distance::DistanceMethod;
use super::services::FareQuote;
use super::surge::SurgeBand;

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            currency: FARE_CURRENCY.to_string(),
        }
    }
}

/// A warning raised while computing the fare
#[derive(Debug, Serialize)]
pub struct WarningResponse {
    #[serde(flatten)]
    pub diagnostic: Diagnostic,
    pub message: String,
}

impl From<Diagnostic> for WarningResponse {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            message: diagnostic.to_string(),
            diagnostic,
        }
    }
}

/// Response for fare estimation
#[derive(Debug, Serialize)]
pub struct FareEstimateResponse {
    pub fare: Fare,
    pub distance_km: f64,
    pub distance_method: DistanceMethod,
    pub price_per_km: MoneyResponse,
    pub surge_band: SurgeBand,
    pub warnings: Vec<WarningResponse>,
}

impl FareEstimateResponse {
    pub fn new(quote: FareQuote, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            fare: quote.fare,
            distance_km: quote.distance.kilometers,
            distance_method: quote.distance.method,
            price_per_km: MoneyResponse::new(quote.price_per_km),
            surge_band: quote.surge_band,
            warnings: diagnostics.into_iter().map(WarningResponse::from).collect(),
        }
    }
}

/// One row of the surge table
#[derive(Debug, Serialize)]
pub struct RateBandResponse {
    pub band: SurgeBand,
    /// Exclusive lower bound; absent for the base band
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_hour: Option<i64>,
    /// Exclusive upper bound; absent for the base band
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_hour: Option<i64>,
    pub price_per_km: MoneyResponse,
}

impl From<SurgeBand> for RateBandResponse {
    fn from(band: SurgeBand) -> Self {
        let bounds = band.exclusive_bounds();
        Self {
            band,
            after_hour: bounds.map(|(low, _)| low),
            before_hour: bounds.map(|(_, high)| high),
            price_per_km: MoneyResponse::new(band.price_per_km()),
        }
    }
}

/// Response for the surge table
#[derive(Debug, Serialize)]
pub struct RateTableResponse {
    pub bands: Vec<RateBandResponse>,
}

/// Generic error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
}
