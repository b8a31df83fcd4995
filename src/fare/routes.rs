//! HTTP handlers for fare estimation.

use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::error::Result;

use super::diagnostics::RecordingSink;
use super::requests::EstimateFareRequest;
use super::responses::{FareEstimateResponse, RateBandResponse, RateTableResponse};
use super::services::quote_fare_with_sink;
use super::surge::SurgeBand;

/// Routes mounted under `/api/fare`
pub fn router() -> Router {
    Router::new()
        .route("/estimate", post(estimate))
        .route("/rates", get(rates))
}

/// Estimate a fare between two coordinates
pub async fn estimate(
    payload: std::result::Result<Json<EstimateFareRequest>, JsonRejection>,
) -> Result<Json<FareEstimateResponse>> {
    let Json(req) = payload?;
    let hour = req.hour_input();
    let mut sink = RecordingSink::new();

    let quote = quote_fare_with_sink(req.pick_up, req.drop, &hour, &mut sink);
    info!(
        "Fare estimate: {} over {:.3} km ({:?})",
        quote.fare, quote.distance.kilometers, quote.surge_band
    );

    Ok(Json(FareEstimateResponse::new(quote, sink.into_diagnostics())))
}

/// Fixed surge table
pub async fn rates() -> Json<RateTableResponse> {
    Json(RateTableResponse {
        bands: SurgeBand::ALL.into_iter().map(RateBandResponse::from).collect(),
    })
}
