//! Distance between pick-up and drop coordinates.
//!
//! The primary path is Karney's geodesic on the WGS-84 ellipsoid, which
//! converges for every valid pair of points, antipodes included. Invalid
//! coordinates make it fail, and the estimate then falls back to the planar distance over the raw
//! coordinate values. The fallback is measured in degrees, not kilometers,
//! and is returned as-is.

use geo::{GeodesicDistance, Point};
use serde::Serialize;
use thiserror::Error;

use super::diagnostics::{Diagnostic, DiagnosticsSink};
use super::models::Coordinate;

/// Why the geodesic computation could not produce a distance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeodesicError {
    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} is not a finite number")]
    InvalidLongitude(f64),

    #[error("geodesic calculation produced a non-finite distance")]
    NonFiniteResult,
}

/// Which formula produced a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMethod {
    Geodesic,
    EuclideanFallback,
}

/// A distance together with the formula that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceEstimate {
    pub kilometers: f64,
    pub method: DistanceMethod,
}

fn validate(coord: Coordinate) -> Result<Point<f64>, GeodesicError> {
    if !coord.lat.is_finite() || !(-90.0..=90.0).contains(&coord.lat) {
        return Err(GeodesicError::InvalidLatitude(coord.lat));
    }
    if !coord.lon.is_finite() {
        return Err(GeodesicError::InvalidLongitude(coord.lon));
    }
    Ok(Point::new(coord.lon, coord.lat))
}

/// Geodesic distance in kilometers between two coordinates.
pub fn geodesic_distance(from: Coordinate, to: Coordinate) -> Result<f64, GeodesicError> {
    let from = validate(from)?;
    let to = validate(to)?;

    let kilometers = from.geodesic_distance(&to) / 1000.0;
    if !kilometers.is_finite() {
        return Err(GeodesicError::NonFiniteResult);
    }
    Ok(kilometers)
}

/// Planar distance over the raw `(lat, lon)` values.
pub fn euclidean_fallback(from: Coordinate, to: Coordinate) -> f64 {
    ((from.lat - to.lat).powi(2) + (from.lon - to.lon).powi(2)).sqrt()
}

/// Estimate the distance, falling back to [`euclidean_fallback`] and
/// reporting a diagnostic when the geodesic computation fails.
pub fn estimate_distance(
    from: Coordinate,
    to: Coordinate,
    sink: &mut dyn DiagnosticsSink,
) -> DistanceEstimate {
    match geodesic_distance(from, to) {
        Ok(kilometers) => DistanceEstimate {
            kilometers,
            method: DistanceMethod::Geodesic,
        },
        Err(e) => {
            sink.warn(Diagnostic::DistanceFallback {
                reason: e.to_string(),
            });
            DistanceEstimate {
                kilometers: euclidean_fallback(from, to),
                method: DistanceMethod::EuclideanFallback,
            }
        }
    }
}

/// Distance between two coordinates, with fallback.
pub fn get_distance(from: Coordinate, to: Coordinate, sink: &mut dyn DiagnosticsSink) -> f64 {
    estimate_distance(from, to, sink).kilometers
}
