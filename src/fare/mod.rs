//! Fare estimation module.
//!
//! Geodesic trip distance multiplied by a time-of-day surge rate. The
//! calculation itself is synchronous and does no I/O; `routes` exposes it
//! over HTTP/JSON.

pub mod calculators;
pub mod diagnostics;
pub mod distance;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod surge;

// Re-export commonly used items
pub use calculators::{round_money, Fare, FareAmount};
pub use diagnostics::{Diagnostic, DiagnosticsSink};
pub use distance::{get_distance, GeodesicError};
pub use models::{Coordinate, HourInput};
pub use routes::router;
pub use services::{compute_fare, get_final_price, quote_fare_with_sink, FareQuote};
pub use surge::{get_price_per_km, SurgeBand};
