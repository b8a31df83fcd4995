//! Ride fare estimation.
//!
//! Prices a trip from its pick-up and drop coordinates and the booking hour:
//! geodesic distance times a time-of-day surge rate, rounded to 2 places.

pub mod config;
pub mod error;
pub mod fare;
pub mod routes;

pub use config::Config;
pub use error::{AppError, Result};
pub use fare::{compute_fare, Coordinate, Fare, FareAmount};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
