//! Time-of-day surge pricing.
//!
//! Three fixed bands, checked in order. Both ends of each surge band are
//! exclusive: hours 8, 11, 18 and 21 are billed at the base rate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::diagnostics::{Diagnostic, DiagnosticsSink};
use super::models::HourInput;

pub const MORNING_SURGE_RATE: Decimal = dec!(20);
pub const EVENING_SURGE_RATE: Decimal = dec!(15);
pub const BASE_RATE: Decimal = dec!(10);

/// Pricing band an hour falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SurgeBand {
    /// 8 < hour < 11
    MorningSurge,
    /// 18 < hour < 21
    EveningSurge,
    Base,
}

impl SurgeBand {
    pub const ALL: [SurgeBand; 3] = [
        SurgeBand::MorningSurge,
        SurgeBand::EveningSurge,
        SurgeBand::Base,
    ];

    /// Bands with hour limits, in lookup order.
    const SURGES: [SurgeBand; 2] = [SurgeBand::MorningSurge, SurgeBand::EveningSurge];

    pub fn for_hour(hour: i64) -> Self {
        Self::lookup(|low, high| low < hour && hour < high)
    }

    /// Same comparison for non-integral hours (e.g. `9.5`).
    pub fn for_fractional_hour(hour: f64) -> Self {
        Self::lookup(|low, high| (low as f64) < hour && hour < (high as f64))
    }

    fn lookup(in_band: impl Fn(i64, i64) -> bool) -> Self {
        Self::SURGES
            .into_iter()
            .find(|band| {
                band.exclusive_bounds()
                    .is_some_and(|(low, high)| in_band(low, high))
            })
            .unwrap_or(SurgeBand::Base)
    }

    pub fn price_per_km(self) -> Decimal {
        match self {
            SurgeBand::MorningSurge => MORNING_SURGE_RATE,
            SurgeBand::EveningSurge => EVENING_SURGE_RATE,
            SurgeBand::Base => BASE_RATE,
        }
    }

    /// Exclusive hour bounds, `None` for the catch-all base band.
    pub fn exclusive_bounds(self) -> Option<(i64, i64)> {
        match self {
            SurgeBand::MorningSurge => Some((8, 11)),
            SurgeBand::EveningSurge => Some((18, 21)),
            SurgeBand::Base => None,
        }
    }
}

/// Per-kilometer price for a booking hour.
pub fn get_price_per_km(hour: i64) -> Decimal {
    SurgeBand::for_hour(hour).price_per_km()
}

/// Resolve the band for raw caller input. Input that cannot be compared
/// is billed at the base rate and reported to `sink`.
pub fn band_for(hour: &HourInput, sink: &mut dyn DiagnosticsSink) -> SurgeBand {
    match hour {
        HourInput::Whole(hour) => SurgeBand::for_hour(*hour),
        HourInput::Fractional(hour) => SurgeBand::for_fractional_hour(*hour),
        HourInput::Malformed(raw) => {
            sink.warn(Diagnostic::HourFallback {
                reason: format!("{} is not a comparable hour", raw),
            });
            SurgeBand::Base
        }
    }
}

/// Per-kilometer price for raw caller input.
pub fn price_per_km_for(hour: &HourInput, sink: &mut dyn DiagnosticsSink) -> Decimal {
    band_for(hour, sink).price_per_km()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(get_price_per_km(8), dec!(10));
        assert_eq!(get_price_per_km(9), dec!(20));
        assert_eq!(get_price_per_km(10), dec!(20));
        assert_eq!(get_price_per_km(11), dec!(10));
        assert_eq!(get_price_per_km(18), dec!(10));
        assert_eq!(get_price_per_km(19), dec!(15));
        assert_eq!(get_price_per_km(20), dec!(15));
        assert_eq!(get_price_per_km(21), dec!(10));
    }

    #[test]
    fn test_base_rate_for_all_other_hours() {
        for hour in 0..24 {
            if [9, 10, 19, 20].contains(&hour) {
                continue;
            }
            assert_eq!(get_price_per_km(hour), BASE_RATE, "hour {}", hour);
        }
    }

    #[test]
    fn test_out_of_range_hours_use_base_rate() {
        assert_eq!(get_price_per_km(-1), BASE_RATE);
        assert_eq!(get_price_per_km(24), BASE_RATE);
        assert_eq!(get_price_per_km(i64::MAX), BASE_RATE);
        assert_eq!(get_price_per_km(i64::MIN), BASE_RATE);
    }

    #[test]
    fn test_fractional_hours_compare_as_numbers() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        assert_eq!(price_per_km_for(&HourInput::Fractional(8.5), &mut sink), dec!(20));
        assert_eq!(price_per_km_for(&HourInput::Fractional(10.99), &mut sink), dec!(20));
        assert_eq!(price_per_km_for(&HourInput::Fractional(11.0), &mut sink), dec!(10));
        assert_eq!(price_per_km_for(&HourInput::Fractional(20.5), &mut sink), dec!(15));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_malformed_hour_uses_base_rate_and_warns() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        let rate = price_per_km_for(&HourInput::Malformed("\"nine\"".to_string()), &mut sink);

        assert_eq!(rate, BASE_RATE);
        assert_eq!(sink.len(), 1);
        assert!(matches!(sink[0], Diagnostic::HourFallback { .. }));
    }

    #[test]
    fn test_whole_hour_does_not_warn() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        assert_eq!(band_for(&HourInput::Whole(19), &mut sink), SurgeBand::EveningSurge);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_whole_and_fractional_lookups_agree() {
        for hour in -5..30 {
            assert_eq!(
                SurgeBand::for_hour(hour),
                SurgeBand::for_fractional_hour(hour as f64),
                "hour {}",
                hour
            );
        }
    }

    #[test]
    fn test_exclusive_bounds_match_lookup() {
        for band in SurgeBand::ALL {
            if let Some((low, high)) = band.exclusive_bounds() {
                assert_eq!(SurgeBand::for_hour(low), SurgeBand::Base);
                assert_eq!(SurgeBand::for_hour(high), SurgeBand::Base);
                assert_eq!(SurgeBand::for_hour(low + 1), band);
                assert_eq!(SurgeBand::for_hour(high - 1), band);
            }
        }
    }
}
