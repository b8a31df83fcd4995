//! Non-fatal warnings raised while estimating a fare.
//!
//! The distance and rate lookups never fail outright; when they fall back
//! to a default they report it here instead. Callers decide whether to log,
//! collect, or display the warnings.

use serde::Serialize;
use tracing::warn;

/// A recoverable problem that was replaced by a fallback value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Geodesic distance failed; the planar fallback was used.
    DistanceFallback { reason: String },
    /// The booking hour could not be compared; the base rate was used.
    HourFallback { reason: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::DistanceFallback { reason } => {
                write!(f, "Geodesic distance error: {}. Using fallback calculation.", reason)
            }
            Diagnostic::HourFallback { reason } => {
                write!(f, "Hour error: {}. Using default price.", reason)
            }
        }
    }
}

/// Receiver for diagnostics.
pub trait DiagnosticsSink {
    fn warn(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticsSink for Vec<Diagnostic> {
    fn warn(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Logs each diagnostic at `warn` level and discards it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn warn(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
    }
}

/// Logs each diagnostic and keeps it for the response.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    diagnostics: Vec<Diagnostic>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticsSink for RecordingSink {
    fn warn(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::DistanceFallback {
            reason: "latitude 120 is outside [-90, 90]".to_string(),
        };
        assert!(diag.to_string().contains("Using fallback calculation"));
        assert!(diag.to_string().contains("latitude 120"));

        let diag = Diagnostic::HourFallback {
            reason: "\"nine\" is not a number".to_string(),
        };
        assert!(diag.to_string().contains("Using default price"));
    }

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.warn(Diagnostic::HourFallback { reason: "a".to_string() });
        sink.warn(Diagnostic::DistanceFallback { reason: "b".to_string() });

        assert_eq!(sink.len(), 2);
        assert!(matches!(sink[0], Diagnostic::HourFallback { .. }));
        assert!(matches!(sink[1], Diagnostic::DistanceFallback { .. }));
    }

    #[test]
    fn test_recording_sink_keeps_diagnostics() {
        let mut sink = RecordingSink::new();
        sink.warn(Diagnostic::HourFallback { reason: "null".to_string() });
        assert_eq!(sink.into_diagnostics().len(), 1);
    }

    #[test]
    fn test_diagnostic_serializes_with_kind_tag() {
        let diag = Diagnostic::HourFallback { reason: "null".to_string() };
        let value = serde_json::to_value(&diag).unwrap();
        assert_eq!(value["kind"], "hour_fallback");
        assert_eq!(value["reason"], "null");
    }
}
