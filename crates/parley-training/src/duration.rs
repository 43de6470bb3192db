//! Duration parsing for the aggregator.
//!
//! Recordings produced by the ingestion adapters always carry a typed
//! [`ClipDuration`], so the aggregator never fails. [`parse_minutes`] is the
//! string entry point for anything that arrives as text.

use parley_types::{ClipDuration, DurationParseError};

/// Converts an `M:SS` string into fractional minutes.
///
/// # Errors
///
/// Returns `DurationParseError` if the string is not a well-formed `M:SS`
/// duration with seconds in `[0, 59]`.
pub fn parse_minutes(duration: &str) -> Result<f64, DurationParseError> {
    Ok(duration.parse::<ClipDuration>()?.as_minutes())
}
