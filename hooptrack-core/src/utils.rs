//! Small shared utilities for the hooptrack-core library.

/// Rounds a non-negative value half-up to the given number of decimal
/// places (e.g. `33.35` -> `33.4` at one place).
///
/// Used for every persisted percentage so repeated runs on identical input
/// are byte-identical. Plain `f64::round` rounds half away from zero, which
/// coincides with half-up for the non-negative metrics handled here, but the
/// explicit formulation keeps the rounding mode independent of sign.
#[must_use]
pub fn round_half_up(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor + 0.5).floor() / factor
}

/// Formats a percentage with one decimal for display (e.g. `33.3%`).
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}
