//! Display string formatting and parsing.

/// Sentinel display string shown after an undefined arithmetic result.
pub const ERROR_DISPLAY: &str = "Error";

/// Format a numeric value with the default decimal representation.
///
/// Whole results drop their fractional part (`8.0` formats as `"8"`);
/// no rounding or locale formatting is applied.
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// Parse the display string as a number, treating failure as zero.
///
/// The error marker and any other unparseable content parse to `0.0`,
/// so the evaluator always has two well-defined operands.
pub fn parse_display(display: &str) -> f64 {
    display.parse().unwrap_or(0.0)
}
