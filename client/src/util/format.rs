//! Display formatting for analysis results and staged files.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a `[0, 1]` confidence as a percentage with two decimals.
///
/// Values are passed through unscaled beyond the `* 100`: `1.2` renders as
/// `"120.00%"` and negative inputs keep their sign. Use
/// [`confidence_in_range`] to flag such values.
pub fn confidence_percent(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}

/// True for finite confidences within `[0, 1]`.
pub fn confidence_in_range(confidence: f64) -> bool {
    confidence.is_finite() && (0.0..=1.0).contains(&confidence)
}

/// File size in kilobytes with two decimals, e.g. `"12.50 KB"`.
#[allow(clippy::cast_precision_loss)]
pub fn file_size_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}
