//! Utility functions

use chrono::{DateTime, Local, NaiveDateTime};

/// Format a wire timestamp for display
///
/// The service sends ISO-8601; older builds emit a naive local timestamp
/// without an offset. Anything unparseable is shown verbatim rather than
/// hidden.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }

    raw.to_string()
}

/// Format a confidence score in `0.0..=1.0` as a percentage readout
pub fn format_confidence(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_timestamp_is_formatted() {
        let formatted = format_timestamp("2024-01-01T00:00:00Z");
        // Rendered in local time; the shape is what matters
        assert_eq!(formatted.len(), "2024-01-01 00:00:00".len());
        assert!(formatted.contains(' '));
    }

    #[test]
    fn naive_timestamp_is_formatted() {
        assert_eq!(
            format_timestamp("2024-06-15T12:30:45.123456"),
            "2024-06-15 12:30:45"
        );
    }

    #[test]
    fn garbage_timestamp_is_passed_through() {
        assert_eq!(format_timestamp("soon"), "soon");
    }

    #[test]
    fn confidence_is_rendered_as_percentage() {
        assert_eq!(format_confidence(0.95), "95%");
        assert_eq!(format_confidence(0.85), "85%");
        assert_eq!(format_confidence(1.0), "100%");
    }
}
