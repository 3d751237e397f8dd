//! Ruler time labels

/// Format a duration in seconds as `HH:MM:SS`
///
/// Fractional seconds are truncated and hours are not wrapped at 24.
/// Negative or non-finite input renders as `00:00:00`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.trunc() as u64
    } else {
        0
    };
    let (minutes, secs) = (total / 60, total % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_minute_second() {
        assert_eq!(format_time(3661.0), "01:01:01");
        assert_eq!(format_time(59.0), "00:00:59");
        assert_eq!(format_time(0.0), "00:00:00");
    }

    #[test]
    fn test_hours_unbounded() {
        assert_eq!(format_time(3600.0 * 25.0), "25:00:00");
        assert_eq!(format_time(3600.0 * 100.0 + 5.0), "100:00:05");
    }

    #[test]
    fn test_fraction_truncated() {
        assert_eq!(format_time(59.999), "00:00:59");
        assert_eq!(format_time(119.5), "00:01:59");
    }

    #[test]
    fn test_degenerate_input() {
        assert_eq!(format_time(-5.0), "00:00:00");
        assert_eq!(format_time(f64::NAN), "00:00:00");
    }
}
