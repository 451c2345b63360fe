//! Time label formatting (`m:ss`)

/// Label shown while a duration is not known yet
pub const UNKNOWN_DURATION: &str = "--:--";

/// Format seconds as `m:ss`
///
/// Minutes are unbounded, seconds zero-padded, fractional seconds floored.
/// Negative and non-finite input is treated as zero.
pub fn format_time(total_sec: f64) -> String {
    let secs = if total_sec.is_finite() {
        total_sec.max(0.0).floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Format an optional duration, distinguishing "unknown yet" from zero length
pub fn format_duration(sec: Option<f64>) -> String {
    match sec {
        Some(s) if s.is_finite() => format_time(s),
        _ => UNKNOWN_DURATION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(75.0), "1:15");
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(9.0), "0:09");
        assert_eq!(format_time(505.0), "8:25");
    }

    #[test]
    fn minutes_are_unbounded() {
        assert_eq!(format_time(3_725.0), "62:05");
    }

    #[test]
    fn floors_fractional_seconds() {
        assert_eq!(format_time(59.999), "0:59");
        assert_eq!(format_time(60.2), "1:00");
    }

    #[test]
    fn negative_and_non_finite_become_zero() {
        assert_eq!(format_time(-5.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }

    #[test]
    fn unknown_duration_uses_sentinel() {
        assert_eq!(format_duration(None), "--:--");
        assert_eq!(format_duration(Some(f64::NAN)), "--:--");
        assert_eq!(format_duration(Some(0.0)), "0:00");
        assert_eq!(format_duration(Some(197.0)), "3:17");
        assert_eq!(format_duration(Some(-1.0)), "0:00");
    }
}
