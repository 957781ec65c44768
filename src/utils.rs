//! Utility functions for common operations.

/// Format a countdown as days, hours and minutes ("6d 23h 59m")
pub fn format_time_left(seconds: u64) -> String {
    let days = seconds / (3600 * 24);
    let hours = (seconds % (3600 * 24)) / 3600;
    let mins = (seconds % 3600) / 60;
    format!("{}d {}h {}m", days, hours, mins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_left_zero() {
        assert_eq!(format_time_left(0), "0d 0h 0m");
    }

    #[test]
    fn test_format_time_left_full_window() {
        assert_eq!(format_time_left(604_800), "7d 0h 0m");
    }

    #[test]
    fn test_format_time_left_after_one_tick() {
        assert_eq!(format_time_left(604_740), "6d 23h 59m");
    }

    #[test]
    fn test_format_time_left_drops_seconds() {
        assert_eq!(format_time_left(3_661), "0d 1h 1m");
        assert_eq!(format_time_left(59), "0d 0h 0m");
    }
}
