#[cfg(test)]
mod tests {
    use punchclock::libs::hours::{format_hours, hours_worked, minutes_worked};

    #[test]
    fn test_regular_day() {
        assert_eq!(hours_worked(Some("09:00:00"), Some("17:30:00")), "8h 30m");
        assert_eq!(hours_worked(Some("09:00:00"), Some("17:00:00")), "8h");
    }

    #[test]
    fn test_overnight_shift_wraps() {
        assert_eq!(hours_worked(Some("22:00:00"), Some("06:00:00")), "8h");
        assert_eq!(minutes_worked(Some("23:30:00"), Some("00:15:00")), Some(45));
    }

    #[test]
    fn test_incomplete_records() {
        assert_eq!(hours_worked(Some("09:00:00"), Some("00:00:00")), "0h");
        assert_eq!(hours_worked(None, None), "0h");
        assert_eq!(hours_worked(Some("09:00:00"), None), "0h");
        assert_eq!(hours_worked(None, Some("17:00:00")), "0h");
        assert_eq!(hours_worked(Some(""), Some("17:00:00")), "0h");
    }

    #[test]
    fn test_unparseable_times() {
        assert_eq!(minutes_worked(Some("nine"), Some("17:00:00")), None);
        assert_eq!(hours_worked(Some("09:00:00"), Some("5pm")), "0h");
    }

    #[test]
    fn test_seconds_are_ignored() {
        assert_eq!(minutes_worked(Some("09:00:59"), Some("09:01:00")), Some(1));
        assert_eq!(hours_worked(Some("09:00:45"), Some("10:00:10")), "1h");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(0), "0h");
        assert_eq!(format_hours(59), "0h 59m");
        assert_eq!(format_hours(450), "7h 30m");
    }
}
