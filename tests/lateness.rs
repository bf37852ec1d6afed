#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use punchclock::libs::lateness::{is_late, is_late_wire, remark_for, LatenessPolicy, REMARK_LATE, REMARK_ON_TIME};

    #[test]
    fn test_cutoff_boundaries() {
        assert!(!is_late_wire("10:14"));
        assert!(is_late_wire("10:15"));
        assert!(!is_late_wire("09:59"));
        assert!(is_late_wire("11:00"));
        assert!(is_late_wire("10:15:00"));
    }

    #[test]
    fn test_seconds_do_not_matter() {
        assert!(!is_late(NaiveTime::from_hms_opt(10, 14, 59).unwrap()));
        assert!(is_late(NaiveTime::from_hms_opt(10, 15, 0).unwrap()));
    }

    #[test]
    fn test_unparseable_time_is_not_late() {
        assert!(!is_late_wire(""));
        assert!(!is_late_wire("late"));
    }

    #[test]
    fn test_custom_policy() {
        let policy = LatenessPolicy::parse("09:00").unwrap();
        assert!(policy.is_late_wire("09:00"));
        assert!(!policy.is_late_wire("08:59"));
        assert_eq!(policy.to_string(), "09:00");
        assert_eq!(LatenessPolicy::default().to_string(), "10:15");
    }

    #[test]
    fn test_invalid_policy() {
        assert_eq!(LatenessPolicy::new(24, 0), None);
        assert_eq!(LatenessPolicy::new(10, 60), None);
        assert_eq!(LatenessPolicy::parse("ten"), None);
    }

    #[test]
    fn test_remarks() {
        assert_eq!(remark_for(true), REMARK_LATE);
        assert_eq!(remark_for(false), REMARK_ON_TIME);

        let policy = LatenessPolicy::default();
        assert_eq!(policy.remark(NaiveTime::from_hms_opt(8, 30, 0).unwrap()), "Good");
        assert_eq!(policy.remark(NaiveTime::from_hms_opt(12, 0, 0).unwrap()), "Late arrival");
    }
}
