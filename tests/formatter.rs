#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
    use punchclock::libs::formatter::{
        date_to_wire, elapsed_seconds, format_elapsed, parse_date_wire, parse_time_wire, time_of_day_to_wire,
    };

    #[test]
    fn test_time_of_day_is_zero_padded() {
        let moment = Utc.with_ymd_and_hms(2025, 3, 14, 7, 4, 9).unwrap();
        assert_eq!(time_of_day_to_wire(&moment), "07:04:09");

        let moment = Utc.with_ymd_and_hms(2025, 3, 14, 23, 59, 59).unwrap();
        assert_eq!(time_of_day_to_wire(&moment), "23:59:59");
    }

    #[test]
    fn test_time_of_day_uses_the_values_own_zone() {
        let kyiv = FixedOffset::east_opt(2 * 3600).unwrap();
        let moment = kyiv.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        assert_eq!(time_of_day_to_wire(&moment), "09:30:00");
    }

    #[test]
    fn test_date_is_normalized_to_utc() {
        let kyiv = FixedOffset::east_opt(2 * 3600).unwrap();
        // 01:00 local on the 15th is still the 14th in UTC.
        let moment = kyiv.with_ymd_and_hms(2025, 3, 15, 1, 0, 0).unwrap();
        assert_eq!(date_to_wire(&moment), "2025-03-14");

        let moment = kyiv.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(date_to_wire(&moment), "2025-03-15");
    }

    #[test]
    fn test_wire_values_parse_back() {
        let moment = Utc.with_ymd_and_hms(2025, 11, 2, 18, 45, 12).unwrap();

        let time = parse_time_wire(&time_of_day_to_wire(&moment)).unwrap();
        assert_eq!(time, moment.time());

        let date = parse_date_wire(&date_to_wire(&moment)).unwrap();
        assert_eq!(date, moment.date_naive());
    }

    #[test]
    fn test_parse_time_accepts_short_form() {
        assert_eq!(parse_time_wire("10:15"), NaiveTime::from_hms_opt(10, 15, 0));
        assert_eq!(parse_time_wire(" 10:15:30 "), NaiveTime::from_hms_opt(10, 15, 30));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_time_wire(""), None);
        assert_eq!(parse_time_wire("quarter past ten"), None);
        assert_eq!(parse_time_wire("25:00:00"), None);
        assert_eq!(parse_date_wire("14/03/2025"), None);
        assert_eq!(parse_date_wire("2025-03-14"), NaiveDate::from_ymd_opt(2025, 3, 14));
    }

    #[test]
    fn test_elapsed_seconds_rounds_down() {
        let since = Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap();
        let now = since + chrono::Duration::milliseconds(61_999);
        assert_eq!(elapsed_seconds(&since, &now), 61);
        assert_eq!(elapsed_seconds(&since, &since), 0);
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(59), "00:00:59");
        assert_eq!(format_elapsed(3_725), "01:02:05");
        assert_eq!(format_elapsed(27 * 3600), "27:00:00");
        assert_eq!(format_elapsed(-5), "00:00:00");
    }
}
