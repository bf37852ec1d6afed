#[cfg(test)]
mod tests {
    use punchclock::libs::attendance::{AttendanceRecord, NewAttendance, WireId};
    use serde_json::json;

    #[test]
    fn test_wire_id_from_number_and_string() {
        let from_number: WireId = serde_json::from_value(json!(7)).unwrap();
        let from_string: WireId = serde_json::from_value(json!(" 7 ")).unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number, WireId::from(7));
        assert_eq!(serde_json::to_value(&from_number).unwrap(), json!("7"));
    }

    #[test]
    fn test_record_with_status_flag() {
        let record: AttendanceRecord = serde_json::from_value(json!({
            "id": 17,
            "employeeId": "1",
            "date": "2025-03-14",
            "checkIn": "09:02:11",
            "checkOut": "00:00:00",
            "status": true,
            "remark": "Good"
        }))
        .unwrap();

        assert_eq!(record.id, WireId::from("17"));
        assert!(record.is_present());
        assert_eq!(record.check_in(), Some("09:02:11"));
        assert_eq!(record.check_out(), None);
        assert!(record.is_open());
        assert!(record.belongs_to(&WireId::from(1)));
    }

    #[test]
    fn test_record_with_present_flag_and_missing_fields() {
        let record: AttendanceRecord = serde_json::from_value(json!({
            "id": "a1",
            "employeeId": 2,
            "date": "2025-03-14",
            "present": "present"
        }))
        .unwrap();

        assert!(record.is_present());
        assert_eq!(record.check_in(), None);
        assert_eq!(record.remark, None);
        assert!(!record.is_open());
    }

    #[test]
    fn test_status_wins_over_present() {
        let record: AttendanceRecord = serde_json::from_value(json!({
            "id": 1,
            "employeeId": 1,
            "date": "2025-03-14",
            "status": 0,
            "present": true
        }))
        .unwrap();

        assert!(!record.is_present());
    }

    #[test]
    fn test_completed_record_is_not_open() {
        let record: AttendanceRecord = serde_json::from_value(json!({
            "id": 1,
            "employeeId": 1,
            "date": "2025-03-14",
            "checkIn": "09:00:00",
            "checkOut": "17:30:00"
        }))
        .unwrap();

        assert_eq!(record.check_out(), Some("17:30:00"));
        assert!(!record.is_open());
    }

    #[test]
    fn test_new_attendance_body() {
        let body = NewAttendance {
            employee_id: WireId::from("1"),
            date: "2025-03-14".to_string(),
            check_in: "10:20:00".to_string(),
            check_out: "00:00:00".to_string(),
            status: true,
            remark: "Late arrival".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "employeeId": "1",
                "date": "2025-03-14",
                "checkIn": "10:20:00",
                "checkOut": "00:00:00",
                "status": true,
                "remark": "Late arrival"
            })
        );
    }
}
