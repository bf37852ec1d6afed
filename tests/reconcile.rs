#[cfg(test)]
mod tests {
    use punchclock::libs::attendance::WireId;
    use punchclock::libs::error::AttendanceError;
    use punchclock::libs::reconcile::{reconcile, unwrap_list, NOT_AVAILABLE, STATUS_ABSENT, STATUS_PRESENT};
    use serde_json::{json, Value};

    const TODAY: &str = "2025-03-14";

    fn records() -> Value {
        json!([
            {"id": 1, "employeeId": "1", "date": "2025-03-12", "checkIn": "09:00:00", "checkOut": "17:30:00", "status": true, "remark": "Good"},
            {"id": 2, "employeeId": 2, "date": "2025-03-12", "checkIn": "08:00:00", "checkOut": "16:00:00", "status": true, "remark": "Good"},
            {"id": 3, "employeeId": 1, "date": "2025-03-13", "status": false},
            {"id": 4, "employeeId": "1", "date": TODAY, "checkIn": "10:20:00", "checkOut": "00:00:00", "status": true, "remark": "Late arrival"}
        ])
    }

    #[test]
    fn test_filters_by_employee_across_id_types() {
        let reconciliation = reconcile(&records(), &WireId::from("1"), TODAY).unwrap();
        let ids: Vec<&str> = reconciliation.rows.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);

        let reconciliation = reconcile(&records(), &WireId::from(2), TODAY).unwrap();
        assert_eq!(reconciliation.rows.len(), 1);
        assert_eq!(reconciliation.rows[0].id, WireId::from(2));
    }

    #[test]
    fn test_row_mapping() {
        let reconciliation = reconcile(&records(), &WireId::from("1"), TODAY).unwrap();

        let complete = &reconciliation.rows[0];
        assert_eq!(complete.check_in, "09:00:00");
        assert_eq!(complete.check_out, "17:30:00");
        assert_eq!(complete.hours, "8h 30m");
        assert_eq!(complete.status, STATUS_PRESENT);
        assert_eq!(complete.remark, "Good");

        let absent = &reconciliation.rows[1];
        assert_eq!(absent.check_in, NOT_AVAILABLE);
        assert_eq!(absent.check_out, NOT_AVAILABLE);
        assert_eq!(absent.hours, "0h");
        assert_eq!(absent.status, STATUS_ABSENT);
        assert_eq!(absent.remark, "");

        let open = &reconciliation.rows[2];
        assert_eq!(open.check_out, NOT_AVAILABLE);
        assert_eq!(open.hours, "0h");
    }

    #[test]
    fn test_open_session_for_today() {
        let reconciliation = reconcile(&records(), &WireId::from(1), TODAY).unwrap();
        let open = reconciliation.open_session.unwrap();
        assert_eq!(open.record_id, WireId::from(4));
        assert_eq!(open.date, TODAY);
        assert_eq!(open.check_in.as_deref(), Some("10:20:00"));
    }

    #[test]
    fn test_no_open_session_on_another_day() {
        let reconciliation = reconcile(&records(), &WireId::from("1"), "2025-03-15").unwrap();
        assert!(reconciliation.open_session.is_none());
        assert_eq!(reconciliation.rows.len(), 3);
    }

    #[test]
    fn test_other_employees_open_record_is_ignored() {
        let payload = json!([
            {"id": 9, "employeeId": 2, "date": TODAY, "checkIn": "09:00:00", "checkOut": "00:00:00", "status": true}
        ]);
        let reconciliation = reconcile(&payload, &WireId::from("1"), TODAY).unwrap();
        assert!(reconciliation.rows.is_empty());
        assert!(reconciliation.open_session.is_none());
    }

    #[test]
    fn test_missing_check_out_is_open() {
        let payload = json!([
            {"id": 5, "employeeId": 1, "date": TODAY, "checkIn": "09:00:00", "status": true}
        ]);
        let reconciliation = reconcile(&payload, &WireId::from("1"), TODAY).unwrap();
        assert_eq!(reconciliation.open_session.unwrap().record_id, WireId::from(5));
    }

    #[test]
    fn test_non_list_is_invalid_shape() {
        let wrapped = json!({"data": []});
        let error = reconcile(&wrapped, &WireId::from("1"), TODAY).unwrap_err();
        assert!(matches!(error, AttendanceError::InvalidShape(_)));

        let error = reconcile(&Value::Null, &WireId::from("1"), TODAY).unwrap_err();
        assert!(matches!(error, AttendanceError::InvalidShape(_)));
    }

    #[test]
    fn test_malformed_entry_is_skipped() {
        let payload = json!([
            {"id": 1, "employeeId": "1", "date": TODAY, "checkIn": "09:00:00", "checkOut": "00:00:00", "status": true},
            {"id": 2, "employeeId": "7", "date": null},
            {"employeeId": 1, "date": TODAY}
        ]);
        let reconciliation = reconcile(&payload, &WireId::from("1"), TODAY).unwrap();

        assert_eq!(reconciliation.rows.len(), 1);
        assert_eq!(reconciliation.open_session.unwrap().record_id, WireId::from(1));
    }

    #[test]
    fn test_absence_without_check_in_is_not_open() {
        let payload = json!([
            {"id": 3, "employeeId": "1", "date": TODAY, "checkIn": null, "checkOut": null, "present": false},
            {"id": 4, "employeeId": "1", "date": TODAY, "checkIn": "00:00:00", "checkOut": "00:00:00", "status": false}
        ]);
        let reconciliation = reconcile(&payload, &WireId::from("1"), TODAY).unwrap();

        assert!(reconciliation.open_session.is_none());
        assert_eq!(reconciliation.rows.len(), 2);
        assert_eq!(reconciliation.rows[0].status, STATUS_ABSENT);
        assert_eq!(reconciliation.rows[0].check_in, NOT_AVAILABLE);
    }

    #[test]
    fn test_unwrap_list_envelopes() {
        assert_eq!(unwrap_list(json!({"data": [1, 2]})), json!([1, 2]));
        assert_eq!(unwrap_list(json!({"records": [3]})), json!([3]));
        assert_eq!(unwrap_list(json!([4])), json!([4]));
        assert_eq!(unwrap_list(json!({"data": "nope"})), json!({"data": "nope"}));
    }
}
