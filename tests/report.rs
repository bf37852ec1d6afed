#[cfg(test)]
mod tests {
    use punchclock::libs::attendance::WireId;
    use punchclock::libs::reconcile::AttendanceRow;
    use punchclock::libs::report::{sort_rows, AttendanceTotals, RowFilter, SortDirection, SortKey};

    fn row(id: i64, date: &str, check_in: &str, status: &str, remark: &str) -> AttendanceRow {
        AttendanceRow {
            id: WireId::from(id),
            date: date.to_string(),
            check_in: check_in.to_string(),
            check_out: "N/A".to_string(),
            hours: "0h".to_string(),
            status: status.to_string(),
            remark: remark.to_string(),
        }
    }

    fn rows() -> Vec<AttendanceRow> {
        vec![
            row(1, "2025-03-12", "09:00:00", "Present", "Good"),
            row(2, "2025-02-28", "10:30:00", "Present", "Late arrival"),
            row(3, "2025-03-13", "N/A", "Absent", ""),
            row(4, "2025-03-14", "08:00:00", "Present", "Overtime approved"),
        ]
    }

    #[test]
    fn test_totals() {
        let totals = AttendanceTotals::from_rows(&rows());
        assert_eq!(
            totals,
            AttendanceTotals {
                total_days: 4,
                present: 3,
                absent: 1,
                late: 1,
                overtime: 1,
            }
        );
        assert_eq!(AttendanceTotals::from_rows(&[]), AttendanceTotals::default());
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        assert_eq!(RowFilter::default().apply(&rows()).len(), 4);

        let blank = RowFilter {
            status: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(blank.apply(&rows()).len(), 4);
    }

    #[test]
    fn test_filter_by_status_and_date() {
        let filter = RowFilter {
            status: Some("Present".to_string()),
            date: Some("2025-03".to_string()),
            search: None,
        };
        let ids: Vec<WireId> = filter.apply(&rows()).into_iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![WireId::from(1), WireId::from(4)]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = RowFilter {
            search: Some("LATE".to_string()),
            ..Default::default()
        };
        let found = filter.apply(&rows());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, WireId::from(2));
    }

    #[test]
    fn test_sort_by_date_descending_by_default() {
        let mut rows = rows();
        sort_rows(&mut rows, SortKey::default(), SortDirection::default());
        let dates: Vec<&str> = rows.iter().map(|row| row.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-03-14", "2025-03-13", "2025-03-12", "2025-02-28"]);
    }

    #[test]
    fn test_sort_by_text_column_ascending() {
        let mut rows = rows();
        sort_rows(&mut rows, SortKey::CheckIn, SortDirection::Ascending);
        let times: Vec<&str> = rows.iter().map(|row| row.check_in.as_str()).collect();
        assert_eq!(times, vec!["08:00:00", "09:00:00", "10:30:00", "N/A"]);
    }
}
