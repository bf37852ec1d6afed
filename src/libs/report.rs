//! Attendance history summaries, filtering and ordering.

use crate::libs::formatter::parse_date_wire;
use crate::libs::reconcile::{AttendanceRow, STATUS_ABSENT, STATUS_PRESENT};
use clap::ValueEnum;
use std::cmp::Ordering;

/// Counts shown above the attendance history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceTotals {
    pub total_days: usize,
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub overtime: usize,
}

impl AttendanceTotals {
    pub fn from_rows(rows: &[AttendanceRow]) -> Self {
        Self {
            total_days: rows.len(),
            present: rows.iter().filter(|row| row.status == STATUS_PRESENT).count(),
            absent: rows.iter().filter(|row| row.status == STATUS_ABSENT).count(),
            late: rows.iter().filter(|row| row.remark.contains("Late")).count(),
            overtime: rows.iter().filter(|row| row.remark.contains("Overtime")).count(),
        }
    }
}

/// Row filters; empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    /// Exact status, e.g. `Present`.
    pub status: Option<String>,
    /// Substring of the wire date, e.g. `2025-03`.
    pub date: Option<String>,
    /// Case-insensitive text searched in date, status, remark, check-in and check-out.
    pub search: Option<String>,
}

impl RowFilter {
    pub fn matches(&self, row: &AttendanceRow) -> bool {
        if let Some(status) = non_empty(&self.status) {
            if row.status != status {
                return false;
            }
        }
        if let Some(date) = non_empty(&self.date) {
            if !row.date.contains(date) {
                return false;
            }
        }
        if let Some(search) = non_empty(&self.search) {
            let search = search.to_lowercase();
            return [&row.date, &row.status, &row.remark, &row.check_in, &row.check_out]
                .iter()
                .any(|field| field.to_lowercase().contains(&search));
        }
        true
    }

    pub fn apply(&self, rows: &[AttendanceRow]) -> Vec<AttendanceRow> {
        rows.iter().filter(|row| self.matches(row)).cloned().collect()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    #[default]
    Date,
    CheckIn,
    CheckOut,
    Hours,
    Status,
    Remark,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// Orders rows in place; dates compare chronologically, other columns as lowercase text.
pub fn sort_rows(rows: &mut [AttendanceRow], key: SortKey, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare(a: &AttendanceRow, b: &AttendanceRow, key: SortKey) -> Ordering {
    let text = |row: &AttendanceRow| -> String {
        match key {
            SortKey::Date => row.date.clone(),
            SortKey::CheckIn => row.check_in.clone(),
            SortKey::CheckOut => row.check_out.clone(),
            SortKey::Hours => row.hours.clone(),
            SortKey::Status => row.status.clone(),
            SortKey::Remark => row.remark.clone(),
        }
        .to_lowercase()
    };

    match key {
        SortKey::Date => parse_date_wire(&a.date).cmp(&parse_date_wire(&b.date)),
        _ => text(a).cmp(&text(b)),
    }
}
