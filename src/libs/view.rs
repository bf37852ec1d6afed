use super::formatter::format_elapsed;
use super::punch::PunchSession;
use super::reconcile::AttendanceRow;
use super::report::AttendanceTotals;
use crate::api::HealthReport;
use anyhow::Result;
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    pub fn attendance(rows: &[AttendanceRow]) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(row!["DATE", "CHECK IN", "CHECK OUT", "HOURS", "STATUS", "REMARK"]);
        for attendance in rows {
            table.add_row(row![
                attendance.date,
                attendance.check_in,
                attendance.check_out,
                attendance.hours,
                attendance.status,
                attendance.remark
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn totals(totals: &AttendanceTotals) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(row!["TOTAL DAYS", "PRESENT", "ABSENT", "LATE", "OVERTIME"]);
        table.add_row(row![
            totals.total_days,
            totals.present,
            totals.absent,
            totals.late,
            totals.overtime
        ]);
        table.printstd();

        Ok(())
    }

    pub fn session(session: &PunchSession) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);

        table.add_row(row!["State", session.state()]);
        if let Some(record_id) = &session.attendance_record_id {
            table.add_row(row!["Record", record_id]);
        }
        if let Some(date) = &session.date {
            table.add_row(row!["Date", date]);
        }
        if let Some(check_in) = &session.check_in {
            table.add_row(row!["Check in", check_in]);
        }
        if session.is_punched_in {
            table.add_row(row!["Elapsed", format_elapsed(session.elapsed_seconds)]);
            table.add_row(row!["Late", if session.late { "yes" } else { "no" }]);
        }
        table.printstd();

        Ok(())
    }

    pub fn health(report: &HealthReport) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);

        table.add_row(row!["URL", report.url]);
        table.add_row(row!["Reachable", if report.success { "yes" } else { "no" }]);
        table.add_row(row![
            "Status",
            report.status.map(|status| status.to_string()).unwrap_or_else(|| "-".to_string())
        ]);
        table.add_row(row!["Time", format!("{} ms", report.elapsed_ms)]);
        if let Some(error) = &report.error {
            table.add_row(row!["Error", error]);
        }
        table.printstd();

        Ok(())
    }
}
