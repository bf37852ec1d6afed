use super::mount;
use crate::{
    libs::{messages::Message, report::AttendanceTotals, view::View},
    msg_print,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let (clock, reconciliation) = mount().await?;

    msg_print!(Message::SummaryHeader(clock.employee_id().to_string()), true);
    View::totals(&AttendanceTotals::from_rows(&reconciliation.rows))
}
