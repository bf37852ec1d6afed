use super::mount;
use crate::{
    libs::{
        messages::Message,
        report::{sort_rows, RowFilter, SortDirection, SortKey},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Only rows with this status, e.g. Present or Absent
    #[arg(long)]
    status: Option<String>,
    /// Only rows whose date contains this text, e.g. 2025-03
    #[arg(long)]
    date: Option<String>,
    /// Case-insensitive text to look for in any column
    #[arg(short, long)]
    search: Option<String>,
    #[arg(long, value_enum, default_value_t = SortKey::Date)]
    sort: SortKey,
    /// Sort ascending instead of descending
    #[arg(long)]
    asc: bool,
}

pub async fn cmd(args: HistoryArgs) -> Result<()> {
    let (clock, reconciliation) = mount().await?;
    if reconciliation.rows.is_empty() {
        msg_info!(Message::NoAttendanceRecords);
        return Ok(());
    }

    let filter = RowFilter {
        status: args.status,
        date: args.date,
        search: args.search,
    };
    let mut rows = filter.apply(&reconciliation.rows);
    if rows.is_empty() {
        msg_info!(Message::NoRowsMatchFilter);
        return Ok(());
    }

    let direction = if args.asc { SortDirection::Ascending } else { SortDirection::Descending };
    sort_rows(&mut rows, args.sort, direction);

    msg_print!(Message::HistoryHeader(clock.employee_id().to_string()), true);
    View::attendance(&rows)
}
